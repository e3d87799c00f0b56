//! Parser options.

use ticketlog_commit::Layout;

/// Options controlling how history text is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Layout of the input text.
    pub layout: Layout,

    /// Keep a final record that is not followed by a blank line.
    ///
    /// Only affects [`Layout::Default`]; structured records are always complete.
    pub flush_trailing: bool,
}

impl ParseOptions {
    /// Creates options for the given layout.
    #[must_use]
    pub fn new(layout: Layout) -> Self {
        Self {
            layout,
            ..Self::default()
        }
    }

    /// Sets whether an unterminated final record is kept.
    #[must_use]
    pub fn with_flush_trailing(mut self, flush_trailing: bool) -> Self {
        self.flush_trailing = flush_trailing;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            layout: Layout::default(),
            flush_trailing: true,
        }
    }
}
