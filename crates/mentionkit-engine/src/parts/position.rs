use serde::{Deserialize, Serialize};

/// A character range `[start, end)` into the plain-text projection.
///
/// Offsets count Unicode scalar values, not bytes, so they line up with the
/// caret positions a text field reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    /// First character covered.
    pub start: usize,
    /// One past the last character covered.
    pub end: usize,
}

impl Position {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// A collapsed position (caret) at `at`.
    pub fn caret(at: usize) -> Self {
        Self { start: at, end: at }
    }

    /// Number of characters covered; an inverted position covers none.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Whether the position covers no characters.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// True when used as a selection and nothing is selected.
    #[must_use]
    pub fn is_collapsed(self) -> bool {
        self.start == self.end
    }

    /// Moves both bounds forward by `offset`.
    #[must_use]
    pub fn shifted(self, offset: usize) -> Self {
        Self {
            start: self.start + offset,
            end: self.end + offset,
        }
    }
}
