//! Session state types.

use crate::options::RevealMode;

/// Which way up the cards are lying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    /// Words are hidden.
    FaceDown,
    /// Words are visible.
    FaceUp,
}

impl Face {
    /// Returns `true` for [`Face::FaceUp`].
    #[must_use]
    pub const fn is_up(self) -> bool {
        matches!(self, Self::FaceUp)
    }
}

impl From<RevealMode> for Face {
    fn from(mode: RevealMode) -> Self {
        if mode.is_revealed() {
            Self::FaceUp
        } else {
            Self::FaceDown
        }
    }
}

/// Snapshot of the pair currently on the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pair<'a> {
    /// Current prompt word.
    pub prompt: &'a str,
    /// Current domain word.
    pub domain: &'a str,
    /// Whether the pair is shown.
    pub revealed: bool,
}

impl<'a> Pair<'a> {
    /// Returns the snapshot as a `(prompt, domain, revealed)` tuple.
    #[must_use]
    pub const fn as_tuple(&self) -> (&'a str, &'a str, bool) {
        (self.prompt, self.domain, self.revealed)
    }
}
