//! Render-ready card faces.

use alloc::borrow::Cow;

/// Placeholder title shown on a face-down card.
pub const HIDDEN_TITLE: &str = "?";

/// Which vocabulary a card was drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardKind {
    /// The AI card, carrying a prompt word.
    Prompt,
    /// The DATA card, carrying a domain word.
    Domain,
}

impl CardKind {
    /// Caption printed under the card title.
    #[must_use]
    pub const fn hint(self) -> &'static str {
        match self {
            Self::Prompt => "AI card",
            Self::Domain => "DATA card",
        }
    }
}

/// One of the two cards on the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card<'a> {
    /// The card's vocabulary.
    pub kind: CardKind,
    /// The drawn word.
    pub word: &'a str,
    /// Whether the word is visible.
    pub revealed: bool,
}

impl<'a> Card<'a> {
    /// Creates a new card.
    #[must_use]
    pub const fn new(kind: CardKind, word: &'a str, revealed: bool) -> Self {
        Self {
            kind,
            word,
            revealed,
        }
    }

    /// Returns the title to display.
    ///
    /// Face-down cards show [`HIDDEN_TITLE`]. Domain words are shown
    /// upper-cased, prompt words as drawn.
    #[must_use]
    pub fn title(&self) -> Cow<'a, str> {
        if !self.revealed {
            return Cow::Borrowed(HIDDEN_TITLE);
        }

        match self.kind {
            CardKind::Prompt => Cow::Borrowed(self.word),
            CardKind::Domain => Cow::Owned(self.word.to_uppercase()),
        }
    }
}
