//! Session and vocabulary configuration.

use alloc::string::String;
use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::deck::{DOMAIN_WORDS, PROMPT_WORDS};

/// Whether a new session shows its first pair immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum RevealMode {
    /// Cards start face-down; the first deal turns them over.
    #[default]
    FaceDown,
    /// The initial pair is visible right away.
    FaceUp,
}

impl RevealMode {
    /// Returns `true` for [`RevealMode::FaceUp`].
    #[must_use]
    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::FaceUp)
    }
}

/// Configuration options for a deal session.
///
/// ```
/// use pairdeal::{DealOptions, RevealMode};
///
/// let options = DealOptions::default().with_initial_reveal(RevealMode::FaceUp);
/// assert_eq!(options.initial_reveal, RevealMode::FaceUp);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct DealOptions {
    /// Reveal state of a freshly created session.
    pub initial_reveal: RevealMode,
}

impl DealOptions {
    /// Sets the initial reveal state.
    ///
    /// # Example
    ///
    /// ```
    /// use pairdeal::{DealOptions, RevealMode};
    ///
    /// let options = DealOptions::default().with_initial_reveal(RevealMode::FaceDown);
    /// assert!(!options.initial_reveal.is_revealed());
    /// ```
    #[must_use]
    pub const fn with_initial_reveal(mut self, reveal: RevealMode) -> Self {
        self.initial_reveal = reveal;
        self
    }
}

/// Substitutable vocabularies, deserialized from `{promptWords, domainWords}`
/// when the `serde` feature is enabled.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct DeckConfig {
    /// Words for the prompt card.
    pub prompt_words: Vec<String>,
    /// Words for the domain card.
    pub domain_words: Vec<String>,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            prompt_words: PROMPT_WORDS.iter().map(|&word| word.into()).collect(),
            domain_words: DOMAIN_WORDS.iter().map(|&word| word.into()).collect(),
        }
    }
}

impl DeckConfig {
    /// Replaces the prompt words.
    ///
    /// # Example
    ///
    /// ```
    /// use pairdeal::DeckConfig;
    ///
    /// let config = DeckConfig::default().with_prompt_words(["WHY?"]);
    /// assert_eq!(config.prompt_words, vec!["WHY?".to_string()]);
    /// ```
    #[must_use]
    pub fn with_prompt_words<I>(mut self, words: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.prompt_words = words.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the domain words.
    ///
    /// # Example
    ///
    /// ```
    /// use pairdeal::DeckConfig;
    ///
    /// let config = DeckConfig::default().with_domain_words(["Culture"]);
    /// assert_eq!(config.domain_words, vec!["Culture".to_string()]);
    /// ```
    #[must_use]
    pub fn with_domain_words<I>(mut self, words: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.domain_words = words.into_iter().map(Into::into).collect();
        self
    }
}
