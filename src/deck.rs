//! Word lists and uniform draws.

use alloc::string::String;
use alloc::vec::Vec;

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::error::{DeckError, DrawError};
use crate::options::DeckConfig;

/// Built-in prompt words shown on the AI card.
pub const PROMPT_WORDS: [&str; 9] = [
    "WHY?",
    "HOW?",
    "WHO?",
    "WHEN?",
    "WHAT?",
    "WHERE?",
    "WHAT FOR?",
    "WHAT IF?",
    "WHICH?",
];

/// Built-in domain words shown on the DATA card.
pub const DOMAIN_WORDS: [&str; 9] = [
    "Marketing",
    "Communications",
    "Training",
    "Change Management",
    "Leadership",
    "Tools",
    "Governance",
    "Mindset",
    "Culture",
];

/// Draws one word uniformly at random, with replacement.
///
/// # Errors
///
/// Returns [`DrawError::EmptyDeck`] if `words` is empty.
///
/// # Example
///
/// ```
/// use pairdeal::deck::draw;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(7);
/// let word = draw(&["WHY?", "HOW?"], &mut rng).unwrap();
/// assert!(word == "WHY?" || word == "HOW?");
/// ```
pub fn draw<'a, S, R>(words: &'a [S], rng: &mut R) -> Result<&'a str, DrawError>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    words
        .choose(rng)
        .map(AsRef::as_ref)
        .ok_or(DrawError::EmptyDeck)
}

/// Picks from a list known to be non-empty.
fn pick<'a, R: Rng + ?Sized>(words: &'a [String], rng: &mut R) -> &'a str {
    &words[rng.random_range(0..words.len())]
}

/// The pair of vocabularies a deal draws from.
///
/// Both lists are guaranteed non-empty, so the `draw_*` methods never fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    prompt_words: Vec<String>,
    domain_words: Vec<String>,
}

impl Deck {
    /// Creates a deck from two word lists.
    ///
    /// # Errors
    ///
    /// Returns an error if either list is empty. The prompt list is checked first.
    pub fn new<P, D>(prompt_words: P, domain_words: D) -> Result<Self, DeckError>
    where
        P: IntoIterator,
        P::Item: Into<String>,
        D: IntoIterator,
        D::Item: Into<String>,
    {
        let prompt_words: Vec<String> = prompt_words.into_iter().map(Into::into).collect();
        if prompt_words.is_empty() {
            return Err(DeckError::EmptyPromptWords);
        }

        let domain_words: Vec<String> = domain_words.into_iter().map(Into::into).collect();
        if domain_words.is_empty() {
            return Err(DeckError::EmptyDomainWords);
        }

        Ok(Self {
            prompt_words,
            domain_words,
        })
    }

    /// Creates a deck from a vocabulary configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if either configured list is empty.
    pub fn from_config(config: DeckConfig) -> Result<Self, DeckError> {
        Self::new(config.prompt_words, config.domain_words)
    }

    /// Returns the prompt words.
    #[must_use]
    pub fn prompt_words(&self) -> &[String] {
        &self.prompt_words
    }

    /// Returns the domain words.
    #[must_use]
    pub fn domain_words(&self) -> &[String] {
        &self.domain_words
    }

    /// Draws a prompt word.
    pub fn draw_prompt<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        pick(&self.prompt_words, rng)
    }

    /// Draws a domain word.
    pub fn draw_domain<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        pick(&self.domain_words, rng)
    }
}

impl Default for Deck {
    fn default() -> Self {
        let DeckConfig {
            prompt_words,
            domain_words,
        } = DeckConfig::default();
        Self {
            prompt_words,
            domain_words,
        }
    }
}

impl TryFrom<DeckConfig> for Deck {
    type Error = DeckError;

    fn try_from(config: DeckConfig) -> Result<Self, Self::Error> {
        Self::from_config(config)
    }
}
