//! Deal session and state management.

use alloc::string::String;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, CardKind};
use crate::deck::Deck;
use crate::options::DealOptions;

pub mod state;

pub use state::{Face, Pair};

/// The pair of cards shown to one user session.
///
/// A session always holds a drawn pair, starting from the draw made at
/// construction. [`DealState::deal`] is the only mutator: it redraws both
/// words independently and turns the cards face-up. Cards never go back
/// face-down.
#[derive(Debug, Clone)]
pub struct DealState<R = ChaCha8Rng> {
    deck: Deck,
    current_prompt: String,
    current_domain: String,
    face: Face,
    deals: u64,
    rng: R,
}

impl DealState<ChaCha8Rng> {
    /// Creates a new session with the given seed.
    ///
    /// The same seed and deck always produce the same sequence of pairs.
    ///
    /// # Example
    ///
    /// ```
    /// use pairdeal::{DealOptions, DealState, Deck};
    ///
    /// let mut session = DealState::new(Deck::default(), DealOptions::default(), 42);
    /// assert!(!session.current().revealed);
    ///
    /// session.deal();
    /// assert!(session.current().revealed);
    /// ```
    #[must_use]
    pub fn new(deck: Deck, options: DealOptions, seed: u64) -> Self {
        Self::with_rng(deck, options, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> DealState<R> {
    /// Creates a new session drawing from an injected random source.
    #[must_use]
    pub fn with_rng(deck: Deck, options: DealOptions, mut rng: R) -> Self {
        let current_prompt: String = deck.draw_prompt(&mut rng).into();
        let current_domain: String = deck.draw_domain(&mut rng).into();
        let face = Face::from(options.initial_reveal);

        tracing::debug!(
            prompt = %current_prompt,
            domain = %current_domain,
            revealed = face.is_up(),
            "session created"
        );

        Self {
            deck,
            current_prompt,
            current_domain,
            face,
            deals: 0,
            rng,
        }
    }

    /// Deals a fresh pair and turns both cards face-up.
    ///
    /// The prompt and domain are drawn independently of each other and of
    /// every earlier draw, so the same word may come up again.
    pub fn deal(&mut self) {
        self.current_prompt = self.deck.draw_prompt(&mut self.rng).into();
        self.current_domain = self.deck.draw_domain(&mut self.rng).into();
        self.face = Face::FaceUp;
        self.deals += 1;

        tracing::debug!(
            prompt = %self.current_prompt,
            domain = %self.current_domain,
            deals = self.deals,
            "dealt pair"
        );
    }
}

impl<R> DealState<R> {
    /// Returns the pair currently on the table.
    #[must_use]
    pub fn current(&self) -> Pair<'_> {
        Pair {
            prompt: &self.current_prompt,
            domain: &self.current_domain,
            revealed: self.face.is_up(),
        }
    }

    /// Returns both cards, prompt first, ready for display.
    #[must_use]
    pub fn cards(&self) -> [Card<'_>; 2] {
        let revealed = self.face.is_up();
        [
            Card::new(CardKind::Prompt, &self.current_prompt, revealed),
            Card::new(CardKind::Domain, &self.current_domain, revealed),
        ]
    }

    /// Returns which way up the cards are lying.
    #[must_use]
    pub const fn face(&self) -> Face {
        self.face
    }

    /// Returns whether the current pair is shown.
    #[must_use]
    pub const fn is_revealed(&self) -> bool {
        self.face.is_up()
    }

    /// Returns the number of deals since the session was created.
    #[must_use]
    pub const fn deals(&self) -> u64 {
        self.deals
    }

    /// Returns the deck this session draws from.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }
}
