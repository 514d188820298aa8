//! A two-card dealing engine with optional `no_std` support.
//!
//! The crate provides a [`DealState`] type that holds one session's pair of
//! cards: a prompt word from the AI list and a domain word from the DATA list.
//! Each [`DealState::deal`] redraws both words and turns the cards face-up.
//!
//! # Example
//!
//! ```
//! use pairdeal::{DealOptions, DealState, Deck};
//!
//! let deck = Deck::new(["WHY?"], ["Culture"]).unwrap();
//! let mut session = DealState::new(deck, DealOptions::default(), 42);
//! session.deal();
//! assert_eq!(session.current().as_tuple(), ("WHY?", "Culture", true));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod asset;
pub mod card;
pub mod deck;
pub mod error;
pub mod options;
pub mod session;

// Re-export main types
pub use card::{Card, CardKind, HIDDEN_TITLE};
pub use deck::{DOMAIN_WORDS, Deck, PROMPT_WORDS, draw};
#[cfg(feature = "std")]
pub use error::AssetError;
pub use error::{DeckError, DrawError};
pub use options::{DealOptions, DeckConfig, RevealMode};
pub use session::{DealState, Face, Pair};
