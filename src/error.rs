//! Error types for deck, deal and asset operations.

#[cfg(feature = "std")]
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when drawing from a word list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// The word list has no elements.
    #[error("cannot draw from an empty word list")]
    EmptyDeck,
}

/// Errors that can occur when building a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The prompt word list is empty.
    #[error("prompt word list is empty")]
    EmptyPromptWords,
    /// The domain word list is empty.
    #[error("domain word list is empty")]
    EmptyDomainWords,
}

/// Errors that can occur when embedding an image asset.
#[cfg(feature = "std")]
#[derive(Debug, Error)]
pub enum AssetError {
    /// No file exists at the given path.
    #[error("asset not found: {}", .0.display())]
    NotFound(PathBuf),
    /// The file exists but could not be read.
    #[error("failed to read asset")]
    Io(#[from] std::io::Error),
}
