//! Theater domain errors

use thiserror::Error;

/// Errors that can occur while building catalogs or producing statements
///
/// These are data-integrity failures, not transient ones: statement
/// generation aborts on the first error and no partial output is returned.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TheaterError {
    /// A play record names a genre the pricing rules do not cover
    #[error("unknown type: {genre}")]
    UnknownGenre { genre: String },

    /// A performance references a play that is missing from the catalog
    #[error("Play not found in catalog: {play_id}")]
    PlayNotFound { play_id: String },

    /// Catalog records repeat a play id
    #[error("Duplicate play id in catalog: {play_id}")]
    DuplicatePlay { play_id: String },
}

impl TheaterError {
    /// Creates an unknown genre error
    pub fn unknown_genre(genre: impl Into<String>) -> Self {
        TheaterError::UnknownGenre { genre: genre.into() }
    }

    /// Creates a play not found error
    pub fn play_not_found(play_id: impl std::fmt::Display) -> Self {
        TheaterError::PlayNotFound { play_id: play_id.to_string() }
    }
}
