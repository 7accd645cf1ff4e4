//! Plays and their genres
//!
//! The genre decides which pricing formula applies. It is a closed set:
//! raw genre strings are validated once, when a play enters the catalog,
//! so pricing never has to deal with an unrecognised genre.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TheaterError;

/// Play category that determines the pricing formula
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Genre {
    Tragedy,
    Comedy,
}

impl Genre {
    /// Returns the lowercase name used in catalog records
    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Tragedy => "tragedy",
            Genre::Comedy => "comedy",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Genre {
    type Err = TheaterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tragedy" => Ok(Genre::Tragedy),
            "comedy" => Ok(Genre::Comedy),
            other => Err(TheaterError::unknown_genre(other)),
        }
    }
}

impl TryFrom<String> for Genre {
    type Error = TheaterError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Genre> for String {
    fn from(genre: Genre) -> Self {
        genre.as_str().to_string()
    }
}

/// A play that can be performed and billed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Play {
    /// Display name used on statement lines
    pub name: String,
    /// Genre, serialized under the `type` key of catalog records
    #[serde(rename = "type")]
    pub genre: Genre,
}

impl Play {
    /// Creates a new play
    pub fn new(name: impl Into<String>, genre: Genre) -> Self {
        Self {
            name: name.into(),
            genre,
        }
    }

    /// Creates a tragedy
    pub fn tragedy(name: impl Into<String>) -> Self {
        Self::new(name, Genre::Tragedy)
    }

    /// Creates a comedy
    pub fn comedy(name: impl Into<String>) -> Self {
        Self::new(name, Genre::Comedy)
    }

    /// Returns the play's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the play's genre
    pub fn genre(&self) -> Genre {
        self.genre
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genre_parsing() {
        assert_eq!("tragedy".parse::<Genre>(), Ok(Genre::Tragedy));
        assert_eq!("comedy".parse::<Genre>(), Ok(Genre::Comedy));
    }

    #[test]
    fn test_unknown_genre_carries_the_raw_string() {
        let err = "history".parse::<Genre>().unwrap_err();
        assert_eq!(err, TheaterError::UnknownGenre { genre: "history".to_string() });
        assert_eq!(err.to_string(), "unknown type: history");
    }

    #[test]
    fn test_genre_parsing_is_case_sensitive() {
        assert!("Tragedy".parse::<Genre>().is_err());
    }

    #[test]
    fn test_play_serde_uses_type_key() {
        let play: Play = serde_json::from_str(r#"{"name":"Hamlet","type":"tragedy"}"#).unwrap();
        assert_eq!(play, Play::tragedy("Hamlet"));

        let json = serde_json::to_value(Play::comedy("As You Like It")).unwrap();
        assert_eq!(json["type"], "comedy");
    }

    #[test]
    fn test_play_deserialization_rejects_unknown_genre() {
        let err = serde_json::from_str::<Play>(r#"{"name":"Henry V","type":"history"}"#).unwrap_err();
        assert!(err.to_string().contains("unknown type: history"));
    }
}
