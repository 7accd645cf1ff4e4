//! Play catalog
//!
//! The catalog is the boundary where raw play records from outside the
//! domain are validated. Once a [`PlayCatalog`] exists, every play in it has
//! a recognised genre.

use serde::{Deserialize, Serialize};
use std::collections::btree_map::{self, BTreeMap, Entry};
use tracing::warn;

use core_kernel::PlayId;

use crate::error::TheaterError;
use crate::performance::Performance;
use crate::play::{Genre, Play};

/// Raw play record as supplied by external catalog data
///
/// The genre is kept as an unvalidated string until
/// [`PlayCatalog::from_records`] parses it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl PlayRecord {
    /// Creates a raw record
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
        }
    }

    /// Validates the record into a play
    ///
    /// # Errors
    ///
    /// Returns `UnknownGenre` if the record's type is not a supported genre
    pub fn into_play(self) -> Result<Play, TheaterError> {
        let genre: Genre = self.kind.parse().map_err(|err| {
            warn!(play = %self.name, %err, "Rejected play record");
            err
        })?;
        Ok(Play::new(self.name, genre))
    }
}

/// Immutable mapping from play id to play
///
/// Deserializes from a JSON object of raw records keyed by play id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "BTreeMap<String, PlayRecord>")]
pub struct PlayCatalog {
    plays: BTreeMap<PlayId, Play>,
}

impl PlayCatalog {
    /// Creates an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from raw records, validating every genre
    ///
    /// # Errors
    ///
    /// * `UnknownGenre` - the first record whose type is not a supported genre
    /// * `DuplicatePlay` - a play id appears more than once
    pub fn from_records<I, K>(records: I) -> Result<Self, TheaterError>
    where
        I: IntoIterator<Item = (K, PlayRecord)>,
        K: Into<PlayId>,
    {
        let mut catalog = Self::new();
        for (id, record) in records {
            catalog.insert(id, record.into_play()?)?;
        }
        Ok(catalog)
    }

    /// Adds a play under the given id
    ///
    /// # Errors
    ///
    /// Returns `DuplicatePlay` if the id is already present
    pub fn insert(&mut self, id: impl Into<PlayId>, play: Play) -> Result<(), TheaterError> {
        match self.plays.entry(id.into()) {
            Entry::Occupied(entry) => Err(TheaterError::DuplicatePlay {
                play_id: entry.key().to_string(),
            }),
            Entry::Vacant(entry) => {
                entry.insert(play);
                Ok(())
            }
        }
    }

    /// Adds a play, consuming and returning the catalog
    pub fn with_play(mut self, id: impl Into<PlayId>, play: Play) -> Result<Self, TheaterError> {
        self.insert(id, play)?;
        Ok(self)
    }

    /// Looks up a play by id
    pub fn get(&self, id: &str) -> Option<&Play> {
        self.plays.get(id)
    }

    /// Resolves the play a performance refers to
    ///
    /// # Errors
    ///
    /// Returns `PlayNotFound` if the performance's play id is not in the catalog
    pub fn resolve(&self, performance: &Performance) -> Result<&Play, TheaterError> {
        self.get(performance.play_id().as_str())
            .ok_or_else(|| TheaterError::play_not_found(performance.play_id()))
    }

    /// Returns true if the id is present
    pub fn contains(&self, id: &str) -> bool {
        self.plays.contains_key(id)
    }

    /// Returns the number of plays
    pub fn len(&self) -> usize {
        self.plays.len()
    }

    /// Returns true if the catalog has no plays
    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }

    /// Iterates plays in id order
    pub fn iter(&self) -> btree_map::Iter<'_, PlayId, Play> {
        self.plays.iter()
    }
}

impl TryFrom<BTreeMap<String, PlayRecord>> for PlayCatalog {
    type Error = TheaterError;

    fn try_from(records: BTreeMap<String, PlayRecord>) -> Result<Self, Self::Error> {
        Self::from_records(records)
    }
}

impl<'a> IntoIterator for &'a PlayCatalog {
    type Item = (&'a PlayId, &'a Play);
    type IntoIter = btree_map::Iter<'a, PlayId, Play>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_records_validates_genres() {
        let catalog = PlayCatalog::from_records([
            ("hamlet", PlayRecord::new("Hamlet", "tragedy")),
            ("as-like", PlayRecord::new("As You Like It", "comedy")),
        ])
        .unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("hamlet"), Some(&Play::tragedy("Hamlet")));
        assert_eq!(catalog.get("as-like").map(Play::genre), Some(Genre::Comedy));
    }

    #[test]
    fn test_from_records_rejects_unknown_genre() {
        let result = PlayCatalog::from_records([
            ("hamlet", PlayRecord::new("Hamlet", "tragedy")),
            ("henry-v", PlayRecord::new("Henry V", "history")),
        ]);

        assert_eq!(result, Err(TheaterError::unknown_genre("history")));
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let result = PlayCatalog::from_records([
            ("hamlet", PlayRecord::new("Hamlet", "tragedy")),
            ("hamlet", PlayRecord::new("Hamlet (revival)", "tragedy")),
        ]);

        assert_eq!(
            result,
            Err(TheaterError::DuplicatePlay { play_id: "hamlet".to_string() })
        );
    }

    #[test]
    fn test_resolve_missing_play() {
        let catalog = PlayCatalog::new();
        let err = catalog.resolve(&Performance::new("macbeth", 10)).unwrap_err();
        assert_eq!(err, TheaterError::PlayNotFound { play_id: "macbeth".to_string() });
    }

    #[test]
    fn test_deserialize_from_json_map() {
        let json = r#"{
            "hamlet": {"name": "Hamlet", "type": "tragedy"},
            "othello": {"name": "Othello", "type": "tragedy"}
        }"#;
        let catalog: PlayCatalog = serde_json::from_str(json).unwrap();

        let ids: Vec<&str> = catalog.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(ids, vec!["hamlet", "othello"]);
    }

    #[test]
    fn test_deserialize_rejects_unknown_genre() {
        let json = r#"{"henry-v": {"name": "Henry V", "type": "history"}}"#;
        let err = serde_json::from_str::<PlayCatalog>(json).unwrap_err();
        assert!(err.to_string().contains("unknown type: history"));
    }
}
