//! A single billed performance

use serde::{Deserialize, Serialize};

use core_kernel::PlayId;

/// One performance on an invoice: which play, and how many seats were filled
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Performance {
    /// Catalog key of the performed play
    #[serde(rename = "playID")]
    pub play_id: PlayId,
    /// Number of attendees
    pub audience: u32,
}

impl Performance {
    /// Creates a new performance
    pub fn new(play_id: impl Into<PlayId>, audience: u32) -> Self {
        Self {
            play_id: play_id.into(),
            audience,
        }
    }

    /// Returns the play id
    pub fn play_id(&self) -> &PlayId {
        &self.play_id
    }

    /// Returns the audience size
    pub fn audience(&self) -> u32 {
        self.audience
    }
}
