//! Performance pricing and volume credits
//!
//! All amounts are integer minor units (cents). Both calculations are pure
//! functions of the play's genre and the audience size.

use serde::{Deserialize, Serialize};

use crate::performance::Performance;
use crate::play::{Genre, Play};

pub const TRAGEDY_BASE_AMOUNT: i64 = 40_000;
pub const TRAGEDY_EXTRA_AMOUNT_PER_PERSON: i64 = 1_000;
pub const TRAGEDY_AUDIENCE_THRESHOLD: i64 = 30;

pub const COMEDY_BASE_AMOUNT: i64 = 30_000;
pub const COMEDY_AUDIENCE_THRESHOLD: i64 = 20;
pub const COMEDY_OVER_BASE_CAPACITY_AMOUNT: i64 = 10_000;
pub const COMEDY_OVER_BASE_CAPACITY_PER_PERSON: i64 = 500;
pub const COMEDY_AMOUNT_PER_AUDIENCE: i64 = 300;

pub const BASE_VOLUME_CREDIT_THRESHOLD: u32 = 30;
pub const COMEDY_EXTRA_VOLUME_FACTOR: u32 = 5;

/// Minor units per dollar
pub const CURRENCY_CONVERSION_FACTOR: i64 = 100;

/// Charge and credits earned for one performance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PerformanceCharge {
    /// Amount in cents
    pub amount: i64,
    /// Volume credits earned
    pub volume_credits: u32,
}

/// Computes the amount owed for a performance, in cents
///
/// # Arguments
///
/// * `genre` - Genre of the performed play
/// * `audience` - Number of attendees
pub fn amount_for(genre: Genre, audience: u32) -> i64 {
    let audience = i64::from(audience);
    match genre {
        Genre::Tragedy => {
            let mut result = TRAGEDY_BASE_AMOUNT;
            if audience > TRAGEDY_AUDIENCE_THRESHOLD {
                result += TRAGEDY_EXTRA_AMOUNT_PER_PERSON * (audience - TRAGEDY_AUDIENCE_THRESHOLD);
            }
            result
        }
        Genre::Comedy => {
            let mut result = COMEDY_BASE_AMOUNT;
            if audience > COMEDY_AUDIENCE_THRESHOLD {
                result += COMEDY_OVER_BASE_CAPACITY_AMOUNT
                    + COMEDY_OVER_BASE_CAPACITY_PER_PERSON * (audience - COMEDY_AUDIENCE_THRESHOLD);
            }
            result + COMEDY_AMOUNT_PER_AUDIENCE * audience
        }
    }
}

/// Computes the volume credits earned by a performance
///
/// Every genre earns one credit per seat above the threshold. Only comedies
/// earn the extra `audience / 5` term; there is no error path for genres here.
pub fn volume_credits_for(genre: Genre, audience: u32) -> u32 {
    let mut result = audience.saturating_sub(BASE_VOLUME_CREDIT_THRESHOLD);
    if genre == Genre::Comedy {
        result = result.saturating_add(audience / COMEDY_EXTRA_VOLUME_FACTOR);
    }
    result
}

/// Prices a performance of the given play
pub fn price(play: &Play, performance: &Performance) -> PerformanceCharge {
    PerformanceCharge {
        amount: amount_for(play.genre(), performance.audience()),
        volume_credits: volume_credits_for(play.genre(), performance.audience()),
    }
}
