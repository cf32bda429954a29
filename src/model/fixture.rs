use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::match_record::Venue;

/// A scheduled match that has not been played yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    #[serde(with = "crate::dates::serde_date")]
    pub date: NaiveDate,
    pub opponent: String,
    // None when the source did not say where the match is played
    #[serde(default)]
    pub venue: Option<Venue>,
    #[serde(default)]
    pub competition: String,
}
