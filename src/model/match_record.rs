use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::lineup::Lineup;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Venue {
    #[default]
    Home,
    Away,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Score {
    pub own: u32,
    pub opponent: u32,
}

impl Score {
    pub fn new(own: u32, opponent: u32) -> Self {
        Self { own, opponent }
    }

    pub fn result(&self) -> MatchResult {
        match self.own.cmp(&self.opponent) {
            std::cmp::Ordering::Greater => MatchResult::Win,
            std::cmp::Ordering::Equal => MatchResult::Draw,
            std::cmp::Ordering::Less => MatchResult::Loss,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchResult {
    Win,
    Draw,
    Loss,
}

impl MatchResult {
    pub fn points(self) -> u32 {
        match self {
            MatchResult::Win => 3,
            MatchResult::Draw => 1,
            MatchResult::Loss => 0,
        }
    }

    pub fn is_unbeaten(self) -> bool {
        !matches!(self, MatchResult::Loss)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnScorer {
    pub name: String,
    pub goals: u32,
    #[serde(default)]
    pub from_bench: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpponentScorer {
    pub name: String,
    pub goals: u32,
}

/// One played match, in canonical form. Built by `migrate` from whatever was stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    #[serde(with = "crate::dates::serde_date")]
    pub date: NaiveDate,
    pub opponent: String,
    pub competition: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_position: Option<u32>,
    pub venue: Venue,
    pub score: Score,
    #[serde(default)]
    pub own_scorers: Vec<OwnScorer>,
    #[serde(default)]
    pub opponent_scorers: Vec<OpponentScorer>,
    pub coach: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lineup: Option<Lineup>,
    #[serde(default)]
    pub notes: String,
}

impl MatchRecord {
    pub fn result(&self) -> MatchResult {
        self.score.result()
    }
}
