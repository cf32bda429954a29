//! Shapes as they may appear on disk or in an import, including older variants.
//! Nothing outside `migrate` should consume these directly.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawNumber {
    Int(i64),
    Text(String),
}

impl RawNumber {
    pub fn as_u32(&self) -> Option<u32> {
        match self {
            RawNumber::Int(n) => u32::try_from(*n).ok(),
            RawNumber::Text(s) => s.trim().parse::<u32>().ok(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawFlag {
    Bool(bool),
    Text(String),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawScore {
    pub own: Option<RawNumber>,
    pub opponent: Option<RawNumber>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawScorer {
    // Older records list one name per goal
    Name(String),
    Entry {
        name: Option<String>,
        goals: Option<RawNumber>,
        #[serde(default)]
        from_bench: bool,
    },
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawLineup {
    pub starters_by_position: Option<BTreeMap<String, Vec<String>>>,
    // Flat starter list written before positions were tracked
    #[serde(default)]
    pub starters: Vec<String>,
    #[serde(default)]
    pub substitutes: Vec<String>,
    #[serde(default)]
    pub unavailable: Vec<String>,
    #[serde(default)]
    pub injured: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawMatch {
    pub date: Option<String>,
    pub opponent: Option<String>,
    pub competition: Option<String>,
    pub table_position: Option<RawNumber>,
    pub venue: Option<String>,
    pub score: Option<RawScore>,
    #[serde(default)]
    pub own_scorers: Vec<RawScorer>,
    #[serde(default)]
    pub opponent_scorers: Vec<RawScorer>,
    pub coach: Option<String>,
    pub lineup: Option<RawLineup>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawPlayer {
    Name(String),
    Entry {
        name: Option<String>,
        position: Option<String>,
        status: Option<String>,
    },
}

/// Player files are either `{"players": [...]}` or a bare list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawPlayerFile {
    List(Vec<RawPlayer>),
    Wrapped {
        #[serde(default)]
        players: Vec<RawPlayer>,
    },
}

impl RawPlayerFile {
    pub fn into_players(self) -> Vec<RawPlayer> {
        match self {
            RawPlayerFile::Wrapped { players } => players,
            RawPlayerFile::List(players) => players,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawFixture {
    pub date: Option<String>,
    pub opponent: Option<String>,
    // Free text such as "Club x Rival"; used when `opponent` is absent
    pub matchup: Option<String>,
    #[serde(alias = "home")]
    pub venue: Option<RawFlag>,
    #[serde(alias = "tournament")]
    pub competition: Option<String>,
}
