use serde::{Deserialize, Serialize};

use crate::model::lineup::Position;

/// Squad status. Any status can move to any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Starter,
    #[default]
    Substitute,
    Unavailable,
    Injured,
}

impl Status {
    pub fn label(self) -> &'static str {
        match self {
            Status::Starter => "Starter",
            Status::Substitute => "Substitute",
            Status::Unavailable => "Unavailable",
            Status::Injured => "Injured",
        }
    }

    pub fn parse(s: &str) -> Option<Status> {
        match s.trim().to_lowercase().as_str() {
            "starter" => Some(Status::Starter),
            "substitute" | "sub" => Some(Status::Substitute),
            "unavailable" | "not selected" => Some(Status::Unavailable),
            "injured" => Some(Status::Injured),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub name: String,
    pub position: Position,
    pub status: Status,
}

impl RosterEntry {
    pub fn new(name: impl Into<String>, position: Position, status: Status) -> Self {
        Self { name: name.into(), position, status }
    }
}

/// A former squad member. Status is not kept once a player leaves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub name: String,
    pub position: Position,
}
