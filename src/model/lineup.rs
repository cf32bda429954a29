use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::model::roster::{RosterEntry, Status};
use crate::names::name_key;

/// Pitch positions, in the order a lineup is read (goal outwards).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    Goalkeeper,
    RightBack,
    CenterBack,
    LeftBack,
    DefensiveMidfielder,
    #[default]
    Midfielder,
    Forward,
}

impl Position {
    pub const ALL: [Position; 7] = [
        Position::Goalkeeper,
        Position::RightBack,
        Position::CenterBack,
        Position::LeftBack,
        Position::DefensiveMidfielder,
        Position::Midfielder,
        Position::Forward,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Position::Goalkeeper => "Goalkeeper",
            Position::RightBack => "Right-Back",
            Position::CenterBack => "Center-Back",
            Position::LeftBack => "Left-Back",
            Position::DefensiveMidfielder => "Defensive Midfielder",
            Position::Midfielder => "Midfielder",
            Position::Forward => "Forward",
        }
    }

    /// Lenient parse used for stored and typed-in values. Unknown text yields `None`.
    pub fn parse(s: &str) -> Option<Position> {
        let key = name_key(s).replace(['-', '_'], " ");
        let p = match key.as_str() {
            "goalkeeper" | "goalkeepers" | "gk" => Position::Goalkeeper,
            "right back" | "rb" => Position::RightBack,
            "center back" | "centre back" | "cb" => Position::CenterBack,
            "left back" | "lb" => Position::LeftBack,
            "defensive midfielder" | "defensive mid" | "dm" => Position::DefensiveMidfielder,
            "midfielder" | "mid" | "mf" => Position::Midfielder,
            "forward" | "striker" | "fw" => Position::Forward,
            _ => return None,
        };
        Some(p)
    }
}

/// Where a player sits in one match's lineup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineupSlot {
    Starter(Position),
    Substitute,
    Unavailable,
    Injured,
}

impl LineupSlot {
    pub fn status(self) -> Status {
        match self {
            LineupSlot::Starter(_) => Status::Starter,
            LineupSlot::Substitute => Status::Substitute,
            LineupSlot::Unavailable => Status::Unavailable,
            LineupSlot::Injured => Status::Injured,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Lineup {
    #[serde(default)]
    pub starters_by_position: BTreeMap<Position, Vec<String>>,
    #[serde(default)]
    pub substitutes: Vec<String>,
    #[serde(default)]
    pub unavailable: Vec<String>,
    #[serde(default)]
    pub injured: Vec<String>,
}

impl Lineup {
    /// Seed a lineup from the players' current squad statuses.
    pub fn from_roster(roster: &[RosterEntry]) -> Self {
        let mut lineup = Lineup::default();
        for player in roster {
            let slot = match player.status {
                Status::Starter => LineupSlot::Starter(player.position),
                Status::Substitute => LineupSlot::Substitute,
                Status::Unavailable => LineupSlot::Unavailable,
                Status::Injured => LineupSlot::Injured,
            };
            lineup.push(&player.name, slot);
        }
        lineup
    }

    fn push(&mut self, name: &str, slot: LineupSlot) {
        let name = name.to_string();
        match slot {
            LineupSlot::Starter(pos) => self.starters_by_position.entry(pos).or_default().push(name),
            LineupSlot::Substitute => self.substitutes.push(name),
            LineupSlot::Unavailable => self.unavailable.push(name),
            LineupSlot::Injured => self.injured.push(name),
        }
    }

    /// Move a player to `slot`, removing them from wherever they were.
    pub fn assign(&mut self, name: &str, slot: LineupSlot) {
        self.remove(name);
        self.push(name, slot);
    }

    pub fn remove(&mut self, name: &str) {
        let key = name_key(name);
        let keep = |n: &String| name_key(n) != key;
        for names in self.starters_by_position.values_mut() {
            names.retain(keep);
        }
        self.substitutes.retain(keep);
        self.unavailable.retain(keep);
        self.injured.retain(keep);
    }

    pub fn starters(&self) -> impl Iterator<Item = &str> {
        Position::ALL
            .into_iter()
            .filter_map(move |p| self.starters_by_position.get(&p))
            .flatten()
            .map(String::as_str)
    }

    pub fn starter_count(&self) -> usize {
        self.starters_by_position.values().map(Vec::len).sum()
    }

    pub fn goalkeeper_count(&self) -> usize {
        self.starters_by_position.get(&Position::Goalkeeper).map_or(0, Vec::len)
    }

    /// Every listed name with its slot, starters first in position order.
    pub fn entries(&self) -> Vec<(&str, LineupSlot)> {
        let mut out = Vec::new();
        for pos in Position::ALL {
            if let Some(names) = self.starters_by_position.get(&pos) {
                out.extend(names.iter().map(|n| (n.as_str(), LineupSlot::Starter(pos))));
            }
        }
        out.extend(self.substitutes.iter().map(|n| (n.as_str(), LineupSlot::Substitute)));
        out.extend(self.unavailable.iter().map(|n| (n.as_str(), LineupSlot::Unavailable)));
        out.extend(self.injured.iter().map(|n| (n.as_str(), LineupSlot::Injured)));
        out
    }

    /// First slot the player occupies, if listed at all.
    pub fn slot_of(&self, name: &str) -> Option<LineupSlot> {
        let key = name_key(name);
        self.entries().into_iter().find(|(n, _)| name_key(n) == key).map(|(_, slot)| slot)
    }

    /// Drop blank names and repeated players, keeping each player's first occurrence.
    pub fn dedupe(&mut self) {
        let mut seen: HashSet<String> = HashSet::new();
        let mut keep_first = |names: &mut Vec<String>| {
            let taken = std::mem::take(names);
            for name in taken {
                let cleaned = name.trim().to_string();
                if cleaned.is_empty() {
                    continue;
                }
                if seen.insert(name_key(&cleaned)) {
                    names.push(cleaned);
                }
            }
        };
        for pos in Position::ALL {
            if let Some(names) = self.starters_by_position.get_mut(&pos) {
                keep_first(names);
            }
        }
        keep_first(&mut self.substitutes);
        keep_first(&mut self.unavailable);
        keep_first(&mut self.injured);
        self.starters_by_position.retain(|_, names| !names.is_empty());
    }
}
