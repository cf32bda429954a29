//! One-time normalization of stored or imported shapes into canonical records.
//! All shape branching lives here so the aggregator and validator only see canonical data.

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::dates::parse_date;
use crate::error::MigrationError;
use crate::model::fixture::Fixture;
use crate::model::lineup::{Lineup, Position};
use crate::model::match_record::{MatchRecord, OpponentScorer, OwnScorer, Score, Venue};
use crate::model::raw::{RawFixture, RawFlag, RawLineup, RawMatch, RawPlayer, RawScorer};
use crate::model::roster::{HistoryEntry, RosterEntry, Status};
use crate::names::{clean_name, name_key, same_name};

const UNKNOWN_PLAYER: &str = "Unknown";

/// What the migration needs to know about the club to fill gaps.
#[derive(Debug, Clone, Default)]
pub struct MigrationContext {
    pub club_name: String,
    pub current_coach: String,
    pub top_flight_competition: String,
    // name key -> position, used to place starters from the old flat list
    pub positions: HashMap<String, Position>,
}

impl MigrationContext {
    pub fn with_roster(mut self, roster: &[RosterEntry]) -> Self {
        self.positions = roster.iter().map(|p| (name_key(&p.name), p.position)).collect();
        self
    }

    fn position_of(&self, name: &str) -> Position {
        self.positions.get(&name_key(name)).copied().unwrap_or_default()
    }
}

fn text(value: Option<String>) -> String {
    value.map(|s| s.trim().to_string()).unwrap_or_default()
}

pub fn match_record(raw: RawMatch, ctx: &MigrationContext) -> Result<MatchRecord, MigrationError> {
    let date = parse_date(raw.date.as_deref().unwrap_or(""))?;
    let competition = text(raw.competition);
    let score = raw.score.unwrap_or_default();
    let score = Score {
        own: score.own.and_then(|n| n.as_u32()).unwrap_or(0),
        opponent: score.opponent.and_then(|n| n.as_u32()).unwrap_or(0),
    };
    let table_position = if !ctx.top_flight_competition.is_empty() && same_name(&competition, &ctx.top_flight_competition) {
        raw.table_position.and_then(|n| n.as_u32())
    } else {
        None
    };
    let coach = match text(raw.coach) {
        c if c.is_empty() => ctx.current_coach.clone(),
        c => c,
    };

    let own_scorers = merge_scorers(raw.own_scorers)
        .into_iter()
        .map(|(name, goals, from_bench)| OwnScorer { name, goals, from_bench })
        .collect();
    let opponent_scorers = merge_scorers(raw.opponent_scorers)
        .into_iter()
        .map(|(name, goals, _)| OpponentScorer { name, goals })
        .collect();

    Ok(MatchRecord {
        date,
        opponent: text(raw.opponent),
        competition,
        table_position,
        venue: parse_venue(raw.venue.as_deref()),
        score,
        own_scorers,
        opponent_scorers,
        coach,
        lineup: raw.lineup.map(|l| lineup(l, ctx)),
        notes: text(raw.notes),
    })
}

fn parse_venue(raw: Option<&str>) -> Venue {
    match raw.map(|s| s.trim().to_lowercase()) {
        Some(v) if v == "away" => Venue::Away,
        _ => Venue::Home,
    }
}

/// Collapse scorer entries into one per player, keeping first-seen order.
fn merge_scorers(raw: Vec<RawScorer>) -> Vec<(String, u32, bool)> {
    let mut out: Vec<(String, u32, bool)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for item in raw {
        let (name, goals, from_bench) = match item {
            RawScorer::Name(name) => {
                let name = clean_name(&name);
                if name.is_empty() {
                    continue;
                }
                (name, 1, false)
            }
            RawScorer::Entry { name, goals, from_bench } => {
                let name = clean_name(name.as_deref().unwrap_or(""));
                let name = if name.is_empty() { UNKNOWN_PLAYER.to_string() } else { name };
                let goals = goals.and_then(|g| g.as_u32()).unwrap_or(1).max(1);
                (name, goals, from_bench)
            }
        };
        match index.get(&name_key(&name)) {
            Some(&i) => {
                out[i].1 += goals;
                out[i].2 |= from_bench;
            }
            None => {
                index.insert(name_key(&name), out.len());
                out.push((name, goals, from_bench));
            }
        }
    }
    out
}

pub fn lineup(raw: RawLineup, ctx: &MigrationContext) -> Lineup {
    let mut starters_by_position: BTreeMap<Position, Vec<String>> = BTreeMap::new();
    match raw.starters_by_position {
        Some(by_position) => {
            for (label, names) in by_position {
                let pos = Position::parse(&label).unwrap_or_default();
                starters_by_position.entry(pos).or_default().extend(names);
            }
        }
        None => {
            for name in raw.starters {
                let pos = ctx.position_of(&name);
                starters_by_position.entry(pos).or_default().push(name);
            }
        }
    }
    let mut lineup = Lineup {
        starters_by_position,
        substitutes: raw.substitutes,
        unavailable: raw.unavailable,
        injured: raw.injured,
    };
    lineup.dedupe();
    lineup
}

fn player_parts(raw: RawPlayer) -> Option<(String, Option<String>, Option<String>)> {
    let (name, position, status) = match raw {
        RawPlayer::Name(name) => (name, None, None),
        RawPlayer::Entry { name, position, status } => (name.unwrap_or_default(), position, status),
    };
    let name = clean_name(&name);
    if name.is_empty() {
        return None;
    }
    Some((name, position, status))
}

fn parse_position(raw: Option<&str>) -> Position {
    raw.and_then(Position::parse).unwrap_or_default()
}

/// Normalize a stored squad: blank names dropped, repeated names keep their first entry.
pub fn roster(raw: Vec<RawPlayer>) -> Vec<RosterEntry> {
    let mut seen = HashSet::new();
    raw.into_iter()
        .filter_map(player_parts)
        .filter(|(name, _, _)| seen.insert(name_key(name)))
        .map(|(name, position, status)| RosterEntry {
            name,
            position: parse_position(position.as_deref()),
            status: status.as_deref().and_then(Status::parse).unwrap_or_default(),
        })
        .collect()
}

pub fn history(raw: Vec<RawPlayer>) -> Vec<HistoryEntry> {
    let mut seen = HashSet::new();
    raw.into_iter()
        .filter_map(player_parts)
        .filter(|(name, _, _)| seen.insert(name_key(name)))
        .map(|(name, position, _)| HistoryEntry { name, position: parse_position(position.as_deref()) })
        .collect()
}

fn parse_home_flag(flag: &RawFlag) -> Option<Venue> {
    match flag {
        RawFlag::Bool(true) => Some(Venue::Home),
        RawFlag::Bool(false) => Some(Venue::Away),
        RawFlag::Text(s) => match s.trim().to_lowercase().as_str() {
            "home" | "yes" | "y" | "true" | "1" | "h" => Some(Venue::Home),
            "away" | "no" | "n" | "false" | "0" | "a" => Some(Venue::Away),
            _ => None,
        },
    }
}

/// Pull the opponent out of a matchup text like `"Club x Rival"` or `"Rival vs Club"`.
pub fn opponent_from_matchup(matchup: &str, club_name: &str) -> String {
    let normalized = matchup.replace('\u{d7}', " x ");
    let words: Vec<&str> = normalized.split_whitespace().collect();
    let split = words.iter().position(|w| matches!(w.to_lowercase().as_str(), "x" | "vs" | "vs." | "v"));
    let Some(at) = split else {
        return clean_name(matchup);
    };
    let left = words[..at].join(" ");
    let right = words[at + 1..].join(" ");
    let club = name_key(club_name);
    if !club.is_empty() && name_key(&left).contains(&club) {
        right
    } else if !club.is_empty() && name_key(&right).contains(&club) {
        left
    } else {
        right
    }
}

pub fn fixture(raw: RawFixture, club_name: &str) -> Result<Fixture, MigrationError> {
    let date = parse_date(raw.date.as_deref().unwrap_or(""))?;
    let mut opponent = text(raw.opponent);
    if opponent.is_empty() {
        if let Some(matchup) = raw.matchup.as_deref() {
            opponent = opponent_from_matchup(matchup, club_name);
        }
    }
    if opponent.is_empty() {
        return Err(MigrationError::MissingField("opponent"));
    }
    Ok(Fixture {
        date,
        opponent,
        venue: raw.venue.as_ref().and_then(parse_home_flag),
        competition: text(raw.competition),
    })
}
