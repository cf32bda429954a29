#![allow(dead_code)]

use std::collections::BTreeMap;

use chrono::NaiveDate;

use club_stats::model::lineup::{Lineup, Position};
use club_stats::model::match_record::{MatchRecord, OpponentScorer, OwnScorer, Score, Venue};
use club_stats::model::roster::{RosterEntry, Status};

pub fn date(d: u32, m: u32, y: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn game(day: NaiveDate, own: u32, opponent: u32) -> MatchRecord {
    MatchRecord {
        date: day,
        opponent: "Rivals FC".to_string(),
        competition: "Top-Flight League".to_string(),
        table_position: None,
        venue: Venue::Home,
        score: Score::new(own, opponent),
        own_scorers: Vec::new(),
        opponent_scorers: Vec::new(),
        coach: "Coach One".to_string(),
        lineup: None,
        notes: String::new(),
    }
}

pub fn scorer(name: &str, goals: u32) -> OwnScorer {
    OwnScorer { name: name.to_string(), goals, from_bench: false }
}

pub fn conceded(name: &str, goals: u32) -> OpponentScorer {
    OpponentScorer { name: name.to_string(), goals }
}

/// Sequence of games on consecutive days of January from "W"/"D"/"L" letters.
pub fn results(year: i32, pattern: &str) -> Vec<MatchRecord> {
    pattern
        .chars()
        .enumerate()
        .map(|(i, c)| {
            let (own, opp) = match c {
                'W' => (2, 0),
                'D' => (1, 1),
                _ => (0, 1),
            };
            game(date(i as u32 + 1, 1, year), own, opp)
        })
        .collect()
}

/// 15 players: 1 GK, 4 defenders, 3 midfielders, 3 forwards starting, 4 substitutes.
pub fn squad_of_fifteen() -> Vec<RosterEntry> {
    let starters = [
        ("Keeper", Position::Goalkeeper),
        ("Right Back", Position::RightBack),
        ("Centre One", Position::CenterBack),
        ("Centre Two", Position::CenterBack),
        ("Left Back", Position::LeftBack),
        ("Anchor", Position::DefensiveMidfielder),
        ("Mid One", Position::Midfielder),
        ("Mid Two", Position::Midfielder),
        ("Player A", Position::Forward),
        ("Forward Two", Position::Forward),
        ("Forward Three", Position::Forward),
    ];
    let mut roster: Vec<RosterEntry> = starters
        .iter()
        .map(|(name, pos)| RosterEntry::new(*name, *pos, Status::Starter))
        .collect();
    for name in ["Sub Keeper", "Sub One", "Sub Two", "Sub Three"] {
        roster.push(RosterEntry::new(name, Position::Midfielder, Status::Substitute));
    }
    roster
}

pub fn full_lineup(roster: &[RosterEntry]) -> Lineup {
    let mut starters_by_position: BTreeMap<Position, Vec<String>> = BTreeMap::new();
    let mut substitutes = Vec::new();
    for p in roster {
        match p.status {
            Status::Starter => starters_by_position.entry(p.position).or_default().push(p.name.clone()),
            _ => substitutes.push(p.name.clone()),
        }
    }
    Lineup { starters_by_position, substitutes, unavailable: Vec::new(), injured: Vec::new() }
}
