use chrono::{Duration, NaiveDate};
use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::error::Result;
use crate::migrate;
use crate::model::fixture::Fixture;
use crate::model::match_record::{MatchRecord, Venue};
use crate::model::raw::RawFixture;
use crate::names::{name_key, same_name};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ImportReport {
    pub added: usize,
    pub duplicates: usize,
    pub invalid: usize,
    pub total: usize,
}

fn fixture_key(f: &Fixture) -> (NaiveDate, String, Option<Venue>, String) {
    (f.date, name_key(&f.opponent), f.venue, name_key(&f.competition))
}

/// Add fixtures from a JSON list. Entries that cannot be read are counted as invalid,
/// entries already scheduled are counted as duplicates.
#[instrument(level = "info", skip(existing, body), fields(bytes = body.len()))]
pub fn import_json(existing: &mut Vec<Fixture>, body: &str, club_name: &str) -> Result<ImportReport> {
    let items: Vec<serde_json::Value> = serde_json::from_str(body)?;
    Ok(import(existing, items, club_name))
}

pub fn import(existing: &mut Vec<Fixture>, items: Vec<serde_json::Value>, club_name: &str) -> ImportReport {
    let mut report = ImportReport::default();
    for item in items {
        let parsed = serde_json::from_value::<RawFixture>(item)
            .map_err(|e| e.to_string())
            .and_then(|raw| migrate::fixture(raw, club_name).map_err(|e| e.to_string()));
        let fixture = match parsed {
            Ok(f) => f,
            Err(e) => {
                warn!(error = %e, "Skipping invalid fixture");
                report.invalid += 1;
                continue;
            }
        };
        let key = fixture_key(&fixture);
        if existing.iter().any(|f| fixture_key(f) == key) {
            report.duplicates += 1;
            continue;
        }
        existing.push(fixture);
        report.added += 1;
    }
    existing.sort_by_key(|f| f.date);
    report.total = existing.len();
    info!(added = report.added, duplicates = report.duplicates, invalid = report.invalid, total = report.total, "Imported fixtures");
    report
}

/// Fixtures between `today` and `today + days_ahead` (both inclusive), earliest first.
pub fn upcoming(fixtures: &[Fixture], days_ahead: i64, today: NaiveDate) -> Vec<&Fixture> {
    let Some(window_end) = Duration::try_days(days_ahead).and_then(|d| today.checked_add_signed(d)) else {
        return Vec::new();
    };
    let mut games: Vec<&Fixture> = fixtures.iter().filter(|f| f.date >= today && f.date <= window_end).collect();
    games.sort_by_key(|f| f.date);
    games
}

pub fn next_fixture(fixtures: &[Fixture], days_ahead: i64, today: NaiveDate) -> Option<&Fixture> {
    upcoming(fixtures, days_ahead, today).into_iter().next()
}

/// Drop the fixture a played match corresponds to. Returns whether one was removed.
pub fn remove_played(fixtures: &mut Vec<Fixture>, played: &MatchRecord) -> bool {
    let before = fixtures.len();
    fixtures.retain(|f| {
        !(f.date == played.date && same_name(&f.opponent, &played.opponent) && same_name(&f.competition, &played.competition))
    });
    fixtures.len() != before
}
