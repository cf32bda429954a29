use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{info, instrument};

use crate::config::Settings;
use crate::error::{Error, Result};
use crate::fixtures;
use crate::lineup::LineupValidator;
use crate::lists::AuxLists;
use crate::migrate::{self, MigrationContext};
use crate::model::fixture::Fixture;
use crate::model::lineup::LineupSlot;
use crate::model::match_record::MatchRecord;
use crate::model::raw::{RawFixture, RawMatch, RawPlayerFile};
use crate::model::roster::RosterEntry;
use crate::names::{clean_name, same_name};
use crate::squad::Squad;

pub const MATCHES_FILE: &str = "matches.json";
pub const FIXTURES_FILE: &str = "fixtures.json";
pub const ROSTER_FILE: &str = "roster.json";
pub const HISTORY_FILE: &str = "player_history.json";
pub const LISTS_FILE: &str = "lists.json";

/// Everything the application holds in memory. Passed explicitly to whatever needs it.
#[derive(Debug, Clone, Default)]
pub struct Store {
    pub settings: Settings,
    pub matches: Vec<MatchRecord>,
    pub squad: Squad,
    pub fixtures: Vec<Fixture>,
    pub lists: AuxLists,
}

impl Store {
    pub fn new(settings: Settings) -> Self {
        Self { settings, ..Self::default() }
    }

    pub fn current_coach(&self) -> &str {
        self.lists.current_coach.as_deref().unwrap_or(&self.settings.current_coach)
    }

    /// What migration needs from this store to normalize an incoming match.
    pub fn migration_context(&self) -> MigrationContext {
        context(&self.settings, self.current_coach(), &self.squad.roster)
    }

    /// Normalize a match as read from a file or typed in, then save it like `record_match`.
    pub fn record_raw_match(&mut self, raw: RawMatch, edit_index: Option<usize>) -> Result<usize> {
        let record = migrate::match_record(raw, &self.migration_context())?;
        self.record_match(record, edit_index)
    }

    /// Validate and save a match, either appended or replacing `edit_index`.
    /// Nothing is changed when the lineup is rejected or the index does not exist.
    #[instrument(level = "info", skip(self, record), fields(opponent = %record.opponent, date = %record.date))]
    pub fn record_match(&mut self, mut record: MatchRecord, edit_index: Option<usize>) -> Result<usize> {
        if let Some(i) = edit_index {
            if i >= self.matches.len() {
                return Err(Error::MatchNotFound(i));
            }
        }
        record.opponent = clean_name(&record.opponent);
        record.competition = clean_name(&record.competition);
        record.coach = clean_name(&record.coach);
        if record.coach.is_empty() {
            record.coach = self.current_coach().to_string();
        }
        if !same_name(&record.competition, &self.settings.top_flight_competition) {
            record.table_position = None;
        }

        if let Some(lineup) = record.lineup.as_mut() {
            lineup.dedupe();
            LineupValidator::new(&self.squad.roster).validate(lineup)?;
            for scorer in &mut record.own_scorers {
                scorer.from_bench = matches!(lineup.slot_of(&scorer.name), Some(LineupSlot::Substitute));
            }
        }

        self.lists.record(&record);
        if let Some(lineup) = &record.lineup {
            let changed = self.squad.apply_lineup(lineup);
            info!(changed, "Updated squad statuses from lineup");
        }
        if fixtures::remove_played(&mut self.fixtures, &record) {
            info!("Removed fixture now recorded as played");
        }

        let index = match edit_index {
            Some(i) => {
                self.matches[i] = record;
                i
            }
            None => {
                self.matches.push(record);
                self.matches.len() - 1
            }
        };
        info!(index, total = self.matches.len(), "Saved match");
        Ok(index)
    }

    pub fn delete_match(&mut self, index: usize) -> Result<MatchRecord> {
        if index >= self.matches.len() {
            return Err(Error::MatchNotFound(index));
        }
        let removed = self.matches.remove(index);
        info!(index, opponent = %removed.opponent, "Deleted match");
        Ok(removed)
    }
}

fn context(settings: &Settings, current_coach: &str, roster: &[RosterEntry]) -> MigrationContext {
    MigrationContext {
        club_name: settings.club_name.clone(),
        current_coach: current_coach.to_string(),
        top_flight_competition: settings.top_flight_competition.clone(),
        ..MigrationContext::default()
    }
    .with_roster(roster)
}

#[derive(Serialize)]
struct PlayerFile<T> {
    players: Vec<T>,
}

/// Whole-file JSON persistence for a `Store`, one file per collection.
#[derive(Debug, Clone)]
pub struct JsonStore {
    dir: PathBuf,
}

impl JsonStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn read<T: DeserializeOwned + Default>(&self, file: &str) -> Result<T> {
        let path = self.dir.join(file);
        if !path.exists() {
            return Ok(T::default());
        }
        let body = fs::read_to_string(&path)?;
        if body.trim().is_empty() {
            return Ok(T::default());
        }
        Ok(serde_json::from_str(&body)?)
    }

    fn write<T: Serialize + ?Sized>(&self, file: &str, value: &T) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        let body = serde_json::to_string_pretty(value)?;
        fs::write(self.dir.join(file), body)?;
        Ok(())
    }

    /// Load and normalize every collection. A stored match with a malformed date fails the load.
    #[instrument(level = "info", skip(self, settings), fields(dir = %self.dir.display()))]
    pub fn load(&self, settings: Settings) -> Result<Store> {
        let roster = migrate::roster(self.read::<Option<RawPlayerFile>>(ROSTER_FILE)?.map(RawPlayerFile::into_players).unwrap_or_default());
        let history = migrate::history(self.read::<Option<RawPlayerFile>>(HISTORY_FILE)?.map(RawPlayerFile::into_players).unwrap_or_default());
        let lists = self.read::<AuxLists>(LISTS_FILE)?.normalized();

        let ctx = context(&settings, lists.current_coach.as_deref().unwrap_or(&settings.current_coach), &roster);

        let matches = self
            .read::<Vec<RawMatch>>(MATCHES_FILE)?
            .into_iter()
            .enumerate()
            .map(|(index, raw)| {
                migrate::match_record(raw, &ctx).map_err(|source| Error::InvalidRecord { file: MATCHES_FILE.to_string(), index, source })
            })
            .collect::<Result<Vec<_>>>()?;
        let mut fixtures = self
            .read::<Vec<RawFixture>>(FIXTURES_FILE)?
            .into_iter()
            .enumerate()
            .map(|(index, raw)| {
                migrate::fixture(raw, &settings.club_name).map_err(|source| Error::InvalidRecord { file: FIXTURES_FILE.to_string(), index, source })
            })
            .collect::<Result<Vec<_>>>()?;
        fixtures.sort_by_key(|f| f.date);

        info!(matches = matches.len(), roster = roster.len(), history = history.len(), fixtures = fixtures.len(), "Loaded store");
        Ok(Store { settings, matches, squad: Squad::new(roster, history), fixtures, lists })
    }

    #[instrument(level = "info", skip(self, store), fields(dir = %self.dir.display()))]
    pub fn save(&self, store: &Store) -> Result<()> {
        self.write(MATCHES_FILE, &store.matches)?;
        self.write(FIXTURES_FILE, &store.fixtures)?;
        self.write(ROSTER_FILE, &PlayerFile { players: store.squad.ordered_roster() })?;
        self.write(HISTORY_FILE, &PlayerFile { players: store.squad.ordered_history() })?;
        self.write(LISTS_FILE, &store.lists)?;
        info!(matches = store.matches.len(), "Saved store");
        Ok(())
    }
}
