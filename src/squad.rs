use tracing::{info, instrument};

use crate::error::SquadError;
use crate::lineup::STARTERS;
use crate::model::lineup::{Lineup, Position};
use crate::model::roster::{HistoryEntry, RosterEntry, Status};
use crate::names::{clean_name, name_key};

/// Active squad plus the ledger of former players.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Squad {
    pub roster: Vec<RosterEntry>,
    pub history: Vec<HistoryEntry>,
}

impl Squad {
    pub fn new(roster: Vec<RosterEntry>, history: Vec<HistoryEntry>) -> Self {
        Self { roster, history }
    }

    fn index_of(&self, name: &str) -> Option<usize> {
        let key = name_key(name);
        self.roster.iter().position(|p| name_key(&p.name) == key)
    }

    pub fn get(&self, name: &str) -> Option<&RosterEntry> {
        self.index_of(name).map(|i| &self.roster[i])
    }

    fn starters(&self) -> usize {
        self.roster.iter().filter(|p| p.status == Status::Starter).count()
    }

    pub fn add(&mut self, mut entry: RosterEntry) -> Result<(), SquadError> {
        entry.name = clean_name(&entry.name);
        if entry.name.is_empty() {
            return Err(SquadError::EmptyName);
        }
        if self.index_of(&entry.name).is_some() {
            return Err(SquadError::Duplicate(entry.name));
        }
        if entry.status == Status::Starter && self.starters() >= STARTERS {
            return Err(SquadError::TooManyStarters);
        }
        self.roster.push(entry);
        Ok(())
    }

    /// Replace the entry currently named `current` (the name itself may change).
    pub fn edit(&mut self, current: &str, mut entry: RosterEntry) -> Result<(), SquadError> {
        let idx = self.index_of(current).ok_or_else(|| SquadError::UnknownPlayer(current.to_string()))?;
        entry.name = clean_name(&entry.name);
        if entry.name.is_empty() {
            return Err(SquadError::EmptyName);
        }
        if let Some(other) = self.index_of(&entry.name) {
            if other != idx {
                return Err(SquadError::Duplicate(entry.name));
            }
        }
        let was_starter = self.roster[idx].status == Status::Starter;
        if entry.status == Status::Starter && !was_starter && self.starters() >= STARTERS {
            return Err(SquadError::TooManyStarters);
        }
        self.roster[idx] = entry;
        Ok(())
    }

    pub fn set_status(&mut self, name: &str, status: Status) -> Result<(), SquadError> {
        let idx = self.index_of(name).ok_or_else(|| SquadError::UnknownPlayer(name.to_string()))?;
        let mut entry = self.roster[idx].clone();
        entry.status = status;
        self.edit(name, entry)
    }

    /// Take a player out of the squad and into the history ledger.
    #[instrument(level = "info", skip(self))]
    pub fn remove(&mut self, name: &str) -> Result<RosterEntry, SquadError> {
        let idx = self.index_of(name).ok_or_else(|| SquadError::UnknownPlayer(name.to_string()))?;
        let removed = self.roster.remove(idx);
        self.archive([HistoryEntry { name: removed.name.clone(), position: removed.position }]);
        info!(player = %removed.name, "Moved player to history");
        Ok(removed)
    }

    pub fn clear(&mut self) {
        let removed: Vec<HistoryEntry> = self
            .roster
            .drain(..)
            .map(|p| HistoryEntry { name: p.name, position: p.position })
            .collect();
        info!(players = removed.len(), "Cleared squad into history");
        self.archive(removed);
    }

    /// Merge former players into the ledger by name. A stored Midfielder position is the
    /// default for unknown positions, so a more specific incoming position replaces it.
    pub fn archive(&mut self, players: impl IntoIterator<Item = HistoryEntry>) {
        for incoming in players {
            let name = clean_name(&incoming.name);
            if name.is_empty() {
                continue;
            }
            let key = name_key(&name);
            match self.history.iter_mut().find(|h| name_key(&h.name) == key) {
                Some(existing) => {
                    if existing.position == Position::Midfielder && incoming.position != Position::Midfielder {
                        existing.position = incoming.position;
                    }
                }
                None => self.history.push(HistoryEntry { name, position: incoming.position }),
            }
        }
    }

    /// Bring a former player back. They rejoin as a substitute.
    #[instrument(level = "info", skip(self))]
    pub fn return_player(&mut self, name: &str) -> Result<(), SquadError> {
        if self.index_of(name).is_some() {
            return Err(SquadError::Duplicate(name.trim().to_string()));
        }
        let key = name_key(name);
        let idx = self
            .history
            .iter()
            .position(|h| name_key(&h.name) == key)
            .ok_or_else(|| SquadError::NotInHistory(name.to_string()))?;
        let former = self.history.remove(idx);
        info!(player = %former.name, "Returned player to squad");
        self.roster.push(RosterEntry { name: former.name, position: former.position, status: Status::Substitute });
        Ok(())
    }

    /// Set every squad player's status from where a saved lineup put them.
    /// Players the lineup does not mention become Unavailable. Returns how many changed.
    pub fn apply_lineup(&mut self, lineup: &Lineup) -> usize {
        if lineup.entries().is_empty() {
            return 0;
        }
        let mut changed = 0;
        for player in &mut self.roster {
            let status = lineup.slot_of(&player.name).map_or(Status::Unavailable, |slot| slot.status());
            if player.status != status {
                player.status = status;
                changed += 1;
            }
        }
        changed
    }

    /// Squad ordered by status, then position.
    pub fn ordered_roster(&self) -> Vec<RosterEntry> {
        let mut out = self.roster.clone();
        out.sort_by_key(|p| (p.status, p.position));
        out
    }

    /// History ordered by position, then name.
    pub fn ordered_history(&self) -> Vec<HistoryEntry> {
        let mut out = self.history.clone();
        out.sort_by_key(|h| (h.position, name_key(&h.name)));
        out
    }
}
