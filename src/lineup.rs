use std::collections::HashSet;

use tracing::debug;

use crate::error::LineupViolation;
use crate::model::lineup::Lineup;
use crate::model::roster::RosterEntry;
use crate::names::name_key;

pub const STARTERS: usize = 11;
pub const GOALKEEPERS: usize = 1;
pub const MIN_SUBSTITUTES: usize = 4;

/// Structural checks for a matchday lineup against the active squad.
#[derive(Debug, Clone, Copy)]
pub struct LineupValidator<'a> {
    roster: &'a [RosterEntry],
}

impl<'a> LineupValidator<'a> {
    pub fn new(roster: &'a [RosterEntry]) -> Self {
        Self { roster }
    }

    /// Rules are checked in order and the first failure is returned:
    /// starter count, goalkeeper count, substitute count, then squad coverage.
    pub fn validate(&self, lineup: &Lineup) -> Result<(), LineupViolation> {
        let starters = lineup.starter_count();
        if starters != STARTERS {
            return Err(LineupViolation::StarterCount(starters));
        }
        let goalkeepers = lineup.goalkeeper_count();
        if goalkeepers != GOALKEEPERS {
            return Err(LineupViolation::GoalkeeperCount(goalkeepers));
        }
        let substitutes = lineup.substitutes.len();
        if substitutes < MIN_SUBSTITUTES {
            return Err(LineupViolation::TooFewSubstitutes(substitutes));
        }
        self.check_coverage(lineup)
    }

    fn check_coverage(&self, lineup: &Lineup) -> Result<(), LineupViolation> {
        let mut listed: HashSet<String> = HashSet::new();
        for (name, _) in lineup.entries() {
            let key = name_key(name);
            if key.is_empty() {
                continue;
            }
            if !listed.insert(key) {
                return Err(LineupViolation::DuplicatePlayer(name.trim().to_string()));
            }
        }

        let mut missing: Vec<String> = self
            .roster
            .iter()
            .filter(|p| !listed.contains(&name_key(&p.name)))
            .map(|p| p.name.clone())
            .collect();
        if !missing.is_empty() {
            missing.sort_by_key(|n| name_key(n));
            debug!(missing = missing.len(), "Lineup leaves squad players out");
            return Err(LineupViolation::MissingPlayers(missing));
        }
        Ok(())
    }
}
