use serde::{Deserialize, Serialize};

use crate::model::match_record::MatchRecord;
use crate::names::{clean_name, name_key};

/// Distinct names offered by pickers. Append-only, case-insensitive, alphabetical.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameList(Vec<String>);

impl NameList {
    pub fn insert(&mut self, name: &str) -> bool {
        let name = clean_name(name);
        let key = name_key(&name);
        if key.is_empty() || self.0.iter().any(|n| name_key(n) == key) {
            return false;
        }
        self.0.push(name);
        self.0.sort_by_key(|n| name_key(n));
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        let key = name_key(name);
        self.0.iter().any(|n| name_key(n) == key)
    }

    pub fn names(&self) -> &[String] {
        &self.0
    }

    /// Re-sort and drop repeats, for lists read from disk.
    pub fn normalized(self) -> Self {
        let mut out = NameList::default();
        for name in self.0 {
            out.insert(&name);
        }
        out
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuxLists {
    #[serde(default)]
    pub opponents: NameList,
    #[serde(default)]
    pub own_scorers: NameList,
    #[serde(default)]
    pub opponent_scorers: NameList,
    #[serde(default)]
    pub competitions: NameList,
    #[serde(default)]
    pub coaches: NameList,
    /// Last coach used on a saved match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_coach: Option<String>,
}

impl AuxLists {
    pub fn normalized(self) -> Self {
        Self {
            opponents: self.opponents.normalized(),
            own_scorers: self.own_scorers.normalized(),
            opponent_scorers: self.opponent_scorers.normalized(),
            competitions: self.competitions.normalized(),
            coaches: self.coaches.normalized(),
            current_coach: self.current_coach,
        }
    }

    /// Record every name a saved match introduces.
    pub fn record(&mut self, m: &MatchRecord) {
        self.opponents.insert(&m.opponent);
        self.competitions.insert(&m.competition);
        self.coaches.insert(&m.coach);
        if !m.coach.trim().is_empty() {
            self.current_coach = Some(clean_name(&m.coach));
        }
        for s in &m.own_scorers {
            self.own_scorers.insert(&s.name);
        }
        for s in &m.opponent_scorers {
            self.opponent_scorers.insert(&s.name);
        }
    }
}
