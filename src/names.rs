use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Collapse runs of whitespace and trim, keeping the original letters.
pub fn clean_name(name: &str) -> String {
    name.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Comparison key for a person or club name: whitespace collapsed, accents stripped, lowercased.
/// Every place that compares or aggregates names goes through this.
pub fn name_key(name: &str) -> String {
    clean_name(name)
        .nfkd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

pub fn same_name(a: &str, b: &str) -> bool {
    name_key(a) == name_key(b)
}

/// Pick which spelling of a name to show when several normalize to the same key.
/// Accented spellings win over plain ASCII ones, then longer spellings win.
fn prefer_display<'a>(current: &'a str, candidate: &'a str) -> &'a str {
    if current.is_ascii() && !candidate.is_ascii() {
        return candidate;
    }
    if candidate.chars().count() > current.chars().count() {
        return candidate;
    }
    current
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub name: String,
    pub goals: u32,
}

/// Goal counts per player, keyed by `name_key`.
#[derive(Debug, Default, Clone)]
pub struct Leaderboard {
    display: HashMap<String, String>,
    goals: HashMap<String, u32>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, name: &str, goals: u32) {
        if goals == 0 {
            return;
        }
        let cleaned = clean_name(name);
        let key = name_key(&cleaned);
        if key.is_empty() {
            return;
        }
        let shown = match self.display.get(&key) {
            Some(current) => prefer_display(current, &cleaned).to_string(),
            None => cleaned,
        };
        self.display.insert(key.clone(), shown);
        *self.goals.entry(key).or_insert(0) += goals;
    }

    /// Tallies ordered by goals (descending) then name.
    pub fn ranked(&self) -> Vec<Tally> {
        let mut out: Vec<Tally> = self
            .goals
            .iter()
            .map(|(key, goals)| Tally {
                name: self.display.get(key).cloned().unwrap_or_else(|| key.clone()),
                goals: *goals,
            })
            .collect();
        out.sort_by(|a, b| b.goals.cmp(&a.goals).then_with(|| name_key(&a.name).cmp(&name_key(&b.name))));
        out
    }
}

/// Render tallies as `"Name x2, Other"`, or an em-dash placeholder when empty.
pub fn format_tallies(tallies: &[Tally]) -> String {
    if tallies.is_empty() {
        return "\u{2014}".to_string();
    }
    tallies
        .iter()
        .map(|t| if t.goals > 1 { format!("{} x{}", t.name, t.goals) } else { t.name.clone() })
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_ignores_case_accents_and_spacing() {
        assert_eq!(name_key("  Philippe   Coutinho "), "philippe coutinho");
        assert_eq!(name_key("Vegetti"), name_key("VEGETTI"));
        assert_eq!(name_key("Léo Jardim"), name_key("leo jardim"));
        assert!(same_name("Payét", "payet"));
    }

    #[test]
    fn leaderboard_merges_spellings_and_prefers_accented_display() {
        let mut board = Leaderboard::new();
        board.add("Leo Jardim", 1);
        board.add("Léo Jardim", 2);
        board.add("Vegetti", 1);
        board.add("Nobody", 0);
        let ranked = board.ranked();
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0], Tally { name: "Léo Jardim".into(), goals: 3 });
        assert_eq!(format_tallies(&ranked), "Léo Jardim x3, Vegetti");
    }
}
