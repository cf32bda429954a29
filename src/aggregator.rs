use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::dates::season_of;
use crate::model::lineup::LineupSlot;
use crate::model::match_record::{MatchRecord, MatchResult, Venue};
use crate::names::{Leaderboard, Tally, name_key, same_name};

const UNKNOWN_COMPETITION: &str = "Unknown competition";
const NO_COACH: &str = "(no coach)";

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    // Halves go to the even neighbour: 6.25 -> 6.2
    (value * factor).round_ties_even() / factor
}

/// Stable chronological order; matches on the same day keep their recorded order.
pub fn chronological<'a>(matches: impl IntoIterator<Item = &'a MatchRecord>) -> Vec<&'a MatchRecord> {
    let mut ordered: Vec<&MatchRecord> = matches.into_iter().collect();
    ordered.sort_by_key(|m| m.date);
    ordered
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Summary {
    pub matches: usize,
    pub wins: usize,
    pub draws: usize,
    pub losses: usize,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i64,
    pub points: u32,
    pub points_percentage: f64,
    pub avg_goals_for: f64,
    pub avg_goals_against: f64,
    pub longest_unbeaten: usize,
    pub longest_losing: usize,
    pub top_scorers: Vec<Tally>,
    pub opponent_scorers: Vec<Tally>,
    pub table_position: Option<u32>,
}

/// Longest unbeaten run and longest losing run over results in order.
pub fn streaks(results: impl IntoIterator<Item = MatchResult>) -> (usize, usize) {
    let (mut unbeaten, mut losing) = (0usize, 0usize);
    let (mut best_unbeaten, mut best_losing) = (0usize, 0usize);
    for result in results {
        if result.is_unbeaten() {
            unbeaten += 1;
            losing = 0;
            best_unbeaten = best_unbeaten.max(unbeaten);
        } else {
            losing += 1;
            unbeaten = 0;
            best_losing = best_losing.max(losing);
        }
    }
    (best_unbeaten, best_losing)
}

/// Per-group summary. Input order does not matter; matches are put in date order first.
pub fn summarize<'a>(matches: impl IntoIterator<Item = &'a MatchRecord>) -> Summary {
    let ordered = chronological(matches);
    let mut summary = Summary { matches: ordered.len(), ..Summary::default() };
    let mut scorers = Leaderboard::new();
    let mut conceded = Leaderboard::new();

    for m in &ordered {
        summary.goals_for += m.score.own;
        summary.goals_against += m.score.opponent;
        match m.result() {
            MatchResult::Win => summary.wins += 1,
            MatchResult::Draw => summary.draws += 1,
            MatchResult::Loss => summary.losses += 1,
        }
        for s in &m.own_scorers {
            scorers.add(&s.name, s.goals);
        }
        for s in &m.opponent_scorers {
            conceded.add(&s.name, s.goals);
        }
        if m.table_position.is_some() {
            summary.table_position = m.table_position;
        }
    }

    let (unbeaten, losing) = streaks(ordered.iter().map(|m| m.result()));
    summary.longest_unbeaten = unbeaten;
    summary.longest_losing = losing;
    summary.points = 3 * summary.wins as u32 + summary.draws as u32;
    summary.goal_difference = i64::from(summary.goals_for) - i64::from(summary.goals_against);
    if summary.matches > 0 {
        let n = summary.matches as f64;
        summary.points_percentage = round_to(f64::from(summary.points) / (3.0 * n) * 100.0, 1);
        summary.avg_goals_for = round_to(f64::from(summary.goals_for) / n, 2);
        summary.avg_goals_against = round_to(f64::from(summary.goals_against) / n, 2);
    }
    summary.top_scorers = scorers.ranked();
    summary.opponent_scorers = conceded.ranked();
    summary
}

/// Running totals after each match, 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SeriesPoint {
    pub index: usize,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i64,
    pub wins: usize,
    pub draws: usize,
    pub losses: usize,
    pub points: u32,
}

pub fn cumulative_series<'a>(matches: impl IntoIterator<Item = &'a MatchRecord>) -> Vec<SeriesPoint> {
    let mut point = SeriesPoint::default();
    chronological(matches)
        .into_iter()
        .enumerate()
        .map(|(i, m)| {
            point.index = i + 1;
            point.goals_for += m.score.own;
            point.goals_against += m.score.opponent;
            point.goal_difference = i64::from(point.goals_for) - i64::from(point.goals_against);
            match m.result() {
                MatchResult::Win => point.wins += 1,
                MatchResult::Draw => point.draws += 1,
                MatchResult::Loss => point.losses += 1,
            }
            point.points = 3 * point.wins as u32 + point.draws as u32;
            point
        })
        .collect()
}

/// Pair two series point by point; the longer one is cut to the shorter one's length.
pub fn pair_series(current: &[SeriesPoint], previous: &[SeriesPoint]) -> Vec<(SeriesPoint, SeriesPoint)> {
    current.iter().copied().zip(previous.iter().copied()).collect()
}

pub fn group_by_season<'a>(matches: impl IntoIterator<Item = &'a MatchRecord>) -> BTreeMap<i32, Vec<&'a MatchRecord>> {
    let mut seasons: BTreeMap<i32, Vec<&MatchRecord>> = BTreeMap::new();
    for m in chronological(matches) {
        seasons.entry(season_of(m.date)).or_default().push(m);
    }
    seasons
}

/// Group by competition name, case- and accent-insensitively. Keys are the first spelling seen.
pub fn group_by_competition<'a>(matches: impl IntoIterator<Item = &'a MatchRecord>) -> BTreeMap<String, Vec<&'a MatchRecord>> {
    let mut display: HashMap<String, String> = HashMap::new();
    let mut groups: BTreeMap<String, Vec<&MatchRecord>> = BTreeMap::new();
    for m in chronological(matches) {
        let name = if m.competition.trim().is_empty() { UNKNOWN_COMPETITION } else { m.competition.trim() };
        let shown = display.entry(name_key(name)).or_insert_with(|| name.to_string()).clone();
        groups.entry(shown).or_default().push(m);
    }
    groups
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompetitionReport {
    pub name: String,
    pub summary: Summary,
    pub series: Vec<SeriesPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonReport {
    pub year: i32,
    pub summary: Summary,
    pub series: Vec<SeriesPoint>,
    pub competitions: Vec<CompetitionReport>,
}

fn season_report(year: i32, matches: &[&MatchRecord]) -> SeasonReport {
    let competitions = group_by_competition(matches.iter().copied())
        .into_iter()
        .map(|(name, slice)| CompetitionReport {
            summary: summarize(slice.iter().copied()),
            series: cumulative_series(slice.iter().copied()),
            name,
        })
        .collect();
    SeasonReport {
        year,
        summary: summarize(matches.iter().copied()),
        series: cumulative_series(matches.iter().copied()),
        competitions,
    }
}

/// Current minus previous, metric by metric.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SummaryDelta {
    pub matches: i64,
    pub wins: i64,
    pub draws: i64,
    pub losses: i64,
    pub goals_for: i64,
    pub goals_against: i64,
    pub goal_difference: i64,
    pub points: i64,
    pub points_percentage: f64,
    pub avg_goals_for: f64,
    pub avg_goals_against: f64,
}

impl SummaryDelta {
    pub fn between(current: &Summary, previous: &Summary) -> Self {
        let diff = |a: usize, b: usize| a as i64 - b as i64;
        Self {
            matches: diff(current.matches, previous.matches),
            wins: diff(current.wins, previous.wins),
            draws: diff(current.draws, previous.draws),
            losses: diff(current.losses, previous.losses),
            goals_for: i64::from(current.goals_for) - i64::from(previous.goals_for),
            goals_against: i64::from(current.goals_against) - i64::from(previous.goals_against),
            goal_difference: current.goal_difference - previous.goal_difference,
            points: i64::from(current.points) - i64::from(previous.points),
            points_percentage: round_to(current.points_percentage - previous.points_percentage, 1),
            avg_goals_for: round_to(current.avg_goals_for - previous.avg_goals_for, 2),
            avg_goals_against: round_to(current.avg_goals_against - previous.avg_goals_against, 2),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub current: Summary,
    /// Summary of the previous period's first N matches, N being the current match count.
    pub previous: Summary,
    pub previous_total_matches: usize,
    pub current_series: Vec<SeriesPoint>,
    pub previous_series: Vec<SeriesPoint>,
    pub paired: Vec<(SeriesPoint, SeriesPoint)>,
    pub delta: SummaryDelta,
}

/// Compare a period against the same number of matches from an earlier one.
pub fn compare(current: &[&MatchRecord], previous: &[&MatchRecord]) -> Comparison {
    let current = chronological(current.iter().copied());
    let previous = chronological(previous.iter().copied());
    let equivalent = &previous[..previous.len().min(current.len())];

    let current_summary = summarize(current.iter().copied());
    let previous_summary = summarize(equivalent.iter().copied());
    let current_series = cumulative_series(current.iter().copied());
    let previous_series = cumulative_series(equivalent.iter().copied());
    Comparison {
        delta: SummaryDelta::between(&current_summary, &previous_summary),
        paired: pair_series(&current_series, &previous_series),
        current: current_summary,
        previous: previous_summary,
        previous_total_matches: previous.len(),
        current_series,
        previous_series,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonComparison {
    pub current_year: i32,
    pub previous_year: i32,
    pub totals: Comparison,
    pub competitions: Vec<(String, Comparison)>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoachRecord {
    pub coach: String,
    pub matches: usize,
    pub home: usize,
    pub away: usize,
    pub wins: usize,
    pub draws: usize,
    pub losses: usize,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i64,
    pub top_scorer: Option<Tally>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeadToHead {
    pub opponent: String,
    pub matches: Vec<MatchRecord>,
    pub wins: usize,
    pub draws: usize,
    pub losses: usize,
    pub goals_for: u32,
    pub goals_against: u32,
    pub own_scorers: Vec<Tally>,
    pub opponent_scorers: Vec<Tally>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct PlayerRecord {
    pub name: String,
    pub club_matches: usize,
    pub matches_involved: usize,
    pub matches_with_lineup: usize,
    pub as_starter: usize,
    pub as_substitute: usize,
    pub as_unavailable: usize,
    pub as_injured: usize,
    pub goals: u32,
    pub matches_scored_in: usize,
    pub goals_as_starter: u32,
    pub goals_from_bench: u32,
    pub goals_per_match: f64,
    pub wins: usize,
    pub draws: usize,
    pub losses: usize,
}

/// Read-only view over a match list. Every report is recomputed from the list on demand.
#[derive(Debug, Clone, Copy)]
pub struct MatchAggregator<'a> {
    matches: &'a [MatchRecord],
}

impl<'a> MatchAggregator<'a> {
    pub fn new(matches: &'a [MatchRecord]) -> Self {
        Self { matches }
    }

    pub fn overall(&self) -> Summary {
        summarize(self.matches)
    }

    pub fn overall_series(&self) -> Vec<SeriesPoint> {
        cumulative_series(self.matches)
    }

    pub fn seasons(&self) -> Vec<SeasonReport> {
        group_by_season(self.matches)
            .into_iter()
            .map(|(year, matches)| season_report(year, &matches))
            .collect()
    }

    pub fn season(&self, year: i32) -> Option<SeasonReport> {
        group_by_season(self.matches).get(&year).map(|matches| season_report(year, matches))
    }

    /// Latest season against the previous one, overall and per competition played in either.
    /// Needs at least two seasons. `top_flight` is listed first among competitions.
    pub fn compare_latest_seasons(&self, top_flight: &str) -> Option<SeasonComparison> {
        let seasons = group_by_season(self.matches);
        let mut years = seasons.keys().rev();
        let current_year = *years.next()?;
        let previous_year = *years.next()?;
        let current = &seasons[&current_year];
        let previous = &seasons[&previous_year];

        let current_comps = group_by_competition(current.iter().copied());
        let previous_comps = group_by_competition(previous.iter().copied());
        let mut names: Vec<&String> = current_comps.keys().collect();
        for name in previous_comps.keys() {
            if !names.iter().any(|n| same_name(n, name)) {
                names.push(name);
            }
        }
        names.sort_by_key(|n| (!same_name(n, top_flight), name_key(n)));

        let slice_of = |comps: &BTreeMap<String, Vec<&'a MatchRecord>>, name: &str| -> Vec<&'a MatchRecord> {
            comps.iter().find(|(n, _)| same_name(n, name)).map(|(_, m)| m.clone()).unwrap_or_default()
        };
        let competitions = names
            .into_iter()
            .map(|name| {
                let now = slice_of(&current_comps, name);
                let before = slice_of(&previous_comps, name);
                (name.clone(), compare(&now, &before))
            })
            .collect();

        Some(SeasonComparison {
            current_year,
            previous_year,
            totals: compare(current, previous),
            competitions,
        })
    }

    pub fn coach_records(&self) -> Vec<CoachRecord> {
        let mut order: Vec<String> = Vec::new();
        let mut groups: HashMap<String, (String, Vec<&MatchRecord>)> = HashMap::new();
        for m in self.matches {
            let coach = if m.coach.trim().is_empty() { NO_COACH } else { m.coach.trim() };
            let key = name_key(coach);
            groups
                .entry(key.clone())
                .or_insert_with(|| {
                    order.push(key);
                    (coach.to_string(), Vec::new())
                })
                .1
                .push(m);
        }

        let mut records: Vec<CoachRecord> = order
            .iter()
            .filter_map(|key| groups.get(key))
            .map(|(coach, matches)| {
                let summary = summarize(matches.iter().copied());
                let away = matches.iter().filter(|m| m.venue == Venue::Away).count();
                CoachRecord {
                    coach: coach.clone(),
                    matches: summary.matches,
                    home: summary.matches - away,
                    away,
                    wins: summary.wins,
                    draws: summary.draws,
                    losses: summary.losses,
                    goals_for: summary.goals_for,
                    goals_against: summary.goals_against,
                    goal_difference: summary.goal_difference,
                    top_scorer: summary.top_scorers.into_iter().next(),
                }
            })
            .collect();
        records.sort_by(|a, b| b.matches.cmp(&a.matches).then_with(|| name_key(&a.coach).cmp(&name_key(&b.coach))));
        records
    }

    pub fn head_to_head(&self, opponent: &str) -> HeadToHead {
        let matches: Vec<MatchRecord> = chronological(self.matches.iter().filter(|m| same_name(&m.opponent, opponent)))
            .into_iter()
            .cloned()
            .collect();
        let summary = summarize(&matches);
        HeadToHead {
            opponent: opponent.trim().to_string(),
            wins: summary.wins,
            draws: summary.draws,
            losses: summary.losses,
            goals_for: summary.goals_for,
            goals_against: summary.goals_against,
            own_scorers: summary.top_scorers,
            opponent_scorers: summary.opponent_scorers,
            matches,
        }
    }

    /// Career numbers for one player. A player is involved in a match when they scored,
    /// started, or were on the bench.
    pub fn player_record(&self, name: &str) -> PlayerRecord {
        let key = name_key(name);
        let mut record = PlayerRecord { name: name.trim().to_string(), club_matches: self.matches.len(), ..PlayerRecord::default() };

        for m in self.matches {
            let mut involved = false;
            let (mut goals, mut bench_goals) = (0u32, 0u32);
            for s in m.own_scorers.iter().filter(|s| name_key(&s.name) == key) {
                goals += s.goals;
                if s.from_bench {
                    bench_goals += s.goals;
                }
            }
            if goals > 0 {
                involved = true;
                record.goals += goals;
                record.matches_scored_in += 1;
                record.goals_from_bench += bench_goals;
                record.goals_as_starter += goals - bench_goals;
            }

            if let Some(lineup) = &m.lineup {
                record.matches_with_lineup += 1;
                match lineup.slot_of(name) {
                    Some(LineupSlot::Starter(_)) => {
                        record.as_starter += 1;
                        involved = true;
                    }
                    Some(LineupSlot::Substitute) => {
                        record.as_substitute += 1;
                        involved = true;
                    }
                    Some(LineupSlot::Unavailable) => record.as_unavailable += 1,
                    Some(LineupSlot::Injured) => record.as_injured += 1,
                    None => {}
                }
            }

            if involved {
                record.matches_involved += 1;
                match m.result() {
                    MatchResult::Win => record.wins += 1,
                    MatchResult::Draw => record.draws += 1,
                    MatchResult::Loss => record.losses += 1,
                }
            }
        }

        if record.matches_involved > 0 {
            record.goals_per_match = round_to(f64::from(record.goals) / record.matches_involved as f64, 2);
        }
        record
    }
}
