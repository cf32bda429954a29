mod common;

use club_stats::MatchAggregator;
use club_stats::aggregator::{compare, cumulative_series, group_by_competition, group_by_season, summarize};
use club_stats::model::match_record::{MatchRecord, Venue};

use common::{conceded, date, game, results, scorer};

#[test]
fn single_win_summary() {
    let mut m = game(date(10, 3, 2024), 2, 1);
    m.own_scorers.push(scorer("Player A", 2));
    m.opponent_scorers.push(conceded("Their Striker", 1));

    let s = summarize([&m]);
    assert_eq!((s.wins, s.draws, s.losses), (1, 0, 0));
    assert_eq!(s.goals_for, 2);
    assert_eq!(s.goals_against, 1);
    assert_eq!(s.goal_difference, 1);
    assert_eq!(s.points, 3);
    assert_eq!(s.points_percentage, 100.0);
    assert_eq!(s.top_scorers[0].name, "Player A");
    assert_eq!(s.top_scorers[0].goals, 2);
    assert_eq!(s.opponent_scorers[0].name, "Their Striker");
}

#[test]
fn empty_input_is_all_zero() {
    let s = summarize(std::iter::empty::<&MatchRecord>());
    assert_eq!(s.matches, 0);
    assert_eq!(s.points_percentage, 0.0);
    assert_eq!(s.avg_goals_for, 0.0);
    assert!(s.top_scorers.is_empty());
    assert_eq!(s.table_position, None);
    assert!(cumulative_series(std::iter::empty::<&MatchRecord>()).is_empty());
}

#[test]
fn streaks_follow_chronological_order() {
    let games = results(2024, "WWDLWWW");
    let s = summarize(&games);
    assert_eq!(s.longest_unbeaten, 3);
    assert_eq!(s.longest_losing, 1);

    // Input order must not matter.
    let reversed: Vec<&MatchRecord> = games.iter().rev().collect();
    let r = summarize(reversed);
    assert_eq!((r.longest_unbeaten, r.longest_losing), (3, 1));

    let s = summarize(&results(2024, "LLLWDDDDL"));
    assert_eq!((s.longest_unbeaten, s.longest_losing), (5, 3));
}

#[test]
fn counts_points_and_rounding_hold_together() {
    let games = results(2023, "WDLLWD");
    let s = summarize(&games);
    assert_eq!(s.wins + s.draws + s.losses, s.matches);
    assert_eq!(s.goal_difference, i64::from(s.goals_for) - i64::from(s.goals_against));
    assert_eq!(s.points, 3 * s.wins as u32 + s.draws as u32);
    // 8 points of 18 = 44.44%
    assert_eq!(s.points_percentage, 44.4);
    // 6 goals for and 4 against in 6 games
    assert_eq!(s.avg_goals_for, 1.0);
    assert_eq!(s.avg_goals_against, 0.67);
}

#[test]
fn exact_halves_round_to_even() {
    // 3 points of 48 = 6.25%, 2 goals in 16 games = 0.125
    let s = summarize(&results(2024, "WLLLLLLLLLLLLLLL"));
    assert_eq!(s.matches, 16);
    assert_eq!(s.points_percentage, 6.2);
    assert_eq!(s.avg_goals_for, 0.12);
    assert_eq!(s.avg_goals_against, 0.94);
}

#[test]
fn cumulative_series_matches_prefix_summaries() {
    let games = results(2024, "WDLWWLDW");
    let series = cumulative_series(&games);
    assert_eq!(series.len(), games.len());
    for (i, point) in series.iter().enumerate() {
        let prefix = summarize(&games[..=i]);
        assert_eq!(point.index, i + 1);
        assert_eq!(point.goals_for, prefix.goals_for);
        assert_eq!(point.goals_against, prefix.goals_against);
        assert_eq!(point.goal_difference, prefix.goal_difference);
        assert_eq!((point.wins, point.draws, point.losses), (prefix.wins, prefix.draws, prefix.losses));
        assert_eq!(point.points, prefix.points);
    }
}

#[test]
fn leaderboard_merges_name_variants() {
    let mut a = game(date(1, 2, 2024), 3, 0);
    a.own_scorers = vec![scorer("Léo Silva", 2), scorer("Other", 1)];
    let mut b = game(date(8, 2, 2024), 1, 0);
    b.own_scorers = vec![scorer("leo silva", 1)];
    let s = summarize([&a, &b]);
    assert_eq!(s.top_scorers.len(), 2);
    assert_eq!(s.top_scorers[0].name, "Léo Silva");
    assert_eq!(s.top_scorers[0].goals, 3);
}

#[test]
fn table_position_is_latest_known() {
    let mut first = game(date(1, 5, 2024), 1, 0);
    first.table_position = Some(7);
    let mut second = game(date(8, 5, 2024), 1, 0);
    second.table_position = Some(4);
    let third = game(date(15, 5, 2024), 0, 0);
    let s = summarize([&third, &second, &first]);
    assert_eq!(s.table_position, Some(4));
}

#[test]
fn groups_by_season_and_competition() {
    let mut games = results(2023, "WWL");
    games.extend(results(2024, "DL"));
    games[1].competition = "cup".to_string();
    games[2].competition = "Cup".to_string();

    let seasons = group_by_season(&games);
    assert_eq!(seasons.keys().copied().collect::<Vec<_>>(), vec![2023, 2024]);
    assert_eq!(seasons[&2023].len(), 3);

    let comps = group_by_competition(seasons[&2023].iter().copied());
    assert_eq!(comps.len(), 2);
    assert_eq!(comps["cup"].len(), 2);
    assert_eq!(comps["Top-Flight League"].len(), 1);

    let reports = MatchAggregator::new(&games).seasons();
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0].competitions.len(), 2);
    assert_eq!(reports[1].summary.matches, 2);
}

#[test]
fn comparison_truncates_previous_season() {
    let previous = results(2023, "WWWWWWWWWWLLLLL");
    let current = results(2024, "DDDDDDDDDD");
    let prev_refs: Vec<&MatchRecord> = previous.iter().collect();
    let curr_refs: Vec<&MatchRecord> = current.iter().collect();

    let cmp = compare(&curr_refs, &prev_refs);
    assert_eq!(cmp.previous_total_matches, 15);
    assert_eq!(cmp.previous.matches, 10);
    assert_eq!(cmp.previous_series.len(), 10);
    assert_eq!(cmp.paired.len(), 10);
    assert_eq!(cmp.previous.wins, 10);
    assert_eq!(cmp.delta.points, 10 - 30);
    assert_eq!(cmp.paired[9].0.points, 10);
    assert_eq!(cmp.paired[9].1.points, 30);
}

#[test]
fn latest_season_comparison_lists_top_flight_first() {
    let mut games = results(2023, "WWLD");
    games.extend(results(2024, "WL"));
    games[0].competition = "A Cup".to_string();
    games[4].competition = "A Cup".to_string();

    let agg = MatchAggregator::new(&games);
    let cmp = agg.compare_latest_seasons("Top-Flight League").expect("two seasons");
    assert_eq!((cmp.current_year, cmp.previous_year), (2024, 2023));
    assert_eq!(cmp.totals.previous.matches, 2);
    let names: Vec<&str> = cmp.competitions.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, vec!["Top-Flight League", "A Cup"]);

    let single = results(2024, "W");
    assert!(MatchAggregator::new(&single).compare_latest_seasons("Top-Flight League").is_none());
}

#[test]
fn coach_records_split_home_and_away() {
    let mut games = results(2024, "WDL");
    games[2].coach = "Coach Two".to_string();
    games[1].venue = Venue::Away;
    games[0].own_scorers.push(scorer("Player A", 2));

    let records = MatchAggregator::new(&games).coach_records();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].coach, "Coach One");
    assert_eq!((records[0].matches, records[0].home, records[0].away), (2, 1, 1));
    assert_eq!((records[0].wins, records[0].draws), (1, 1));
    assert_eq!(records[0].top_scorer.as_ref().map(|t| t.goals), Some(2));
    assert_eq!(records[1].losses, 1);
}

#[test]
fn head_to_head_is_case_insensitive() {
    let mut games = results(2024, "WLD");
    games[1].opponent = "Other Club".to_string();
    games[2].opponent = "RIVALS fc".to_string();

    let h2h = MatchAggregator::new(&games).head_to_head("rivals FC");
    assert_eq!(h2h.matches.len(), 2);
    assert_eq!((h2h.wins, h2h.draws, h2h.losses), (1, 1, 0));
    assert!(h2h.matches[0].date < h2h.matches[1].date);
}

#[test]
fn player_record_counts_roles_and_bench_goals() {
    // Arrange: two games with a full lineup, one without
    let roster = common::squad_of_fifteen();
    let lineup = common::full_lineup(&roster);

    let mut first = game(date(1, 3, 2024), 2, 1);
    first.lineup = Some(lineup.clone());
    first.own_scorers.push(scorer("Player A", 2));

    let mut second = game(date(8, 3, 2024), 1, 1);
    second.lineup = Some(lineup);
    second.own_scorers.push(club_stats::model::match_record::OwnScorer {
        name: "Sub One".to_string(),
        goals: 1,
        from_bench: true,
    });

    let third = game(date(15, 3, 2024), 0, 2);

    let games = vec![first, second, third];
    let agg = MatchAggregator::new(&games);

    // Act
    let a = agg.player_record("player a");
    let sub = agg.player_record("Sub One");

    // Assert
    assert_eq!(a.club_matches, 3);
    assert_eq!(a.matches_with_lineup, 2);
    assert_eq!(a.as_starter, 2);
    assert_eq!(a.matches_involved, 2);
    assert_eq!(a.goals, 2);
    assert_eq!(a.goals_as_starter, 2);
    assert_eq!(a.goals_per_match, 1.0);
    assert_eq!((a.wins, a.draws, a.losses), (1, 1, 0));

    assert_eq!(sub.as_substitute, 2);
    assert_eq!(sub.goals_from_bench, 1);
    assert_eq!(sub.goals_per_match, 0.5);
}
