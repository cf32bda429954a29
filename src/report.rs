use std::fmt::Write;

use crate::aggregator::{CoachRecord, Comparison, HeadToHead, PlayerRecord, SeasonComparison, SeasonReport, SeriesPoint, Summary};
use crate::dates::format_date;
use crate::model::fixture::Fixture;
use crate::model::match_record::{MatchRecord, Venue};
use crate::names::format_tallies;
use crate::squad::Squad;

const DASH: &str = "\u{2014}";

fn position_text(position: Option<u32>) -> String {
    position.map_or_else(|| DASH.to_string(), |p| p.to_string())
}

fn signed(value: i64) -> String {
    if value > 0 { format!("+{}", value) } else { value.to_string() }
}

fn signed_f(value: f64, places: usize) -> String {
    if value > 0.0 { format!("+{:.*}", places, value) } else { format!("{:.*}", places, value) }
}

pub fn summary_text(summary: &Summary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Matches: {}  W/D/L: {}/{}/{}", summary.matches, summary.wins, summary.draws, summary.losses);
    let _ = writeln!(
        out,
        "Goals: {} for, {} against ({})  Avg: {:.2} / {:.2}",
        summary.goals_for,
        summary.goals_against,
        signed(summary.goal_difference),
        summary.avg_goals_for,
        summary.avg_goals_against
    );
    let _ = writeln!(out, "Points: {} ({:.1}%)", summary.points, summary.points_percentage);
    let _ = writeln!(out, "Longest unbeaten run: {}  Longest losing run: {}", summary.longest_unbeaten, summary.longest_losing);
    if summary.table_position.is_some() {
        let _ = writeln!(out, "Table position: {}", position_text(summary.table_position));
    }
    let _ = writeln!(out, "Top scorers: {}", format_tallies(&summary.top_scorers));
    let _ = writeln!(out, "Conceded to: {}", format_tallies(&summary.opponent_scorers));
    out
}

pub fn season_text(season: &SeasonReport) -> String {
    let mut out = format!("== Season {} ==\n", season.year);
    out.push_str(&summary_text(&season.summary));
    for comp in &season.competitions {
        let s = &comp.summary;
        let _ = writeln!(
            out,
            "  {}: {} played, {}/{}/{}, {}-{}, {} pts ({:.1}%)",
            comp.name, s.matches, s.wins, s.draws, s.losses, s.goals_for, s.goals_against, s.points, s.points_percentage
        );
    }
    out
}

/// One line per match of running totals, as plotted on the evolution charts.
pub fn series_text(series: &[SeriesPoint]) -> String {
    let mut out = format!("  {:>4} {:>4} {:>4} {:>5} {:>3} {:>3} {:>3} {:>5}\n", "#", "GF", "GA", "GD", "W", "D", "L", "Pts");
    for p in series {
        let _ = writeln!(
            out,
            "  {:>4} {:>4} {:>4} {:>5} {:>3} {:>3} {:>3} {:>5}",
            p.index,
            p.goals_for,
            p.goals_against,
            signed(p.goal_difference),
            p.wins,
            p.draws,
            p.losses,
            p.points
        );
    }
    out
}

fn comparison_rows(out: &mut String, c: &Comparison) {
    let rows: [(&str, String, String, String); 8] = [
        ("Matches", c.previous.matches.to_string(), c.current.matches.to_string(), signed(c.delta.matches)),
        ("Wins", c.previous.wins.to_string(), c.current.wins.to_string(), signed(c.delta.wins)),
        ("Draws", c.previous.draws.to_string(), c.current.draws.to_string(), signed(c.delta.draws)),
        ("Losses", c.previous.losses.to_string(), c.current.losses.to_string(), signed(c.delta.losses)),
        ("Goals for", c.previous.goals_for.to_string(), c.current.goals_for.to_string(), signed(c.delta.goals_for)),
        ("Goals against", c.previous.goals_against.to_string(), c.current.goals_against.to_string(), signed(c.delta.goals_against)),
        ("Points", c.previous.points.to_string(), c.current.points.to_string(), signed(c.delta.points)),
        (
            "Points %",
            format!("{:.1}", c.previous.points_percentage),
            format!("{:.1}", c.current.points_percentage),
            signed_f(c.delta.points_percentage, 1),
        ),
    ];
    for (label, before, now, delta) in rows {
        let _ = writeln!(out, "  {:<14} {:>6} {:>6} {:>7}", label, before, now, delta);
    }
}

pub fn comparison_text(cmp: &SeasonComparison) -> String {
    let mut out = format!(
        "== {} vs first {} matches of {} ({} played in total) ==\n",
        cmp.current_year, cmp.totals.previous.matches, cmp.previous_year, cmp.totals.previous_total_matches
    );
    let _ = writeln!(out, "  {:<14} {:>6} {:>6} {:>7}", "", cmp.previous_year, cmp.current_year, "diff");
    comparison_rows(&mut out, &cmp.totals);
    for (name, c) in &cmp.competitions {
        let _ = writeln!(out, "-- {} --", name);
        if c.previous_total_matches < c.current.matches {
            let _ = writeln!(out, "  (previous season has fewer matches in this competition)");
        }
        if c.current.table_position.is_some() || c.previous.table_position.is_some() {
            let _ = writeln!(
                out,
                "  Table position: {} now, {} at the same point last season",
                position_text(c.current.table_position),
                position_text(c.previous.table_position)
            );
        }
        comparison_rows(&mut out, c);
    }
    out
}

pub fn coaches_text(records: &[CoachRecord]) -> String {
    let mut out = String::new();
    for r in records {
        let top = r.top_scorer.as_ref().map_or_else(|| DASH.to_string(), |t| format!("{} ({})", t.name, t.goals));
        let _ = writeln!(
            out,
            "{}: {} matches ({} home, {} away), {}/{}/{}, {}-{} ({}), top scorer {}",
            r.coach,
            r.matches,
            r.home,
            r.away,
            r.wins,
            r.draws,
            r.losses,
            r.goals_for,
            r.goals_against,
            signed(r.goal_difference),
            top
        );
    }
    out
}

pub fn head_to_head_text(h2h: &HeadToHead) -> String {
    let mut out = format!(
        "Record against {}: {}/{}/{} in {} matches, goals {}-{}\n",
        h2h.opponent,
        h2h.wins,
        h2h.draws,
        h2h.losses,
        h2h.matches.len(),
        h2h.goals_for,
        h2h.goals_against
    );
    for m in &h2h.matches {
        let venue = match m.venue {
            Venue::Home => "Home",
            Venue::Away => "Away",
        };
        let _ = writeln!(
            out,
            "  {} {} {} {}-{}",
            format_date(m.date),
            venue,
            if m.competition.is_empty() { DASH } else { m.competition.as_str() },
            m.score.own,
            m.score.opponent
        );
    }
    let _ = writeln!(out, "Our scorers: {}", format_tallies(&h2h.own_scorers));
    let _ = writeln!(out, "Their scorers: {}", format_tallies(&h2h.opponent_scorers));
    out
}

pub fn player_text(p: &PlayerRecord) -> String {
    let mut out = format!("== {} ==\n", p.name);
    let _ = writeln!(out, "Club matches recorded: {}", p.club_matches);
    let _ = writeln!(out, "Matches involved: {}", p.matches_involved);
    let _ = writeln!(
        out,
        "Starter: {}  Substitute: {}  Unavailable: {}  Injured: {}  (of {} with a lineup)",
        p.as_starter, p.as_substitute, p.as_unavailable, p.as_injured, p.matches_with_lineup
    );
    let _ = writeln!(
        out,
        "Goals: {} in {} matches ({} as starter, {} from the bench), {:.2} per match",
        p.goals, p.matches_scored_in, p.goals_as_starter, p.goals_from_bench, p.goals_per_match
    );
    let _ = writeln!(out, "W/D/L when involved: {}/{}/{}", p.wins, p.draws, p.losses);
    out
}

/// Matches in stored order, numbered the way `record-match --edit` and `delete-match` expect.
pub fn matches_text(matches: &[MatchRecord]) -> String {
    let mut out = String::new();
    for (i, m) in matches.iter().enumerate() {
        let venue = match m.venue {
            Venue::Home => "H",
            Venue::Away => "A",
        };
        let _ = writeln!(
            out,
            "{:>4}  {}  {} {} {}-{}  {}",
            i,
            format_date(m.date),
            venue,
            m.opponent,
            m.score.own,
            m.score.opponent,
            if m.competition.is_empty() { DASH } else { m.competition.as_str() }
        );
    }
    out
}

pub fn squad_text(squad: &Squad) -> String {
    let mut out = format!("== Squad ({} players) ==\n", squad.roster.len());
    for p in squad.ordered_roster() {
        let _ = writeln!(out, "  {:<12} {:<21} {}", p.status.label(), p.position.label(), p.name);
    }
    if !squad.history.is_empty() {
        let _ = writeln!(out, "== Former players ({}) ==", squad.history.len());
        for h in squad.ordered_history() {
            let _ = writeln!(out, "  {:<21} {}", h.position.label(), h.name);
        }
    }
    out
}

/// Announcement for the next fixture, with the record against that opponent.
pub fn fixture_message(fixture: &Fixture, club_name: &str, h2h: &HeadToHead) -> String {
    let (home, away) = match fixture.venue {
        Some(Venue::Away) => (fixture.opponent.as_str(), club_name),
        _ => (club_name, fixture.opponent.as_str()),
    };
    let where_line = match fixture.venue {
        Some(Venue::Home) => "At home",
        Some(Venue::Away) => "Away",
        None => "Venue to be confirmed",
    };
    let competition = if fixture.competition.is_empty() { DASH } else { fixture.competition.as_str() };
    format!(
        "Next match: {} x {}\n{} | {} | {}\nPrevious meetings: {} played, {}/{}/{}, goals {}-{}",
        home,
        away,
        fixture.date.format("%a %d/%m/%Y"),
        competition,
        where_line,
        h2h.matches.len(),
        h2h.wins,
        h2h.draws,
        h2h.losses,
        h2h.goals_for,
        h2h.goals_against
    )
}
