mod common;

use club_stats::LineupValidator;
use club_stats::error::LineupViolation;
use club_stats::model::lineup::{Lineup, LineupSlot, Position};

use common::{full_lineup, squad_of_fifteen};

#[test]
fn full_squad_lineup_passes() {
    let roster = squad_of_fifteen();
    let lineup = full_lineup(&roster);
    assert_eq!(lineup.starter_count(), 11);
    assert_eq!(lineup.goalkeeper_count(), 1);
    assert_eq!(LineupValidator::new(&roster).validate(&lineup), Ok(()));
}

#[test]
fn lineup_from_roster_mirrors_statuses() {
    let roster = squad_of_fifteen();
    let lineup = Lineup::from_roster(&roster);
    assert_eq!(lineup, full_lineup(&roster));
    assert_eq!(lineup.slot_of("player a"), Some(LineupSlot::Starter(Position::Forward)));
    assert_eq!(lineup.slot_of("Sub One"), Some(LineupSlot::Substitute));
    assert_eq!(lineup.slot_of("Nobody"), None);
}

#[test]
fn starters_are_read_goal_outwards() {
    let lineup = full_lineup(&squad_of_fifteen());
    let starters: Vec<&str> = lineup.starters().collect();
    assert_eq!(starters.len(), 11);
    assert_eq!(starters[0], "Keeper");
    assert_eq!(starters[10], "Forward Three");
}

#[test]
fn wrong_starter_count_is_checked_first() {
    let roster = squad_of_fifteen();
    let mut lineup = full_lineup(&roster);
    // Also breaks coverage, but the starter rule must be reported.
    lineup.remove("Forward Three");
    assert_eq!(LineupValidator::new(&roster).validate(&lineup), Err(LineupViolation::StarterCount(10)));

    lineup.assign("Forward Three", LineupSlot::Starter(Position::Forward));
    lineup.assign("Sub One", LineupSlot::Starter(Position::Midfielder));
    assert_eq!(LineupValidator::new(&roster).validate(&lineup), Err(LineupViolation::StarterCount(12)));
}

#[test]
fn needs_exactly_one_goalkeeper() {
    let roster = squad_of_fifteen();

    let mut none = full_lineup(&roster);
    none.assign("Keeper", LineupSlot::Starter(Position::CenterBack));
    assert_eq!(LineupValidator::new(&roster).validate(&none), Err(LineupViolation::GoalkeeperCount(0)));

    let mut two = full_lineup(&roster);
    two.assign("Right Back", LineupSlot::Starter(Position::Goalkeeper));
    assert_eq!(LineupValidator::new(&roster).validate(&two), Err(LineupViolation::GoalkeeperCount(2)));
}

#[test]
fn needs_four_substitutes() {
    let roster = squad_of_fifteen();
    let mut lineup = full_lineup(&roster);
    lineup.assign("Sub Three", LineupSlot::Unavailable);
    let err = LineupValidator::new(&roster).validate(&lineup).unwrap_err();
    assert_eq!(err, LineupViolation::TooFewSubstitutes(3));
    assert!(err.to_string().contains("at least 4 substitutes"), "message was: {}", err);
}

#[test]
fn every_squad_player_must_be_listed() {
    let mut roster = squad_of_fifteen();
    roster.push(club_stats::model::roster::RosterEntry::new(
        "Late Arrival",
        Position::Forward,
        club_stats::model::roster::Status::Injured,
    ));
    roster.push(club_stats::model::roster::RosterEntry::new(
        "Another One",
        Position::LeftBack,
        club_stats::model::roster::Status::Unavailable,
    ));
    let lineup = full_lineup(&squad_of_fifteen());

    let err = LineupValidator::new(&roster).validate(&lineup).unwrap_err();
    assert_eq!(err, LineupViolation::MissingPlayers(vec!["Another One".to_string(), "Late Arrival".to_string()]));
    assert!(err.to_string().contains("Another One, Late Arrival"), "message was: {}", err);
}

#[test]
fn extra_unavailable_and_injured_players_are_fine() {
    let mut roster = squad_of_fifteen();
    roster.push(club_stats::model::roster::RosterEntry::new(
        "Hurt Player",
        Position::Forward,
        club_stats::model::roster::Status::Injured,
    ));
    let mut lineup = full_lineup(&roster);
    lineup.assign("Hurt Player", LineupSlot::Injured);
    assert_eq!(LineupValidator::new(&roster).validate(&lineup), Ok(()));
}

#[test]
fn player_in_two_lists_is_rejected() {
    let roster = squad_of_fifteen();
    let mut lineup = full_lineup(&roster);
    lineup.injured.push("sub one".to_string());
    assert_eq!(
        LineupValidator::new(&roster).validate(&lineup),
        Err(LineupViolation::DuplicatePlayer("sub one".to_string()))
    );

    // dedupe keeps the first occurrence, which makes the lineup valid again
    lineup.dedupe();
    assert!(lineup.injured.is_empty());
    assert_eq!(LineupValidator::new(&roster).validate(&lineup), Ok(()));
}

#[test]
fn assign_moves_a_player_between_lists() {
    let mut lineup = full_lineup(&squad_of_fifteen());
    lineup.assign("Player A", LineupSlot::Substitute);
    assert_eq!(lineup.starter_count(), 10);
    assert_eq!(lineup.substitutes.len(), 5);
    assert_eq!(lineup.slot_of("Player A"), Some(LineupSlot::Substitute));
}

#[test]
fn positions_parse_leniently() {
    assert_eq!(Position::parse("Centre-Back"), Some(Position::CenterBack));
    assert_eq!(Position::parse("right_back"), Some(Position::RightBack));
    assert_eq!(Position::parse("GK"), Some(Position::Goalkeeper));
    assert_eq!(Position::parse("defensive-midfielder"), Some(Position::DefensiveMidfielder));
    assert_eq!(Position::parse("sweeper"), None);
    assert_eq!(Position::default(), Position::Midfielder);
}
