use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use club_stats::model::lineup::Position;
use club_stats::model::raw::{RawLineup, RawMatch};
use club_stats::model::roster::{RosterEntry, Status};
use club_stats::dates::format_date;
use club_stats::{JsonStore, LineupValidator, MatchAggregator, Settings, fixtures, migrate, report};

#[derive(Parser)]
#[command(name = "club-stats")]
#[command(about = "Match history and statistics for a football club", long_about = None)]
struct Cli {
    /// Settings file path
    #[arg(short, long, default_value = "club-stats.json")]
    config: PathBuf,

    /// Directory holding the data files (overrides settings)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Season summaries, optionally a single year
    Seasons {
        #[arg(long)]
        year: Option<i32>,
    },
    /// Summary over every recorded match
    Overall {
        /// Also print running totals after each match
        #[arg(long)]
        series: bool,
    },
    /// Latest season against the same point of the previous one
    Compare,
    /// Record per coach
    Coaches,
    /// Head-to-head record against one opponent
    Versus { opponent: String },
    /// Career numbers for one player
    Player { name: String },
    /// Next scheduled fixture within a number of days
    Next {
        #[arg(long, default_value_t = 5)]
        days: i64,
    },
    /// Add fixtures from a JSON list
    ImportFixtures { file: PathBuf },
    /// Check a lineup JSON file against the current squad
    ValidateLineup { file: PathBuf },
    /// Save a played match from a JSON file, or replace an existing one
    RecordMatch {
        file: PathBuf,
        /// Index of the match to replace, as listed by `matches`
        #[arg(long)]
        edit: Option<usize>,
    },
    /// Delete a recorded match by index
    DeleteMatch { index: usize },
    /// Recorded matches with their indexes
    Matches,
    /// Current squad and former players
    Squad,
    /// Add a player to the squad
    AddPlayer {
        name: String,
        #[arg(long, default_value = "midfielder")]
        position: String,
        #[arg(long, default_value = "substitute")]
        status: String,
    },
    /// Move a player from the squad to the history ledger
    RemovePlayer { name: String },
    /// Bring a former player back as a substitute
    ReturnPlayer { name: String },
    /// Change a squad player's status
    SetStatus { name: String, status: String },
    /// Move every squad player to the history ledger
    ClearSquad,
}

fn run(cli: Cli) -> club_stats::Result<()> {
    let mut settings = Settings::load(&cli.config)?.with_env_overrides();
    if let Some(dir) = cli.data_dir {
        settings.data_dir = dir;
    }
    let json_store = JsonStore::new(settings.data_dir.clone());
    let mut store = json_store.load(settings)?;
    info!(dir = %json_store.dir().display(), matches = store.matches.len(), "Data loaded");
    let aggregator = MatchAggregator::new(&store.matches);

    match cli.command {
        Commands::Seasons { year } => {
            let seasons = match year {
                Some(y) => aggregator.season(y).into_iter().collect(),
                None => aggregator.seasons(),
            };
            if seasons.is_empty() {
                println!("No matches recorded yet.");
            }
            for season in &seasons {
                println!("{}", report::season_text(season));
            }
        }
        Commands::Overall { series } => {
            println!("{}", report::summary_text(&aggregator.overall()));
            if series {
                print!("{}", report::series_text(&aggregator.overall_series()));
            }
        }
        Commands::Compare => match aggregator.compare_latest_seasons(&store.settings.top_flight_competition) {
            Some(cmp) => println!("{}", report::comparison_text(&cmp)),
            None => println!("Record at least two seasons to compare them."),
        },
        Commands::Coaches => print!("{}", report::coaches_text(&aggregator.coach_records())),
        Commands::Versus { opponent } => println!("{}", report::head_to_head_text(&aggregator.head_to_head(&opponent))),
        Commands::Player { name } => println!("{}", report::player_text(&aggregator.player_record(&name))),
        Commands::Next { days } => {
            let today = chrono::Local::now().date_naive();
            match fixtures::next_fixture(&store.fixtures, days, today) {
                Some(fixture) => {
                    let h2h = aggregator.head_to_head(&fixture.opponent);
                    let message = report::fixture_message(fixture, &store.settings.club_name, &h2h);
                    info!(opponent = %fixture.opponent, "Prepared next fixture message");
                    println!("{}", message);
                }
                None => println!("No matches in the next {} days from {}.", days, today),
            }
        }
        Commands::ImportFixtures { file } => {
            let body = std::fs::read_to_string(&file)?;
            let club_name = store.settings.club_name.clone();
            let outcome = fixtures::import_json(&mut store.fixtures, &body, &club_name)?;
            json_store.save(&store)?;
            println!(
                "Added: {} | Already scheduled: {} | Invalid: {} | Total: {}",
                outcome.added, outcome.duplicates, outcome.invalid, outcome.total
            );
        }
        Commands::ValidateLineup { file } => {
            let body = std::fs::read_to_string(&file)?;
            let raw: RawLineup = serde_json::from_str(&body)?;
            let lineup = migrate::lineup(raw, &store.migration_context());
            match LineupValidator::new(&store.squad.roster).validate(&lineup) {
                Ok(()) => println!("Lineup is valid."),
                Err(reason) => println!("Lineup rejected: {}", reason),
            }
        }
        Commands::RecordMatch { file, edit } => {
            let body = std::fs::read_to_string(&file)?;
            let raw: RawMatch = serde_json::from_str(&body)?;
            let index = store.record_raw_match(raw, edit)?;
            json_store.save(&store)?;
            println!("Saved match #{}.", index);
        }
        Commands::DeleteMatch { index } => {
            let removed = store.delete_match(index)?;
            json_store.save(&store)?;
            println!("Deleted {} against {}.", format_date(removed.date), removed.opponent);
        }
        Commands::Matches => print!("{}", report::matches_text(&store.matches)),
        Commands::Squad => print!("{}", report::squad_text(&store.squad)),
        Commands::AddPlayer { name, position, status } => {
            let position = Position::parse(&position).unwrap_or_default();
            let status = Status::parse(&status).unwrap_or_default();
            store.squad.add(RosterEntry::new(name.as_str(), position, status))?;
            json_store.save(&store)?;
            println!("Added {} ({}, {}).", name.trim(), position.label(), status.label());
        }
        Commands::RemovePlayer { name } => {
            let removed = store.squad.remove(&name)?;
            json_store.save(&store)?;
            println!("Moved {} to former players.", removed.name);
        }
        Commands::ReturnPlayer { name } => {
            store.squad.return_player(&name)?;
            json_store.save(&store)?;
            println!("{} is back in the squad as a substitute.", name.trim());
        }
        Commands::SetStatus { name, status } => {
            let Some(status) = Status::parse(&status) else {
                println!("Unknown status '{}'. Use starter, substitute, unavailable or injured.", status);
                return Ok(());
            };
            store.squad.set_status(&name, status)?;
            json_store.save(&store)?;
            println!("{} is now {}.", name.trim(), status.label());
        }
        Commands::ClearSquad => {
            let players = store.squad.roster.len();
            store.squad.clear();
            json_store.save(&store)?;
            println!("Moved {} players to former players.", players);
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Command failed");
            ExitCode::FAILURE
        }
    }
}
