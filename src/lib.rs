//! Match history for one club: season and competition statistics, streaks, scorer
//! leaderboards, cumulative series for charts, and matchday lineup validation.

pub mod aggregator;
pub mod config;
pub mod dates;
pub mod error;
pub mod fixtures;
pub mod lineup;
pub mod lists;
pub mod migrate;
pub mod model;
pub mod names;
pub mod report;
pub mod squad;
pub mod store;

pub use aggregator::MatchAggregator;
pub use config::Settings;
pub use error::{Error, Result};
pub use lineup::LineupValidator;
pub use store::{JsonStore, Store};
