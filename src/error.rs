use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid record #{index} in {file}: {source}")]
    InvalidRecord {
        file: String,
        index: usize,
        #[source]
        source: MigrationError,
    },
    #[error("invalid match: {0}")]
    InvalidMatch(#[from] MigrationError),
    #[error("invalid lineup: {0}")]
    Lineup(#[from] LineupViolation),
    #[error(transparent)]
    Squad(#[from] SquadError),
    #[error("match #{0} does not exist")]
    MatchNotFound(usize),
}

/// Problems found while turning a stored or imported item into a canonical record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MigrationError {
    #[error("missing date")]
    MissingDate,
    #[error("malformed date '{0}', expected dd/mm/yyyy")]
    InvalidDate(String),
    #[error("missing {0}")]
    MissingField(&'static str),
}

/// First lineup rule that failed. The display text is the reason shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LineupViolation {
    #[error("the lineup must have exactly 11 starters (found {0})")]
    StarterCount(usize),
    #[error("the lineup must have exactly 1 starting goalkeeper (found {0})")]
    GoalkeeperCount(usize),
    #[error("the lineup must have at least 4 substitutes (found {0})")]
    TooFewSubstitutes(usize),
    #[error("every squad player must be in one lineup list; missing: {}", .0.join(", "))]
    MissingPlayers(Vec<String>),
    #[error("'{0}' appears in more than one lineup list")]
    DuplicatePlayer(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SquadError {
    #[error("'{0}' is already in the squad")]
    Duplicate(String),
    #[error("the squad cannot have more than 11 starters")]
    TooManyStarters,
    #[error("'{0}' is not in the squad")]
    UnknownPlayer(String),
    #[error("'{0}' is not in the player history")]
    NotInHistory(String),
    #[error("player name cannot be empty")]
    EmptyName,
}
