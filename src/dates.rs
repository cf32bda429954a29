use chrono::{Datelike, NaiveDate};

use crate::error::MigrationError;

/// Day-first format used for every stored and imported date.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Parse a `dd/mm/yyyy` date, trimming surrounding whitespace.
pub fn parse_date(s: &str) -> Result<NaiveDate, MigrationError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(MigrationError::MissingDate);
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|_| MigrationError::InvalidDate(trimmed.to_string()))
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Season a date belongs to (its calendar year).
pub fn season_of(date: NaiveDate) -> i32 {
    date.year()
}

/// Serde adapter so canonical records keep the `dd/mm/yyyy` text form on disk.
pub mod serde_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_date(*date))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_date(&raw).map_err(serde::de::Error::custom)
    }
}
