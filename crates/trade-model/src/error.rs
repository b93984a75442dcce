use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors raised while turning trade reports into a fact table.
///
/// Every variant names the artifact it came from. Row numbers are 1-based
/// positions of data rows (the header row is not counted). All-blank rows are
/// skipped but still counted, so later row numbers do not shift.
#[derive(Debug, Error)]
pub enum TradeError {
    #[error("{artifact}: missing required column '{column}' (found: {found})")]
    Schema {
        artifact: String,
        column: String,
        found: String,
    },

    #[error("{artifact}: row {row}, column '{column}': cannot parse '{value}' as a number")]
    ValueParse {
        artifact: String,
        row: usize,
        column: String,
        value: String,
    },

    #[error("{artifact}: row {row}, column 'Time': unknown month '{token}' in period '{label}'")]
    PeriodParse {
        artifact: String,
        row: usize,
        label: String,
        token: String,
    },

    #[error("{artifact}: row {row}, column 'Time': period '{label}' is not a calendar date")]
    InvalidPeriod {
        artifact: String,
        row: usize,
        label: String,
    },

    #[error(
        "{artifact}: {count} records share Time '{time}' and Country '{country}'; \
         the join key must be unique per side"
    )]
    DuplicateKey {
        artifact: String,
        time: String,
        country: String,
        count: usize,
    },

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse delimited file {path}: {message}")]
    Csv { path: PathBuf, message: String },
}

impl TradeError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, TradeError>;
