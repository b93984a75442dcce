//! Configuration options for trade report processing.

use serde::{Deserialize, Serialize};

use crate::flow::TradeFlow;

/// How month tokens in period labels are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PeriodMode {
    /// Exact month names only; an unknown token or an impossible date is an error.
    Strict,
    /// Case-insensitive month names; an unknown token falls back to `Annual`.
    #[default]
    Lenient,
}

/// What to do when a side reports the same (Time, Country) more than once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DuplicateKeyPolicy {
    /// Abort the run.
    #[default]
    Reject,
    /// Keep every record; the outer join emits one row per pairing.
    Allow,
}

/// Options controlling harmonization and the metrics join.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ProcessingOptions {
    pub period_mode: PeriodMode,
    pub duplicate_keys: DuplicateKeyPolicy,
}

impl ProcessingOptions {
    /// Options that refuse every ambiguity instead of resolving it.
    pub fn strict() -> Self {
        Self {
            period_mode: PeriodMode::Strict,
            duplicate_keys: DuplicateKeyPolicy::Reject,
        }
    }

    #[must_use]
    pub fn with_period_mode(mut self, mode: PeriodMode) -> Self {
        self.period_mode = mode;
        self
    }

    #[must_use]
    pub fn with_duplicate_keys(mut self, policy: DuplicateKeyPolicy) -> Self {
        self.duplicate_keys = policy;
        self
    }
}

/// Describes one input artifact: which side it is and where its value lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceSpec {
    pub flow: TradeFlow,
    /// Name used for the artifact in error messages, usually its path.
    pub artifact: String,
    /// Header of the monetary value column in the raw report.
    pub value_column: String,
}

impl SourceSpec {
    /// Uses the standard report's value column for `flow`.
    pub fn new(flow: TradeFlow, artifact: impl Into<String>) -> Self {
        Self {
            flow,
            artifact: artifact.into(),
            value_column: flow.default_value_column().to_string(),
        }
    }

    #[must_use]
    pub fn with_value_column(mut self, column: impl Into<String>) -> Self {
        self.value_column = column.into();
        self
    }
}
