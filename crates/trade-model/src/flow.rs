use std::fmt;

use serde::{Deserialize, Serialize};

/// Which side of the trade ledger a report describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TradeFlow {
    Exports,
    Imports,
}

impl TradeFlow {
    /// Lower-case label used in logs and manifests.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Exports => "exports",
            Self::Imports => "imports",
        }
    }

    /// Value column used by the standard census report for this side.
    pub fn default_value_column(self) -> &'static str {
        match self {
            Self::Exports => "Value ($US)",
            Self::Imports => "Customs Value (Gen) ($US)",
        }
    }
}

impl fmt::Display for TradeFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
