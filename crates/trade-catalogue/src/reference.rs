//! Flat reference sheet and priority scores derived from the categories.

use std::io::Write;

use serde::Serialize;

use crate::codes::{StrategicCategory, strategic_categories};
use crate::error::Result;

/// One HTS heading with its category context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReferenceRow {
    #[serde(rename = "HTS_Code")]
    pub hts_code: &'static str,
    #[serde(rename = "Description")]
    pub description: &'static str,
    #[serde(rename = "Category")]
    pub category: &'static str,
    #[serde(rename = "Trade_Impact")]
    pub trade_impact: &'static str,
    #[serde(rename = "Dependency_Level")]
    pub dependency_level: &'static str,
    #[serde(rename = "Strategic_Note")]
    pub strategic_note: &'static str,
}

/// Every code of every category, in catalogue order.
pub fn reference_rows() -> Vec<ReferenceRow> {
    strategic_categories()
        .iter()
        .flat_map(|category| {
            category.codes.iter().map(|&(hts_code, description)| ReferenceRow {
                hts_code,
                description,
                category: category.name,
                trade_impact: category.trade_impact,
                dependency_level: category.dependency_level,
                strategic_note: category.description,
            })
        })
        .collect()
}

/// Score for a trade impact level.
pub fn impact_score(level: &str) -> Option<f64> {
    match level {
        "High" => Some(3.0),
        "Medium-High" => Some(2.5),
        "Medium" => Some(2.0),
        "Low-Medium" => Some(1.5),
        "Low" => Some(1.0),
        _ => None,
    }
}

/// Score for a dependency level. `Low-Medium` has no place on this scale.
pub fn dependency_score(level: &str) -> Option<f64> {
    match level {
        "Critical" => Some(3.0),
        "High" => Some(2.5),
        "Medium-High" => Some(2.0),
        "Medium" => Some(1.5),
        "Low" => Some(1.0),
        _ => None,
    }
}

/// Position of one category on the impact/dependency matrix.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriorityEntry {
    pub category: &'static str,
    pub impact_score: Option<f64>,
    pub dependency_score: Option<f64>,
    pub code_count: usize,
}

impl PriorityEntry {
    fn of(category: &StrategicCategory) -> Self {
        Self {
            category: category.name,
            impact_score: impact_score(category.impact_level()),
            dependency_score: dependency_score(category.dependency_level),
            code_count: category.codes.len(),
        }
    }

    /// High impact and high dependency at once.
    pub fn is_strategic_priority(&self) -> bool {
        self.impact_score.is_some_and(|score| score >= 2.5)
            && self.dependency_score.is_some_and(|score| score >= 2.5)
    }
}

pub fn priority_matrix() -> Vec<PriorityEntry> {
    strategic_categories().iter().map(PriorityEntry::of).collect()
}

/// Writes the reference sheet as CSV with a header row.
pub fn write_reference_csv<W: Write>(writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in reference_rows() {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Writes the reference sheet as a pretty-printed JSON array.
pub fn write_reference_json<W: Write>(mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, &reference_rows())?;
    writeln!(writer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scales_differ_for_high() {
        assert_eq!(impact_score("High"), Some(3.0));
        assert_eq!(dependency_score("High"), Some(2.5));
        assert_eq!(dependency_score("Low-Medium"), None);
    }

    #[test]
    fn semiconductors_are_a_priority() {
        let matrix = priority_matrix();
        assert!(matrix[0].is_strategic_priority());
        assert!(!matrix[5].is_strategic_priority());
    }
}
