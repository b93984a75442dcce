//! Strategic HTS code catalogue.
//!
//! Static reference data used to read trade balances by product group:
//! categories with their impact and dependency levels, a flat reference
//! sheet and a priority matrix of scores.

pub mod codes;
pub mod error;
pub mod reference;

pub use codes::{StrategicCategory, strategic_categories};
pub use error::{CatalogueError, Result};
pub use reference::{
    PriorityEntry, ReferenceRow, dependency_score, impact_score, priority_matrix, reference_rows,
    write_reference_csv, write_reference_json,
};
