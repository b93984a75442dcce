//! Loading of raw trade reports.
//!
//! - **csv_table**: delimited file reading into a [`RawTable`] of strings
//! - **records**: schema validation and projection onto [`trade_model::RawTradeRecord`]

pub mod csv_table;
pub mod records;

pub use csv_table::{RawRow, RawTable, read_csv_table, read_csv_table_from_reader};
pub use records::{extract_records, load_trade_records};
