//! CLI library components for the trade metrics pipeline.

pub mod logging;
pub mod pipeline;
pub mod types;
