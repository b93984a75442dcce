//! Output generation for the trade metrics pipeline.
//!
//! - **frame**: fact rows and harmonized records as polars frames
//! - **writer**: CSV output through a staging file
//! - **manifest**: JSON summary of a run

pub mod error;
pub mod frame;
pub mod manifest;
pub mod writer;

pub use error::{OutputError, Result};
pub use frame::{fact_frame, normalized_frame};
pub use manifest::{ManifestInput, RunManifest, write_manifest_json};
pub use writer::{write_atomically, write_frame_csv};
