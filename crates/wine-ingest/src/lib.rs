//! Wine data ingestion.
//!
//! This crate implements the combiner stage of the pipeline:
//!
//! - **reader**: reading the semicolon-delimited raw sources
//! - **snapshot**: the verbatim raw-table export written before combination
//! - **combine**: provenance labelling and concatenation of both sources

pub mod combine;
pub mod error;
pub mod reader;
pub mod snapshot;

pub use combine::{CombinedSources, combine_frames, combine_sources, label_provenance};
pub use error::{IngestError, Result};
pub use reader::{RAW_SEPARATOR, read_wine_csv};
pub use snapshot::write_raw_snapshot;
