//! CLI library components for the wine preprocessing pipeline.

#![allow(missing_docs)]

pub mod logging;
pub mod pipeline;
