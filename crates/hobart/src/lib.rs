#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/hobart-quant/hobart/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod pipeline;

// Re-export main types from sub-crates
pub use hobart_chart as chart;
pub use hobart_data as data;
pub use hobart_returns as returns;

// Re-export the pipeline entry point
pub use pipeline::{Comparison, PipelineError, compare};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
