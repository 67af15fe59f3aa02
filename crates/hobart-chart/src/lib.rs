#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/hobart-quant/hobart/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod compose;
pub mod trace;

pub use compose::{ChartError, ChartSpec, comparison_chart, difference_chart};
pub use trace::{
    BASKET_COLOR, DIFFERENCE_COLOR, INDEX_COLOR, LegendCorner, LineTrace, Rgb,
};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
