#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/hobart-quant/hobart/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod align;
pub mod cumulate;
pub mod series;
pub mod table;

pub use align::{AlignedPair, align};
pub use cumulate::{CumulativeSeries, DifferenceSeries, cumulate, difference};
pub use series::{DatedSeries, SeriesError};
pub use table::{ReturnTable, TableError};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
