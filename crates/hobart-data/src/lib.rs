#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/hobart-quant/hobart/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod error;
pub mod loader;

pub use error::{DataError, Result};
pub use loader::{DATE_FORMAT, load_return_table, load_universes, read_return_table};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
