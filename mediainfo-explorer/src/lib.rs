//! Report building behind the `mediainfo-explorer` binary.
//!
//! Everything here is generic over [`mediainfo_ffi::Backend`], so the
//! binary drives it with the linked library and the tests with a fake.

pub mod catalog;
pub mod error;
pub mod probe;
pub mod report;

pub use catalog::{build_catalog_report, catalog_directory, CatalogReport};
pub use error::{ExplorerError, Result};
pub use probe::{ensure_file, parse_option, probe_media_file, Probe};
pub use report::{media_report_from_snapshot, MediaReport, StreamReport};
