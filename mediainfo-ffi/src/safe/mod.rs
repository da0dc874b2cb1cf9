//! Safe, idiomatic Rust wrapper for libmediainfo.
//!
//! This module provides a high-level, safe API on top of the hand-written
//! declarations in [`manual`](crate::manual). It uses RAII for the native
//! handle and Rust's type system for the stream and info kinds.
//!
//! # Example
//!
//! ```no_run
//! # #[cfg(feature = "native")]
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use mediainfo_ffi::safe::{MediaInfo, StreamKind};
//!
//! let mut media = MediaInfo::new()?;
//! if media.open("video.mp4")? {
//!     println!("Format: {}", media.get(StreamKind::General, 0, "Format")?);
//!     println!("Audio streams: {}", media.stream_count(StreamKind::Audio)?);
//! }
//! media.dispose()?;
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "native"))]
//! # fn main() {}
//! ```

pub mod backend;
pub mod error;
#[cfg(any(test, feature = "testing"))]
pub mod fake;
pub mod kinds;
pub mod media_info;
pub mod snapshot;
pub mod static_info;

#[cfg(feature = "native")]
pub use backend::NativeLibrary;
pub use backend::{Backend, RawHandle};
pub use error::{MediaInfoError, Result};
pub use kinds::{InfoKind, StreamKind};
pub use media_info::MediaInfo;
pub use snapshot::{ParameterName, Snapshot, StreamParameters};
