//! Rust bindings for the native MediaInfo library.
//!
//! MediaInfo reads technical and tag metadata from media files: container
//! format, duration, per-stream codecs, resolutions, languages and so on.
//! This crate wraps its C interface in two layers:
//!
//! 1. **Manual FFI** (`manual` module) - Hand-written extern "C" declarations,
//!    the C enum codes and the `wchar_t` string codec
//! 2. **Safe Wrapper** (`safe` module) - An owned handle type, typed stream
//!    and info kinds, and sorted snapshots of everything the library found
//!
//! # Prerequisites
//!
//! Linking needs the `native` feature and the MediaInfo development library:
//!
//! ```sh
//! # Ubuntu/Debian
//! sudo apt install libmediainfo-dev
//!
//! # Fedora
//! sudo dnf install libmediainfo-devel
//!
//! # macOS
//! brew install media-info
//! ```
//!
//! Without `native` the crate still builds; the safe wrapper is generic over
//! [`Backend`](safe::Backend) and can be driven by any implementation of it.
//!
//! # Example
//!
//! ```no_run
//! # #[cfg(feature = "native")]
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use mediainfo_ffi::safe::{MediaInfo, StreamKind};
//!
//! println!("{}", MediaInfo::version()?);
//!
//! let mut media = MediaInfo::new()?;
//! if media.open("video.mkv")? {
//!     let snapshot = media.snapshot()?;
//!     for (kind, streams) in snapshot.iter() {
//!         for (index, stream) in streams.iter().enumerate() {
//!             println!("{} #{}: {:?}", kind, index, stream.get("Format"));
//!         }
//!     }
//!     println!("Duration: {} ms", media.get(StreamKind::General, 0, "Duration")?);
//! }
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "native"))]
//! # fn main() {}
//! ```

pub mod manual;
pub mod safe;

// Re-export the safe API at the crate root for convenience
#[cfg(feature = "native")]
pub use safe::NativeLibrary;
pub use safe::{
    Backend, InfoKind, MediaInfo, MediaInfoError, ParameterName, Result, Snapshot, StreamKind,
    StreamParameters,
};
