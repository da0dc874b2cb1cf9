//! Hand-written C type definitions for the MediaInfo DLL interface.
//!
//! These mirror `MediaInfoDLL.h`. The two enumerations are passed by value
//! as C `int`s, so their numeric values are part of the ABI.

use std::ffi::c_void;

pub use libc::{c_int, size_t, wchar_t};

/// Opaque handle returned by `MediaInfo_New` - only ever used as a pointer
pub type MediaInfoHandle = *mut c_void;

/// `MediaInfo_stream_C`: category of stream to query
pub type MediaInfoStreamC = c_int;

pub const MEDIAINFO_STREAM_GENERAL: MediaInfoStreamC = 0;
pub const MEDIAINFO_STREAM_VIDEO: MediaInfoStreamC = 1;
pub const MEDIAINFO_STREAM_AUDIO: MediaInfoStreamC = 2;
pub const MEDIAINFO_STREAM_TEXT: MediaInfoStreamC = 3;
pub const MEDIAINFO_STREAM_CHAPTERS: MediaInfoStreamC = 4;
pub const MEDIAINFO_STREAM_IMAGE: MediaInfoStreamC = 5;
pub const MEDIAINFO_STREAM_MENU: MediaInfoStreamC = 6;

/// `MediaInfo_info_C`: which facet of a parameter to return
pub type MediaInfoInfoC = c_int;

pub const MEDIAINFO_INFO_NAME: MediaInfoInfoC = 0;
pub const MEDIAINFO_INFO_TEXT: MediaInfoInfoC = 1;
pub const MEDIAINFO_INFO_MEASURE: MediaInfoInfoC = 2;
pub const MEDIAINFO_INFO_OPTIONS: MediaInfoInfoC = 3;
pub const MEDIAINFO_INFO_NAME_TEXT: MediaInfoInfoC = 4;
pub const MEDIAINFO_INFO_MEASURE_TEXT: MediaInfoInfoC = 5;
pub const MEDIAINFO_INFO_INFO: MediaInfoInfoC = 6;
pub const MEDIAINFO_INFO_HOWTO: MediaInfoInfoC = 7;
pub const MEDIAINFO_INFO_DOMAIN: MediaInfoInfoC = 8;

/// Stream number meaning "count streams" rather than "count parameters"
/// when passed to `MediaInfo_Count_Get` (`(size_t)-1` in C).
pub const MEDIAINFO_COUNT_STREAMS: size_t = size_t::MAX;
