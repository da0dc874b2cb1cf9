//! Hand-written FFI declarations for libmediainfo.
//!
//! MediaInfo exposes a small C interface (`MediaInfoDLL.h`) on top of its
//! C++ core. The header is designed for run-time loading through function
//! pointers, so the declarations here are written by hand from it instead
//! of being generated.
//!
//! The extern block only exists with the `native` feature, which also makes
//! `build.rs` emit the link flags. The type definitions and the `wchar_t`
//! codec are always available.

pub mod types;
pub mod wide;

pub use types::*;

#[cfg(feature = "native")]
#[allow(non_snake_case)]
#[link(name = "mediainfo")]
extern "C" {
    /// Allocate a new MediaInfo instance.
    ///
    /// Returns NULL on allocation failure.
    pub fn MediaInfo_New() -> MediaInfoHandle;

    /// Free an instance allocated with `MediaInfo_New`.
    ///
    /// # Safety
    /// - `handle` must come from `MediaInfo_New` and not have been deleted
    pub fn MediaInfo_Delete(handle: MediaInfoHandle);

    /// Open and analyze a file.
    ///
    /// # Safety
    /// - `handle` must be a live instance
    /// - `file` must be a valid NUL-terminated wide string
    ///
    /// Returns 1 if the file was parsed, 0 otherwise.
    pub fn MediaInfo_Open(handle: MediaInfoHandle, file: *const wchar_t) -> size_t;

    /// Close the currently opened file, keeping the instance.
    ///
    /// # Safety
    /// - `handle` must be a live instance
    pub fn MediaInfo_Close(handle: MediaInfoHandle);

    /// Human-readable report of the opened file.
    ///
    /// # Safety
    /// - `handle` must be a live instance
    /// - The returned string is owned by the instance and only valid until
    ///   the next call on it
    pub fn MediaInfo_Inform(handle: MediaInfoHandle, reserved: size_t) -> *const wchar_t;

    /// Set or query an option. A NULL handle addresses library-wide options.
    ///
    /// # Safety
    /// - `handle` must be NULL or a live instance
    /// - `option` and `value` must be valid NUL-terminated wide strings
    pub fn MediaInfo_Option(
        handle: MediaInfoHandle,
        option: *const wchar_t,
        value: *const wchar_t,
    ) -> *const wchar_t;

    /// Look up a parameter by name.
    ///
    /// # Safety
    /// - `handle` must be a live instance
    /// - `parameter` must be a valid NUL-terminated wide string
    pub fn MediaInfo_Get(
        handle: MediaInfoHandle,
        stream_kind: MediaInfoStreamC,
        stream_number: size_t,
        parameter: *const wchar_t,
        info_kind: MediaInfoInfoC,
        search_kind: MediaInfoInfoC,
    ) -> *const wchar_t;

    /// Look up a parameter by position.
    ///
    /// # Safety
    /// - `handle` must be a live instance
    pub fn MediaInfo_GetI(
        handle: MediaInfoHandle,
        stream_kind: MediaInfoStreamC,
        stream_number: size_t,
        parameter: size_t,
        info_kind: MediaInfoInfoC,
    ) -> *const wchar_t;

    /// Count streams of a kind (`stream_number == MEDIAINFO_COUNT_STREAMS`)
    /// or parameters of one stream.
    ///
    /// # Safety
    /// - `handle` must be a live instance
    pub fn MediaInfo_Count_Get(
        handle: MediaInfoHandle,
        stream_kind: MediaInfoStreamC,
        stream_number: size_t,
    ) -> size_t;
}
