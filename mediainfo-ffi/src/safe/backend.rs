//! The seam between the safe wrapper and the library that does the work.
//!
//! [`MediaInfo`](crate::safe::MediaInfo) never calls the extern functions
//! directly; it goes through a [`Backend`]. [`NativeLibrary`] forwards to
//! libmediainfo, and the in-memory fake used by the tests implements the
//! same contract.

use crate::safe::kinds::{InfoKind, StreamKind};
use std::ffi::c_void;
use std::ptr::NonNull;

/// Non-null native instance pointer.
pub type RawHandle = NonNull<c_void>;

/// The native MediaInfo entry points, with strings already decoded.
///
/// Strings handed to a backend never contain interior NUL characters; the
/// safe wrapper checks them first.
///
/// Implementors must return a distinct handle from every successful
/// `create` call, and that handle must stay usable until it is passed to
/// `delete`.
pub trait Backend {
    /// `MediaInfo_New`. `None` when allocation fails.
    fn create(&self) -> Option<RawHandle>;

    /// `MediaInfo_Delete`
    ///
    /// # Safety
    /// `handle` must come from `create` on this backend and must not be
    /// used again afterwards.
    unsafe fn delete(&self, handle: RawHandle);

    /// `MediaInfo_Open`. Returns `true` if the file was parsed.
    ///
    /// # Safety
    /// `handle` must be live: returned by `create` on this backend and not
    /// yet passed to `delete`.
    unsafe fn open(&self, handle: RawHandle, path: &str) -> bool;

    /// `MediaInfo_Close`
    ///
    /// # Safety
    /// `handle` must be live: returned by `create` on this backend and not
    /// yet passed to `delete`.
    unsafe fn close(&self, handle: RawHandle);

    /// `MediaInfo_Inform`
    ///
    /// # Safety
    /// `handle` must be live: returned by `create` on this backend and not
    /// yet passed to `delete`.
    unsafe fn inform(&self, handle: RawHandle) -> String;

    /// `MediaInfo_Option`. `None` addresses library-wide options.
    ///
    /// # Safety
    /// A `Some` handle must be live: returned by `create` on this backend
    /// and not yet passed to `delete`.
    unsafe fn option(&self, handle: Option<RawHandle>, name: &str, value: &str) -> String;

    /// `MediaInfo_Get`
    ///
    /// # Safety
    /// `handle` must be live: returned by `create` on this backend and not
    /// yet passed to `delete`.
    unsafe fn get(
        &self,
        handle: RawHandle,
        stream_kind: StreamKind,
        stream_number: usize,
        parameter: &str,
        info_kind: InfoKind,
        search_kind: InfoKind,
    ) -> String;

    /// `MediaInfo_GetI`
    ///
    /// # Safety
    /// `handle` must be live: returned by `create` on this backend and not
    /// yet passed to `delete`.
    unsafe fn get_at(
        &self,
        handle: RawHandle,
        stream_kind: StreamKind,
        stream_number: usize,
        parameter: usize,
        info_kind: InfoKind,
    ) -> String;

    /// `MediaInfo_Count_Get`. `None` counts streams of the kind, `Some(n)`
    /// counts parameters of stream `n`.
    ///
    /// # Safety
    /// `handle` must be live: returned by `create` on this backend and not
    /// yet passed to `delete`.
    unsafe fn count(&self, handle: RawHandle, stream_kind: StreamKind, stream_number: Option<usize>)
        -> usize;
}

/// The real libmediainfo, linked at build time.
#[cfg(feature = "native")]
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeLibrary;

#[cfg(feature = "native")]
mod native {
    use super::*;
    use crate::manual::{self, wide};

    fn raw(handle: Option<RawHandle>) -> manual::MediaInfoHandle {
        handle.map_or(std::ptr::null_mut(), NonNull::as_ptr)
    }

    impl Backend for NativeLibrary {
        fn create(&self) -> Option<RawHandle> {
            NonNull::new(unsafe { manual::MediaInfo_New() })
        }

        unsafe fn delete(&self, handle: RawHandle) {
            manual::MediaInfo_Delete(handle.as_ptr());
        }

        unsafe fn open(&self, handle: RawHandle, path: &str) -> bool {
            let path = wide::to_wide(path);
            manual::MediaInfo_Open(handle.as_ptr(), path.as_ptr()) > 0
        }

        unsafe fn close(&self, handle: RawHandle) {
            manual::MediaInfo_Close(handle.as_ptr());
        }

        unsafe fn inform(&self, handle: RawHandle) -> String {
            wide::from_wide_ptr(manual::MediaInfo_Inform(handle.as_ptr(), 0))
        }

        unsafe fn option(&self, handle: Option<RawHandle>, name: &str, value: &str) -> String {
            let name = wide::to_wide(name);
            let value = wide::to_wide(value);
            wide::from_wide_ptr(manual::MediaInfo_Option(
                raw(handle),
                name.as_ptr(),
                value.as_ptr(),
            ))
        }

        unsafe fn get(
            &self,
            handle: RawHandle,
            stream_kind: StreamKind,
            stream_number: usize,
            parameter: &str,
            info_kind: InfoKind,
            search_kind: InfoKind,
        ) -> String {
            let parameter = wide::to_wide(parameter);
            wide::from_wide_ptr(manual::MediaInfo_Get(
                handle.as_ptr(),
                stream_kind.code(),
                stream_number,
                parameter.as_ptr(),
                info_kind.code(),
                search_kind.code(),
            ))
        }

        unsafe fn get_at(
            &self,
            handle: RawHandle,
            stream_kind: StreamKind,
            stream_number: usize,
            parameter: usize,
            info_kind: InfoKind,
        ) -> String {
            wide::from_wide_ptr(manual::MediaInfo_GetI(
                handle.as_ptr(),
                stream_kind.code(),
                stream_number,
                parameter,
                info_kind.code(),
            ))
        }

        unsafe fn count(
            &self,
            handle: RawHandle,
            stream_kind: StreamKind,
            stream_number: Option<usize>,
        ) -> usize {
            manual::MediaInfo_Count_Get(
                handle.as_ptr(),
                stream_kind.code(),
                stream_number.unwrap_or(manual::MEDIAINFO_COUNT_STREAMS),
            )
        }
    }
}
