//! Safe wrapper for a MediaInfo instance handle.

use crate::safe::backend::{Backend, RawHandle};
use crate::safe::error::{check_arg, MediaInfoError, Result};
use crate::safe::kinds::{InfoKind, StreamKind};
use std::path::Path;
use tracing::{debug, trace};

/// Safe wrapper around one native MediaInfo instance.
///
/// The instance is allocated on construction and freed by [`dispose`] or,
/// failing that, when the wrapper is dropped. Between the two, any number of
/// files can be opened, queried and closed on the same instance.
///
/// [`dispose`]: MediaInfo::dispose
pub struct MediaInfo<B: Backend> {
    backend: B,
    handle: Option<RawHandle>,
}

impl<B: Backend> MediaInfo<B> {
    /// Allocate a native instance on `backend`.
    pub fn with_backend(backend: B) -> Result<Self> {
        let handle = backend.create().ok_or(MediaInfoError::Alloc)?;
        debug!("allocated MediaInfo handle {:p}", handle);
        Ok(MediaInfo {
            backend,
            handle: Some(handle),
        })
    }

    /// The backend this instance talks to.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Whether the native instance has been released.
    pub fn is_disposed(&self) -> bool {
        self.handle.is_none()
    }

    fn handle(&self) -> Result<RawHandle> {
        self.handle.ok_or(MediaInfoError::Disposed)
    }

    /// Open and analyze a media file.
    ///
    /// # Returns
    /// `Ok(true)` if the library could parse the file, `Ok(false)` if it is
    /// missing, unsupported or corrupt. Errors are reserved for a disposed
    /// handle or a path the library cannot receive.
    pub fn open<P: AsRef<Path>>(&mut self, path: P) -> Result<bool> {
        let handle = self.handle()?;
        let path_str = path
            .as_ref()
            .to_str()
            .ok_or_else(|| MediaInfoError::InvalidArg("Path contains invalid UTF-8".into()))?;
        let path_str = check_arg("Path", path_str)?;

        let opened = unsafe { self.backend.open(handle, path_str) };
        debug!(path = path_str, opened, "open");
        Ok(opened)
    }

    /// Close the current file but keep the instance for reuse.
    pub fn close(&mut self) -> Result<()> {
        let handle = self.handle()?;
        unsafe { self.backend.close(handle) };
        debug!("closed file on handle {:p}", handle);
        Ok(())
    }

    /// Free the native instance.
    ///
    /// Calling this a second time is a programming error and returns
    /// [`MediaInfoError::Disposed`].
    pub fn dispose(&mut self) -> Result<()> {
        let handle = self.handle.take().ok_or(MediaInfoError::Disposed)?;
        unsafe { self.backend.delete(handle) };
        debug!("disposed MediaInfo handle {:p}", handle);
        Ok(())
    }

    /// Full human-readable report of the open file.
    pub fn inform(&self) -> Result<String> {
        let handle = self.handle()?;
        Ok(unsafe { self.backend.inform(handle) })
    }

    /// Set an instance option and return the library's response.
    pub fn option(&mut self, name: &str, value: &str) -> Result<String> {
        let handle = self.handle()?;
        let name = check_arg("Option name", name)?;
        let value = check_arg("Option value", value)?;
        let response = unsafe { self.backend.option(Some(handle), name, value) };
        trace!(name, value, response = response.as_str(), "option");
        Ok(response)
    }

    /// Query an instance option without changing it.
    pub fn query_option(&mut self, name: &str) -> Result<String> {
        self.option(name, "")
    }

    /// Value of the parameter called `parameter`, or `""` if there is none.
    pub fn get(&self, stream_kind: StreamKind, stream_number: usize, parameter: &str) -> Result<String> {
        self.get_with(stream_kind, stream_number, parameter, InfoKind::Text, InfoKind::Name)
    }

    /// Look up a parameter by name, choosing what to return and what to
    /// search on.
    ///
    /// The library scans the stream's parameters linearly; prefer
    /// [`get_at_with`](Self::get_at_with) when the index is known.
    pub fn get_with(
        &self,
        stream_kind: StreamKind,
        stream_number: usize,
        parameter: &str,
        info_kind: InfoKind,
        search_kind: InfoKind,
    ) -> Result<String> {
        let handle = self.handle()?;
        let parameter = check_arg("Parameter", parameter)?;
        let value = unsafe {
            self.backend.get(
                handle,
                stream_kind,
                stream_number,
                parameter,
                info_kind,
                search_kind,
            )
        };
        trace!(%stream_kind, stream_number, parameter, "get");
        Ok(value)
    }

    /// Value of the parameter at position `parameter`.
    pub fn get_at(&self, stream_kind: StreamKind, stream_number: usize, parameter: usize) -> Result<String> {
        self.get_at_with(stream_kind, stream_number, parameter, InfoKind::Text)
    }

    /// Look up a parameter by position.
    pub fn get_at_with(
        &self,
        stream_kind: StreamKind,
        stream_number: usize,
        parameter: usize,
        info_kind: InfoKind,
    ) -> Result<String> {
        let handle = self.handle()?;
        Ok(unsafe {
            self.backend
                .get_at(handle, stream_kind, stream_number, parameter, info_kind)
        })
    }

    /// Number of streams of `stream_kind` in the open file.
    pub fn stream_count(&self, stream_kind: StreamKind) -> Result<usize> {
        let handle = self.handle()?;
        Ok(unsafe { self.backend.count(handle, stream_kind, None) })
    }

    /// Number of parameters available for one stream.
    pub fn parameter_count(&self, stream_kind: StreamKind, stream_number: usize) -> Result<usize> {
        let handle = self.handle()?;
        Ok(unsafe { self.backend.count(handle, stream_kind, Some(stream_number)) })
    }
}

#[cfg(feature = "native")]
impl MediaInfo<crate::safe::backend::NativeLibrary> {
    /// Allocate an instance of the linked libmediainfo.
    pub fn new() -> Result<Self> {
        Self::with_backend(crate::safe::backend::NativeLibrary)
    }
}

impl<B: Backend> Drop for MediaInfo<B> {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            debug!("releasing undisposed MediaInfo handle {:p} on drop", handle);
            unsafe { self.backend.delete(handle) };
        }
    }
}

// MediaInfo is not Send/Sync because of the raw handle; the native
// instance must not be shared across threads.
