//! In-memory stand-in for libmediainfo.
//!
//! `FakeLibrary` serves a fixed table of "files", each a grid of streams
//! and named parameters, and counts handle allocations so tests can check
//! the wrapper's lifecycle. Clones share state.

use crate::safe::backend::{Backend, RawHandle};
use crate::safe::kinds::{InfoKind, StreamKind};
use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::ffi::c_void;
use std::ptr::NonNull;
use std::rc::Rc;

pub const FAKE_VERSION: &str = "MediaInfoLib - v0.0.0 (fake)";

/// One file's stream/parameter grid.
#[derive(Debug, Clone, Default)]
pub struct FakeFile {
    streams: BTreeMap<StreamKind, Vec<Vec<(String, String)>>>,
}

impl FakeFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a stream of `kind` with parameters in the given order.
    pub fn stream(mut self, kind: StreamKind, parameters: &[(&str, &str)]) -> Self {
        let parameters = parameters
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();
        self.streams.entry(kind).or_default().push(parameters);
        self
    }

    fn parameters(&self, kind: StreamKind, stream_number: usize) -> Option<&[(String, String)]> {
        self.streams
            .get(&kind)
            .and_then(|streams| streams.get(stream_number))
            .map(Vec::as_slice)
    }
}

#[derive(Debug, Default)]
struct FakeState {
    files: HashMap<String, FakeFile>,
    // handle id -> path of the open file
    handles: HashMap<usize, Option<String>>,
    options: HashMap<String, String>,
    next_id: usize,
    deleted: usize,
    fail_alloc: bool,
}

impl FakeState {
    fn open_file(&self, handle: RawHandle) -> Option<&FakeFile> {
        self.handles
            .get(&id(handle))
            .and_then(Option::as_ref)
            .and_then(|path| self.files.get(path))
    }
}

/// Shared-state fake backend.
#[derive(Debug, Clone, Default)]
pub struct FakeLibrary {
    state: Rc<RefCell<FakeState>>,
}

fn id(handle: RawHandle) -> usize {
    handle.as_ptr() as usize
}

fn facet(name: &str, value: &str, info_kind: InfoKind) -> String {
    match info_kind {
        InfoKind::Name | InfoKind::NameText => name.to_string(),
        InfoKind::Text => value.to_string(),
        _ => String::new(),
    }
}

impl FakeLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a file that `open` will accept.
    pub fn with_file(self, path: &str, file: FakeFile) -> Self {
        self.state
            .borrow_mut()
            .files
            .insert(path.to_string(), file);
        self
    }

    /// Make every `create` call fail.
    pub fn failing_alloc(self) -> Self {
        self.state.borrow_mut().fail_alloc = true;
        self
    }

    /// Handles created and not yet deleted.
    pub fn live_handles(&self) -> usize {
        self.state.borrow().handles.len()
    }

    /// Number of `delete` calls.
    pub fn deleted(&self) -> usize {
        self.state.borrow().deleted
    }
}

impl Backend for FakeLibrary {
    fn create(&self) -> Option<RawHandle> {
        let mut state = self.state.borrow_mut();
        if state.fail_alloc {
            return None;
        }
        state.next_id += 1;
        let handle_id = state.next_id;
        state.handles.insert(handle_id, None);
        NonNull::new(handle_id as *mut c_void)
    }

    unsafe fn delete(&self, handle: RawHandle) {
        let mut state = self.state.borrow_mut();
        state.handles.remove(&id(handle));
        state.deleted += 1;
    }

    unsafe fn open(&self, handle: RawHandle, path: &str) -> bool {
        let mut state = self.state.borrow_mut();
        let opened = state.files.contains_key(path).then(|| path.to_string());
        let found = opened.is_some();
        state.handles.insert(id(handle), opened);
        found
    }

    unsafe fn close(&self, handle: RawHandle) {
        self.state.borrow_mut().handles.insert(id(handle), None);
    }

    unsafe fn inform(&self, handle: RawHandle) -> String {
        let state = self.state.borrow();
        let Some(file) = state.open_file(handle) else {
            return String::new();
        };

        let mut report = String::new();
        for (kind, streams) in &file.streams {
            for (index, parameters) in streams.iter().enumerate() {
                if streams.len() > 1 {
                    report.push_str(&format!("{} #{}\n", kind, index + 1));
                } else {
                    report.push_str(&format!("{}\n", kind));
                }
                for (name, value) in parameters.iter().filter(|(_, value)| !value.is_empty()) {
                    report.push_str(&format!("{:<41}: {}\n", name, value));
                }
                report.push('\n');
            }
        }
        report
    }

    unsafe fn option(&self, _handle: Option<RawHandle>, name: &str, value: &str) -> String {
        match name {
            "Info_Version" => FAKE_VERSION.to_string(),
            "Info_Parameters" => "General\nFormat ; Format used\nDuration ; Play time\n".to_string(),
            "Info_Codecs" => "AVC;V;Advanced Video Codec\nAAC;A;Advanced Audio Codec\n".to_string(),
            "Info_Capacities" => "Matroska;R\nMPEG-4;R\n".to_string(),
            _ => {
                let mut state = self.state.borrow_mut();
                if value.is_empty() {
                    state.options.get(name).cloned().unwrap_or_default()
                } else {
                    state.options.insert(name.to_string(), value.to_string());
                    String::new()
                }
            }
        }
    }

    unsafe fn get(
        &self,
        handle: RawHandle,
        stream_kind: StreamKind,
        stream_number: usize,
        parameter: &str,
        info_kind: InfoKind,
        _search_kind: InfoKind,
    ) -> String {
        let state = self.state.borrow();
        state
            .open_file(handle)
            .and_then(|file| file.parameters(stream_kind, stream_number))
            .and_then(|parameters| {
                parameters
                    .iter()
                    .find(|(name, _)| name.eq_ignore_ascii_case(parameter))
            })
            .map(|(name, value)| facet(name, value, info_kind))
            .unwrap_or_default()
    }

    unsafe fn get_at(
        &self,
        handle: RawHandle,
        stream_kind: StreamKind,
        stream_number: usize,
        parameter: usize,
        info_kind: InfoKind,
    ) -> String {
        let state = self.state.borrow();
        state
            .open_file(handle)
            .and_then(|file| file.parameters(stream_kind, stream_number))
            .and_then(|parameters| parameters.get(parameter))
            .map(|(name, value)| facet(name, value, info_kind))
            .unwrap_or_default()
    }

    unsafe fn count(
        &self,
        handle: RawHandle,
        stream_kind: StreamKind,
        stream_number: Option<usize>,
    ) -> usize {
        let state = self.state.borrow();
        let Some(file) = state.open_file(handle) else {
            return 0;
        };
        match stream_number {
            None => file.streams.get(&stream_kind).map_or(0, Vec::len),
            Some(number) => file.parameters(stream_kind, number).map_or(0, <[_]>::len),
        }
    }
}
