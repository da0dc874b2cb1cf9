use crate::error::{ExplorerError, Result};
use crate::report::{media_report_from_snapshot, MediaReport};
use mediainfo_ffi::{Backend, MediaInfo, Snapshot};
use serde::Serialize;
use std::path::Path;
use tracing::debug;

/// Everything learned about one file.
#[derive(Debug, Serialize, Clone)]
pub struct Probe {
    pub report: MediaReport,
    pub snapshot: Snapshot,
}

/// Open `path` on `media`, snapshot it and close it again, leaving the
/// handle ready for the next file.
pub fn probe_media_file<B: Backend>(media: &mut MediaInfo<B>, path: &Path) -> Result<Probe> {
    ensure_file(path)?;

    if !media.open(path)? {
        return Err(ExplorerError::Unsupported(path.display().to_string()));
    }

    let snapshot = media.snapshot();
    media.close()?;
    let snapshot = snapshot?;

    debug!(
        path = %path.display(),
        kinds = snapshot.kinds().count(),
        "probed"
    );

    Ok(Probe {
        report: media_report_from_snapshot(path, &snapshot),
        snapshot,
    })
}

/// Fail with `MissingPath` or `NotAFile` unless `path` is an existing
/// regular file.
pub fn ensure_file(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(ExplorerError::MissingPath(path.display().to_string()));
    }

    if !path.is_file() {
        return Err(ExplorerError::NotAFile(path.display().to_string()));
    }

    Ok(())
}

/// Split a `NAME=VALUE` command-line option. A bare `NAME` queries it with
/// an empty value.
pub fn parse_option(raw: &str) -> Result<(String, String)> {
    let (name, value) = raw.split_once('=').unwrap_or((raw, ""));
    let name = name.trim();
    if name.is_empty() {
        return Err(ExplorerError::InvalidOption(raw.to_string()));
    }
    Ok((name.to_string(), value.trim().to_string()))
}
