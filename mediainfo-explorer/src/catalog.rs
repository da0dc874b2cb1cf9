use crate::error::{ExplorerError, Result};
use crate::probe::probe_media_file;
use crate::report::{format_duration, MediaReport};
use mediainfo_ffi::{Backend, MediaInfo, MediaInfoError};
use serde::Serialize;
use std::collections::HashMap;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use walkdir::WalkDir;

const MEDIA_EXTENSIONS: &[&str] = &[
    "mp4", "m4v", "mkv", "mka", "mov", "avi", "webm", "ts", "m2ts", "vob", "wmv", "flv", "mp3",
    "flac", "wav", "ogg", "m4a", "aac", "opus", "ac3",
];

#[derive(Debug, Serialize)]
pub struct CatalogReport {
    pub root: String,
    pub files_scanned: usize,
    pub media_candidates: usize,
    pub successful: usize,
    pub failed: usize,
    pub total_duration_seconds: f64,
    pub containers: Vec<NameCount>,
    pub codecs: Vec<NameCount>,
    pub languages: Vec<NameCount>,
    pub failures: Vec<ProbeFailure>,
}

#[derive(Debug, Serialize)]
pub struct NameCount {
    pub name: String,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct ProbeFailure {
    pub path: String,
    pub error: String,
}

/// Probe every media file under `root` with one reused handle.
pub fn catalog_directory<B: Backend>(
    media: &mut MediaInfo<B>,
    root: &Path,
    recursive: bool,
) -> Result<CatalogReport> {
    let (files_scanned, media_candidates) = collect_candidates(root, recursive)?;
    info!(
        root = %root.display(),
        files_scanned,
        candidates = media_candidates.len(),
        "scanning"
    );

    let mut reports = Vec::with_capacity(media_candidates.len());
    let mut failures = Vec::new();

    for path in media_candidates {
        match probe_media_file(media, &path) {
            Ok(probe) => reports.push(probe.report),
            // A dead handle fails every remaining file the same way
            Err(ExplorerError::MediaInfo(MediaInfoError::Disposed)) => {
                return Err(MediaInfoError::Disposed.into())
            }
            Err(error) => {
                warn!(path = %path.display(), %error, "probe failed");
                failures.push(ProbeFailure {
                    path: path.display().to_string(),
                    error: error.to_string(),
                });
            }
        }
    }

    Ok(build_catalog_report(root, files_scanned, reports, failures))
}

pub fn collect_candidates(root: &Path, recursive: bool) -> Result<(usize, Vec<PathBuf>)> {
    if !root.exists() {
        return Err(ExplorerError::MissingPath(root.display().to_string()));
    }

    if !root.is_dir() {
        return Err(ExplorerError::NotADirectory(root.display().to_string()));
    }

    let mut files_scanned = 0;
    let mut media_candidates = Vec::new();
    let max_depth = if recursive { usize::MAX } else { 1 };

    for entry in WalkDir::new(root)
        .max_depth(max_depth)
        .sort_by_file_name()
        .into_iter()
        .filter_map(std::result::Result::ok)
    {
        if entry.file_type().is_file() {
            files_scanned += 1;
            if is_media_file(entry.path()) {
                media_candidates.push(entry.into_path());
            }
        }
    }

    Ok((files_scanned, media_candidates))
}

fn is_media_file(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .map(|ext| MEDIA_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

pub fn build_catalog_report(
    root: &Path,
    files_scanned: usize,
    reports: Vec<MediaReport>,
    failures: Vec<ProbeFailure>,
) -> CatalogReport {
    let successful = reports.len();
    let failed = failures.len();
    let total_duration_seconds = reports
        .iter()
        .filter_map(|report| report.duration_seconds)
        .sum();

    let mut containers = HashMap::new();
    let mut codecs = HashMap::new();
    let mut languages = HashMap::new();

    for report in &reports {
        if let Some(format) = &report.format {
            *containers.entry(format.clone()).or_insert(0) += 1;
        }

        for stream in &report.streams {
            if let Some(format) = &stream.format {
                *codecs.entry(format.clone()).or_insert(0) += 1;
            }
            if let Some(language) = &stream.language {
                *languages.entry(language.clone()).or_insert(0) += 1;
            }
        }
    }

    CatalogReport {
        root: root.display().to_string(),
        files_scanned,
        media_candidates: successful + failed,
        successful,
        failed,
        total_duration_seconds,
        containers: sort_counts(containers),
        codecs: sort_counts(codecs),
        languages: sort_counts(languages),
        failures,
    }
}

fn sort_counts(map: HashMap<String, usize>) -> Vec<NameCount> {
    let mut values: Vec<NameCount> = map
        .into_iter()
        .map(|(name, count)| NameCount { name, count })
        .collect();

    values.sort_by(|left, right| {
        right
            .count
            .cmp(&left.count)
            .then_with(|| left.name.cmp(&right.name))
    });

    values
}

pub fn print_catalog_report(report: &CatalogReport) {
    println!("Root: {}", report.root);
    println!("Files scanned: {}", report.files_scanned);
    println!("Media candidates: {}", report.media_candidates);
    println!("Probed successfully: {}", report.successful);
    println!("Failures: {}", report.failed);
    println!(
        "Total duration: {} ({:.2}s)",
        format_duration(report.total_duration_seconds),
        report.total_duration_seconds
    );

    for (title, counts, limit) in [
        ("Top containers:", &report.containers, 8),
        ("Top codecs:", &report.codecs, 12),
        ("Languages:", &report.languages, 12),
    ] {
        if !counts.is_empty() {
            println!("{title}");
            for entry in counts.iter().take(limit) {
                println!("  {} ({})", entry.name, entry.count);
            }
        }
    }

    if !report.failures.is_empty() {
        println!("Failed files:");
        for failure in &report.failures {
            println!("  {}", failure.path);
            println!("    {}", failure.error);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::StreamReport;
    use mediainfo_ffi::safe::fake::{FakeFile, FakeLibrary};
    use mediainfo_ffi::StreamKind;
    use std::fs;

    fn stream(kind: StreamKind, format: &str, language: Option<&str>) -> StreamReport {
        StreamReport {
            kind,
            index: 0,
            format: Some(format.to_string()),
            codec_id: None,
            width: None,
            height: None,
            frame_rate_fps: None,
            sample_rate_hz: None,
            channels: None,
            bit_rate_bps: None,
            language: language.map(str::to_string),
        }
    }

    #[test]
    fn aggregates_catalog_counts() {
        let reports = vec![
            MediaReport {
                path: "a.mp4".to_string(),
                format: Some("MPEG-4".to_string()),
                title: None,
                duration_seconds: Some(10.0),
                size_bytes: Some(1000),
                bit_rate_bps: Some(800_000),
                streams: vec![
                    stream(StreamKind::Video, "AVC", None),
                    stream(StreamKind::Audio, "AAC", Some("en")),
                ],
            },
            MediaReport {
                path: "b.webm".to_string(),
                format: Some("WebM".to_string()),
                title: None,
                duration_seconds: Some(20.0),
                size_bytes: Some(2000),
                bit_rate_bps: None,
                streams: vec![
                    stream(StreamKind::Video, "VP9", None),
                    stream(StreamKind::Audio, "AAC", Some("en")),
                ],
            },
        ];

        let failures = vec![ProbeFailure {
            path: "broken.mkv".to_string(),
            error: "probe failed".to_string(),
        }];

        let summary = build_catalog_report(Path::new("media"), 10, reports, failures);

        assert_eq!(summary.files_scanned, 10);
        assert_eq!(summary.media_candidates, 3);
        assert_eq!(summary.successful, 2);
        assert_eq!(summary.failed, 1);
        assert!((summary.total_duration_seconds - 30.0).abs() < 0.001);
        assert_eq!(summary.containers[0].name, "MPEG-4");
        assert_eq!(summary.containers[1].name, "WebM");
        assert_eq!(summary.codecs[0].name, "AAC");
        assert_eq!(summary.codecs[0].count, 2);
        assert_eq!(summary.languages[0].name, "en");
    }

    #[test]
    fn collects_candidates_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.MKV"), b"").unwrap();
        fs::write(dir.path().join("notes.txt"), b"").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested").join("b.mp3"), b"").unwrap();

        let (scanned, candidates) = collect_candidates(dir.path(), false).unwrap();
        assert_eq!(scanned, 2);
        assert_eq!(candidates, vec![dir.path().join("a.MKV")]);

        let (scanned, candidates) = collect_candidates(dir.path(), true).unwrap();
        assert_eq!(scanned, 3);
        assert_eq!(candidates.len(), 2);

        assert!(matches!(
            collect_candidates(&dir.path().join("a.MKV"), false),
            Err(ExplorerError::NotADirectory(_))
        ));
    }

    #[test]
    fn catalogs_directory_with_one_handle() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.mkv");
        let bad = dir.path().join("bad.mkv");
        fs::write(&good, b"").unwrap();
        fs::write(&bad, b"").unwrap();

        let library = FakeLibrary::new().with_file(
            good.to_str().unwrap(),
            FakeFile::new()
                .stream(StreamKind::General, &[("Format", "Matroska"), ("Duration", "1500")])
                .stream(StreamKind::Audio, &[("Format", "FLAC")]),
        );
        let mut media = MediaInfo::with_backend(library.clone()).unwrap();

        let report = catalog_directory(&mut media, dir.path(), false).unwrap();
        assert_eq!(report.successful, 1);
        assert_eq!(report.failed, 1);
        assert_eq!(report.failures[0].path, bad.display().to_string());
        assert_eq!(report.codecs[0].name, "FLAC");
        assert!((report.total_duration_seconds - 1.5).abs() < 0.001);
        assert_eq!(library.live_handles(), 1);
    }

    #[test]
    fn disposed_handle_aborts_catalog() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.mkv"), b"").unwrap();

        let mut media = MediaInfo::with_backend(FakeLibrary::new()).unwrap();
        media.dispose().unwrap();

        assert!(matches!(
            catalog_directory(&mut media, dir.path(), false),
            Err(ExplorerError::MediaInfo(MediaInfoError::Disposed))
        ));
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_name_is_recorded_as_failure() {
        use std::os::unix::ffi::OsStrExt;

        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.mkv");
        let bad = dir.path().join(OsStr::from_bytes(b"bad\xff.mkv"));
        fs::write(&good, b"").unwrap();
        fs::write(&bad, b"").unwrap();

        let library = FakeLibrary::new().with_file(
            good.to_str().unwrap(),
            FakeFile::new().stream(StreamKind::General, &[("Format", "Matroska")]),
        );
        let mut media = MediaInfo::with_backend(library).unwrap();

        let report = catalog_directory(&mut media, dir.path(), false).unwrap();
        assert_eq!(report.successful, 1);
        assert_eq!(report.failed, 1);
        assert_eq!(report.containers[0].name, "Matroska");
        assert!(report.failures[0].error.contains("UTF-8"));
        assert!(!media.is_disposed());
    }
}
