use mediainfo_ffi::{Snapshot, StreamKind, StreamParameters};
use serde::Serialize;
use std::path::Path;

/// Stream kinds listed per stream in a report. General is summarized at
/// the top instead, Menu and Chapters carry only timestamps.
const REPORTED_KINDS: [StreamKind; 4] = [
    StreamKind::Video,
    StreamKind::Audio,
    StreamKind::Text,
    StreamKind::Image,
];

#[derive(Debug, Serialize, Clone)]
pub struct MediaReport {
    pub path: String,
    pub format: Option<String>,
    pub title: Option<String>,
    pub duration_seconds: Option<f64>,
    pub size_bytes: Option<u64>,
    pub bit_rate_bps: Option<u64>,
    pub streams: Vec<StreamReport>,
}

#[derive(Debug, Serialize, Clone)]
pub struct StreamReport {
    pub kind: StreamKind,
    pub index: usize,
    pub format: Option<String>,
    pub codec_id: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub frame_rate_fps: Option<f64>,
    pub sample_rate_hz: Option<u32>,
    pub channels: Option<u32>,
    pub bit_rate_bps: Option<u64>,
    pub language: Option<String>,
}

pub fn media_report_from_snapshot(path: &Path, snapshot: &Snapshot) -> MediaReport {
    let general = snapshot.first(StreamKind::General);
    let field = |name: &str| general.and_then(|stream| stream.get(name));

    let streams = REPORTED_KINDS
        .iter()
        .flat_map(|&kind| {
            snapshot
                .streams(kind)
                .iter()
                .enumerate()
                .map(move |(index, stream)| stream_report(kind, index, stream))
        })
        .collect();

    MediaReport {
        path: path.display().to_string(),
        format: field("Format").map(str::to_string),
        title: field("Title").or_else(|| field("Movie")).map(str::to_string),
        // MediaInfo reports durations in milliseconds
        duration_seconds: field("Duration").and_then(to_f64).map(|ms| ms / 1000.0),
        size_bytes: field("FileSize").and_then(to_u64),
        bit_rate_bps: field("OverallBitRate").and_then(to_u64),
        streams,
    }
}

fn stream_report(kind: StreamKind, index: usize, stream: &StreamParameters) -> StreamReport {
    StreamReport {
        kind,
        index,
        format: stream.get("Format").map(str::to_string),
        codec_id: stream.get("CodecID").map(str::to_string),
        width: stream.get("Width").and_then(to_u32),
        height: stream.get("Height").and_then(to_u32),
        frame_rate_fps: stream.get("FrameRate").and_then(to_f64),
        sample_rate_hz: stream.get("SamplingRate").and_then(to_u32),
        channels: stream.get("Channel(s)").and_then(to_u32),
        bit_rate_bps: stream.get("BitRate").and_then(to_u64),
        language: stream.get("Language").map(str::to_string),
    }
}

/// Parse a positive number; MediaInfo sometimes writes integers as
/// `5184000.000`.
fn to_f64(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite() && *number > 0.0)
}

fn to_u64(value: &str) -> Option<u64> {
    to_f64(value).map(|number| number.round() as u64)
}

fn to_u32(value: &str) -> Option<u32> {
    to_u64(value).and_then(|number| u32::try_from(number).ok())
}

pub fn print_media_report(report: &MediaReport) {
    println!("File: {}", report.path);
    println!("Format: {}", report.format.as_deref().unwrap_or("unknown"));

    if let Some(title) = &report.title {
        println!("Title: {title}");
    }

    if let Some(duration_seconds) = report.duration_seconds {
        println!(
            "Duration: {} ({duration_seconds:.2}s)",
            format_duration(duration_seconds)
        );
    }

    if let Some(size_bytes) = report.size_bytes {
        println!("Size: {}", format_bytes(size_bytes));
    }

    if let Some(bit_rate_bps) = report.bit_rate_bps {
        println!("Bit rate: {}", format_bit_rate(bit_rate_bps));
    }

    println!("Streams:");
    for stream in &report.streams {
        println!("  {} #{}", stream.kind, stream.index);
        if let Some(format) = &stream.format {
            println!("    Format: {format}");
        }
        if let Some(codec_id) = &stream.codec_id {
            println!("    Codec ID: {codec_id}");
        }
        if let (Some(width), Some(height)) = (stream.width, stream.height) {
            println!("    Resolution: {width}x{height}");
        }
        if let Some(frame_rate_fps) = stream.frame_rate_fps {
            println!("    Frame rate: {frame_rate_fps:.3} fps");
        }
        if let Some(sample_rate_hz) = stream.sample_rate_hz {
            println!("    Sample rate: {sample_rate_hz} Hz");
        }
        if let Some(channels) = stream.channels {
            println!("    Channels: {channels}");
        }
        if let Some(bit_rate_bps) = stream.bit_rate_bps {
            println!("    Bit rate: {}", format_bit_rate(bit_rate_bps));
        }
        if let Some(language) = &stream.language {
            println!("    Language: {language}");
        }
    }
}

pub fn format_duration(total_seconds: f64) -> String {
    if !total_seconds.is_finite() || total_seconds < 0.0 {
        return "unknown".to_string();
    }

    let seconds = total_seconds.round() as u64;
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let remaining_seconds = seconds % 60;

    format!("{hours:02}:{minutes:02}:{remaining_seconds:02}")
}

pub fn format_bytes(size: u64) -> String {
    let units = ["B", "KiB", "MiB", "GiB", "TiB"];
    let mut value = size as f64;
    let mut unit_index = 0;

    while value >= 1024.0 && unit_index < units.len() - 1 {
        value /= 1024.0;
        unit_index += 1;
    }

    if unit_index == 0 {
        format!("{size} {}", units[unit_index])
    } else {
        format!("{value:.2} {}", units[unit_index])
    }
}

pub fn format_bit_rate(bits_per_second: u64) -> String {
    if bits_per_second >= 1_000_000 {
        format!("{:.2} Mb/s", bits_per_second as f64 / 1_000_000.0)
    } else if bits_per_second >= 1_000 {
        format!("{:.1} kb/s", bits_per_second as f64 / 1_000.0)
    } else {
        format!("{bits_per_second} b/s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> Snapshot {
        let mut snapshot = Snapshot::new();
        snapshot.push(
            StreamKind::General,
            [
                ("Format", "Matroska"),
                ("Duration", "5184000.000"),
                ("FileSize", "734003200"),
                ("OverallBitRate", "1132720"),
                ("Movie", "Sample"),
            ]
            .into_iter()
            .collect(),
        );
        snapshot.push(
            StreamKind::Video,
            [
                ("Format", "AVC"),
                ("CodecID", "V_MPEG4/ISO/AVC"),
                ("Width", "1280"),
                ("Height", "720"),
                ("FrameRate", "23.976"),
            ]
            .into_iter()
            .collect(),
        );
        snapshot.push(
            StreamKind::Audio,
            [
                ("Format", "AAC"),
                ("SamplingRate", "48000"),
                ("Channel(s)", "2"),
                ("BitRate", "192000"),
                ("Language", "en"),
            ]
            .into_iter()
            .collect(),
        );
        snapshot.push(
            StreamKind::Menu,
            [("00:00:00.000", "Chapter 1")].into_iter().collect(),
        );
        snapshot
    }

    #[test]
    fn converts_text_numbers_to_options() {
        assert_eq!(to_u64("123"), Some(123));
        assert_eq!(to_u64("5184000.000"), Some(5_184_000));
        assert_eq!(to_u64("0"), None);
        assert_eq!(to_u64("-1"), None);
        assert_eq!(to_u64("Variable"), None);
        assert_eq!(to_u32("48000"), Some(48_000));
        assert_eq!(to_u32("99999999999"), None);
        assert_eq!(to_f64(" 23.976 "), Some(23.976));
    }

    #[test]
    fn builds_report_from_snapshot() {
        let report = media_report_from_snapshot(Path::new("movie.mkv"), &snapshot());

        assert_eq!(report.path, "movie.mkv");
        assert_eq!(report.format.as_deref(), Some("Matroska"));
        assert_eq!(report.title.as_deref(), Some("Sample"));
        assert_eq!(report.duration_seconds, Some(5184.0));
        assert_eq!(report.size_bytes, Some(734_003_200));
        assert_eq!(report.bit_rate_bps, Some(1_132_720));

        assert_eq!(report.streams.len(), 2);
        let video = &report.streams[0];
        assert_eq!(video.kind, StreamKind::Video);
        assert_eq!((video.width, video.height), (Some(1280), Some(720)));
        assert_eq!(video.frame_rate_fps, Some(23.976));

        let audio = &report.streams[1];
        assert_eq!(audio.kind, StreamKind::Audio);
        assert_eq!(audio.index, 0);
        assert_eq!(audio.sample_rate_hz, Some(48_000));
        assert_eq!(audio.channels, Some(2));
        assert_eq!(audio.language.as_deref(), Some("en"));
    }

    #[test]
    fn empty_snapshot_reports_nothing() {
        let report = media_report_from_snapshot(Path::new("empty.bin"), &Snapshot::new());
        assert!(report.format.is_none());
        assert!(report.duration_seconds.is_none());
        assert!(report.streams.is_empty());
    }

    #[test]
    fn formats_human_readable_values() {
        assert_eq!(format_duration(5184.0), "01:26:24");
        assert_eq!(format_duration(f64::NAN), "unknown");
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(1536), "1.50 KiB");
        assert_eq!(format_bit_rate(192_000), "192.0 kb/s");
        assert_eq!(format_bit_rate(1_132_720), "1.13 Mb/s");
        assert_eq!(format_bit_rate(800), "800 b/s");
    }
}
