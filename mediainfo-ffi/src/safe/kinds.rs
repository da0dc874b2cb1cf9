//! Stream and info kind enumerations.

use crate::manual::types::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of media stream (mirrors `MediaInfo_stream_C`).
///
/// Declaration order is the native order; `Ord` follows it, so snapshots
/// list kinds the way the library numbers them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StreamKind {
    General,
    Video,
    Audio,
    Text,
    Chapters,
    Image,
    Menu,
}

impl StreamKind {
    /// Every kind, in native order.
    pub const ALL: [StreamKind; 7] = [
        StreamKind::General,
        StreamKind::Video,
        StreamKind::Audio,
        StreamKind::Text,
        StreamKind::Chapters,
        StreamKind::Image,
        StreamKind::Menu,
    ];

    /// Integer code passed to the native library.
    pub fn code(self) -> MediaInfoStreamC {
        match self {
            StreamKind::General => MEDIAINFO_STREAM_GENERAL,
            StreamKind::Video => MEDIAINFO_STREAM_VIDEO,
            StreamKind::Audio => MEDIAINFO_STREAM_AUDIO,
            StreamKind::Text => MEDIAINFO_STREAM_TEXT,
            StreamKind::Chapters => MEDIAINFO_STREAM_CHAPTERS,
            StreamKind::Image => MEDIAINFO_STREAM_IMAGE,
            StreamKind::Menu => MEDIAINFO_STREAM_MENU,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            StreamKind::General => "General",
            StreamKind::Video => "Video",
            StreamKind::Audio => "Audio",
            StreamKind::Text => "Text",
            StreamKind::Chapters => "Chapters",
            StreamKind::Image => "Image",
            StreamKind::Menu => "Menu",
        }
    }
}

impl fmt::Display for StreamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Facet of a parameter to retrieve (mirrors `MediaInfo_info_C`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InfoKind {
    /// Unique name of parameter
    Name,
    /// Value of parameter
    Text,
    /// Unique name of measure unit of parameter
    Measure,
    Options,
    /// Translated name of parameter
    #[serde(rename = "Name_Text")]
    NameText,
    /// Translated name of measure unit
    #[serde(rename = "Measure_Text")]
    MeasureText,
    /// More information about the parameter
    Info,
    /// How this parameter is supported: N (No), B (Beta), R (Read only),
    /// W (Read/Write)
    HowTo,
    /// Domain of this piece of information
    Domain,
}

impl InfoKind {
    /// Integer code passed to the native library.
    pub fn code(self) -> MediaInfoInfoC {
        match self {
            InfoKind::Name => MEDIAINFO_INFO_NAME,
            InfoKind::Text => MEDIAINFO_INFO_TEXT,
            InfoKind::Measure => MEDIAINFO_INFO_MEASURE,
            InfoKind::Options => MEDIAINFO_INFO_OPTIONS,
            InfoKind::NameText => MEDIAINFO_INFO_NAME_TEXT,
            InfoKind::MeasureText => MEDIAINFO_INFO_MEASURE_TEXT,
            InfoKind::Info => MEDIAINFO_INFO_INFO,
            InfoKind::HowTo => MEDIAINFO_INFO_HOWTO,
            InfoKind::Domain => MEDIAINFO_INFO_DOMAIN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stream_kind_codes() {
        let codes: Vec<_> = StreamKind::ALL.iter().map(|kind| kind.code()).collect();
        assert_eq!(codes, vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_info_kind_codes() {
        assert_eq!(InfoKind::Name.code(), 0);
        assert_eq!(InfoKind::Text.code(), 1);
        assert_eq!(InfoKind::Measure.code(), 2);
        assert_eq!(InfoKind::Options.code(), 3);
        assert_eq!(InfoKind::NameText.code(), 4);
        assert_eq!(InfoKind::MeasureText.code(), 5);
        assert_eq!(InfoKind::Info.code(), 6);
        assert_eq!(InfoKind::HowTo.code(), 7);
        assert_eq!(InfoKind::Domain.code(), 8);
    }

    #[test]
    fn test_stream_kind_order_matches_codes() {
        let mut sorted = StreamKind::ALL;
        sorted.sort();
        assert_eq!(sorted, StreamKind::ALL);
        assert!(StreamKind::General < StreamKind::Menu);
    }

    #[test]
    fn test_info_kind_serde_names() {
        assert_eq!(
            serde_json::to_string(&InfoKind::NameText).unwrap(),
            "\"Name_Text\""
        );
        assert_eq!(serde_json::to_string(&StreamKind::Audio).unwrap(), "\"Audio\"");
    }
}
