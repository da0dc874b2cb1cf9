//! Materialized view of every stream and parameter of an open file.

use crate::safe::backend::Backend;
use crate::safe::error::Result;
use crate::safe::kinds::{InfoKind, StreamKind};
use crate::safe::media_info::MediaInfo;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

/// Parameter name that compares and sorts without regard to case.
///
/// The spelling is kept as given; only comparisons fold case.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterName(String);

impl ParameterName {
    pub fn new(name: impl Into<String>) -> Self {
        ParameterName(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn folded(&self) -> impl Iterator<Item = char> + '_ {
        self.0.chars().flat_map(char::to_lowercase)
    }
}

impl PartialEq for ParameterName {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ParameterName {}

impl PartialOrd for ParameterName {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ParameterName {
    fn cmp(&self, other: &Self) -> Ordering {
        self.folded().cmp(other.folded())
    }
}

impl fmt::Display for ParameterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ParameterName {
    fn from(name: &str) -> Self {
        ParameterName::new(name)
    }
}

/// Parameters of one stream, sorted by case-insensitive name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StreamParameters(BTreeMap<ParameterName, String>);

impl StreamParameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, replacing any value stored under the same name in
    /// any case. The first spelling of the name is the one kept.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(ParameterName::new(name), value.into());
    }

    /// Case-insensitive lookup.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(&ParameterName::from(name)).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for StreamParameters {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut parameters = StreamParameters::new();
        for (name, value) in iter {
            parameters.insert(name, value);
        }
        parameters
    }
}

/// Every stream of an open file, grouped by kind.
///
/// Kinds without streams are absent. Within a kind, streams are in index
/// order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot(BTreeMap<StreamKind, Vec<StreamParameters>>);

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a stream of `kind`.
    pub fn push(&mut self, kind: StreamKind, parameters: StreamParameters) {
        self.0.entry(kind).or_default().push(parameters);
    }

    /// Streams of `kind`; empty if the file has none.
    pub fn streams(&self, kind: StreamKind) -> &[StreamParameters] {
        self.0.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The first stream of `kind`, e.g. the single General stream.
    pub fn first(&self, kind: StreamKind) -> Option<&StreamParameters> {
        self.streams(kind).first()
    }

    /// Kinds present, in native order.
    pub fn kinds(&self) -> impl Iterator<Item = StreamKind> + '_ {
        self.0.keys().copied()
    }

    pub fn contains_kind(&self, kind: StreamKind) -> bool {
        self.0.contains_key(&kind)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (StreamKind, &[StreamParameters])> {
        self.0.iter().map(|(kind, streams)| (*kind, streams.as_slice()))
    }
}

impl<B: Backend> MediaInfo<B> {
    /// Read every non-empty parameter of every stream of the open file.
    pub fn snapshot(&self) -> Result<Snapshot> {
        let mut snapshot = Snapshot::new();

        for kind in StreamKind::ALL {
            let stream_count = self.stream_count(kind)?;
            for stream_number in 0..stream_count {
                snapshot.push(kind, self.snapshot_stream(kind, stream_number)?);
            }
        }

        Ok(snapshot)
    }

    /// Read every non-empty parameter of one stream.
    pub fn snapshot_stream(&self, kind: StreamKind, stream_number: usize) -> Result<StreamParameters> {
        let mut parameters = StreamParameters::new();

        for index in 0..self.parameter_count(kind, stream_number)? {
            let value = self.get_at_with(kind, stream_number, index, InfoKind::Text)?;
            if !value.is_empty() {
                let name = self.get_at_with(kind, stream_number, index, InfoKind::Name)?;
                parameters.insert(name, value);
            }
        }

        Ok(parameters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::safe::fake::{FakeFile, FakeLibrary};

    fn open(file: FakeFile) -> MediaInfo<FakeLibrary> {
        let mut media =
            MediaInfo::with_backend(FakeLibrary::new().with_file("clip.mp4", file)).unwrap();
        assert!(media.open("clip.mp4").unwrap());
        media
    }

    #[test]
    fn test_parameter_name_ordering() {
        let mut names = vec![
            ParameterName::from("width"),
            ParameterName::from("Duration"),
            ParameterName::from("BitRate"),
            ParameterName::from("codecID"),
        ];
        names.sort();
        let sorted: Vec<_> = names.iter().map(ParameterName::as_str).collect();
        assert_eq!(sorted, vec!["BitRate", "codecID", "Duration", "width"]);
        assert_eq!(ParameterName::from("Format"), ParameterName::from("FORMAT"));
    }

    #[test]
    fn test_duplicate_names_keep_first_spelling_and_last_value() {
        let mut parameters = StreamParameters::new();
        parameters.insert("Language", "en");
        parameters.insert("language", "English");
        assert_eq!(parameters.len(), 1);
        assert_eq!(parameters.iter().next(), Some(("Language", "English")));
        assert_eq!(parameters.get("LANGUAGE"), Some("English"));
    }

    #[test]
    fn test_snapshot_omits_kinds_without_streams() {
        let media = open(
            FakeFile::new()
                .stream(StreamKind::General, &[("Format", "MPEG-4")])
                .stream(StreamKind::Audio, &[("Format", "AAC")]),
        );
        let snapshot = media.snapshot().unwrap();
        let kinds: Vec<_> = snapshot.kinds().collect();
        assert_eq!(kinds, vec![StreamKind::General, StreamKind::Audio]);
        assert!(!snapshot.contains_kind(StreamKind::Video));
        assert!(snapshot.streams(StreamKind::Video).is_empty());
    }

    #[test]
    fn test_snapshot_skips_empty_values() {
        let media = open(FakeFile::new().stream(
            StreamKind::General,
            &[("Format", "MPEG-4"), ("Title", ""), ("Duration", "1200"), ("Album", "")],
        ));
        assert_eq!(media.parameter_count(StreamKind::General, 0).unwrap(), 4);

        let general = media.snapshot_stream(StreamKind::General, 0).unwrap();
        assert_eq!(general.len(), 2);
        assert!(general.iter().all(|(_, value)| !value.is_empty()));
        assert_eq!(general.get("title"), None);
    }

    #[test]
    fn test_snapshot_preserves_stream_order_and_sorts_names() {
        let media = open(
            FakeFile::new()
                .stream(
                    StreamKind::Audio,
                    &[("StreamOrder", "1"), ("Format", "AAC"), ("channel(s)", "2")],
                )
                .stream(StreamKind::Audio, &[("StreamOrder", "2"), ("Format", "Opus")]),
        );
        let snapshot = media.snapshot().unwrap();
        let audio = snapshot.streams(StreamKind::Audio);
        assert_eq!(audio.len(), 2);
        assert_eq!(audio[0].get("format"), Some("AAC"));
        assert_eq!(audio[1].get("Format"), Some("Opus"));

        let names: Vec<_> = audio[0].iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["channel(s)", "Format", "StreamOrder"]);
    }

    #[test]
    fn test_snapshot_overwrites_duplicate_names() {
        let media = open(FakeFile::new().stream(
            StreamKind::Text,
            &[("Language", "en"), ("Format", "UTF-8"), ("language", "English")],
        ));
        let text = media.snapshot_stream(StreamKind::Text, 0).unwrap();
        assert_eq!(text.len(), 2);
        assert_eq!(text.get("Language"), Some("English"));
    }

    #[test]
    fn test_snapshot_of_unopened_handle_is_empty() {
        let media = MediaInfo::with_backend(FakeLibrary::new()).unwrap();
        assert!(media.snapshot().unwrap().is_empty());
    }

    #[test]
    fn test_snapshot_after_dispose_fails() {
        let mut media = open(FakeFile::new().stream(StreamKind::General, &[("Format", "AVI")]));
        media.dispose().unwrap();
        assert!(media.snapshot().is_err());
    }

    #[test]
    fn test_snapshot_serializes_as_nested_maps() {
        let mut snapshot = Snapshot::new();
        snapshot.push(
            StreamKind::General,
            [("Format", "Matroska"), ("duration", "5000")]
                .into_iter()
                .collect(),
        );
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["General"][0]["Format"], "Matroska");
        assert_eq!(json["General"][0]["duration"], "5000");

        let parsed: Snapshot = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, snapshot);
    }
}
