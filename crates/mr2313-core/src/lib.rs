//! MR-231-3 core library: radar sentence decoding.
//!
//! This crate turns ASCII sentences from an MR-231-3 marine radar into typed
//! station messages. Decoding is split into protocol layers
//! (layout/reader/parser/validate) driven by a single stateless entry point,
//! [`decode_sentence`]. Sources and the replay layer feed recorded sentence
//! logs through the decoder and aggregate the outcome into a report; all I/O
//! stays in `source`.
//!
//! Invariants:
//! - One sentence yields zero or one message; nothing carries over between
//!   sentences.
//! - Malformed frames and non-numeric fields are errors and never produce a
//!   partial message.
//! - RSD range scales outside the hardware set become `Invalid` messages.
//!
//! # Examples
//! ```
//! use mr2313_core::{Iff, SearadarMessage, decode_sentence};
//!
//! let messages =
//!     decode_sentence("$RATTM,66,28.71,341.1,T,57.6,024.5,T,0.4,4.1,N,b,L,,457362,XA*42")?;
//! match messages.as_slice() {
//!     [SearadarMessage::TrackedTarget(ttm)] => assert_eq!(ttm.iff, Iff::Friend),
//!     other => panic!("unexpected messages: {other:?}"),
//! }
//! # Ok::<(), mr2313_core::DecodeError>(())
//! ```

use serde::{Deserialize, Serialize};

mod convert;
mod message;
mod protocols;
mod replay;
mod source;
mod station;

pub use convert::{decode_sentence, decode_sentence_at};
pub use message::{
    Iff, InvalidReport, RadarSystemDataReport, SearadarMessage, TargetStatus, TargetType,
    TrackedTargetReport,
};
pub use protocols::mr231_3::layout::RANGE_SCALES;
pub use protocols::mr231_3::{DecodeError, Sentence, tokenize};
pub use replay::{ReplayError, replay_file, replay_source};
pub use source::{LineSource, SentenceEvent, SentenceSource, SourceError};
pub use station::{
    CODEC_NAME, Mr2313Converter, STATION_TYPE, STATION_TYPE_NATIVE, SentenceConverter,
    StationInfo,
};

/// Current report schema version.
pub const REPORT_VERSION: u32 = 1;
/// Timestamp used when the current time cannot be formatted.
pub const DEFAULT_GENERATED_AT: &str = "1970-01-01T00:00:00Z";

/// Outcome of replaying a sentence log, in input order.
///
/// # Examples
/// ```
/// use mr2313_core::{InputInfo, make_stub_report};
///
/// let report = make_stub_report(InputInfo {
///     path: "radar.log".to_string(),
///     bytes: 123,
/// });
/// assert_eq!(report.report_version, mr2313_core::REPORT_VERSION);
/// assert!(report.messages.is_empty());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Report schema version (not the binary version).
    pub report_version: u32,
    /// Tool identification metadata.
    pub tool: ToolInfo,
    /// Station the sentences were decoded for.
    pub station: StationInfo,
    /// RFC3339 timestamp of the replay.
    pub generated_at: String,

    /// Input log metadata.
    pub input: InputInfo,

    pub summary: ReplaySummary,
    /// Decoded messages, including `Invalid` diagnostics.
    pub messages: Vec<SearadarMessage>,
    /// Lines that failed to decode.
    pub errors: Vec<LineError>,
}

impl Report {
    /// True when any line failed to decode or produced an `Invalid` message.
    pub fn has_problems(&self) -> bool {
        self.summary.errors > 0 || self.summary.invalid > 0
    }
}

/// Tool metadata embedded in reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInfo {
    /// Tool name (e.g., "mr2313").
    pub name: String,
    /// Tool version (semver).
    pub version: String,
}

/// Input metadata embedded in reports.
///
/// # Examples
/// ```
/// use mr2313_core::InputInfo;
///
/// let input = InputInfo {
///     path: "-".to_string(),
///     bytes: 1024,
/// };
/// assert_eq!(input.bytes, 1024);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputInfo {
    /// Input path as provided to the replay, `-` for stdin.
    pub path: String,
    /// Input size in bytes.
    pub bytes: u64,
}

/// Per-outcome sentence counters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplaySummary {
    pub sentences_total: u64,
    pub tracked_targets: u64,
    pub radar_system_data: u64,
    pub invalid: u64,
    /// Sentences with a tag this decoder does not handle.
    pub ignored: u64,
    pub errors: u64,
}

/// Decode failure for one input line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineError {
    /// 1-based line number.
    pub line: usize,
    pub message: String,
}

/// Build a report with base fields filled and empty results.
pub fn make_stub_report(input: InputInfo) -> Report {
    Report {
        report_version: REPORT_VERSION,
        tool: ToolInfo {
            name: CODEC_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        station: StationInfo::mr231_3(),
        generated_at: DEFAULT_GENERATED_AT.to_string(),
        input,
        summary: ReplaySummary::default(),
        messages: vec![],
        errors: vec![],
    }
}
