//! Decoded station messages.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Friend-or-foe identification carried in a TTM sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Iff {
    Friend,
    Foe,
    Unknown,
}

/// Tracking state of a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TargetStatus {
    Lost,
    UnreliableData,
    Tracked,
}

/// Target classification. MR-231-3 never transmits one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TargetType {
    #[default]
    Unknown,
}

/// Kinematic report for one tracked target (TTM).
///
/// # Examples
/// ```
/// use mr2313_core::{Iff, TargetStatus, TargetType, TrackedTargetReport};
/// use time::OffsetDateTime;
///
/// let report = TrackedTargetReport {
///     target_number: 66,
///     distance: 28.71,
///     bearing: 341.1,
///     speed: 57.6,
///     course: 24.5,
///     iff: Iff::Friend,
///     status: TargetStatus::Lost,
///     target_type: TargetType::Unknown,
///     msg_time: OffsetDateTime::UNIX_EPOCH,
///     received_at: OffsetDateTime::UNIX_EPOCH,
/// };
/// assert_eq!(report.target_number, 66);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackedTargetReport {
    pub target_number: i32,
    pub distance: f64,
    pub bearing: f64,
    pub speed: f64,
    pub course: f64,
    pub iff: Iff,
    pub status: TargetStatus,
    pub target_type: TargetType,
    /// Time the report was constructed.
    #[serde(with = "time::serde::rfc3339")]
    pub msg_time: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub received_at: OffsetDateTime,
}

/// Radar operating state (RSD).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarSystemDataReport {
    pub initial_distance: f64,
    pub initial_bearing: f64,
    pub moving_circle_of_distance: f64,
    pub bearing: f64,
    pub distance_from_ship: f64,
    pub bearing2: f64,
    /// Display range scale; only values in the fixed hardware set are legal.
    pub distance_scale: f64,
    pub distance_unit: String,
    pub display_orientation: String,
    pub working_mode: String,
    #[serde(with = "time::serde::rfc3339")]
    pub received_at: OffsetDateTime,
}

/// Diagnostic emitted in place of a message that failed domain validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvalidReport {
    pub info: String,
    #[serde(with = "time::serde::rfc3339")]
    pub received_at: OffsetDateTime,
}

/// One decoded station message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SearadarMessage {
    TrackedTarget(TrackedTargetReport),
    RadarSystemData(RadarSystemDataReport),
    Invalid(InvalidReport),
}

impl SearadarMessage {
    pub fn received_at(&self) -> OffsetDateTime {
        match self {
            SearadarMessage::TrackedTarget(ttm) => ttm.received_at,
            SearadarMessage::RadarSystemData(rsd) => rsd.received_at,
            SearadarMessage::Invalid(invalid) => invalid.received_at,
        }
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, SearadarMessage::Invalid(_))
    }
}
