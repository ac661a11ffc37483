//! Single-character protocol codes and their domain values.
//!
//! Firmware variants emit codes outside the documented set, so every table
//! falls back to its most conservative value instead of failing.

use crate::message::{Iff, TargetStatus};

pub const IFF_FRIEND: &str = "b";
pub const IFF_FOE: &str = "p";

pub const STATUS_LOST: &str = "L";
pub const STATUS_QUERY: &str = "Q";
pub const STATUS_TRACKED: &str = "T";

pub fn iff_from_code(code: &str) -> Iff {
    match code {
        IFF_FRIEND => Iff::Friend,
        IFF_FOE => Iff::Foe,
        _ => Iff::Unknown,
    }
}

pub fn status_from_code(code: &str) -> TargetStatus {
    match code {
        STATUS_LOST => TargetStatus::Lost,
        STATUS_QUERY => TargetStatus::UnreliableData,
        STATUS_TRACKED => TargetStatus::Tracked,
        _ => TargetStatus::UnreliableData,
    }
}
