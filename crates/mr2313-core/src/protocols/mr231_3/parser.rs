use time::OffsetDateTime;

use super::codes::{iff_from_code, status_from_code};
use super::error::DecodeError;
use super::layout;
use super::reader::Sentence;
use crate::message::{RadarSystemDataReport, TargetType, TrackedTargetReport};

/// Structured content of a recognized sentence, before validation.
#[derive(Debug)]
pub enum Mr2313Sentence {
    Ttm(TrackedTargetReport),
    Rsd(RadarSystemDataReport),
}

/// Build the message for a tokenized sentence.
///
/// Returns `Ok(None)` for tags this protocol does not decode.
pub fn parse_sentence(
    sentence: &Sentence<'_>,
    received_at: OffsetDateTime,
) -> Result<Option<Mr2313Sentence>, DecodeError> {
    match sentence.tag() {
        layout::TTM_TAG => {
            parse_ttm(sentence, received_at).map(|ttm| Some(Mr2313Sentence::Ttm(ttm)))
        }
        layout::RSD_TAG => {
            parse_rsd(sentence, received_at).map(|rsd| Some(Mr2313Sentence::Rsd(rsd)))
        }
        _ => Ok(None),
    }
}

pub fn parse_ttm(
    sentence: &Sentence<'_>,
    received_at: OffsetDateTime,
) -> Result<TrackedTargetReport, DecodeError> {
    let fields = sentence.fields_for(layout::TTM_TAG, layout::TTM_MIN_FIELDS)?;

    Ok(TrackedTargetReport {
        target_number: fields.read_i32(layout::TTM_TARGET_NUMBER)?,
        distance: fields.read_f64(layout::TTM_DISTANCE)?,
        bearing: fields.read_f64(layout::TTM_BEARING)?,
        speed: fields.read_f64(layout::TTM_SPEED)?,
        course: fields.read_f64(layout::TTM_COURSE)?,
        iff: iff_from_code(fields.read_str(layout::TTM_IDENTITY)?),
        status: status_from_code(fields.read_str(layout::TTM_STATUS)?),
        target_type: TargetType::Unknown,
        msg_time: received_at,
        received_at,
    })
}

pub fn parse_rsd(
    sentence: &Sentence<'_>,
    received_at: OffsetDateTime,
) -> Result<RadarSystemDataReport, DecodeError> {
    let fields = sentence.fields_for(layout::RSD_TAG, layout::RSD_MIN_FIELDS)?;

    Ok(RadarSystemDataReport {
        initial_distance: fields.read_f64(layout::RSD_INITIAL_DISTANCE)?,
        initial_bearing: fields.read_f64(layout::RSD_INITIAL_BEARING)?,
        moving_circle_of_distance: fields.read_f64(layout::RSD_MOVING_CIRCLE_DISTANCE)?,
        bearing: fields.read_f64(layout::RSD_BEARING)?,
        distance_from_ship: fields.read_f64(layout::RSD_DISTANCE_FROM_SHIP)?,
        bearing2: fields.read_f64(layout::RSD_BEARING_2)?,
        distance_scale: fields.read_f64(layout::RSD_RANGE_SCALE)?,
        distance_unit: fields.read_str(layout::RSD_DISTANCE_UNIT)?.to_string(),
        display_orientation: fields.read_str(layout::RSD_DISPLAY_ORIENTATION)?.to_string(),
        working_mode: fields.read_str(layout::RSD_WORKING_MODE)?.to_string(),
        received_at,
    })
}
