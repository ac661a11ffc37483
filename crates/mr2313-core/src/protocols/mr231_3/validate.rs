use super::layout;
use crate::message::{InvalidReport, RadarSystemDataReport, SearadarMessage};

/// True when `scale` is exactly one of the hardware range-scale settings.
pub fn is_valid_range_scale(scale: f64) -> bool {
    layout::RANGE_SCALES.contains(&scale)
}

/// Check an RSD report, replacing it with an `InvalidReport` on violation.
pub fn check_rsd(rsd: RadarSystemDataReport) -> SearadarMessage {
    if is_valid_range_scale(rsd.distance_scale) {
        return SearadarMessage::RadarSystemData(rsd);
    }

    // Debug keeps the fractional part, so 2.0 reads "2.0" rather than "2".
    let info = format!(
        "RSD message. Wrong distance scale value: {:?}",
        rsd.distance_scale
    );
    log::warn!("{info}");
    SearadarMessage::Invalid(InvalidReport {
        info,
        received_at: rsd.received_at,
    })
}
