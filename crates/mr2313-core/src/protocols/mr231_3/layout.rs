pub const PREAMBLE_LEN: usize = 3;
pub const FIELD_SEPARATOR: char = ',';
pub const CHECKSUM_DELIMITER: char = '*';

pub const TAG_INDEX: usize = 0;

pub const TTM_TAG: &str = "TTM";
pub const TTM_TARGET_NUMBER: usize = 1;
pub const TTM_DISTANCE: usize = 2;
pub const TTM_BEARING: usize = 3;
pub const TTM_SPEED: usize = 5;
pub const TTM_COURSE: usize = 6;
pub const TTM_IDENTITY: usize = 11;
pub const TTM_STATUS: usize = 12;
pub const TTM_MIN_FIELDS: usize = TTM_STATUS + 1;

pub const RSD_TAG: &str = "RSD";
pub const RSD_INITIAL_DISTANCE: usize = 1;
pub const RSD_INITIAL_BEARING: usize = 2;
pub const RSD_MOVING_CIRCLE_DISTANCE: usize = 3;
pub const RSD_BEARING: usize = 4;
pub const RSD_DISTANCE_FROM_SHIP: usize = 9;
pub const RSD_BEARING_2: usize = 10;
pub const RSD_RANGE_SCALE: usize = 11;
pub const RSD_DISTANCE_UNIT: usize = 12;
pub const RSD_DISPLAY_ORIENTATION: usize = 13;
pub const RSD_WORKING_MODE: usize = 14;
pub const RSD_MIN_FIELDS: usize = RSD_WORKING_MODE + 1;

/// Range scale settings the radar display can be switched to.
pub const RANGE_SCALES: [f64; 10] = [0.125, 0.25, 0.5, 1.5, 3.0, 6.0, 12.0, 24.0, 48.0, 96.0];
