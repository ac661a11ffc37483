//! Station descriptor and the converter seam used by message routers.

use serde::{Deserialize, Serialize};

use crate::convert::decode_sentence;
use crate::message::SearadarMessage;
use crate::protocols::mr231_3::DecodeError;

/// Human-readable station type, the Latin transliteration of the vendor's
/// Cyrillic designation "МР-231-3".
pub const STATION_TYPE: &str = "MR-231-3";
/// Station type as the vendor writes it.
pub const STATION_TYPE_NATIVE: &str = "МР-231-3";
/// Codec identifier used to select this converter.
pub const CODEC_NAME: &str = "mr2313";

/// Converts raw station sentences into messages.
///
/// Implementations are stateless; one call handles one sentence.
pub trait SentenceConverter {
    fn convert(&self, sentence: &str) -> Result<Vec<SearadarMessage>, DecodeError>;
}

/// `SentenceConverter` for MR-231-3 radar sentences.
///
/// # Examples
/// ```
/// use mr2313_core::{Mr2313Converter, SentenceConverter};
///
/// let messages = Mr2313Converter.convert("$RAVHW,115.6,T,,,46.0,N,,*71")?;
/// assert!(messages.is_empty());
/// # Ok::<(), mr2313_core::DecodeError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Mr2313Converter;

impl SentenceConverter for Mr2313Converter {
    fn convert(&self, sentence: &str) -> Result<Vec<SearadarMessage>, DecodeError> {
        decode_sentence(sentence)
    }
}

/// Station metadata embedded in reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationInfo {
    pub station_type: String,
    pub codec_name: String,
}

impl StationInfo {
    pub fn mr231_3() -> Self {
        Self {
            station_type: STATION_TYPE.to_string(),
            codec_name: CODEC_NAME.to_string(),
        }
    }

    pub fn create_converter(&self) -> Mr2313Converter {
        Mr2313Converter
    }
}

impl Default for StationInfo {
    fn default() -> Self {
        Self::mr231_3()
    }
}
