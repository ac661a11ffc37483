use time::OffsetDateTime;

use crate::message::SearadarMessage;
use crate::protocols::mr231_3::{
    DecodeError, Mr2313Sentence, check_rsd, parse_sentence, tokenize,
};

/// Decode one sentence, stamping messages with the current UTC time.
///
/// The result holds zero messages for unrecognized tags and exactly one
/// otherwise. RSD sentences with an illegal range scale yield an
/// `Invalid` message rather than an error.
///
/// # Examples
/// ```
/// use mr2313_core::{SearadarMessage, decode_sentence};
///
/// let messages = decode_sentence("$RARSD,14.0,0.0,96.9,306.4,,,,,97.7,11.6,0.3,K,N,S*20")?;
/// assert!(matches!(messages.as_slice(), [SearadarMessage::Invalid(_)]));
///
/// let messages = decode_sentence("$RAVHW,115.6,T,,,46.0,N,,*71")?;
/// assert!(messages.is_empty());
/// # Ok::<(), mr2313_core::DecodeError>(())
/// ```
///
/// # Errors
/// Returns `DecodeError` for malformed frames and non-numeric fields; no
/// partial message is produced in that case.
pub fn decode_sentence(sentence: &str) -> Result<Vec<SearadarMessage>, DecodeError> {
    decode_sentence_at(sentence, OffsetDateTime::now_utc())
}

/// Decode one sentence using `received_at` as its receipt time.
pub fn decode_sentence_at(
    sentence: &str,
    received_at: OffsetDateTime,
) -> Result<Vec<SearadarMessage>, DecodeError> {
    let tokens = tokenize(sentence)?;
    let mut messages = Vec::with_capacity(1);

    match parse_sentence(&tokens, received_at)? {
        Some(Mr2313Sentence::Ttm(ttm)) => messages.push(SearadarMessage::TrackedTarget(ttm)),
        Some(Mr2313Sentence::Rsd(rsd)) => messages.push(check_rsd(rsd)),
        None => log::debug!("ignoring sentence with tag {:?}", tokens.tag()),
    }
    Ok(messages)
}
