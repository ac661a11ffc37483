use super::error::DecodeError;
use super::layout;

/// A raw sentence split into its lexical parts.
///
/// Tokenizing never interprets numbers; field positions are preserved,
/// empty tokens included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence<'a> {
    preamble: &'a str,
    fields: Vec<&'a str>,
    checksum: &'a str,
}

/// Split `line` into preamble, comma-separated fields and checksum text.
///
/// # Examples
/// ```
/// use mr2313_core::tokenize;
///
/// let sentence = tokenize("$RAVHW,115.6,T,,,46.0,N,,*71").unwrap();
/// assert_eq!(sentence.preamble(), "$RA");
/// assert_eq!(sentence.tag(), "VHW");
/// assert_eq!(sentence.fields().len(), 9);
/// assert_eq!(sentence.checksum(), "71");
/// ```
///
/// # Errors
/// Returns `DecodeError::TooShort` when the line cannot hold the preamble and
/// `DecodeError::MissingChecksumDelimiter` when no `*` follows it.
pub fn tokenize(line: &str) -> Result<Sentence<'_>, DecodeError> {
    let (preamble, rest) = line
        .split_at_checked(layout::PREAMBLE_LEN)
        .ok_or(DecodeError::TooShort {
            needed: layout::PREAMBLE_LEN,
            actual: line.len(),
        })?;
    let (body, checksum) = rest
        .split_once(layout::CHECKSUM_DELIMITER)
        .ok_or(DecodeError::MissingChecksumDelimiter)?;

    Ok(Sentence {
        preamble,
        fields: body.trim().split(layout::FIELD_SEPARATOR).collect(),
        checksum: checksum.trim_end(),
    })
}

impl<'a> Sentence<'a> {
    pub fn preamble(&self) -> &'a str {
        self.preamble
    }

    /// Message-type tag (field 0).
    pub fn tag(&self) -> &'a str {
        self.fields
            .get(layout::TAG_INDEX)
            .copied()
            .unwrap_or_default()
    }

    /// All field tokens, tag included at index 0.
    pub fn fields(&self) -> &[&'a str] {
        &self.fields
    }

    /// Checksum text after `*`; never verified.
    pub fn checksum(&self) -> &'a str {
        self.checksum
    }

    /// Check that the sentence carries at least `needed` fields for `tag`
    /// and return a reader over them.
    pub fn fields_for(
        &self,
        tag: &'static str,
        needed: usize,
    ) -> Result<FieldReader<'_, 'a>, DecodeError> {
        if self.fields.len() < needed {
            return Err(DecodeError::TooFewFields {
                tag,
                needed,
                actual: self.fields.len(),
            });
        }
        Ok(FieldReader {
            tag,
            fields: &self.fields,
        })
    }
}

/// Typed, bounds-checked access to the fields of one message type.
pub struct FieldReader<'s, 'a> {
    tag: &'static str,
    fields: &'s [&'a str],
}

impl<'a> FieldReader<'_, 'a> {
    pub fn read_str(&self, index: usize) -> Result<&'a str, DecodeError> {
        self.fields
            .get(index)
            .copied()
            .ok_or(DecodeError::TooFewFields {
                tag: self.tag,
                needed: index + 1,
                actual: self.fields.len(),
            })
    }

    /// Parse a finite floating-point value; empty tokens are rejected.
    pub fn read_f64(&self, index: usize) -> Result<f64, DecodeError> {
        let raw = self.read_str(index)?;
        match raw.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(self.invalid_number(index, raw)),
        }
    }

    pub fn read_i32(&self, index: usize) -> Result<i32, DecodeError> {
        let raw = self.read_str(index)?;
        raw.trim()
            .parse::<i32>()
            .map_err(|_| self.invalid_number(index, raw))
    }

    fn invalid_number(&self, index: usize, raw: &str) -> DecodeError {
        DecodeError::InvalidNumber {
            tag: self.tag,
            index,
            value: raw.to_string(),
        }
    }
}
