//! Line-oriented sentence source for recorded logs.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::{SentenceEvent, SentenceSource, SourceError};

/// Yields one sentence per non-blank line of a reader.
///
/// Invalid UTF-8 is replaced lossily so a corrupt line surfaces as a decode
/// error instead of ending the stream.
///
/// # Examples
/// ```
/// use std::io::Cursor;
///
/// use mr2313_core::{LineSource, SentenceSource};
///
/// let mut source = LineSource::new(Cursor::new("$RAVHW,115.6,T,,,46.0,N,,*71\r\n\n"));
/// let event = source.next_sentence()?.unwrap();
/// assert_eq!(event.line, 1);
/// assert_eq!(event.text, "$RAVHW,115.6,T,,,46.0,N,,*71");
/// assert!(source.next_sentence()?.is_none());
/// # Ok::<(), mr2313_core::SourceError>(())
/// ```
pub struct LineSource<R> {
    reader: R,
    line: usize,
    buf: Vec<u8>,
}

impl LineSource<BufReader<File>> {
    pub fn open(path: &Path) -> Result<Self, SourceError> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> LineSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: 0,
            buf: Vec::new(),
        }
    }
}

impl<R: BufRead> SentenceSource for LineSource<R> {
    fn next_sentence(&mut self) -> Result<Option<SentenceEvent>, SourceError> {
        loop {
            self.buf.clear();
            if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
                return Ok(None);
            }
            self.line += 1;

            let raw = String::from_utf8_lossy(&self.buf);
            let text = raw.trim_end_matches(['\r', '\n']);
            if text.trim().is_empty() {
                continue;
            }
            return Ok(Some(SentenceEvent {
                line: self.line,
                text: text.to_string(),
            }));
        }
    }
}
