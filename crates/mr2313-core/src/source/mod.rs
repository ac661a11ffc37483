mod lines;

pub use lines::LineSource;

use thiserror::Error;

/// One raw sentence read from a source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceEvent {
    /// 1-based line number within the input.
    pub line: usize,
    pub text: String,
}

pub trait SentenceSource {
    fn next_sentence(&mut self) -> Result<Option<SentenceEvent>, SourceError>;
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
