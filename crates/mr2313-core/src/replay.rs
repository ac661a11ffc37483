use std::path::Path;

use thiserror::Error;
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

use crate::convert::decode_sentence_at;
use crate::message::SearadarMessage;
use crate::source::{LineSource, SentenceEvent, SentenceSource, SourceError};
use crate::{DEFAULT_GENERATED_AT, InputInfo, LineError, Report, make_stub_report};

#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Source error: {0}")]
    Source(#[from] SourceError),
}

pub fn replay_file(path: &Path) -> Result<Report, ReplayError> {
    let source = LineSource::open(path)?;
    let input = InputInfo {
        path: path.display().to_string(),
        bytes: path.metadata()?.len(),
    };
    replay_source(input, source)
}

/// Decode every sentence of `source` into a report.
///
/// Decode errors are recorded per line and never stop the replay; only
/// source errors do.
pub fn replay_source<S: SentenceSource>(
    input: InputInfo,
    mut source: S,
) -> Result<Report, ReplayError> {
    let mut report = make_stub_report(input);
    report.generated_at = now_rfc3339();

    while let Some(SentenceEvent { line, text }) = source.next_sentence()? {
        report.summary.sentences_total += 1;
        match decode_sentence_at(&text, OffsetDateTime::now_utc()) {
            Ok(messages) if messages.is_empty() => report.summary.ignored += 1,
            Ok(messages) => {
                for message in messages {
                    match &message {
                        SearadarMessage::TrackedTarget(_) => report.summary.tracked_targets += 1,
                        SearadarMessage::RadarSystemData(_) => {
                            report.summary.radar_system_data += 1
                        }
                        SearadarMessage::Invalid(_) => report.summary.invalid += 1,
                    }
                    report.messages.push(message);
                }
            }
            Err(err) => {
                log::info!("line {line}: {err}");
                report.summary.errors += 1;
                report.errors.push(LineError {
                    line,
                    message: err.to_string(),
                });
            }
        }
    }

    log::debug!(
        "replayed {} sentences from {}",
        report.summary.sentences_total,
        report.input.path
    );
    Ok(report)
}

fn now_rfc3339() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| DEFAULT_GENERATED_AT.to_string())
}
