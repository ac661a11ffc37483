use std::fs;
use std::io::{self, Cursor, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mr2313_core::{InputInfo, LineSource, Report, replay_file, replay_source};

#[derive(Parser, Debug)]
#[command(name = "mr2313")]
#[command(version)]
#[command(
    about = "Decoder for MR-231-3 marine radar sentences (TTM / RSD).",
    long_about = None,
    after_help = "Examples:\n  mr2313 decode radar.log -o report.json\n  mr2313 decode - --stdout < radar.log\n  mr2313 sentence '$RATTM,66,28.71,341.1,T,57.6,024.5,T,0.4,4.1,N,b,L,,457362,XA*42'"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decode a sentence log and generate a versioned JSON report.
    Decode {
        /// Path to a sentence log, one sentence per line ("-" for stdin)
        input: PathBuf,

        /// Output report path (JSON)
        #[arg(short = 'o', long, required_unless_present = "stdout")]
        report: Option<PathBuf>,

        /// Write JSON report to stdout
        #[arg(long, conflicts_with = "report")]
        stdout: bool,

        /// Pretty-print JSON output
        #[arg(long, conflicts_with = "compact")]
        pretty: bool,

        /// Compact JSON output (default)
        #[arg(long)]
        compact: bool,

        /// Suppress non-error output
        #[arg(long)]
        quiet: bool,

        /// Exit with a non-zero code if any line failed or was invalid
        #[arg(long)]
        strict: bool,
    },
    /// Decode a single sentence and print its messages as JSON.
    Sentence {
        /// Raw sentence, e.g. '$RAVHW,115.6,T,,,46.0,N,,*71'
        sentence: String,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Decode {
            input,
            report,
            stdout,
            pretty,
            compact,
            quiet,
            strict,
        } => cmd_decode(input, report, stdout, pretty, compact, quiet, strict),
        Commands::Sentence { sentence, pretty } => cmd_sentence(&sentence, pretty),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            err.print();
            ExitCode::from(2)
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

/// User-facing failure: printed as `error:` plus an optional `hint:` line, exit 2.
#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<&'static str>,
}

impl CliError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            hint: None,
        }
    }

    fn with_hint(mut self, hint: &'static str) -> Self {
        self.hint = Some(hint);
        self
    }

    fn print(&self) {
        eprintln!("error: {}", self.message);
        if let Some(hint) = self.hint {
            eprintln!("hint: {hint}");
        }
    }
}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::new(format!("{err:#}"))
    }
}

fn cmd_decode(
    input: PathBuf,
    report: Option<PathBuf>,
    stdout: bool,
    pretty: bool,
    compact: bool,
    quiet: bool,
    strict: bool,
) -> Result<(), CliError> {
    let report_path = if stdout {
        None
    } else {
        Some(report.ok_or_else(|| {
            CliError::new("missing output path").with_hint("use -o/--report or --stdout")
        })?)
    };

    log::debug!("decoding sentence log {}", input.display());
    let rep = if is_stdin(&input) {
        replay_stdin()?
    } else {
        validate_input_file(&input)?;
        if let Some(report_path) = report_path.as_ref() {
            ensure_distinct_paths(&input, report_path)?;
        }
        replay_file(&input).context("sentence log decoding failed")?
    };
    let json = serialize_json(&rep, pretty, compact)?;

    match report_path {
        None => print!("{}", json),
        Some(report_path) => {
            if let Some(parent) = report_path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent).with_context(|| {
                        format!("Failed to create output directory: {}", parent.display())
                    })?;
                }
            }
            fs::write(&report_path, json)
                .with_context(|| format!("Failed to write report: {}", report_path.display()))?;
            if !quiet {
                eprintln!(
                    "OK: {} sentences decoded -> {}",
                    rep.summary.sentences_total,
                    report_path.display()
                );
            }
        }
    }

    if strict && rep.has_problems() {
        return Err(CliError::new(format!(
            "decode problems detected ({} errors, {} invalid)",
            rep.summary.errors, rep.summary.invalid
        ))
        .with_hint("inspect the report's errors and invalid messages"));
    }
    Ok(())
}

fn cmd_sentence(sentence: &str, pretty: bool) -> Result<(), CliError> {
    let messages = mr2313_core::decode_sentence(sentence).map_err(|err| {
        CliError::new(format!("cannot decode sentence: {err}"))
            .with_hint("expected $RA<tag>,<fields>*<checksum>")
    })?;
    let json = serialize_json(&messages, pretty, false)?;
    println!("{}", json);
    Ok(())
}

fn replay_stdin() -> Result<Report, CliError> {
    let mut text = Vec::new();
    io::stdin()
        .lock()
        .read_to_end(&mut text)
        .context("Failed to read stdin")?;
    let input = InputInfo {
        path: "-".to_string(),
        bytes: text.len() as u64,
    };
    replay_source(input, LineSource::new(Cursor::new(text)))
        .context("sentence log decoding failed")
        .map_err(Into::into)
}

fn serialize_json<T: serde::Serialize>(
    value: &T,
    pretty: bool,
    compact: bool,
) -> Result<String, CliError> {
    if pretty && compact {
        return Err(CliError::new("cannot use --pretty and --compact together")
            .with_hint("choose one output format"));
    }
    if pretty {
        serde_json::to_string_pretty(value)
            .context("JSON serialization failed")
            .map_err(Into::into)
    } else {
        serde_json::to_string(value)
            .context("JSON serialization failed")
            .map_err(Into::into)
    }
}

fn is_stdin(input: &Path) -> bool {
    input.as_os_str() == "-"
}

const INPUT_HINT: &str = "pass a sentence log file, or - for stdin";

fn validate_input_file(input: &Path) -> Result<(), CliError> {
    if !input.exists() {
        return Err(
            CliError::new(format!("input file not found: {}", input.display()))
                .with_hint(INPUT_HINT),
        );
    }
    if !input.is_file() {
        return Err(
            CliError::new(format!("input is not a file: {}", input.display()))
                .with_hint(INPUT_HINT),
        );
    }
    Ok(())
}

fn ensure_distinct_paths(input: &Path, report: &Path) -> Result<(), CliError> {
    let input_abs = fs::canonicalize(input)
        .with_context(|| format!("Failed to resolve input path: {}", input.display()))?;
    let report_dir = match report.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    // A report directory that does not exist yet cannot contain the input.
    let Ok(report_dir) = fs::canonicalize(report_dir) else {
        return Ok(());
    };
    let file_name = report
        .file_name()
        .ok_or_else(|| anyhow::anyhow!("Invalid report path"))?;
    if report_dir.join(file_name) == input_abs {
        return Err(
            CliError::new(format!("report path must differ from input: {}", report.display()))
                .with_hint("choose a different output path"),
        );
    }
    Ok(())
}
