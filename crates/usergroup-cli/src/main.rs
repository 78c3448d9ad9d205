use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use base64::{Engine, engine::general_purpose::STANDARD};
use clap::{Parser, Subcommand, ValueEnum};
use glob::glob;
use tracing_subscriber::EnvFilter;
use usergroup_core::{DecodeError, DecodeErrorKind, DecodeOptions, RecordKind};

#[derive(Parser, Debug)]
#[command(name = "usergroup")]
#[command(version)]
#[command(
    about = "Decode user-group program accounts and events into JSON.",
    long_about = None,
    after_help = "Examples:\n  usergroup decode group account.bin -o group.json\n  usergroup decode proposal proposal.b64 --base64 --stdout --pretty\n  usergroup detect account.bin"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decode one record and write a versioned JSON report.
    Decode {
        /// Record layout to decode
        kind: KindArg,

        /// Path to the record data (raw bytes, or base64 with --base64)
        input: PathBuf,

        /// Output report path (JSON)
        #[arg(short = 'o', long, required_unless_present = "stdout")]
        report: Option<PathBuf>,

        /// Write JSON report to stdout
        #[arg(long, conflicts_with = "report")]
        stdout: bool,

        /// Input holds base64 text instead of raw bytes
        #[arg(long)]
        base64: bool,

        /// Reject data whose discriminator does not match KIND
        #[arg(long)]
        verify_discriminator: bool,

        /// Pretty-print JSON output
        #[arg(long, conflicts_with = "compact")]
        pretty: bool,

        /// Compact JSON output (default)
        #[arg(long)]
        compact: bool,

        /// Suppress non-error output
        #[arg(long)]
        quiet: bool,
    },
    /// Print the record kind identified by the data's discriminator.
    Detect {
        /// Path to the record data
        input: PathBuf,

        /// Input holds base64 text instead of raw bytes
        #[arg(long)]
        base64: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum KindArg {
    Group,
    Proposal,
    Member,
    Admin,
    Signature,
    SubmitProposalEvent,
    ExecuteProposalEvent,
}

impl From<KindArg> for RecordKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Group => RecordKind::Group,
            KindArg::Proposal => RecordKind::Proposal,
            KindArg::Member => RecordKind::Member,
            KindArg::Admin => RecordKind::Admin,
            KindArg::Signature => RecordKind::Signature,
            KindArg::SubmitProposalEvent => RecordKind::SubmitProposalEvent,
            KindArg::ExecuteProposalEvent => RecordKind::ExecuteProposalEvent,
        }
    }
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Decode {
            kind,
            input,
            report,
            stdout,
            base64,
            verify_discriminator,
            pretty,
            compact,
            quiet,
        } => cmd_decode(
            kind.into(),
            input,
            report,
            OutputOptions {
                stdout,
                pretty,
                compact,
                quiet,
            },
            base64,
            DecodeOptions {
                verify_discriminator,
            },
        ),
        Commands::Detect { input, base64 } => cmd_detect(input, base64),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(2)
        }
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn new(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            message: message.into(),
            hint,
        }
    }

    fn decode(kind: RecordKind, err: &DecodeError) -> Self {
        let hint = match &err.kind {
            DecodeErrorKind::TruncatedInput { .. } => Some(format!(
                "a {} record needs at least {} bytes; check the record kind or --base64",
                kind,
                kind.min_len()
            )),
            DecodeErrorKind::DiscriminatorMismatch { .. } => {
                Some("run `usergroup detect` to identify the record".to_string())
            }
            DecodeErrorKind::InvalidEnumValue { .. } | DecodeErrorKind::InvalidUtf8 { .. } => None,
        };
        CliError::new(format!("failed to decode {} record: {}", kind, err), hint)
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::new(format!("{:#}", err), None)
    }
}

#[derive(Debug, Clone, Copy)]
struct OutputOptions {
    stdout: bool,
    pretty: bool,
    compact: bool,
    quiet: bool,
}

fn cmd_decode(
    kind: RecordKind,
    input: PathBuf,
    report: Option<PathBuf>,
    output: OutputOptions,
    base64: bool,
    options: DecodeOptions,
) -> Result<(), CliError> {
    let resolved_input = resolve_input_path(&input)?;
    validate_input_file(&resolved_input)?;
    let report = if output.stdout {
        None
    } else {
        Some(report.ok_or_else(|| {
            CliError::new(
                "missing output path",
                Some("use -o/--report or --stdout".to_string()),
            )
        })?)
    };
    if let Some(report_path) = report.as_ref() {
        ensure_distinct_output(&resolved_input, report_path)?;
    }

    let data = read_record_data(&resolved_input, base64)?;
    let record = usergroup_core::decode_record_with(kind, &data, &options)
        .map_err(|err| CliError::decode(kind, &err))?;
    let rep = usergroup_core::make_report(
        &resolved_input.display().to_string(),
        data.len() as u64,
        record,
    );
    let json = serialize_report(&rep, output.pretty, output.compact)?;

    let Some(report) = report else {
        println!("{}", json);
        return Ok(());
    };

    if let Some(parent) = report.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory: {}", parent.display())
            })?;
        }
    }
    fs::write(&report, json)
        .with_context(|| format!("Failed to write report: {}", report.display()))?;

    if !output.quiet {
        eprintln!("OK: report written -> {}", report.display());
    }
    Ok(())
}

fn cmd_detect(input: PathBuf, base64: bool) -> Result<(), CliError> {
    let resolved_input = resolve_input_path(&input)?;
    validate_input_file(&resolved_input)?;
    let data = read_record_data(&resolved_input, base64)?;

    match RecordKind::detect(&data) {
        Some(kind) => {
            println!("{}", kind);
            Ok(())
        }
        None => Err(CliError::new(
            format!("unrecognized discriminator in {}", resolved_input.display()),
            Some(if base64 {
                "the data is not a user-group account or event".to_string()
            } else {
                "pass --base64 if the file holds base64 text".to_string()
            }),
        )),
    }
}

/// Raw record bytes, decoding base64 text first when asked.
fn read_record_data(input: &Path, base64: bool) -> Result<Vec<u8>, CliError> {
    let bytes = fs::read(input)
        .with_context(|| format!("Failed to read input file: {}", input.display()))?;
    if !base64 {
        return Ok(bytes);
    }

    let text = String::from_utf8(bytes).map_err(|_| {
        CliError::new(
            format!("input is not base64 text: {}", input.display()),
            Some("drop --base64 for raw binary input".to_string()),
        )
    })?;
    let data = STANDARD.decode(text.trim()).map_err(|err| {
        CliError::new(
            format!("invalid base64 in {}: {}", input.display(), err),
            Some("drop --base64 for raw binary input".to_string()),
        )
    })?;
    tracing::debug!(path = %input.display(), bytes = data.len(), "decoded base64 input");
    Ok(data)
}

fn ensure_distinct_output(input: &Path, report_path: &Path) -> Result<(), CliError> {
    // A directory that does not exist yet cannot hold the input.
    if let Some(parent) = report_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            return Ok(());
        }
    }
    let input_abs = fs::canonicalize(input)
        .with_context(|| format!("Failed to resolve input path: {}", input.display()))?;
    let report_dir = report_path
        .parent()
        .map(|parent| {
            if parent.as_os_str().is_empty() {
                fs::canonicalize(".")
            } else {
                fs::canonicalize(parent)
            }
        })
        .transpose()
        .with_context(|| format!("Failed to resolve output path: {}", report_path.display()))?;
    if let Some(report_dir) = report_dir {
        let report_target = report_dir.join(
            report_path
                .file_name()
                .ok_or_else(|| anyhow::anyhow!("Invalid report path"))?,
        );
        if report_target == input_abs {
            return Err(CliError::new(
                format!(
                    "report path must differ from input: {}",
                    report_path.display()
                ),
                Some("choose a different output path".to_string()),
            ));
        }
    }
    Ok(())
}

fn serialize_report(
    rep: &usergroup_core::Report,
    pretty: bool,
    compact: bool,
) -> Result<String, CliError> {
    if pretty && compact {
        return Err(CliError::new(
            "cannot use --pretty and --compact together",
            Some("choose one output format".to_string()),
        ));
    }
    if pretty {
        serde_json::to_string_pretty(rep)
            .context("JSON serialization failed")
            .map_err(Into::into)
    } else {
        serde_json::to_string(rep)
            .context("JSON serialization failed")
            .map_err(Into::into)
    }
}

fn validate_input_file(input: &Path) -> Result<(), CliError> {
    if !input.exists() {
        return Err(CliError::new(
            format!("input file not found: {}", input.display()),
            Some("pass a file holding one account or event".to_string()),
        ));
    }
    if !input.is_file() {
        return Err(CliError::new(
            format!("input is not a file: {}", input.display()),
            Some("pass a file holding one account or event".to_string()),
        ));
    }
    Ok(())
}

fn resolve_input_path(input: &Path) -> Result<PathBuf, CliError> {
    let pattern = input.to_string_lossy();
    if !is_glob_pattern(&pattern) {
        return Ok(input.to_path_buf());
    }

    let mut matches = Vec::new();
    let paths = glob(&pattern).map_err(|err| {
        CliError::new(
            format!("invalid input pattern '{}'", pattern),
            Some(format!("pattern error: {}", err.msg)),
        )
    })?;
    for entry in paths {
        let path = entry.map_err(|err| {
            CliError::new(
                format!("invalid input pattern '{}'", pattern),
                Some(format!("pattern error: {}", err)),
            )
        })?;
        if path.is_file() {
            matches.push(path);
        }
    }

    if matches.is_empty() {
        return Err(CliError::new(
            format!("no files match pattern '{}'", pattern),
            Some("check the path or quote the pattern".to_string()),
        ));
    }
    if matches.len() > 1 {
        let listed = matches
            .iter()
            .take(3)
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        let more = if matches.len() > 3 { ", ..." } else { "" };
        return Err(CliError::new(
            format!(
                "multiple files match pattern '{}' ({} matches); matches: {}{}",
                pattern,
                matches.len(),
                listed,
                more
            ),
            Some("pass a single record file, or run once per file".to_string()),
        ));
    }

    Ok(matches.remove(0))
}

fn is_glob_pattern(input: &str) -> bool {
    input.contains('*') || input.contains('?') || input.contains('[')
}
