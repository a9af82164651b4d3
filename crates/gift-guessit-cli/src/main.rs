use anyhow::{Context, Result, bail};
use clap::Parser;
use gift_guessit_config::Config;
use gift_guessit_engine::{
    GuessitImporter, ImportIssue, InputDescriptor, IssueSink, QuestionImporter, QuestionRecord,
    ReportedIssue, Severity, io,
};
use serde::Serialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "gift-guessit",
    version,
    about = "Import one-line guessit and Wordle questions as JSON records"
)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Media type to assume for every input instead of guessing from the extension
    #[arg(long)]
    media_type: Option<String>,

    /// Directory for JSON reports (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Files, directories or glob patterns to import
    #[arg(required = true)]
    inputs: Vec<String>,
}

/// Everything produced by importing one file.
#[derive(Debug, Serialize)]
struct ImportReport {
    source: String,
    records: Vec<QuestionRecord>,
    issues: Vec<ReportedIssue>,
}

/// Collects issues for the report and logs them at a level matching their severity.
struct LoggingSink<'s> {
    source: &'s str,
    issues: Vec<ReportedIssue>,
}

impl<'s> LoggingSink<'s> {
    fn new(source: &'s str) -> Self {
        Self {
            source,
            issues: Vec::new(),
        }
    }
}

impl IssueSink for LoggingSink<'_> {
    fn report(&mut self, line_number: usize, issue: ImportIssue) {
        let level = match issue.severity() {
            Severity::Rejection => log::Level::Error,
            Severity::Warning => log::Level::Warn,
            Severity::Notice => log::Level::Info,
        };
        log::log!(level, "{}:{}: {}", self.source, line_number, issue);
        self.issues.push(ReportedIssue { line_number, issue });
    }
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    let importer = GuessitImporter::new(config.import);
    let mut report_paths = cli.output.or(config.output_dir).map(ReportPaths::new);

    let files = expand_inputs(&cli.inputs)?;
    if files.is_empty() {
        log::warn!("No question files found");
    }

    for path in files {
        let descriptor = describe(&path, cli.media_type.as_deref());
        if !importer.can_import(&descriptor) {
            log::warn!(
                "Skipping {}: media type '{}' is not accepted (expected '{}')",
                path.display(),
                descriptor.media_type,
                importer.options().accepted_media_type
            );
            continue;
        }

        let report = import_file(&importer, &path)?;
        log::info!(
            "{}: {} record(s), {} issue(s)",
            report.source,
            report.records.len(),
            report.issues.len()
        );
        let json = render_report(&report, cli.pretty)?;

        match &mut report_paths {
            Some(paths) => {
                let target = paths.next(&path);
                io::write_report(&target, &json)
                    .with_context(|| format!("Failed to write report {}", target.display()))?;
                log::info!("Wrote {}", target.display());
            }
            None => println!("{json}"),
        }
    }

    Ok(())
}

fn load_config(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => match Config::load_from_path(path)? {
            Some(config) => Ok(config),
            None => bail!("Config file '{}' does not exist", path.display()),
        },
        None => {
            let config_path = Config::config_path();
            log::debug!("Config path: {}", config_path.display());
            Ok(Config::load()?.unwrap_or_default())
        }
    }
}

/// Resolves every input argument to a list of files, keeping argument order.
fn expand_inputs(inputs: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for input in inputs {
        let path = Path::new(input);
        if path.is_dir() {
            files.extend(io::scan_import_files(path)?);
        } else if path.is_file() {
            files.push(path.to_path_buf());
        } else {
            let mut matched = false;
            let entries =
                glob::glob(input).with_context(|| format!("Invalid glob pattern '{input}'"))?;
            for entry in entries {
                let entry = entry?;
                if entry.is_file() {
                    files.push(entry);
                    matched = true;
                }
            }
            if !matched {
                bail!("No file matches '{input}'");
            }
        }
    }

    Ok(files)
}

fn describe(path: &Path, media_type: Option<&str>) -> InputDescriptor {
    let mut descriptor = InputDescriptor::from_path(path);
    if let Some(media_type) = media_type {
        descriptor.media_type = media_type.to_string();
    }
    descriptor
}

fn import_file(importer: &GuessitImporter, path: &Path) -> Result<ImportReport> {
    let text = io::read_import_file(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let source = path.display().to_string();

    let mut sink = LoggingSink::new(&source);
    let records = importer.import(&text, &mut sink);
    let issues = sink.issues;

    Ok(ImportReport {
        source,
        records,
        issues,
    })
}

fn render_report(report: &ImportReport, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(report)?
    } else {
        serde_json::to_string(report)?
    };
    Ok(json)
}

/// Hands out `<stem>.json` paths under one output directory, never the same
/// path twice. Inputs sharing a stem get `<stem>-2.json`, `<stem>-3.json`, ...
struct ReportPaths {
    dir: PathBuf,
    taken: HashSet<PathBuf>,
}

impl ReportPaths {
    fn new(dir: PathBuf) -> Self {
        Self {
            dir,
            taken: HashSet::new(),
        }
    }

    fn next(&mut self, input: &Path) -> PathBuf {
        let stem = input
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "import".to_string());

        let mut target = self.dir.join(format!("{stem}.json"));
        let mut n = 1;
        while self.taken.contains(&target) {
            n += 1;
            target = self.dir.join(format!("{stem}-{n}.json"));
        }
        if n > 1 {
            log::warn!(
                "{} shares its name with an earlier input, writing {}",
                input.display(),
                target.display()
            );
        }

        self.taken.insert(target.clone());
        target
    }
}
