//! Legible: Readability Analyzer CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use legible::analyzer::engine::STDIN_SOURCE;
use legible::analyzer::syllables::tally_syllables;
use legible::analyzer::AnalysisEngine;
use legible::config::{build_ignore_set, is_ignored, load_config, Config, CONFIG_FILENAME};
use legible::reporter::{ConsoleReporter, JsonReporter};
use legible::{segment_sentences, TextAnalysis};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use walkdir::WalkDir;

/// Legible: Readability Analyzer for plain text
#[derive(Parser, Debug)]
#[command(name = "legible")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Text file or directory to analyze, or "-" for stdin (omit when using a subcommand)
    path: Option<PathBuf>,

    /// Output format as JSON
    #[arg(long, short)]
    json: bool,

    /// Minimum Flesch score, 0-100 (exit 1 if any text is below)
    #[arg(long, short, value_parser = clap::value_parser!(u8).range(0..=100))]
    threshold: Option<u8>,

    /// Quiet mode (one line per text)
    #[arg(long, short)]
    quiet: bool,

    /// Verbose output (per-sentence scores)
    #[arg(long, short)]
    verbose: bool,

    /// Path to config file (default: search .legiblerc.json in current dir and parents)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Run analysis in parallel (default for directories with many files)
    #[arg(long)]
    parallel: bool,

    /// Number of parallel threads (default: number of CPU cores)
    #[arg(long, value_name = "N")]
    jobs: Option<usize>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(long)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the sentences a text is split into
    Sentences {
        /// Text file, or "-" for stdin
        path: PathBuf,
    },

    /// Print syllable estimates for words
    Syllables {
        /// Words to estimate
        #[arg(required = true)]
        words: Vec<String>,

        /// Show the vowel, discard and add counters
        #[arg(long)]
        explain: bool,
    },

    /// Create .legiblerc.json with sensible defaults
    Init {
        /// Minimum score threshold, 0-100 (e.g. 60)
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
        threshold: Option<u8>,

        /// Directory in which to create config (default: current)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", "Error".red().bold(), e);
            ExitCode::from(2)
        }
    }
}

fn init_logging(debug: bool) {
    let level = if debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn run() -> Result<ExitCode> {
    let mut args = Args::parse();
    init_logging(args.debug);

    if args.no_color {
        colored::control::set_override(false);
    }

    if let Some(cmd) = args.command.take() {
        return match cmd {
            Commands::Sentences { path } => run_sentences(&path),
            Commands::Syllables { words, explain } => Ok(run_syllables(&words, explain)),
            Commands::Init { threshold, dir } => run_init(threshold, dir.as_deref()),
        };
    }

    let Some(path) = args.path.clone() else {
        anyhow::bail!("a PATH to analyze is required when no subcommand is given (see --help)");
    };

    let engine = build_engine(&args);
    let (results, had_errors) = if is_stdin(&path) {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;
        let config = load_config(&cwd, args.config.as_deref())?.merge_with_cli(args.threshold);
        let text = read_stdin()?;
        (
            vec![engine.analyze_text(STDIN_SOURCE, &text, &config.effective())],
            false,
        )
    } else {
        analyze_path(&engine, &args, &path)?
    };

    if results.is_empty() {
        eprintln!("{}: All files failed to analyze", "Error".red());
        return Ok(ExitCode::from(2));
    }

    report(&args, &results);

    let failing: Vec<&TextAnalysis> = results.iter().filter(|r| r.below_threshold()).collect();
    if !failing.is_empty() {
        if !args.quiet && !args.json {
            for result in &failing {
                eprintln!(
                    "{}: {} scored {:.1}, below threshold {}",
                    "Failed".red().bold(),
                    result.source,
                    result.readability.score,
                    result.threshold.unwrap_or_default()
                );
            }
        }
        return Ok(ExitCode::from(1));
    }

    if had_errors {
        Ok(ExitCode::from(2))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

/// Quiet console output shows one line per text, so sentences are not scored
fn build_engine(args: &Args) -> AnalysisEngine {
    if args.quiet && !args.json {
        AnalysisEngine::new().without_sentence_scores()
    } else {
        AnalysisEngine::new()
    }
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

fn read_stdin() -> Result<String> {
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .context("Failed to read standard input")?;
    Ok(text)
}

/// Analyze a file or every matching file under a directory
fn analyze_path(
    engine: &AnalysisEngine,
    args: &Args,
    path: &Path,
) -> Result<(Vec<TextAnalysis>, bool)> {
    // Resolve work directory for config search
    let work_dir = if path.is_file() {
        path.parent().unwrap_or(Path::new("."))
    } else {
        path
    };

    // Load config (CLI flags override config file)
    let config = load_config(work_dir, args.config.as_deref())?.merge_with_cli(args.threshold);

    let files = if path.is_dir() {
        let ignore_set = if config.ignore.is_empty() {
            None
        } else {
            Some(build_ignore_set(&config.ignore)?)
        };
        collect_text_files(path, ignore_set.as_ref(), &config.get_extensions())?
    } else {
        vec![path.to_path_buf()]
    };

    if files.is_empty() {
        anyhow::bail!("No text files found in {}", path.display());
    }

    if let Some(jobs) = args.jobs {
        rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .build_global()
            .ok();
    }

    let use_parallel = args.parallel || args.jobs.is_some() || files.len() > 10;
    Ok(if use_parallel {
        analyze_files_parallel(engine, &files, &config, args.quiet)
    } else {
        analyze_files_sequential(engine, &files, &config, args.quiet)
    })
}

fn report(args: &Args, results: &[TextAnalysis]) {
    let stats = AnalysisEngine::aggregate_stats(results);

    if args.json {
        let reporter = JsonReporter::new().pretty();
        if results.len() == 1 {
            println!("{}", reporter.report(&results[0]));
        } else {
            println!("{}", reporter.report_with_summary(results, &stats));
        }
        return;
    }

    let mut reporter = ConsoleReporter::new();
    if args.no_color {
        reporter = reporter.without_colors();
    }

    if args.quiet {
        for result in results {
            reporter.report_quiet(result);
        }
        return;
    }

    if args.verbose {
        reporter = reporter.verbose();
    }
    if results.len() == 1 {
        reporter.report(&results[0]);
    } else {
        reporter.report_many(results, &stats);
    }
}

fn run_sentences(path: &Path) -> Result<ExitCode> {
    let text = if is_stdin(path) {
        read_stdin()?
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read text file: {}", path.display()))?
    };

    for (i, sentence) in segment_sentences(&text).iter().enumerate() {
        println!("{:>4}  {}", (i + 1).to_string().dimmed(), sentence);
    }
    Ok(ExitCode::SUCCESS)
}

fn run_syllables(words: &[String], explain: bool) -> ExitCode {
    for word in words {
        let tally = tally_syllables(word);
        if explain {
            println!(
                "{}: {} (vowels {}, discard {}, add {})",
                word,
                tally.estimate(),
                tally.vowels,
                tally.discard,
                tally.add
            );
        } else {
            println!("{}: {}", word, tally.estimate());
        }
    }
    ExitCode::SUCCESS
}

fn run_init(threshold: Option<u8>, dir: Option<&Path>) -> Result<ExitCode> {
    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    let dir = dir.unwrap_or(&cwd);
    let config_path = dir.join(CONFIG_FILENAME);

    if config_path.exists() {
        eprintln!(
            "{}: {} already exists; use --dir to write elsewhere or remove it first",
            "Warning".yellow(),
            config_path.display()
        );
        return Ok(ExitCode::from(1));
    }

    let threshold_value = threshold.unwrap_or(60);

    let json = format!(
        r#"{{
  "threshold": {},
  "sentenceThreshold": 30,
  "extensions": [".txt", ".md", ".markdown", ".text"],
  "ignore": [
    "**/node_modules/**",
    "**/target/**",
    "**/drafts/**"
  ],
  "overrides": [
    {{
      "files": ["**/legal/**"],
      "threshold": 30
    }}
  ]
}}
"#,
        threshold_value
    );

    std::fs::write(&config_path, json)
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

    println!(
        "{}: Created {} with threshold={}",
        "Done".green().bold(),
        config_path.display(),
        threshold_value
    );
    Ok(ExitCode::SUCCESS)
}

fn collect_text_files(
    path: &Path,
    ignore_set: Option<&globset::GlobSet>,
    extensions: &[&str],
) -> Result<Vec<PathBuf>> {
    if !path.exists() {
        anyhow::bail!("Path does not exist: {}", path.display());
    }

    let mut files = Vec::new();

    for entry in WalkDir::new(path)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let file_path = entry.path();
        if !entry.file_type().is_file() || !is_text_file(file_path, extensions) {
            continue;
        }
        if let Some(set) = ignore_set {
            if is_ignored(file_path, set) {
                log::debug!("ignoring {}", file_path.display());
                continue;
            }
        }
        files.push(file_path.to_path_buf());
    }

    // Sort for consistent output
    files.sort();

    Ok(files)
}

fn is_text_file(path: &Path, extensions: &[&str]) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    // Skip the config file itself and hidden files
    if name.starts_with('.') {
        return false;
    }
    extensions.iter().any(|ext| name.ends_with(ext))
}

/// Analyze files sequentially
fn analyze_files_sequential(
    engine: &AnalysisEngine,
    files: &[PathBuf],
    config: &Config,
    quiet: bool,
) -> (Vec<TextAnalysis>, bool) {
    let mut results = Vec::new();
    let mut had_errors = false;

    for file in files {
        match engine.analyze(file, Some(config)) {
            Ok(result) => results.push(result),
            Err(e) => {
                if !quiet {
                    eprintln!("{}: {:#}", "Error".red(), e);
                }
                had_errors = true;
            }
        }
    }

    (results, had_errors)
}

/// Analyze files in parallel; output order follows the sorted file list
fn analyze_files_parallel(
    engine: &AnalysisEngine,
    files: &[PathBuf],
    config: &Config,
    quiet: bool,
) -> (Vec<TextAnalysis>, bool) {
    use rayon::prelude::*;
    use std::sync::atomic::{AtomicBool, Ordering};

    let had_errors = AtomicBool::new(false);

    let results: Vec<_> = files
        .par_iter()
        .filter_map(|file| match engine.analyze(file, Some(config)) {
            Ok(result) => Some(result),
            Err(e) => {
                had_errors.store(true, Ordering::Relaxed);
                if !quiet {
                    eprintln!("{}: {:#}", "Error".red(), e);
                }
                None
            }
        })
        .collect();

    (results, had_errors.load(Ordering::Relaxed))
}
