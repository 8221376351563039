use clap::Parser;
use colored::Colorize;
use indicatif::ProgressBar;
use miette::Result;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::info;

use unusedresources::{
    Config, Corpus, FileFinder, IdentifierExtractor, ReportFormat, Reporter, UnusedStringDetector,
};

/// Detect unused resource string identifiers in Swift projects
#[derive(Parser, Debug)]
#[command(name = "unusedresources")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Root directory of the source tree to scan
    root: PathBuf,

    /// Generated definition files to check
    #[arg(required = true)]
    generated: Vec<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Additional path markers to exclude from the corpus
    /// (raw substrings, can be specified multiple times)
    #[arg(short, long)]
    exclude: Vec<String>,

    /// Source file extensions that feed the corpus
    /// (can be specified multiple times)
    #[arg(long, value_name = "EXT")]
    extension: Vec<String>,

    /// Declaration prefix that opens a resource-string line
    #[arg(long, value_name = "PREFIX")]
    prefix: Option<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Output file (for json format)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode - only output results
    #[arg(short, long)]
    quiet: bool,
}

#[derive(clap::ValueEnum, Clone, Debug, Default)]
enum OutputFormat {
    #[default]
    Terminal,
    Json,
}

impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Terminal => ReportFormat::Terminal,
            OutputFormat::Json => ReportFormat::Json,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.quiet);

    info!("unusedresources v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config(&cli)?;
    run_scan(&config, &cli)
}

fn init_logging(verbose: bool, quiet: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    // Logs go to stderr; stdout carries only the report itself
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = if let Some(config_path) = &cli.config {
        Config::from_file(config_path)?
    } else {
        Config::from_default_locations(&cli.root)?
    };

    // Override with CLI arguments
    if !cli.extension.is_empty() {
        config.extensions = cli.extension.clone();
    }
    if !cli.exclude.is_empty() {
        config.exclude.extend(cli.exclude.clone());
    }
    if let Some(prefix) = &cli.prefix {
        config.declaration_prefix = prefix.clone();
    }

    Ok(config)
}

fn run_scan(config: &Config, cli: &Cli) -> Result<()> {
    let start_time = Instant::now();

    println!("Searching for unused resources…");

    // Step 1: Collect the corpus source files
    let finder = FileFinder::new(config);
    let files = finder.find_files(std::slice::from_ref(&cli.root))?;
    info!("Found {} source files", files.len());

    if files.is_empty() {
        println!(
            "{}",
            "No source files found under the root directory.".yellow()
        );
    }

    // Step 2: Build the corpus (must complete before any evaluation)
    let spinner = if cli.quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new_spinner();
        pb.set_message(format!("Reading {} source files...", files.len()));
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    };
    let corpus = Corpus::build(&files);
    spinner.finish_and_clear();
    let corpus = corpus?;

    info!("Corpus built: {} bytes", corpus.len());

    // Step 3: Evaluate every generated file against the corpus
    let extractor = IdentifierExtractor::new(&config.declaration_prefix);
    let detector = UnusedStringDetector::new(&corpus, &extractor);
    let report = detector.detect(&cli.generated)?;

    for file in &report.clean {
        println!(
            "{}",
            format!("{} has no unused identifiers", file.display()).dimmed()
        );
    }

    // Step 4: Render the results
    let format = match cli.format.clone() {
        Some(format) => format.into(),
        None => config
            .report
            .format
            .parse::<ReportFormat>()
            .unwrap_or_default(),
    };
    let reporter = Reporter::new(format, cli.output.clone());
    reporter.report(&report)?;

    let elapsed = start_time.elapsed();
    if !cli.quiet {
        println!(
            "{}",
            format!(
                "Checked {} generated files against {} source files in {:.2}s",
                cli.generated.len(),
                files.len(),
                elapsed.as_secs_f64()
            )
            .dimmed()
        );
    }

    Ok(())
}
