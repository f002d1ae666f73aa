//! quality-eval: weighted software quality evaluation tool
//!
//! Scores ISO/IEC 25010 quality characteristics from measured metric values.

#![allow(clippy::needless_pass_by_value)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use quality_eval::{
    cli::{self, ExportFormat},
    config::{self, AnalyzeConfig, AppConfig, Validatable},
    pipeline::exit_codes,
    reports::ReportFormat,
    QualityEvalError,
};
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build long version string with format support info
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nQuality Model:",
        "\n  ISO/IEC 25010 characteristics, ISO/IEC 25023 standard measures",
        "\n\nInput Formats:",
        "\n  JSON, YAML",
        "\n\nOutput Formats:",
        "\n  summary, json, markdown"
    )
}

#[derive(Parser)]
#[command(name = "quality-eval")]
#[command(version, long_version = build_long_version())]
#[command(about = "Weighted software quality evaluation tool", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success
    1  Overall score below --min-score
    2  Input validation failed
    3  Error occurred

EXAMPLES:
    # Export a case study and analyze it
    quality-eval case-study iotSystem -O iot.yaml
    quality-eval analyze iot.yaml

    # CI/CD quality gate
    quality-eval analyze measurements.yaml --min-score 70 -o summary

    # Markdown report with per-metric details
    quality-eval analyze measurements.yaml --metrics -O report.md")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Arguments for the `analyze` subcommand
#[derive(Parser)]
struct AnalyzeArgs {
    /// Path to the analysis input (JSON or YAML)
    input: PathBuf,

    /// Output format (auto picks from the output file extension)
    #[arg(short, long)]
    output: Option<ReportFormat>,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Gap threshold; characteristics scoring below it are reported
    #[arg(long)]
    threshold: Option<f64>,

    /// Exit with code 1 when the overall score is below this value
    #[arg(long)]
    min_score: Option<f64>,

    /// Include per-metric details in the report
    #[arg(long)]
    metrics: bool,

    /// Score the input even when validation fails
    #[arg(long)]
    skip_validation: bool,
}

/// Arguments for the `validate` subcommand
#[derive(Parser)]
struct ValidateArgs {
    /// Path to the analysis input (JSON or YAML)
    input: PathBuf,

    /// Emit the validation result as JSON
    #[arg(long)]
    json: bool,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,
}

/// Arguments for the `case-study` subcommand
#[derive(Parser)]
struct CaseStudyArgs {
    /// Case study id (iotSystem, healthcare, mobileApp)
    name: String,

    /// Document format
    #[arg(short, long, value_enum, default_value_t = ExportFormat::Yaml)]
    format: ExportFormat,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Score an analysis input and render a quality report
    Analyze(AnalyzeArgs),

    /// Check an analysis input without scoring it
    Validate(ValidateArgs),

    /// List quality characteristics, sub-characteristics and standard metrics
    Catalog {
        /// Show a single characteristic with its standard metrics
        #[arg(short, long)]
        characteristic: Option<String>,

        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Export a predefined case study as an analysis input
    CaseStudy(CaseStudyArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate JSON Schema for the config file format
    ConfigSchema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .quality-eval.yaml in the current directory
    Init,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    let code = match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            exit_codes::ERROR
        }
    };
    if code != exit_codes::SUCCESS {
        std::process::exit(code);
    }
}

/// Collect command-line flags into a config that overrides file settings.
fn cli_overrides(cli: &Cli) -> AppConfig {
    let builder = AppConfig::builder()
        .quiet(cli.quiet)
        .no_color(cli.no_color);
    match &cli.command {
        Commands::Analyze(args) => builder
            .output_format(args.output.unwrap_or_default())
            .output_file(args.output_file.clone())
            .min_score(args.min_score)
            .show_metrics(args.metrics)
            .skip_validation(args.skip_validation)
            .build(),
        _ => builder.build(),
    }
}

/// Load the config file and apply global and per-command flags on top.
fn effective_config(cli: &Cli) -> AppConfig {
    let (mut app, _) =
        AppConfig::from_file_with_overrides(cli.config.as_deref(), &cli_overrides(cli));
    // Merging skips thresholds equal to the default, so apply it directly.
    if let Commands::Analyze(AnalyzeArgs {
        threshold: Some(threshold),
        ..
    }) = &cli.command
    {
        app.scoring.gap_threshold = *threshold;
    }
    app
}

fn run(cli: Cli) -> Result<i32> {
    let app = effective_config(&cli);

    match cli.command {
        Commands::Analyze(args) => {
            let errors = app.validate();
            if !errors.is_empty() {
                let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
                return Err(QualityEvalError::config(messages.join("; ")).into());
            }

            cli::run_analyze(AnalyzeConfig::from_app_config(args.input, &app))
        }

        Commands::Validate(args) => cli::run_validate(
            &args.input,
            app.scoring.weight_tolerance,
            args.json,
            args.output_file,
            app.behavior.quiet,
        ),

        Commands::Catalog {
            characteristic,
            json,
        } => {
            cli::run_catalog(characteristic.as_deref(), json)?;
            Ok(exit_codes::SUCCESS)
        }

        Commands::CaseStudy(args) => {
            cli::run_case_study(&args.name, args.format, args.output_file, app.behavior.quiet)?;
            Ok(exit_codes::SUCCESS)
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "quality-eval", &mut io::stdout());
            Ok(exit_codes::SUCCESS)
        }

        Commands::ConfigSchema { output } => {
            let schema = config::generate_json_schema()?;
            match output {
                Some(path) => {
                    std::fs::write(&path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => {
                    println!("{schema}");
                }
            }
            Ok(exit_codes::SUCCESS)
        }

        Commands::Config { action } => {
            match action {
                ConfigAction::Show => show_config(cli.config.as_deref(), &app)?,
                ConfigAction::Path => show_config_paths(cli.config.as_deref()),
                ConfigAction::Init => init_config()?,
            }
            Ok(exit_codes::SUCCESS)
        }
    }
}

fn show_config(explicit: Option<&Path>, app: &AppConfig) -> Result<()> {
    match config::discover_config_file(explicit) {
        Some(path) => eprintln!("# Loaded from: {}", path.display()),
        None => eprintln!("# No config file found; showing defaults"),
    }
    let yaml = serde_yaml_ng::to_string(app).context("failed to serialize config")?;
    print!("{yaml}");
    Ok(())
}

fn show_config_paths(explicit: Option<&Path>) {
    let search_paths = config::config_search_dirs();
    eprintln!("Config file search paths (in order):");
    for path in &search_paths {
        eprintln!("  {}", path.display());
    }
    eprintln!();
    eprintln!("Recognized file names:");
    for name in config::CONFIG_FILE_NAMES {
        eprintln!("  {name}");
    }
    eprintln!();
    match config::discover_config_file(explicit) {
        Some(path) => eprintln!("Active config file: {}", path.display()),
        None => eprintln!("No config file found."),
    }
}

fn init_config() -> Result<()> {
    let target = std::env::current_dir()
        .context("cannot determine current directory")?
        .join(".quality-eval.yaml");
    if target.exists() {
        anyhow::bail!(
            "{} already exists. Remove it first to re-initialize.",
            target.display()
        );
    }
    let content = config::generate_full_example_config();
    std::fs::write(&target, content)
        .with_context(|| format!("failed to write {}", target.display()))?;
    eprintln!("Created {}", target.display());
    Ok(())
}
