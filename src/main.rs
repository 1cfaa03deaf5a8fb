//! branch-compare: compare binary package sets of two repository branches

use anyhow::{Context, Result};
use branch_compare::{
    cli::{self, DiffArgs},
    config::{
        discover_config_file, generate_example_config, generate_json_schema, load_config_file,
        AppConfig, Validatable, CONFIG_FILE_NAMES,
    },
    pipeline::exit_codes,
    BranchCompareError,
};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "branch-compare")]
#[command(version)]
#[command(about = "Compare binary package sets of two repository branches", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success
    1  Branches differ (with --fail-on-change)
    3  Error occurred

EXAMPLES:
    # Compare two branches from the public repository database
    branch-compare diff p10 p9 > p10-vs-p9.json

    # Human-readable counts
    branch-compare diff sisyphus p10 -o summary

    # Offline, from previously downloaded <branch>.json files
    branch-compare diff p10 p9 --local-dir ./manifests")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only log warnings and errors
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

#[derive(Subcommand)]
enum Commands {
    /// Compare the package manifests of two branches
    Diff(DiffArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },

    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Print the JSON schema of the configuration file
    ConfigSchema {
        /// Write the schema to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .branch-compare.yaml in the current directory
    Init,
}

fn main() {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => {
            if code != exit_codes::SUCCESS {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {e:#}");
            std::process::exit(exit_codes::ERROR);
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    let config_path = discover_config_file(cli.config.as_deref());
    let (mut config, config_error) = match config_path.as_deref().map(load_config_file) {
        Some(Ok(config)) => (config, None),
        Some(Err(e)) => (AppConfig::default(), Some(e)),
        None => (AppConfig::default(), None),
    };

    init_logging(cli.verbose, cli.quiet || config.behavior.quiet);

    if let (Some(path), Some(e)) = (&config_path, &config_error) {
        tracing::warn!("Failed to load config from {}: {}", path.display(), e);
    } else if let Some(path) = &config_path {
        tracing::debug!("Using config file {}", path.display());
    }

    if cli.no_color {
        config.output.no_color = true;
    }
    if cli.quiet {
        config.behavior.quiet = true;
    }

    match cli.command {
        Commands::Diff(args) => {
            args.apply_to(&mut config);
            let errors = config.validate();
            if !errors.is_empty() {
                let details: Vec<String> = errors.iter().map(ToString::to_string).collect();
                return Err(BranchCompareError::validation(details.join("; ")).into());
            }
            cli::run_diff(&args.branch0, &args.branch1, &config)
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "branch-compare", &mut io::stdout());
            Ok(exit_codes::SUCCESS)
        }

        Commands::ConfigSchema { output } => {
            let schema = generate_json_schema().context("failed to serialize schema")?;
            match output {
                Some(path) => {
                    std::fs::write(&path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => println!("{schema}"),
            }
            Ok(exit_codes::SUCCESS)
        }

        Commands::Config { action } => {
            run_config_action(action, &config, config_path.as_deref())?;
            Ok(exit_codes::SUCCESS)
        }
    }
}

fn run_config_action(action: ConfigAction, config: &AppConfig, loaded_from: Option<&Path>) -> Result<()> {
    match action {
        ConfigAction::Show => {
            match loaded_from {
                Some(path) => eprintln!("# Loaded from: {}", path.display()),
                None => eprintln!("# No config file found; showing defaults"),
            }
            let yaml = serde_yaml::to_string(config).context("failed to serialize config")?;
            print!("{yaml}");
        }
        ConfigAction::Path => {
            let search_paths = [
                std::env::current_dir().ok(),
                dirs::config_dir().map(|p| p.join("branch-compare")),
                dirs::home_dir(),
            ];
            eprintln!("Config file search paths (in order):");
            for path in search_paths.into_iter().flatten() {
                eprintln!("  {}", path.display());
            }
            eprintln!("  (plus the enclosing git repository root, after the current directory)");
            eprintln!();
            eprintln!("Recognized file names:");
            for name in CONFIG_FILE_NAMES {
                eprintln!("  {name}");
            }
            eprintln!();
            match loaded_from {
                Some(path) => eprintln!("Active config file: {}", path.display()),
                None => eprintln!("No config file found."),
            }
        }
        ConfigAction::Init => {
            let target = std::env::current_dir()
                .context("cannot determine current directory")?
                .join(CONFIG_FILE_NAMES[0]);
            if target.exists() {
                anyhow::bail!(
                    "{} already exists. Remove it first to re-initialize.",
                    target.display()
                );
            }
            std::fs::write(&target, generate_example_config())
                .with_context(|| format!("failed to write {}", target.display()))?;
            eprintln!("Created {}", target.display());
        }
    }
    Ok(())
}

/// Logs go to stderr so stdout carries only the report.
fn init_logging(verbose: bool, quiet: bool) {
    let log_level = if verbose {
        "debug"
    } else if quiet {
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
}
