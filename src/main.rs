use anyhow::{Context, Result};
use backup_planner::config::{self, Logger, RunConfiguration};
use backup_planner::managers::events::TracingListener;
use backup_planner::managers::logging::{self, LoggingConfig};
use backup_planner::managers::plan::{CompressionStrategy, PlanManager, PlannedBackup};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "backup-planner")]
#[command(about = "Inspect and validate backup plans", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "backup.toml")]
    config: PathBuf,

    /// Only consider the named backups (repeatable or comma separated)
    #[arg(long, value_delimiter = ',')]
    limit: Vec<String>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Use colors in output
    #[arg(long)]
    colors: bool,

    /// Output debug information
    #[arg(long)]
    debug: bool,

    /// Pretend to run without executing anything
    #[arg(long)]
    simulate: bool,

    /// Show how to restore the backups
    #[arg(long)]
    restore: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show which backups would run and what they would write (default)
    Plan {
        /// Print the plan as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate configuration file
    Validate,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut run = config::load_config(&cli.config)
        .with_context(|| format!("Failed to load configuration {:?}", cli.config))?;
    apply_cli(&mut run, &cli);

    logging::init_console_logging(&LoggingConfig::from_run(&run))?;

    if run.verbose() {
        run.add_logger(Logger::observer(TracingListener::new()))?;
    }

    match cli.command.unwrap_or(Commands::Plan { json: false }) {
        Commands::Plan { json } => {
            let planned = PlanManager::new(&run).plan();
            if json {
                println!("{}", serde_json::to_string_pretty(&planned)?);
            } else {
                print_plan(&run, &planned);
            }
        }

        Commands::Validate => {
            println!("✓ Configuration is valid: {:?}", run.source_file_path());
            println!("  Backups: {}", run.backups().len());
            println!("  Loggers: {}", run.loggers().len());
            println!("  Working directory: {}", run.working_directory());
        }
    }

    Ok(())
}

/// Command line switches override the configuration file
fn apply_cli(run: &mut RunConfiguration, cli: &Cli) {
    run.set_verbose(run.verbose() || cli.verbose);
    run.set_colors(run.colors() || cli.colors);
    run.set_debug(run.debug() || cli.debug);
    run.set_simulate(cli.simulate);
    run.set_restore(cli.restore);
    run.set_limit(
        cli.limit
            .iter()
            .map(|name| name.trim())
            .filter(|name| !name.is_empty()),
    );
}

fn print_plan(run: &RunConfiguration, planned: &[PlannedBackup]) {
    let mode = if run.is_restore() { "Restore" } else { "Backup" };
    if run.is_simulation() {
        println!("=== {} plan (simulation) ===\n", mode);
    } else {
        println!("=== {} plan ===\n", mode);
    }

    if planned.is_empty() {
        println!("No backups configured");
        return;
    }

    for backup in planned {
        if !backup.active {
            println!("  - {} (skipped)", backup.name);
            continue;
        }

        println!("  ✓ {} [{}]", backup.name, backup.source);
        println!("      target: {}", backup.target);
        if let (Some(compressor), Some(strategy)) = (&backup.compressor, backup.strategy) {
            let how = match strategy {
                CompressionStrategy::Pipe => "piped",
                CompressionStrategy::TempFile => "after dump",
            };
            println!("      compress: {} ({})", compressor, how);
        }
        if backup.stop_on_failure {
            println!("      stops the run on failure");
        }
    }
}
