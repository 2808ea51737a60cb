mod all;
mod generate;
mod prompt;
mod tables;

use crate::config::GenerateConfig;
use crate::generator::{GenerationContext, ProgressHook};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use indicatif::{ProgressBar, ProgressStyle};
use std::io;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "shop-datagen")]
#[command(author = "Helge Sverre <helge.sverre@gmail.com>")]
#[command(version)]
#[command(about = "Generate FK-consistent CSV test data for an e-commerce shop schema", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate CSV rows for one table (prompts for missing arguments)
    Generate {
        /// Table to generate: users, categories, brands, products, product_images,
        /// invoices, invoice_items, contact_replies (singular names accepted)
        table: Option<String>,

        /// Number of records to generate
        #[arg(short = 'n', long, value_parser = parse_count)]
        count: Option<usize>,

        /// Random seed for reproducibility
        #[arg(long)]
        seed: Option<u64>,

        /// Output CSV file (default: stdout, .gz suffix compresses)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// YAML config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Do not generate missing prerequisite tables
        #[arg(long)]
        no_auto_fill: bool,

        /// Show progress during generation
        #[arg(short, long)]
        progress: bool,

        /// Output statistics as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate every table into a directory with consistent foreign keys
    All {
        /// Output directory for the CSV files
        #[arg(short, long)]
        output: PathBuf,

        /// Records per table (overrides config)
        #[arg(short = 'n', long, value_parser = parse_count)]
        count: Option<usize>,

        /// Random seed for reproducibility
        #[arg(long)]
        seed: Option<u64>,

        /// YAML config file for per-table row counts
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Write gzip-compressed .csv.gz files
        #[arg(long)]
        gzip: bool,

        /// Show progress during generation
        #[arg(short, long)]
        progress: bool,

        /// Output statistics as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the tables, their columns and prerequisites
    Tables {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Generate {
            table,
            count,
            seed,
            output,
            config,
            no_auto_fill,
            progress,
            json,
        } => generate::run(
            table,
            count,
            seed,
            output,
            config,
            no_auto_fill,
            progress,
            json,
        ),
        Commands::All {
            output,
            count,
            seed,
            config,
            gzip,
            progress,
            json,
        } => all::run(output, count, seed, config, gzip, progress, json),
        Commands::Tables { json } => tables::run(json),
        Commands::Completions { shell } => {
            generate(
                shell,
                &mut Cli::command(),
                "shop-datagen",
                &mut io::stdout(),
            );
            Ok(())
        }
    }
}

/// Parse a record count: a positive integer
pub fn parse_count(s: &str) -> Result<usize, String> {
    match s.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(format!(
            "Invalid number of records: {}. Please enter a positive integer",
            s.trim()
        )),
    }
}

/// Build the generation context from flags and config.
///
/// The flag seed wins over the config seed; with neither, a random seed is
/// drawn so the run can still be replayed.
fn build_context(
    seed: Option<u64>,
    config: Option<&GenerateConfig>,
) -> anyhow::Result<GenerationContext> {
    let seed = seed
        .or_else(|| config.and_then(|c| c.seed))
        .unwrap_or_else(rand::random);

    let mut ctx = GenerationContext::new(seed);
    if let Some(clock) = config.map(|c| c.clock()).transpose()?.flatten() {
        ctx = ctx.with_clock(clock);
    }
    Ok(ctx)
}

/// Load the config named by `-c`, or the per-user default file.
///
/// Picking up the default file is announced on stderr, since it can pin the
/// seed and clock without anything on the command line saying so.
fn load_config(path: Option<&Path>) -> anyhow::Result<Option<GenerateConfig>> {
    let resolved = GenerateConfig::resolve(path)?;
    Ok(resolved.map(|(config, default_file)| {
        if let Some(file) = default_file {
            eprintln!("Using config {}", file.display());
        }
        config
    }))
}

/// Row-count spinner drawn on stderr
fn progress_bar() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template(
        "{spinner:.green} [{elapsed_precise}] {pos} rows {msg}",
    )
    .unwrap_or_else(|_| ProgressStyle::default_spinner())
    .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏");
    pb.set_style(style);
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

fn progress_hook(pb: &ProgressBar) -> ProgressHook {
    let pb = pb.clone();
    Box::new(move |rows| pb.set_position(rows))
}
