//! # FAIRISLE Render
//!
//! Command line front end for the generator.
//!
//! ```bash
//! # One SVG to stdout
//! fairisle_render svg 424242 > knit.svg
//!
//! # Success screen preview
//! fairisle_render svg 42 --success --out minted.svg
//!
//! # Marketplace metadata
//! fairisle_render metadata 7
//!
//! # 1000 tokens to ./out on 8 workers
//! fairisle_render batch --from 0 --to 999 --workers 8
//!
//! # Rarity and palette statistics, nothing written
//! fairisle_render stats --from 4 --to 99999
//! ```

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use fairisle::logging::init_logging;
use fairisle::procedural::{generate, to_data_uri, with_success_overlay, Seed};
use fairisle::{
    BatchRenderer, BatchReport, FairIsleConfig, FairIsleError, FairIsleResult, SeedRange,
    TokenMetadata,
};

#[derive(Parser)]
#[command(name = "fairisle_render")]
#[command(about = "Deterministic fair isle artwork from integer seeds")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, global = true, default_value = "fairisle.toml")]
    config: PathBuf,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Render one seed as SVG
    Svg {
        /// Seed, any integer
        #[arg(allow_hyphen_values = true)]
        seed: Seed,

        /// Add the "Minted!" badge
        #[arg(long)]
        success: bool,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Print one seed as a base64 data URI
    DataUri {
        /// Seed, any integer
        #[arg(allow_hyphen_values = true)]
        seed: Seed,
    },

    /// Print token metadata JSON
    Metadata {
        /// Token id
        token_id: u64,
    },

    /// Render a seed range to disk
    Batch {
        /// First seed
        #[arg(long)]
        from: u64,

        /// Last seed, inclusive
        #[arg(long)]
        to: u64,

        /// Output directory (overrides config)
        #[arg(long)]
        out_dir: Option<PathBuf>,

        /// Worker threads (overrides config, 0 = all cores)
        #[arg(long)]
        workers: Option<usize>,
    },

    /// Report rarity and palette statistics for a seed range
    Stats {
        /// First seed
        #[arg(long)]
        from: u64,

        /// Last seed, inclusive
        #[arg(long)]
        to: u64,

        /// Worker threads (overrides config, 0 = all cores)
        #[arg(long)]
        workers: Option<usize>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> FairIsleResult<()> {
    let mut config = FairIsleConfig::load(&cli.config)?;

    match cli.command {
        Commands::Svg { seed, success, out } => {
            let result = generate(seed);
            tracing::info!(
                "seed {} -> {}{}",
                seed,
                result.palette.name,
                if result.is_rare { " (rare)" } else { "" }
            );
            let svg = if success {
                with_success_overlay(&result.image, result.palette.name, result.is_rare)
            } else {
                result.image
            };
            emit(out.as_deref(), &svg)
        }

        Commands::DataUri { seed } => emit(None, &to_data_uri(&generate(seed).image)),

        Commands::Metadata { token_id } => {
            let json = TokenMetadata::for_token(token_id, &config.metadata).to_json()?;
            emit(None, &json)
        }

        Commands::Batch {
            from,
            to,
            out_dir,
            workers,
        } => {
            if let Some(dir) = out_dir {
                config.batch.output_dir = dir;
            }
            if let Some(n) = workers {
                config.batch.workers = n;
            }
            let renderer = BatchRenderer::new(&config);
            let report = renderer.render(SeedRange::new(from, to)?)?;
            print_report(&report);
            Ok(())
        }

        Commands::Stats { from, to, workers } => {
            if let Some(n) = workers {
                config.batch.workers = n;
            }
            let report = BatchRenderer::new(&config).stats(SeedRange::new(from, to)?)?;
            print_report(&report);
            Ok(())
        }
    }
}

/// Writes text to a file, or to stdout with a trailing newline.
fn emit(out: Option<&Path>, text: &str) -> FairIsleResult<()> {
    if let Some(path) = out {
        std::fs::write(path, text).map_err(|e| FairIsleError::io(path, e))?;
        tracing::info!("wrote {} ({} bytes)", path.display(), text.len());
        return Ok(());
    }

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{text}").map_err(|e| FairIsleError::io("<stdout>", e))
}

fn print_report(report: &BatchReport) {
    println!("Seeds:          {}", report.count);
    println!(
        "Rare:           {} ({:.2}%)",
        report.rare,
        report.rare_rate() * 100.0
    );
    println!(
        "Giant centers:  {} ({:.2}%)",
        report.giant_centers,
        report.giant_rate() * 100.0
    );
    if report.files_written > 0 {
        println!("Files written:  {}", report.files_written);
    }
    println!();
    println!("Palettes:");
    for (name, n) in &report.palettes {
        println!("  {name:<16} {n}");
    }
}
