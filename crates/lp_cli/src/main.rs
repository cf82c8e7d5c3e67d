//! Season projection CLI
//!
//! Loads played games (CSV) and model estimates (JSON), simulates the rest
//! of the season many times over, and dumps the tidy per-trial table to CSV.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use rand::Rng;

use lp_core::{simulate_seasons, AdvantageParams, ProjectionPlan};
use lp_cli::{load_estimates, load_played_games, write_rows, ProgressTicker};

#[derive(Parser)]
#[command(name = "lp_cli")]
#[command(about = "Project a league season from fitted team strengths", long_about = None)]
struct Cli {
    /// CSV of games already played (home_team,away_team,result)
    gamesfile: PathBuf,

    /// Where to save the simulated seasons (CSV)
    outfile: PathBuf,

    /// JSON with team strengths and advantage intercepts
    #[arg(long)]
    estimates: PathBuf,

    /// Number of times to simulate the season
    #[arg(long, default_value_t = 10_000)]
    n_sims: u32,

    /// Round-robin repeat count
    #[arg(long, default_value_t = 1)]
    cycles: u32,

    /// Run seed; random when omitted (logged so the run can be replayed)
    #[arg(long)]
    seed: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .init();

    let estimates = load_estimates(&cli.estimates)?;
    let played = load_played_games(&cli.gamesfile)?;
    let seed = cli.seed.unwrap_or_else(|| rand::thread_rng().gen());
    info!("run seed: {}", seed);

    let plan = ProjectionPlan::new(cli.n_sims, cli.cycles, seed);
    let params = AdvantageParams::new(estimates.home_advantage, estimates.away_advantage);

    // Coarse progress ticker on stderr, one update per percent.
    let ticker = ProgressTicker::new(cli.n_sims);
    let progress = move |done: u32| {
        if let Some(done) = ticker.advance(done) {
            eprint!("\r{}/{} trials", done, cli.n_sims);
        }
    };

    let rows = simulate_seasons(&plan, &estimates.strengths, &played, params, Some(&progress))
        .context("season projection failed")?;
    eprintln!();

    write_rows(&cli.outfile, &rows)?;
    info!(
        "wrote {} rows to {}",
        rows.len(),
        cli.outfile.display()
    );
    Ok(())
}
