use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use shared::{Boundary, Pattern, Simulation};

mod render;

const GRID_WIDTH: usize = 25;
const GRID_HEIGHT: usize = 25;
const DEFAULT_GENERATIONS: u64 = 10;
const DEFAULT_DELAY_MS: u64 = 100;
const DEFAULT_FILL_RATE: f64 = 0.5;

/// Runs Conway's Game of Life on a fixed 25x25 grid and prints every generation.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of generations to compute after the initial state.
    #[arg(
        short,
        long,
        value_name = "COUNT",
        default_value_t = DEFAULT_GENERATIONS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    generations: u64,
    /// Milliseconds to wait between printed generations.
    #[arg(long = "delay-ms", value_name = "MILLISECONDS", default_value_t = DEFAULT_DELAY_MS)]
    delay_ms: u64,
    /// Edge behavior: `toroidal` wraps around, `finite` treats outside cells as dead.
    #[arg(short, long, value_name = "POLICY", default_value_t = Boundary::Toroidal)]
    boundary: Boundary,
    /// Start from a random board instead of a glider.
    #[arg(long)]
    random: bool,
    /// Seed for the random board.
    #[arg(long, requires = "random")]
    seed: Option<u64>,
    /// Probability of a cell starting alive on a random board.
    #[arg(long, value_name = "RATE", default_value_t = DEFAULT_FILL_RATE)]
    fill_rate: f64,
}

fn run(args: &Args, out: &mut impl Write) -> anyhow::Result<()> {
    let mut simulation =
        Simulation::new(GRID_WIDTH, GRID_HEIGHT, args.boundary).context("create simulation")?;

    if args.random {
        simulation
            .randomize(args.seed, args.fill_rate)
            .context("randomize grid")?;
    } else {
        simulation.seed(&Pattern::glider()).context("seed glider")?;
    }

    let delay = Duration::from_millis(args.delay_ms);
    out.write_all(render::render_frame(0, simulation.snapshot()).as_bytes())
        .context("write initial state")?;

    let mut settled = false;
    for _ in 0..args.generations {
        let changed = simulation.advance();
        if !changed && !settled {
            log::info!("board is stable from generation {}", simulation.generation());
            settled = true;
        }

        out.write_all(render::render_frame(simulation.generation(), simulation.snapshot()).as_bytes())
            .with_context(|| format!("write generation {}", simulation.generation()))?;
        out.flush().context("flush output")?;

        if !delay.is_zero() {
            thread::sleep(delay);
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    log::info!(
        "{}x{} grid, {} boundary, {} generations, {} ms delay",
        GRID_WIDTH,
        GRID_HEIGHT,
        args.boundary,
        args.generations,
        args.delay_ms
    );

    let stdout = io::stdout();
    run(&args, &mut stdout.lock())
}
