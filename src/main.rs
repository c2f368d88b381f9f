use anyhow::{Context, Result};
use lifegrid::{Grid, Renderer, Simulation, render::NullRenderer};
use rand::{SeedableRng, rngs::StdRng};
use std::{io, thread, time::Duration};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod console;
mod options;
mod stats;
mod text;

use stats::{Recorder, SwitchRecorder};

/// Why a run stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    /// No live cells remain
    Extinct,
    /// The `--gens` limit was reached
    GenerationLimit,
    /// The user quit from the console
    Interrupted,
}

/// A renderer the run loop can also take commands from
trait Screen: Renderer {
    /// Checked once per generation before rendering; `true` ends the run
    fn should_stop(&mut self) -> io::Result<bool> {
        Ok(false)
    }
    fn set_report(&mut self, _report: String) {}
}

impl Screen for NullRenderer {
    fn set_report(&mut self, report: String) {
        info!("{report}");
    }
}

struct Limits {
    max_generations: u64,
    parallel: bool,
    sleep: Option<Duration>,
}

/// Drives `game` until it dies out, hits the generation limit or the screen
/// asks to stop
///
/// Every generation reached is rendered exactly once, the last one after the
/// loop ends, unless the run was interrupted.
fn run<S: Screen + ?Sized>(
    game: &mut Simulation,
    screen: &mut S,
    stats: &mut dyn Recorder,
    limits: &Limits,
) -> io::Result<Outcome> {
    let outcome = loop {
        if !game.is_alive() {
            break Outcome::Extinct;
        }
        if game.generation() >= limits.max_generations {
            break Outcome::GenerationLimit;
        }
        if screen.should_stop()? {
            return Ok(Outcome::Interrupted);
        }

        if stats.has_report() {
            screen.set_report(stats.report());
        }
        screen.render(&game.frame())?;

        if limits.parallel {
            game.step_parallel();
        } else {
            game.step();
        }
        stats.record(game.generation(), game.grid().alive_count());
        if let Some(time) = limits.sleep {
            thread::sleep(time);
        }
    };

    screen.render(&game.frame())?;
    Ok(outcome)
}

/// Log filter used when `RUST_LOG` is unset
fn default_log_filter(console: bool) -> &'static str {
    // raw mode owns the screen, so console runs log nothing unless RUST_LOG asks
    if console { "off" } else { "info" }
}

fn init_logging(console: bool) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_log_filter(console))),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn seeded_grid(args: &options::Args) -> Result<Grid> {
    let (height, width) = args.grid_size()?;
    let mut grid = Grid::new(height, width).context("cannot create grid")?;
    let fill = args.fill_mode()?;
    match args.seed()? {
        Some(seed) => fill.seed(&mut grid, &mut StdRng::seed_from_u64(seed)),
        None => fill.seed(&mut grid, &mut rand::rng()),
    }
    Ok(grid)
}

fn main() -> Result<()> {
    let Some(args) = options::Args::from_env().context("invalid arguments")? else {
        return Ok(());
    };
    init_logging(args.console());

    let grid = seeded_grid(&args)?;
    let (height, width) = grid.dimensions();
    info!(height, width, alive = grid.alive_count(), "starting run");

    let mut game = Simulation::new(grid);
    let limits = Limits {
        max_generations: args.generations()?.unwrap_or(u64::MAX),
        parallel: args.multithreading(),
        sleep: args.sleep()?,
    };
    let stats_file = args.stats_file();
    let mut stats = SwitchRecorder::new(game.grid().alive_count(), stats_file.is_some());

    let outcome = if args.console() {
        let mut console = console::ConsoleRenderer::new().context("cannot enter console mode")?;
        let outcome = run(&mut game, &mut console, &mut stats, &limits)?;
        if outcome != Outcome::Interrupted {
            // keep the last generation on screen until the user dismisses it
            console.set_report(format!("{outcome:?}, press any key to exit"));
            console.render(&game.frame())?;
            console.wait_for_key()?;
        }
        outcome
    } else if args.quiet() {
        run(&mut game, &mut NullRenderer, &mut stats, &limits)?
    } else {
        run(&mut game, &mut text::TextRenderer::stdout(), &mut stats, &limits)?
    };
    info!(
        ?outcome,
        generation = game.generation(),
        alive = game.grid().alive_count(),
        "run finished"
    );

    if let Some(file_name) = stats_file {
        match stats.save(&file_name) {
            Ok(_) => info!(file = %file_name, "stats written"),
            Err(err) => warn!(file = %file_name, %err, "failed to write stats"),
        }
    }

    Ok(())
}
