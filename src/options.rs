use std::{str::FromStr, time::Duration};

use lifegrid::{FillMode, seed::DEFAULT_DENSITY};

/// Grid size used when not rendering to the full terminal
const DEFAULT_SIZE: (usize, usize) = (50, 50);
/// Delay between rendered generations unless `--sleep` says otherwise
const DEFAULT_SLEEP: Duration = Duration::from_millis(100);

#[derive(Debug, thiserror::Error)]
pub enum OptionsError {
    #[error(transparent)]
    Parse(#[from] getopts::Fail),
    #[error("invalid value {value:?} for --{name}")]
    InvalidValue { name: &'static str, value: String },
    #[error("unknown fill mode {0:?} (expected random, alternating, all or empty)")]
    FillMode(String),
    #[error("density {0} is outside 0.0..=1.0")]
    Density(f64),
    #[error("unexpected argument {0:?}")]
    Unexpected(String),
}

pub struct Args {
    matches: getopts::Matches,
}

impl Args {
    fn options() -> getopts::Options {
        let mut opts = getopts::Options::new();
        opts.optflag("", "help", "print this help menu");
        opts.optflag("c", "console", "run in full-screen console mode");
        opts.optflag("q", "quiet", "do not render generations");
        opts.optflag("t", "threads", "compute generations on all cores");
        opts.optopt("w", "width", "set grid width", "COLS");
        opts.optopt("h", "height", "set grid height", "ROWS");
        opts.optopt(
            "f",
            "fill",
            "initial fill: random, alternating, all or empty",
            "TYPE",
        );
        opts.optopt(
            "d",
            "density",
            "chance of a cell starting alive with random fill",
            "P",
        );
        opts.optopt("", "seed", "seed for the random fill", "N");
        opts.optopt(
            "s",
            "sleep",
            "the amount of time to sleep between generations",
            "MILLIS",
        );
        opts.optopt("g", "gens", "max number of generations", "COUNT");
        opts.optopt("", "stats", "write stats csv to file", "FILE");
        opts
    }

    /// Parses arguments, returning `Ok(None)` when only help was requested
    fn new<T: AsRef<str>>(args: &[T]) -> Result<Option<Self>, OptionsError> {
        let opts = Self::options();
        let matches = opts.parse(args.iter().map(T::as_ref))?;
        if matches.opt_present("help") {
            println!("{}", opts.usage("usage: lifegrid [options]"));
            return Ok(None);
        }
        if let Some(free) = matches.free.first() {
            return Err(OptionsError::Unexpected(free.clone()));
        }

        let args = Self { matches };
        // surface bad values now rather than halfway through setup
        args.fill_mode()?;
        args.generations()?;
        args.sleep()?;
        args.seed()?;
        args.width()?;
        args.height()?;
        Ok(Some(args))
    }
    pub fn from_env() -> Result<Option<Self>, OptionsError> {
        let env = std::env::args().skip(1).collect::<Vec<_>>();
        Self::new(&env)
    }

    fn get<V: FromStr>(&self, name: &'static str) -> Result<Option<V>, OptionsError> {
        match self.matches.opt_str(name) {
            Some(value) => value
                .parse()
                .map(Some)
                .map_err(|_| OptionsError::InvalidValue { name, value }),
            None => Ok(None),
        }
    }

    fn width(&self) -> Result<Option<usize>, OptionsError> {
        self.get("width")
    }
    fn height(&self) -> Result<Option<usize>, OptionsError> {
        self.get("height")
    }

    pub fn console(&self) -> bool {
        self.matches.opt_present("console")
    }
    pub fn quiet(&self) -> bool {
        self.matches.opt_present("quiet")
    }
    pub fn multithreading(&self) -> bool {
        self.matches.opt_present("threads")
    }

    pub fn generations(&self) -> Result<Option<u64>, OptionsError> {
        self.get("gens")
    }
    pub fn seed(&self) -> Result<Option<u64>, OptionsError> {
        self.get("seed")
    }
    pub fn sleep(&self) -> Result<Option<Duration>, OptionsError> {
        Ok(match self.get("sleep")? {
            Some(millis) => Some(Duration::from_millis(millis)),
            None if !self.quiet() => Some(DEFAULT_SLEEP),
            None => None,
        })
    }

    /// `(height, width)`, falling back to the terminal size in console mode
    pub fn grid_size(&self) -> Result<(usize, usize), OptionsError> {
        let default = if self.console() {
            // leave the last row for the status footer
            crossterm::terminal::size()
                .map(|(cols, rows)| {
                    let rows = usize::from(rows.saturating_sub(1)).max(1);
                    (rows, usize::from(cols).max(1))
                })
                .unwrap_or(DEFAULT_SIZE)
        } else {
            DEFAULT_SIZE
        };

        Ok((
            self.height()?.unwrap_or(default.0),
            self.width()?.unwrap_or(default.1),
        ))
    }
    pub fn fill_mode(&self) -> Result<FillMode, OptionsError> {
        let density = self.get("density")?.unwrap_or(DEFAULT_DENSITY);
        if !(0.0..=1.0).contains(&density) {
            return Err(OptionsError::Density(density));
        }
        let mode = self.matches.opt_str("fill");
        let mode = mode.as_deref().unwrap_or("random");
        FillMode::new(mode, density).ok_or_else(|| OptionsError::FillMode(mode.to_owned()))
    }

    pub fn stats_file(&self) -> Option<String> {
        self.matches.opt_str("stats")
    }
}
