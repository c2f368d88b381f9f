use std::{
    fs,
    io::{self, Write},
    path::Path,
    time::{Duration, Instant},
};

/// How often a [`SimpleRecord`] is willing to produce a report
const REPORT_INTERVAL: Duration = Duration::from_millis(500);

pub trait Recorder {
    fn record(&mut self, generation: u64, alive: usize);

    fn has_report(&self) -> bool;
    fn report(&mut self) -> String;
}

pub struct SimpleRecord {
    generation: u64,
    alive: usize,
    gens_in_report: usize,
    last_report: Instant,
}
impl SimpleRecord {
    pub fn new(alive: usize) -> Self {
        Self {
            generation: 0,
            alive,
            gens_in_report: 0,
            last_report: Instant::now(),
        }
    }
}
impl Recorder for SimpleRecord {
    fn record(&mut self, generation: u64, alive: usize) {
        self.generation = generation;
        self.gens_in_report += 1;
        self.alive = alive;
    }

    fn has_report(&self) -> bool {
        self.last_report.elapsed() >= REPORT_INTERVAL
    }
    fn report(&mut self) -> String {
        let gens_per_sec = self.gens_in_report as f64 / self.last_report.elapsed().as_secs_f64();
        // reset stats for next report
        self.last_report = Instant::now();
        self.gens_in_report = 0;

        format!(
            "{:.02}gen/s gen:{} alive:{}",
            gens_per_sec, self.generation, self.alive
        )
    }
}

pub struct CsvRecord {
    inner: SimpleRecord,
    data: Vec<(u64, u128, usize)>,
    last: Instant,
}
impl CsvRecord {
    pub fn new(alive: usize) -> Self {
        Self {
            inner: SimpleRecord::new(alive),
            data: vec![(0, 0, alive)],
            last: Instant::now(),
        }
    }

    pub fn write_to<W: Write>(&self, mut out: W) -> io::Result<()> {
        out.write_all(b"gen,delta_t,alive\n")?;
        for (generation, delta, alive) in &self.data {
            writeln!(out, "{generation},{delta},{alive}")?;
        }
        out.flush()
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let file = fs::File::create(path)?;
        self.write_to(io::BufWriter::new(file))
    }
}
impl Recorder for CsvRecord {
    fn record(&mut self, generation: u64, alive: usize) {
        let delta = self.last.elapsed().as_micros();
        self.last = Instant::now();

        self.data.push((generation, delta, alive));
        self.inner.record(generation, alive);
    }

    fn has_report(&self) -> bool {
        self.inner.has_report()
    }
    fn report(&mut self) -> String {
        self.inner.report()
    }
}

pub enum SwitchRecorder {
    Csv(CsvRecord),
    Simple(SimpleRecord),
}
impl SwitchRecorder {
    pub fn new(alive: usize, csv: bool) -> Self {
        if csv {
            Self::Csv(CsvRecord::new(alive))
        } else {
            Self::Simple(SimpleRecord::new(alive))
        }
    }

    /// Writes the collected rows, if this recorder kept any
    pub fn save<P: AsRef<Path>>(&self, path: P) -> io::Result<bool> {
        match self {
            Self::Csv(r) => r.save(path).map(|()| true),
            Self::Simple(_) => Ok(false),
        }
    }
}
impl Recorder for SwitchRecorder {
    fn record(&mut self, generation: u64, alive: usize) {
        match self {
            Self::Csv(r) => r.record(generation, alive),
            Self::Simple(r) => r.record(generation, alive),
        }
    }
    fn has_report(&self) -> bool {
        match self {
            Self::Csv(r) => r.has_report(),
            Self::Simple(r) => r.has_report(),
        }
    }
    fn report(&mut self) -> String {
        match self {
            Self::Csv(r) => r.report(),
            Self::Simple(r) => r.report(),
        }
    }
}
