use log::{info, LevelFilter, Log, Metadata, Record};
use seedrandom::*;
use structopt::StructOpt;

#[derive(StructOpt, Debug)]
#[structopt(name = "seedrandom", about = "Draws deterministic pseudo-random values")]
struct Options {
    #[structopt(short = "s", long = "seed", help = "seed for the generator; 0 or absent means unpredictable")]
    seed: Option<f64>,
    #[structopt(short = "n", long = "count", help = "number of values to draw", default_value = "1")]
    count: usize,
    #[structopt(short = "v", long = "verbose", parse(from_occurrences), help = "log to stderr; repeat for more detail")]
    verbose: u64,
    #[structopt(subcommand)]
    command: Command,
}

#[derive(StructOpt, Debug)]
enum Command {
    #[structopt(name = "uniform", about = "uniform number in [min, max)")]
    Uniform {
        #[structopt(long = "min", default_value = "0")]
        min: f64,
        #[structopt(long = "max", default_value = "1")]
        max: f64,
    },
    #[structopt(name = "int", about = "uniform number in [min, max) rounded half up")]
    Int {
        #[structopt(long = "min", default_value = "0")]
        min: f64,
        #[structopt(long = "max", default_value = "1")]
        max: f64,
    },
    #[structopt(name = "gauss", about = "normally distributed number in [min, max]")]
    Gauss {
        #[structopt(long = "min")]
        min: Option<f64>,
        #[structopt(long = "max")]
        max: Option<f64>,
        #[structopt(long = "mean")]
        mean: Option<f64>,
        #[structopt(long = "sd", help = "standard deviation")]
        standard_deviation: Option<f64>,
        #[structopt(long = "int", help = "round to the nearest integer")]
        int: bool,
        #[structopt(long = "attempts", help = "give up after this many rejected draws")]
        attempts: Option<usize>,
    },
    #[structopt(name = "pick", about = "one of the given items")]
    Pick {
        #[structopt(name = "ITEM")]
        items: Vec<String>,
    },
    #[structopt(name = "date", about = "instant between two Unix timestamps in milliseconds; \
                                         put `--` before negative (pre-1970) timestamps")]
    Date {
        #[structopt(name = "START_MS")]
        start: i64,
        #[structopt(name = "END_MS")]
        end: i64,
    },
}

struct ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: ConsoleLogger = ConsoleLogger;

fn init_logging(verbose: u64) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    if let Err(err) = log::set_logger(&LOGGER) {
        eprintln!("Logging is not available: {}", err);
    }
    log::set_max_level(level);
}

fn draw(random: &mut Random, command: &Command) -> Result<String, SampleError> {
    let value = match command {
        Command::Uniform { min, max } => random.uniform_in_range(*min, *max).to_string(),
        Command::Int { min, max } => random.int_in_range(*min, *max).to_string(),
        Command::Gauss { min, max, mean, standard_deviation, int, attempts } => {
            let params = GaussianParams { min: *min, max: *max, mean: *mean, standard_deviation: *standard_deviation };
            let value = match attempts {
                Some(attempts) => random.try_gaussian(&params, *attempts)?,
                None => random.gaussian(&params),
            };
            if *int {
                round_half_up(value).to_string()
            } else {
                value.to_string()
            }
        }
        Command::Pick { items } => match random.pick(&items[..]) {
            Some(item) => item.clone(),
            None => "(none)".to_string(),
        },
        Command::Date { start, end } => {
            let date = random.date_in_range(from_epoch_millis(*start), from_epoch_millis(*end));
            epoch_millis(date).to_string()
        }
    };
    Ok(value)
}

fn run() -> Result<(), SampleError> {
    let opts = Options::from_args();
    init_logging(opts.verbose);

    let mut random = match opts.seed {
        Some(seed) => Random::with_seed(seed),
        None => Random::new(),
    };
    info!("generator state {}", random.state());

    for _ in 0..opts.count {
        println!("{}", draw(&mut random, &opts.command)?);
    }
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Fatal error: {}", err);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_int() {
        let mut random = Random::with_seed(1.0);
        let command = Command::Int { min: 1.0, max: 10.0 };
        assert_eq!(draw(&mut random, &command), Ok("7".to_string()));
        assert_eq!(draw(&mut random, &command), Ok("1".to_string()));
    }

    #[test]
    fn test_draw_gauss_int() {
        let mut random = Random::with_seed(1.0);
        let command = Command::Gauss {
            min: Some(1.0), max: Some(10.0), mean: Some(5.0), standard_deviation: Some(4.0),
            int: true, attempts: Some(1000),
        };
        assert_eq!(draw(&mut random, &command), Ok("5".to_string()));
        assert_eq!(draw(&mut random, &command), Ok("8".to_string()));
    }

    #[test]
    fn test_draw_gauss_invalid_window() {
        let mut random = Random::with_seed(1.0);
        let command = Command::Gauss {
            min: Some(10.0), max: Some(1.0), mean: None, standard_deviation: None,
            int: false, attempts: Some(10),
        };
        assert_eq!(draw(&mut random, &command), Err(SampleError::InvalidWindow(10.0, 1.0)));
    }

    #[test]
    fn test_draw_pick() {
        let mut random = Random::with_seed(1.0);
        let command = Command::Pick { items: vec!["a".into(), "b".into(), "c".into(), "d".into(), "e".into()] };
        assert_eq!(draw(&mut random, &command), Ok("d".to_string()));
        let empty = Command::Pick { items: vec![] };
        assert_eq!(draw(&mut random, &empty), Ok("(none)".to_string()));
    }

    #[test]
    fn test_draw_date() {
        let mut random = Random::with_seed(1.0);
        let command = Command::Date { start: 1_600_000_000_000, end: 1_700_000_000_000 };
        assert_eq!(draw(&mut random, &command), Ok("1662707394059".to_string()));
    }

    #[test]
    fn test_draw_date_before_epoch() {
        let mut random = Random::with_seed(1.0);
        let command = Command::Date { start: -2_000, end: -1_000 };
        assert_eq!(draw(&mut random, &command), Ok("-1373".to_string()));
    }

    #[test]
    fn test_options_parse_negative_date() {
        let opts = Options::from_iter(vec!["seedrandom", "date", "--", "-2000", "-1000"]);
        match opts.command {
            Command::Date { start, end } => assert_eq!((start, end), (-2_000, -1_000)),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_options_parse() {
        let opts = Options::from_iter(vec!["seedrandom", "-s", "1", "-n", "3", "int", "--min", "1", "--max", "10"]);
        assert_eq!(opts.seed, Some(1.0));
        assert_eq!(opts.count, 3);
        match opts.command {
            Command::Int { min, max } => assert_eq!((min, max), (1.0, 10.0)),
            other => panic!("unexpected command {:?}", other),
        }
    }
}
