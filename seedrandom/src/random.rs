use crate::coerce::{round_half_up, seed_state};
use crate::errors::SampleError;
use crate::gaussian::{self, GaussianParams};
use crate::mulberry::Mulberry32;
use log::debug;
use rand::{Error, Rng, RngCore};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

// Unseeded generators start from a state in [0, UNSEEDED_STATES).
const UNSEEDED_STATES: u32 = 100_000;

/// A small deterministic generator for fixtures and mock data.
///
/// Every draw takes `&mut self`; share one between threads by wrapping it in a mutex, or give each
/// thread its own.
#[derive(Debug, Clone)]
pub struct Random {
    rng: Mulberry32,
}

impl Random {
    /// Creates a generator seeded from the thread-local entropy source.
    pub fn new() -> Self {
        Random { rng: Mulberry32::new(unpredictable_state()) }
    }

    /// Creates a generator from a numeric seed. A seed of zero, NaN or infinity counts as no seed
    /// at all, giving the same result as `new`.
    pub fn with_seed(seed: f64) -> Self {
        match seed_state(seed) {
            Some(state) => Random::from_state(state),
            None => Random::new(),
        }
    }

    /// Creates a generator with exactly this internal state. Unlike `with_seed`, zero is a valid
    /// state here.
    pub fn from_state(state: u32) -> Self {
        Random { rng: Mulberry32::new(state) }
    }

    pub fn state(&self) -> u32 {
        self.rng.state()
    }

    pub fn seed(&mut self, seed: f64) {
        *self = Random::with_seed(seed);
    }

    pub fn seed_unpredictably(&mut self) {
        *self = Random::new();
    }

    /// Returns a value in [0, 1).
    pub fn next_uniform(&mut self) -> f64 {
        self.rng.next_f64()
    }

    pub fn uniform(&mut self) -> f64 {
        self.uniform_in_range(0.0, 1.0)
    }

    /// Returns a value in [min, max) when `min <= max`. NaN bounds give NaN.
    pub fn uniform_in_range(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_uniform() * (max - min)
    }

    /// Returns a whole number by rounding `uniform_in_range(min, max)` half up. With integer bounds
    /// the result lies in [min, max] and the end points are half as likely as the values between
    /// them. Fractional bounds are allowed: `int_in_range(0.0, 2.5)` returns 0, 1 or 2.
    pub fn int_in_range(&mut self, min: f64, max: f64) -> f64 {
        round_half_up(self.uniform_in_range(min, max))
    }

    /// Draws from a normal distribution restricted to `[min, max]`.
    ///
    /// This retries until a value falls inside the window, without limit. With `min > max`, a NaN
    /// bound, or a mean far outside the window it will spin forever; use `try_gaussian` when the
    /// parameters come from outside.
    pub fn gaussian(&mut self, params: &GaussianParams) -> f64 {
        gaussian::sample(&mut self.rng, &params.resolve())
    }

    pub fn gaussian_int(&mut self, params: &GaussianParams) -> f64 {
        round_half_up(self.gaussian(params))
    }

    /// Like `gaussian`, but fails on an empty window and gives up after `max_attempts` draws.
    pub fn try_gaussian(&mut self, params: &GaussianParams, max_attempts: usize)
        -> Result<f64, SampleError>
    {
        gaussian::try_sample(&mut self.rng, &params.resolve(), max_attempts)
    }

    /// Picks an element uniformly-ish (see `int_in_range`). A draw is consumed even when `items`
    /// is empty.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        let idx = self.int_in_range(0.0, items.len() as f64 - 1.0);
        if idx >= 0.0 && idx < items.len() as f64 {
            items.get(idx as usize)
        } else {
            None
        }
    }

    /// Returns an instant between `start` and `end`, both inclusive, at millisecond resolution.
    pub fn date_in_range(&mut self, start: SystemTime, end: SystemTime) -> SystemTime {
        let millis = self.int_in_range(epoch_millis(start) as f64, epoch_millis(end) as f64);
        from_epoch_millis(millis as i64)
    }
}

impl Default for Random {
    fn default() -> Self {
        Random::new()
    }
}

impl RngCore for Random {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.rng.try_fill_bytes(dest)
    }
}

fn unpredictable_state() -> u32 {
    let state = rand::thread_rng().gen_range(0, UNSEEDED_STATES);
    debug!("seeding generator unpredictably with state {}", state);
    state
}

/// Signed milliseconds since the Unix epoch; instants before 1970 are negative.
pub fn epoch_millis(time: SystemTime) -> i64 {
    match time.duration_since(UNIX_EPOCH) {
        Ok(after) => after.as_millis() as i64,
        Err(err) => -(err.duration().as_millis() as i64),
    }
}

pub fn from_epoch_millis(millis: i64) -> SystemTime {
    let offset = Duration::from_millis(millis.abs() as u64);
    if millis >= 0 {
        UNIX_EPOCH + offset
    } else {
        UNIX_EPOCH - offset
    }
}
