use crate::errors::SampleError;
use crate::mulberry::Mulberry32;
use log::{trace, warn};

/// Parameters for a bounded normal draw. Unset fields fall back to defaults derived from the
/// bounds; see `resolve`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GaussianParams {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub mean: Option<f64>,
    pub standard_deviation: Option<f64>,
}

impl GaussianParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    pub fn mean(mut self, mean: f64) -> Self {
        self.mean = Some(mean);
        self
    }

    pub fn standard_deviation(mut self, standard_deviation: f64) -> Self {
        self.standard_deviation = Some(standard_deviation);
        self
    }

    /// Fills in the defaults. The standard deviation defaults to `max - min / 2`, not
    /// `(max - min) / 2`; recorded fixtures depend on this.
    pub fn resolve(&self) -> Window {
        let min = self.min.unwrap_or(0.0);
        let max = self.max.unwrap_or(1.0);
        Window {
            min: min,
            max: max,
            mean: self.mean.unwrap_or((max + min) / 2.0),
            standard_deviation: self.standard_deviation.unwrap_or(max - min / 2.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Window {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub standard_deviation: f64,
}

impl Window {
    fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }

    fn check(&self) -> Result<(), SampleError> {
        if self.min.is_nan() || self.max.is_nan() || self.min > self.max {
            return Err(SampleError::InvalidWindow(self.min, self.max));
        }
        Ok(())
    }
}

// Polar form of Box-Muller. Only one of the two normal deviates is used.
fn polar(rng: &mut Mulberry32, mean: f64, standard_deviation: f64) -> f64 {
    let (x1, w) = loop {
        let x1 = rng.next_f64() * 2.0 - 1.0;
        let x2 = rng.next_f64() * 2.0 - 1.0;
        let w = x1 * x1 + x2 * x2;
        if w < 1.0 {
            break (x1, w);
        }
    };
    let w = (-2.0 * w.ln() / w).sqrt();
    x1 * w * standard_deviation + mean
}

/// Draws until a value lands inside the window. Never returns if the window is empty or the
/// distribution cannot reach it.
pub(crate) fn sample(rng: &mut Mulberry32, window: &Window) -> f64 {
    loop {
        let value = polar(rng, window.mean, window.standard_deviation);
        if window.contains(value) {
            return value;
        }
        trace!("rejected gaussian value {} outside [{}, {}]", value, window.min, window.max);
    }
}

pub(crate) fn try_sample(rng: &mut Mulberry32, window: &Window, max_attempts: usize)
    -> Result<f64, SampleError>
{
    window.check()?;
    for _ in 0..max_attempts {
        let value = polar(rng, window.mean, window.standard_deviation);
        if window.contains(value) {
            return Ok(value);
        }
        trace!("rejected gaussian value {} outside [{}, {}]", value, window.min, window.max);
    }
    warn!("gave up sampling {:?} after {} attempts", window, max_attempts);
    Err(SampleError::Exhausted(max_attempts))
}
