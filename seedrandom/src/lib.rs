mod coerce;
mod errors;
mod gaussian;
mod mulberry;
mod random;

use std::cell::RefCell;

pub use crate::coerce::{round_half_up, to_uint32};
pub use crate::errors::SampleError;
pub use crate::gaussian::{GaussianParams, Window};
pub use crate::mulberry::Mulberry32;
pub use crate::random::{epoch_millis, from_epoch_millis, Random};

thread_local! {
    static DEFAULT: RefCell<Random> = RefCell::new(Random::new());
}

/// Runs `f` with this thread's shared, unpredictably seeded generator.
///
/// Calling `with_default` again from inside `f` panics, as the generator is already borrowed.
pub fn with_default<T, F>(f: F) -> T
    where F: FnOnce(&mut Random) -> T
{
    DEFAULT.with(|random| f(&mut random.borrow_mut()))
}
