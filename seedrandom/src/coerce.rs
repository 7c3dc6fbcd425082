use crate::mulberry::Mulberry32;

const TWO_POW_32: f64 = 4_294_967_296.0;

/// Converts a number to `u32` the way JavaScript's `x >>> 0` does: truncate towards zero, then
/// reduce modulo 2^32. NaN and infinities become 0.
pub fn to_uint32(x: f64) -> u32 {
    if !x.is_finite() {
        return 0;
    }
    x.trunc().rem_euclid(TWO_POW_32) as u32
}

/// Rounds to the nearest integer, with ties going towards positive infinity (so -0.5 rounds to 0,
/// unlike `f64::round`).
pub fn round_half_up(x: f64) -> f64 {
    let floor = x.floor();
    if x - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Maps a user-supplied seed onto a generator state, or `None` if the seed should be ignored.
///
/// Fractional seeds are truncated only after the first increment is added, so the result is the
/// state whose first step lands on `to_uint32(seed + increment)`.
pub fn seed_state(seed: f64) -> Option<u32> {
    if seed == 0.0 || !seed.is_finite() {
        return None;
    }
    let increment = Mulberry32::increment();
    Some(to_uint32(seed + f64::from(increment)).wrapping_sub(increment))
}
