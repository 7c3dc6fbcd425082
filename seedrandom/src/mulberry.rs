use rand::{Error, RngCore, SeedableRng};

const INCREMENT: u32 = 0x6D2B79F5;

// 2^32, so that `next_u32() as f64 / SCALE` lies in [0, 1).
const SCALE: f64 = 4_294_967_296.0;

/// The mulberry32 generator: 32 bits of state, one add and two multiplies per draw.
///
/// The output sequence for a given state is fixed; changing it would break every recorded fixture
/// that depends on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    pub fn new(state: u32) -> Self {
        Mulberry32 { state: state }
    }

    pub fn state(&self) -> u32 {
        self.state
    }

    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / SCALE
    }

    pub(crate) fn increment() -> u32 {
        INCREMENT
    }
}

impl RngCore for Mulberry32 {
    fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(INCREMENT);
        let mut n = self.state;
        n = (n ^ (n >> 15)).wrapping_mul(n | 1);
        n ^= n.wrapping_add((n ^ (n >> 7)).wrapping_mul(n | 61));
        n ^ (n >> 14)
    }

    fn next_u64(&mut self) -> u64 {
        let low = u64::from(self.next_u32());
        let high = u64::from(self.next_u32());
        (high << 32) | low
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Mulberry32 {
    type Seed = [u8; 4];

    fn from_seed(seed: [u8; 4]) -> Self {
        Mulberry32::new(u32::from_le_bytes(seed))
    }

    // The default implementation scrambles the seed, which would make `seed_from_u64(1)` disagree
    // with `new(1)`.
    fn seed_from_u64(state: u64) -> Self {
        Mulberry32::new(state as u32)
    }
}
