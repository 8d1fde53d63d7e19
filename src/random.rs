use rand::{rngs::StdRng, Rng, SeedableRng};

/// Uniform draws used by idea synthesis. Production code wraps a `rand`
/// generator; tests can script exact values.
pub trait RandomSource {
    /// Index in `0..len`. `len` is never zero for the tables it is used on.
    fn pick_index(&mut self, len: usize) -> usize;

    fn int_inclusive(&mut self, low: u32, high: u32) -> u32;
}

pub struct RngSource<R: Rng> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn pick_index(&mut self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        self.rng.gen_range(0..len)
    }

    fn int_inclusive(&mut self, low: u32, high: u32) -> u32 {
        if high <= low {
            return low;
        }
        self.rng.gen_range(low..=high)
    }
}
