use std::time::{SystemTime, UNIX_EPOCH};

use rand::{rngs::StdRng, Rng, SeedableRng};

/// Uniform integer source used to seed the board.
///
/// Built once by the driver and handed to whatever needs randomness, so a
/// fixed seed reproduces a run exactly.
pub struct RandomSource {
    rng: StdRng,
    seed: u64,
}

impl RandomSource {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seeds from the wall clock.
    pub fn from_time() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        Self::with_seed(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform value in `[0, n)`.
    pub fn rand(&mut self, n: u32) -> u32 {
        assert!(n > 0, "rand range must be non-empty");
        self.rng.gen_range(0..n)
    }
}
