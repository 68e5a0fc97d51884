//! Seeded random sources backed by ChaCha.

use galaxy_voyager_core::RandomSource;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Random source drawing from one ChaCha stream of a shared seed.
///
/// The board seeder and every emitter read distinct streams, so a seed
/// reproduces the board regardless of how the actor threads interleave.
#[derive(Clone, Debug)]
pub(crate) struct ChaChaRandom {
    rng: ChaCha8Rng,
}

impl ChaChaRandom {
    /// Creates a source reading `stream` of the generator seeded with `seed`.
    #[must_use]
    pub(crate) fn seeded(seed: u64, stream: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        rng.set_stream(stream);
        Self { rng }
    }
}

impl RandomSource for ChaChaRandom {
    fn random_int(&mut self, low: i32, high: i32) -> i32 {
        self.rng.gen_range(low.min(high)..=high.max(low))
    }
}
