use crate::constants::ENTROPY_SEED_WORDS;
use crate::identity::ThreadIdentity;
use rand::TryRngCore;
use rand::rngs::OsRng;
use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{RngCore, SeedableRng};

/// An opaque pseudorandom generator with a construction-time seed.
///
/// Once built, a generator is never reseeded. It implements [`RngCore`],
/// so the whole [`rand::Rng`] surface (uniform integers in a range,
/// floats, fills) is available on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generator(ChaCha8Rng);

impl Generator {
    /// Builds a generator seeded from `base_seed` plus the given thread
    /// identity. The same inputs always yield a bit-identical sequence,
    /// and distinct identities yield distinct seeds.
    pub fn deterministic(base_seed: u64, identity: ThreadIdentity) -> Self {
        Self(ChaCha8Rng::seed_from_u64(
            base_seed.wrapping_add(identity.as_u64()),
        ))
    }

    /// Builds a generator from [`ENTROPY_SEED_WORDS`] independent draws
    /// of the OS entropy source.
    ///
    /// Aborts the process if the entropy source fails. Falling back to a
    /// weaker seed would silently change the seeding contract, so there
    /// is no fallback.
    pub fn from_entropy() -> Self {
        let mut seed = <ChaCha8Rng as SeedableRng>::Seed::default();
        debug_assert_eq!(seed.len(), ENTROPY_SEED_WORDS * size_of::<u64>());

        for word in seed.chunks_exact_mut(size_of::<u64>()) {
            let drawn = OsRng
                .try_next_u64()
                .unwrap_or_else(|err| entropy_unavailable(err));
            word.copy_from_slice(&drawn.to_le_bytes());
        }

        Self(ChaCha8Rng::from_seed(seed))
    }
}

#[cold]
fn entropy_unavailable(err: rand::rand_core::OsError) -> ! {
    tracing::error!("OS entropy source unavailable: {err}");
    std::process::abort()
}

impl RngCore for Generator {
    fn next_u32(&mut self) -> u32 {
        self.0.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.0.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.0.fill_bytes(dest)
    }
}
