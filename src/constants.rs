// Seeding related constants

/// Base value added to a thread's identity to form its generator seed
/// under the deterministic policy. Fixed so that two runs requesting
/// generators from threads in the same order reproduce each other.
pub const DETERMINISTIC_BASE_SEED: u64 = 42;

/// Number of independent OS entropy draws used to seed a generator under
/// the entropy policy. Each draw is a `u64`, so four of them fill the
/// full 32-byte ChaCha seed.
pub const ENTROPY_SEED_WORDS: usize = 4;
