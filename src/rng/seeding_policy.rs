use once_cell::sync::Lazy;

static PROCESS_POLICY: Lazy<SeedingPolicy> = Lazy::new(SeedingPolicy::from_build_profile);

/// How a thread's generator derives its initial state.
///
/// The policy is decided when the binary is compiled and holds for the
/// whole process; there is no runtime switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedingPolicy {
    /// Seed = fixed base constant + the thread's identity. Runs that
    /// request generators from threads in the same order produce
    /// bit-identical per-thread sequences.
    Deterministic,

    /// Seed drawn from the OS entropy source. Sequences are not
    /// reproducible across runs.
    Entropy,
}

impl SeedingPolicy {
    /// Policy implied by the compile profile: `Deterministic` when debug
    /// assertions are enabled (debug and test builds), `Entropy`
    /// otherwise (release builds).
    pub fn from_build_profile() -> Self {
        if cfg!(debug_assertions) {
            SeedingPolicy::Deterministic
        } else {
            SeedingPolicy::Entropy
        }
    }

    /// The policy in effect for this process, resolved once on first use.
    pub fn process() -> Self {
        *PROCESS_POLICY
    }
}
