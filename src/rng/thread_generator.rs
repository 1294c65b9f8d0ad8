use crate::constants::DETERMINISTIC_BASE_SEED;
use crate::identity::acquire_thread_identity;
use crate::rng::{Generator, SeedingPolicy};
use rand_chacha::rand_core::RngCore;
use std::cell::RefCell;
use std::marker::PhantomData;

thread_local! {
    static GENERATOR_SLOT: RefCell<Generator> = RefCell::new(new_thread_generator());
}

/// Builds the calling thread's generator per the process-wide seeding
/// policy. Runs at most once per thread, from the slot initializer.
fn new_thread_generator() -> Generator {
    match SeedingPolicy::process() {
        SeedingPolicy::Deterministic => {
            let identity = acquire_thread_identity();
            tracing::debug!("seeding thread generator deterministically, identity {identity}");
            Generator::deterministic(DETERMINISTIC_BASE_SEED, identity)
        }
        SeedingPolicy::Entropy => {
            tracing::debug!("seeding thread generator from OS entropy");
            Generator::from_entropy()
        }
    }
}

/// Handle to the calling thread's generator.
///
/// The handle holds no generator state; every call forwards to the
/// thread-local slot. It is neither `Send` nor `Sync`, so it cannot leave
/// the thread it was obtained on.
#[derive(Debug, Clone)]
pub struct ThreadGenerator {
    _not_send_sync: PhantomData<*mut Generator>,
}

/// Returns a handle to the calling thread's generator, constructing and
/// seeding it on the thread's first call.
///
/// The generator is seeded exactly once per thread. Obtaining further
/// handles never reseeds it; all handles on one thread continue a single
/// stream. The slot is dropped when the owning thread exits.
pub fn thread_generator() -> ThreadGenerator {
    // Touch the slot so construction (and, under the deterministic
    // policy, identity acquisition) happens now rather than on first draw.
    GENERATOR_SLOT.with(|_| {});

    ThreadGenerator {
        _not_send_sync: PhantomData,
    }
}

impl RngCore for ThreadGenerator {
    fn next_u32(&mut self) -> u32 {
        GENERATOR_SLOT.with(|slot| slot.borrow_mut().next_u32())
    }

    fn next_u64(&mut self) -> u64 {
        GENERATOR_SLOT.with(|slot| slot.borrow_mut().next_u64())
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        GENERATOR_SLOT.with(|slot| slot.borrow_mut().fill_bytes(dest))
    }
}
