use once_cell::sync::Lazy;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// A simple counter which is initialized at 0. Lives for the whole
/// process; never reset.
static GLOBAL_ID_COUNTER: Lazy<AtomicU64> = Lazy::new(|| AtomicU64::new(0));

/// Process-unique identity of a single OS thread.
///
/// Identities are issued in request order starting at 0 and are never
/// reused. The value is fixed for the lifetime of the owning thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ThreadIdentity(u64);

impl ThreadIdentity {
    #[inline]
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ThreadIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Takes the next identity from the shared counter. Runs at most once per
/// thread, from that thread's cache initializer.
fn next_identity() -> ThreadIdentity {
    // `checked_add` makes the counter saturate instead of wrapping;
    // wrapping would reissue identities.
    let id = GLOBAL_ID_COUNTER
        .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |id| id.checked_add(1))
        .unwrap_or_else(|_| identity_space_exhausted());

    tracing::debug!("assigned thread identity {id}");

    ThreadIdentity(id)
}

#[cold]
fn identity_space_exhausted() -> ! {
    tracing::error!("thread identity space exhausted (u64 counter saturated)");
    std::process::abort()
}

/// Returns the calling thread's identity, assigning one on first use.
///
/// The first call on a given thread atomically increments a process-wide
/// counter and caches the result in thread-local storage; every later
/// call on that thread returns the cached value without touching the
/// counter. Concurrent first calls from different threads never observe
/// the same value, and no value is skipped: after `k` distinct threads
/// have called this, the issued set is exactly `{0, 1, ..., k - 1}`.
///
/// Aborts the process with a diagnostic if the `u64` identity space is
/// ever exhausted.
#[inline]
pub fn acquire_thread_identity() -> ThreadIdentity {
    thread_local!(static THREAD_IDENTITY: ThreadIdentity = next_identity());
    THREAD_IDENTITY.with(|&id| id)
}
