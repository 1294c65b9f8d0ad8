//! Stable per-thread identities and per-thread pseudorandom generators.
//!
//! Each OS thread is assigned a process-unique integer identity on first
//! use, and owns a lazily constructed generator whose seeding follows the
//! build profile: reproducible (base seed + thread identity) in debug and
//! test builds, OS entropy in release builds.

pub mod constants;
pub mod identity;
pub mod rng;
