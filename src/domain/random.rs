//! Random sources
//!
//! Abstraction over integer draws so the probable death date can use the
//! thread RNG in production and a fixed value in tests.

use rand::Rng;

/// A source of uniformly distributed integers.
pub trait RandomSource: Send + Sync {
    /// Returns an integer in the inclusive range `[low, high]`.
    fn next_in_range(&self, low: i32, high: i32) -> i32;
}

/// Draws from `rand::thread_rng()` on every call.
///
/// Holds no state; each thread has its own generator and nothing is seeded
/// explicitly, so draws are not reproducible.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_in_range(&self, low: i32, high: i32) -> i32 {
        rand::thread_rng().gen_range(low..=high)
    }
}

/// Always returns the same value, clamped into the requested range.
#[derive(Debug, Clone, Copy)]
pub struct FixedRandom(pub i32);

impl RandomSource for FixedRandom {
    fn next_in_range(&self, low: i32, high: i32) -> i32 {
        self.0.clamp(low, high)
    }
}
