//! Thread-local random source

use application::ports::RandomSource;
use rand::Rng;

/// Random source backed by the thread-local generator
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl ThreadRandom {
    /// Create a new thread-local random source
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl RandomSource for ThreadRandom {
    fn int_in(&self, lo: i32, hi: i32) -> i32 {
        rand::rng().random_range(lo..=hi)
    }
}
