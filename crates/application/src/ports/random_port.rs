//! Random source port
//!
//! All pseudo-random generation (fallback readings, series perturbation,
//! simulated weather fields) goes through this trait so tests can inject a
//! deterministic source.

/// Source of uniformly distributed integers
pub trait RandomSource: Send + Sync {
    /// Sample an integer uniformly from the inclusive range [lo, hi]
    fn int_in(&self, lo: i32, hi: i32) -> i32;
}
