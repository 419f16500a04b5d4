//! Nullable infrastructure for deterministic testing.
//!
//! External sources of nondeterminism (entropy, wall-clock time) are passed
//! into the code that needs them. This crate provides test-friendly
//! implementations that:
//! - Return deterministic values
//! - Can be controlled programmatically
//! - Never touch the OS
//!
//! Usage: swap real implementations for nullables in tests.

pub mod clock;
pub mod random;

pub use clock::NullClock;
pub use random::NullEntropy;
