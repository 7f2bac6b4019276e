//! Nullable infrastructure for deterministic testing.
//!
//! Every external collaborator of the verification pipeline (registry,
//! privacy boundary, clock) sits behind a trait. This crate provides
//! test-friendly implementations that:
//! - Return deterministic values
//! - Can be controlled programmatically
//! - Record how they were called
//! - Never touch the network
//!
//! Usage: swap real implementations for nullables in tests.

pub mod clock;
pub mod encoder;
pub mod registry;

pub use clock::NullClock;
pub use encoder::NullEncoder;
pub use registry::NullRegistry;
