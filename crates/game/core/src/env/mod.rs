//! Capabilities injected into the rules from outside.
//!
//! The only external input the combat rules need besides player choices is a
//! source of random rolls.
pub mod rng;

pub use rng::{PcgRng, RngOracle};
