//! Combat formulas.
//!
//! This module provides the pure arithmetic behind every hit in a battle.
//! All scalings use truncating integer division so results are reproducible
//! bit for bit (15 at 150% is 22, never 22.5 rounded).
//!
//! # Core Functions
//!
//! - `mitigate`: defense reduction with the 1-damage floor
//! - `scale`: truncating percentage scaling
//! - `DamageRange`: inclusive variance windows for attacks and drains
//! - `SpecialAttack`: archetype one-shot effects

pub mod damage;
pub mod special;

pub use damage::{DamageRange, mitigate, scale};
pub use special::{SpecialAttack, SpecialOutcome};
