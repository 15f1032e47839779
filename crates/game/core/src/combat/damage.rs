//! Damage calculation.

use crate::env::RngOracle;

// ============================================================================
// Mitigation
// ============================================================================

/// Damage actually dealt by a direct hit.
///
/// # Formula
///
/// ```text
/// effective = defending ? incoming - defense : incoming
/// actual    = max(1, effective)
/// ```
///
/// A hit never deals less than 1, even against a defender whose defense
/// exceeds the incoming value.
pub fn mitigate(incoming: u32, defense: u32, defending: bool) -> u32 {
    let effective = if defending {
        incoming.saturating_sub(defense)
    } else {
        incoming
    };
    effective.max(1)
}

/// Scales `value` by `numerator / denominator`, truncating.
pub const fn scale(value: u32, numerator: u32, denominator: u32) -> u32 {
    value * numerator / denominator
}

// ============================================================================
// Variance windows
// ============================================================================

/// Inclusive window a random roll is drawn from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DamageRange {
    pub min: u32,
    pub max: u32,
}

impl DamageRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Basic attack: 80%..=120% of attack power.
    pub const fn attack(attack_power: u32) -> Self {
        Self::around(attack_power)
    }

    /// Heavy strike: 80%..=120% of 150% attack power.
    pub const fn heavy(attack_power: u32) -> Self {
        Self::around(scale(attack_power, 3, 2))
    }

    /// Life steal: 30%..=50% of attack power.
    pub const fn steal(attack_power: u32) -> Self {
        Self::new(scale(attack_power, 3, 10), scale(attack_power, 5, 10))
    }

    /// Draws a value from the window.
    pub fn roll(&self, rng: &mut (impl RngOracle + ?Sized)) -> u32 {
        rng.range(self.min, self.max)
    }

    const fn around(base: u32) -> Self {
        Self::new(scale(base, 8, 10), scale(base, 12, 10))
    }
}
