//! Poison status bookkeeping.
//!
//! A combatant carries at most one poison at a time. Re-application replaces
//! the current state instead of stacking, and the tick counter only counts
//! down.

/// Damage-over-time state: damage per tick and ticks left.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PoisonState {
    pub damage_per_tick: u32,
    pub ticks_remaining: u32,
}

impl PoisonState {
    /// No poison.
    pub const NONE: PoisonState = PoisonState {
        damage_per_tick: 0,
        ticks_remaining: 0,
    };

    pub const fn new(damage_per_tick: u32, ticks_remaining: u32) -> Self {
        Self {
            damage_per_tick,
            ticks_remaining,
        }
    }

    /// Returns true while ticks remain.
    pub const fn is_active(&self) -> bool {
        self.ticks_remaining > 0
    }

    /// Consumes one tick, returning the damage it deals.
    ///
    /// Returns 0 without changing anything once the poison has run out.
    pub fn tick(&mut self) -> u32 {
        if !self.is_active() {
            return 0;
        }
        self.ticks_remaining -= 1;
        self.damage_per_tick
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_counts_down_to_zero() {
        let mut poison = PoisonState::new(7, 2);
        assert_eq!(poison.tick(), 7);
        assert_eq!(poison.tick(), 7);
        assert!(!poison.is_active());
        assert_eq!(poison.tick(), 0);
        assert_eq!(poison.ticks_remaining, 0);
    }

    #[test]
    fn default_is_inactive() {
        assert_eq!(PoisonState::default(), PoisonState::NONE);
        assert!(!PoisonState::default().is_active());
    }
}
