//! RNG oracle for damage variance and reaction rolls.
//!
//! This module provides a trait-based RNG so the turn resolver never reaches
//! for a global generator. Production code seeds a [`PcgRng`] once per
//! battle; tests inject their own [`RngOracle`] to pin exact rolls.
//!
//! # Determinism
//!
//! Implementations must be deterministic: given the same seed they must
//! produce the same sequence, so a battle can be replayed from its seed.

/// Source of random integers.
///
/// `next_u32` must be uniform over the full `u32` range; the provided
/// helpers derive bounded values from it.
pub trait RngOracle {
    /// Generate the next random u32 value.
    fn next_u32(&mut self) -> u32;

    /// Generate a random value in range [min, max] inclusive.
    ///
    /// Maps one 32-bit draw onto the span with a widening multiply. Unless
    /// the span divides 2^32 the result is slightly biased: each value covers
    /// either `floor(2^32 / span)` or one more of the possible draws.
    ///
    /// Returns `min` when the range is empty or a single value.
    fn range(&mut self, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        let span = u64::from(max - min) + 1;
        min + ((u64::from(self.next_u32()) * span) >> 32) as u32
    }

    /// Roll a die with N sides (1-N inclusive).
    fn roll_die(&mut self, sides: u32) -> u32 {
        self.range(1, sides.max(1))
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// Uses the PCG-XSH-RR variant: 64-bit LCG state, 32-bit output.
///
/// # Properties
///
/// - **Deterministic**: Same seed always produces same sequence
/// - **Fast**: Single multiply + xorshift + rotate
/// - **Small state**: Only 64 bits
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PcgRng {
    state: u64,
}

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    /// Creates a generator from a seed.
    pub fn new(seed: u64) -> Self {
        let mut rng = Self { state: 0 };
        rng.step();
        rng.state = rng.state.wrapping_add(seed);
        rng.step();
        rng
    }

    /// Advance the state: `state' = state * multiplier + increment (mod 2^64)`.
    #[inline]
    fn step(&mut self) {
        self.state = self
            .state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT);
    }

    /// PCG output function using XSH-RR (xorshift high, random rotate).
    #[inline]
    fn output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&mut self) -> u32 {
        let old = self.state;
        self.step();
        Self::output(old)
    }
}
