//! Random sources for score rolls and race selection.
//!
//! The character model never reaches for a global generator. Every operation
//! that needs randomness takes a [`RandomSource`], so production code can pass
//! an entropy-seeded [`SystemRng`] while tests pass a seeded [`PcgRng`] or a
//! [`ScriptedRng`] that replays exact values.

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// Source of random integers.
///
/// Implementors only provide [`next_u32`](RandomSource::next_u32); the
/// inclusive range helper is derived from it.
pub trait RandomSource {
    /// Generate the next raw 32-bit value.
    fn next_u32(&mut self) -> u32;

    /// Generate a value in range [min, max] inclusive, uniformly.
    ///
    /// Returns `min` when the range is empty or a single value. Raw draws
    /// from the uneven tail of the `u32` space are discarded and redrawn, so
    /// every value in the range is equally likely.
    fn random_int(&mut self, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        let span = (i64::from(max) - i64::from(min) + 1) as u64;
        let zone = (1u64 << 32) / span * span;
        let offset = loop {
            let draw = u64::from(self.next_u32());
            if draw < zone {
                break draw % span;
            }
        };
        (i64::from(min) + offset as i64) as i32
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }

    fn random_int(&mut self, min: i32, max: i32) -> i32 {
        (**self).random_int(min, max)
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// Uses the PCG-XSH-RR variant: 64 bits of state, 32 bits of output.
/// Two generators built from the same seed yield the same sequence, which is
/// what tests and reproducible character rolls rely on.
///
/// # Example
/// ```
/// # use character_core::env::{PcgRng, RandomSource};
/// let mut a = PcgRng::new(42);
/// let mut b = PcgRng::new(42);
/// assert_eq!(a.random_int(8, 18), b.random_int(8, 18));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PcgRng {
    state: u64,
}

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    pub const fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// `state' = (state × multiplier + increment) mod 2^64`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation.
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RandomSource for PcgRng {
    fn next_u32(&mut self) -> u32 {
        self.state = Self::pcg_step(self.state);
        Self::pcg_output(self.state)
    }
}

/// Random source backed by the `rand` crate's standard generator.
#[derive(Clone, Debug)]
pub struct SystemRng {
    inner: StdRng,
}

impl SystemRng {
    /// Seed from operating system entropy.
    pub fn from_entropy() -> Self {
        Self {
            inner: StdRng::from_entropy(),
        }
    }

    /// Reproducible generator for replays.
    pub fn seed_from_u64(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for SystemRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl RandomSource for SystemRng {
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    fn random_int(&mut self, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        self.inner.gen_range(min..=max)
    }
}

/// Replays a fixed list of values, cycling when exhausted.
///
/// Each value is clamped into the requested range, so a script written for
/// `random_int(8, 18)` can say exactly which score comes out.
///
/// # Example
/// ```
/// # use character_core::env::{RandomSource, ScriptedRng};
/// let mut rng = ScriptedRng::new([15, 99]);
/// assert_eq!(rng.random_int(8, 18), 15);
/// assert_eq!(rng.random_int(8, 18), 18); // clamped
/// assert_eq!(rng.random_int(8, 18), 15); // cycles
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScriptedRng {
    values: Vec<i32>,
    cursor: usize,
}

impl ScriptedRng {
    pub fn new(values: impl IntoIterator<Item = i32>) -> Self {
        Self {
            values: values.into_iter().collect(),
            cursor: 0,
        }
    }

    fn next_value(&mut self) -> Option<i32> {
        let index = self.cursor % self.values.len().max(1);
        let value = self.values.get(index).copied()?;
        self.cursor += 1;
        Some(value)
    }
}

impl RandomSource for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        self.next_value().map_or(0, |v| v as u32)
    }

    fn random_int(&mut self, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        self.next_value().map_or(min, |v| v.clamp(min, max))
    }
}
