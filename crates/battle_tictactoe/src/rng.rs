//! Injectable randomness for the computer opponent.
//!
//! The medium policy needs two kinds of draws: a biased coin for the
//! smart/random split and a uniform index for the fallback pick. Both go
//! through [`RandomSource`] so tests can force either branch.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::VecDeque;

/// Source of the random draws used by the computer opponent.
pub trait RandomSource {
    /// Returns true with the given probability (0.0..=1.0).
    fn roll(&mut self, probability: f64) -> bool;

    /// Returns a uniform index in `0..len`. `len` is never zero.
    fn pick_index(&mut self, len: usize) -> usize;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn roll(&mut self, probability: f64) -> bool {
        (**self).roll(probability)
    }

    fn pick_index(&mut self, len: usize) -> usize {
        (**self).pick_index(len)
    }
}

/// Seedable RNG for game play.
///
/// Uses ChaCha8 for speed; the same seed always replays the same games.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG with a fresh seed drawn from the OS.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random::<u64>())
    }

    /// The seed this RNG started from (log it to replay a session).
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for GameRng {
    fn roll(&mut self, probability: f64) -> bool {
        // gen_bool panics on NaN; clamp does not remove it.
        if probability.is_nan() {
            return false;
        }
        self.inner.gen_bool(probability.clamp(0.0, 1.0))
    }

    fn pick_index(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }
}

/// Deterministic source that replays scripted draws.
///
/// When a script runs dry, rolls come back `true` and picks come back `0`.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRandom {
    rolls: VecDeque<bool>,
    picks: VecDeque<usize>,
}

impl ScriptedRandom {
    /// Creates a source from roll results and pick indices.
    pub fn new(rolls: impl IntoIterator<Item = bool>, picks: impl IntoIterator<Item = usize>) -> Self {
        Self {
            rolls: rolls.into_iter().collect(),
            picks: picks.into_iter().collect(),
        }
    }

    /// A source whose every roll succeeds (always smart mode).
    pub fn always_smart() -> Self {
        Self::default()
    }

    /// A source whose every roll fails (always random mode), picking `pick`.
    pub fn always_random(pick: usize) -> Self {
        Self::new(std::iter::repeat_n(false, 9), std::iter::repeat_n(pick, 9))
    }
}

impl RandomSource for ScriptedRandom {
    fn roll(&mut self, _probability: f64) -> bool {
        self.rolls.pop_front().unwrap_or(true)
    }

    fn pick_index(&mut self, len: usize) -> usize {
        self.picks.pop_front().unwrap_or(0) % len
    }
}
