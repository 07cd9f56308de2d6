//! Random number source for the hunt's chance rolls.
//!
//! Handlers never reach for a global RNG; they are handed a [`RandomSource`].
//! The binary uses [`ThreadRandom`]. Tests and replays use [`ScriptedRandom`]
//! (exact draws) or [`SeededRandom`] (repeatable but arbitrary draws).

use std::collections::VecDeque;

use log::info;
use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

use crate::DEV_MODE;
use crate::view::{View, ViewItem};

/// Abstraction over the uniform draws used by chance mechanics.
pub trait RandomSource {
    /// Next uniform value in `[0.0, 1.0)`.
    fn next_f64(&mut self) -> f64;
}

/// Thread-local OS-seeded RNG. Used for real play.
#[derive(Debug, Clone)]
pub struct ThreadRandom {
    rng: ThreadRng,
}

impl ThreadRandom {
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Default for ThreadRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for ThreadRandom {
    fn next_f64(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// Seeded RNG: same seed, same run.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_f64(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// Hands out a predetermined sequence of draws.
///
/// Once the sequence runs out the final draw repeats; an empty sequence always yields `0.0`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    draws: VecDeque<f64>,
    last: f64,
    taken: usize,
}

impl ScriptedRandom {
    pub fn new(draws: impl IntoIterator<Item = f64>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
            last: 0.0,
            taken: 0,
        }
    }

    /// Number of draws handed out so far.
    pub fn taken(&self) -> usize {
        self.taken
    }
}

impl RandomSource for ScriptedRandom {
    fn next_f64(&mut self) -> f64 {
        if let Some(next) = self.draws.pop_front() {
            self.last = next;
        }
        self.taken += 1;
        self.last
    }
}

/// Draw once and succeed if the draw falls under `chance`.
///
/// The draw is logged; in `DEV_MODE` it is also shown to the player.
pub fn chance_check(rng: &mut dyn RandomSource, view: &mut View, label: &str, chance: f64) -> bool {
    let draw = rng.next_f64();
    let success = draw < chance;
    info!(
        "chance roll for {label}: drew {draw:.3} against {chance:.2} ({})",
        if success { "success" } else { "failure" }
    );
    if DEV_MODE {
        view.push(ViewItem::DevNote(format!("{label}: rolled {draw:.3} (< {chance:.2} wins)")));
    }
    success
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_draws_in_order_then_repeat_last() {
        let mut rng = ScriptedRandom::new([0.1, 0.9]);
        assert!((rng.next_f64() - 0.1).abs() < f64::EPSILON);
        assert!((rng.next_f64() - 0.9).abs() < f64::EPSILON);
        assert!((rng.next_f64() - 0.9).abs() < f64::EPSILON);
        assert_eq!(rng.taken(), 3);
    }

    #[test]
    fn empty_script_yields_zero() {
        let mut rng = ScriptedRandom::default();
        assert!(rng.next_f64().abs() < f64::EPSILON);
    }

    #[test]
    fn seeded_is_repeatable_and_in_range() {
        let mut a = SeededRandom::new(42);
        let mut b = SeededRandom::new(42);
        for _ in 0..100 {
            let x = a.next_f64();
            assert!((0.0..1.0).contains(&x));
            assert!((x - b.next_f64()).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn thread_random_stays_in_unit_interval() {
        let mut rng = ThreadRandom::new();
        for _ in 0..100 {
            assert!((0.0..1.0).contains(&rng.next_f64()));
        }
    }

    #[test]
    fn chance_check_is_strictly_less_than() {
        let mut view = View::recording();
        let mut rng = ScriptedRandom::new([0.69, 0.70]);
        assert!(chance_check(&mut rng, &mut view, "lock", 0.70));
        assert!(!chance_check(&mut rng, &mut view, "lock", 0.70));
    }
}
