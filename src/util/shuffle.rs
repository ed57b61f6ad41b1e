//! Uniform random permutation of the rumour feed.
//!
//! DESIGN
//! ======
//! Kept separate from the refresh orchestration so the permutation contract
//! can be tested without timers, with the RNG injected for determinism.

#[cfg(test)]
#[path = "shuffle_test.rs"]
mod shuffle_test;

use rand::Rng;
use rand::seq::SliceRandom;

/// Return a uniformly-random permutation of `items` drawn from `rng`.
#[must_use]
pub fn shuffled_with<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut permuted = items.to_vec();
    permuted.shuffle(rng);
    permuted
}

/// Return a uniformly-random permutation of `items`.
#[must_use]
pub fn shuffled<T: Clone>(items: &[T]) -> Vec<T> {
    shuffled_with(items, &mut rand::rng())
}
