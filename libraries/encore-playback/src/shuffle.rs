//! Playlist shuffling
//!
//! Sampling without replacement: pick a uniformly random element from the
//! remaining pool, move it to the output, repeat until the pool is empty. The
//! pool is an indexable `Vec` and picked elements are removed with
//! `swap_remove`, so each step is O(1) and the whole shuffle O(n).

use rand::{thread_rng, Rng};

/// Return the items in a uniformly random order
///
/// Uses fresh thread-local randomness on every call.
pub fn shuffle<T>(items: Vec<T>) -> Vec<T> {
    shuffle_with(items, &mut thread_rng())
}

/// Return the items in a random order drawn from `rng`
pub fn shuffle_with<T, R>(mut pool: Vec<T>, rng: &mut R) -> Vec<T>
where
    R: Rng + ?Sized,
{
    let mut result = Vec::with_capacity(pool.len());
    while !pool.is_empty() {
        let pick = rng.gen_range(0..pool.len());
        result.push(pool.swap_remove(pick));
    }
    result
}
