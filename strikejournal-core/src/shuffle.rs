//! Unbiased in-place shuffling of the grid's display order.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Fisher–Yates shuffle: walks from the last index down to 1, swapping each
/// slot with a uniformly drawn index in `0..=i`.
///
/// Slices of length 0 or 1 are left untouched and draw nothing from `rng`.
pub fn shuffle<T, R>(items: &mut [T], rng: &mut R)
where
    R: Rng + ?Sized,
{
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// Shuffle with a `ChaCha20Rng` seeded from `seed`.
pub fn shuffle_seeded<T>(items: &mut [T], seed: u64) {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    shuffle(items, &mut rng);
}
