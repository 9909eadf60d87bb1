//! Random primitives shared by the search.
//!
//! Every function takes the generator explicitly; the search owns a single
//! `Xoshiro256PlusPlus` and threads it through each call.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

/// Create the search generator, seeded deterministically when `seed` is set.
pub fn rng_from_seed(seed: Option<u64>) -> Xoshiro256PlusPlus {
    match seed {
        Some(seed) => Xoshiro256PlusPlus::seed_from_u64(seed),
        None => Xoshiro256PlusPlus::from_seed(rand::rng().random()),
    }
}

/// Draw `count` items uniformly at random, in random order.
///
/// Returns the chosen items. `count` is clamped to `items.len()`; the rest of
/// `items` is left in an unspecified order.
pub fn permutation<'a, T, R: Rng + ?Sized>(
    rng: &mut R,
    items: &'a mut [T],
    count: usize,
) -> &'a mut [T] {
    let count = count.min(items.len());
    items.partial_shuffle(rng, count).0
}

/// Uniform integer in `[0, max)`.
///
/// # Panics
///
/// Panics if `max` is zero.
#[inline]
pub fn uniform_index<R: Rng + ?Sized>(rng: &mut R, max: usize) -> usize {
    assert!(max > 0, "uniform_index requires a non-empty range");
    rng.random_range(0..max)
}

/// Uniform real in `[0, 1)`.
#[inline]
pub fn uniform<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.random::<f64>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let mut a = rng_from_seed(Some(7));
        let mut b = rng_from_seed(Some(7));
        let xs: Vec<u64> = (0..8).map(|_| a.random()).collect();
        let ys: Vec<u64> = (0..8).map(|_| b.random()).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn test_permutation_keeps_multiset() {
        let mut rng = rng_from_seed(Some(1));
        let mut items: Vec<u32> = (0..50).collect();
        let chosen = permutation(&mut rng, &mut items, 50).to_vec();
        assert_eq!(chosen.len(), 50);
        let mut sorted = chosen.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..50).collect::<Vec<_>>());
        assert_ne!(chosen, sorted);
    }

    #[test]
    fn test_partial_permutation_returns_distinct_items() {
        let mut rng = rng_from_seed(Some(3));
        let mut items: Vec<u32> = (0..10).collect();
        assert!(permutation(&mut rng, &mut items, 0).is_empty());

        let mut chosen = permutation(&mut rng, &mut items, 3).to_vec();
        chosen.sort_unstable();
        chosen.dedup();
        assert_eq!(chosen.len(), 3);
        assert!(chosen.iter().all(|&x| x < 10));

        let mut all = items.clone();
        all.sort_unstable();
        assert_eq!(all, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn test_permutation_count_is_clamped() {
        let mut rng = rng_from_seed(Some(5));
        let mut items = vec![1, 2, 3];
        assert_eq!(permutation(&mut rng, &mut items, 100).len(), 3);
    }

    #[test]
    fn test_single_draw_is_uniform() {
        let mut rng = rng_from_seed(Some(11));
        let mut hits = [0usize; 4];
        for _ in 0..4000 {
            let mut items = [0usize, 1, 2, 3];
            let chosen = permutation(&mut rng, &mut items, 1);
            hits[chosen[0]] += 1;
        }
        for count in hits {
            assert!((800..1200).contains(&count), "{hits:?}");
        }
    }

    #[test]
    fn test_uniform_ranges() {
        let mut rng = rng_from_seed(Some(9));
        for _ in 0..1000 {
            let x = uniform(&mut rng);
            assert!((0.0..1.0).contains(&x));
            assert!(uniform_index(&mut rng, 7) < 7);
        }
    }

    #[test]
    #[should_panic(expected = "non-empty range")]
    fn test_uniform_index_zero_panics() {
        let mut rng = rng_from_seed(Some(9));
        uniform_index(&mut rng, 0);
    }
}
