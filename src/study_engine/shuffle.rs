use rand::Rng;

/// Uniformly permute `items` in place (Fisher-Yates).
pub fn shuffle<T, R: Rng + ?Sized>(rng: &mut R, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// Return an owned, shuffled copy of `items`.
pub fn shuffled<T: Clone, R: Rng + ?Sized>(rng: &mut R, items: &[T]) -> Vec<T> {
    let mut owned = items.to_vec();
    shuffle(rng, &mut owned);
    owned
}

/// Draw up to `n` items without replacement.
///
/// Runs only the first `n` steps of a forward Fisher-Yates pass, so every
/// `n`-subset (and its order) is equally likely. Returns fewer than `n` items
/// when `items` is shorter.
pub fn sample<T, R: Rng + ?Sized>(rng: &mut R, mut items: Vec<T>, n: usize) -> Vec<T> {
    let take = n.min(items.len());
    for i in 0..take {
        let j = rng.gen_range(i..items.len());
        items.swap(i, j);
    }
    items.truncate(take);
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut items: Vec<u32> = (0..52).collect();
        shuffle(&mut rng, &mut items);

        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..52).collect::<Vec<_>>());
    }

    #[test]
    fn shuffle_is_deterministic_with_seed() {
        let make = |seed: u64| -> Vec<u32> {
            let mut rng = StdRng::seed_from_u64(seed);
            shuffled(&mut rng, &(0..20).collect::<Vec<_>>())
        };
        assert_eq!(make(99), make(99));
        assert_ne!(make(99), make(100));
    }

    #[test]
    fn sample_never_repeats_and_respects_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let picked = sample(&mut rng, (0..10).collect::<Vec<u32>>(), 4);
        assert_eq!(picked.len(), 4);
        let mut seen = std::collections::HashSet::new();
        for p in &picked {
            assert!(seen.insert(*p), "duplicate pick {p}");
        }

        let short = sample(&mut rng, vec![1, 2], 3);
        assert_eq!(short.len(), 2);
        assert!(sample(&mut rng, Vec::<u32>::new(), 3).is_empty());
    }

    #[test]
    fn every_position_is_reachable() {
        // Crude uniformity check: each element lands first at least once.
        let mut rng = StdRng::seed_from_u64(1);
        let mut firsts = [0usize; 5];
        for _ in 0..500 {
            let s = shuffled(&mut rng, &[0usize, 1, 2, 3, 4]);
            firsts[s[0]] += 1;
        }
        assert!(firsts.iter().all(|&n| n > 50), "skewed first positions: {firsts:?}");
    }
}
