use rand::Rng;

/// Partially shuffles `order` in place: scanning from the last index down to 1, each element
/// is swapped with probability `rate` with a uniformly chosen element at an index in `[0, i]`.
///
/// The order is not reset between calls, successive mutations accumulate.
pub fn mutate_order<T>(order: &mut [T], rate: f64, rng: &mut impl Rng) -> usize {
    let mut n_swaps = 0;
    for i in (1..order.len()).rev() {
        if rng.random::<f64>() < rate {
            let j = rng.random_range(0..=i);
            order.swap(i, j);
            n_swaps += 1;
        }
    }
    n_swaps
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand::prelude::SmallRng;

    use super::*;

    #[test]
    fn zero_rate_keeps_order() {
        let mut rng = SmallRng::seed_from_u64(0);
        let mut order = (0..50).collect_vec();
        for _ in 0..10 {
            assert_eq!(mutate_order(&mut order, 0.0, &mut rng), 0);
        }
        assert_eq!(order, (0..50).collect_vec());
    }

    #[test]
    fn mutation_is_a_permutation() {
        let mut rng = SmallRng::seed_from_u64(42);
        let mut order = (0..100).collect_vec();
        for _ in 0..20 {
            mutate_order(&mut order, 0.5, &mut rng);
        }
        assert_eq!(order.iter().copied().sorted().collect_vec(), (0..100).collect_vec());
    }

    #[test]
    fn full_rate_attempts_a_swap_at_every_index() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut order = (0..10).collect_vec();
        assert_eq!(mutate_order(&mut order, 1.0, &mut rng), 9);
    }

    #[test]
    fn same_seed_same_drift() {
        let run = |seed| {
            let mut rng = SmallRng::seed_from_u64(seed);
            let mut order = (0..30).collect_vec();
            for _ in 0..5 {
                mutate_order(&mut order, 0.3, &mut rng);
            }
            order
        };
        assert_eq!(run(3), run(3));
    }

    #[test]
    fn short_orders_are_left_alone() {
        let mut rng = SmallRng::seed_from_u64(0);
        let mut empty: Vec<usize> = vec![];
        let mut single = vec![1];
        assert_eq!(mutate_order(&mut empty, 1.0, &mut rng), 0);
        assert_eq!(mutate_order(&mut single, 1.0, &mut rng), 0);
        assert_eq!(single, vec![1]);
    }
}
