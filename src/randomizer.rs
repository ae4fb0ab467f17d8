use rand::Rng;

use crate::cells::Cell;
use crate::grid_dimensions::GridDimensions;

/// Uniform in-place Fisher–Yates shuffle.
///
/// Walks from the back of the slice, swapping each position with a uniformly chosen
/// position at or before it, so all `n!` orderings are equally likely.
pub fn shuffle<T, R>(rng: &mut R, items: &mut [T])
    where R: Rng + ?Sized
{
    let mut counter = items.len();
    while counter > 0 {
        let index = rng.gen_range(0..counter);
        counter -= 1;
        items.swap(counter, index);
    }
}

/// A uniformly chosen cell of the grid.
pub fn random_cell<R>(rng: &mut R, dimensions: &GridDimensions) -> Cell
    where R: Rng + ?Sized
{
    let row = rng.gen_range(0..dimensions.rows().0);
    let col = rng.gen_range(0..dimensions.columns().0);
    Cell::new(row, col)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{ColumnsCount, RowsCount};
    use crate::utils;
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_xorshift::XorShiftRng;

    fn seeded(seed: u64) -> XorShiftRng {
        XorShiftRng::seed_from_u64(seed)
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = seeded(7);
        for _ in 0..100 {
            let mut items = [10, 20, 30, 40, 50, 60];
            shuffle(&mut rng, &mut items);
            assert_eq!(items.iter().cloned().sorted().collect::<Vec<_>>(),
                       vec![10, 20, 30, 40, 50, 60]);
        }
    }

    #[test]
    fn shuffle_empty_and_single() {
        let mut rng = seeded(1);
        let mut empty: [u8; 0] = [];
        shuffle(&mut rng, &mut empty);
        let mut one = ['x'];
        shuffle(&mut rng, &mut one);
        assert_eq!(one, ['x']);
    }

    #[test]
    fn shuffle_is_deterministic_for_a_fixed_source() {
        let mut a = [0, 1, 2, 3];
        let mut b = [0, 1, 2, 3];
        shuffle(&mut seeded(42), &mut a);
        shuffle(&mut seeded(42), &mut b);
        assert_eq!(a, b);
    }

    #[test]
    fn shuffle_of_four_is_uniform() {
        const TRIALS: usize = 24_000;
        let expected = TRIALS / 24;
        // ~6 standard deviations of a binomial(24000, 1/24)
        let tolerance = 190;

        let mut rng = seeded(2024);
        let mut counts = utils::fnv_hashmap::<[u8; 4], usize>(24);
        for _ in 0..TRIALS {
            let mut items = [0u8, 1, 2, 3];
            shuffle(&mut rng, &mut items);
            *counts.entry(items).or_insert(0) += 1;
        }

        assert_eq!(counts.len(), 24);
        for (permutation, count) in &counts {
            assert!((*count as isize - expected as isize).abs() < tolerance,
                    "{:?} seen {} times, expected about {}",
                    permutation,
                    count,
                    expected);
        }
    }

    #[test]
    fn random_cells_are_inside_the_grid() {
        let dims = GridDimensions::new(RowsCount(3), ColumnsCount(5)).unwrap();
        let mut rng = seeded(3);
        let mut seen = utils::fnv_hashset(15);
        for _ in 0..2_000 {
            let cell = random_cell(&mut rng, &dims);
            assert!(dims.contains(cell));
            seen.insert(cell);
        }
        assert_eq!(seen.len(), 15);
    }
}
