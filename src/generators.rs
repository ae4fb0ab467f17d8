use log::{debug, trace};
use rand::Rng;

use crate::cells::{Cell, Neighbour, NEIGHBOURS};
use crate::grid::Grid;
use crate::randomizer;

/// Apply the recursive backtracker maze generation algorithm to the grid, starting from a
/// uniformly chosen cell. Returns that start cell.
///
/// See `recursive_backtracker_from`.
pub fn recursive_backtracker<R>(grid: &mut Grid, rng: &mut R) -> Cell
    where R: Rng + ?Sized
{
    let start = randomizer::random_cell(rng, grid.dimensions());
    recursive_backtracker_from(grid, start, rng);
    start
}

/// Apply the recursive backtracker maze generation algorithm to the grid from `start`.
///
/// A randomised depth first walk: step into a cell, shuffle its four neighbours, and for each one
/// that is inside the grid and still unvisited open the wall towards it and walk on from there.
/// When a cell has no candidates left we backtrack to the cell we came from. A wall is only ever
/// opened towards an unvisited cell, so on a fresh grid the passages form a spanning tree: every
/// cell visited, `rows * cols - 1` walls opened, no loops.
///
/// The walk keeps its own stack of frames rather than recursing, so depth is bounded by the
/// cell count and not by the thread's stack size.
///
/// Panics if `start` is outside the grid.
pub fn recursive_backtracker_from<R>(grid: &mut Grid, start: Cell, rng: &mut R)
    where R: Rng + ?Sized
{
    assert!(grid.dimensions().contains(start),
            "start {:?} is outside a {}x{} grid",
            start,
            grid.rows().0,
            grid.columns().0);

    let mut stack: Vec<Frame> = Vec::with_capacity(grid.size());
    stack.extend(step_into(grid, start, rng));
    let mut deepest = stack.len();

    while let Some(frame) = stack.last_mut() {
        let neighbour = match frame.next_candidate() {
            Some(n) => n,
            None => {
                trace!("backtracking from {:?}", frame.cell);
                stack.pop();
                continue;
            }
        };
        let cell = frame.cell;

        let next_cell = match grid.dimensions().neighbour(cell, neighbour) {
            Some(next_cell) => next_cell,
            None => continue,
        };
        if grid.is_visited(next_cell) {
            continue;
        }

        grid.open_wall_towards(cell, neighbour.direction);
        stack.extend(step_into(grid, next_cell, rng));
        deepest = deepest.max(stack.len());
    }

    debug!("recursive backtracker from {:?} opened {} passages over {}x{} cells, deepest stack {}",
           start,
           grid.passages_count(),
           grid.rows().0,
           grid.columns().0,
           deepest);
}

/// One cell on the walk with its shuffled neighbour candidates and how far through them we are.
#[derive(Debug, Clone, Copy)]
struct Frame {
    cell: Cell,
    candidates: [Neighbour; 4],
    next: usize,
}

impl Frame {
    fn next_candidate(&mut self) -> Option<Neighbour> {
        let candidate = self.candidates.get(self.next).cloned();
        self.next += 1;
        candidate
    }
}

/// Visit `cell`, giving back the frame to continue the walk from it.
/// None if the cell was already visited by another branch of the walk.
fn step_into<R>(grid: &mut Grid, cell: Cell, rng: &mut R) -> Option<Frame>
    where R: Rng + ?Sized
{
    if grid.is_visited(cell) {
        return None;
    }
    grid.mark_visited(cell);

    // The shuffle is the only source of variety between mazes, one per visited cell.
    let mut candidates = NEIGHBOURS;
    randomizer::shuffle(rng, &mut candidates);
    trace!("stepped into {:?}, candidate order {:?}",
           cell,
           candidates.iter().map(|n| n.direction).collect::<Vec<_>>());

    Some(Frame {
        cell,
        candidates,
        next: 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid_dimensions::GridDimensions;
    use crate::pathing::{self, Distances};
    use crate::units::{ColumnsCount, RowsCount};
    use petgraph::unionfind::UnionFind;
    use quickcheck::{quickcheck, TestResult};
    use rand::rngs::mock::StepRng;
    use rand::{RngCore, SeedableRng};
    use rand_xorshift::XorShiftRng;

    fn grid(rows: usize, columns: usize) -> Grid {
        Grid::new(GridDimensions::new(RowsCount(rows), ColumnsCount(columns)).unwrap())
    }

    fn generated(rows: usize, columns: usize, seed: u64) -> (Grid, Cell) {
        let mut g = grid(rows, columns);
        let start = recursive_backtracker(&mut g, &mut XorShiftRng::seed_from_u64(seed));
        (g, start)
    }

    #[test]
    fn single_cell_grid() {
        let (g, start) = generated(1, 1, 0);
        assert_eq!(start, Cell::new(0, 0));
        assert!(g.all_visited());
        assert_eq!(g.passages_count(), 0);
    }

    #[test]
    fn every_cell_is_visited() {
        for &(rows, columns) in &[(3, 3), (14, 20), (1, 7), (9, 1), (2, 2)] {
            let (g, _) = generated(rows, columns, 11);
            assert!(g.all_visited(), "{}x{} not fully visited", rows, columns);
        }
    }

    #[test]
    fn spanning_tree_edge_count() {
        for &(rows, columns) in &[(3, 3), (14, 20), (1, 7), (9, 1)] {
            let (g, _) = generated(rows, columns, 5);
            assert_eq!(g.passages_count(), rows * columns - 1);
        }
    }

    #[test]
    fn no_cycles() {
        let (g, _) = generated(14, 20, 99);
        let dims = *g.dimensions();
        let mut components = UnionFind::<usize>::new(g.size());
        for (a, b) in g.iter_passages() {
            let ia = dims.cell_to_index(a).unwrap();
            let ib = dims.cell_to_index(b).unwrap();
            assert!(components.union(ia, ib), "passage {:?} - {:?} closes a loop", a, b);
        }
    }

    #[test]
    fn everything_reachable_from_the_start() {
        let (g, start) = generated(14, 20, 3);
        let distances = Distances::new(&g, start).unwrap();
        assert_eq!(distances.reachable_count(), 280);
        assert!(distances.distance_from_start_to(g.dimensions().goal_cell()).is_some());
    }

    #[test]
    fn large_grids_do_not_overflow_the_stack() {
        let (g, _) = generated(300, 300, 17);
        assert!(g.all_visited());
        assert_eq!(g.passages_count(), 300 * 300 - 1);
    }

    #[test]
    fn deterministic_for_identical_randomness() {
        let (a, start_a) = generated(14, 20, 12345);
        let (b, start_b) = generated(14, 20, 12345);
        assert_eq!(start_a, start_b);
        assert_eq!(a.verticals(), b.verticals());
        assert_eq!(a.horizontals(), b.horizontals());
    }

    #[test]
    fn different_randomness_gives_different_mazes() {
        let (a, _) = generated(14, 20, 1);
        let (b, _) = generated(14, 20, 2);
        assert!(a.verticals() != b.verticals() || a.horizontals() != b.horizontals());
    }

    #[test]
    fn constant_randomness_still_gives_a_perfect_maze() {
        // A stuck source always picks index 0 so the walk is fully predictable.
        let mut g = grid(4, 5);
        recursive_backtracker_from(&mut g, Cell::new(2, 2), &mut StepRng::new(0, 0));
        assert!(g.all_visited());
        assert!(pathing::is_perfect_maze(&g));
    }

    /// Counts raw draws. Wrapping a source stuck on zero means `gen_range` never rejects, so
    /// every `gen_range` call is exactly one draw.
    struct CountingRng {
        inner: StepRng,
        draws: usize,
    }

    impl CountingRng {
        fn new() -> CountingRng {
            CountingRng { inner: StepRng::new(0, 0), draws: 0 }
        }
    }

    impl RngCore for CountingRng {
        fn next_u32(&mut self) -> u32 {
            self.draws += 1;
            self.inner.next_u32()
        }

        fn next_u64(&mut self) -> u64 {
            self.draws += 1;
            self.inner.next_u64()
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            self.draws += 1;
            self.inner.fill_bytes(dest)
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> ::std::result::Result<(), rand::Error> {
            self.fill_bytes(dest);
            Ok(())
        }
    }

    #[test]
    fn one_shuffle_per_cell() {
        // Shuffling the four neighbours takes four draws.
        for &(rows, columns) in &[(1, 1), (1, 5), (4, 1), (3, 3), (6, 9)] {
            let mut g = grid(rows, columns);
            let mut rng = CountingRng::new();
            recursive_backtracker_from(&mut g, Cell::new(0, 0), &mut rng);
            assert_eq!(rng.draws, 4 * rows * columns, "{}x{}", rows, columns);

            // The random start adds a row and a column draw.
            let mut g = grid(rows, columns);
            let mut rng = CountingRng::new();
            recursive_backtracker(&mut g, &mut rng);
            assert_eq!(rng.draws, 2 + 4 * rows * columns, "{}x{}", rows, columns);
        }
    }

    #[test]
    fn explicit_start_is_the_root() {
        let mut g = grid(5, 5);
        let start = Cell::new(4, 0);
        recursive_backtracker_from(&mut g, start, &mut XorShiftRng::seed_from_u64(8));
        assert!(g.is_visited(start));
        assert!(!g.links(start).is_empty());
        assert!(pathing::is_perfect_maze(&g));
    }

    #[test]
    #[should_panic]
    fn start_outside_the_grid_panics() {
        let mut g = grid(2, 2);
        recursive_backtracker_from(&mut g, Cell::new(5, 5), &mut XorShiftRng::seed_from_u64(0));
    }

    #[test]
    fn perfect_maze_property() {
        fn prop(rows: u8, columns: u8, seed: u64) -> TestResult {
            let (rows, columns) = (rows as usize % 24, columns as usize % 24);
            if rows == 0 || columns == 0 {
                return TestResult::discard();
            }
            let (g, start) = generated(rows, columns, seed);
            let reachable = Distances::new(&g, start).map_or(0, |d| d.reachable_count());
            TestResult::from_bool(g.all_visited() && g.passages_count() == rows * columns - 1 &&
                                  pathing::is_perfect_maze(&g) &&
                                  reachable == rows * columns)
        }
        quickcheck(prop as fn(u8, u8, u64) -> TestResult);
    }

    #[test]
    fn determinism_property() {
        fn prop(rows: u8, columns: u8, seed: u64) -> bool {
            let (rows, columns) = (rows as usize % 16 + 1, columns as usize % 16 + 1);
            let (a, _) = generated(rows, columns, seed);
            let (b, _) = generated(rows, columns, seed);
            a == b
        }
        quickcheck(prop as fn(u8, u8, u64) -> bool);
    }
}
