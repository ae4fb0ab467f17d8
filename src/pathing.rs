use petgraph::unionfind::UnionFind;

use crate::cells::Cell;
use crate::grid::Grid;
use crate::utils;
use crate::utils::FnvHashMap;


/// Passage step counts from one start cell to every cell reachable from it.
#[derive(Debug, Clone)]
pub struct Distances {
    start: Cell,
    distances: FnvHashMap<Cell, u32>,
    max_distance: u32,
}

impl Distances {
    /// Flood fill outwards from `start` through open walls.
    ///
    /// Every step costs one, so the first time a cell is reached is its shortest distance and the
    /// distances map doubles as the visited set. None if `start` is not on the grid.
    pub fn new(grid: &Grid, start: Cell) -> Option<Distances> {
        if !grid.dimensions().contains(start) {
            return None;
        }

        let mut max: u32 = 0;
        let mut distances = utils::fnv_hashmap(grid.size());
        distances.insert(start, 0);

        let mut frontier = vec![start];
        while !frontier.is_empty() {
            let mut new_frontier = vec![];
            for cell in &frontier {
                let distance_to_cell = distances[cell];
                max = max.max(distance_to_cell);

                for linked in grid.links(*cell) {
                    if !distances.contains_key(&linked) {
                        distances.insert(linked, distance_to_cell + 1);
                        new_frontier.push(linked);
                    }
                }
            }
            frontier = new_frontier;
        }

        Some(Distances {
            start,
            distances,
            max_distance: max,
        })
    }

    #[inline(always)]
    pub fn start(&self) -> Cell {
        self.start
    }

    #[inline(always)]
    pub fn max(&self) -> u32 {
        self.max_distance
    }

    #[inline(always)]
    pub fn distance_from_start_to(&self, cell: Cell) -> Option<u32> {
        self.distances.get(&cell).cloned()
    }

    pub fn reachable_count(&self) -> usize {
        self.distances.len()
    }

    pub fn furthest_points_on_grid(&self) -> Vec<Cell> {
        let mut furthest = self.distances
            .iter()
            .filter(|&(_, distance)| *distance == self.max_distance)
            .map(|(cell, _)| *cell)
            .collect::<Vec<_>>();
        furthest.sort();
        furthest
    }
}

/// Cells on the shortest path from the distances' start to `end`, both ends included.
/// None if `end` cannot be reached.
pub fn shortest_path(grid: &Grid, distances_from_start: &Distances, end: Cell) -> Option<Vec<Cell>> {
    let mut current_distance = distances_from_start.distance_from_start_to(end)?;
    let mut path = vec![end];
    let mut current = end;

    while current != distances_from_start.start() {
        // Any linked neighbour one step closer will do
        let closer = grid.links(current)
            .into_iter()
            .find(|linked| {
                distances_from_start.distance_from_start_to(*linked) ==
                Some(current_distance - 1)
            })?;
        current = closer;
        current_distance -= 1;
        path.push(current);
    }

    path.reverse();
    Some(path)
}

/// Do the grid's open walls form a spanning tree? Connected, with no loops.
///
/// Joins cells one passage at a time; a passage joining two cells that are already connected
/// closes a loop.
pub fn is_perfect_maze(grid: &Grid) -> bool {
    let dimensions = grid.dimensions();
    let mut components = UnionFind::<usize>::new(grid.size());
    let mut passages = 0;

    for (a, b) in grid.iter_passages() {
        let (a_index, b_index) = match (dimensions.cell_to_index(a), dimensions.cell_to_index(b)) {
            (Some(a_index), Some(b_index)) => (a_index, b_index),
            _ => return false,
        };
        if !components.union(a_index, b_index) {
            return false;
        }
        passages += 1;
    }

    passages == dimensions.spanning_tree_edges().0
}
