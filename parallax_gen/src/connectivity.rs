// Face-adjacency connectivity check for cell sets.
//
// A set of cells is connected when every cell is reachable from every other
// via chains of face-adjacent steps (the 6 axis-aligned unit offsets).
// Implemented as an iterative depth-first traversal with an explicit stack —
// no recursion, so stack depth is never a concern regardless of structure
// size. O(N) with N = cell count: each cell is visited once with 6 neighbor
// probes.
//
// This is the one invariant in the engine with no degraded fallback: any
// structure returned by `growth` or `mutate` must pass this check.
//
// See also: `growth.rs` (connected by construction, so it never calls this),
// `mutate.rs` which calls it once per removal candidate.

use crate::types::CellCoord;
use rustc_hash::FxHashSet;

/// Returns `true` if `cells` forms a single face-connected component.
///
/// The empty set is connected by convention.
pub fn is_connected(cells: &FxHashSet<CellCoord>) -> bool {
    let Some(&start) = cells.iter().next() else {
        return true;
    };

    let mut visited = FxHashSet::default();
    visited.insert(start);
    let mut stack = vec![start];

    while let Some(current) = stack.pop() {
        for neighbor in current.face_neighbors() {
            if cells.contains(&neighbor) && visited.insert(neighbor) {
                stack.push(neighbor);
            }
        }
    }

    visited.len() == cells.len()
}

/// Convenience wrapper over a cell slice. Builds the lookup set internally.
pub fn is_connected_cells(cells: &[CellCoord]) -> bool {
    let set: FxHashSet<CellCoord> = cells.iter().copied().collect();
    is_connected(&set)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(cells: &[(i32, i32, i32)]) -> FxHashSet<CellCoord> {
        cells
            .iter()
            .map(|&(x, y, z)| CellCoord::new(x, y, z))
            .collect()
    }

    #[test]
    fn empty_set_is_connected() {
        assert!(is_connected(&set(&[])));
    }

    #[test]
    fn single_cell_is_connected() {
        assert!(is_connected(&set(&[(0, 0, 0)])));
    }

    #[test]
    fn two_face_adjacent_cells_are_connected() {
        assert!(is_connected(&set(&[(0, 0, 0), (1, 0, 0)])));
        assert!(is_connected(&set(&[(0, 0, 0), (0, -1, 0)])));
    }

    #[test]
    fn two_diagonal_cells_are_not_connected() {
        assert!(!is_connected(&set(&[(0, 0, 0), (1, 1, 0)])));
        assert!(!is_connected(&set(&[(0, 0, 0), (1, 1, 1)])));
    }

    #[test]
    fn l_shape_is_connected() {
        assert!(is_connected(&set(&[(0, 0, 0), (1, 0, 0), (1, 1, 0)])));
    }

    #[test]
    fn isolated_cell_breaks_connectivity() {
        assert!(!is_connected(&set(&[(0, 0, 0), (1, 0, 0), (5, 5, 5)])));
    }

    #[test]
    fn gap_breaks_connectivity() {
        // Two cells on the same axis with a hole between them.
        assert!(!is_connected(&set(&[(0, 0, 0), (2, 0, 0)])));
        // Filling the hole reconnects them.
        assert!(is_connected(&set(&[(0, 0, 0), (1, 0, 0), (2, 0, 0)])));
    }

    #[test]
    fn ring_is_connected() {
        // A 2x2 ring in the xy-plane (every cell has two neighbors).
        assert!(is_connected(&set(&[(0, 0, 0), (1, 0, 0), (1, 1, 0), (0, 1, 0)])));
    }

    #[test]
    fn slice_wrapper_matches_set_version() {
        let cells = [
            CellCoord::new(0, 0, 0),
            CellCoord::new(0, 1, 0),
            CellCoord::new(0, 2, 0),
        ];
        assert!(is_connected_cells(&cells));
        let broken = [CellCoord::new(0, 0, 0), CellCoord::new(0, 2, 0)];
        assert!(!is_connected_cells(&broken));
    }
}
