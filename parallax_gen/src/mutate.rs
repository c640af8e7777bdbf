// Bounded structure mutation — "similar but different" distractors.
//
// Each mutation round removes one cell whose removal keeps the remainder
// connected, then adds one unoccupied face-neighbor of a random cell. A few
// rounds of this produces a structure close enough to the reference to be a
// plausible answer option but (almost always) a different cell set.
//
// Cell count is strictly preserved: if no cell can be removed (structures
// below two cells), the round is skipped entirely; if the addition
// half-step exhausts its attempt budget, the removed cell is restored —
// always legal, since the remaining set is connected and the old position
// is unoccupied. So `mutate` returns a structure with exactly the
// reference's cell count, and connectivity holds as a hard invariant with
// no fallback.
//
// All arithmetic stays on the integer lattice (the reference `Structure` is
// lattice-exact by construction), so no floating drift can accumulate
// across rounds.
//
// See also: `connectivity.rs` which is called once per removal candidate,
// `puzzle.rs` which builds three distractors per voxel puzzle.

use crate::config::VoxelConfig;
use crate::connectivity::is_connected;
use crate::structure::Structure;
use crate::types::{CellCoord, FACE_DIRECTIONS};
use parallax_prng::PuzzleRng;
use rustc_hash::FxHashSet;

/// Apply `steps` remove/add rounds to a copy of `reference`.
///
/// The result is always connected and always has the reference's cell count.
pub fn mutate(
    reference: &Structure,
    steps: u32,
    cfg: &VoxelConfig,
    rng: &mut PuzzleRng,
) -> Structure {
    let mut cells: Vec<CellCoord> = reference.cells().to_vec();
    let mut occupied: FxHashSet<CellCoord> = cells.iter().copied().collect();

    for _ in 0..steps {
        // Removal half-step: enumerate every cell whose removal keeps the
        // remaining cells connected. Below two cells there is nothing to
        // swap, so the whole round is skipped.
        if cells.len() < 2 {
            continue;
        }
        let mut removable: Vec<usize> = Vec::new();
        for (i, &cell) in cells.iter().enumerate() {
            occupied.remove(&cell);
            if is_connected(&occupied) {
                removable.push(i);
            }
            occupied.insert(cell);
        }
        if removable.is_empty() {
            // Cannot happen for face-connected sets of >= 2 cells (every
            // connected graph has at least two non-cut vertices), but skip
            // rather than panic if it ever did.
            continue;
        }

        let remove_idx = *rng.choose(&removable);
        let removed = cells.swap_remove(remove_idx);
        occupied.remove(&removed);

        // Addition half-step: accept the first unoccupied face-neighbor of
        // a random cell, bounded to `add_attempts` draws.
        let mut added = false;
        for _ in 0..cfg.add_attempts {
            let source = *rng.choose(&cells);
            let dir = *rng.choose(&FACE_DIRECTIONS);
            let candidate = source.step(dir);
            if occupied.insert(candidate) {
                cells.push(candidate);
                added = true;
                break;
            }
        }
        if !added {
            // Budget exhausted: restore the removed cell so the count holds.
            occupied.insert(removed);
            cells.push(removed);
        }
    }

    Structure::new(cells)
}
