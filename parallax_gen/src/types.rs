// Core types shared across the puzzle engine.
//
// Defines the integer lattice coordinate (`CellCoord`), the 6 face-adjacent
// step directions, node identifiers for the 2D path board, and the display
// labels for multiple-choice options. All types derive `Serialize` and
// `Deserialize` so puzzles can be handed to the external rendering layer as
// JSON.
//
// **Critical constraint: determinism.** Cells are always keyed by their
// integer coordinates — never by formatted strings, never by floats — so
// set membership cannot drift with floating-point noise.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

// ---------------------------------------------------------------------------
// Spatial types
// ---------------------------------------------------------------------------

/// A cell position on the 3D integer lattice. Each component is in cell units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellCoord {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

/// The 6 axis-aligned unit steps: ±x, ±y, ±z. Used both for growth and
/// mutation, and for the face-adjacency test in the connectivity check.
pub const FACE_DIRECTIONS: [CellCoord; 6] = [
    CellCoord::new(1, 0, 0),
    CellCoord::new(-1, 0, 0),
    CellCoord::new(0, 1, 0),
    CellCoord::new(0, -1, 0),
    CellCoord::new(0, 0, 1),
    CellCoord::new(0, 0, -1),
];

impl CellCoord {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// The cell one unit away in the given direction.
    pub const fn step(self, dir: CellCoord) -> Self {
        Self::new(self.x + dir.x, self.y + dir.y, self.z + dir.z)
    }

    /// The 6 face-adjacent neighbors of this cell.
    pub fn face_neighbors(self) -> SmallVec<[CellCoord; 6]> {
        FACE_DIRECTIONS.iter().map(|&d| self.step(d)).collect()
    }

    /// Two cells are face-adjacent if they differ by exactly one unit in
    /// exactly one axis.
    pub fn is_face_adjacent(self, other: Self) -> bool {
        let dx = (self.x - other.x).unsigned_abs();
        let dy = (self.y - other.y).unsigned_abs();
        let dz = (self.z - other.z).unsigned_abs();
        dx + dy + dz == 1
    }
}

impl fmt::Display for CellCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

// ---------------------------------------------------------------------------
// Path board identifiers
// ---------------------------------------------------------------------------

/// Compact identifier for a node on the 2D path board. Nodes are numbered
/// 0..count in placement order; the puzzle always starts at node 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Multiple-choice labels
// ---------------------------------------------------------------------------

/// Display label for one of the four answer options of a voxel puzzle.
/// Labels are assigned in display order after the options are shuffled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionLabel {
    A,
    B,
    C,
    D,
}

impl OptionLabel {
    pub const ALL: [OptionLabel; 4] = [Self::A, Self::B, Self::C, Self::D];

    /// Label for display position `index` (0..4). Panics outside that range.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
        }
    }
}

impl fmt::Display for OptionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn face_directions_are_unit_steps() {
        let origin = CellCoord::new(0, 0, 0);
        for dir in FACE_DIRECTIONS {
            assert!(origin.is_face_adjacent(origin.step(dir)), "{dir} is not a unit step");
        }
    }

    #[test]
    fn face_neighbors_count_and_adjacency() {
        let cell = CellCoord::new(3, -1, 7);
        let neighbors = cell.face_neighbors();
        assert_eq!(neighbors.len(), 6);
        for n in &neighbors {
            assert!(cell.is_face_adjacent(*n));
        }
    }

    #[test]
    fn diagonal_is_not_face_adjacent() {
        let a = CellCoord::new(0, 0, 0);
        assert!(!a.is_face_adjacent(CellCoord::new(1, 1, 0)));
        assert!(!a.is_face_adjacent(CellCoord::new(1, 1, 1)));
        assert!(!a.is_face_adjacent(CellCoord::new(0, 0, 2)));
        assert!(!a.is_face_adjacent(a));
    }

    #[test]
    fn labels_in_display_order() {
        assert_eq!(OptionLabel::from_index(0), OptionLabel::A);
        assert_eq!(OptionLabel::from_index(3), OptionLabel::D);
        assert_eq!(OptionLabel::C.to_string(), "C");
    }

    #[test]
    fn cell_coord_ordering() {
        // CellCoord has a total order (usable as BTreeMap key and for
        // canonical sorting).
        assert!(CellCoord::new(0, 0, 0) < CellCoord::new(1, 0, 0));
        assert!(CellCoord::new(0, 0, 1) < CellCoord::new(0, 1, 0));
    }
}
