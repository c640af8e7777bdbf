// The polycube structure type.
//
// A `Structure` is an ordered sequence of lattice cells with one hard
// invariant: the cells always form a single face-connected component. The
// cells are stored in exact integer coordinates internally; collaborators
// (the rendering layer) see the canonical *centered* form, where the
// centroid is subtracted from every cell, so structures are comparable
// independent of absolute grid position. Centering happens only at the
// serialization boundary — all generation math stays on the integer lattice
// to prevent floating-point drift from accumulating across mutation rounds.
//
// Shape equality (`same_shape`) normalizes by the minimum corner and sorts,
// which is translation-invariant and exact, avoiding float comparisons.
//
// See also: `growth.rs` and `mutate.rs` which produce structures,
// `connectivity.rs` for the invariant check.

use crate::connectivity::is_connected_cells;
use crate::types::CellCoord;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A connected polycube on the integer lattice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Structure {
    cells: Vec<CellCoord>,
}

impl Structure {
    /// Build a structure from lattice cells.
    ///
    /// Panics if the cells are not face-connected — disconnection is a
    /// defect, never a degraded outcome (unlike the bounded-retry fallbacks
    /// elsewhere in the engine).
    pub fn new(cells: Vec<CellCoord>) -> Self {
        assert!(
            is_connected_cells(&cells),
            "structure cells must form a single face-connected component"
        );
        Self { cells }
    }

    /// Rebuild a structure from centered float cells (the serialized form).
    ///
    /// Cells are snapped back to the lattice by rounding relative to the
    /// first cell; centering only shifts all cells by the same fractional
    /// offset, so the relative coordinates are exact integers.
    ///
    /// Returns `None` if the input is empty or the snapped cells are not
    /// connected.
    pub fn from_centered_cells(cells: &[[f32; 3]]) -> Option<Self> {
        let first = *cells.first()?;
        let snapped: Vec<CellCoord> = cells
            .iter()
            .map(|c| {
                CellCoord::new(
                    (c[0] - first[0]).round() as i32,
                    (c[1] - first[1]).round() as i32,
                    (c[2] - first[2]).round() as i32,
                )
            })
            .collect();
        if is_connected_cells(&snapped) {
            Some(Self { cells: snapped })
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The cells in lattice coordinates, in generation order.
    pub fn cells(&self) -> &[CellCoord] {
        &self.cells
    }

    /// Mean of the cell coordinates. Zero for the empty structure.
    pub fn centroid(&self) -> [f32; 3] {
        if self.cells.is_empty() {
            return [0.0; 3];
        }
        let mut sum = [0.0f32; 3];
        for c in &self.cells {
            sum[0] += c.x as f32;
            sum[1] += c.y as f32;
            sum[2] += c.z as f32;
        }
        let n = self.cells.len() as f32;
        [sum[0] / n, sum[1] / n, sum[2] / n]
    }

    /// The canonical centered form: centroid subtracted from every cell.
    /// This is what the rendering layer consumes.
    pub fn centered_cells(&self) -> Vec<[f32; 3]> {
        let center = self.centroid();
        self.cells
            .iter()
            .map(|c| {
                [
                    c.x as f32 - center[0],
                    c.y as f32 - center[1],
                    c.z as f32 - center[2],
                ]
            })
            .collect()
    }

    /// Translation-invariant canonical form: cells shifted so the minimum
    /// corner is the origin, sorted. Exact integer comparison, no floats.
    pub fn canonical_cells(&self) -> Vec<CellCoord> {
        let min_x = self.cells.iter().map(|c| c.x).min().unwrap_or(0);
        let min_y = self.cells.iter().map(|c| c.y).min().unwrap_or(0);
        let min_z = self.cells.iter().map(|c| c.z).min().unwrap_or(0);
        let mut canonical: Vec<CellCoord> = self
            .cells
            .iter()
            .map(|c| CellCoord::new(c.x - min_x, c.y - min_y, c.z - min_z))
            .collect();
        canonical.sort_unstable();
        canonical
    }

    /// Cell-set equality up to translation. Two structures that occupy the
    /// same cells relative to each other are the same shape regardless of
    /// where they sit on the lattice or in what order they were grown.
    pub fn same_shape(&self, other: &Structure) -> bool {
        self.len() == other.len() && self.canonical_cells() == other.canonical_cells()
    }
}

// Custom serde: the wire form is the centered float cells, matching what the
// rendering layer consumes. Deserialization snaps back to the lattice.
impl Serialize for Structure {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.centered_cells().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Structure {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let cells = Vec::<[f32; 3]>::deserialize(deserializer)?;
        Structure::from_centered_cells(&cells)
            .ok_or_else(|| D::Error::custom("structure cells must be non-empty and connected"))
    }
}
