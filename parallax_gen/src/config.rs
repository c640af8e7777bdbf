// Data-driven generation configuration.
//
// All tunable parameters live here in `GenConfig`, with `Default` producing
// the reference configuration (10-cell structures, 3 mutation steps,
// 600x600 board with 20 nodes, and so on). The generators
// never use magic numbers — they read from the config. Configs are plain
// serde structs so a deployment can load overrides from JSON without
// recompilation.
//
// See also: `puzzle.rs` which threads the config through the generators,
// `viewpoint.rs` / `layout.rs` / `edges.rs` / `mutate.rs` for what each
// parameter controls.

use serde::{Deserialize, Serialize};

/// Top-level configuration: one section per puzzle modality.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenConfig {
    pub voxel: VoxelConfig,
    pub path: PathConfig,
}

impl GenConfig {
    /// Parse a config from JSON. Missing fields fall back to the reference
    /// configuration.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Parameters for the 3D mental-rotation puzzle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VoxelConfig {
    /// Number of cells in every structure (reference and distractors).
    pub cell_count: usize,
    /// Remove/add rounds applied to the reference to build each distractor.
    pub mutation_steps: u32,
    /// Attempt budget for the addition half-step of a mutation round.
    pub add_attempts: u32,
    /// Camera sampling parameters shared by all four options.
    pub viewpoint: ViewpointConfig,
}

impl Default for VoxelConfig {
    fn default() -> Self {
        Self {
            cell_count: 10,
            mutation_steps: 3,
            add_attempts: 50,
            viewpoint: ViewpointConfig::default(),
        }
    }
}

/// Parameters for sampling a camera position on a sphere around the
/// structure.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewpointConfig {
    /// The prompt view's camera position. Sampled viewpoints must differ
    /// from this direction by more than `min_angle`.
    pub reference: [f32; 3],
    /// Radius of the camera sphere.
    pub radius: f32,
    /// Minimum angular separation (radians) from the reference direction.
    pub min_angle: f32,
    /// Rejection-sampling attempt budget before the last draw is accepted
    /// regardless of the angular constraint.
    pub max_attempts: u32,
}

impl Default for ViewpointConfig {
    fn default() -> Self {
        Self {
            reference: [10.0, 10.0, 10.0],
            radius: 14.0,
            min_angle: 0.8,
            max_attempts: 100,
        }
    }
}

/// Parameters for the 2D path-integration puzzle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathConfig {
    /// Number of nodes on the board.
    pub node_count: usize,
    /// Radius of each node's circle; edge curves terminate on this boundary.
    pub node_radius: f32,
    /// Board dimensions.
    pub board_width: f32,
    pub board_height: f32,
    /// Inset from the board boundary — nodes are never placed flush against
    /// the edge.
    pub margin: f32,
    /// Minimum pairwise distance between node centers.
    pub min_separation: f32,
    /// Placement attempt budget per node before the last candidate is
    /// accepted regardless of separation.
    pub place_attempts: u32,
    /// Minimum sideways offset of the Bezier control points, so short edges
    /// still visibly curve.
    pub swing_min: f32,
    /// Sideways offset as a fraction of the edge's chord length.
    pub swing_ratio: f32,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            node_count: 20,
            node_radius: 16.0,
            board_width: 600.0,
            board_height: 600.0,
            margin: 50.0,
            min_separation: 60.0,
            place_attempts: 200,
            swing_min: 60.0,
            swing_ratio: 0.6,
        }
    }
}
