// Puzzle composition — the engine's top-level products.
//
// A puzzle request picks a modality (3D mental rotation or 2D path
// integration) and composes the generator modules into a complete,
// self-contained puzzle value. Puzzles are immutable once returned, carry
// their own answer key, and have no identity across rounds — every round
// builds a fresh one and discards the last.
//
// Voxel puzzle: one grown reference structure (the prompt), three
// distractors mutated from it, one sampled camera viewpoint per option,
// options shuffled into display order with labels A-D. Exactly one option
// is marked correct and wraps the unmutated reference.
//
// Path puzzle: placed nodes, one outgoing curved edge per node, start fixed
// at node 0, answer = the destination of node 0's outgoing edge.
//
// See also: `growth.rs`, `mutate.rs`, `viewpoint.rs`, `layout.rs`,
// `edges.rs` for the parts; `judge.rs` for grading a guess against these
// types; `answer_key.rs` for the persisted answer-key artifact.

use crate::config::{GenConfig, PathConfig, VoxelConfig};
use crate::edges::{Edge, route};
use crate::growth::grow;
use crate::layout::{Node, place_nodes};
use crate::mutate::mutate;
use crate::structure::Structure;
use crate::types::{NodeId, OptionLabel};
use crate::viewpoint::{Viewpoint, sample_viewpoint};
use parallax_prng::PuzzleRng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of answer options in a voxel puzzle (one per `OptionLabel`).
pub const OPTION_COUNT: usize = 4;

/// Which kind of puzzle a round presents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Modality {
    #[serde(rename = "3d")]
    ThreeD,
    #[serde(rename = "2d")]
    TwoD,
}

impl Modality {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ThreeD => "3d",
            Self::TwoD => "2d",
        }
    }
}

impl fmt::Display for Modality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One answer option of a voxel puzzle.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PuzzleOption {
    pub label: OptionLabel,
    pub structure: Structure,
    pub is_correct: bool,
    pub viewpoint: Viewpoint,
}

/// A complete 3D mental-rotation puzzle.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VoxelPuzzle {
    /// The reference structure shown in the prompt view.
    pub prompt: Structure,
    /// The four shuffled answer options, labels in display order.
    pub options: Vec<PuzzleOption>,
}

impl VoxelPuzzle {
    /// The single option marked correct.
    pub fn correct_option(&self) -> &PuzzleOption {
        self.options
            .iter()
            .find(|o| o.is_correct)
            .expect("voxel puzzle always has exactly one correct option")
    }

    /// Display label of the correct option.
    pub fn answer_label(&self) -> OptionLabel {
        self.correct_option().label
    }
}

/// A complete 2D path-integration puzzle.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PathPuzzle {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    /// The node the player traces from. Always node 0.
    pub start_id: NodeId,
    /// Destination of the start node's one outgoing edge.
    pub answer_id: NodeId,
}

/// A puzzle of either modality, tagged for the rendering layer.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "modality")]
pub enum Puzzle {
    #[serde(rename = "3d")]
    Voxel(VoxelPuzzle),
    #[serde(rename = "2d")]
    Path(PathPuzzle),
}

impl Puzzle {
    pub fn modality(&self) -> Modality {
        match self {
            Self::Voxel(_) => Modality::ThreeD,
            Self::Path(_) => Modality::TwoD,
        }
    }

    /// The answer as the external harness records it: an option label for
    /// 3D, a node id for 2D.
    pub fn answer_text(&self) -> String {
        match self {
            Self::Voxel(p) => p.answer_label().to_string(),
            Self::Path(p) => p.answer_id.to_string(),
        }
    }
}

/// Generate a complete voxel puzzle: prompt, three distractors, shuffled
/// options with per-option viewpoints.
pub fn generate_voxel_puzzle(cfg: &VoxelConfig, rng: &mut PuzzleRng) -> VoxelPuzzle {
    let prompt = grow(cfg.cell_count, rng);

    let mut slots: Vec<(Structure, bool)> = Vec::with_capacity(OPTION_COUNT);
    slots.push((prompt.clone(), true));
    for _ in 0..OPTION_COUNT - 1 {
        slots.push((mutate(&prompt, cfg.mutation_steps, cfg, rng), false));
    }
    rng.shuffle(&mut slots);

    let options = slots
        .into_iter()
        .enumerate()
        .map(|(i, (structure, is_correct))| PuzzleOption {
            label: OptionLabel::from_index(i),
            structure,
            is_correct,
            viewpoint: sample_viewpoint(&cfg.viewpoint, rng).value,
        })
        .collect();

    VoxelPuzzle { prompt, options }
}

/// Generate a complete path puzzle: nodes, one outgoing edge per node, and
/// the destination reachable from node 0.
pub fn generate_path_puzzle(cfg: &PathConfig, rng: &mut PuzzleRng) -> PathPuzzle {
    let nodes = place_nodes(cfg, rng);
    let edges = route(&nodes, cfg, rng);
    let start_id = NodeId(0);
    let answer_id = edges
        .iter()
        .find(|e| e.from == start_id)
        .expect("every node has exactly one outgoing edge")
        .to;

    PathPuzzle {
        nodes,
        edges,
        start_id,
        answer_id,
    }
}

/// Generate a puzzle of a uniformly random modality.
pub fn generate_puzzle(cfg: &GenConfig, rng: &mut PuzzleRng) -> Puzzle {
    if rng.random_bool(0.5) {
        Puzzle::Voxel(generate_voxel_puzzle(&cfg.voxel, rng))
    } else {
        Puzzle::Path(generate_path_puzzle(&cfg.path, rng))
    }
}
