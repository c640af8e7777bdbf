// parallax_gen — procedural spatial-reasoning puzzle generation.
//
// This crate contains all generation logic for the Parallax benchmark: 3D
// polycube structures with visually-similar distractors for the
// mental-rotation task, and 2D directed path boards with non-overlapping
// nodes and smooth curved edges for the path-integration task. It has zero
// rendering dependencies and runs headless; the rendering layer and game
// controller are external consumers of the serde-serializable puzzle types.
//
// Module overview:
// - `types.rs`:        CellCoord, face directions, NodeId, option labels.
// - `structure.rs`:    Connected polycube type; centered serialization form.
// - `connectivity.rs`: Face-adjacency connectivity check (iterative DFS).
// - `growth.rs`:       Random-walk polycube growth, connected by construction.
// - `mutate.rs`:       Remove/add mutation rounds for distractor structures.
// - `viewpoint.rs`:    Camera sampling on a sphere with a minimum angular
//                      separation from the prompt view.
// - `layout.rs`:       Node placement with minimum pairwise separation.
// - `edges.rs`:        Target assignment (no self-loops) + cubic Bezier
//                      geometry with boundary-trimmed endpoints.
// - `puzzle.rs`:       VoxelPuzzle / PathPuzzle composition.
// - `judge.rs`:        Grading a guess against a puzzle's answer.
// - `answer_key.rs`:   The persisted `<id>: <answer>` key-file format.
// - `sample.rs`:       Bounded rejection sampling (`sample_until`).
// - `config.rs`:       GenConfig — every tunable parameter, JSON-loadable.
//
// Generation is synchronous and allocation-local: each call builds its
// puzzle from scratch and shares no state with other calls, so independent
// requests can run on independent threads with per-call RNGs.
//
// **Critical constraint: determinism.** All randomness comes from a seeded
// xoshiro256++ PRNG (re-exported from `parallax_prng`) passed explicitly
// into every generator. No global RNG, no OS entropy, and no hash-map
// iteration order in any output-affecting path — a seed fully identifies a
// puzzle.

pub mod answer_key;
pub mod config;
pub mod connectivity;
pub mod edges;
pub mod growth;
pub mod judge;
pub mod layout;
pub mod mutate;
pub mod puzzle;
pub use parallax_prng as prng;
pub mod sample;
pub mod structure;
pub mod types;
pub mod viewpoint;
