// Node placement for the 2D path board.
//
// Places a fixed number of circle nodes in a bounded board so that no two
// circles crowd each other: each position is rejection-sampled uniformly
// within the margin-inset bounds and accepted only if it keeps a minimum
// distance to every already-placed node. Per node the attempt budget is
// bounded (engine-wide bounded-retry-with-fallback policy): once exhausted,
// the last candidate is accepted even if it sits too close. That keeps
// placement total — a pathological draw sequence degrades spacing, never
// terminates the generator.
//
// Nodes are numbered 0..count in placement order; node 0 is always the
// puzzle's designated start.
//
// See also: `sample.rs` for the retry combinator, `edges.rs` which routes
// one outgoing edge per placed node.

use crate::config::PathConfig;
use crate::sample::sample_until;
use crate::types::NodeId;
use parallax_prng::PuzzleRng;
use serde::{Deserialize, Serialize};

/// A circle node on the path board.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub x: f32,
    pub y: f32,
}

impl Node {
    /// Euclidean distance between two node centers.
    pub fn distance_to(&self, other: &Node) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Place `cfg.node_count` nodes within the margin-inset board bounds,
/// keeping pairwise separation >= `cfg.min_separation` on a best-effort
/// basis (`cfg.place_attempts` draws per node).
pub fn place_nodes(cfg: &PathConfig, rng: &mut PuzzleRng) -> Vec<Node> {
    let mut nodes: Vec<Node> = Vec::with_capacity(cfg.node_count);

    for i in 0..cfg.node_count {
        let id = NodeId(i as u32);
        let placed = sample_until(
            cfg.place_attempts,
            || Node {
                id,
                x: rng.range_f32(cfg.margin, cfg.board_width - cfg.margin),
                y: rng.range_f32(cfg.margin, cfg.board_height - cfg.margin),
            },
            |candidate| {
                nodes
                    .iter()
                    .all(|n| n.distance_to(candidate) >= cfg.min_separation)
            },
        );
        nodes.push(placed.value);
    }

    nodes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn places_exact_node_count_with_sequential_ids() {
        let cfg = PathConfig::default();
        let mut rng = PuzzleRng::new(42);
        let nodes = place_nodes(&cfg, &mut rng);
        assert_eq!(nodes.len(), cfg.node_count);
        for (i, n) in nodes.iter().enumerate() {
            assert_eq!(n.id, NodeId(i as u32));
        }
    }

    #[test]
    fn all_nodes_within_inset_bounds() {
        let cfg = PathConfig::default();
        let mut rng = PuzzleRng::new(7);
        for _ in 0..50 {
            for n in place_nodes(&cfg, &mut rng) {
                assert!(n.x >= cfg.margin && n.x <= cfg.board_width - cfg.margin);
                assert!(n.y >= cfg.margin && n.y <= cfg.board_height - cfg.margin);
            }
        }
    }

    #[test]
    fn separation_holds_in_nearly_all_runs() {
        let cfg = PathConfig::default();
        let mut rng = PuzzleRng::new(11);
        let runs = 100;
        let mut fully_separated = 0;
        for _ in 0..runs {
            let nodes = place_nodes(&cfg, &mut rng);
            let ok = nodes.iter().enumerate().all(|(i, a)| {
                nodes[i + 1..]
                    .iter()
                    .all(|b| a.distance_to(b) >= cfg.min_separation)
            });
            if ok {
                fully_separated += 1;
            }
        }
        // 20 circles with 60-unit spacing in a 500x500 inset is a sparse
        // packing; the 200-attempt budget should essentially always hold.
        assert!(
            fully_separated >= runs * 99 / 100,
            "only {fully_separated}/{runs} runs fully separated"
        );
    }

    #[test]
    fn overcrowded_board_still_terminates_and_fills() {
        // Deliberately impossible: 20 nodes with 60-unit separation inside
        // an 80x80 inset. The fallback path must still place every node
        // within bounds.
        let cfg = PathConfig {
            board_width: 100.0,
            board_height: 100.0,
            margin: 10.0,
            place_attempts: 5,
            ..PathConfig::default()
        };
        let mut rng = PuzzleRng::new(3);
        let nodes = place_nodes(&cfg, &mut rng);
        assert_eq!(nodes.len(), cfg.node_count);
        for n in &nodes {
            assert!(n.x >= cfg.margin && n.x <= cfg.board_width - cfg.margin);
            assert!(n.y >= cfg.margin && n.y <= cfg.board_height - cfg.margin);
        }
    }

    #[test]
    fn deterministic_given_seed() {
        let cfg = PathConfig::default();
        let mut a = PuzzleRng::new(99);
        let mut b = PuzzleRng::new(99);
        assert_eq!(place_nodes(&cfg, &mut a), place_nodes(&cfg, &mut b));
    }
}
