// Edge routing: one curved outgoing edge per node.
//
// Target assignment starts from a Fisher-Yates permutation of the node ids;
// any node whose assigned target is itself is patched to the next
// permutation slot (circular). A permutation has distinct entries, so the
// next slot can never be the node's own id — no self-loops, and every node
// keeps exactly one outgoing edge. The patched mapping need not stay a
// bijection (a node may receive zero or several incoming edges); the
// invariant enforced is outgoing-degree exactly 1.
//
// Each edge is a cubic Bezier that bulges sideways so that edges sharing
// similar routes do not overlap as straight lines: the control points sit
// at the 20% and 80% points of the chord, offset along the chord normal by
// max(swing_min, chord_length * swing_ratio), to a side chosen at random.
// The curve's terminal point is trimmed by walking back from the target
// center along the direction from the second control point, by exactly the
// node circle's radius, so a rendered arrowhead lands on the circle's
// boundary rather than its center.
//
// Coincident node centers (possible via the layout fallback path) would
// make the chord normal undefined; a fixed fallback normal is used instead
// of dividing by zero.
//
// See also: `layout.rs` for the nodes being routed, `puzzle.rs` which reads
// node 0's outgoing edge as the answer.

use crate::config::PathConfig;
use crate::layout::Node;
use crate::types::NodeId;
use parallax_prng::PuzzleRng;
use serde::{Deserialize, Serialize};

/// A directed curved edge between two nodes.
///
/// `end` is the trimmed terminal point on the target circle's boundary;
/// `start` is the source node's center.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    pub start: [f32; 2],
    pub control1: [f32; 2],
    pub control2: [f32; 2],
    pub end: [f32; 2],
}

impl Edge {
    /// SVG path command for the curve (`M start C c1, c2, end`), the form
    /// the rendering layer draws directly.
    pub fn path_d(&self) -> String {
        format!(
            "M {} {} C {} {}, {} {}, {} {}",
            self.start[0],
            self.start[1],
            self.control1[0],
            self.control1[1],
            self.control2[0],
            self.control2[1],
            self.end[0],
            self.end[1],
        )
    }
}

/// Assign each node exactly one outgoing target (no self-loops) and compute
/// the curve geometry for every edge.
///
/// Panics if fewer than two nodes are given — with one node the only
/// possible edge would be a self-loop.
pub fn route(nodes: &[Node], cfg: &PathConfig, rng: &mut PuzzleRng) -> Vec<Edge> {
    assert!(nodes.len() >= 2, "route: need at least two nodes");

    let mut targets: Vec<NodeId> = nodes.iter().map(|n| n.id).collect();
    rng.shuffle(&mut targets);

    nodes
        .iter()
        .enumerate()
        .map(|(idx, node)| {
            let mut target_id = targets[idx];
            if target_id == node.id {
                // Next slot in the permutation holds a different id.
                target_id = targets[(idx + 1) % targets.len()];
            }
            let target = nodes
                .iter()
                .find(|n| n.id == target_id)
                .expect("target id comes from the node list");
            curve_between(node, target, cfg, rng)
        })
        .collect()
}

/// Compute the cubic Bezier from `source`'s center to the boundary of
/// `target`'s circle.
fn curve_between(source: &Node, target: &Node, cfg: &PathConfig, rng: &mut PuzzleRng) -> Edge {
    let dx = target.x - source.x;
    let dy = target.y - source.y;
    let dist = dx.hypot(dy);

    // Chord normal; falls back to a fixed direction for coincident centers.
    let (nx, ny) = if dist > f32::EPSILON {
        (-dy / dist, dx / dist)
    } else {
        (0.0, 1.0)
    };

    let swing = (dist * cfg.swing_ratio).max(cfg.swing_min);
    let side = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
    let offset_x = nx * swing * side;
    let offset_y = ny * swing * side;

    let control1 = [
        source.x + dx * 0.2 + offset_x,
        source.y + dy * 0.2 + offset_y,
    ];
    let control2 = [
        target.x - dx * 0.2 + offset_x,
        target.y - dy * 0.2 + offset_y,
    ];

    // Walk back from the target center along the approach direction (from
    // the second control point) by the circle radius.
    let vx = target.x - control2[0];
    let vy = target.y - control2[1];
    let v_len = vx.hypot(vy);
    let end = if v_len > f32::EPSILON {
        [
            target.x - vx / v_len * cfg.node_radius,
            target.y - vy / v_len * cfg.node_radius,
        ]
    } else {
        [target.x, target.y]
    };

    Edge {
        from: source.id,
        to: target.id,
        start: [source.x, source.y],
        control1,
        control2,
        end,
    }
}
