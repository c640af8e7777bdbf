// Camera viewpoint sampling on a sphere.
//
// Each answer option of a voxel puzzle is rendered from its own camera
// position, sampled on a sphere of fixed radius around the structure and
// required to differ from the prompt view's direction by more than a
// minimum angle — otherwise the "rotated" option would look like the
// prompt. Sampling is rejection-based with the engine-wide
// bounded-retry-with-fallback policy: after the attempt budget the last
// draw is returned even if it violates the angular constraint. `Sampled`
// reports which path was taken.
//
// Spherical convention is y-up: `phi` is the polar angle from +y, `theta`
// the azimuth around the y axis. Azimuth is uniform in [0, 2pi), polar
// angle uniform in [0, pi).
//
// See also: `sample.rs` for the retry combinator, `puzzle.rs` which samples
// one viewpoint per option.

use crate::config::ViewpointConfig;
use crate::sample::{Sampled, sample_until};
use parallax_prng::PuzzleRng;
use serde::{Deserialize, Serialize};
use std::f32::consts::{PI, TAU};

/// A camera position on the viewing sphere around the structure's centroid.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewpoint {
    pub position: [f32; 3],
}

/// Sample a viewpoint whose angular separation from `cfg.reference` exceeds
/// `cfg.min_angle`, falling back to the last draw after `cfg.max_attempts`.
pub fn sample_viewpoint(cfg: &ViewpointConfig, rng: &mut PuzzleRng) -> Sampled<Viewpoint> {
    sample_until(
        cfg.max_attempts,
        || {
            let theta = rng.range_f32(0.0, TAU);
            let phi = rng.range_f32(0.0, PI);
            Viewpoint {
                position: spherical_to_cartesian(cfg.radius, phi, theta),
            }
        },
        |v| angle_between(v.position, cfg.reference) > cfg.min_angle,
    )
}

/// Convert y-up spherical coordinates to cartesian.
fn spherical_to_cartesian(radius: f32, phi: f32, theta: f32) -> [f32; 3] {
    let sin_phi = phi.sin();
    [
        radius * sin_phi * theta.sin(),
        radius * phi.cos(),
        radius * sin_phi * theta.cos(),
    ]
}

/// Angle in radians between two directions (dot product of unit vectors,
/// clamped before the arccosine so float noise can't produce NaN).
///
/// Zero-length inputs have no direction; the angle is reported as zero.
pub fn angle_between(a: [f32; 3], b: [f32; 3]) -> f32 {
    let len_a = (a[0] * a[0] + a[1] * a[1] + a[2] * a[2]).sqrt();
    let len_b = (b[0] * b[0] + b[1] * b[1] + b[2] * b[2]).sqrt();
    if len_a == 0.0 || len_b == 0.0 {
        return 0.0;
    }
    let dot = a[0] * b[0] + a[1] * b[1] + a[2] * b[2];
    (dot / (len_a * len_b)).clamp(-1.0, 1.0).acos()
}
