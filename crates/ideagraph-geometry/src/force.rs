//! Force-directed relaxation for satellite nodes around a pinned center
//!
//! The pinned center itself is not simulated: callers place it at the origin
//! and hand the satellites to [`relax`]. The result is re-centered on its own
//! centroid and pushed radially outward so no satellite sits under the center.

use super::common::{centroid, Point};
use std::f64::consts::{FRAC_PI_2, TAU};

/// Force simulation configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ForceConfig {
    /// Number of iterations (fixed, no convergence test)
    pub iterations: usize,
    /// Repulsion only acts between points closer than this
    pub min_distance: f64,
    /// Inverse-square repulsion constant
    pub repulsion: f64,
    /// Linear pull factor toward the centroid
    pub centroid_pull: f64,
    /// Fraction of the accumulated displacement applied per iteration
    pub damping: f64,
    /// Distance between neighbouring points of the initial grid
    pub seed_spacing: f64,
    /// Radial distance added to every point after re-centering
    pub push_distance: f64,
}

impl Default for ForceConfig {
    fn default() -> Self {
        Self {
            iterations: 50,
            min_distance: 200.0,
            repulsion: 800_000.0,
            centroid_pull: 0.02,
            damping: 0.5,
            seed_spacing: 160.0,
            push_distance: 220.0,
        }
    }
}

/// Initial placement: a square-ish grid centered on the origin, row-major.
pub fn seed_grid(count: usize, spacing: f64) -> Vec<Point> {
    if count == 0 {
        return Vec::new();
    }
    let columns = (count as f64).sqrt().ceil() as usize;
    let rows = count.div_ceil(columns);
    let x_offset = (columns - 1) as f64 / 2.0;
    let y_offset = (rows - 1) as f64 / 2.0;

    (0..count)
        .map(|i| {
            let col = (i % columns) as f64;
            let row = (i / columns) as f64;
            Point::new((col - x_offset) * spacing, (row - y_offset) * spacing)
        })
        .collect()
}

/// Place `count` satellites around a center pinned at the origin.
///
/// Output order matches input order. Deterministic for a given `count` and
/// configuration.
pub fn relax(count: usize, config: &ForceConfig) -> Vec<Point> {
    if count == 0 {
        return Vec::new();
    }

    let mut positions = seed_grid(count, config.seed_spacing);
    let mut displacement = vec![Point::ORIGIN; count];

    for _ in 0..config.iterations {
        displacement.fill(Point::ORIGIN);

        for i in 0..count {
            for j in (i + 1)..count {
                let delta = positions[i] - positions[j];
                let distance = delta.length();
                if distance >= config.min_distance {
                    continue;
                }
                let direction = if distance > f64::EPSILON {
                    delta / distance
                } else {
                    separation_direction(i, j)
                };
                // Floor keeps the force finite for coincident points
                let d = distance.max(1.0);
                let force = direction * (config.repulsion / (d * d));
                displacement[i] += force;
                displacement[j] -= force;
            }
        }

        let center = centroid(&positions);
        for (position, push) in positions.iter_mut().zip(displacement.iter()) {
            let pull = (center - *position) * config.centroid_pull;
            *position += (*push + pull) * config.damping;
        }
    }

    let center = centroid(&positions);
    positions
        .iter()
        .enumerate()
        .map(|(i, p)| push_outward(*p - center, i, count, config.push_distance))
        .collect()
}

fn push_outward(offset: Point, index: usize, count: usize, push: f64) -> Point {
    let length = offset.length();
    if length > f64::EPSILON {
        offset + offset / length * push
    } else {
        // Sitting exactly on the centroid: spread by index, starting at the top
        Point::polar(push, TAU * index as f64 / count as f64 - FRAC_PI_2)
    }
}

fn separation_direction(i: usize, j: usize) -> Point {
    let angle = (i * 31 + j * 17) as f64;
    Point::polar(1.0, angle)
}
