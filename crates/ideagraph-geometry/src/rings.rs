//! Ring and tier placement

use super::common::Point;
use std::f64::consts::{FRAC_PI_2, TAU};

/// Point `index` of `count` evenly spaced points on a ring, starting at the top.
pub fn ring_position(radius: f64, index: usize, count: usize) -> Point {
    if count == 0 || radius == 0.0 {
        return Point::ORIGIN;
    }
    Point::polar(radius, TAU * index as f64 / count as f64 - FRAC_PI_2)
}

/// Capacity of concentric ring `ring`: 1, 4, 6, 8, 10, ...
pub fn ring_capacity(ring: usize) -> usize {
    match ring {
        0 => 1,
        r => 2 * r + 2,
    }
}

/// Rank-tiered placement: rank 0 at the origin, the next `inner_capacity`
/// ranks on the inner ring, everything else on the outer ring. Each ring is
/// evenly spaced over the points it actually holds.
pub fn tiered_rings(
    count: usize,
    inner_capacity: usize,
    inner_radius: f64,
    outer_radius: f64,
) -> Vec<Point> {
    if count == 0 {
        return Vec::new();
    }
    let inner = inner_capacity.min(count - 1);
    let outer = count - 1 - inner;

    let mut points = Vec::with_capacity(count);
    points.push(Point::ORIGIN);
    points.extend((0..inner).map(|i| ring_position(inner_radius, i, inner)));
    points.extend((0..outer).map(|i| ring_position(outer_radius, i, outer)));
    points
}

/// Concentric rings with capacities from [`ring_capacity`] and radius
/// `ring * spacing`. Points are assigned in order; slots are spaced by ring
/// capacity, so the last ring may be left under-filled.
pub fn concentric_rings(count: usize, spacing: f64) -> Vec<Point> {
    let mut points = Vec::with_capacity(count);
    let mut ring = 0;
    while points.len() < count {
        let capacity = ring_capacity(ring);
        let radius = ring as f64 * spacing;
        let take = capacity.min(count - points.len());
        points.extend((0..take).map(|slot| ring_position(radius, slot, capacity)));
        ring += 1;
    }
    points
}
