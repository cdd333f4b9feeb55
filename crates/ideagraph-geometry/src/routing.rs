//! Edge handle selection
//!
//! Each node exposes four fixed anchor handles. An edge leaves its source on
//! the side facing the target and enters the target on the side facing the
//! source, picked from the angle between the endpoints quantized to four
//! 90° sectors.

use super::common::Point;
use std::f64::consts::FRAC_PI_4;
use std::fmt;

/// One of the four attachment points of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Handle {
    Top,
    Right,
    Bottom,
    Left,
}

impl Handle {
    pub fn as_str(&self) -> &'static str {
        match self {
            Handle::Top => "top",
            Handle::Right => "right",
            Handle::Bottom => "bottom",
            Handle::Left => "left",
        }
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Quantized direction from source to target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sector {
    Right = 0,
    Bottom = 1,
    Left = 2,
    Top = 3,
}

/// (source exit, target entry) per sector
const HANDLES: [(Handle, Handle); 4] = [
    (Handle::Right, Handle::Left),
    (Handle::Bottom, Handle::Top),
    (Handle::Left, Handle::Right),
    (Handle::Top, Handle::Bottom),
];

impl Sector {
    /// Sector of the direction from `source` to `target`. `y` grows downward,
    /// so a positive angle points to the bottom.
    pub fn between(source: Point, target: Point) -> Self {
        let angle = (target - source).angle();
        if (-FRAC_PI_4..FRAC_PI_4).contains(&angle) {
            Sector::Right
        } else if (FRAC_PI_4..3.0 * FRAC_PI_4).contains(&angle) {
            Sector::Bottom
        } else if (-3.0 * FRAC_PI_4..-FRAC_PI_4).contains(&angle) {
            Sector::Top
        } else {
            Sector::Left
        }
    }

    pub fn handles(self) -> (Handle, Handle) {
        HANDLES[self as usize]
    }
}

/// Source and target handles for an edge between two node positions.
pub fn route(source: Point, target: Point) -> (Handle, Handle) {
    Sector::between(source, target).handles()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cardinal_directions() {
        let o = Point::ORIGIN;
        assert_eq!(route(o, Point::new(10.0, 0.0)), (Handle::Right, Handle::Left));
        assert_eq!(route(o, Point::new(0.0, 10.0)), (Handle::Bottom, Handle::Top));
        assert_eq!(route(o, Point::new(-10.0, 0.0)), (Handle::Left, Handle::Right));
        assert_eq!(route(o, Point::new(0.0, -10.0)), (Handle::Top, Handle::Bottom));
    }

    #[test]
    fn test_diagonals() {
        let o = Point::ORIGIN;
        assert_eq!(Sector::between(o, Point::new(10.0, 9.0)), Sector::Right);
        assert_eq!(Sector::between(o, Point::new(9.0, 10.0)), Sector::Bottom);
        assert_eq!(Sector::between(o, Point::new(10.0, -9.0)), Sector::Right);
        assert_eq!(Sector::between(o, Point::new(-9.0, -10.0)), Sector::Top);
        assert_eq!(Sector::between(o, Point::new(-10.0, 9.0)), Sector::Left);
    }

    #[test]
    fn test_coincident_points() {
        let p = Point::new(3.0, 3.0);
        assert_eq!(route(p, p), (Handle::Right, Handle::Left));
    }

    #[test]
    fn test_reverse_edge_mirrors_handles() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(40.0, 5.0);
        let (s, t) = route(a, b);
        let (rs, rt) = route(b, a);
        assert_eq!((s, t), (rt, rs));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_handle_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Handle::Bottom).unwrap(), "\"bottom\"");
    }
}
