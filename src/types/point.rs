//! Struct definitions and implementations for [`Point`].
//!
//! A [`Point`] is the position of a [`Node`](super::node::Node) on the
//! drawing plane. Coordinates are plain screen units with the origin in
//! the bottom left corner, the same convention the generator uses when
//! placing the start and end nodes.

use serde::{Deserialize, Serialize};
use vecmath::{vec2_len, vec2_sub, Vector2};

/// An immutable 2D coordinate.
///
/// Moving a node replaces its `Point` rather than mutating it.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Creates a new point.
    pub const fn new(x: f32, y: f32) -> Point {
        Point { x, y }
    }

    /// Euclidean distance between two points.
    pub fn distance_to(&self, other: &Point) -> f32 {
        vec2_len(vec2_sub(self.as_array(), other.as_array()))
    }

    /// Returns the point as a `[x, y]` vector, the form renderers and
    /// `vecmath` expect.
    pub fn as_array(&self) -> Vector2<f32> {
        [self.x, self.y]
    }
}

impl From<Vector2<f32>> for Point {
    fn from(v: Vector2<f32>) -> Self {
        Point::new(v[0], v[1])
    }
}

#[cfg(test)]
mod point_tests {
    use super::*;

    #[test]
    fn test_distance_pythagorean() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.distance_to(&b), 5.0);
        assert_eq!(b.distance_to(&a), 5.0);
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        let a = Point::new(12.5, -7.0);
        assert_eq!(a.distance_to(&a), 0.0);
    }

    #[test]
    fn test_array_conversion() {
        let p = Point::from([1.0, 2.0]);
        assert_eq!(p, Point::new(1.0, 2.0));
        assert_eq!(p.as_array(), [1.0, 2.0]);
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_string(&Point::new(1.5, 2.0)).unwrap();
        assert_eq!(json, r#"{"x":1.5,"y":2.0}"#);
    }
}
