mod perimeter;

pub use perimeter::*;

use std::fmt::Display;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use tsify::Tsify;

use crate::r2::{Point, R2};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Tsify)]
pub struct Polygon {
    pub vertices: Vec<Point>,
}

impl Polygon {
    pub fn new(vertices: Vec<Point>) -> Self {
        assert!(vertices.len() >= 3, "Polygon must have at least 3 vertices");
        Polygon { vertices }
    }

    /// Check if a point is inside the polygon using ray casting algorithm.
    /// Casts a horizontal ray to the right and counts edge crossings.
    pub fn contains(&self, p: &Point) -> bool {
        let mut crossings = 0;

        for (v0, v1) in self.vertices.iter().circular_tuple_windows() {
            // Skip if edge is entirely above or below the ray
            let (y_min, y_max) = if v0.y < v1.y { (v0.y, v1.y) } else { (v1.y, v0.y) };
            if p.y < y_min || p.y >= y_max {
                continue;
            }

            // x-coordinate where the edge crosses y=p.y
            let t = (p.y - v0.y) / (v1.y - v0.y);
            let x_crossing = v0.x + t * (v1.x - v0.x);

            if x_crossing > p.x {
                crossings += 1;
            }
        }

        crossings % 2 == 1
    }

    pub fn signed_area(&self) -> f64 {
        signed_area(&self.vertices)
    }

    pub fn area(&self) -> f64 {
        shoelace_area(&self.vertices)
    }

    pub fn center(&self) -> Point {
        let n = self.vertices.len() as f64;
        let sum = self.vertices.iter().fold(R2 { x: 0., y: 0. }, |sum, v| sum + *v);
        sum / n
    }
}

/// Half the shoelace sum: positive for counter-clockwise winding, negative for clockwise.
///
/// Edges are taken relative to the first vertex, so the result doesn't lose precision to cancellation when the
/// vertices lie far from the origin.
pub fn signed_area(vertices: &[Point]) -> f64 {
    let [origin, rest @ ..] = vertices else {
        return 0.;
    };
    let sum: f64 = rest
        .iter()
        .tuple_windows()
        .map(|(i, j)| (*i - *origin).cross(&(*j - *origin)))
        .sum();
    sum / 2.
}

/// Area enclosed by `vertices` (shoelace formula), regardless of winding order.
/// Fewer than 3 vertices enclose nothing.
pub fn shoelace_area(vertices: &[Point]) -> f64 {
    signed_area(vertices).abs()
}

impl Display for Polygon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let verts: Vec<String> = self
            .vertices
            .iter()
            .map(|v| format!("({:.3}, {:.3})", v.x, v.y))
            .collect();
        write!(f, "Polygon[{}]", verts.join(", "))
    }
}
