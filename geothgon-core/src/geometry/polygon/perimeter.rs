use itertools::Itertools;

use crate::r2::Point;

use super::Polygon;

/// Edge lengths of the closed path through `vertices`, starting with the edge `vertices[0] → vertices[1]`
/// and ending with the closing edge back to `vertices[0]`.
pub fn edge_lengths(vertices: &[Point]) -> Vec<f64> {
    if vertices.len() < 2 {
        return vec![];
    }
    vertices
        .iter()
        .circular_tuple_windows()
        .map(|(a, b)| (*b - *a).norm())
        .collect()
}

/// Length of the closed path through `vertices`. A two-vertex path is walked out and back.
pub fn perimeter(vertices: &[Point]) -> f64 {
    edge_lengths(vertices).into_iter().sum()
}

impl Polygon {
    pub fn perimeter(&self) -> f64 {
        perimeter(&self.vertices)
    }
}
