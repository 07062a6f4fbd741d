//! Convex hull (Andrew's monotone chain) and the area it encloses.

use std::fmt::{self, Display};

use log::debug;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tsify::Tsify;

use crate::{
    math::is_zero::IsZero,
    polygon::{self, Polygon},
    r2::Point,
};

/// Turn direction of `a → b → c`: positive for a left (counter-clockwise) turn, negative for a right turn,
/// zero when the three points are collinear (or any two coincide).
pub fn cross(a: &Point, b: &Point, c: &Point) -> f64 {
    (*b - *a).cross(&(*c - *a))
}

/// Copy of `points` ordered by x, then y.
pub fn sorted(points: &[Point]) -> Vec<Point> {
    let mut points = points.to_vec();
    points.sort_by_key(|p| (OrderedFloat(p.x), OrderedFloat(p.y)));
    points
}

/// Sweep `points` (already in sweep order), popping the last working point while it doesn't make a strict
/// left turn toward the next candidate.
fn chain<'a>(points: impl Iterator<Item = &'a Point>) -> Vec<Point> {
    let mut chain: Vec<Point> = Vec::new();
    for p in points {
        while let [.., a, b] = &chain[..] {
            if !cross(a, b, p).le_zero() {
                break;
            }
            chain.pop();
        }
        chain.push(*p);
    }
    chain
}

/// Vertices of a convex polygon, counter-clockwise, starting from the lowest-x (then lowest-y) point.
///
/// Collinear boundary points are never vertices. Degenerate inputs give degenerate hulls: no points, a
/// single point (all inputs identical), or the two extreme points of a line.
#[derive(Debug, Clone, Default, PartialEq, derive_more::Deref, derive_more::From, Serialize, Deserialize, Tsify)]
pub struct Hull(pub Vec<Point>);

impl Hull {
    pub fn vertices(&self) -> &[Point] {
        &self.0
    }

    /// True iff the hull has at least 3 vertices (i.e. encloses a nonzero area).
    pub fn is_polygon(&self) -> bool {
        self.0.len() >= 3
    }

    pub fn polygon(&self) -> Option<Polygon> {
        self.is_polygon().then(|| Polygon::new(self.0.clone()))
    }

    pub fn area(&self) -> f64 {
        polygon::shoelace_area(&self.0)
    }

    pub fn perimeter(&self) -> f64 {
        polygon::perimeter(&self.0)
    }

    /// Whether `p` lies inside or on the boundary of the hull.
    pub fn contains(&self, p: &Point) -> bool {
        match &self.0[..] {
            [] => false,
            [v] => v == p,
            [a, b] => {
                cross(a, b, p).is_zero()
                    && p.x >= a.x.min(b.x) && p.x <= a.x.max(b.x)
                    && p.y >= a.y.min(b.y) && p.y <= a.y.max(b.y)
            }
            vertices => {
                let n = vertices.len();
                (0..n).all(|i| !cross(&vertices[i], &vertices[(i + 1) % n], p).lt_zero())
            }
        }
    }

    /// Vertices in sorted (x, then y) order, for comparing hulls as sets.
    pub fn vertex_set(&self) -> Vec<Point> {
        sorted(&self.0)
    }

    pub fn into_vec(self) -> Vec<Point> {
        self.0
    }
}

impl Display for Hull {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verts: Vec<String> = self.0.iter().map(|v| v.to_string()).collect();
        write!(f, "Hull[{}]", verts.join(", "))
    }
}

/// Convex hull of `points` (any order, duplicates allowed).
pub fn convex_hull(points: &[Point]) -> Hull {
    let mut points = sorted(points);
    points.dedup();
    if points.len() < 3 {
        return Hull(points);
    }

    let mut lower = chain(points.iter());
    let mut upper = chain(points.iter().rev());

    // Each chain ends where the other begins
    lower.pop();
    upper.pop();
    lower.extend(upper);
    Hull(lower)
}

/// Result of [`compute_hull_area`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Tsify)]
pub struct HullArea {
    pub hull: Hull,
    pub area: f64,
}

impl From<HullArea> for (Hull, f64) {
    fn from(HullArea { hull, area }: HullArea) -> Self {
        (hull, area)
    }
}

/// Convex hull of `points`, and the (non-negative) area it encloses.
///
/// Fewer than 3 distinct points, or all points on one line, enclose no area.
pub fn compute_hull_area(points: &[Point]) -> HullArea {
    let hull = convex_hull(points);
    let area = hull.area();
    debug!("hull of {} points: {} vertices, area {}", points.len(), hull.len(), area);
    HullArea { hull, area }
}

#[cfg(test)]
mod tests;
