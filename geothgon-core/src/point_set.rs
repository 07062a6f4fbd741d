use serde::{Deserialize, Serialize};

use crate::{
    error::PointError,
    hull::{compute_hull_area, HullArea},
    r2::Point,
};

/// Points in insertion order, without exact duplicates.
///
/// Equality is exact on both coordinates, so two GPS fixes a hair apart are both kept.
#[derive(Debug, Clone, Default, PartialEq, derive_more::Deref, Serialize, Deserialize)]
#[serde(from = "Vec<Point>")]
pub struct PointSet(Vec<Point>);

impl PointSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `p` unless an equal point is already present. Returns whether it was appended.
    pub fn insert(&mut self, p: Point) -> bool {
        if self.contains(&p) {
            false
        } else {
            self.0.push(p);
            true
        }
    }

    /// [`insert`](Self::insert), rejecting points with NaN or infinite coordinates.
    pub fn try_insert(&mut self, p: Point) -> Result<bool, PointError> {
        if !p.is_finite() {
            return Err(PointError::NonFinite(p));
        }
        Ok(self.insert(p))
    }

    pub fn as_slice(&self) -> &[Point] {
        &self.0
    }

    pub fn clear(&mut self) {
        self.0.clear()
    }

    pub fn hull_area(&self) -> HullArea {
        compute_hull_area(&self.0)
    }
}

impl Extend<Point> for PointSet {
    fn extend<I: IntoIterator<Item = Point>>(&mut self, iter: I) {
        for p in iter {
            self.insert(p);
        }
    }
}

impl FromIterator<Point> for PointSet {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        let mut set = PointSet::new();
        set.extend(iter);
        set
    }
}

impl From<Vec<Point>> for PointSet {
    fn from(points: Vec<Point>) -> Self {
        points.into_iter().collect()
    }
}

impl From<PointSet> for Vec<Point> {
    fn from(set: PointSet) -> Self {
        set.0
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
