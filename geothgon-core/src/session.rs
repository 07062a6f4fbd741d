//! A point-collection session: observe locations, mark the ones to keep, and compute the enclosed area.

use log::{debug, info};

use crate::{
    error::SessionError,
    hull::HullArea,
    point_set::PointSet,
    provider::{FakePointProvider, PointSource},
    r2::Point,
};

/// Owns the marked [`PointSet`] and the [`PointSource`] feeding it.
///
/// The current location only changes on [`on_location_changed`](Self::on_location_changed); [`mark`](Self::mark)
/// records it, then asks the source to move on.
#[derive(Debug, Clone)]
pub struct Session<S: PointSource = FakePointProvider> {
    source: S,
    current: Option<Point>,
    points: PointSet,
}

impl<S: PointSource> Session<S> {
    pub fn new(source: S) -> Self {
        Session { source, current: None, points: PointSet::new() }
    }

    pub fn on_location_changed(&mut self) -> Point {
        let p = self.source.current();
        debug!("location changed: {}", p);
        self.current = Some(p);
        p
    }

    pub fn current(&self) -> Option<Point> {
        self.current
    }

    /// Record the current location (if not already recorded), and advance the source.
    /// Returns whether the point was new.
    pub fn mark(&mut self) -> Result<bool, SessionError> {
        let p = self.current.ok_or(SessionError::NoCurrentPoint)?;
        self.source.advance();
        let added = self.points.insert(p);
        if added {
            info!("marked point {} ({} total)", p, self.points.len());
        } else {
            info!("point {} already marked", p);
        }
        Ok(added)
    }

    pub fn compute(&self) -> HullArea {
        let result = self.points.hull_area();
        info!("area of {} points: {}", self.points.len(), result.area);
        result
    }

    pub fn points(&self) -> &PointSet {
        &self.points
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn into_points(self) -> PointSet {
        self.points
    }
}

impl Default for Session<FakePointProvider> {
    fn default() -> Self {
        Session::new(FakePointProvider::default())
    }
}
