//! Where points come from. A real app feeds GPS fixes; [`FakePointProvider`] replays a fixed route.

use log::debug;

use crate::{error::SessionError, r2::{Point, R2}};

/// Anything that can report a "current" location, and be told to move on to the next one.
pub trait PointSource {
    fn current(&self) -> Point;
    fn advance(&mut self);
}

/// Waypoints around Tsukuba, as (latitude, longitude).
pub const TSUKUBA_ROUTE: [(f64, f64); 7] = [
    (36.0969427, 140.1036829), // Hirasuna student dormitory
    (36.0869012, 140.1069806), // University of Tsukuba, Library on Library and Information Science
    (36.0833675, 140.1104388), // Tsukuba station (TX)
    (36.0858992, 140.1167475), // Chuo-dori / Higashi-odori intersection
    (36.0905531, 140.107655),  // Sennuki tower
    (36.1054803, 140.1083035), // Higashi-odori
    (36.1024839, 140.1006331), // Ministop Amakubo
];

/// Cycles through a fixed, non-empty route.
#[derive(Debug, Clone, PartialEq)]
pub struct FakePointProvider {
    route: Vec<Point>,
    idx: usize,
}

impl FakePointProvider {
    pub fn with_route(route: Vec<Point>) -> Result<Self, SessionError> {
        if route.is_empty() {
            return Err(SessionError::EmptyRoute);
        }
        Ok(FakePointProvider { route, idx: 0 })
    }

    pub fn route(&self) -> &[Point] {
        &self.route
    }

    pub fn idx(&self) -> usize {
        self.idx
    }
}

impl Default for FakePointProvider {
    fn default() -> Self {
        let route = TSUKUBA_ROUTE.iter().map(|&(x, y)| R2 { x, y }).collect();
        FakePointProvider { route, idx: 0 }
    }
}

impl PointSource for FakePointProvider {
    fn current(&self) -> Point {
        self.route[self.idx]
    }

    fn advance(&mut self) {
        self.idx = (self.idx + 1) % self.route.len();
        debug!("fake provider advanced to waypoint {}: {}", self.idx, self.route[self.idx]);
    }
}
