#[cfg_attr(not(test), allow(unused_imports))]
#[macro_use]
extern crate approx;

// Organized modules
pub mod geometry;
pub mod hull;
pub mod math;

pub use geometry::polygon;
pub use geometry::r2;
pub use geometry::rotate;
pub use geometry::transform;

// Utility modules
pub mod error;
pub mod parse;
pub mod point_set;
pub mod provider;
pub mod session;
pub mod to;

// Re-export key types for external use
pub use error::{ParsePointError, PointError, SessionError};
pub use hull::{compute_hull_area, convex_hull, Hull, HullArea};
pub use parse::parse_points;
pub use point_set::PointSet;
pub use polygon::Polygon;
pub use provider::{FakePointProvider, PointSource};
pub use r2::{Point, R2};
pub use session::Session;

/// Parse a log level string into LevelFilter.
pub fn parse_log_level(level: Option<&str>) -> log::LevelFilter {
    match level {
        Some("error") => log::LevelFilter::Error,
        Some("warn") => log::LevelFilter::Warn,
        Some("info") | Some("") | None => log::LevelFilter::Info,
        Some("debug") => log::LevelFilter::Debug,
        Some("trace") => log::LevelFilter::Trace,
        Some(level) => {
            log::warn!("invalid log level {:?}, using info", level);
            log::LevelFilter::Info
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_levels() {
        assert_eq!(parse_log_level(None), log::LevelFilter::Info);
        assert_eq!(parse_log_level(Some("")), log::LevelFilter::Info);
        assert_eq!(parse_log_level(Some("debug")), log::LevelFilter::Debug);
        assert_eq!(parse_log_level(Some("error")), log::LevelFilter::Error);
        assert_eq!(parse_log_level(Some("loud")), log::LevelFilter::Info);
    }
}
