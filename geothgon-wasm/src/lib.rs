//! WASM bindings for waypoint convex hull areas.
//!
//! This crate provides JavaScript/WASM bindings for the geothgon-core library, so a web or hybrid-mobile
//! front end can hand over its marked points and display the resulting hull and area.

use geothgon_core::{HullArea, Point, PointSet};
use log::{error, info};
use wasm_bindgen::prelude::*;
use wasm_bindgen_console_logger::DEFAULT_LOGGER;

/// Initializes the logging system for WASM.
///
/// Sets up console logging and panic hooks for better error reporting in the browser.
/// Should be called once at application startup.
#[wasm_bindgen]
pub fn init_logs() {
    match log::set_logger(&DEFAULT_LOGGER) {
        Ok(_) => info!("Initialized console.logger"),
        Err(e) => error!("failed to set console.logger: {}", e),
    };
    console_error_panic_hook::set_once();
}

/// Updates the log level filter.
///
/// # Arguments
/// * `level` - Log level string: "error", "warn", "info", "debug", or "trace".
///   Defaults to "info" if empty or null.
#[wasm_bindgen]
pub fn update_log_level(level: JsValue) -> Result<(), JsError> {
    let level: Option<String> = serde_wasm_bindgen::from_value(level)?;
    let level = geothgon_core::parse_log_level(level.as_deref());
    log::set_max_level(level);
    Ok(())
}

fn points(points: JsValue) -> Result<Vec<Point>, JsError> {
    let points: Vec<Point> = serde_wasm_bindgen::from_value(points)?;
    // Validate like an insertion into a PointSet would, but keep duplicates: the engine tolerates them
    if let Some(p) = points.iter().find(|p| !p.is_finite()) {
        return Err(geothgon_core::PointError::NonFinite(*p).into());
    }
    Ok(points)
}

/// Computes the convex hull of a set of points, and the area it encloses.
///
/// # Arguments
/// * `points` - Array of `{x, y}` objects, in any order.
///
/// # Returns
/// A [`HullArea`]: `{hull: [{x, y}, ...], area}`, hull vertices counter-clockwise.
#[wasm_bindgen]
pub fn compute_hull_area(points: JsValue) -> Result<JsValue, JsError> {
    let points = self::points(points)?;
    let result: HullArea = geothgon_core::compute_hull_area(&points);
    Ok(serde_wasm_bindgen::to_value(&result)?)
}

/// Computes just the convex hull of a set of points, as an array of `{x, y}` objects.
#[wasm_bindgen]
pub fn convex_hull(points: JsValue) -> Result<JsValue, JsError> {
    let points = self::points(points)?;
    let hull = geothgon_core::convex_hull(&points);
    Ok(serde_wasm_bindgen::to_value(&hull)?)
}

/// Adds `point` to `points` unless an identical point is already present.
///
/// # Returns
/// The (possibly unchanged) array of points.
#[wasm_bindgen]
pub fn add_point(points: JsValue, point: JsValue) -> Result<JsValue, JsError> {
    let mut set: PointSet = serde_wasm_bindgen::from_value(points)?;
    let point: Point = serde_wasm_bindgen::from_value(point)?;
    if !set.try_insert(point)? {
        info!("point {} already added", point);
    }
    Ok(serde_wasm_bindgen::to_value(&set)?)
}
