//! Reading point lists from the command line or from JSON files.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use geothgon_core::{parse_points, Point, PointSet, R2};
use log::{debug, warn};
use serde::Deserialize;

/// A point in a JSON input file: either `{"x": .., "y": ..}` or `[x, y]`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum JsonPoint {
    Object(Point),
    Pair(f64, f64),
}

impl From<JsonPoint> for Point {
    fn from(p: JsonPoint) -> Self {
        match p {
            JsonPoint::Object(p) => p,
            JsonPoint::Pair(x, y) => R2 { x, y },
        }
    }
}

pub fn parse_json(json: &str) -> Result<Vec<Point>> {
    let points: Vec<JsonPoint> = serde_json::from_str(json)?;
    Ok(points.into_iter().map(Point::from).collect())
}

pub fn read_json(path: &Path) -> Result<Vec<Point>> {
    let json = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    parse_json(&json).with_context(|| format!("parsing {}", path.display()))
}

/// Collect points from positional `x,y` args and an optional JSON file, dropping exact duplicates.
pub fn load(args: &[String], input: Option<&Path>) -> Result<PointSet> {
    let mut points = parse_points(&args.join(" "))?;
    if let Some(path) = input {
        points.extend(read_json(path)?);
    }
    let total = points.len();

    let mut set = PointSet::new();
    for p in points {
        set.try_insert(p)?;
    }
    if set.len() < total {
        warn!("dropped {} duplicate point(s)", total - set.len());
    }
    debug!("loaded {} points", set.len());
    Ok(set)
}
