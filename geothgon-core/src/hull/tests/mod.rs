mod scenarios;

use crate::{r2::Point, to::To};

fn points<const N: usize>(coords: [(f64, f64); N]) -> Vec<Point> {
    coords.to()
}
