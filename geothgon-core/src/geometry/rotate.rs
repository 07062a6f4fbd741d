use crate::r2::{Point, R2};

pub trait Rotate {
    fn rotate(&self, theta: f64) -> Self;
}

impl Rotate for Point {
    fn rotate(&self, theta: f64) -> Self {
        let (sin, cos) = theta.sin_cos();
        R2 {
            x: self.x * cos - self.y * sin,
            y: self.x * sin + self.y * cos,
        }
    }
}
