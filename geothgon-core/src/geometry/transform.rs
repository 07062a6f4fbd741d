use std::ops::Neg;

use serde::{Deserialize, Serialize};

use crate::{r2::{Point, R2}, rotate::Rotate as _Rotate};

/// Affine maps used to move point clouds around (scaling, rotating about the origin, etc.).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Transform {
    Translate(Point),
    Scale(f64),
    ScaleXY(Point),
    /// Counter-clockwise rotation about the origin, in radians.
    Rotate(f64),
}

use self::Transform::{Rotate, Scale, ScaleXY, Translate};

impl Transform {
    pub fn apply(&self, p: &Point) -> Point {
        match self {
            Translate(v) => *p + *v,
            Scale(s) => *p * *s,
            ScaleXY(s) => *p * *s,
            Rotate(theta) => p.rotate(*theta),
        }
    }
}

impl Neg for Transform {
    type Output = Transform;
    fn neg(self) -> Self {
        match self {
            Translate(v) => Translate(-v),
            Scale(s) => Scale(1. / s),
            ScaleXY(v) => ScaleXY(R2 { x: 1. / v.x, y: 1. / v.y }),
            Rotate(theta) => Rotate(-theta),
        }
    }
}

/// A sequence of [`Transform`]s, applied in order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Projection(pub Vec<Transform>);

impl Projection {
    pub fn apply(&self, p: &Point) -> Point {
        self.0.iter().fold(*p, |p, t| t.apply(&p))
    }
}

impl Neg for Projection {
    type Output = Projection;
    fn neg(self) -> Self {
        Projection(self.0.into_iter().rev().map(|t| -t).collect())
    }
}

pub trait CanTransform {
    type Output;
    fn transform(&self, transform: &Transform) -> Self::Output;
    fn apply(&self, projection: &Projection) -> Self::Output;
}

impl CanTransform for [Point] {
    type Output = Vec<Point>;
    fn transform(&self, transform: &Transform) -> Vec<Point> {
        self.iter().map(|p| transform.apply(p)).collect()
    }
    fn apply(&self, projection: &Projection) -> Vec<Point> {
        self.iter().map(|p| projection.apply(p)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transforms() {
        let p: Point = R2::new(2., 3.);
        assert_eq!(Translate(R2::new(1., -1.)).apply(&p), R2::new(3., 2.));
        assert_eq!(Scale(2.).apply(&p), R2::new(4., 6.));
        assert_eq!(ScaleXY(R2::new(1., -1.)).apply(&p), R2::new(2., -3.));
    }

    #[test]
    fn projection_inverse() {
        let projection = Projection(vec![
            Translate(R2::new(-36., -140.)),
            Scale(1000.),
            Rotate(0.3),
            ScaleXY(R2::new(1., -1.)),
        ]);
        let inverse = -projection.clone();
        let points: [Point; 2] = [R2::new(36.0969427, 140.1036829), R2::new(36.0833675, 140.1104388)];
        let projected = points.apply(&projection);
        let restored = projected.apply(&inverse);
        for (p, r) in points.iter().zip(restored.iter()) {
            assert_relative_eq!(*p, *r, epsilon = 1e-9);
        }
    }
}
