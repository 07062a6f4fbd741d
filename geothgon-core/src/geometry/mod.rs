pub mod polygon;
pub mod r2;
pub mod rotate;
pub mod transform;
