use std::num::ParseFloatError;

use crate::r2::Point;

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum PointError {
    #[error("Point {0} has a non-finite coordinate")]
    NonFinite(Point),
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ParsePointError {
    #[error("Expected \"x,y\", found {0:?}")]
    MissingComma(String),

    #[error("Invalid coordinate {input:?}: {source}")]
    InvalidNumber {
        input: String,
        source: ParseFloatError,
    },

    #[error(transparent)]
    Point(#[from] PointError),
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum SessionError {
    #[error("No location has been observed yet")]
    NoCurrentPoint,

    #[error("Point source route must contain at least one point")]
    EmptyRoute,
}
