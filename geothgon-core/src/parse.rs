//! Text forms of points: `"x,y"`, optionally parenthesized, as printed by [`R2`]'s `Display`.

use std::str::FromStr;

use crate::{error::{ParsePointError, PointError}, r2::{Point, R2}};

fn coord(s: &str) -> Result<f64, ParsePointError> {
    let s = s.trim();
    s.parse::<f64>().map_err(|source| ParsePointError::InvalidNumber { input: s.to_string(), source })
}

impl FromStr for R2<f64> {
    type Err = ParsePointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let inner = trimmed
            .strip_prefix('(')
            .and_then(|s| s.strip_suffix(')'))
            .unwrap_or(trimmed);
        let (x, y) = inner
            .split_once(',')
            .ok_or_else(|| ParsePointError::MissingComma(s.to_string()))?;
        let p = R2 { x: coord(x)?, y: coord(y)? };
        if !p.is_finite() {
            return Err(PointError::NonFinite(p).into());
        }
        Ok(p)
    }
}

/// Parse a list of points separated by whitespace, newlines, or semicolons, e.g. `"0,0 4,0; (4, 3)"`.
pub fn parse_points(s: &str) -> Result<Vec<Point>, ParsePointError> {
    let mut tokens: Vec<String> = Vec::new();
    for word in s.split(|c: char| c.is_whitespace() || c == ';').filter(|w| !w.is_empty()) {
        match tokens.last_mut() {
            // Rejoin "x, y" split at the space
            Some(last) if last.ends_with(',') || word.starts_with(',') => last.push_str(word),
            _ => tokens.push(word.to_string()),
        }
    }
    tokens.iter().map(|t| t.parse()).collect()
}
