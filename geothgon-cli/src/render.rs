//! SVG rendering for marked points and their convex hull.

use std::fmt::{self, Write};

use geothgon_core::{
    transform::{Projection, Transform::{Scale, ScaleXY, Translate}},
    Hull, Point, R2,
};

/// SVG rendering configuration
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Canvas width in pixels
    pub width: f64,
    /// Canvas height in pixels
    pub height: f64,
    /// Padding around points (fraction of canvas)
    pub padding: f64,
    /// Stroke width for the hull outline
    pub stroke_width: f64,
    /// Whether to fill the hull
    pub fill: bool,
    /// Fill opacity (0.0 - 1.0)
    pub fill_opacity: f64,
    /// Radius of the dot drawn at each point
    pub point_radius: f64,
    /// Whether to label points with their index
    pub show_labels: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            padding: 0.1,
            stroke_width: 2.0,
            fill: true,
            fill_opacity: 0.3,
            point_radius: 4.0,
            show_labels: true,
        }
    }
}

const HULL_COLOR: &str = "#377eb8";
const POINT_COLOR: &str = "#e41a1c";
const INTERIOR_COLOR: &str = "#999999";

/// Maps point coordinates onto the canvas: uniform scale to fit inside the padding, y pointing up.
pub fn canvas_projection(points: &[Point], config: &RenderConfig) -> Projection {
    let (min, max) = compute_bounds(points);
    let pad_x = config.width * config.padding;
    let pad_y = config.height * config.padding;
    let span = max - min;

    let scales = [
        (config.width - 2. * pad_x) / span.x,
        (config.height - 2. * pad_y) / span.y,
    ];
    let scale = scales
        .into_iter()
        .filter(|s| s.is_finite())
        .fold(f64::INFINITY, f64::min);
    let scale = if scale.is_finite() { scale } else { 1. };

    // Center the drawing on the canvas
    let center = (min + max) / 2.;
    Projection(vec![
        Translate(-center),
        Scale(scale),
        ScaleXY(R2 { x: 1., y: -1. }),
        Translate(R2 { x: config.width / 2., y: config.height / 2. }),
    ])
}

/// Render points and their hull to an SVG string
pub fn render_svg(points: &[Point], hull: &Hull, config: &RenderConfig) -> Result<String, fmt::Error> {
    let projection = canvas_projection(points, config);
    let mut svg = String::new();

    writeln!(
        &mut svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        config.width, config.height, config.width, config.height
    )?;

    // Background
    writeln!(
        &mut svg,
        r#"  <rect x="0" y="0" width="{}" height="{}" fill="white"/>"#,
        config.width, config.height
    )?;

    if let Some((first, rest)) = hull.split_first() {
        let first = projection.apply(first);
        let mut path = format!("M {} {}", first.x, first.y);
        for v in rest {
            let v = projection.apply(v);
            write!(&mut path, " L {} {}", v.x, v.y)?;
        }
        path.push_str(" Z");

        let fill = if config.fill && hull.is_polygon() {
            format!(r#"fill="{}" fill-opacity="{}""#, HULL_COLOR, config.fill_opacity)
        } else {
            r#"fill="none""#.to_string()
        };
        writeln!(
            &mut svg,
            r#"  <path d="{}" {} stroke="{}" stroke-width="{}"/>"#,
            path, fill, HULL_COLOR, config.stroke_width
        )?;
    }

    for (idx, p) in points.iter().enumerate() {
        let color = if hull.iter().any(|v| v == p) { POINT_COLOR } else { INTERIOR_COLOR };
        let q = projection.apply(p);
        writeln!(
            &mut svg,
            r#"  <circle cx="{}" cy="{}" r="{}" fill="{}"/>"#,
            q.x, q.y, config.point_radius, color
        )?;

        if config.show_labels {
            writeln!(
                &mut svg,
                r#"  <text x="{}" y="{}" font-size="{}" fill="{}">{}</text>"#,
                q.x + config.point_radius * 1.5, q.y - config.point_radius * 1.5, config.point_radius * 3.0, color, idx
            )?;
        }
    }

    writeln!(&mut svg, "</svg>")?;

    Ok(svg)
}

/// Compute bounding box (min corner, max corner) for points
fn compute_bounds(points: &[Point]) -> (Point, Point) {
    let mut min = R2 { x: f64::INFINITY, y: f64::INFINITY };
    let mut max = R2 { x: f64::NEG_INFINITY, y: f64::NEG_INFINITY };

    for p in points {
        min.x = min.x.min(p.x);
        max.x = max.x.max(p.x);
        min.y = min.y.min(p.y);
        max.y = max.y.max(p.y);
    }

    // Handle empty/degenerate cases
    if min.x > max.x {
        min.x = -1.0;
        max.x = 1.0;
    }
    if min.y > max.y {
        min.y = -1.0;
        max.y = 1.0;
    }

    (min, max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use geothgon_core::compute_hull_area;

    fn rectangle() -> Vec<Point> {
        vec![R2::new(0., 0.), R2::new(4., 0.), R2::new(4., 3.), R2::new(0., 3.), R2::new(1., 1.)]
    }

    #[test]
    fn test_projection_fits_canvas() {
        let config = RenderConfig::default();
        let projection = canvas_projection(&rectangle(), &config);
        // 4x3 box fills the 640x480 area inside the padding exactly
        assert_relative_eq!(projection.apply(&R2::new(0., 0.)), R2::new(80., 540.), epsilon = 1e-9);
        assert_relative_eq!(projection.apply(&R2::new(4., 3.)), R2::new(720., 60.), epsilon = 1e-9);
    }

    #[test]
    fn test_projection_degenerate() {
        let config = RenderConfig::default();
        // Single point: no finite scale, drawn at the center
        let projection = canvas_projection(&[R2::new(36., 140.)], &config);
        assert_relative_eq!(projection.apply(&R2::new(36., 140.)), R2::new(400., 300.), epsilon = 1e-9);

        // Vertical line: scaled by height only
        let projection = canvas_projection(&[R2::new(1., 0.), R2::new(1., 2.)], &config);
        assert_relative_eq!(projection.apply(&R2::new(1., 2.)), R2::new(400., 60.), epsilon = 1e-9);
    }

    #[test]
    fn test_render() {
        let points = rectangle();
        let hull = compute_hull_area(&points).hull;
        let svg = render_svg(&points, &hull, &RenderConfig::default()).unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("<path d=\"M 80 540 L 720 540 L 720 60 L 80 60 Z\""));
        assert_eq!(svg.matches("<circle").count(), 5);
        assert_eq!(svg.matches(POINT_COLOR).count(), 8);
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_render_empty() {
        let svg = render_svg(&[], &Hull::default(), &RenderConfig::default()).unwrap();
        assert!(!svg.contains("<path"));
        assert!(!svg.contains("<circle"));
    }
}
