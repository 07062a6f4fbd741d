use super::points;
use super::super::*;
use crate::r2::R2;

#[test_log::test]
fn rectangle() {
    let input = points([(0., 0.), (4., 0.), (4., 3.), (0., 3.)]);
    let HullArea { hull, area } = compute_hull_area(&input);
    assert_eq!(area, 12.);
    assert_eq!(*hull, points([(0., 0.), (4., 0.), (4., 3.), (0., 3.)]));
    assert!(hull.is_polygon());
}

#[test_log::test]
fn collinear_diagonal() {
    let input = points([(0., 0.), (1., 1.), (2., 2.), (3., 3.)]);
    let HullArea { hull, area } = compute_hull_area(&input);
    assert_eq!(area, 0.);
    assert_eq!(*hull, points([(0., 0.), (3., 3.)]));
}

#[test_log::test]
fn interior_point_excluded() {
    let input = points([(0., 0.), (2., 0.), (1., 1.), (1., 0.5)]);
    let HullArea { hull, area } = compute_hull_area(&input);
    assert_eq!(area, 1.);
    assert_eq!(*hull, points([(0., 0.), (2., 0.), (1., 1.)]));
    assert!(!hull.contains(&R2::new(0.5, 0.9)));
    assert!(hull.contains(&R2::new(1., 0.5)));
}

#[test_log::test]
fn repeated_point() {
    let input = points([(5., 5.), (5., 5.), (5., 5.)]);
    let HullArea { hull, area } = compute_hull_area(&input);
    assert_eq!(area, 0.);
    assert_eq!(*hull, points([(5., 5.)]));
}

#[test]
fn collinear_points_on_edges_are_dropped() {
    // Square with midpoints on every edge, plus its center
    let input = points([
        (0., 0.), (1., 0.), (2., 0.),
        (2., 1.), (2., 2.), (1., 2.),
        (0., 2.), (0., 1.), (1., 1.),
    ]);
    let HullArea { hull, area } = compute_hull_area(&input);
    assert_eq!(*hull, points([(0., 0.), (2., 0.), (2., 2.), (0., 2.)]));
    assert_eq!(area, 4.);
}

#[test]
fn counter_clockwise() {
    let input = points([(3., 1.), (-2., 4.), (0., -3.), (1., 1.), (-1., 0.), (4., 4.)]);
    let hull = convex_hull(&input);
    assert!(polygon::signed_area(&hull) > 0.);
    let n = hull.len();
    for i in 0..n {
        assert!(cross(&hull[i], &hull[(i + 1) % n], &hull[(i + 2) % n]) > 0.);
    }
    // Starts from the leftmost point
    assert_eq!(hull[0], R2::new(-2., 4.));
}

#[test]
fn waypoints() {
    // Walk around central Tsukuba
    let input = points([
        (36.0969427, 140.1036829),
        (36.0869012, 140.1069806),
        (36.0833675, 140.1104388),
        (36.0858992, 140.1167475),
        (36.0905531, 140.107655),
        (36.1054803, 140.1083035),
        (36.1024839, 140.1006331),
    ]);
    let HullArea { hull, area } = compute_hull_area(&input);
    // Two of the waypoints are inside the route
    assert_eq!(hull.len(), 5);
    assert!(!hull.contains(&R2::new(36.12, 140.1)));
    assert!(!hull.iter().any(|p| *p == R2::new(36.0969427, 140.1036829)));
    assert!(hull.contains(&R2::new(36.0969427, 140.1036829)));
    assert!(hull.contains(&R2::new(36.0905531, 140.107655)));
    assert_relative_eq!(area, 1.761895632625965e-4, max_relative = 1e-6);
    let polygon = hull.polygon().expect("hull of the route is a polygon");
    assert_relative_eq!(polygon.area(), area, epsilon = 1e-15);
    assert!(polygon.contains(&polygon.center()));
}

#[test]
fn cross_signs() {
    let o = R2::new(0., 0.);
    let x = R2::new(1., 0.);
    assert_eq!(cross(&o, &x, &R2::new(1., 1.)), 1.);
    assert_eq!(cross(&o, &x, &R2::new(1., -1.)), -1.);
    assert_eq!(cross(&o, &x, &R2::new(5., 0.)), 0.);
    assert_eq!(cross(&o, &o, &x), 0.);
}

#[test]
fn sort_order() {
    let input = points([(1., 2.), (0., 5.), (1., -1.), (0., 5.), (-3., 0.)]);
    assert_eq!(
        sorted(&input),
        points([(-3., 0.), (0., 5.), (0., 5.), (1., -1.), (1., 2.)]),
    );
}

#[test]
fn into_parts() {
    let (hull, area): (Hull, f64) = compute_hull_area(&points([(0., 0.), (1., 0.), (0., 1.)])).into();
    assert_eq!(hull.len(), 3);
    assert_eq!(area, 0.5);
    assert_eq!(hull.to_string(), "Hull[(0, 0), (1, 0), (0, 1)]");
}

#[test]
fn serde_shape() {
    let result = compute_hull_area(&points([(0., 0.), (2., 0.), (0., 2.)]));
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "hull": [{"x": 0., "y": 0.}, {"x": 2., "y": 0.}, {"x": 0., "y": 2.}],
            "area": 2.,
        })
    );
    let parsed: HullArea = serde_json::from_value(json).unwrap();
    assert_eq!(parsed, result);
}
