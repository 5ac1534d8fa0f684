//! Slicing a triangulated mesh with a horizontal (constant-z) plane.

use crate::float_types::{Real, approx_eq};
use crate::geometry::{Point2, Point3, Triangle};

/// Intersect one triangle with the plane `z = height`, returning the resulting fragment's
/// endpoints in the slicing plane, or `None` for a degenerate (non-2-point) case.
pub fn slice_triangle(tri: &Triangle, height: Real) -> Option<(Point2, Point2)> {
    let on_plane: Vec<(Point3, Point3)> = tri
        .edges()
        .into_iter()
        .filter(|(a, b)| approx_eq(a.z, height) && approx_eq(b.z, height))
        .collect();
    if on_plane.len() == 3 {
        // every vertex lies on the plane: a fully degenerate (flat) triangle
        return None;
    }
    if on_plane.len() == 1 {
        let (a, b) = on_plane[0];
        return Some((a.xy(), b.xy()));
    }

    let mut pts: Vec<Point2> = Vec::with_capacity(2);
    for (a, b) in tri.edges() {
        if approx_eq(a.z, b.z) {
            continue;
        }
        let t = (height - a.z) / (b.z - a.z);
        if (0.0..=1.0).contains(&t) {
            let x = a.x + (b.x - a.x) * t;
            let y = a.y + (b.y - a.y) * t;
            let p = Point2::new(x, y);
            if !pts.iter().any(|q: &Point2| q.approx_eq(&p)) {
                pts.push(p);
            }
        }
    }

    match pts.len() {
        2 => Some((pts[0], pts[1])),
        _ => None,
    }
}

/// Slice every triangle in `mesh` at `height`, collecting the fragments that survive.
#[cfg(not(feature = "parallel"))]
pub fn slice_mesh(mesh: &[Triangle], height: Real) -> Vec<(Point2, Point2)> {
    mesh.iter().filter_map(|t| slice_triangle(t, height)).collect()
}

#[cfg(feature = "parallel")]
pub fn slice_mesh(mesh: &[Triangle], height: Real) -> Vec<(Point2, Point2)> {
    use rayon::prelude::*;
    mesh.par_iter().filter_map(|t| slice_triangle(t, height)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slices_simple_triangle_at_midplane() {
        let tri = Triangle::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 1.0),
        )
        .unwrap();
        let frag = slice_triangle(&tri, 0.5).unwrap();
        let pts = [frag.0, frag.1];
        assert!(pts.iter().any(|p| p.approx_eq(&Point2::new(0.5, 0.5))));
        assert!(pts.iter().any(|p| p.approx_eq(&Point2::new(0.0, 0.5))));
    }

    #[test]
    fn triangle_entirely_off_plane_yields_nothing() {
        let tri = Triangle::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        )
        .unwrap();
        assert!(slice_triangle(&tri, 5.0).is_none());
    }
}
