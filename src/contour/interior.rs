//! Placing a point reliably inside a contour, offset from one of its edges.

use crate::contour::Contour;
use crate::float_types::Real;
use crate::geometry::{LineSeg, Point2};
use crate::pga::{self, Direction};
use nalgebra::Vector2;

/// Return a point lying inside `contour`, at distance `delta` from the midpoint of edge
/// `edge_index` along that edge's perpendicular bisector.
///
/// This does not assume `contour` is already correctly wound: orientation is worked out
/// locally from a two-level ray-parity test against `far`, so the same routine that
/// normalizes winding in [`crate::contour::Contour::fix_winding`] also grounds this probe.
pub fn inner_perimeter_point(
    contour: &Contour,
    edge_index: usize,
    delta: Real,
    far: Point2,
) -> Point2 {
    let mut edge = contour.edge(edge_index);
    let mid = edge.midpoint();

    let l0 = LineSeg::from_points(mid, far).expect("far reference point is distinct from mid");

    let h1 = LineSeg::new(edge.origin(), edge.d * 0.5).expect("half segment is non-degenerate");
    let h2 = LineSeg::new(mid, edge.d * 0.5).expect("half segment is non-degenerate");

    if pga::line_between(
        h1.to_pline2(),
        Direction::Clockwise,
        l0.to_pline2(),
        h2.to_pline2(),
    ) {
        edge = edge.flip();
    }

    let perp_dir = Vector2::new(-edge.d.y, edge.d.x).normalize();
    let bisector = LineSeg::new(mid, perp_dir).expect("perpendicular direction is non-zero");

    let same_side = pga::line_between(
        h1.to_pline2(),
        Direction::Clockwise,
        l0.to_pline2(),
        h2.to_pline2(),
    ) == pga::line_between(
        h1.to_pline2(),
        Direction::Clockwise,
        bisector.to_pline2(),
        h2.to_pline2(),
    );

    let crossings = contour.ray_crossings(mid, far, Some(edge_index));
    let flip_sign = if crossings % 2 == 0 { same_side } else { !same_side };
    let signed = if flip_sign { -delta } else { delta };

    Point2::new(mid.x + perp_dir.x * signed, mid.y + perp_dir.y * signed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contour::far_reference;

    #[test]
    fn probe_lands_inside_unit_square() {
        let square = Contour::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ]);
        let far = far_reference(&[square.clone()]);
        let p = inner_perimeter_point(&square, 0, 0.1, far);
        assert!(p.x > 0.0 && p.x < 1.0);
        assert!(p.y > 0.0 && p.y < 1.0);
    }
}
