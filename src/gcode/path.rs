//! Emitting raw [`GCode`] command sequences from ordered geometry.

use crate::contour::Contour;
use crate::errors::SliceError;
use crate::float_types::Real;
use crate::gcode::{ExtrudeParams, GCode};
use crate::geometry::LineSeg;

/// Walk a contour's perimeter, emitting one extrude per edge (including the closing edge
/// back to the first vertex).
pub fn contour_path(contour: &Contour, width: Real, height: Real) -> Vec<GCode> {
    let params = ExtrudeParams { width, height };
    contour
        .edges()
        .map(|e| GCode::RawExtrude2(e.origin(), e.endpoint(), params))
        .collect()
}

/// Render a list of infill line-segment groups: the first segment of a group extrudes, later
/// segments in the same group are chained, and a non-extruding travel move bridges one
/// group's end to the next group's start.
pub fn infill_path(
    groups: &[Vec<LineSeg>],
    width: Real,
    height: Real,
) -> Result<Vec<GCode>, SliceError> {
    let params = ExtrudeParams { width, height };
    let mut out = Vec::new();
    let mut prior_end = None;

    for group in groups {
        let Some(first) = group.first() else {
            return Err(SliceError::EmptyPointList);
        };
        if let Some(end) = prior_end {
            out.push(GCode::Move2(end, first.origin()));
        }
        for seg in group {
            out.push(GCode::RawExtrude2(seg.origin(), seg.endpoint(), params));
        }
        prior_end = Some(group.last().unwrap().endpoint());
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point2;

    #[test]
    fn contour_path_closes_the_loop() {
        let square = Contour::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ]);
        let cmds = contour_path(&square, 0.4, 0.2);
        assert_eq!(cmds.len(), 4);
    }

    #[test]
    fn infill_rejects_empty_group() {
        let groups: Vec<Vec<LineSeg>> = vec![vec![]];
        assert_eq!(infill_path(&groups, 0.4, 0.2), Err(SliceError::EmptyPointList));
    }
}
