//! Turning raw extrude commands into cooked commands carrying absolute cumulative `E`.

use crate::errors::SliceError;
use crate::float_types::{PI, Real};
use crate::gcode::{ExtruderState, GCode};

/// Volume-conserving filament feed for one extrusion of the given path length and
/// cross-section: `delta_e = (width * height * length * 2) / (pi * filament_diameter)`.
pub fn delta_e(length: Real, width: Real, height: Real, filament_diameter: Real) -> Real {
    (width * height * length * 2.0) / (PI * filament_diameter)
}

fn command_delta_e(cmd: &GCode, filament_diameter: Real) -> Result<Real, SliceError> {
    match cmd {
        GCode::RawExtrude2(a, b, params) => {
            let len = a.distance(b);
            Ok(delta_e(len, params.width, params.height, filament_diameter))
        }
        GCode::RawExtrude3(a, b, _za, _zb, params) => {
            let len = a.distance(b);
            Ok(delta_e(len, params.width, params.height, filament_diameter))
        }
        GCode::Extrude2(..) | GCode::Extrude3(..) => Err(SliceError::AlreadyCooked),
        _ => Ok(0.0),
    }
}

fn cooked_of(cmd: GCode, e: Real) -> GCode {
    match cmd {
        GCode::RawExtrude2(a, b, _) => GCode::Extrude2(a, b, e),
        GCode::RawExtrude3(a, b, za, zb, _) => GCode::Extrude3(a, b, za, zb, e),
        GCode::FeedRate(f, inner) => GCode::FeedRate(f, Box::new(cooked_of(*inner, e))),
        other => other,
    }
}

/// Cook a sequence of raw commands, reading the starting `E` from `state` and writing the
/// final `E` back. Rejects input that is already cooked rather than silently re-folding it.
#[cfg(not(feature = "parallel"))]
pub fn cook(commands: Vec<GCode>, state: &mut ExtruderState) -> Result<Vec<GCode>, SliceError> {
    let mut e = state.e;
    let mut out = Vec::with_capacity(commands.len());
    for cmd in commands {
        let d = command_delta_e(&cmd, state.filament_diameter)?;
        e += d;
        out.push(cooked_of(cmd, e));
    }
    state.e = e;
    Ok(out)
}

/// Parallel-chunked variant: each chunk's local prefix sum is computed concurrently, then a
/// single sequential pass folds in each chunk's starting offset.
#[cfg(feature = "parallel")]
pub fn cook(commands: Vec<GCode>, state: &mut ExtruderState) -> Result<Vec<GCode>, SliceError> {
    use rayon::prelude::*;

    let n = commands.len();
    if n == 0 {
        return Ok(Vec::new());
    }
    let threads = rayon::current_num_threads().max(1);
    let chunk_len = n.div_ceil(threads);

    let deltas: Vec<Real> = commands
        .par_iter()
        .map(|c| command_delta_e(c, state.filament_diameter))
        .collect::<Result<Vec<_>, _>>()?;

    let chunk_sums: Vec<Vec<Real>> = deltas
        .par_chunks(chunk_len)
        .map(|chunk| {
            let mut local = Vec::with_capacity(chunk.len());
            let mut running = 0.0;
            for d in chunk {
                running += d;
                local.push(running);
            }
            local
        })
        .collect();

    let mut offsets = Vec::with_capacity(chunk_sums.len());
    let mut running_offset = state.e;
    for sums in &chunk_sums {
        offsets.push(running_offset);
        running_offset += sums.last().copied().unwrap_or(0.0);
    }

    let cumulative: Vec<Real> = chunk_sums
        .into_par_iter()
        .zip(offsets.into_par_iter())
        .flat_map(|(sums, offset)| sums.into_par_iter().map(move |s| s + offset))
        .collect();

    let out = commands
        .into_iter()
        .zip(cumulative.iter())
        .map(|(cmd, &e)| cooked_of(cmd, e))
        .collect();

    state.e = running_offset;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gcode::ExtrudeParams;
    use crate::geometry::Point2;

    #[test]
    fn cooking_perimeter_matches_volume_law() {
        let square = [
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 10.0),
            Point2::new(0.0, 10.0),
        ];
        let params = ExtrudeParams {
            width: 0.4,
            height: 0.2,
        };
        let commands: Vec<GCode> = (0..4)
            .map(|i| GCode::RawExtrude2(square[i], square[(i + 1) % 4], params))
            .collect();
        let mut state = ExtruderState::new(1.75);
        let cooked = cook(commands, &mut state).unwrap();
        assert_eq!(cooked.len(), 4);
        let expected = 4.0 * delta_e(10.0, 0.4, 0.2, 1.75);
        assert!((state.e - expected).abs() < 1e-9);
    }

    #[test]
    fn recooking_is_rejected() {
        let mut state = ExtruderState::new(1.75);
        let already = vec![GCode::Extrude2(Point2::new(0.0, 0.0), Point2::new(1.0, 0.0), 0.5)];
        assert_eq!(cook(already, &mut state), Err(SliceError::AlreadyCooked));
    }
}
