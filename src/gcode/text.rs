//! Rendering cooked [`GCode`] commands to G-code text.

use crate::errors::SliceError;
use crate::float_types::{Real, approx_eq, format_real};
use crate::gcode::GCode;

/// The motion state carried between successive [`render`] calls: the prior X/Y/Z position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorState {
    pub x: Real,
    pub y: Real,
    pub z: Real,
}

impl CursorState {
    pub fn new() -> Self {
        Self { x: Real::NAN, y: Real::NAN, z: Real::NAN }
    }

    fn axis_diff(&mut self, axis: char, value: Real, prior: &mut Real) -> Option<String> {
        if prior.is_nan() || !approx_eq(*prior, value) {
            *prior = value;
            Some(format!("{axis}{}", format_real(value)))
        } else {
            None
        }
    }
}

impl Default for CursorState {
    fn default() -> Self {
        Self::new()
    }
}

/// Render one cooked command, updating `cursor` in place. Returns `EncodingError` for raw
/// (un-cooked) extrudes or a `FeedRate` wrapping anything but `Move2`.
pub fn render(cmd: &GCode, cursor: &mut CursorState) -> Result<String, SliceError> {
    match cmd {
        GCode::Move2(_from, to) => {
            let mut line = String::from("G0 ");
            if let Some(s) = cursor.axis_diff('X', to.x, &mut cursor.x) {
                line.push_str(&s);
                line.push(' ');
            }
            if let Some(s) = cursor.axis_diff('Y', to.y, &mut cursor.y) {
                line.push_str(&s);
                line.push(' ');
            }
            Ok(line)
        }
        GCode::Move3(_from, to, _za, zb) => {
            let mut line = String::from("G0 ");
            if let Some(s) = cursor.axis_diff('X', to.x, &mut cursor.x) {
                line.push_str(&s);
                line.push(' ');
            }
            if let Some(s) = cursor.axis_diff('Y', to.y, &mut cursor.y) {
                line.push_str(&s);
                line.push(' ');
            }
            if let Some(s) = cursor.axis_diff('Z', *zb, &mut cursor.z) {
                line.push_str(&s);
                line.push(' ');
            }
            Ok(line)
        }
        GCode::Extrude2(_from, to, e) => {
            let mut line = String::from("G1 ");
            if let Some(s) = cursor.axis_diff('X', to.x, &mut cursor.x) {
                line.push_str(&s);
                line.push(' ');
            }
            if let Some(s) = cursor.axis_diff('Y', to.y, &mut cursor.y) {
                line.push_str(&s);
                line.push(' ');
            }
            line.push_str(&format!("E{}", format_real(*e)));
            Ok(line)
        }
        GCode::Extrude3(_from, to, _za, zb, e) => {
            let mut line = String::from("G1 ");
            if let Some(s) = cursor.axis_diff('X', to.x, &mut cursor.x) {
                line.push_str(&s);
                line.push(' ');
            }
            if let Some(s) = cursor.axis_diff('Y', to.y, &mut cursor.y) {
                line.push_str(&s);
                line.push(' ');
            }
            if let Some(s) = cursor.axis_diff('Z', *zb, &mut cursor.z) {
                line.push_str(&s);
                line.push(' ');
            }
            line.push_str(&format!("E{}", format_real(*e)));
            Ok(line)
        }
        GCode::FeedRate(f, inner) => match inner.as_ref() {
            GCode::Move2(..) => {
                let rest = render(inner, cursor)?;
                let rest = rest.strip_prefix("G0 ").unwrap_or(&rest);
                Ok(format!("G0 F{} {}", format_real(*f), rest))
            }
            _ => Err(SliceError::EncodingError(
                "FeedRate only applies to Move2".to_string(),
            )),
        },
        GCode::RawExtrude2(..) | GCode::RawExtrude3(..) => Err(SliceError::EncodingError(
            "cannot render a raw extrude command; cook it first".to_string(),
        )),
        GCode::LayerStart(n) => Ok(format!(";LAYER:{n}")),
        GCode::InnerWallStart => Ok(";TYPE:WALL-INNER".to_string()),
        GCode::OuterWallStart => Ok(";TYPE:WALL-OUTER".to_string()),
        GCode::SupportStart => Ok(";TYPE:SUPPORT".to_string()),
        GCode::InfillStart => Ok(";TYPE:FILL".to_string()),
    }
}

/// Render a full cooked program, threading cursor state through every command in order.
pub fn render_program(commands: &[GCode]) -> Result<Vec<String>, SliceError> {
    let mut cursor = CursorState::new();
    commands.iter().map(|c| render(c, &mut cursor)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point2;

    #[test]
    fn move2_emits_only_changed_axes() {
        let mut cursor = CursorState::new();
        cursor.x = 0.0;
        cursor.y = 0.0;
        let cmd = GCode::Move2(Point2::new(0.0, 0.0), Point2::new(5.0, 0.0));
        let line = render(&cmd, &mut cursor).unwrap();
        assert_eq!(line, "G0 X5 ");
    }

    #[test]
    fn feed_rate_prepends_f_before_axes() {
        let mut cursor = CursorState::new();
        cursor.x = 1.0;
        cursor.y = 1.0;
        let cmd = GCode::FeedRate(
            1500.0,
            Box::new(GCode::Move2(Point2::new(1.0, 1.0), Point2::new(1.0, 2.0))),
        );
        let line = render(&cmd, &mut cursor).unwrap();
        assert_eq!(line, "G0 F1500 Y2 ");
    }

    #[test]
    fn rendering_raw_extrude_is_an_encoding_error() {
        let mut cursor = CursorState::new();
        let cmd = GCode::RawExtrude2(
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            crate::gcode::ExtrudeParams { width: 0.4, height: 0.2 },
        );
        assert!(render(&cmd, &mut cursor).is_err());
    }
}
