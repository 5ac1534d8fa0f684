// Our Real scalar type:
pub type Real = f64;

/// A small epsilon for geometric comparisons.
pub const EPSILON: Real = 1e-6;

/// Number of fractional digits kept by [`approx_eq`] and the G-code number formatter.
pub const ROUND_DIGITS: u32 = 5;

// Pi
/// Archimedes' constant (π)
pub const PI: Real = core::f64::consts::PI;

// Frac Pi 2
/// π/2
pub const FRAC_PI_2: Real = core::f64::consts::FRAC_PI_2;

// Tau
/// The full circle constant (τ)
pub const TAU: Real = core::f64::consts::TAU;

// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// Unit conversion
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
pub const INCH: Real = 25.4;
pub const FOOT: Real = 25.4 * 12.0;
pub const YARD: Real = 25.4 * 36.0;
pub const MM: Real = 1.0;
pub const CM: Real = 10.0;
pub const METER: Real = 1000.0;

/// Equality at [`ROUND_DIGITS`] fractional digits: two values are equal if they
/// round to the same fixed-point representation.
pub fn approx_eq(a: Real, b: Real) -> bool {
    round5(a) == round5(b)
}

fn round5(v: Real) -> Real {
    let scale = 10i64.pow(ROUND_DIGITS) as Real;
    (v * scale).round() / scale
}

/// Render a value as fixed point with [`ROUND_DIGITS`] fractional digits, then strip
/// trailing zeros and a dangling decimal point. Exact zero renders as `"0"`.
pub fn format_real(v: Real) -> String {
    let rounded = round5(v);
    if rounded == 0.0 {
        return "0".to_string();
    }
    let s = format!("{:.*}", ROUND_DIGITS as usize, rounded);
    let s = s.trim_end_matches('0');
    let s = s.trim_end_matches('.');
    s.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_strip_trailing_zeros() {
        assert_eq!(format_real(5.0), "5");
        assert_eq!(format_real(1500.0), "1500");
        assert_eq!(format_real(0.0), "0");
        assert_eq!(format_real(2.329_9), "2.3299");
    }

    #[test]
    fn approx_eq_rounds_to_five_digits() {
        assert!(approx_eq(1.000_001, 1.000_002_4));
        assert!(!approx_eq(1.0, 1.00001));
    }
}
