//! Multivector arithmetic for the 2D projective algebra Cl(2,0,1).
//!
//! Basis blades, in slot order: `1, e0, e1, e2, e0^e1, e0^e2, e1^e2, e0^e1^e2`.
//! Signature: `e0*e0 = 0`, `e1*e1 = 1`, `e2*e2 = 1`. A [`GVec`] stores at most one
//! coefficient per blade in a fixed 8-slot array rather than a map, since there are only
//! eight possible keys.

use crate::float_types::Real;

/// Index of a basis blade within [`GVec::coeffs`].
pub type Blade = usize;

pub const SCALAR: Blade = 0;
pub const E0: Blade = 1;
pub const E1: Blade = 2;
pub const E2: Blade = 3;
pub const E01: Blade = 4;
pub const E02: Blade = 5;
pub const E12: Blade = 6;
pub const E012: Blade = 7;

/// A sparse multivector over Cl(2,0,1), represented densely as eight optional slots.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GVec {
    coeffs: [Option<Real>; 8],
}

impl GVec {
    pub const fn zero() -> Self {
        Self { coeffs: [None; 8] }
    }

    pub fn scalar(v: Real) -> Self {
        let mut g = Self::zero();
        g.add_val(SCALAR, v);
        g
    }

    pub fn get(&self, blade: Blade) -> Real {
        self.coeffs[blade].unwrap_or(0.0)
    }

    /// Insert-or-sum a coefficient. A running sum that rounds back to zero drops the slot,
    /// keeping the representation sparse.
    pub fn add_val(&mut self, blade: Blade, v: Real) {
        let cur = self.coeffs[blade].unwrap_or(0.0) + v;
        self.coeffs[blade] = if cur == 0.0 { None } else { Some(cur) };
    }

    pub fn is_zero(&self) -> bool {
        self.coeffs.iter().all(Option::is_none)
    }

    pub fn add(&self, other: &GVec) -> GVec {
        let mut out = *self;
        for (blade, v) in other.coeffs.iter().enumerate() {
            if let Some(v) = v {
                out.add_val(blade, *v);
            }
        }
        out
    }

    pub fn scale(&self, s: Real) -> GVec {
        let mut out = GVec::zero();
        for (blade, v) in self.coeffs.iter().enumerate() {
            if let Some(v) = v {
                out.add_val(blade, v * s);
            }
        }
        out
    }

    pub fn div_scalar(&self, s: Real) -> GVec {
        self.scale(1.0 / s)
    }

    /// Split into `(grade-0 coefficient, remainder with that slot cleared)`.
    pub fn scalarize(&self) -> (Real, GVec) {
        let s = self.get(SCALAR);
        let mut rest = *self;
        rest.coeffs[SCALAR] = None;
        (s, rest)
    }

    /// The exterior product. Grade-raising and anticommutative; returns zero for any product
    /// that would collapse through a repeated `e0` factor (`e0*e0 = 0` here).
    pub fn wedge(&self, other: &GVec) -> GVec {
        let mut out = GVec::zero();
        for (ba, va) in self.coeffs.iter().enumerate() {
            let Some(va) = va else { continue };
            for (bb, vb) in other.coeffs.iter().enumerate() {
                let Some(vb) = vb else { continue };
                if let Some((blade, sign)) = wedge_table(ba, bb) {
                    out.add_val(blade, sign * va * vb);
                }
            }
        }
        out
    }

    /// The symmetric inner (dot) product, including the squared-blade signature.
    pub fn inner(&self, other: &GVec) -> GVec {
        let mut out = GVec::zero();
        for (ba, va) in self.coeffs.iter().enumerate() {
            let Some(va) = va else { continue };
            for (bb, vb) in other.coeffs.iter().enumerate() {
                let Some(vb) = vb else { continue };
                if let Some((blade, sign)) = inner_table(ba, bb) {
                    out.add_val(blade, sign * va * vb);
                }
            }
        }
        out
    }

    /// The Hodge-style dual: `blade -> complement(blade)` with this signature's signs.
    pub fn dual(&self) -> GVec {
        let mut out = GVec::zero();
        for (blade, v) in self.coeffs.iter().enumerate() {
            if let Some(v) = v {
                let (d, sign) = dual_table(blade);
                out.add_val(d, sign * v);
            }
        }
        out
    }
}

const BLADE_SETS: [&[usize]; 8] = [
    &[],
    &[0],
    &[1],
    &[2],
    &[0, 1],
    &[0, 2],
    &[1, 2],
    &[0, 1, 2],
];

fn basis_of(blade: Blade) -> &'static [usize] {
    BLADE_SETS[blade]
}

fn index_of(set: &[usize]) -> Option<Blade> {
    BLADE_SETS.iter().position(|b| *b == set)
}

/// Permutation sign to sort `a` then `b` concatenated, cancelling repeats, yielding
/// `Some((resulting_blade, sign))`, or `None` if a repeated basis vector other than `e1`/`e2`
/// kills the product (`e0^e0 = 0`).
fn wedge_table(a: Blade, b: Blade) -> Option<(Blade, Real)> {
    let mut merged: Vec<usize> = basis_of(a).to_vec();
    merged.extend_from_slice(basis_of(b));
    if merged.len() > 3 {
        return None;
    }
    // bubble sort counting swaps, detecting repeats (wedge of a vector with itself is 0)
    let mut sign = 1.0;
    for i in 0..merged.len() {
        for j in 0..merged.len() - i - 1 {
            if merged[j] == merged[j + 1] {
                return None;
            }
            if merged[j] > merged[j + 1] {
                merged.swap(j, j + 1);
                sign = -sign;
            }
        }
    }
    index_of(&merged).map(|blade| (blade, sign))
}

/// Like [`wedge_table`] but repeated basis vectors contract via the metric instead of
/// vanishing: `e0*e0 = 0`, `e1*e1 = e2*e2 = 1`.
fn inner_table(a: Blade, b: Blade) -> Option<(Blade, Real)> {
    let mut merged: Vec<usize> = basis_of(a).to_vec();
    merged.extend_from_slice(basis_of(b));
    let mut sign = 1.0;
    // bubble sort with metric contraction of adjacent repeats
    let mut i = 0;
    while i < merged.len() {
        let mut j = 0;
        while j + 1 < merged.len() {
            if merged[j] == merged[j + 1] {
                let e = merged[j];
                let metric = if e == 0 { 0.0 } else { 1.0 };
                if metric == 0.0 {
                    return None;
                }
                merged.remove(j + 1);
                merged.remove(j);
            } else if merged[j] > merged[j + 1] {
                merged.swap(j, j + 1);
                sign = -sign;
                j += 1;
            } else {
                j += 1;
            }
        }
        i += 1;
        if i > merged.len() + 4 {
            break;
        }
    }
    index_of(&merged).map(|blade| (blade, sign))
}

/// Complement blade and the sign such that dual-of-dual is the identity on grades 0..=3
/// for this signature.
fn dual_table(blade: Blade) -> (Blade, Real) {
    match blade {
        SCALAR => (E012, 1.0),
        E0 => (E12, 1.0),
        E1 => (E02, -1.0),
        E2 => (E01, 1.0),
        E01 => (E2, 1.0),
        E02 => (E1, -1.0),
        E12 => (E0, 1.0),
        E012 => (SCALAR, 1.0),
        _ => unreachable!("blade index out of range"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wedge_is_anticommutative_for_vectors() {
        let e1 = GVec::scalar(0.0).with(E1, 1.0);
        let e2 = GVec::scalar(0.0).with(E2, 1.0);
        let fwd = e1.wedge(&e2);
        let bwd = e2.wedge(&e1);
        assert_eq!(fwd.get(E12), 1.0);
        assert_eq!(bwd.get(E12), -1.0);
    }

    #[test]
    fn dual_of_dual_is_identity_on_vectors() {
        let v = GVec::zero().with(E1, 2.0).with(E2, 3.0);
        let dd = v.dual().dual();
        assert_eq!(dd.get(E1), 2.0);
        assert_eq!(dd.get(E2), 3.0);
    }

    #[test]
    fn add_val_drops_exact_zero() {
        let mut g = GVec::zero();
        g.add_val(E1, 5.0);
        g.add_val(E1, -5.0);
        assert!(g.is_zero());
    }

    #[test]
    fn e0_squares_to_zero_under_inner() {
        let e0 = GVec::zero().with(E0, 1.0);
        let r = e0.inner(&e0);
        assert!(r.is_zero());
    }

    impl GVec {
        fn with(mut self, blade: Blade, v: Real) -> Self {
            self.add_val(blade, v);
            self
        }
    }
}
