//! Projective points and lines over the algebra in [`crate::algebra`], and the
//! intersection machinery built on them.

use crate::algebra::{E0, E01, E02, E1, E12, E2, GVec, SCALAR};
use crate::errors::SliceError;
use crate::float_types::{EPSILON, Real, approx_eq};
use crate::geometry::{LineSeg, Point2};

/// A projective point: a bivector with non-zero blades among `{e01, e02, e12}`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PPoint2(pub GVec);

/// A projective line: a vector with non-zero blades among `{e0, e1, e2}`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PLine2(pub GVec);

/// Rotational sense used by [`line_between`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl PPoint2 {
    /// Scale so that the `e12` coefficient is 1. A no-op (returns `self`) for ideal points.
    pub fn canonicalize(&self) -> PPoint2 {
        let w = self.0.get(E12);
        if w == 0.0 {
            *self
        } else {
            PPoint2(self.0.div_scalar(w))
        }
    }

    pub fn is_ideal(&self) -> bool {
        self.0.get(E12) == 0.0
    }

    pub fn to_point2(&self) -> Option<Point2> {
        if self.is_ideal() {
            return None;
        }
        let c = self.canonicalize();
        Some(Point2::new(-c.0.get(E02), c.0.get(E01)))
    }
}

impl Point2 {
    /// The projective point `e12 + y*e01 - x*e02` (already canonical, `e12` coefficient 1).
    pub fn to_ppoint2(&self) -> PPoint2 {
        let mut g = GVec::zero();
        g.add_val(E12, 1.0);
        g.add_val(E01, self.y);
        g.add_val(E02, -self.x);
        PPoint2(g)
    }
}

impl LineSeg {
    /// The projective line through this segment's endpoints.
    pub fn to_pline2(&self) -> PLine2 {
        let a = self.origin();
        let b = self.endpoint();
        let mut g = GVec::zero();
        g.add_val(E0, a.y * b.x - a.x * b.y);
        g.add_val(E1, b.y - a.y);
        g.add_val(E2, a.x - b.x);
        PLine2(g)
    }
}

/// The line through two points, via the dual-meet-dual identity `P ^ Q` in dual space.
pub fn join(p: PPoint2, q: PPoint2) -> PLine2 {
    PLine2(p.0.dual().wedge(&q.0.dual()).dual())
}

/// The point where two lines cross, as a (possibly ideal) bivector.
pub fn meet(l1: PLine2, l2: PLine2) -> PPoint2 {
    PPoint2(l1.0.wedge(&l2.0))
}

/// Extract the euclidean intersection point of two non-parallel lines.
pub fn intersect_plines(l1: PLine2, l2: PLine2) -> Option<Point2> {
    meet(l1, l2).canonicalize().to_point2()
}

/// Classify how two infinite lines relate.
pub fn plines_intersect_at(l1: PLine2, l2: PLine2) -> Intersection {
    let m = meet(l1, l2);
    if m.0.is_zero() {
        return Intersection::Collinear;
    }
    let dot = l1.0.inner(&l2.0).get(SCALAR);
    if approx_eq(dot, 1.0) {
        return Intersection::Parallel;
    }
    if approx_eq(dot, -1.0) {
        return Intersection::AntiParallel;
    }
    match m.to_point2() {
        Some(p) => Intersection::IntersectsAt(p),
        None => Intersection::Parallel,
    }
}

impl PLine2 {
    /// Shift the line along its own perpendicular by signed distance `d`.
    pub fn translate_perp(&self, d: Real) -> PLine2 {
        let mut g = self.0;
        g.add_val(E0, d);
        PLine2(g)
    }

    /// The same geometric line with grade-1 coefficients negated (reversed orientation).
    pub fn flip(&self) -> PLine2 {
        PLine2(self.0.scale(-1.0))
    }
}

/// Outcome of intersecting two geometric objects.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intersection {
    IntersectsAt(Point2),
    NoIntersection,
    Parallel,
    AntiParallel,
    Collinear,
    LCollinear(Point2, Point2),
    HitStart,
    HitEnd,
}

impl LineSeg {
    /// Intersect this segment against `other`, validating the projective answer against both
    /// segments' extents.
    pub fn intersect(&self, other: &LineSeg) -> Intersection {
        let l1 = self.to_pline2();
        let l2 = other.to_pline2();
        match plines_intersect_at(l1, l2) {
            Intersection::IntersectsAt(p) => {
                if p.approx_eq(&other.origin()) || p.approx_eq(&self.origin()) {
                    return Intersection::HitStart;
                }
                if p.approx_eq(&other.endpoint()) || p.approx_eq(&self.endpoint()) {
                    return Intersection::HitEnd;
                }
                if self.on_segment(&p) && other.on_segment(&p) {
                    Intersection::IntersectsAt(p)
                } else {
                    Intersection::NoIntersection
                }
            }
            Intersection::Collinear => {
                if self.on_segment(&other.origin()) || other.on_segment(&self.origin()) {
                    Intersection::LCollinear(self.origin(), self.endpoint())
                } else {
                    Intersection::Collinear
                }
            }
            other_outcome => other_outcome,
        }
    }
}

/// True iff sweeping `l1` toward `l2` in direction `dir` passes over `l3` first.
pub fn line_between(l1: PLine2, dir: Direction, l2: PLine2, l3: PLine2) -> bool {
    let (a, b) = match dir {
        Direction::CounterClockwise => (l1.0.inner(&l2.0).get(SCALAR), l1.0.inner(&l3.0).get(SCALAR)),
        Direction::Clockwise => (l2.0.inner(&l1.0).get(SCALAR), l3.0.inner(&l1.0).get(SCALAR)),
    };
    b >= a - EPSILON
}

/// Fold adjacent collinear segments sharing an endpoint into a single segment.
pub fn combine_consecutive_lines(segs: &[LineSeg]) -> Vec<LineSeg> {
    let mut out: Vec<LineSeg> = Vec::with_capacity(segs.len());
    for seg in segs {
        if let Some(last) = out.last_mut() {
            let same_line = meet(last.to_pline2(), seg.to_pline2()).0.is_zero();
            if same_line && last.endpoint().approx_eq(&seg.origin()) {
                *last = LineSeg {
                    p: last.p,
                    d: last.d + seg.d,
                };
                continue;
            }
        }
        out.push(*seg);
    }
    out
}

/// Map an [`Intersection`] that a caller did not expect at a given call site to the crate's
/// fatal-fallthrough error.
pub fn expect_point(i: Intersection) -> Result<Point2, SliceError> {
    match i {
        Intersection::IntersectsAt(p) => Ok(p),
        _ => Err(SliceError::InsaneIntersection),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector2;

    #[test]
    fn join_then_meet_recovers_point() {
        let p = Point2::new(0.0, 0.0).to_ppoint2();
        let q = Point2::new(1.0, 0.0).to_ppoint2();
        let r = Point2::new(0.0, 1.0).to_ppoint2();
        let recovered = meet(join(p, q), join(p, r)).canonicalize();
        assert!(recovered.to_point2().unwrap().approx_eq(&Point2::new(0.0, 0.0)));
    }

    #[test]
    fn parallel_lines_classify_parallel() {
        let l1 = LineSeg::new(Point2::new(0.0, 0.0), Vector2::new(1.0, 0.0)).unwrap();
        let l2 = LineSeg::new(Point2::new(0.0, 1.0), Vector2::new(1.0, 0.0)).unwrap();
        assert_eq!(
            plines_intersect_at(l1.to_pline2(), l2.to_pline2()),
            Intersection::Parallel
        );
    }

    #[test]
    fn translate_perp_then_intersect() {
        let base = LineSeg::new(Point2::new(0.0, 0.0), Vector2::new(1.0, 0.0))
            .unwrap()
            .to_pline2();
        let shifted = base.translate_perp(1.0);
        let vertical = LineSeg::new(Point2::new(0.0, 0.0), Vector2::new(0.0, 1.0))
            .unwrap()
            .to_pline2();
        let p = intersect_plines(shifted, vertical).unwrap();
        assert!(p.approx_eq(&Point2::new(0.0, 1.0)));
    }
}
