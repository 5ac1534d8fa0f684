//! Euclidean primitives: points, line segments, and triangles.
//!
//! These are the plain (non-projective) types that the [`slice`](crate::slice) and
//! [`contour`](crate::contour) modules operate on. The projective counterparts used for
//! robust intersection live in [`pga`](crate::pga).

use crate::errors::SliceError;
use crate::float_types::{Real, approx_eq};
use nalgebra::{Point3 as NaPoint3, Vector2};

/// A point in the plane of a single slice layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2 {
    pub x: Real,
    pub y: Real,
}

impl Point2 {
    pub const fn new(x: Real, y: Real) -> Self {
        Self { x, y }
    }

    pub fn approx_eq(&self, other: &Point2) -> bool {
        approx_eq(self.x, other.x) && approx_eq(self.y, other.y)
    }

    pub fn distance(&self, other: &Point2) -> Real {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    pub fn to_vector(self) -> Vector2<Real> {
        Vector2::new(self.x, self.y)
    }
}

/// A point in model space, used by [`Triangle`] before slicing collapses it to 2D.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point3 {
    pub x: Real,
    pub y: Real,
    pub z: Real,
}

impl Point3 {
    pub const fn new(x: Real, y: Real, z: Real) -> Self {
        Self { x, y, z }
    }

    /// Drop the z coordinate.
    pub const fn xy(&self) -> Point2 {
        Point2::new(self.x, self.y)
    }

    pub fn to_na(self) -> NaPoint3<Real> {
        NaPoint3::new(self.x, self.y, self.z)
    }
}

/// A directed line segment `p -> p + d`, with `d != 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSeg {
    pub p: Point2,
    pub d: Vector2<Real>,
}

impl LineSeg {
    /// Build a segment from an origin and a displacement. Fails if `d` is (numerically) zero.
    pub fn new(p: Point2, d: Vector2<Real>) -> Result<Self, SliceError> {
        if approx_eq(d.x, 0.0) && approx_eq(d.y, 0.0) {
            return Err(SliceError::DegenerateSegment(p));
        }
        Ok(Self { p, d })
    }

    /// Build a segment from two distinct points.
    pub fn from_points(a: Point2, b: Point2) -> Result<Self, SliceError> {
        Self::new(a, Vector2::new(b.x - a.x, b.y - a.y))
    }

    pub fn origin(&self) -> Point2 {
        self.p
    }

    pub fn endpoint(&self) -> Point2 {
        Point2::new(self.p.x + self.d.x, self.p.y + self.d.y)
    }

    pub fn midpoint(&self) -> Point2 {
        Point2::new(self.p.x + self.d.x * 0.5, self.p.y + self.d.y * 0.5)
    }

    pub fn length(&self) -> Real {
        self.d.norm()
    }

    /// A segment with endpoint and origin swapped, tracing the same geometry in reverse.
    pub fn flip(&self) -> LineSeg {
        LineSeg {
            p: self.endpoint(),
            d: -self.d,
        }
    }

    /// True if `q` lies on the (closed) segment, at [`crate::float_types::EPSILON`] tolerance.
    pub fn on_segment(&self, q: &Point2) -> bool {
        let to_q = Vector2::new(q.x - self.p.x, q.y - self.p.y);
        // collinearity via cross product
        let cross = self.d.x * to_q.y - self.d.y * to_q.x;
        if cross.abs() > 1e-6 * self.d.norm().max(1.0) {
            return false;
        }
        let t = to_q.dot(&self.d) / self.d.norm_squared();
        (-1e-9..=1.0 + 1e-9).contains(&t)
    }
}

/// A triangle in model space, usually one face of a triangulated mesh.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub v0: Point3,
    pub v1: Point3,
    pub v2: Point3,
}

impl Triangle {
    /// Build a triangle, rejecting vertices that are coincident or collinear.
    pub fn new(v0: Point3, v1: Point3, v2: Point3) -> Result<Self, SliceError> {
        let ux = v1.x - v0.x;
        let uy = v1.y - v0.y;
        let uz = v1.z - v0.z;
        let vx = v2.x - v0.x;
        let vy = v2.y - v0.y;
        let vz = v2.z - v0.z;
        let cx = uy * vz - uz * vy;
        let cy = uz * vx - ux * vz;
        let cz = ux * vy - uy * vx;
        let area2 = (cx * cx + cy * cy + cz * cz).sqrt();
        if area2 < 1e-12 {
            return Err(SliceError::DegenerateTriangle);
        }
        Ok(Self { v0, v1, v2 })
    }

    /// The three sides, cyclically: (v0,v1), (v1,v2), (v2,v0).
    pub fn edges(&self) -> [(Point3, Point3); 3] {
        [(self.v0, self.v1), (self.v1, self.v2), (self.v2, self.v0)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_flip_round_trips() {
        let s = LineSeg::from_points(Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)).unwrap();
        let f = s.flip();
        assert!(f.endpoint().approx_eq(&s.origin()));
        assert_eq!(f.flip(), s);
    }

    #[test]
    fn zero_displacement_is_degenerate() {
        let p = Point2::new(1.0, 1.0);
        assert!(LineSeg::new(p, Vector2::new(0.0, 0.0)).is_err());
    }

    #[test]
    fn degenerate_triangle_is_rejected() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(1.0, 0.0, 0.0);
        let c = Point3::new(2.0, 0.0, 0.0);
        assert!(Triangle::new(a, b, c).is_err());
    }
}
