//! Assembling unordered edge fragments into oriented closed loops, and nesting those loops
//! into a containment tree.

pub mod interior;
pub mod skeleton;

use crate::errors::SliceError;
use crate::float_types::Real;
use crate::geometry::{LineSeg, Point2};
use crate::pga::Intersection;

/// A closed, oriented polygon: `points[i] -> points[(i+1) % len]` for all `i`, interior to the
/// right of each directed edge once [`Contour::fix_winding`] has run.
#[derive(Debug, Clone, PartialEq)]
pub struct Contour {
    pub points: Vec<Point2>,
}

impl Contour {
    pub fn new(points: Vec<Point2>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn prev_index(&self, i: usize) -> usize {
        (i + self.points.len() - 1) % self.points.len()
    }

    pub fn next_index(&self, i: usize) -> usize {
        (i + 1) % self.points.len()
    }

    /// The segment from vertex `i` to vertex `i+1` (wrapping).
    pub fn edge(&self, i: usize) -> LineSeg {
        LineSeg::from_points(self.points[i], self.points[self.next_index(i)])
            .expect("contour edges are never degenerate once assembled")
    }

    pub fn edges(&self) -> impl Iterator<Item = LineSeg> + '_ {
        (0..self.points.len()).map(move |i| self.edge(i))
    }

    /// Count crossings of the ray `from -> to` against this contour's edges, used by both
    /// winding-fix and containment tests. Coincident (collinear) touches do not count.
    pub fn ray_crossings(&self, from: Point2, to: Point2, skip: Option<usize>) -> usize {
        let ray = LineSeg::from_points(from, to).expect("distinct ray endpoints");
        self.edges()
            .enumerate()
            .filter(|(i, _)| skip != Some(*i))
            .filter(|(_, e)| {
                matches!(
                    ray.intersect(e),
                    Intersection::IntersectsAt(_) | Intersection::HitStart | Intersection::HitEnd
                )
            })
            .count()
    }

    /// Flip the loop in place if the interior currently lies to the left of edge 0.
    pub fn fix_winding(&mut self, far: Point2) {
        if self.points.len() < 3 {
            return;
        }
        let mid = self.edge(0).midpoint();
        let crossings = self.ray_crossings(mid, far, Some(0));
        if crossings % 2 == 1 {
            self.points.reverse();
        }
    }

    /// True if an interior sample of `other` (inset from its first edge, per
    /// [`crate::contour::interior::inner_perimeter_point`]) lies inside `self`, by ray parity
    /// against `far`. Using an inset sample rather than a bare vertex keeps the ray-cast origin
    /// off `self`'s boundary in the common case of edge-touching contours.
    ///
    /// A contour sharing `other`'s exact boundary (the same loop, up to rotation or direction)
    /// never contains it: an interior sample of `other` would trivially land inside `self` too
    /// in that case, which is not containment, just the same region.
    pub fn contains(&self, other: &Contour, far: Point2) -> bool {
        if other.len() < 3 {
            return false;
        }
        if self.shares_boundary_with(other) {
            return false;
        }
        let inset = other.edge(0).length() * 1e-3;
        let sample = interior::inner_perimeter_point(other, 0, inset.max(crate::float_types::EPSILON), far);
        self.ray_crossings(sample, far, None) % 2 == 1
    }

    /// True if `self` and `other` trace the same polygon: equal vertex count and, for some
    /// rotation and direction, pointwise-equal vertices.
    fn shares_boundary_with(&self, other: &Contour) -> bool {
        let n = self.points.len();
        if n != other.points.len() {
            return false;
        }
        let forward: Vec<Point2> = other.points.clone();
        let backward: Vec<Point2> = other.points.iter().rev().copied().collect();
        [forward, backward].iter().any(|candidate| {
            (0..n).any(|start| {
                (0..n).all(|i| self.points[i].approx_eq(&candidate[(start + i) % n]))
            })
        })
    }

    pub fn to_geo_polygon(&self) -> geo::Polygon<Real> {
        let mut coords: Vec<geo::Coord<Real>> = self
            .points
            .iter()
            .map(|p| geo::Coord { x: p.x, y: p.y })
            .collect();
        if let Some(first) = coords.first().copied() {
            coords.push(first);
        }
        geo::Polygon::new(geo::LineString::new(coords), vec![])
    }
}

/// A point reasonably far outside the bounding box of every contour passed in, used as the
/// ray-casting reference for winding-fix, containment, and the interior probe. Replaces a
/// hardcoded corner, which only works when all geometry sits in the positive quadrant.
pub fn far_reference(contours: &[Contour]) -> Point2 {
    let mut min_x = Real::INFINITY;
    let mut min_y = Real::INFINITY;
    for c in contours {
        for p in &c.points {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
        }
    }
    if !min_x.is_finite() {
        min_x = 0.0;
    }
    if !min_y.is_finite() {
        min_y = 0.0;
    }
    Point2::new(min_x - 1.0, min_y - 1.0)
}

/// Stitch unordered directed point-pair fragments into closed loops.
///
/// Fragments are consumed greedily: starting from the lexicographically first remaining
/// fragment, the loop is extended by matching its current endpoint against any other
/// fragment's start (forward) or end (backward, which is inserted reversed), until the loop
/// closes on its own start point. Loops shorter than 3 vertices are silently dropped.
pub fn assemble_loops(fragments: &[(Point2, Point2)]) -> Result<Vec<Contour>, SliceError> {
    let mut remaining: Vec<(Point2, Point2)> = fragments.to_vec();
    remaining.sort_by(|a, b| {
        (a.0.x, a.0.y, a.1.x, a.1.y)
            .partial_cmp(&(b.0.x, b.0.y, b.1.x, b.1.y))
            .expect("finite coordinates")
    });

    let mut loops = Vec::new();
    while !remaining.is_empty() {
        let start_frag = remaining.remove(0);
        let start = start_frag.0;
        let mut loop_pts = vec![start_frag.0, start_frag.1];
        let mut end = start_frag.1;

        loop {
            if end.approx_eq(&start) {
                loop_pts.pop();
                break;
            }
            let Some(idx) = remaining.iter().position(|(a, b)| {
                a.approx_eq(&end) || b.approx_eq(&end)
            }) else {
                return Err(SliceError::UnclosedLoop(end));
            };
            let (a, b) = remaining.remove(idx);
            let next = if a.approx_eq(&end) { b } else { a };
            loop_pts.push(next);
            end = next;
        }

        if loop_pts.len() >= 3 {
            loops.push(Contour::new(loop_pts));
        }
    }
    Ok(loops)
}

/// A node in the containment forest: one contour and the contours directly nested inside it.
#[derive(Debug, Clone, PartialEq)]
pub struct ContourTree {
    pub contour: Contour,
    pub children: Vec<ContourTree>,
}

impl ContourTree {
    /// Build a forest from a flat list of (already wound) contours.
    pub fn build(mut contours: Vec<Contour>) -> Vec<ContourTree> {
        let far = far_reference(&contours);
        // Largest-area-first is not required for correctness (containment is checked
        // pairwise) but keeps likely-parent candidates earlier, reducing re-parenting churn.
        contours.sort_by(|a, b| signed_area(b).abs().partial_cmp(&signed_area(a).abs()).unwrap());

        let mut roots: Vec<ContourTree> = Vec::new();
        'outer: for c in contours {
            let node = ContourTree {
                contour: c,
                children: Vec::new(),
            };
            if insert_into(&mut roots, node.clone(), far) {
                continue 'outer;
            }
            roots.push(node);
        }
        roots
    }
}

fn insert_into(forest: &mut Vec<ContourTree>, node: ContourTree, far: Point2) -> bool {
    for parent in forest.iter_mut() {
        if parent.contour.contains(&node.contour, far) {
            if !insert_into(&mut parent.children, node.clone(), far) {
                parent.children.push(node);
            }
            return true;
        }
    }
    false
}

/// Signed area via a robust-predicate triangle fan from `points[0]`, so the area-ordering
/// used to pick likely parents first is not thrown off by catastrophic cancellation on
/// near-collinear vertices, the same concern `robust::orient2d` addresses for
/// `mesh::plane`-style orientation tests in the donor crate.
fn signed_area(c: &Contour) -> Real {
    let n = c.points.len();
    if n < 3 {
        return 0.0;
    }
    let origin = to_coord(c.points[0]);
    let mut sum = 0.0;
    for i in 1..n - 1 {
        sum += robust::orient2d(origin, to_coord(c.points[i]), to_coord(c.points[i + 1]));
    }
    sum * 0.5
}

fn to_coord(p: Point2) -> robust::Coord<Real> {
    robust::Coord { x: p.x, y: p.y }
}

/// Build directed fragments from a set of [`Point2`] segments with an explicit winding
/// direction, used by tests and by callers that already have ordered rings.
pub fn ring_to_fragments(points: &[Point2]) -> Vec<(Point2, Point2)> {
    let n = points.len();
    (0..n).map(|i| (points[i], points[(i + 1) % n])).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(x0: Real, y0: Real, s: Real) -> Vec<(Point2, Point2)> {
        ring_to_fragments(&[
            Point2::new(x0, y0),
            Point2::new(x0 + s, y0),
            Point2::new(x0 + s, y0 + s),
            Point2::new(x0, y0 + s),
        ])
    }

    #[test]
    fn assembles_single_square_loop() {
        let loops = assemble_loops(&square(0.0, 0.0, 1.0)).unwrap();
        assert_eq!(loops.len(), 1);
        assert_eq!(loops[0].len(), 4);
    }

    #[test]
    fn nested_squares_build_parent_child_tree() {
        let mut outer = Contour::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 10.0),
            Point2::new(0.0, 10.0),
        ]);
        let mut inner = Contour::new(vec![
            Point2::new(2.0, 2.0),
            Point2::new(8.0, 2.0),
            Point2::new(8.0, 8.0),
            Point2::new(2.0, 8.0),
        ]);
        let far = far_reference(&[outer.clone(), inner.clone()]);
        outer.fix_winding(far);
        inner.fix_winding(far);
        let forest = ContourTree::build(vec![outer, inner]);
        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].children.len(), 1);
    }

    #[test]
    fn contour_does_not_contain_itself() {
        let mut square = Contour::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ]);
        let far = far_reference(&[square.clone()]);
        square.fix_winding(far);
        assert!(!square.contains(&square, far));

        let rotated = Contour::new(vec![
            square.points[2],
            square.points[3],
            square.points[0],
            square.points[1],
        ]);
        assert!(!square.contains(&rotated, far));
    }
}
