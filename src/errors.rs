use crate::geometry::Point2;
use thiserror::Error;

/// All the ways the slicing core can fail.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SliceError {
    /// A `LineSeg` was constructed with zero displacement.
    #[error("degenerate segment at {0:?}")]
    DegenerateSegment(Point2),
    /// An operation needed at least one point/segment and got none.
    #[error("empty point list")]
    EmptyPointList,
    /// Contour assembly could not close a loop from the given fragments.
    #[error("unclosed loop, last point {0:?}")]
    UnclosedLoop(Point2),
    /// A PGA classifier saw an intersection variant it did not expect.
    #[error("insane intersection")]
    InsaneIntersection,
    /// A cooked or raw G-code command could not be rendered to text.
    #[error("encoding error: {0}")]
    EncodingError(String),
    /// `cook` was handed a command that was already cooked.
    #[error("command already cooked")]
    AlreadyCooked,
    /// A `Triangle` had collinear or coincident vertices.
    #[error("degenerate triangle")]
    DegenerateTriangle,
    /// A slicing plane produced a degenerate (non-2-point) triangle intersection.
    #[error("degenerate plane intersection")]
    DegeneratePlane,
}
