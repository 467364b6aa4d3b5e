//! Representation of axis-aligned rectangles.

use crate::num::Float;
use nalgebra::{self as na, Point2, Vector2, point};

/// A 2D rectangle with edges aligned with the coordinate system axes.
#[derive(Clone, Debug, PartialEq)]
pub struct Rectangle<F: Float> {
    corners: [Point2<F>; 2],
}

impl<F: Float> Rectangle<F> {
    /// Creates a new rectangle with the given lower and upper corner points.
    pub fn new(lower_corner: Point2<F>, upper_corner: Point2<F>) -> Self {
        Self {
            corners: [lower_corner, upper_corner],
        }
    }

    /// Returns a reference to the lower corner of the rectangle.
    pub fn lower_corner(&self) -> &Point2<F> {
        &self.corners[0]
    }

    /// Returns a reference to the upper corner of the rectangle.
    pub fn upper_corner(&self) -> &Point2<F> {
        &self.corners[1]
    }

    /// Calculates and returns the center point of the rectangle.
    pub fn center(&self) -> Point2<F> {
        na::center(self.lower_corner(), self.upper_corner())
    }

    /// Returns the extents of the rectangle along the two axes.
    pub fn extents(&self) -> Vector2<F> {
        self.upper_corner() - self.lower_corner()
    }

    /// Whether the given point is inside this rectangle. A point exactly on
    /// the boundary is considered inside.
    pub fn contains_point(&self, point: &Point2<F>) -> bool {
        point.x >= self.lower_corner().x
            && point.x <= self.upper_corner().x
            && point.y >= self.lower_corner().y
            && point.y <= self.upper_corner().y
    }

    /// Whether all of the given rectangle is outside this rectangle. If the
    /// boundaries exactly touch each other, the rectangle is considered
    /// inside.
    pub fn rectangle_lies_outside(&self, other: &Self) -> bool {
        !((self.lower_corner().x <= other.upper_corner().x
            && self.upper_corner().x >= other.lower_corner().x)
            && (self.lower_corner().y <= other.upper_corner().y
                && self.upper_corner().y >= other.lower_corner().y))
    }

    /// Computes the point inside the rectangle that is closest to the given
    /// point. The given point is returned if it already lies inside the
    /// rectangle.
    pub fn compute_closest_point(&self, point: &Point2<F>) -> Point2<F> {
        point![
            point.x.clamp(self.lower_corner().x, self.upper_corner().x),
            point.y.clamp(self.lower_corner().y, self.upper_corner().y)
        ]
    }

    /// Computes the rectangle covering only the area covered by both this
    /// and the given rectangle, or [`None`] if the two rectangles do not
    /// overlap.
    pub fn compute_overlap_with(&self, other: &Self) -> Option<Self> {
        let lower_corner = self.lower_corner().sup(other.lower_corner());
        let upper_corner = self.upper_corner().inf(other.upper_corner());
        let diff = upper_corner - lower_corner;

        if diff.x < F::ZERO || diff.y < F::ZERO {
            None
        } else {
            Some(Self::new(lower_corner, upper_corner))
        }
    }
}
