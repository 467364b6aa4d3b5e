//! Representation of rays and line segments.

use crate::{AxisAlignedBox, num::Float};
use nalgebra::{self as na, Point3, UnitVector3, Vector3};

/// A ray defined by an origin and a unit direction.
#[derive(Clone, Debug)]
pub struct Ray<F: Float> {
    origin: Point3<F>,
    direction: UnitVector3<F>,
}

/// A line segment defined by its two endpoints.
#[derive(Clone, Debug, PartialEq)]
pub struct LineSegment<F: Float> {
    start: Point3<F>,
    end: Point3<F>,
}

impl<F: Float> Ray<F> {
    /// Creates a new ray with the given origin and direction.
    pub fn new(origin: Point3<F>, direction: UnitVector3<F>) -> Self {
        Self { origin, direction }
    }

    /// Returns the origin of the ray.
    pub fn origin(&self) -> &Point3<F> {
        &self.origin
    }

    /// Returns the unit direction of the ray.
    pub fn direction(&self) -> &UnitVector3<F> {
        &self.direction
    }

    /// Computes the point lying the given distance along the ray from its
    /// origin.
    pub fn point_at_distance(&self, distance: F) -> Point3<F> {
        self.origin + self.direction.scale(distance)
    }
}

impl<F: Float> LineSegment<F> {
    /// Creates a new line segment between the given start and end points.
    pub fn new(start: Point3<F>, end: Point3<F>) -> Self {
        Self { start, end }
    }

    /// Returns the start point of the segment.
    pub fn start(&self) -> &Point3<F> {
        &self.start
    }

    /// Returns the end point of the segment.
    pub fn end(&self) -> &Point3<F> {
        &self.end
    }

    /// Returns the offset vector from the start to the end of the segment.
    pub fn offset(&self) -> Vector3<F> {
        self.end - self.start
    }

    /// Computes the length of the segment.
    pub fn length(&self) -> F {
        self.offset().norm()
    }

    /// Calculates and returns the center point of the segment.
    pub fn center(&self) -> Point3<F> {
        na::center(&self.start, &self.end)
    }

    /// Computes the point at the given parameter along the segment, with
    /// zero corresponding to the start point and one to the end point.
    pub fn point_at_parameter(&self, t: F) -> Point3<F> {
        self.start + self.offset().scale(t)
    }

    /// Computes the axis-aligned bounding box of the segment.
    pub fn compute_aabb(&self) -> AxisAlignedBox<F> {
        AxisAlignedBox::new(self.start.inf(&self.end), self.start.sup(&self.end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use nalgebra::{Vector3, point};

    #[test]
    fn ray_point_at_distance_moves_along_direction() {
        let ray = Ray::new(point![1.0, 2.0, 3.0], Vector3::x_axis());
        assert_abs_diff_eq!(ray.point_at_distance(0.0), point![1.0, 2.0, 3.0]);
        assert_abs_diff_eq!(ray.point_at_distance(2.5), point![3.5, 2.0, 3.0]);
        assert_abs_diff_eq!(ray.point_at_distance(-1.0), point![0.0, 2.0, 3.0]);
    }

    #[test]
    fn segment_offset_and_length_are_correct() {
        let segment = LineSegment::new(point![1.0, 1.0, 1.0], point![1.0, 4.0, 5.0]);
        assert_abs_diff_eq!(segment.offset(), Vector3::new(0.0, 3.0, 4.0));
        assert_abs_diff_eq!(segment.length(), 5.0);
    }

    #[test]
    fn segment_center_is_midpoint() {
        let segment = LineSegment::new(point![-1.0, 0.0, 2.0], point![3.0, 2.0, -2.0]);
        assert_abs_diff_eq!(segment.center(), point![1.0, 1.0, 0.0]);
    }

    #[test]
    fn segment_point_at_parameter_interpolates_endpoints() {
        let segment = LineSegment::new(point![0.0, 0.0, 0.0], point![2.0, -2.0, 4.0]);
        assert_abs_diff_eq!(segment.point_at_parameter(0.0), point![0.0, 0.0, 0.0]);
        assert_abs_diff_eq!(segment.point_at_parameter(0.5), point![1.0, -1.0, 2.0]);
        assert_abs_diff_eq!(segment.point_at_parameter(1.0), point![2.0, -2.0, 4.0]);
    }

    #[test]
    fn segment_aabb_has_ordered_corners_regardless_of_endpoint_order() {
        let segment = LineSegment::new(point![2.0, -1.0, 0.0], point![-1.0, 3.0, -2.0]);
        let aabb = segment.compute_aabb();
        assert_abs_diff_eq!(aabb.lower_corner(), &point![-1.0, -1.0, -2.0]);
        assert_abs_diff_eq!(aabb.upper_corner(), &point![2.0, 3.0, 0.0]);
    }
}
