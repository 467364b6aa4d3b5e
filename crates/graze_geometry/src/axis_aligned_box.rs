//! Representation of axis-aligned boxes.

use crate::{LineSegment, Ray, num::Float};
use Corner::{Lower, Upper};
use approx::AbsDiffEq;
use nalgebra::{self as na, Matrix4, Point3, Vector3, point};

/// A box with orientation aligned with the coordinate system axes. The width,
/// height and depth axes are aligned with the x-, y- and z-axis respectively.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisAlignedBox<F: Float> {
    corners: [Point3<F>; 2],
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Corner {
    Lower = 0,
    Upper = 1,
}

const ALL_CORNER_COMPONENTS: [[Corner; 3]; 8] = [
    [Lower, Lower, Lower],
    [Lower, Lower, Upper],
    [Lower, Upper, Lower],
    [Lower, Upper, Upper],
    [Upper, Lower, Lower],
    [Upper, Lower, Upper],
    [Upper, Upper, Lower],
    [Upper, Upper, Upper],
];

impl<F: Float> AxisAlignedBox<F> {
    /// Creates a new box with the given lower and upper corner points.
    pub fn new(lower_corner: Point3<F>, upper_corner: Point3<F>) -> Self {
        Self {
            corners: [lower_corner, upper_corner],
        }
    }

    /// Creates the axis-aligned bounding box for the set of points in the given
    /// slice.
    ///
    /// # Panics
    /// If the point slice is empty.
    pub fn aabb_for_points(points: &[Point3<F>]) -> Self {
        assert!(
            !points.is_empty(),
            "Tried to create AABB for empty point slice"
        );

        let first_point = points[0];

        let lower_corner = points
            .iter()
            .skip(1)
            .fold(first_point, |lower_corner, point| lower_corner.inf(point));

        let upper_corner = points
            .iter()
            .skip(1)
            .fold(first_point, |upper_corner, point| upper_corner.sup(point));

        Self::new(lower_corner, upper_corner)
    }

    /// Creates the axis-aligned bounding box for the set of points in the given
    /// array.
    ///
    /// # Panics
    /// If the point array is empty.
    pub fn aabb_for_point_array<const N: usize>(points: &[Point3<F>; N]) -> Self {
        assert!(N > 0, "Tried to create AABB for empty point array");

        let first_point = points[0];

        let lower_corner = points
            .iter()
            .skip(1)
            .fold(first_point, |lower_corner, point| lower_corner.inf(point));

        let upper_corner = points
            .iter()
            .skip(1)
            .fold(first_point, |upper_corner, point| upper_corner.sup(point));

        Self::new(lower_corner, upper_corner)
    }

    /// Creates the axis-aligned box bounding both the given axis-aligned boxes.
    pub fn aabb_from_pair(aabb_1: &Self, aabb_2: &Self) -> Self {
        Self::new(
            aabb_1.lower_corner().inf(aabb_2.lower_corner()),
            aabb_1.upper_corner().sup(aabb_2.upper_corner()),
        )
    }

    /// Returns a reference to the lower corner of the box.
    pub fn lower_corner(&self) -> &Point3<F> {
        &self.corners[0]
    }

    /// Returns a reference to the upper corner of the box.
    pub fn upper_corner(&self) -> &Point3<F> {
        &self.corners[1]
    }

    /// Calculates and returns the center point of the box.
    pub fn center(&self) -> Point3<F> {
        na::center(self.lower_corner(), self.upper_corner())
    }

    /// Returns the extents of the box along the three axes.
    pub fn extents(&self) -> Vector3<F> {
        self.upper_corner() - self.lower_corner()
    }

    /// Returns the half extents of the box along the three axes.
    pub fn half_extents(&self) -> Vector3<F> {
        self.extents() * F::ONE_HALF
    }

    /// Returns an array with all the eight corners of the box. The corners are
    /// ordered from smaller to larger coordinates, with the z-component varying
    /// fastest.
    pub fn all_corners(&self) -> [Point3<F>; 8] {
        [0, 1, 2, 3, 4, 5, 6, 7].map(|idx| self.corner(idx))
    }

    /// Returns the box corner with the given index. The corners are ordered
    /// from smaller to larger coordinates, with the z-component varying
    /// fastest.
    ///
    /// # Panics
    /// If the given index exceeds 7.
    pub fn corner(&self, corner_idx: usize) -> Point3<F> {
        let corner_components = &ALL_CORNER_COMPONENTS[corner_idx];
        point![
            self.corners[corner_components[0] as usize].x,
            self.corners[corner_components[1] as usize].y,
            self.corners[corner_components[2] as usize].z
        ]
    }

    /// Whether the given point is inside this axis-aligned box. A point exactly on the
    /// surface of the box is considered inside.
    pub fn contains_point(&self, point: &Point3<F>) -> bool {
        point.x >= self.lower_corner().x
            && point.x <= self.upper_corner().x
            && point.y >= self.lower_corner().y
            && point.y <= self.upper_corner().y
            && point.z >= self.lower_corner().z
            && point.z <= self.upper_corner().z
    }

    /// Whether all of the given axis-aligned box is inside this box. If a
    /// corner exactly touches the surface, it is still considered inside.
    pub fn contains_box(&self, other: &Self) -> bool {
        other.lower_corner().x >= self.lower_corner().x
            && other.upper_corner().x <= self.upper_corner().x
            && other.lower_corner().y >= self.lower_corner().y
            && other.upper_corner().y <= self.upper_corner().y
            && other.lower_corner().z >= self.lower_corner().z
            && other.upper_corner().z <= self.upper_corner().z
    }

    /// Whether all of the given axis-aligned box is outside this box. If the
    /// boundaries exactly touch each other, the box is considered inside.
    pub fn box_lies_outside(&self, other: &Self) -> bool {
        !((self.lower_corner().x <= other.upper_corner().x
            && self.upper_corner().x >= other.lower_corner().x)
            && (self.lower_corner().y <= other.upper_corner().y
                && self.upper_corner().y >= other.lower_corner().y)
            && (self.lower_corner().z <= other.upper_corner().z
                && self.upper_corner().z >= other.lower_corner().z))
    }

    /// Computes the axis-aligned box enclosing only the volume enclosed by
    /// both this and the given box, or [`None`] if the two boxes do not
    /// overlap.
    pub fn compute_overlap_with(&self, other: &Self) -> Option<Self> {
        let lower_corner = self.lower_corner().sup(other.lower_corner());
        let upper_corner = self.upper_corner().inf(other.upper_corner());
        let diff = upper_corner - lower_corner;

        if diff.x < F::ZERO || diff.y < F::ZERO || diff.z < F::ZERO {
            None
        } else {
            Some(Self::new(lower_corner, upper_corner))
        }
    }

    /// Computes the axis-aligned box resulting from translating this box with
    /// the given displacement vector.
    pub fn translated(&self, displacement: &Vector3<F>) -> Self {
        Self::new(
            self.lower_corner() + displacement,
            self.upper_corner() + displacement,
        )
    }

    /// Computes the AABB for the transformed version of this AABB.
    pub fn aabb_of_transformed(&self, homogeneous_transform: &Matrix4<F>) -> Self {
        let transformed_center = homogeneous_transform.transform_point(&self.center());

        // Performance trick: transform half-extents by the element-wise
        // absolute value of the linear 3x3 part
        let rotation_scale = homogeneous_transform.fixed_view::<3, 3>(0, 0);
        let abs_rotation_scale = rotation_scale.map(|element| element.abs());
        let transformed_half_extents = abs_rotation_scale * self.half_extents();

        Self::new(
            transformed_center - transformed_half_extents,
            transformed_center + transformed_half_extents,
        )
    }

    /// Finds the start and end segment parameters for the subsegment of the
    /// given line segment lying within the box, or returns [`None`] if the
    /// segment lies completely outside the box.
    pub fn find_contained_subsegment(&self, segment: &LineSegment<F>) -> Option<(F, F)> {
        let offset = segment.offset();

        let mut t_min = F::ZERO;
        let mut t_max = F::ONE;

        for dim in 0..3 {
            if offset[dim] != F::ZERO {
                let recip = offset[dim].recip();
                let t1 = (self.lower_corner()[dim] - segment.start()[dim]) * recip;
                let t2 = (self.upper_corner()[dim] - segment.start()[dim]) * recip;

                let (t_entry, t_exit) = if t1 < t2 { (t1, t2) } else { (t2, t1) };

                t_min = t_min.max(t_entry);
                t_max = t_max.min(t_exit);
            } else if segment.start()[dim] < self.lower_corner()[dim]
                || segment.start()[dim] > self.upper_corner()[dim]
            {
                return None;
            }
        }

        if t_min <= t_max {
            Some((t_min, t_max))
        } else {
            None
        }
    }

    /// Finds the distances along the given ray at which the ray enters and
    /// exits the box, or returns [`None`] if the ray does not hit the box.
    pub fn find_ray_intersection(&self, ray: &Ray<F>) -> Option<(F, F)> {
        let mut t_min = F::ZERO;
        let mut t_max = F::INFINITY;

        for dim in 0..3 {
            if ray.direction()[dim] != F::ZERO {
                let recip = ray.direction()[dim].recip();
                let t1 = (self.lower_corner()[dim] - ray.origin()[dim]) * recip;
                let t2 = (self.upper_corner()[dim] - ray.origin()[dim]) * recip;

                let (t_entry, t_exit) = if t1 < t2 { (t1, t2) } else { (t2, t1) };

                t_min = t_min.max(t_entry);
                t_max = t_max.min(t_exit);

                if t_max < t_min {
                    return None;
                }
            } else if ray.origin()[dim] < self.lower_corner()[dim]
                || ray.origin()[dim] > self.upper_corner()[dim]
            {
                return None;
            }
        }

        // Require intersection in the forward ray direction
        if t_max >= F::ZERO {
            Some((t_min.max(F::ZERO), t_max))
        } else {
            None
        }
    }
}

impl<F: Float> AbsDiffEq for AxisAlignedBox<F> {
    type Epsilon = F;

    fn default_epsilon() -> Self::Epsilon {
        F::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        Point3::abs_diff_eq(self.lower_corner(), other.lower_corner(), epsilon)
            && Point3::abs_diff_eq(self.upper_corner(), other.upper_corner(), epsilon)
    }
}
