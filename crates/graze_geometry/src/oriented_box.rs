//! Representation of boxes with arbitrary orientations.

use crate::{AxisAlignedBox, PointSet, num::Float};
use nalgebra::{self as na, Matrix3, Matrix4, Point3, UnitVector3, Vector3};
use std::cell::Cell;

/// A box with arbitrary position, orientation and extents.
///
/// The box caches its local axes and corner points. Both caches are computed
/// lazily on first read and invalidated by the mutating methods, so repeated
/// reads of an unchanged box reuse the cached values. Since the caches use
/// interior mutability, the type can be sent between threads but not shared
/// between them.
#[derive(Clone, Debug)]
pub struct OrientedBox<F: Float> {
    center: Point3<F>,
    half_extent: Vector3<F>,
    rotation: Matrix4<F>,
    axes: Cell<Option<[UnitVector3<F>; 3]>>,
    corners: Cell<Option<[Point3<F>; 8]>>,
}

impl<F: Float> OrientedBox<F> {
    /// Creates a new box with the given center position, half extents along
    /// each of its three local axes and rotation matrix determining its
    /// orientation.
    ///
    /// Only the upper left 3x3 block of the rotation matrix is used, and it
    /// is assumed to be orthonormal. The half extents are assumed to be
    /// non-negative.
    pub fn new(center: Point3<F>, half_extent: Vector3<F>, rotation: Matrix4<F>) -> Self {
        Self {
            center,
            half_extent,
            rotation,
            axes: Cell::new(None),
            corners: Cell::new(None),
        }
    }

    /// Creates a new box with the given half extents, centered at the origin
    /// and with local axes aligned with the world axes.
    pub fn aligned_at_origin(half_extent: Vector3<F>) -> Self {
        Self::new(Point3::origin(), half_extent, Matrix4::identity())
    }

    /// Creates a new box corresponding to the given axis-aligned box.
    pub fn from_axis_aligned_box(axis_aligned_box: &AxisAlignedBox<F>) -> Self {
        Self::new(
            axis_aligned_box.center(),
            axis_aligned_box.half_extents(),
            Matrix4::identity(),
        )
    }

    /// Returns the center of the box.
    pub fn center(&self) -> &Point3<F> {
        &self.center
    }

    /// Returns the half extents of the box along its three local axes.
    pub fn half_extent(&self) -> &Vector3<F> {
        &self.half_extent
    }

    /// Returns the rotation matrix determining the orientation of the box.
    pub fn rotation(&self) -> &Matrix4<F> {
        &self.rotation
    }

    /// Sets the center of the box to the given point.
    pub fn set_center(&mut self, center: Point3<F>) {
        self.center = center;
        self.corners.set(None);
    }

    /// Sets the half extents of the box to the given vector.
    pub fn set_half_extent(&mut self, half_extent: Vector3<F>) {
        self.half_extent = half_extent;
        self.corners.set(None);
    }

    /// Sets the rotation matrix of the box to the given matrix.
    pub fn set_rotation(&mut self, rotation: Matrix4<F>) {
        self.rotation = rotation;
        self.axes.set(None);
        self.corners.set(None);
    }

    /// Returns the unit vectors along the three local axes of the box in
    /// world space.
    pub fn local_axes(&self) -> [UnitVector3<F>; 3] {
        if let Some(axes) = self.axes.get() {
            return axes;
        }

        let axes = [
            UnitVector3::new_unchecked(self.rotation.transform_vector(&Vector3::x())),
            UnitVector3::new_unchecked(self.rotation.transform_vector(&Vector3::y())),
            UnitVector3::new_unchecked(self.rotation.transform_vector(&Vector3::z())),
        ];

        self.axes.set(Some(axes));

        axes
    }

    /// Returns the matrix whose rows are the three local axes of the box in
    /// world space. Multiplying the matrix with a world space vector gives
    /// the vector in the local frame of the box.
    pub fn model_space_basis(&self) -> Matrix3<F> {
        let [width_axis, height_axis, depth_axis] = self.local_axes();
        Matrix3::from_rows(&[
            width_axis.transpose(),
            height_axis.transpose(),
            depth_axis.transpose(),
        ])
    }

    /// Returns the eight corner points of the box. The corners are ordered
    /// by the signs of their local offsets from the center, from negative to
    /// positive with the sign along the local depth axis varying fastest,
    /// then the height axis, then the width axis.
    pub fn corners(&self) -> [Point3<F>; 8] {
        if let Some(corners) = self.corners.get() {
            return corners;
        }

        let [width_axis, height_axis, depth_axis] = self.local_axes();

        let half_width_vector = width_axis.scale(self.half_extent.x);
        let half_height_vector = height_axis.scale(self.half_extent.y);
        let half_depth_vector = depth_axis.scale(self.half_extent.z);

        let corners = [
            self.center - half_width_vector - half_height_vector - half_depth_vector,
            self.center - half_width_vector - half_height_vector + half_depth_vector,
            self.center - half_width_vector + half_height_vector - half_depth_vector,
            self.center - half_width_vector + half_height_vector + half_depth_vector,
            self.center + half_width_vector - half_height_vector - half_depth_vector,
            self.center + half_width_vector - half_height_vector + half_depth_vector,
            self.center + half_width_vector + half_height_vector - half_depth_vector,
            self.center + half_width_vector + half_height_vector + half_depth_vector,
        ];

        self.corners.set(Some(corners));

        corners
    }

    /// Returns a point set containing the eight corner points of the box.
    pub fn corner_point_set(&self) -> PointSet<F> {
        PointSet::from_points(self.corners().to_vec())
    }

    /// Computes the axis-aligned bounding box of the eight corner points of
    /// the box.
    pub fn compute_aabb(&self) -> AxisAlignedBox<F> {
        AxisAlignedBox::aabb_for_point_array(&self.corners())
    }

    /// Creates the box resulting from transforming this box with the given
    /// homogeneous transform.
    ///
    /// The transform is applied to the two diagonally opposite points
    /// `center - half_extent` and `center + half_extent`, and the new center
    /// and half extents are obtained from the componentwise bounds of the
    /// two transformed points. The rotation of the new box is the same as
    /// for this box, so a rotation in the given transform changes the
    /// extents of the box rather than reorienting it.
    pub fn transformed(&self, transform: &Matrix4<F>) -> Self {
        let transformed_lower = transform.transform_point(&(self.center - self.half_extent));
        let transformed_upper = transform.transform_point(&(self.center + self.half_extent));

        let lower = transformed_lower.inf(&transformed_upper);
        let upper = transformed_lower.sup(&transformed_upper);

        Self::new(
            na::center(&lower, &upper),
            (upper - lower) * F::ONE_HALF,
            self.rotation,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use nalgebra::{point, vector};
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

    #[test]
    fn local_axes_of_unrotated_box_are_world_axes() {
        let oriented_box = OrientedBox::aligned_at_origin(vector![1.0, 2.0, 3.0]);
        let [width_axis, height_axis, depth_axis] = oriented_box.local_axes();
        assert_abs_diff_eq!(width_axis, Vector3::x_axis());
        assert_abs_diff_eq!(height_axis, Vector3::y_axis());
        assert_abs_diff_eq!(depth_axis, Vector3::z_axis());
    }

    #[test]
    fn local_axes_of_rotated_box_are_correct() {
        let oriented_box = OrientedBox::new(
            Point3::origin(),
            vector![1.0, 1.0, 1.0],
            Matrix4::new_rotation(Vector3::x() * FRAC_PI_2),
        );
        let [width_axis, height_axis, depth_axis] = oriented_box.local_axes();
        assert_abs_diff_eq!(width_axis, Vector3::x_axis(), epsilon = 1e-12);
        assert_abs_diff_eq!(height_axis, Vector3::z_axis(), epsilon = 1e-12);
        assert_abs_diff_eq!(depth_axis, -Vector3::y_axis(), epsilon = 1e-12);
    }

    #[test]
    fn model_space_basis_has_local_axes_as_rows() {
        let oriented_box = OrientedBox::new(
            Point3::origin(),
            vector![1.0, 1.0, 1.0],
            Matrix4::new_rotation(Vector3::z() * FRAC_PI_2),
        );
        let expected = Matrix3::new(
            0.0, 1.0, 0.0, //
            -1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0,
        );
        assert_abs_diff_eq!(oriented_box.model_space_basis(), expected, epsilon = 1e-12);
    }

    #[test]
    fn model_space_basis_of_unrotated_box_is_identity() {
        let oriented_box = OrientedBox::aligned_at_origin(vector![1.0, 2.0, 3.0]);
        assert_abs_diff_eq!(oriented_box.model_space_basis(), Matrix3::identity());
    }

    #[test]
    fn corners_of_unrotated_box_are_center_offset_by_half_extents() {
        let oriented_box = OrientedBox::new(
            point![1.0, 2.0, 3.0],
            vector![0.5, 1.0, 2.0],
            Matrix4::identity(),
        );
        let corners = oriented_box.corners();
        assert_abs_diff_eq!(corners[0], point![0.5, 1.0, 1.0]);
        assert_abs_diff_eq!(corners[1], point![0.5, 1.0, 5.0]);
        assert_abs_diff_eq!(corners[2], point![0.5, 3.0, 1.0]);
        assert_abs_diff_eq!(corners[3], point![0.5, 3.0, 5.0]);
        assert_abs_diff_eq!(corners[4], point![1.5, 1.0, 1.0]);
        assert_abs_diff_eq!(corners[5], point![1.5, 1.0, 5.0]);
        assert_abs_diff_eq!(corners[6], point![1.5, 3.0, 1.0]);
        assert_abs_diff_eq!(corners[7], point![1.5, 3.0, 5.0]);
    }

    #[test]
    fn corner_point_set_has_extrema_matching_the_aabb() {
        let oriented_box = OrientedBox::new(
            point![0.0, 0.0, 0.0],
            vector![1.0, 1.0, 1.0],
            Matrix4::new_rotation(Vector3::z() * FRAC_PI_4),
        );
        let point_set = oriented_box.corner_point_set();
        assert_eq!(point_set.n_points(), 8);

        let aabb = oriented_box.compute_aabb();
        assert_abs_diff_eq!(point_set.min_x().unwrap(), aabb.lower_corner().x);
        assert_abs_diff_eq!(point_set.min_y().unwrap(), aabb.lower_corner().y);
        assert_abs_diff_eq!(point_set.min_z().unwrap(), aabb.lower_corner().z);
        assert_abs_diff_eq!(point_set.max_x().unwrap(), aabb.upper_corner().x);
        assert_abs_diff_eq!(point_set.max_y().unwrap(), aabb.upper_corner().y);
        assert_abs_diff_eq!(point_set.max_z().unwrap(), aabb.upper_corner().z);
    }

    #[test]
    fn aabb_of_rotated_box_covers_the_swept_corners() {
        let oriented_box = OrientedBox::new(
            Point3::origin(),
            vector![1.0, 1.0, 1.0],
            Matrix4::new_rotation(Vector3::z() * FRAC_PI_4),
        );
        let aabb = oriented_box.compute_aabb();
        let sqrt_2 = f64::sqrt(2.0);
        assert_abs_diff_eq!(
            aabb.lower_corner(),
            &point![-sqrt_2, -sqrt_2, -1.0],
            epsilon = 1e-9
        );
        assert_abs_diff_eq!(
            aabb.upper_corner(),
            &point![sqrt_2, sqrt_2, 1.0],
            epsilon = 1e-9
        );
    }

    #[test]
    fn from_axis_aligned_box_preserves_the_bounds() {
        let aabb = AxisAlignedBox::new(point![-1.0, 0.0, 2.0], point![3.0, 4.0, 8.0]);
        let oriented_box = OrientedBox::from_axis_aligned_box(&aabb);
        assert_abs_diff_eq!(oriented_box.center(), &point![1.0, 2.0, 5.0]);
        assert_abs_diff_eq!(oriented_box.half_extent(), &vector![2.0, 2.0, 3.0]);
        assert_abs_diff_eq!(oriented_box.compute_aabb(), aabb);
    }

    #[test]
    fn setting_center_moves_the_corners() {
        let mut oriented_box = OrientedBox::aligned_at_origin(vector![1.0, 1.0, 1.0]);
        assert_abs_diff_eq!(oriented_box.corners()[0], point![-1.0, -1.0, -1.0]);

        oriented_box.set_center(point![5.0, 0.0, 0.0]);

        assert_abs_diff_eq!(oriented_box.center(), &point![5.0, 0.0, 0.0]);
        assert_abs_diff_eq!(oriented_box.corners()[0], point![4.0, -1.0, -1.0]);
    }

    #[test]
    fn setting_half_extent_resizes_the_corners() {
        let mut oriented_box = OrientedBox::aligned_at_origin(vector![1.0, 1.0, 1.0]);
        assert_abs_diff_eq!(oriented_box.corners()[7], point![1.0, 1.0, 1.0]);

        oriented_box.set_half_extent(vector![2.0, 3.0, 4.0]);

        assert_abs_diff_eq!(oriented_box.corners()[7], point![2.0, 3.0, 4.0]);
    }

    #[test]
    fn setting_rotation_updates_axes_and_corners() {
        let mut oriented_box = OrientedBox::aligned_at_origin(vector![2.0, 1.0, 1.0]);
        let [width_axis, _, _] = oriented_box.local_axes();
        assert_abs_diff_eq!(width_axis, Vector3::x_axis());
        assert_abs_diff_eq!(oriented_box.corners()[7], point![2.0, 1.0, 1.0]);

        oriented_box.set_rotation(Matrix4::new_rotation(Vector3::z() * FRAC_PI_2));

        let [width_axis, height_axis, _] = oriented_box.local_axes();
        assert_abs_diff_eq!(width_axis, Vector3::y_axis(), epsilon = 1e-12);
        assert_abs_diff_eq!(height_axis, -Vector3::x_axis(), epsilon = 1e-12);
        assert_abs_diff_eq!(
            oriented_box.corners()[7],
            point![-1.0, 2.0, 1.0],
            epsilon = 1e-12
        );
    }

    #[test]
    fn transformed_with_translation_moves_only_the_center() {
        let oriented_box = OrientedBox::new(
            point![1.0, 0.0, 0.0],
            vector![1.0, 2.0, 3.0],
            Matrix4::identity(),
        );
        let transformed = oriented_box.transformed(&Matrix4::new_translation(&vector![
            2.0, -1.0, 0.5
        ]));
        assert_abs_diff_eq!(transformed.center(), &point![3.0, -1.0, 0.5]);
        assert_abs_diff_eq!(transformed.half_extent(), &vector![1.0, 2.0, 3.0]);
        assert_abs_diff_eq!(transformed.rotation(), &Matrix4::identity());
    }

    #[test]
    fn transformed_with_uniform_scaling_scales_center_and_half_extents() {
        let oriented_box = OrientedBox::new(
            point![1.0, 2.0, 3.0],
            vector![1.0, 1.0, 1.0],
            Matrix4::identity(),
        );
        let transformed = oriented_box.transformed(&Matrix4::new_scaling(2.0));
        assert_abs_diff_eq!(transformed.center(), &point![2.0, 4.0, 6.0]);
        assert_abs_diff_eq!(transformed.half_extent(), &vector![2.0, 2.0, 2.0]);
    }

    #[test]
    fn transformed_with_rotation_rebounds_the_diagonal_without_reorienting() {
        let oriented_box = OrientedBox::aligned_at_origin(vector![1.0, 2.0, 3.0]);
        let transformed =
            oriented_box.transformed(&Matrix4::new_rotation(Vector3::z() * FRAC_PI_2));

        // The diagonal endpoints are rotated and rebounded, so the x- and
        // y-extents swap while the orientation stays the same
        assert_abs_diff_eq!(transformed.center(), &Point3::origin(), epsilon = 1e-9);
        assert_abs_diff_eq!(
            transformed.half_extent(),
            &vector![2.0, 1.0, 3.0],
            epsilon = 1e-9
        );
        assert_abs_diff_eq!(transformed.rotation(), &Matrix4::identity());
    }
}
