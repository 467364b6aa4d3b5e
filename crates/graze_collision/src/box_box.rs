//! Overlap testing and resolution for pairs of oriented boxes.

use graze_geometry::{Float, OrientedBox};
use nalgebra::{Point3, UnitVector3, Vector3};

/// Determines whether the two given oriented boxes overlap, using the
/// separating axis theorem restricted to the three local axes of each box.
///
/// Only the six face normal axes are tested, not the nine edge-edge cross
/// product axes required for an exact test, so certain separated
/// configurations where the boxes meet edge-on can be reported as
/// overlapping. Boxes whose boundaries exactly touch are not considered
/// overlapping.
///
/// The half extents of both boxes are assumed to be positive and their
/// rotation matrices orthonormal.
pub fn oriented_boxes_intersect<F: Float>(box_a: &OrientedBox<F>, box_b: &OrientedBox<F>) -> bool {
    let axes_a = box_a.local_axes();
    let axes_b = box_b.local_axes();

    axes_a
        .iter()
        .chain(&axes_b)
        .all(|axis| compute_penetration_along_axis(axis, box_a, box_b).is_some())
}

/// Computes the minimum translation vector for the two given oriented boxes:
/// the smallest of the six penetration vectors obtained by projecting both
/// boxes onto each box's three local axes.
///
/// Translating the first box by the returned vector (or the second box by
/// its negation) resolves the overlap along one axis. If the boxes do not
/// overlap, the zero vector is returned, so a zero result is the explicit
/// "no overlap" signal rather than a valid push direction.
///
/// Like [`oriented_boxes_intersect`], this tests only the six face normal
/// axes. The half extents of both boxes are assumed to be positive and
/// their rotation matrices orthonormal.
pub fn compute_minimum_translation_vector<F: Float>(
    box_a: &OrientedBox<F>,
    box_b: &OrientedBox<F>,
) -> Vector3<F> {
    let axes_a = box_a.local_axes();
    let axes_b = box_b.local_axes();

    let mut min_translation = Vector3::zeros();
    let mut min_squared_norm = F::INFINITY;

    for axis in axes_a.iter().chain(&axes_b) {
        let Some(translation) = compute_penetration_along_axis(axis, box_a, box_b) else {
            return Vector3::zeros();
        };

        let squared_norm = translation.norm_squared();
        if squared_norm < min_squared_norm {
            min_squared_norm = squared_norm;
            min_translation = translation;
        }
    }

    min_translation
}

/// Computes the vector that would translate the first box out of penetration
/// with the second box along the given axis, or returns [`None`] if the
/// projections of the boxes onto the axis do not overlap. Projections that
/// exactly touch do not count as overlapping.
fn compute_penetration_along_axis<F: Float>(
    axis: &UnitVector3<F>,
    box_a: &OrientedBox<F>,
    box_b: &OrientedBox<F>,
) -> Option<Vector3<F>> {
    let extent_a = ProjectedExtent::of_points(axis, &box_a.corners());
    let extent_b = ProjectedExtent::of_points(axis, &box_b.corners());

    let projected_center_a = box_a.center().coords.dot(axis);
    let projected_center_b = box_b.center().coords.dot(axis);

    // Push the first box away from the second along the axis
    let (penetration, sign) = if projected_center_a < projected_center_b {
        (extent_a.max - extent_b.min, F::NEG_ONE)
    } else {
        (extent_b.max - extent_a.min, F::ONE)
    };

    if penetration > F::ZERO {
        Some(axis.scale(sign * penetration))
    } else {
        None
    }
}

/// The interval covered by a set of points projected onto an axis.
struct ProjectedExtent<F> {
    min: F,
    max: F,
}

impl<F: Float> ProjectedExtent<F> {
    fn of_points(axis: &UnitVector3<F>, points: &[Point3<F>; 8]) -> Self {
        let first_projection = points[0].coords.dot(axis);

        points[1..].iter().fold(
            Self {
                min: first_projection,
                max: first_projection,
            },
            |extent, point| {
                let projection = point.coords.dot(axis);
                Self {
                    min: extent.min.min(projection),
                    max: extent.max.max(projection),
                }
            },
        )
    }
}
