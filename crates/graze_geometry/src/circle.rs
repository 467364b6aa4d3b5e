//! Representation of circles.

use crate::{Rectangle, num::Float};
use nalgebra::Point2;

/// A circle represented by the center point and the radius.
#[derive(Clone, Debug, PartialEq)]
pub struct Circle<F: Float> {
    center: Point2<F>,
    radius: F,
}

impl<F: Float> Circle<F> {
    /// Creates a new circle with the given center and radius.
    ///
    /// # Panics
    /// If `radius` is negative.
    pub fn new(center: Point2<F>, radius: F) -> Self {
        assert!(radius >= F::ZERO);
        Self { center, radius }
    }

    /// Returns the center point of the circle.
    pub fn center(&self) -> &Point2<F> {
        &self.center
    }

    /// Returns the radius of the circle.
    pub fn radius(&self) -> F {
        self.radius
    }

    /// Returns the square of the radius of the circle.
    pub fn radius_squared(&self) -> F {
        self.radius * self.radius
    }

    /// Whether the given point is inside this circle. A point exactly on the
    /// boundary of the circle is considered inside.
    pub fn contains_point(&self, point: &Point2<F>) -> bool {
        (point - self.center).norm_squared() <= self.radius_squared()
    }

    /// Whether this circle and the given circle overlap. Circles whose
    /// boundaries exactly touch are considered overlapping.
    pub fn overlaps_circle(&self, other: &Self) -> bool {
        let sum_of_radii = self.radius + other.radius;
        (other.center - self.center).norm_squared() <= sum_of_radii * sum_of_radii
    }

    /// Whether this circle and the given rectangle overlap. A circle whose
    /// boundary exactly touches the rectangle is considered overlapping.
    pub fn overlaps_rectangle(&self, rectangle: &Rectangle<F>) -> bool {
        let closest_point = rectangle.compute_closest_point(&self.center);
        (closest_point - self.center).norm_squared() <= self.radius_squared()
    }
}
