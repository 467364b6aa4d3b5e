//! Collections of points with cached coordinate extrema.

use crate::{AxisAlignedBox, num::Float};
use nalgebra::Point3;
use std::cell::Cell;
use thiserror::Error;

/// The error returned when querying the coordinate extrema of an empty point
/// set.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Tried to query the coordinate extrema of an empty point set")]
pub struct EmptyPointSetError;

/// An unordered collection of 3D points.
///
/// The componentwise minima and maxima over the points are computed lazily
/// in a single pass over the points and cached. The cache is invalidated
/// whenever the collection is mutated and recomputed on the next extremum
/// query.
#[derive(Clone, Debug)]
pub struct PointSet<F: Float> {
    points: Vec<Point3<F>>,
    extrema: Cell<Option<Extrema<F>>>,
}

#[derive(Copy, Clone, Debug)]
struct Extrema<F: Float> {
    min: Point3<F>,
    max: Point3<F>,
}

impl<F: Float> PointSet<F> {
    /// Creates an empty point set.
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            extrema: Cell::new(None),
        }
    }

    /// Creates a point set containing the given points.
    pub fn from_points(points: Vec<Point3<F>>) -> Self {
        Self {
            points,
            extrema: Cell::new(None),
        }
    }

    /// Returns the points in the set.
    pub fn points(&self) -> &[Point3<F>] {
        &self.points
    }

    /// Returns the number of points in the set.
    pub fn n_points(&self) -> usize {
        self.points.len()
    }

    /// Whether the set contains no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Replaces all points in the set with the given points.
    pub fn set_points(&mut self, points: Vec<Point3<F>>) {
        self.points = points;
        self.extrema.set(None);
    }

    /// Adds the given point to the set.
    pub fn add_point(&mut self, point: Point3<F>) {
        self.points.push(point);
        self.extrema.set(None);
    }

    /// Adds all the given points to the set.
    pub fn add_points(&mut self, points: impl IntoIterator<Item = Point3<F>>) {
        self.points.extend(points);
        self.extrema.set(None);
    }

    /// Returns the smallest x-coordinate among the points in the set.
    ///
    /// # Errors
    /// Returns an error if the set is empty.
    pub fn min_x(&self) -> Result<F, EmptyPointSetError> {
        Ok(self.extrema()?.min.x)
    }

    /// Returns the smallest y-coordinate among the points in the set.
    ///
    /// # Errors
    /// Returns an error if the set is empty.
    pub fn min_y(&self) -> Result<F, EmptyPointSetError> {
        Ok(self.extrema()?.min.y)
    }

    /// Returns the smallest z-coordinate among the points in the set.
    ///
    /// # Errors
    /// Returns an error if the set is empty.
    pub fn min_z(&self) -> Result<F, EmptyPointSetError> {
        Ok(self.extrema()?.min.z)
    }

    /// Returns the largest x-coordinate among the points in the set.
    ///
    /// # Errors
    /// Returns an error if the set is empty.
    pub fn max_x(&self) -> Result<F, EmptyPointSetError> {
        Ok(self.extrema()?.max.x)
    }

    /// Returns the largest y-coordinate among the points in the set.
    ///
    /// # Errors
    /// Returns an error if the set is empty.
    pub fn max_y(&self) -> Result<F, EmptyPointSetError> {
        Ok(self.extrema()?.max.y)
    }

    /// Returns the largest z-coordinate among the points in the set.
    ///
    /// # Errors
    /// Returns an error if the set is empty.
    pub fn max_z(&self) -> Result<F, EmptyPointSetError> {
        Ok(self.extrema()?.max.z)
    }

    /// Computes the axis-aligned box bounding all points in the set.
    ///
    /// # Errors
    /// Returns an error if the set is empty.
    pub fn bounding_box(&self) -> Result<AxisAlignedBox<F>, EmptyPointSetError> {
        let extrema = self.extrema()?;
        Ok(AxisAlignedBox::new(extrema.min, extrema.max))
    }

    fn extrema(&self) -> Result<Extrema<F>, EmptyPointSetError> {
        if let Some(extrema) = self.extrema.get() {
            return Ok(extrema);
        }

        let (&first_point, rest) = self.points.split_first().ok_or(EmptyPointSetError)?;

        let extrema = rest.iter().fold(
            Extrema {
                min: first_point,
                max: first_point,
            },
            |extrema, point| Extrema {
                min: extrema.min.inf(point),
                max: extrema.max.sup(point),
            },
        );

        self.extrema.set(Some(extrema));

        Ok(extrema)
    }
}
