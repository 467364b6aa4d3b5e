//! Representation of triangles.

use crate::{AxisAlignedBox, num::Float};
use nalgebra::{Point3, UnitVector3, Vector3, vector};

/// A triangle defined by three vertices.
#[derive(Clone, Debug, PartialEq)]
pub struct Triangle<F: Float> {
    vertices: [Point3<F>; 3],
}

impl<F: Float> Triangle<F> {
    /// Creates a new triangle with the given vertices.
    pub fn new(vertex_1: Point3<F>, vertex_2: Point3<F>, vertex_3: Point3<F>) -> Self {
        Self {
            vertices: [vertex_1, vertex_2, vertex_3],
        }
    }

    /// Returns the vertices of the triangle.
    pub fn vertices(&self) -> &[Point3<F>; 3] {
        &self.vertices
    }

    /// Computes the two edge vectors going out from the first vertex to the
    /// second and third vertex respectively.
    pub fn compute_edges(&self) -> (Vector3<F>, Vector3<F>) {
        (
            self.vertices[1] - self.vertices[0],
            self.vertices[2] - self.vertices[0],
        )
    }

    /// Computes the unit normal of the triangle. The normal direction
    /// follows the right-hand rule with respect to the vertex order.
    ///
    /// The triangle is assumed not to be degenerate.
    pub fn compute_unit_normal(&self) -> UnitVector3<F> {
        let (edge_1, edge_2) = self.compute_edges();
        UnitVector3::new_normalize(edge_1.cross(&edge_2))
    }

    /// Computes the area of the triangle.
    pub fn compute_area(&self) -> F {
        let (edge_1, edge_2) = self.compute_edges();
        F::ONE_HALF * edge_1.cross(&edge_2).norm()
    }

    /// Computes the centroid of the triangle.
    pub fn compute_centroid(&self) -> Point3<F> {
        Point3::from(
            (self.vertices[0].coords + self.vertices[1].coords + self.vertices[2].coords)
                / F::THREE,
        )
    }

    /// Computes the axis-aligned bounding box of the triangle.
    pub fn compute_aabb(&self) -> AxisAlignedBox<F> {
        AxisAlignedBox::aabb_for_point_array(&self.vertices)
    }

    /// Computes the barycentric coordinates of the given point with respect
    /// to the triangle, or returns [`None`] if the triangle is degenerate.
    /// The coordinates are ordered like the vertices and sum to one.
    ///
    /// The point is assumed to lie in the plane of the triangle.
    pub fn compute_barycentric_coords(&self, point: &Point3<F>) -> Option<Vector3<F>> {
        let (edge_1, edge_2) = self.compute_edges();
        let offset = point - self.vertices[0];

        let edge_1_sq = edge_1.dot(&edge_1);
        let edge_2_sq = edge_2.dot(&edge_2);
        let edge_dot = edge_1.dot(&edge_2);
        let offset_dot_edge_1 = offset.dot(&edge_1);
        let offset_dot_edge_2 = offset.dot(&edge_2);

        let denom = edge_1_sq * edge_2_sq - edge_dot * edge_dot;
        if denom == F::ZERO {
            return None;
        }

        let beta = (edge_2_sq * offset_dot_edge_1 - edge_dot * offset_dot_edge_2) / denom;
        let gamma = (edge_1_sq * offset_dot_edge_2 - edge_dot * offset_dot_edge_1) / denom;
        let alpha = F::ONE - beta - gamma;

        Some(vector![alpha, beta, gamma])
    }
}
