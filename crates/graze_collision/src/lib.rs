//! Overlap testing and resolution for geometrical objects.

pub mod box_box;

pub use box_box::{compute_minimum_translation_vector, oriented_boxes_intersect};
