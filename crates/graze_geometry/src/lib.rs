//! Geometrical objects.

mod axis_aligned_box;
mod circle;
mod line;
mod num;
mod oriented_box;
mod point_set;
mod rectangle;
mod triangle;

pub use axis_aligned_box::AxisAlignedBox;
pub use circle::Circle;
pub use line::{LineSegment, Ray};
pub use num::Float;
pub use oriented_box::OrientedBox;
pub use point_set::{EmptyPointSetError, PointSet};
pub use rectangle::Rectangle;
pub use triangle::Triangle;
