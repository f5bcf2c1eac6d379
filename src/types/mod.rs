//! Shared value types

pub mod color;
pub mod handle;
pub mod point;
pub mod transform;
pub mod vector;

pub use color::{AciColor, Rgb};
pub use handle::Handle;
pub use point::Point;
pub use transform::Transform2;
pub use vector::Vector2;
