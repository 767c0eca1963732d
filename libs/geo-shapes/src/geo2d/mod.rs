//! Planar shapes measured by area and perimeter.

pub mod rectangle;
pub mod triangle;

pub use rectangle::Rectangle;
pub use triangle::Triangle;
