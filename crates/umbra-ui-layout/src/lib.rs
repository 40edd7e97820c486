//! Geometry & layout constraint contracts for Umbra shadow nodes

mod constraints;
mod geometry;

pub use constraints::*;
pub use geometry::*;

pub mod prelude {
    pub use crate::constraints::LayoutConstraints;
    pub use crate::geometry::Size;
}
