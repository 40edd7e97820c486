//! Geometric primitives shared across the shadow tree

/// A width/height pair in layout points.
///
/// Measurement code treats a non-positive axis as "unknown/unset": native
/// widgets report zero until their first real measurement lands.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };
}
