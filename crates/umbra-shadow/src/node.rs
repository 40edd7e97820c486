//! Leaf measurement contract

use umbra_ui_layout::{LayoutConstraints, Size};

/// A shadow-tree leaf whose intrinsic size comes from measurement rather
/// than from child layout.
///
/// The layout engine calls [`measure_content`](MeasureContent::measure_content)
/// whenever it needs the node's intrinsic size. Implementations must be total:
/// no blocking, no failure, a concrete [`Size`] for every input. Native
/// measurement arriving after a layout pass is visible on the next pass only.
pub trait MeasureContent {
    /// Resolves the node's intrinsic content size under `constraints`.
    fn measure_content(&self, constraints: &LayoutConstraints) -> Size;

    /// Stable name the host registers this component under.
    fn component_name(&self) -> &'static str;

    /// Leaf nodes have no layout-managed children.
    fn is_leaf(&self) -> bool {
        true
    }
}
