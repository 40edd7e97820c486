//! Measurement shadow nodes for the platform component set
//!
//! Each component here is a leaf in the shadow tree: its true size is only
//! knowable after the platform widget measures itself and publishes a frame
//! size back through [`umbra_shadow::StateHandle`]. Until that happens the
//! resolver substitutes platform/mode-keyed fallback dimensions so the node
//! stays visible and tappable.

mod date_picker;
mod fallback;
mod resolver;
mod segmented_control;
mod selection_menu;

pub use date_picker::*;
pub use fallback::*;
pub use resolver::*;
pub use segmented_control::*;
pub use selection_menu::*;

pub mod prelude {
    pub use crate::date_picker::DatePickerShadowNode;
    pub use crate::fallback::{ComponentKind, MaterialMode, Platform};
    pub use crate::resolver::{resolve_content_size, ContentSizePolicy};
    pub use crate::segmented_control::{SegmentedControlProps, SegmentedControlShadowNode};
    pub use crate::selection_menu::{AnchorMode, SelectionMenuProps, SelectionMenuShadowNode};
    pub use umbra_shadow::MeasureContent;
}
