//! Selection menu shadow node

use umbra_shadow::{MeasureContent, StateHandle};
use umbra_ui_layout::{LayoutConstraints, Size};

use crate::fallback::{default_width, fallback_height, ComponentKind, MaterialMode, Platform};
use crate::resolver::{resolve_content_size, ContentSizePolicy};

pub const SELECTION_MENU_COMPONENT_NAME: &str = "PCSelectionMenu";

/// Whether the menu renders an inline anchor row or is driven headlessly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AnchorMode {
    #[default]
    Inline,
    Headless,
}

/// Measurement-relevant props for the selection menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SelectionMenuProps {
    pub anchor_mode: AnchorMode,
    pub material: MaterialMode,
}

/// Shadow node for the selection menu.
///
/// Inline mode keeps a non-zero fallback row height so the anchor remains
/// tappable before native measurement arrives. Headless mode occupies no
/// space at all.
#[derive(Debug)]
pub struct SelectionMenuShadowNode {
    platform: Platform,
    props: SelectionMenuProps,
    state: StateHandle,
}

impl SelectionMenuShadowNode {
    pub fn new(platform: Platform, props: SelectionMenuProps) -> Self {
        Self {
            platform,
            props,
            state: StateHandle::new(),
        }
    }

    /// Handle the platform side publishes measured sizes through.
    pub fn state(&self) -> &StateHandle {
        &self.state
    }

    pub fn set_props(&mut self, props: SelectionMenuProps) {
        self.props = props;
    }

    fn policy(&self) -> ContentSizePolicy {
        match self.props.anchor_mode {
            AnchorMode::Headless => ContentSizePolicy::collapsed(),
            AnchorMode::Inline => ContentSizePolicy::new(
                fallback_height(
                    ComponentKind::SelectionMenu,
                    self.platform,
                    self.props.material,
                ),
                default_width(ComponentKind::SelectionMenu),
            ),
        }
    }
}

impl MeasureContent for SelectionMenuShadowNode {
    fn measure_content(&self, constraints: &LayoutConstraints) -> Size {
        resolve_content_size(constraints, self.state.latest().size(), &self.policy())
    }

    fn component_name(&self) -> &'static str {
        SELECTION_MENU_COMPONENT_NAME
    }
}

#[cfg(test)]
#[path = "tests/selection_menu_tests.rs"]
mod tests;
