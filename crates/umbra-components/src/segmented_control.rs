//! Segmented control shadow node

use umbra_shadow::{MeasureContent, StateHandle};
use umbra_ui_layout::{LayoutConstraints, Size};

use crate::fallback::{default_width, fallback_height, ComponentKind, MaterialMode, Platform};
use crate::resolver::{resolve_content_size, ContentSizePolicy};

pub const SEGMENTED_CONTROL_COMPONENT_NAME: &str = "PCSegmentedControl";

/// Measurement-relevant props for the segmented control.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SegmentedControlProps {
    pub material: MaterialMode,
}

/// Shadow node for the segmented control.
///
/// Native measures the platform control and publishes the frame size; until
/// then the platform/mode-keyed fallback height applies, and a default width
/// keeps the control usable under unbounded constraints.
#[derive(Debug)]
pub struct SegmentedControlShadowNode {
    platform: Platform,
    props: SegmentedControlProps,
    state: StateHandle,
}

impl SegmentedControlShadowNode {
    pub fn new(platform: Platform, props: SegmentedControlProps) -> Self {
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

    pub fn set_props(&mut self, props: SegmentedControlProps) {
        self.props = props;
    }

    fn policy(&self) -> ContentSizePolicy {
        ContentSizePolicy::new(
            fallback_height(
                ComponentKind::SegmentedControl,
                self.platform,
                self.props.material,
            ),
            default_width(ComponentKind::SegmentedControl),
        )
    }
}

impl MeasureContent for SegmentedControlShadowNode {
    fn measure_content(&self, constraints: &LayoutConstraints) -> Size {
        resolve_content_size(constraints, self.state.latest().size(), &self.policy())
    }

    fn component_name(&self) -> &'static str {
        SEGMENTED_CONTROL_COMPONENT_NAME
    }
}

#[cfg(test)]
#[path = "tests/segmented_control_tests.rs"]
mod tests;
