//! Date picker shadow node

use umbra_shadow::{MeasureContent, StateHandle};
use umbra_ui_layout::{LayoutConstraints, Size};

use crate::fallback::{default_width, fallback_height, ComponentKind, MaterialMode, Platform};
use crate::resolver::{resolve_content_size, ContentSizePolicy};

pub const DATE_PICKER_COMPONENT_NAME: &str = "PCDatePicker";

/// Shadow node for the date picker.
///
/// The picker's size comes entirely from native measurement; no prop changes
/// the policy. An unmeasured node resolves to the constraint minimum.
#[derive(Debug)]
pub struct DatePickerShadowNode {
    platform: Platform,
    state: StateHandle,
}

impl DatePickerShadowNode {
    pub fn new(platform: Platform) -> Self {
        Self {
            platform,
            state: StateHandle::new(),
        }
    }

    /// Handle the platform side publishes measured sizes through.
    pub fn state(&self) -> &StateHandle {
        &self.state
    }

    fn policy(&self) -> ContentSizePolicy {
        ContentSizePolicy::new(
            fallback_height(
                ComponentKind::DatePicker,
                self.platform,
                MaterialMode::Default,
            ),
            default_width(ComponentKind::DatePicker),
        )
    }
}

impl MeasureContent for DatePickerShadowNode {
    fn measure_content(&self, constraints: &LayoutConstraints) -> Size {
        resolve_content_size(constraints, self.state.latest().size(), &self.policy())
    }

    fn component_name(&self) -> &'static str {
        DATE_PICKER_COMPONENT_NAME
    }
}

#[cfg(test)]
#[path = "tests/date_picker_tests.rs"]
mod tests;
