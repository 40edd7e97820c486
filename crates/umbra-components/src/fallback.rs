//! Platform/mode-keyed fallback dimensions

/// Host platform the component set runs on.
///
/// Injected when a node is constructed; nothing here is selected by
/// conditional compilation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Platform {
    Ios,
    Android,
}

/// Android visual-style variant carried by a component's Android prop block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MaterialMode {
    #[default]
    Default,
    M3,
}

/// Component kinds that ship a measurement shadow node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ComponentKind {
    DatePicker,
    SegmentedControl,
    SelectionMenu,
}

// Fallback heights used until native reports a measurement. iOS entries
// follow the stock UIKit control heights, Android entries the Material
// widget heights.
const SELECTION_MENU_ROW_IOS: f32 = 44.0;
const SELECTION_MENU_ROW_ANDROID: f32 = 56.0;
const SELECTION_MENU_ROW_ANDROID_M3: f32 = 72.0;
const SEGMENTED_CONTROL_IOS: f32 = 32.0;
const SEGMENTED_CONTROL_ANDROID: f32 = 48.0;
const SEGMENTED_CONTROL_ANDROID_M3: f32 = 56.0;

/// Width substituted when the native width is unset and the constraint
/// maximum is unbounded. The segmented control needs real width to stay
/// usable; the other components collapse to zero width instead.
const SEGMENTED_CONTROL_DEFAULT_WIDTH: f32 = 300.0;

/// Default height for a component whose native measurement has not arrived.
pub fn fallback_height(kind: ComponentKind, platform: Platform, material: MaterialMode) -> f32 {
    match (kind, platform, material) {
        (ComponentKind::SelectionMenu, Platform::Ios, _) => SELECTION_MENU_ROW_IOS,
        (ComponentKind::SelectionMenu, Platform::Android, MaterialMode::Default) => {
            SELECTION_MENU_ROW_ANDROID
        }
        (ComponentKind::SelectionMenu, Platform::Android, MaterialMode::M3) => {
            SELECTION_MENU_ROW_ANDROID_M3
        }
        (ComponentKind::SegmentedControl, Platform::Ios, _) => SEGMENTED_CONTROL_IOS,
        (ComponentKind::SegmentedControl, Platform::Android, MaterialMode::Default) => {
            SEGMENTED_CONTROL_ANDROID
        }
        (ComponentKind::SegmentedControl, Platform::Android, MaterialMode::M3) => {
            SEGMENTED_CONTROL_ANDROID_M3
        }
        (ComponentKind::DatePicker, _, _) => 0.0,
    }
}

/// Default width used when the width is unset and no bounded maximum exists.
pub fn default_width(kind: ComponentKind) -> f32 {
    match kind {
        ComponentKind::SegmentedControl => SEGMENTED_CONTROL_DEFAULT_WIDTH,
        ComponentKind::DatePicker | ComponentKind::SelectionMenu => 0.0,
    }
}

#[cfg(test)]
#[path = "tests/fallback_tests.rs"]
mod tests;
