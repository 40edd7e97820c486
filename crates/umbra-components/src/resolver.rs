//! Content size resolution for leaf shadow nodes

use umbra_ui_layout::{LayoutConstraints, Size};

/// Per-node measurement configuration, derived from component kind, platform
/// and props ahead of each layout pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContentSizePolicy {
    /// Height substituted while native has not reported a measurement.
    pub fallback_height: f32,
    /// Width substituted when the width is unset and the constraint maximum
    /// is unbounded.
    pub default_width: f32,
    /// Headless nodes occupy no space regardless of state.
    pub collapse: bool,
}

impl ContentSizePolicy {
    pub const fn new(fallback_height: f32, default_width: f32) -> Self {
        Self {
            fallback_height,
            default_width,
            collapse: false,
        }
    }

    pub const fn collapsed() -> Self {
        Self {
            fallback_height: 0.0,
            default_width: 0.0,
            collapse: true,
        }
    }
}

/// Resolves the intrinsic size of a leaf node from its last native-reported
/// size and the current constraints.
///
/// Total and pure: identical inputs give identical output and no input can
/// fail a layout pass. A non-positive axis in `measured` counts as unset.
///
/// The height clamp carries one exemption: when the fallback height was
/// substituted and the maximum is the unbounded sentinel, the maximum clamp
/// is skipped so the fallback is not forced down to an arbitrary cap. The
/// minimum clamp always applies.
pub fn resolve_content_size(
    constraints: &LayoutConstraints,
    measured: Size,
    policy: &ContentSizePolicy,
) -> Size {
    if policy.collapse {
        return constraints.constrain(Size::ZERO);
    }

    let mut width = measured.width;
    let mut height = measured.height;

    if width <= 0.0 {
        width = if constraints.max.width > 0.0 && constraints.has_bounded_width() {
            constraints.max.width
        } else {
            policy.default_width
        };
    }

    let used_fallback = height <= 0.0;
    if used_fallback {
        log::trace!(
            "height unset, substituting fallback {}",
            policy.fallback_height
        );
        height = policy.fallback_height;
    }

    width = width.min(constraints.max.width).max(constraints.min.width);

    height = height.max(constraints.min.height);
    if !(used_fallback && !constraints.has_bounded_height()) {
        height = height.min(constraints.max.height);
    }

    // Last safety net; a no-op for the exempted case since an unbounded
    // maximum clamps nothing.
    constraints.constrain(Size::new(width, height))
}

#[cfg(test)]
#[path = "tests/resolver_tests.rs"]
mod tests;
