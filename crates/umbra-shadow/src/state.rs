//! Native-reported frame size: published snapshots & the persisted record

use std::sync::{Arc, PoisonError, RwLock};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use umbra_ui_layout::Size;

/// Last size reported by the platform-native widget for one component
/// instance, in layout points.
///
/// Created at zero and overwritten whenever native measurement completes.
/// The persisted form is an object with `"width"` and `"height"` keys and
/// round-trips losslessly for finite, non-negative values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameSizeState {
    pub width: f32,
    pub height: f32,
}

impl FrameSizeState {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Rebuilds the state from host-delivered dynamic data.
    ///
    /// Both keys must be present as numbers; anything else keeps the previous
    /// value. Malformed data is not an error on this path.
    pub fn merged(&self, data: &Value) -> Self {
        let width = data.get("width").and_then(Value::as_f64);
        let height = data.get("height").and_then(Value::as_f64);
        match (width, height) {
            (Some(width), Some(height)) => Self::new(width as f32, height as f32),
            _ => *self,
        }
    }
}

/// Single-writer, multi-reader published snapshot of [`FrameSizeState`].
///
/// The platform UI thread swaps in complete immutable snapshots via
/// [`publish`](StateHandle::publish); the layout thread copies out whichever
/// snapshot was last published via [`latest`](StateHandle::latest). Readers
/// never observe a partially-written value, and a report landing mid-pass is
/// picked up on the next pass.
#[derive(Debug, Default)]
pub struct StateHandle {
    slot: RwLock<Arc<FrameSizeState>>,
}

impl StateHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publishes a freshly measured size as the new snapshot.
    ///
    /// Non-positive axes are allowed; they keep the node in the unset regime
    /// until native reports a real measurement.
    pub fn publish(&self, size: Size) {
        log::trace!("publishing frame size {}x{}", size.width, size.height);
        let next = Arc::new(FrameSizeState::new(size.width, size.height));
        // A poisoned slot still holds a complete snapshot; recover it rather
        // than fail the layout pipeline.
        *self.slot.write().unwrap_or_else(PoisonError::into_inner) = next;
    }

    /// Copies out the most recently published snapshot.
    pub fn latest(&self) -> FrameSizeState {
        **self.slot.read().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
#[path = "tests/state_tests.rs"]
mod tests;
