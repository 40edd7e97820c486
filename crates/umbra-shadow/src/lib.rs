//! Shadow-node layer: leaf measurement contract & native state delivery

mod node;
mod state;

pub use node::*;
pub use state::*;

pub mod prelude {
    pub use crate::node::MeasureContent;
    pub use crate::state::{FrameSizeState, StateHandle};
}
