//! Drawing-surface abstraction

pub mod recording;
pub mod surface;

pub use recording::{DrawCommand, RecordingSurface};
pub use surface::{DrawingSurface, Paint};
