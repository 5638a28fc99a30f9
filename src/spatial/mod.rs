//! Spatial bookkeeping: viewport extent and grid-line occupancy.

pub mod occupancy;
pub mod viewport;

pub use occupancy::{LineClaim, LineOccupancyRegistry};
pub use viewport::{Direction, Viewport};
