/// Axis a particle travels along. Horizontal lines are keyed by their y,
/// vertical lines by their x.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Horizontal,
    Vertical,
}

/// Current drawing extent in px; replaced wholesale on resize
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Bound on the travel axis: a particle past it has left the screen
    #[inline]
    pub fn travel_extent(&self, direction: Direction) -> f64 {
        match direction {
            Direction::Horizontal => self.width as f64,
            Direction::Vertical => self.height as f64,
        }
    }

    /// Extent on the axis that line keys are measured along
    #[inline]
    pub fn key_extent(&self, direction: Direction) -> u32 {
        match direction {
            Direction::Horizontal => self.height,
            Direction::Vertical => self.width,
        }
    }

    /// Number of grid-aligned lines `0, cell, 2*cell, ..` within the key extent
    #[inline]
    pub fn line_count(&self, direction: Direction, cell: u32) -> u32 {
        if cell == 0 {
            return 0;
        }
        (self.key_extent(direction) / cell).saturating_add(1)
    }
}
