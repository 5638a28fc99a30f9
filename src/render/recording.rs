//! Headless surface that records every draw call.

use crate::core::{Rgba, Vec2};

use super::surface::{DrawingSurface, Paint};

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    FillRect { x: f64, y: f64, w: f64, h: f64, color: Rgba },
    StrokeLines { segments: Vec<(Vec2, Vec2)>, paint: Paint },
    StrokeCircle { center: Vec2, radius: f64, color: Rgba },
    FillCircle { center: Vec2, radius: f64, color: Rgba },
    FillText { text: String, at: Vec2, font: String, color: Rgba },
}

#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, commands: Vec::new() }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drain recorded commands (one frame's worth, typically)
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn stroked_circles(&self) -> impl Iterator<Item = (Vec2, f64, Rgba)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::StrokeCircle { center, radius, color } => Some((*center, *radius, *color)),
            _ => None,
        })
    }

    pub fn filled_circles(&self) -> impl Iterator<Item = (Vec2, f64, Rgba)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::FillCircle { center, radius, color } => Some((*center, *radius, *color)),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = (&str, Vec2, Rgba)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::FillText { text, at, color, .. } => Some((text.as_str(), *at, *color)),
            _ => None,
        })
    }
}

impl DrawingSurface for RecordingSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn set_size(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Rgba) {
        self.commands.push(DrawCommand::FillRect { x, y, w, h, color });
    }

    fn stroke_lines(&mut self, segments: &[(Vec2, Vec2)], paint: &Paint) {
        self.commands.push(DrawCommand::StrokeLines {
            segments: segments.to_vec(),
            paint: paint.clone(),
        });
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f64, color: Rgba) {
        self.commands.push(DrawCommand::StrokeCircle { center, radius, color });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f64, color: Rgba) {
        self.commands.push(DrawCommand::FillCircle { center, radius, color });
    }

    fn fill_text(&mut self, text: &str, at: Vec2, font: &str, color: Rgba) {
        self.commands.push(DrawCommand::FillText {
            text: text.to_string(),
            at,
            font: font.to_string(),
            color,
        });
    }
}
