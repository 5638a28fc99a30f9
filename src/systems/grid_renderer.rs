//! GridRenderer - background fill plus a fading line grid.
//!
//! Output depends only on config and viewport. The segment buffer is scratch
//! reused between frames to avoid a per-frame allocation.

use crate::core::{with_alpha, Rgba, Vec2};
use crate::render::{DrawingSurface, Paint};
use crate::spatial::Viewport;

pub struct GridRenderer {
    cell: u32,
    line_color: Rgba,
    background: Rgba,
    segments: Vec<(Vec2, Vec2)>,
}

impl GridRenderer {
    pub fn new(cell: u32, line_color: Rgba, background: Rgba) -> Self {
        Self {
            cell,
            line_color,
            background,
            segments: Vec::new(),
        }
    }

    pub fn draw(&mut self, viewport: &Viewport, surface: &mut dyn DrawingSurface) {
        let w = viewport.width as f64;
        let h = viewport.height as f64;
        surface.fill_rect(0.0, 0.0, w, h, self.background);

        if self.cell == 0 {
            return;
        }

        self.segments.clear();
        for y in (0..viewport.height).step_by(self.cell as usize) {
            let y = y as f64;
            self.segments.push((Vec2::new(0.0, y), Vec2::new(w, y)));
        }
        for x in (0..viewport.width).step_by(self.cell as usize) {
            let x = x as f64;
            self.segments.push((Vec2::new(x, 0.0), Vec2::new(x, h)));
        }

        // Diagonal fade: full strength top-left, transparent bottom-right
        let paint = Paint::Linear {
            from: Vec2::zero(),
            to: Vec2::new(w, h),
            start: with_alpha(self.line_color, 1.0),
            end: with_alpha(self.line_color, 0.0),
        };
        surface.stroke_lines(&self.segments, &paint);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{DrawCommand, RecordingSurface};

    #[test]
    fn clears_then_strokes_every_line() {
        let mut grid = GridRenderer::new(40, Rgba::rgb(51, 65, 85), Rgba::BLACK);
        let mut surface = RecordingSurface::new(100, 80);
        grid.draw(&Viewport::new(100, 80), &mut surface);

        let cmds = surface.commands();
        assert_eq!(cmds.len(), 2);
        assert_eq!(
            cmds[0],
            DrawCommand::FillRect { x: 0.0, y: 0.0, w: 100.0, h: 80.0, color: Rgba::BLACK }
        );
        let DrawCommand::StrokeLines { segments, paint } = &cmds[1] else {
            panic!("expected grid lines, got {:?}", cmds[1]);
        };
        // y: 0, 40  x: 0, 40, 80
        assert_eq!(segments.len(), 5);
        assert_eq!(segments[1], (Vec2::new(0.0, 40.0), Vec2::new(100.0, 40.0)));
        assert_eq!(segments[4], (Vec2::new(80.0, 0.0), Vec2::new(80.0, 80.0)));
        match paint {
            Paint::Linear { start, end, to, .. } => {
                assert_eq!(start.a, 1.0);
                assert_eq!(end.a, 0.0);
                assert_eq!(*to, Vec2::new(100.0, 80.0));
            }
            other => panic!("expected gradient, got {other:?}"),
        }
    }

    #[test]
    fn redraw_is_identical() {
        let mut grid = GridRenderer::new(25, Rgba::WHITE, Rgba::BLACK);
        let vp = Viewport::new(300, 200);
        let mut a = RecordingSurface::new(300, 200);
        let mut b = RecordingSurface::new(300, 200);
        grid.draw(&vp, &mut a);
        grid.draw(&vp, &mut b);
        assert_eq!(a.commands(), b.commands());
    }
}
