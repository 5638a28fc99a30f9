use crate::core::{with_alpha, RandomSource, Rgba, Vec2};
use crate::domain::Unavailable;
use crate::render::DrawingSurface;
use crate::spatial::{Direction, LineClaim};

use super::trail::Trail;
use super::LineContext;

/// Travelling -> Draining -> (reset) -> Travelling | Dormant
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParticleState {
    /// Moving along a claimed line
    Travelling,
    /// Past the viewport bound, line released, trail still fading out
    Draining,
    /// No line was free; waits for a forced reset
    Dormant,
}

#[derive(Clone, Debug)]
pub struct Particle {
    direction: Direction,
    position: Vec2,
    speed: f64,
    color: Rgba,
    trail: Trail,
    state: ParticleState,
    /// Held only while Travelling
    claim: Option<LineClaim>,
}

impl Particle {
    /// Created Dormant; the pool resets it right away.
    pub fn new(color: Rgba, trail_capacity: usize) -> Self {
        Self {
            direction: Direction::Horizontal,
            position: Vec2::zero(),
            speed: 0.0,
            color,
            trail: Trail::with_capacity(trail_capacity),
            state: ParticleState::Dormant,
            claim: None,
        }
    }

    pub fn state(&self) -> ParticleState {
        self.state
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn color(&self) -> Rgba {
        self.color
    }

    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    pub fn claim(&self) -> Option<LineClaim> {
        self.claim
    }

    #[inline]
    fn travel_coord(&self, p: Vec2) -> f64 {
        match self.direction {
            Direction::Horizontal => p.x,
            Direction::Vertical => p.y,
        }
    }

    /// Give back the held line, if any. Leaves the state untouched.
    pub(super) fn release_claim<R: RandomSource>(&mut self, ctx: &mut LineContext<'_, R>) {
        if let Some(old) = self.claim.take() {
            ctx.registry.release(old.direction, old.key);
        }
    }

    /// Spawn on a fresh line. Any line still held is released first, so a
    /// forced reset of a travelling particle never leaks its claim.
    pub fn reset<R: RandomSource>(&mut self, ctx: &mut LineContext<'_, R>) -> Result<LineClaim, Unavailable> {
        self.release_claim(ctx);
        self.trail.clear();

        match ctx.registry.allocate_any(ctx.viewport, &mut *ctx.rng) {
            Ok(claim) => {
                self.direction = claim.direction;
                self.position = match claim.direction {
                    Direction::Horizontal => Vec2::new(0.0, claim.key as f64),
                    Direction::Vertical => Vec2::new(claim.key as f64, 0.0),
                };
                self.speed = ctx.rng.range_f64(ctx.speed_min, ctx.speed_max);
                self.state = ParticleState::Travelling;
                self.claim = Some(claim);
                Ok(claim)
            }
            Err(e) => {
                self.state = ParticleState::Dormant;
                Err(e)
            }
        }
    }

    pub fn update<R: RandomSource>(&mut self, ctx: &mut LineContext<'_, R>) {
        let bound = ctx.viewport.travel_extent(self.direction);
        match self.state {
            ParticleState::Dormant => {}
            ParticleState::Travelling => {
                self.trail.push(self.position);
                match self.direction {
                    Direction::Horizontal => self.position.x += self.speed,
                    Direction::Vertical => self.position.y += self.speed,
                }
                if self.travel_coord(self.position) > bound {
                    if let Some(claim) = self.claim.take() {
                        ctx.registry.release(claim.direction, claim.key);
                    }
                    self.state = ParticleState::Draining;
                }
            }
            ParticleState::Draining => {
                self.trail.push(self.position);
                let gone = self.trail.iter().all(|p| self.travel_coord(*p) > bound);
                if gone {
                    // Unavailable leaves it Dormant
                    let _ = self.reset(ctx);
                }
            }
        }
    }

    /// Trail as discs, alpha = index / len (oldest transparent, newest opaque)
    pub fn draw(&self, surface: &mut dyn DrawingSurface, dot_radius: f64) {
        let len = self.trail.len() as f64;
        for (i, point) in self.trail.iter().enumerate() {
            let alpha = i as f64 / len;
            surface.fill_circle(*point, dot_radius, with_alpha(self.color, alpha));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::XorShift32;
    use crate::render::RecordingSurface;
    use crate::spatial::{LineOccupancyRegistry, Viewport};

    struct Fixture {
        registry: LineOccupancyRegistry,
        viewport: Viewport,
        rng: XorShift32,
    }

    impl Fixture {
        fn new(width: u32, height: u32) -> Self {
            Self {
                registry: LineOccupancyRegistry::new(40, 100),
                viewport: Viewport::new(width, height),
                rng: XorShift32::new(1234),
            }
        }

        fn ctx(&mut self) -> LineContext<'_, XorShift32> {
            LineContext {
                registry: &mut self.registry,
                viewport: &self.viewport,
                rng: &mut self.rng,
                speed_min: 10.0,
                speed_max: 20.0,
            }
        }
    }

    #[test]
    fn reset_claims_line_and_starts_at_origin_edge() {
        let mut fx = Fixture::new(400, 400);
        let mut p = Particle::new(Rgba::WHITE, 8);
        let claim = p.reset(&mut fx.ctx()).unwrap();

        assert_eq!(p.state(), ParticleState::Travelling);
        assert!(fx.registry.is_claimed(claim.direction, claim.key));
        match claim.direction {
            Direction::Horizontal => assert_eq!(p.position(), Vec2::new(0.0, claim.key as f64)),
            Direction::Vertical => assert_eq!(p.position(), Vec2::new(claim.key as f64, 0.0)),
        }
        assert!((10.0..20.0).contains(&p.speed()));
        assert!(p.trail().is_empty());
    }

    #[test]
    fn travelling_releases_line_when_leaving_viewport() {
        let mut fx = Fixture::new(100, 100);
        let mut p = Particle::new(Rgba::WHITE, 4);
        let claim = p.reset(&mut fx.ctx()).unwrap();

        let mut ticks = 0;
        while p.state() == ParticleState::Travelling {
            p.update(&mut fx.ctx());
            ticks += 1;
            assert!(ticks < 100, "particle never left the viewport");
        }
        assert_eq!(p.state(), ParticleState::Draining);
        assert!(p.claim().is_none());
        assert!(!fx.registry.is_claimed(claim.direction, claim.key));
        assert!(p.trail().len() <= 4);
    }

    #[test]
    fn draining_respawns_once_trail_is_off_screen() {
        let mut fx = Fixture::new(100, 100);
        let mut p = Particle::new(Rgba::WHITE, 3);
        p.reset(&mut fx.ctx()).unwrap();
        while p.state() == ParticleState::Travelling {
            p.update(&mut fx.ctx());
        }

        // The exit tick pushed an on-screen point; it takes `capacity` more
        // pushes of the off-screen position to flush it.
        for _ in 0..2 {
            p.update(&mut fx.ctx());
            assert_eq!(p.state(), ParticleState::Draining);
        }
        p.update(&mut fx.ctx());
        assert_eq!(p.state(), ParticleState::Travelling);
        assert!(p.trail().is_empty());
        assert!(p.claim().is_some());
    }

    #[test]
    fn reset_on_saturated_grid_goes_dormant() {
        let mut fx = Fixture::new(0, 0);
        // one line per direction
        let mut a = Particle::new(Rgba::WHITE, 4);
        let mut b = Particle::new(Rgba::WHITE, 4);
        let mut c = Particle::new(Rgba::WHITE, 4);
        a.reset(&mut fx.ctx()).unwrap();
        b.reset(&mut fx.ctx()).unwrap();
        let err = c.reset(&mut fx.ctx()).unwrap_err();
        assert_eq!(err.attempts, 100);
        assert_eq!(c.state(), ParticleState::Dormant);
        assert!(c.trail().is_empty());

        // Dormant is inert
        let before = c.position();
        c.update(&mut fx.ctx());
        assert_eq!(c.state(), ParticleState::Dormant);
        assert_eq!(c.position(), before);
        assert!(c.trail().is_empty());
    }

    #[test]
    fn forced_reset_releases_previous_claim() {
        let mut fx = Fixture::new(400, 400);
        let mut p = Particle::new(Rgba::WHITE, 4);
        p.reset(&mut fx.ctx()).unwrap();
        p.reset(&mut fx.ctx()).unwrap();
        let total = fx.registry.claimed_count(Direction::Horizontal)
            + fx.registry.claimed_count(Direction::Vertical);
        assert_eq!(total, 1);
    }

    #[test]
    fn draw_fades_from_oldest_to_newest() {
        let mut fx = Fixture::new(1000, 1000);
        let mut p = Particle::new(Rgba::rgb(48, 184, 82), 4);
        p.reset(&mut fx.ctx()).unwrap();
        for _ in 0..4 {
            p.update(&mut fx.ctx());
        }
        let mut surface = RecordingSurface::new(1000, 1000);
        p.draw(&mut surface, 0.4);

        let alphas: Vec<f64> = surface.filled_circles().map(|(_, r, c)| {
            assert_eq!(r, 0.4);
            c.a
        }).collect();
        assert_eq!(alphas, vec![0.0, 0.25, 0.5, 0.75]);
    }
}
