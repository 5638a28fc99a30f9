//! Line Occupancy Registry - which grid lines are claimed by a travelling particle.
//!
//! One bitset per direction, indexed by `key / cell`. A bit is set iff exactly
//! one travelling particle holds that line. Horizontal and vertical keys live in
//! separate namespaces: y = 40 and x = 40 never collide.
//!
//! Allocation is rejection sampling: draw a random line, take it if free,
//! otherwise draw again, up to `probe_limit` probes. O(1) expected while the
//! grid is sparse; the bound keeps a saturated grid from spinning.

mod bitset;

use crate::core::RandomSource;
use crate::domain::Unavailable;

use super::viewport::{Direction, Viewport};

/// A claimed line: direction plus its grid-aligned key (px)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LineClaim {
    pub direction: Direction,
    pub key: u32,
}

#[derive(Clone, Debug, Default)]
pub(crate) struct LineSet {
    words: Vec<u64>,
    count: usize,
}

pub struct LineOccupancyRegistry {
    cell: u32,
    probe_limit: u32,
    horizontal: LineSet,
    vertical: LineSet,
}

impl LineOccupancyRegistry {
    pub fn new(cell: u32, probe_limit: u32) -> Self {
        Self {
            cell,
            probe_limit,
            horizontal: LineSet::default(),
            vertical: LineSet::default(),
        }
    }

    pub fn cell(&self) -> u32 {
        self.cell
    }

    pub fn probe_limit(&self) -> u32 {
        self.probe_limit
    }

    #[inline]
    fn set(&self, direction: Direction) -> &LineSet {
        match direction {
            Direction::Horizontal => &self.horizontal,
            Direction::Vertical => &self.vertical,
        }
    }

    #[inline]
    fn set_mut(&mut self, direction: Direction) -> &mut LineSet {
        match direction {
            Direction::Horizontal => &mut self.horizontal,
            Direction::Vertical => &mut self.vertical,
        }
    }

    /// One probe: sample a line in `direction`, claim it if free.
    /// Consumes exactly one random draw.
    #[inline]
    fn probe<R: RandomSource>(&mut self, direction: Direction, viewport: &Viewport, rng: &mut R) -> Option<u32> {
        let lines = viewport.line_count(direction, self.cell);
        let idx = rng.below(lines);
        if lines > 0 && self.set_mut(direction).insert(idx as usize) {
            Some(idx * self.cell)
        } else {
            None
        }
    }

    /// Claim a free line in a fixed direction
    pub fn allocate<R: RandomSource>(
        &mut self,
        direction: Direction,
        viewport: &Viewport,
        rng: &mut R,
    ) -> Result<u32, Unavailable> {
        for _ in 0..self.probe_limit {
            if let Some(key) = self.probe(direction, viewport, rng) {
                return Ok(key);
            }
        }
        Err(Unavailable { attempts: self.probe_limit })
    }

    /// Claim a free line, re-drawing the direction on every probe (50/50).
    /// Each probe consumes exactly two random draws.
    pub fn allocate_any<R: RandomSource>(
        &mut self,
        viewport: &Viewport,
        rng: &mut R,
    ) -> Result<LineClaim, Unavailable> {
        for _ in 0..self.probe_limit {
            let direction = if rng.chance(0.5) {
                Direction::Horizontal
            } else {
                Direction::Vertical
            };
            if let Some(key) = self.probe(direction, viewport, rng) {
                return Ok(LineClaim { direction, key });
            }
        }
        Err(Unavailable { attempts: self.probe_limit })
    }

    /// Release a line. Idempotent: releasing a free line is a no-op.
    /// Returns whether the line was claimed.
    pub fn release(&mut self, direction: Direction, key: u32) -> bool {
        if self.cell == 0 || key % self.cell != 0 {
            return false;
        }
        let idx = (key / self.cell) as usize;
        self.set_mut(direction).remove(idx)
    }

    pub fn is_claimed(&self, direction: Direction, key: u32) -> bool {
        self.cell != 0
            && key % self.cell == 0
            && self.set(direction).contains((key / self.cell) as usize)
    }

    /// Empty both sets (resize)
    pub fn clear(&mut self) {
        self.horizontal.clear();
        self.vertical.clear();
    }

    pub fn claimed_count(&self, direction: Direction) -> usize {
        self.set(direction).count
    }

    pub fn is_empty(&self) -> bool {
        self.horizontal.count == 0 && self.vertical.count == 0
    }

    /// Claimed keys in one direction, ascending
    pub fn claimed_keys(&self, direction: Direction) -> Vec<u32> {
        self.set(direction)
            .iter()
            .map(|idx| idx as u32 * self.cell)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::XorShift32;

    /// Counts draws so probe accounting can be checked exactly
    struct Counting<R> {
        inner: R,
        draws: u32,
    }

    impl<R: RandomSource> RandomSource for Counting<R> {
        fn next_u32(&mut self) -> u32 {
            self.draws += 1;
            self.inner.next_u32()
        }
    }

    fn fill_all(reg: &mut LineOccupancyRegistry, vp: &Viewport) {
        for dir in [Direction::Horizontal, Direction::Vertical] {
            for i in 0..vp.line_count(dir, reg.cell()) {
                assert!(reg.set_mut(dir).insert(i as usize));
            }
        }
    }

    #[test]
    fn allocate_claims_grid_aligned_key_in_range() {
        let vp = Viewport::new(400, 200);
        let mut reg = LineOccupancyRegistry::new(40, 100);
        let mut rng = XorShift32::new(1);
        for _ in 0..5 {
            let key = reg.allocate(Direction::Vertical, &vp, &mut rng).unwrap();
            assert_eq!(key % 40, 0);
            assert!(key <= 400);
            assert!(reg.is_claimed(Direction::Vertical, key));
        }
        assert_eq!(reg.claimed_count(Direction::Vertical), 5);
        assert_eq!(reg.claimed_count(Direction::Horizontal), 0);
    }

    #[test]
    fn allocate_never_hands_out_the_same_line_twice() {
        let vp = Viewport::new(400, 400);
        let mut reg = LineOccupancyRegistry::new(40, 1000);
        let mut rng = XorShift32::new(5);
        let mut seen = std::collections::HashSet::new();
        // 11 horizontal lines exist; take them all
        for _ in 0..11 {
            let key = reg.allocate(Direction::Horizontal, &vp, &mut rng).unwrap();
            assert!(seen.insert(key), "key {key} handed out twice");
        }
        assert!(reg.allocate(Direction::Horizontal, &vp, &mut rng).is_err());
    }

    #[test]
    fn namespaces_are_independent() {
        let vp = Viewport::new(40, 40);
        let mut reg = LineOccupancyRegistry::new(40, 100);
        let mut rng = XorShift32::new(9);
        let mut h = vec![];
        let mut v = vec![];
        for _ in 0..2 {
            h.push(reg.allocate(Direction::Horizontal, &vp, &mut rng).unwrap());
            v.push(reg.allocate(Direction::Vertical, &vp, &mut rng).unwrap());
        }
        h.sort();
        v.sort();
        assert_eq!(h, vec![0, 40]);
        assert_eq!(v, vec![0, 40]);
    }

    #[test]
    fn release_is_idempotent() {
        let vp = Viewport::new(200, 200);
        let mut reg = LineOccupancyRegistry::new(40, 100);
        let mut rng = XorShift32::new(2);
        let claim = reg.allocate_any(&vp, &mut rng).unwrap();
        assert!(reg.release(claim.direction, claim.key));
        assert!(!reg.release(claim.direction, claim.key));
        assert!(!reg.release(claim.direction, 13));
        assert!(reg.is_empty());
    }

    #[test]
    fn clear_empties_both_directions() {
        let vp = Viewport::new(400, 400);
        let mut reg = LineOccupancyRegistry::new(40, 100);
        let mut rng = XorShift32::new(3);
        for _ in 0..8 {
            reg.allocate_any(&vp, &mut rng).unwrap();
        }
        assert!(!reg.is_empty());
        reg.clear();
        assert!(reg.is_empty());
        assert!(reg.claimed_keys(Direction::Horizontal).is_empty());
        assert!(reg.claimed_keys(Direction::Vertical).is_empty());
    }

    #[test]
    fn saturated_grid_gives_up_after_exact_probe_limit() {
        let vp = Viewport::new(80, 40);
        let mut reg = LineOccupancyRegistry::new(40, 100);
        fill_all(&mut reg, &vp);

        let mut rng = Counting { inner: XorShift32::new(42), draws: 0 };
        let err = reg.allocate_any(&vp, &mut rng).unwrap_err();
        assert_eq!(err, Unavailable { attempts: 100 });
        // direction + key per probe
        assert_eq!(rng.draws, 200);

        let mut rng = Counting { inner: XorShift32::new(42), draws: 0 };
        let err = reg.allocate(Direction::Vertical, &vp, &mut rng).unwrap_err();
        assert_eq!(err.attempts, 100);
        assert_eq!(rng.draws, 100);
    }

    #[test]
    fn same_seed_same_claims() {
        let vp = Viewport::new(800, 600);
        let run = || {
            let mut reg = LineOccupancyRegistry::new(40, 100);
            let mut rng = XorShift32::new(77);
            (0..20)
                .map(|_| reg.allocate_any(&vp, &mut rng).unwrap())
                .collect::<Vec<_>>()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn claimed_keys_are_sorted_multiples_of_cell() {
        let vp = Viewport::new(2000, 2000);
        let mut reg = LineOccupancyRegistry::new(40, 100);
        let mut rng = XorShift32::new(11);
        for _ in 0..30 {
            reg.allocate(Direction::Horizontal, &vp, &mut rng).unwrap();
        }
        let keys = reg.claimed_keys(Direction::Horizontal);
        assert_eq!(keys.len(), 30);
        assert!(keys.windows(2).all(|w| w[0] < w[1]));
        assert!(keys.iter().all(|k| k % 40 == 0 && *k <= 2000));
    }
}
