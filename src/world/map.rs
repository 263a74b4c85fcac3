use glam::{Vec2, vec2};
use rand::Rng;

use crate::geometry::Wall;

/// Axis-aligned extent of the map, anchored at the origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapBounds {
    pub width: f32,
    pub height: f32,
}

impl MapBounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Larger of the two sides; drives the projection's input range.
    #[inline]
    pub fn max_dim(&self) -> f32 {
        self.width.max(self.height)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        vec2(self.width * 0.5, self.height * 0.5)
    }

    /// The four segments of the bounding rectangle, clockwise from top-left.
    pub fn border(&self) -> [Wall; 4] {
        let (w, h) = (self.width, self.height);
        [
            Wall::new(vec2(0.0, 0.0), vec2(w, 0.0)),
            Wall::new(vec2(w, 0.0), vec2(w, h)),
            Wall::new(vec2(w, h), vec2(0.0, h)),
            Wall::new(vec2(0.0, h), vec2(0.0, 0.0)),
        ]
    }
}

/// Fixed wall set for one session: random interior walls, then the border.
///
/// Immutable once built; the caster only ever borrows [`Map::walls`].
#[derive(Clone, Debug)]
pub struct Map {
    bounds: MapBounds,
    walls: Vec<Wall>,
    interior: usize,
}

impl Map {
    /// `interior` random walls with endpoints sampled uniformly inside
    /// `bounds`, followed by the 4 border walls.
    pub fn generate<R: Rng + ?Sized>(bounds: MapBounds, interior: usize, rng: &mut R) -> Self {
        let mut walls = Vec::with_capacity(interior + 4);
        for _ in 0..interior {
            let a = random_point(bounds, rng);
            let b = random_point(bounds, rng);
            walls.push(Wall::new(a, b));
        }
        walls.extend(bounds.border());

        tracing::info!(
            interior,
            total = walls.len(),
            width = bounds.width,
            height = bounds.height,
            "generated map"
        );
        for (i, w) in walls.iter().take(interior).enumerate() {
            tracing::debug!(i, len = w.length(), mid = ?w.midpoint(), "interior wall");
        }

        Self {
            bounds,
            walls,
            interior,
        }
    }

    /// Map holding only the border rectangle.
    pub fn bordered(bounds: MapBounds) -> Self {
        Self {
            bounds,
            walls: bounds.border().to_vec(),
            interior: 0,
        }
    }

    #[inline]
    pub fn bounds(&self) -> MapBounds {
        self.bounds
    }

    #[inline]
    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    /// Randomly generated walls only (border excluded).
    #[inline]
    pub fn interior(&self) -> &[Wall] {
        &self.walls[..self.interior]
    }
}

fn random_point<R: Rng + ?Sized>(bounds: MapBounds, rng: &mut R) -> Vec2 {
    vec2(
        rng.gen_range(0.0..=bounds.width),
        rng.gen_range(0.0..=bounds.height),
    )
}

/*──────────────────────────────── Tests ───────────────────────────────*/
#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn generate_has_interior_plus_border() {
        let mut rng = StdRng::seed_from_u64(7);
        let map = Map::generate(MapBounds::new(640.0, 480.0), 5, &mut rng);
        assert_eq!(map.walls().len(), 9);
        assert_eq!(map.interior().len(), 5);
        assert_eq!(&map.walls()[5..], &MapBounds::new(640.0, 480.0).border());
    }

    #[test]
    fn interior_walls_stay_in_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let map = Map::generate(MapBounds::new(100.0, 50.0), 64, &mut rng);
        for w in map.interior() {
            for p in [w.start, w.end] {
                assert!((0.0..=100.0).contains(&p.x));
                assert!((0.0..=50.0).contains(&p.y));
            }
        }
    }

    #[test]
    fn same_seed_same_map() {
        let b = MapBounds::new(300.0, 300.0);
        let m1 = Map::generate(b, 8, &mut StdRng::seed_from_u64(1));
        let m2 = Map::generate(b, 8, &mut StdRng::seed_from_u64(1));
        assert_eq!(m1.walls(), m2.walls());
    }

    #[test]
    fn bordered_map_is_closed_rectangle() {
        let map = Map::bordered(MapBounds::new(500.0, 500.0));
        assert_eq!(map.walls().len(), 4);
        assert!(map.interior().is_empty());
        let walls = map.walls();
        for i in 0..4 {
            assert_eq!(walls[i].end, walls[(i + 1) % 4].start);
        }
    }

    #[test]
    fn bounds_helpers() {
        let b = MapBounds::new(600.0, 900.0);
        assert_eq!(b.max_dim(), 900.0);
        assert_eq!(b.center(), vec2(300.0, 450.0));
    }
}
