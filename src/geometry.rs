//! Ray-versus-segment intersection and the helpers built on top of it.
//!
//! Everything here is pure maths over [`glam::Vec2`]; nothing allocates and
//! nothing touches a pixel.  The caster asks these functions one question per
//! ray per frame: *which wall does this ray hit first, and how far away is it?*

use glam::Vec2;

use crate::caster::Ray;

/// Length the ray is extended to before solving the two-segment system.
///
/// This is a numerical device, not a range cutoff: `u` is never bounded from
/// above, so hits past this length still count.
pub const CAST_LENGTH: f32 = 10_000.0;

/// Things that can go wrong in the geometry helpers.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum GeometryError {
    /// `translate` was asked to remap from a zero-width input range.
    #[error("input range is empty (min == max == {min})")]
    EmptyRange { min: f32 },
}

/// Immutable, undirected map segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Wall {
    pub start: Vec2,
    pub end: Vec2,
}

impl Wall {
    pub fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn length(&self) -> f32 {
        self.start.distance(self.end)
    }

    #[inline]
    pub fn midpoint(&self) -> Vec2 {
        (self.start + self.end) * 0.5
    }
}

/*───────────────────────────── intersection ────────────────────────────*/

/// Point where `ray` crosses `wall`, if any.
///
/// * parallel / collinear (`den == 0`) → `None`
/// * `t` must lie in the open interval `(0, 1)`: touching a wall exactly at
///   an endpoint is not a hit
/// * `u > 0`: the wall must be in front of the origin
pub fn intersect(ray: &Ray, wall: &Wall) -> Option<Vec2> {
    let (x1, y1) = (wall.start.x, wall.start.y);
    let (x2, y2) = (wall.end.x, wall.end.y);
    let (x3, y3) = (ray.origin.x, ray.origin.y);
    let far = ray.point_at(CAST_LENGTH);
    let (x4, y4) = (far.x, far.y);

    let den = (x1 - x2) * (y3 - y4) - (y1 - y2) * (x3 - x4);
    if den == 0.0 {
        return None;
    }

    let t = ((x1 - x3) * (y3 - y4) - (y1 - y3) * (x3 - x4)) / den;
    let u = -((x1 - x2) * (y1 - y3) - (y1 - y2) * (x1 - x3)) / den;

    if t > 0.0 && t < 1.0 && u > 0.0 {
        Some(wall.start + t * (wall.end - wall.start))
    } else {
        None
    }
}

/// Closest intersection of `ray` with any of `walls`.
///
/// Ties keep the first wall in iteration order.
pub fn nearest_wall_hit<'a, I>(ray: &Ray, walls: I) -> Option<Vec2>
where
    I: IntoIterator<Item = &'a Wall>,
{
    let mut best: Option<(f32, Vec2)> = None;
    for wall in walls {
        let Some(hit) = intersect(ray, wall) else {
            continue;
        };
        let d = ray.origin.distance(hit);
        match best {
            Some((best_d, _)) if d >= best_d => {}
            _ => best = Some((d, hit)),
        }
    }
    best.map(|(_, p)| p)
}

/// Euclidean distance from the ray origin to [`nearest_wall_hit`].
///
/// `Some(0.0)` is a real hit at the origin and is *not* the same as `None`.
pub fn distance_to_nearest_wall<'a, I>(ray: &Ray, walls: I) -> Option<f32>
where
    I: IntoIterator<Item = &'a Wall>,
{
    nearest_wall_hit(ray, walls).map(|hit| ray.origin.distance(hit))
}

/*─────────────────────────────── remapping ─────────────────────────────*/

/// Linear remap of `v` from `[in_min, in_max]` onto `[out_min, out_max]`.
///
/// ```text
/// (v - in_min) / (in_max - in_min) * (out_max - out_min) + out_min
/// ```
///
/// Values outside the input range extrapolate; nothing is clamped.
pub fn translate(
    in_min: f32,
    in_max: f32,
    v: f32,
    out_min: f32,
    out_max: f32,
) -> Result<f32, GeometryError> {
    let span = in_max - in_min;
    if span == 0.0 {
        return Err(GeometryError::EmptyRange { min: in_min });
    }
    Ok((v - in_min) / span * (out_max - out_min) + out_min)
}

/*──────────────────────────────── Tests ───────────────────────────────*/
#[cfg(test)]
mod tests {
    use super::*;
    use glam::vec2;

    fn ray(x: f32, y: f32, angle: f32) -> Ray {
        Ray::new(vec2(x, y), angle, 0.0)
    }

    fn wall(x1: f32, y1: f32, x2: f32, y2: f32) -> Wall {
        Wall::new(vec2(x1, y1), vec2(x2, y2))
    }

    fn border(w: f32, h: f32) -> Vec<Wall> {
        vec![
            wall(0.0, 0.0, w, 0.0),
            wall(w, 0.0, w, h),
            wall(w, h, 0.0, h),
            wall(0.0, h, 0.0, 0.0),
        ]
    }

    #[test]
    fn hits_wall_straight_ahead() {
        let hit = intersect(&ray(0.0, 5.0, 0.0), &wall(10.0, 0.0, 10.0, 10.0)).unwrap();
        assert!((hit - vec2(10.0, 5.0)).length() < 1e-4);
    }

    #[test]
    fn hit_beyond_cast_length_still_counts() {
        let far = CAST_LENGTH * 3.0;
        let hit = intersect(&ray(0.0, 0.0, 0.0), &wall(far, -1.0, far, 1.0)).unwrap();
        assert!((hit.x - far).abs() < 1.0);
    }

    #[test]
    fn wall_behind_origin_is_ignored() {
        assert!(intersect(&ray(50.0, 5.0, 0.0), &wall(10.0, 0.0, 10.0, 10.0)).is_none());
    }

    #[test]
    fn ray_missing_segment_returns_none() {
        // line through the wall is crossed at y = 20, outside the segment
        assert!(intersect(&ray(0.0, 20.0, 0.0), &wall(10.0, 0.0, 10.0, 10.0)).is_none());
    }

    #[test]
    fn parallel_walls_never_intersect() {
        let r = ray(0.0, 0.0, 0.0);
        for y in [-100.0, -1.0, 1.0, 3.5, 400.0] {
            assert!(intersect(&r, &wall(-50.0, y, 50.0, y)).is_none());
            assert!(intersect(&r, &wall(5.0, y, 500.0, y)).is_none());
        }
    }

    #[test]
    fn axis_aligned_rays_never_hit_parallel_walls() {
        // vertical walls beside rays at 90° / 270°, horizontal beside 180°
        for x in [-1e-4, -0.05, 0.05, 3.0] {
            let w = wall(x, -5_000.0, x, 1.0e7);
            for angle in [90.0, 270.0, -90.0] {
                assert!(intersect(&ray(0.0, 0.0, angle), &w).is_none(), "x {x} angle {angle}");
            }
            let h = wall(-1.0e7, x, 5_000.0, x);
            assert!(intersect(&ray(0.0, 0.0, 180.0), &h).is_none(), "y {x}");
        }
        // a border map seen from inside, looking straight down each side
        let walls = border(500.0, 500.0);
        for angle in [0.0, 90.0, 180.0, 270.0] {
            let d = distance_to_nearest_wall(&ray(1.0, 1.0, angle), &walls);
            assert!(matches!(d, Some(d) if d > 0.0 && d.is_finite()), "angle {angle}: {d:?}");
        }
    }

    #[test]
    fn origin_on_wall_endpoint_is_not_a_hit() {
        let w = wall(100.0, 100.0, 200.0, 50.0);
        for angle in [0.0, 30.0, 90.0, 135.0, 200.0, 300.0] {
            assert!(
                intersect(&ray(100.0, 100.0, angle), &w).is_none(),
                "angle {angle} reported a hit at its own endpoint"
            );
        }
    }

    #[test]
    fn nearest_hit_picks_closest_wall() {
        let walls = [
            wall(30.0, -5.0, 30.0, 5.0),
            wall(10.0, -5.0, 10.0, 5.0),
            wall(20.0, -5.0, 20.0, 5.0),
        ];
        let hit = nearest_wall_hit(&ray(0.0, 0.0, 0.0), &walls).unwrap();
        assert!((hit - vec2(10.0, 0.0)).length() < 1e-4);
    }

    #[test]
    fn nearest_hit_tie_keeps_first_wall() {
        // two walls crossing the ray at the same point
        let walls = [wall(10.0, -5.0, 10.0, 5.0), wall(5.0, -5.0, 15.0, 5.0)];
        let r = ray(0.0, 0.0, 0.0);
        let first = intersect(&r, &walls[0]).unwrap();
        assert_eq!(nearest_wall_hit(&r, &walls), Some(first));
    }

    #[test]
    fn nearest_hit_with_no_walls_is_none() {
        let none: [Wall; 0] = [];
        assert_eq!(nearest_wall_hit(&ray(0.0, 0.0, 45.0), &none), None);
        assert_eq!(distance_to_nearest_wall(&ray(0.0, 0.0, 45.0), &none), None);
    }

    #[test]
    fn nearest_hit_all_parallel_is_none() {
        let walls = [wall(-5.0, 1.0, 5.0, 1.0), wall(-5.0, -1.0, 5.0, -1.0)];
        assert_eq!(nearest_wall_hit(&ray(0.0, 0.0, 0.0), &walls), None);
    }

    #[test]
    fn border_only_map_right_wall() {
        let walls = border(500.0, 500.0);
        let r = ray(250.0, 250.0, 0.0);
        let hit = nearest_wall_hit(&r, &walls).unwrap();
        assert!((hit - vec2(500.0, 250.0)).length() < 1e-3);
        let d = distance_to_nearest_wall(&r, &walls).unwrap();
        assert!((d - 250.0).abs() < 1e-3);
    }

    #[test]
    fn translate_midpoint() {
        assert_eq!(translate(0.0, 100.0, 50.0, 0.0, 10.0), Ok(5.0));
    }

    #[test]
    fn translate_empty_range_fails_fast() {
        assert_eq!(
            translate(3.0, 3.0, 1.0, 0.0, 1.0),
            Err(GeometryError::EmptyRange { min: 3.0 })
        );
    }

    #[test]
    fn wall_helpers() {
        let w = wall(0.0, 0.0, 6.0, 8.0);
        assert!((w.length() - 10.0).abs() < 1e-6);
        assert_eq!(w.midpoint(), vec2(3.0, 4.0));
    }
}
