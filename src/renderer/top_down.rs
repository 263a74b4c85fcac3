use glam::vec2;

use super::{BACKGROUND, LOOK_COLOR, MARKER_COLOR, Surface, WALL_COLOR, projection::brightness, rgb};
use crate::{caster::Viewpoint, geometry::nearest_wall_hit, world::Map};

/// Length of the heading indicator, in map units.
pub const LOOK_LENGTH: f32 = 100.0;

const MARKER_RADIUS: f32 = 4.0;

/// Top-down debug view in map coordinates (one map unit = one pixel).
///
/// Ray segments fade from black (first ray) to red (last ray); rays that hit
/// nothing draw nothing.
pub fn draw_top_down<S: Surface>(target: &mut S, map: &Map, view: &Viewpoint) {
    target.fill(BACKGROUND);

    let rays = view.fan().rays();
    for (i, ray) in rays.iter().enumerate() {
        if let Some(hit) = nearest_wall_hit(ray, map.walls()) {
            target.draw_aaline(ray.origin, hit, rgb(brightness(i, rays.len()), 0, 0));
        }
    }

    for wall in map.walls() {
        target.draw_line(wall.start, wall.end, WALL_COLOR, 1);
    }

    let look = view.look();
    target.draw_line(look.origin, look.point_at(LOOK_LENGTH), LOOK_COLOR, 2);

    let p = view.pos();
    target.draw_line(p - vec2(MARKER_RADIUS, 0.0), p + vec2(MARKER_RADIUS, 0.0), MARKER_COLOR, 1);
    target.draw_line(p - vec2(0.0, MARKER_RADIUS), p + vec2(0.0, MARKER_RADIUS), MARKER_COLOR, 1);
}

/*──────────────────────────────── Tests ───────────────────────────────*/
