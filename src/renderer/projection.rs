use glam::{Vec2, vec2};

use super::{FRAME_COLOR, Rgba, Surface, rgb};
use crate::{
    caster::RayFan,
    geometry::{GeometryError, Wall, distance_to_nearest_wall, translate},
};

/// Scale applied to `1 / distance` before remapping into the viewport.
pub const DEFAULT_WALL_SCALE: f32 = 100.0;

/// Size of the pseudo-3-D target, in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

/// One vertical wall slice, already in viewport space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Strip {
    pub x: f32,
    pub width: f32,
    pub top: f32,
    pub bottom: f32,
    pub distance: f32,
    pub color: Rgba,
}

impl Strip {
    #[inline]
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }
}

/// Outcome of casting one screen column.
///
/// A ray that hits nothing is `Empty`; it is never a zero-height strip.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Column {
    Empty,
    Strip(Strip),
}

/// Linear brightness ramp over the ray index: 0 for the first ray, 255 for
/// the last.  A single ray is drawn at full brightness.
pub fn brightness(index: usize, count: usize) -> u8 {
    if count <= 1 {
        return 255;
    }
    let v = (index.min(count - 1) as f32 * 255.0 / (count - 1) as f32).round();
    v as u8
}

/// Strip height for a wall `distance` away.
///
/// `translate(0, 2 * max_dim, wall_scale / d, 0, viewport_h)`: inverse
/// distance remapped into the viewport height.
///
/// A distance of exactly zero means a ray started on a wall, which map
/// generation never produces; debug builds stop here, release builds clamp
/// that column to the full viewport height.
pub fn strip_height(
    distance: f32,
    max_dim: f32,
    wall_scale: f32,
    viewport_h: f32,
) -> Result<f32, GeometryError> {
    debug_assert!(distance > 0.0, "ray reported a wall at distance {distance}");
    if distance <= 0.0 {
        return Ok(viewport_h);
    }
    translate(0.0, 2.0 * max_dim, wall_scale / distance, 0.0, viewport_h)
}

/// Cast every ray of `fan` against `walls` and lay the results out as
/// left-to-right columns.
///
/// Each column is computed on its own: an `Empty` column never affects its
/// neighbours.
pub fn project_columns(
    fan: &RayFan,
    walls: &[Wall],
    viewport: Viewport,
    max_dim: f32,
    wall_scale: f32,
) -> Result<Vec<Column>, GeometryError> {
    let count = fan.len();
    if count == 0 {
        return Ok(Vec::new());
    }
    let strip_w = viewport.width / count as f32;

    fan.rays()
        .iter()
        .enumerate()
        .map(|(i, ray)| -> Result<Column, GeometryError> {
            let Some(d) = distance_to_nearest_wall(ray, walls) else {
                return Ok(Column::Empty);
            };
            let h = strip_height(d, max_dim, wall_scale, viewport.height)?;
            let b = brightness(i, count);
            Ok(Column::Strip(Strip {
                x: i as f32 * strip_w,
                width: strip_w,
                top: (viewport.height - h) * 0.5,
                bottom: (viewport.height + h) * 0.5,
                distance: d,
                color: rgb(b, b, b),
            }))
        })
        .collect()
}

/// Rasterise `columns` into `target`, then frame the viewport.
pub fn draw_columns<S: Surface>(target: &mut S, columns: &[Column], viewport: Viewport) {
    for column in columns {
        let Column::Strip(s) = column else {
            continue;
        };
        let cx = s.x + s.width * 0.5;
        let thickness = s.width.ceil().max(1.0) as u32;
        target.draw_line(vec2(cx, s.top), vec2(cx, s.bottom), s.color, thickness);
    }
    draw_frame(target, viewport);
}

fn draw_frame<S: Surface>(target: &mut S, viewport: Viewport) {
    let (r, b) = (viewport.width - 1.0, viewport.height - 1.0);
    let corners = [vec2(0.0, 0.0), vec2(r, 0.0), vec2(r, b), vec2(0.0, b)];
    for i in 0..4 {
        let (p, q): (Vec2, Vec2) = (corners[i], corners[(i + 1) % 4]);
        target.draw_line(p, q, FRAME_COLOR, 2);
    }
}

/*──────────────────────────────── Tests ───────────────────────────────*/
#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        renderer::{BACKGROUND, Canvas},
        world::MapBounds,
    };

    const VIEW: Viewport = Viewport {
        width: 100.0,
        height: 50.0,
    };

    fn strips(cols: &[Column]) -> Vec<Strip> {
        cols.iter()
            .filter_map(|c| match c {
                Column::Strip(s) => Some(*s),
                Column::Empty => None,
            })
            .collect()
    }

    #[test]
    fn brightness_ramp_is_linear() {
        assert_eq!(brightness(0, 91), 0);
        assert_eq!(brightness(90, 91), 255);
        assert_eq!(brightness(45, 91), 128);
        assert_eq!(brightness(0, 1), 255);
        let ramp: Vec<u8> = (0..5).map(|i| brightness(i, 5)).collect();
        assert_eq!(ramp, vec![0, 64, 128, 191, 255]);
    }

    #[test]
    fn height_is_inverse_distance_remapped() {
        // 100 / 10 = 10, remapped from [0, 1000] to [0, 50] → 0.5
        let h = strip_height(10.0, 500.0, 100.0, 50.0).unwrap();
        assert!((h - 0.5).abs() < 1e-6);
        let near = strip_height(1.0, 500.0, 100.0, 50.0).unwrap();
        assert!(near > h);
    }

    #[test]
    fn empty_map_dimension_is_an_error() {
        assert!(matches!(
            strip_height(10.0, 0.0, 100.0, 50.0),
            Err(GeometryError::EmptyRange { .. })
        ));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "distance 0")]
    fn zero_distance_fails_loudly_in_debug() {
        let _ = strip_height(0.0, 500.0, 100.0, 50.0);
    }

    #[test]
    fn columns_follow_fan_order_and_layout() {
        let bounds = MapBounds::new(500.0, 500.0);
        let walls = bounds.border();
        let fan = RayFan::build(bounds.center(), 0.0, 4.0, 1.0);

        let cols = project_columns(&fan, &walls, VIEW, bounds.max_dim(), 100.0).unwrap();
        assert_eq!(cols.len(), 5);

        let s = strips(&cols);
        assert_eq!(s.len(), 5);
        for (i, strip) in s.iter().enumerate() {
            assert!((strip.width - 20.0).abs() < 1e-6);
            assert!((strip.x - i as f32 * 20.0).abs() < 1e-4);
            assert!((strip.top + strip.bottom - VIEW.height).abs() < 1e-4);
            assert!(strip.height() > 0.0);
            assert_eq!(strip.color, rgb(brightness(i, 5), brightness(i, 5), brightness(i, 5)));
        }
        // centre ray hits the right border at 250
        assert!((s[2].distance - 250.0).abs() < 1e-3);
    }

    #[test]
    fn rays_without_hits_are_empty_not_zero() {
        // single wall straight ahead, narrow enough that edge rays miss it
        let walls = [Wall::new(vec2(100.0, -1.0), vec2(100.0, 1.0))];
        let fan = RayFan::build(Vec2::ZERO, 0.0, 20.0, 0.5);
        let cols = project_columns(&fan, &walls, VIEW, 500.0, 100.0).unwrap();

        assert_eq!(cols.len(), 11);
        assert_eq!(cols[0], Column::Empty);
        assert_eq!(cols[10], Column::Empty);
        let Column::Strip(centre) = cols[5] else {
            panic!("centre ray must hit");
        };
        assert!((centre.distance - 100.0).abs() < 1e-3);
    }

    #[test]
    fn empty_columns_do_not_stop_later_strips() {
        let mut canvas = Canvas::new(100, 50);
        canvas.fill(BACKGROUND);
        let strip = Strip {
            x: 80.0,
            width: 20.0,
            top: 10.0,
            bottom: 40.0,
            distance: 3.0,
            color: rgb(255, 255, 255),
        };
        let cols = [Column::Empty, Column::Empty, Column::Strip(strip)];
        draw_columns(&mut canvas, &cols, VIEW);

        assert_eq!(canvas.pixel(90, 25), Some(rgb(255, 255, 255)));
        assert_eq!(canvas.pixel(20, 25), Some(BACKGROUND));
        // frame
        assert_eq!(canvas.pixel(0, 25), Some(FRAME_COLOR));
        assert_eq!(canvas.pixel(50, 0), Some(FRAME_COLOR));
    }

    #[test]
    fn no_walls_no_strips() {
        let fan = RayFan::build(Vec2::ZERO, 0.0, 60.0, 1.0);
        let cols = project_columns(&fan, &[], VIEW, 500.0, 100.0).unwrap();
        assert!(cols.iter().all(|c| *c == Column::Empty));
    }
}
