//! ---------------------------------------------------------------------------
//! Software (CPU) line renderer
//!
//! * Owns a row-major `Vec<u32>` frame-buffer in **0x00RRGGBB** format.
//! * Lines are clipped to the buffer in float space first (Liang–Barsky), so
//!   an absurdly tall strip costs no more than a full-height one.
//! ---------------------------------------------------------------------------

use glam::{DVec2, IVec2, Vec2, vec2};

use super::{Rgba, Surface};

/// Off-screen pixel buffer.
#[derive(Clone, Debug)]
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<Rgba>,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width * height],
        }
    }

    #[inline]
    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Pixel at `(x, y)`, `None` when outside the buffer.
    #[inline]
    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgba> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some(y as usize * self.width + x as usize)
    }

    #[inline]
    fn put(&mut self, x: i32, y: i32, color: Rgba) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color;
        }
    }

    /// Blend `color` over the existing pixel with weight `w` in `0..=1`.
    #[inline]
    fn plot(&mut self, x: i32, y: i32, color: Rgba, w: f32) {
        if let Some(i) = self.index(x, y) {
            let w256 = (w.clamp(0.0, 1.0) * 256.0) as u32;
            self.pixels[i] = lerp_color_u32(self.pixels[i], color, w256);
        }
    }

    /// Clip `a → b` against the pixel rectangle; `None` if nothing remains.
    ///
    /// Runs in f64 so far-away endpoints do not swallow the visible part.
    fn clip(&self, a: Vec2, b: Vec2) -> Option<(Vec2, Vec2)> {
        if self.width == 0 || self.height == 0 || !a.is_finite() || !b.is_finite() {
            return None;
        }
        let (a, b) = (a.as_dvec2(), b.as_dvec2());
        let max = DVec2::new(self.width as f64 - 1.0, self.height as f64 - 1.0);
        let d = b - a;
        let mut t0 = 0.0f64;
        let mut t1 = 1.0f64;

        // (p, q) pairs for the four edges: left, right, top, bottom
        for (p, q) in [(-d.x, a.x), (d.x, max.x - a.x), (-d.y, a.y), (d.y, max.y - a.y)] {
            if p == 0.0 {
                if q < 0.0 {
                    return None;
                }
                continue;
            }
            let r = q / p;
            if p < 0.0 {
                t0 = t0.max(r);
            } else {
                t1 = t1.min(r);
            }
            if t0 > t1 {
                return None;
            }
        }
        Some(((a + d * t0).as_vec2(), (a + d * t1).as_vec2()))
    }
}

/*──────────────────────── Surface trait impl ─────────────────────────*/
impl Surface for Canvas {
    fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    fn fill(&mut self, color: Rgba) {
        self.pixels.fill(color);
    }

    /// Bresenham; thick lines stamp a span across the minor axis per step.
    fn draw_line(&mut self, a: Vec2, b: Vec2, color: Rgba, thickness: u32) {
        let Some((a, b)) = self.clip(a, b) else {
            return;
        };
        let (mut x0, mut y0) = (a.x.round() as i32, a.y.round() as i32);
        let (x1, y1) = (b.x.round() as i32, b.y.round() as i32);

        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        let t = thickness.max(1) as i32;
        let lo = -(t - 1) / 2;
        let hi = lo + t;
        let x_major = dx >= -dy;

        loop {
            for o in lo..hi {
                if x_major {
                    self.put(x0, y0 + o, color);
                } else {
                    self.put(x0 + o, y0, color);
                }
            }
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    /// Xiaolin Wu's algorithm.
    fn draw_aaline(&mut self, a: Vec2, b: Vec2, color: Rgba) {
        let Some((mut a, mut b)) = self.clip(a, b) else {
            return;
        };
        let steep = (b.y - a.y).abs() > (b.x - a.x).abs();
        if steep {
            a = vec2(a.y, a.x);
            b = vec2(b.y, b.x);
        }
        if a.x > b.x {
            core::mem::swap(&mut a, &mut b);
        }

        let dx = b.x - a.x;
        let gradient = if dx == 0.0 { 1.0 } else { (b.y - a.y) / dx };

        let mut plot = |x: i32, y: i32, w: f32| {
            if steep {
                self.plot(y, x, color, w);
            } else {
                self.plot(x, y, color, w);
            }
        };

        let x_start = a.x.round() as i32;
        let x_end = b.x.round() as i32;
        let mut y = a.y + gradient * (x_start as f32 - a.x);
        for x in x_start..=x_end {
            let base = y.floor();
            let frac = y - base;
            plot(x, base as i32, 1.0 - frac);
            plot(x, base as i32 + 1, frac);
            y += gradient;
        }
    }

    fn blit(&mut self, src: &Canvas, at: IVec2) {
        for sy in 0..src.height {
            let dy = at.y + sy as i32;
            if dy < 0 || dy as usize >= self.height {
                continue;
            }
            // clamp the copied row to the destination's horizontal extent
            let x_from = (-at.x).max(0) as usize;
            let x_to = (self.width as i32 - at.x).clamp(0, src.width as i32) as usize;
            if x_from >= x_to {
                return;
            }
            let src_row = &src.pixels[sy * src.width..(sy + 1) * src.width];
            let dst_off = dy as usize * self.width + (at.x + x_from as i32) as usize;
            self.pixels[dst_off..dst_off + (x_to - x_from)]
                .copy_from_slice(&src_row[x_from..x_to]);
        }
    }
}

#[inline]
fn lerp_color_u32(a: u32, b: u32, w256: u32) -> u32 {
    // w256 in [0, 256]; inv = 256 - w256
    let inv = 256 - w256;
    // R and B together (00RR00BB), then G on its own
    let rb = (((a & 0x00FF00FF) * inv + (b & 0x00FF00FF) * w256) >> 8) & 0x00FF00FF;
    let g = (((a & 0x0000FF00) * inv + (b & 0x0000FF00) * w256) >> 8) & 0x0000FF00;
    rb | g
}

/*──────────────────────────────── Tests ───────────────────────────────*/
