//! Rendering abstraction layer.
//!
//! *Nothing outside this module touches a pixel buffer directly.*
//! The views are written against the [`Surface`] trait; the only back-end is
//! the software [`Canvas`], whose finished buffer the frame driver hands to
//! the window.
//!
//! * [`top_down`]   – 2-D debug view: walls, ray segments, heading indicator.
//! * [`projection`] – pseudo-3-D view: one vertical strip per ray.
//! * [`compose`]    – places both off-screen views onto the presented frame.

use glam::{IVec2, Vec2};

pub mod compose;
pub mod projection;
mod software;
pub mod top_down;

pub use compose::{Layout, compose, window_to_frame};
pub use projection::{Column, Strip, Viewport, brightness, draw_columns, project_columns};
pub use software::Canvas;
pub use top_down::draw_top_down;

/// Pixel format of the software frame-buffer (0x00RRGGBB).
pub type Rgba = u32;

#[inline]
pub const fn rgb(r: u8, g: u8, b: u8) -> Rgba {
    ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}

pub const BACKGROUND: Rgba = rgb(0, 43, 53);
pub const WALL_COLOR: Rgba = rgb(255, 255, 255);
pub const LOOK_COLOR: Rgba = rgb(120, 120, 200);
pub const MARKER_COLOR: Rgba = rgb(0, 255, 255);
pub const FRAME_COLOR: Rgba = rgb(200, 200, 200);

/// Anything the views can draw into.
///
/// Coordinates are in surface pixels; everything outside the surface is
/// clipped silently.
pub trait Surface {
    /// `(width, height)` in pixels.
    fn size(&self) -> (usize, usize);

    /// Overwrite every pixel with `color`.
    fn fill(&mut self, color: Rgba);

    /// Aliased line from `a` to `b`, `thickness` pixels wide (0 is treated
    /// as 1).
    fn draw_line(&mut self, a: Vec2, b: Vec2, color: Rgba, thickness: u32);

    /// One-pixel anti-aliased line blended over the current contents.
    fn draw_aaline(&mut self, a: Vec2, b: Vec2, color: Rgba);

    /// Copy `src` onto this surface with its top-left corner at `at`.
    fn blit(&mut self, src: &Canvas, at: IVec2);
}
