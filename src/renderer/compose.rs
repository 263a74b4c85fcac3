use glam::{IVec2, Vec2};

use super::{BACKGROUND, Canvas, Surface, projection::Viewport};

/// Where the two views land on the presented frame.
///
/// The 3-D view fills the left part of the window; the 2-D view (one pixel
/// per map unit) is anchored to the right edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub window: (usize, usize),
    pub view3d: (usize, usize),
    pub view2d: (usize, usize),
    pub view2d_at: IVec2,
}

impl Layout {
    pub fn new(window: (usize, usize), map: (usize, usize)) -> Self {
        let (win_w, win_h) = window;
        let view2d = (map.0.min(win_w), map.1.min(win_h));
        Self {
            window,
            view3d: (win_w - view2d.0, win_h),
            view2d,
            view2d_at: IVec2::new((win_w - view2d.0) as i32, 0),
        }
    }

    /// Convert a frame-space point to map coordinates, `None` outside the
    /// 2-D view.
    pub fn to_map(&self, p: Vec2) -> Option<Vec2> {
        let local = p - self.view2d_at.as_vec2();
        let inside = local.x >= 0.0
            && local.y >= 0.0
            && local.x < self.view2d.0 as f32
            && local.y < self.view2d.1 as f32;
        inside.then_some(local)
    }

    pub fn viewport(&self) -> Viewport {
        Viewport {
            width: self.view3d.0 as f32,
            height: self.view3d.1 as f32,
        }
    }
}

/// Map a pointer position in window pixels back to frame pixels.
///
/// With `keep_aspect` the frame is scaled uniformly and centred, so points
/// on the letterbox bars map to `None`; otherwise each axis stretches on
/// its own.
pub fn window_to_frame(
    p: Vec2,
    window: (usize, usize),
    frame: (usize, usize),
    keep_aspect: bool,
) -> Option<Vec2> {
    if window.0 == 0 || window.1 == 0 || frame.0 == 0 || frame.1 == 0 {
        return None;
    }
    let win = Vec2::new(window.0 as f32, window.1 as f32);
    let frm = Vec2::new(frame.0 as f32, frame.1 as f32);
    let scale = if keep_aspect {
        Vec2::splat((win / frm).min_element())
    } else {
        win / frm
    };
    let margin = (win - frm * scale) * 0.5;
    let q = (p - margin) / scale;
    let inside = q.x >= 0.0 && q.y >= 0.0 && q.x < frm.x && q.y < frm.y;
    inside.then_some(q)
}

/// Blit both off-screen views onto `target` at their layout positions.
pub fn compose<S: Surface>(target: &mut S, view3d: &Canvas, view2d: &Canvas, layout: &Layout) {
    target.fill(BACKGROUND);
    target.blit(view3d, IVec2::ZERO);
    target.blit(view2d, layout.view2d_at);
}

/*──────────────────────────────── Tests ───────────────────────────────*/
