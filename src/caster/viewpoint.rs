use glam::Vec2;

use super::ray::{Ray, RayFan};

/// The moving eye: position + heading, plus the ray fan attached to it.
///
/// * Angles are degrees, 0 = +X, and grow clockwise on screen (y is down).
/// * Forward is the heading vector; lateral is `heading + 90°` (screen-right).
/// * Every mutator leaves the fan in sync before it returns.
#[derive(Clone, Debug)]
pub struct Viewpoint {
    pos: Vec2,
    heading: f32,
    fov: f32,
    resolution: f32,
    fan: RayFan,
}

impl Viewpoint {
    /// Create a viewpoint at `pos`, facing `heading`, with `fov` degrees
    /// covered at `resolution` rays per degree.
    pub fn new(pos: Vec2, heading: f32, fov: f32, resolution: f32) -> Self {
        let heading = normalize_deg(heading);
        Self {
            pos,
            heading,
            fov,
            resolution,
            fan: RayFan::build(pos, heading, fov, resolution),
        }
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    pub fn heading(&self) -> f32 {
        self.heading
    }

    #[inline]
    pub fn fov(&self) -> f32 {
        self.fov
    }

    #[inline]
    pub fn resolution(&self) -> f32 {
        self.resolution
    }

    #[inline]
    pub fn fan(&self) -> &RayFan {
        &self.fan
    }

    #[inline]
    pub fn look(&self) -> &Ray {
        self.fan.look()
    }

    /*──────────────────────── movement commands ─────────────────────*/

    /// Step `amount` units along `heading + 90°`; negative steps go left.
    pub fn move_lateral(&mut self, amount: f32) {
        self.displace(self.heading + 90.0, amount);
    }

    /// Step `amount` units along the heading; negative steps go backward.
    pub fn move_forward(&mut self, amount: f32) {
        self.displace(self.heading, amount);
    }

    /// Face `heading` degrees (absolute, not relative).
    pub fn rotate(&mut self, heading: f32) {
        self.heading = normalize_deg(heading);
        self.sync();
    }

    /// Rotate by `delta` degrees relative to the current heading.
    pub fn turn(&mut self, delta: f32) {
        self.rotate(self.heading + delta);
    }

    pub fn set_position(&mut self, pos: Vec2) {
        self.pos = pos;
        self.sync();
    }

    fn displace(&mut self, angle: f32, amount: f32) {
        let (s, c) = angle.to_radians().sin_cos();
        self.pos += Vec2::new(c, s) * amount;
        self.sync();
    }

    #[inline]
    fn sync(&mut self) {
        self.fan.retarget(self.pos, self.heading);
    }
}

/// Wrap an angle in degrees into `[0, 360)`.
#[inline]
pub fn normalize_deg(a: f32) -> f32 {
    let r = a.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if r >= 360.0 { 0.0 } else { r }
}

/*──────────────────────────────── Tests ───────────────────────────────*/
