use glam::{Vec2, vec2};

/// Upper bound on rays per fan; larger requests are clamped.
pub const MAX_RAYS: usize = 8192;

const AXES: [Vec2; 4] = [Vec2::X, Vec2::Y, Vec2::NEG_X, Vec2::NEG_Y];

/// One sight line of the fan.
///
/// Rays hold a *copy* of the viewpoint position; [`RayFan::retarget`] is the
/// only place that refreshes it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec2,
    /// Absolute angle in degrees (0 = +X, y grows downward).
    pub angle: f32,
    /// Fixed offset from the viewpoint heading, in degrees.
    pub offset: f32,
}

impl Ray {
    pub fn new(origin: Vec2, angle: f32, offset: f32) -> Self {
        Self {
            origin,
            angle,
            offset,
        }
    }

    /// Unit direction of the ray.
    ///
    /// Multiples of 90° are exact, so rays along the axes stay parallel to
    /// axis-aligned walls.
    #[inline]
    pub fn dir(&self) -> Vec2 {
        let a = self.angle.rem_euclid(360.0);
        if a % 90.0 == 0.0 {
            return AXES[(a / 90.0) as usize % 4];
        }
        let (s, c) = a.to_radians().sin_cos();
        vec2(c, s)
    }

    /// Endpoint of the ray when extended to `len` units.
    #[inline]
    pub fn point_at(&self, len: f32) -> Vec2 {
        self.origin + self.dir() * len
    }
}

/// `floor(fov / 2 * resolution)`, in `f64` so huge inputs do not wrap.
pub(crate) fn half_count(fov: f32, resolution: f32) -> f64 {
    (fov as f64 * 0.5 * resolution as f64 + 1e-4).floor()
}

/// Ordered set of rays spanning the field of view, left edge first.
///
/// Column `i` of the projected view is ray `i`.
#[derive(Clone, Debug)]
pub struct RayFan {
    rays: Vec<Ray>,
    look: Ray,
    heading: f32,
}

impl RayFan {
    /// Build a fan of rays at `heading + k / resolution` for
    /// `k in -n..=n`, `n = floor(fov / 2 * resolution)`.
    ///
    /// The boundary is inclusive, so `fov = 90, resolution = 1` yields 91
    /// rays from -45° to +45°.  A non-positive `fov` or a resolution that is
    /// not a positive finite number degenerates to one centered ray.  The
    /// fan never holds more than [`MAX_RAYS`] rays.
    pub fn build(origin: Vec2, heading: f32, fov: f32, resolution: f32) -> Self {
        let offsets: Vec<f32> = if fov > 0.0 && resolution.is_finite() && resolution > 0.0 {
            let n = half_count(fov, resolution).min((MAX_RAYS / 2) as f64) as i64;
            (-n..=n).map(|k| k as f32 / resolution).collect()
        } else {
            vec![0.0]
        };

        let rays = offsets
            .into_iter()
            .map(|off| Ray::new(origin, heading + off, off))
            .collect();

        Self {
            rays,
            look: Ray::new(origin, heading, 0.0),
            heading,
        }
    }

    /// Move every ray to `origin` and re-aim it at `heading + offset`.
    ///
    /// The whole fan is updated under one `&mut` borrow, so a renderer can
    /// never observe a half-synced fan.
    pub fn retarget(&mut self, origin: Vec2, heading: f32) {
        for ray in self.rays.iter_mut().chain(std::iter::once(&mut self.look)) {
            ray.origin = origin;
            ray.angle = heading + ray.offset;
        }
        self.heading = heading;
    }

    #[inline]
    pub fn rays(&self) -> &[Ray] {
        &self.rays
    }

    /// Heading indicator; never used for projection.
    #[inline]
    pub fn look(&self) -> &Ray {
        &self.look
    }

    #[inline]
    pub fn heading(&self) -> f32 {
        self.heading
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rays.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rays.is_empty()
    }
}

/*──────────────────────────────── Tests ───────────────────────────────*/
