//! Session configuration, parsed from the command line via `clap` derive.

use clap::Parser;

use crate::{
    caster::{MAX_RAYS, half_count},
    input::Steps,
    renderer::projection::DEFAULT_WALL_SCALE,
};

/// Widest field of view; anything larger makes the fan overlap itself.
pub const MAX_FOV: f32 = 360.0;

/// Real-time 2-D raycasting visualizer with a pseudo-3-D projection.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Config {
    /// Logical window width in pixels
    #[arg(long, default_value_t = 1600)]
    pub width: usize,

    /// Logical window height in pixels
    #[arg(long, default_value_t = 900)]
    pub height: usize,

    /// Map width in map units (= pixels of the top-down view)
    #[arg(long, default_value_t = 600)]
    pub map_width: usize,

    /// Map height in map units
    #[arg(long, default_value_t = 600)]
    pub map_height: usize,

    /// Number of random interior walls
    #[arg(long, default_value_t = 5)]
    pub walls: usize,

    /// RNG seed for the map; random when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Field of view in degrees
    #[arg(long, default_value_t = 60.0)]
    pub fov: f32,

    /// Rays per degree (fractions allowed)
    #[arg(long, default_value_t = 1.0)]
    pub resolution: f32,

    /// Map units moved per key press
    #[arg(long, default_value_t = 10.0)]
    pub move_step: f32,

    /// Degrees turned per key press
    #[arg(long, default_value_t = 5.0)]
    pub turn_step: f32,

    /// Frame cap; 0 = uncapped
    #[arg(long, default_value_t = 0)]
    pub fps: usize,

    /// Scale applied to inverse distance in the 3-D view
    #[arg(long, default_value_t = DEFAULT_WALL_SCALE)]
    pub wall_scale: f32,

    /// Viewpoint follows the mouse pointer over the top-down view
    #[arg(long)]
    pub follow_mouse: bool,
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be positive (got {value})")]
    NotPositive { name: &'static str, value: f32 },

    #[error("map {map_w}x{map_h} does not fit beside the 3-D view in a {win_w}x{win_h} window")]
    MapTooLarge {
        map_w: usize,
        map_h: usize,
        win_w: usize,
        win_h: usize,
    },

    #[error("fov must be at most 360 degrees (got {0})")]
    FovTooWide(f32),

    #[error("fov {fov} at resolution {resolution} needs {rays} rays, at most {max} fit")]
    TooManyRays {
        fov: f32,
        resolution: f32,
        rays: f64,
        max: usize,
    },
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 1600,
            height: 900,
            map_width: 600,
            map_height: 600,
            walls: 5,
            seed: None,
            fov: 60.0,
            resolution: 1.0,
            move_step: 10.0,
            turn_step: 5.0,
            fps: 0,
            wall_scale: DEFAULT_WALL_SCALE,
            follow_mouse: false,
        }
    }
}

impl Config {
    /// Reject sizes the renderer cannot lay out.
    ///
    /// A zero FOV or resolution is allowed (it degenerates to one ray) and
    /// only logs a warning.  The fan may not be wider than [`MAX_FOV`] nor
    /// hold more rays than the 3-D view has pixel columns.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("width", self.width as f32),
            ("height", self.height as f32),
            ("map-width", self.map_width as f32),
            ("map-height", self.map_height as f32),
            ("wall-scale", self.wall_scale),
        ];
        for (name, value) in positive {
            if !(value > 0.0) {
                return Err(ConfigError::NotPositive { name, value });
            }
        }
        if self.map_width >= self.width || self.map_height > self.height {
            return Err(ConfigError::MapTooLarge {
                map_w: self.map_width,
                map_h: self.map_height,
                win_w: self.width,
                win_h: self.height,
            });
        }
        if self.fov > MAX_FOV {
            return Err(ConfigError::FovTooWide(self.fov));
        }
        if self.fov > 0.0 && self.resolution > 0.0 {
            let rays = 2.0 * half_count(self.fov, self.resolution) + 1.0;
            let max = (self.width - self.map_width).min(MAX_RAYS);
            if !(rays <= max as f64) {
                return Err(ConfigError::TooManyRays {
                    fov: self.fov,
                    resolution: self.resolution,
                    rays,
                    max,
                });
            }
        } else {
            tracing::warn!(
                fov = self.fov,
                resolution = self.resolution,
                "degenerate fan, casting a single ray"
            );
        }
        Ok(())
    }

    #[inline]
    pub fn steps(&self) -> Steps {
        Steps {
            move_step: self.move_step,
            turn_step: self.turn_step,
        }
    }
}

/*──────────────────────────────── Tests ───────────────────────────────*/
