//! Explicit application state plus the per-frame `update` / `render` pair.
//!
//! The frame driver owns the window and calls, strictly in this order:
//!
//! ```text
//! input → App::update → App::render → present
//! ```
//!
//! All mutation happens in `update`; `render` only reads the map and the
//! already-synced ray fan, so no ray is ever cast mid-update.

use rand::{SeedableRng, rngs::StdRng};

use crate::{
    caster::Viewpoint,
    config::{Config, ConfigError},
    geometry::GeometryError,
    input::{Command, InputState},
    renderer::{
        BACKGROUND, Canvas, Layout, Surface, compose, draw_columns, draw_top_down, project_columns,
    },
    world::{Map, MapBounds},
};

/// Requests for the frame driver that the simulation does not handle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DriverRequests {
    pub quit: bool,
    pub toggle_fullscreen: bool,
}

pub struct App {
    config: Config,
    map: Map,
    view: Viewpoint,
    layout: Layout,
    view3d: Canvas,
    view2d: Canvas,
    frame: Canvas,
}

impl App {
    /// Validate `config`, generate the session map and place the viewpoint
    /// at its centre.
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let bounds = MapBounds::new(config.map_width as f32, config.map_height as f32);
        let map = Map::generate(bounds, config.walls, &mut rng);
        Ok(Self::with_map(config, map))
    }

    /// Build around an existing map; `config` is trusted as-is.
    pub fn with_map(config: Config, map: Map) -> Self {
        let layout = Layout::new(
            (config.width, config.height),
            (config.map_width, config.map_height),
        );
        let view = Viewpoint::new(
            map.bounds().center(),
            0.0,
            config.fov,
            config.resolution,
        );
        tracing::info!(
            rays = view.fan().len(),
            fov = config.fov,
            resolution = config.resolution,
            "viewpoint ready"
        );

        Self {
            view3d: Canvas::new(layout.view3d.0, layout.view3d.1),
            view2d: Canvas::new(layout.view2d.0, layout.view2d.1),
            frame: Canvas::new(layout.window.0, layout.window.1),
            config,
            map,
            view,
            layout,
        }
    }

    #[inline]
    pub fn map(&self) -> &Map {
        &self.map
    }

    #[inline]
    pub fn view(&self) -> &Viewpoint {
        &self.view
    }

    #[inline]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Apply one frame of input to the viewpoint.
    ///
    /// Every command resyncs the fan before the next one runs.
    pub fn update(&mut self, input: &InputState) -> DriverRequests {
        let mut req = DriverRequests::default();
        for cmd in input.commands(self.config.steps(), self.config.follow_mouse) {
            match cmd {
                Command::Quit => req.quit = true,
                Command::ToggleFullscreen => req.toggle_fullscreen = true,
                Command::MoveLateral(d) => self.view.move_lateral(d),
                Command::MoveForward(d) => self.view.move_forward(d),
                Command::Turn(d) => self.view.turn(d),
                Command::Follow(p) => self.view.set_position(p),
            }
        }
        if !input.keys.is_empty() {
            tracing::debug!(
                pos = ?self.view.pos(),
                heading = self.view.heading(),
                keys = ?input.keys,
                "viewpoint updated"
            );
        }
        req
    }

    /// Cast, project and compose one frame; returns the finished buffer.
    pub fn render(&mut self) -> Result<&Canvas, GeometryError> {
        let viewport = self.layout.viewport();
        let columns = project_columns(
            self.view.fan(),
            self.map.walls(),
            viewport,
            self.map.bounds().max_dim(),
            self.config.wall_scale,
        )?;

        self.view3d.fill(BACKGROUND);
        draw_columns(&mut self.view3d, &columns, viewport);

        draw_top_down(&mut self.view2d, &self.map, &self.view);

        compose(&mut self.frame, &self.view3d, &self.view2d, &self.layout);
        Ok(&self.frame)
    }
}

/*──────────────────────────────── Tests ───────────────────────────────*/
