//! Real-time 2-D raycasting visualizer.
//!
//! A viewpoint casts a fan of rays across a map of line-segment walls; the
//! nearest hit per ray feeds a top-down view and a pseudo-3-D strip view.
//!
//! ```bash
//! cargo run --release -- --walls 8 --fov 90 --resolution 2
//! ```

pub mod app;
pub mod caster;
pub mod config;
pub mod geometry;
pub mod input;
pub mod renderer;
pub mod world;

pub use app::{App, DriverRequests};
pub use config::{Config, ConfigError};
