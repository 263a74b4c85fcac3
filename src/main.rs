//! Frame driver: window, input polling and the per-frame loop.
//!
//! ```bash
//! cargo run --release -- [--seed N] [--walls N] [--fov DEG] [--resolution R]
//! ```
//!
//! Keys: W/S forward/back, A/D strafe, ←/→ turn, F11 fullscreen, Esc quit.

use std::time::{Duration, Instant};

use clap::Parser;
use glam::vec2;
use minifb::{Key, KeyRepeat, MouseMode, ScaleMode, Window, WindowOptions};
use tracing_subscriber::EnvFilter;

use raycast_viz::{
    App, Config,
    input::{InputState, Keys},
    renderer::window_to_frame,
};

const TITLE: &str = "raycast_viz";

/// Key bindings, polled once per frame (auto-repeat on).
const BINDINGS: [(Key, Keys); 8] = [
    (Key::Escape, Keys::QUIT),
    (Key::F11, Keys::FULLSCREEN),
    (Key::A, Keys::STRAFE_LEFT),
    (Key::D, Keys::STRAFE_RIGHT),
    (Key::W, Keys::FORWARD),
    (Key::S, Keys::BACKWARD),
    (Key::Left, Keys::TURN_LEFT),
    (Key::Right, Keys::TURN_RIGHT),
];

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cfg = Config::parse();
    let (w, h, fps) = (cfg.width, cfg.height, cfg.fps);
    let mut app = App::new(cfg)?;

    let mut fullscreen = false;
    let mut win = open_window(w, h, fps, fullscreen)?;

    // ────────────────── benchmarking state ──────────────────────────────
    let mut acc_time = Duration::ZERO;
    let mut acc_frames = 0usize;
    let mut last_print = Instant::now();

    while win.is_open() {
        let t0 = Instant::now();

        /* --------------- input ------------------------------------------ */
        let input = poll_input(&win, &app, (w, h), fullscreen);

        /* --------------- update ----------------------------------------- */
        let req = app.update(&input);
        if req.quit {
            tracing::info!("quit requested");
            break;
        }
        if req.toggle_fullscreen {
            fullscreen = !fullscreen;
            tracing::info!(fullscreen, "toggling fullscreen");
            win = open_window(w, h, fps, fullscreen)?;
        }

        /* --------------- render + present ------------------------------- */
        let frame = app.render()?;
        win.update_with_buffer(frame.pixels(), frame.width(), frame.height())?;

        acc_time += t0.elapsed();
        acc_frames += 1;
        if last_print.elapsed() >= Duration::from_secs(3) {
            let avg_ms = acc_time.as_secs_f64() * 1000.0 / acc_frames as f64;
            tracing::debug!(avg_ms, fps = 1000.0 / avg_ms, "frame timing");
            acc_time = Duration::ZERO;
            acc_frames = 0;
            last_print = Instant::now();
        }
    }
    Ok(())
}

/// Open the main window.
///
/// minifb has no runtime fullscreen switch, so "fullscreen" is a borderless,
/// topmost window that stretches the frame while keeping its aspect ratio.
fn open_window(w: usize, h: usize, fps: usize, fullscreen: bool) -> anyhow::Result<Window> {
    let opts = WindowOptions {
        resize: true,
        borderless: fullscreen,
        topmost: fullscreen,
        scale_mode: if fullscreen {
            ScaleMode::AspectRatioStretch
        } else {
            ScaleMode::Stretch
        },
        ..WindowOptions::default()
    };
    let mut win = Window::new(TITLE, w, h, opts)?;
    win.set_target_fps(fps);
    Ok(win)
}

/// Snapshot keys pressed this frame and the pointer in map coordinates.
fn poll_input(win: &Window, app: &App, frame: (usize, usize), fullscreen: bool) -> InputState {
    let keys = BINDINGS
        .iter()
        .filter(|(k, _)| win.is_key_pressed(*k, KeyRepeat::Yes))
        .fold(Keys::empty(), |acc, (_, flag)| acc | *flag);

    // window pixels → frame pixels; fullscreen letterboxes the frame
    let pointer = win
        .get_mouse_pos(MouseMode::Discard)
        .and_then(|(mx, my)| window_to_frame(vec2(mx, my), win.get_size(), frame, fullscreen))
        .and_then(|p| app.layout().to_map(p));

    InputState { keys, pointer }
}
