//! Per-frame input snapshot, decoupled from the windowing backend.
//!
//! The frame driver fills an [`InputState`] from whatever it polls; the rest
//! of the crate only ever sees [`Keys`] and the optional pointer position.

use bitflags::bitflags;
use glam::Vec2;

bitflags! {
    /// Keys that went down this frame (edge-triggered).
    #[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Keys: u16 {
        const QUIT          = 0x0001;
        const FULLSCREEN    = 0x0002;
        const STRAFE_LEFT   = 0x0004;
        const STRAFE_RIGHT  = 0x0008;
        const FORWARD       = 0x0010;
        const BACKWARD      = 0x0020;
        const TURN_LEFT     = 0x0040;
        const TURN_RIGHT    = 0x0080;
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct InputState {
    pub keys: Keys,
    /// Pointer in map coordinates; only `Some` when it is over the map.
    pub pointer: Option<Vec2>,
}

/// One viewpoint (or driver) action with its magnitude already applied.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    Quit,
    ToggleFullscreen,
    MoveLateral(f32),
    MoveForward(f32),
    Turn(f32),
    Follow(Vec2),
}

/// Fixed magnitudes bound to the movement keys.
#[derive(Clone, Copy, Debug)]
pub struct Steps {
    pub move_step: f32,
    pub turn_step: f32,
}

impl InputState {
    /// Expand the snapshot into commands, one per pressed key.
    ///
    /// `follow` adds a trailing [`Command::Follow`] when the pointer is known.
    pub fn commands(&self, steps: Steps, follow: bool) -> Vec<Command> {
        let bindings: [(Keys, fn(Steps) -> Command); 8] = [
            (Keys::QUIT, |_| Command::Quit),
            (Keys::FULLSCREEN, |_| Command::ToggleFullscreen),
            (Keys::STRAFE_LEFT, |s| Command::MoveLateral(-s.move_step)),
            (Keys::STRAFE_RIGHT, |s| Command::MoveLateral(s.move_step)),
            (Keys::FORWARD, |s| Command::MoveForward(s.move_step)),
            (Keys::BACKWARD, |s| Command::MoveForward(-s.move_step)),
            (Keys::TURN_LEFT, |s| Command::Turn(-s.turn_step)),
            (Keys::TURN_RIGHT, |s| Command::Turn(s.turn_step)),
        ];

        let mut out: Vec<Command> = bindings
            .iter()
            .filter(|(k, _)| self.keys.contains(*k))
            .map(|(_, f)| f(steps))
            .collect();

        if follow {
            if let Some(p) = self.pointer {
                out.push(Command::Follow(p));
            }
        }
        out
    }
}

/*──────────────────────────────── Tests ───────────────────────────────*/
