//! Logical paddle controls and the mapping from key transitions to move commands.

use crate::simulation::MoveCommands;
use crate::types::Side;

/// One of the four paddle keys
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Control {
    LeftUp,
    LeftDown,
    RightUp,
    RightDown,
}

impl Control {
    pub const ALL: [Control; 4] = [
        Control::LeftUp,
        Control::LeftDown,
        Control::RightUp,
        Control::RightDown,
    ];

    pub fn side(self) -> Side {
        match self {
            Control::LeftUp | Control::LeftDown => Side::Left,
            Control::RightUp | Control::RightDown => Side::Right,
        }
    }

    /// Velocity contributed while held. Up is negative in screen coordinates.
    pub fn delta(self, paddle_velocity: i32) -> i32 {
        match self {
            Control::LeftUp | Control::RightUp => -paddle_velocity,
            Control::LeftDown | Control::RightDown => paddle_velocity,
        }
    }

    /// Position in `ALL`, for per-key lookup tables
    pub fn index(self) -> usize {
        match self {
            Control::LeftUp => 0,
            Control::LeftDown => 1,
            Control::RightUp => 2,
            Control::RightDown => 3,
        }
    }
}

/// Input delivered by the front end for one frame
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InputEvent {
    KeyDown(Control),
    KeyUp(Control),
    Quit,
}

/// Held-key tracker feeding the paddle move commands.
///
/// A key contributes its velocity once while held: repeated presses of a
/// held key and releases of a key that is not held are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Controls {
    held: [bool; 4],
}

impl Controls {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_held(&self, control: Control) -> bool {
        self.held[control.index()]
    }

    /// Key went down. Returns false if it was already held.
    pub fn press(
        &mut self,
        control: Control,
        commands: &mut MoveCommands,
        paddle_velocity: i32,
    ) -> bool {
        let held = &mut self.held[control.index()];
        if *held {
            return false;
        }
        *held = true;
        commands
            .get_mut(control.side())
            .change(control.delta(paddle_velocity));
        true
    }

    /// Key went up. Returns false if it was not held.
    pub fn release(
        &mut self,
        control: Control,
        commands: &mut MoveCommands,
        paddle_velocity: i32,
    ) -> bool {
        let held = &mut self.held[control.index()];
        if !*held {
            return false;
        }
        *held = false;
        commands
            .get_mut(control.side())
            .change(-control.delta(paddle_velocity));
        true
    }

    /// Release every held key
    pub fn release_all(&mut self, commands: &mut MoveCommands, paddle_velocity: i32) {
        for control in Control::ALL {
            self.release(control, commands, paddle_velocity);
        }
    }
}
