//! Main game state: simulation state, held keys and move commands.

use crate::config::Config;
use crate::input::{Controls, InputEvent};
use crate::render::View;
use crate::simulation::{self, MoveCommands, SimulationState, StepOutcome};

/// Main game state and logic
#[derive(Debug, Clone)]
pub struct Game {
    pub config: Config,
    pub frame: u64,
    pub state: SimulationState,
    pub commands: MoveCommands,
    pub controls: Controls,
}

impl Game {
    /// Create a new game with the given configuration
    pub fn new(config: Config) -> Self {
        Game {
            state: SimulationState::new(&config),
            config,
            frame: 0,
            commands: MoveCommands::default(),
            controls: Controls::new(),
        }
    }

    /// Feed one input event into the move commands.
    ///
    /// Returns true for `Quit`.
    pub fn apply_event(&mut self, event: InputEvent) -> bool {
        let velocity = self.config.paddle_velocity;
        match event {
            InputEvent::KeyDown(control) => {
                if !self.controls.press(control, &mut self.commands, velocity) {
                    log::trace!("ignoring repeated key down for {:?}", control);
                }
                false
            }
            InputEvent::KeyUp(control) => {
                if !self.controls.release(control, &mut self.commands, velocity) {
                    log::trace!("ignoring key up for {:?} that was not held", control);
                }
                false
            }
            InputEvent::Quit => true,
        }
    }

    /// Release every held key, e.g. when the front end loses key-up reporting
    pub fn release_all(&mut self) {
        self.controls
            .release_all(&mut self.commands, self.config.paddle_velocity);
    }

    /// Step the game simulation forward by one frame
    pub fn step(&mut self) -> StepOutcome {
        let outcome = simulation::step(&mut self.state, &self.commands, &self.config);
        self.frame += 1;
        outcome
    }

    /// Generate a view of the current game state for rendering
    pub fn view(&self) -> View {
        View {
            frame: self.frame,
            left_paddle: *self.state.left_paddle.rect(),
            right_paddle: *self.state.right_paddle.rect(),
            ball: *self.state.ball.rect(),
            draw_color: self.config.draw_color,
            background_color: self.config.background_color,
            screen_width: self.config.screen_width,
            screen_height: self.config.screen_height,
        }
    }
}
