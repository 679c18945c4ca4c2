//! One frame of simulation over explicit state.

use crate::config::Config;
use crate::physics::{Physics, Wall};
use crate::types::*;
use glam::Vec2;

/// Everything that moves
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SimulationState {
    pub left_paddle: PaddleState,
    pub right_paddle: PaddleState,
    pub ball: BallState,
    /// Ball travel direction (unit length)
    pub direction: Vec2,
}

impl SimulationState {
    /// Paddles centered vertically at their insets, ball in the middle of the screen
    pub fn new(config: &Config) -> Self {
        let center_y = config.screen_height / 2;
        SimulationState {
            left_paddle: PaddleState::new(
                config.paddle_inset,
                center_y,
                config.paddle_width,
                config.paddle_height,
            ),
            right_paddle: PaddleState::new(
                config.screen_width - config.paddle_inset,
                center_y,
                config.paddle_width,
                config.paddle_height,
            ),
            ball: BallState::new(
                config.screen_width / 2,
                center_y,
                config.ball_width,
                config.ball_width,
            ),
            direction: config.serve_direction,
        }
    }
}

/// Move commands for both paddles
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct MoveCommands {
    pub left: PaddleMoveCommand,
    pub right: PaddleMoveCommand,
}

impl MoveCommands {
    pub fn get(&self, side: Side) -> &PaddleMoveCommand {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn get_mut(&mut self, side: Side) -> &mut PaddleMoveCommand {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

/// Bounces that happened during a step
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct StepOutcome {
    pub wall: Option<Wall>,
    pub paddle: Option<Side>,
}

/// Advance the simulation by one frame.
///
/// Order is fixed: paddles move, the ball moves, then wall and paddle
/// bounces are resolved against the new positions. Both kinds of bounce may
/// apply in the same frame.
pub fn step(state: &mut SimulationState, commands: &MoveCommands, config: &Config) -> StepOutcome {
    Physics::update_paddle(&mut state.left_paddle, &commands.left);
    Physics::update_paddle(&mut state.right_paddle, &commands.right);

    Physics::update_ball(&mut state.ball, state.direction, config);

    let wall = Physics::resolve_wall_collision(&state.ball, &mut state.direction, config);
    let paddle = Physics::resolve_paddle_collision(
        &state.ball,
        &state.left_paddle,
        &state.right_paddle,
        &mut state.direction,
        config,
    );

    if let Some(wall) = wall {
        log::debug!("ball bounced off {:?} wall at {:?}", wall, state.ball.rect());
    }
    if let Some(side) = paddle {
        log::debug!(
            "ball bounced off {:?} paddle, new direction ({:.3}, {:.3})",
            side,
            state.direction.x,
            state.direction.y
        );
    }

    StepOutcome { wall, paddle }
}
