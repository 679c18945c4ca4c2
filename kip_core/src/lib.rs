//! Kip core game engine - two-paddle ball game with a rounded-edge paddle bounce

pub mod config;
pub mod game;
pub mod game_loop;
pub mod input;
pub mod physics;
pub mod render;
pub mod simulation;
pub mod types;

pub use config::{Config, ConfigError};
pub use game::Game;
pub use game_loop::{FrameLimiter, FramePacer, InputSource, LoopError, LoopExit, Renderer};
pub use input::{Control, Controls, InputEvent};
pub use physics::{reflect, Physics, Wall};
pub use render::{CellRect, RenderHelper, View};
pub use simulation::{MoveCommands, SimulationState, StepOutcome};
pub use types::*;

pub use glam::Vec2;
