//! Frame loop: drain input, step the simulation, render, wait for the next frame.

use crate::game::Game;
use crate::input::InputEvent;
use crate::render::View;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// Source of input events
pub trait InputSource {
    type Error;

    /// Every event that arrived since the previous call. Must not block.
    fn poll(&mut self) -> Result<Vec<InputEvent>, Self::Error>;
}

/// Draws one frame: clear, draw the view's rectangles, present
pub trait Renderer {
    type Error;

    fn render(&mut self, view: &View) -> Result<(), Self::Error>;
}

/// Blocks until the next frame is due
pub trait FramePacer {
    fn wait(&mut self);
}

/// Sleeps away whatever is left of a fixed frame period
#[derive(Debug)]
pub struct FrameLimiter {
    frame_time: Duration,
    last_frame: Instant,
}

impl FrameLimiter {
    pub fn new(frame_time: Duration) -> Self {
        FrameLimiter {
            frame_time,
            last_frame: Instant::now(),
        }
    }
}

impl FramePacer for FrameLimiter {
    fn wait(&mut self) {
        let remaining = self.frame_time.saturating_sub(self.last_frame.elapsed());
        if !remaining.is_zero() {
            std::thread::sleep(remaining);
        }
        self.last_frame = Instant::now();
    }
}

/// Why the loop stopped
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LoopExit {
    /// The input source delivered `Quit`
    Quit,
    /// The shutdown flag was raised
    Signal,
}

/// Errors surfaced by the loop's collaborators
#[derive(Debug)]
pub enum LoopError<I, R> {
    Input(I),
    Render(R),
}

impl<I: fmt::Display, R: fmt::Display> fmt::Display for LoopError<I, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoopError::Input(e) => write!(f, "Input error: {}", e),
            LoopError::Render(e) => write!(f, "Render error: {}", e),
        }
    }
}

impl<I, R> std::error::Error for LoopError<I, R>
where
    I: fmt::Debug + fmt::Display,
    R: fmt::Debug + fmt::Display,
{
}

/// Run frames until the input source quits or `shutdown` is raised.
pub fn run<I, R, P>(
    game: &mut Game,
    input: &mut I,
    renderer: &mut R,
    pacer: &mut P,
    shutdown: &AtomicBool,
) -> Result<LoopExit, LoopError<I::Error, R::Error>>
where
    I: InputSource,
    R: Renderer,
    P: FramePacer,
{
    log::info!("game loop starting at frame {}", game.frame);

    let exit = loop {
        if shutdown.load(Ordering::Relaxed) {
            break LoopExit::Signal;
        }

        let mut quit = false;
        for event in input.poll().map_err(LoopError::Input)? {
            quit |= game.apply_event(event);
        }
        if quit {
            break LoopExit::Quit;
        }

        game.step();
        renderer.render(&game.view()).map_err(LoopError::Render)?;
        log::trace!("frame {} ball {:?}", game.frame, game.state.ball.rect());

        pacer.wait();
    };

    log::info!("game loop stopped after frame {}: {:?}", game.frame, exit);
    Ok(exit)
}
