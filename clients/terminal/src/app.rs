use crate::event::TerminalInput;
use crate::ui::TerminalRenderer;
use color_eyre::eyre::WrapErr;
use kip_core::{game_loop, Config, FrameLimiter, Game, LoopExit};
use ratatui::DefaultTerminal;
use std::sync::{atomic::AtomicBool, Arc};

/// Main application
pub struct App {
    /// Game instance
    pub game: Game,
    /// Key press/release adapter
    pub input: TerminalInput,
    /// Frame output
    pub renderer: TerminalRenderer,
    /// 60 FPS pacing
    pub limiter: FrameLimiter,
    /// Raised by the signal handler
    pub shutdown: Arc<AtomicBool>,
}

impl App {
    /// Constructs a new instance of App
    pub fn new(
        config: Config,
        terminal: DefaultTerminal,
        shutdown: Arc<AtomicBool>,
    ) -> color_eyre::Result<Self> {
        let input = TerminalInput::new().wrap_err("failed to configure keyboard input")?;
        let status = input.mode().description().to_string();

        Ok(Self {
            game: Game::new(config),
            input,
            renderer: TerminalRenderer::new(terminal, config, status),
            limiter: FrameLimiter::new(config.frame_duration()),
            shutdown,
        })
    }

    /// Run the application's main loop
    pub fn run(mut self) -> color_eyre::Result<LoopExit> {
        let exit = game_loop::run(
            &mut self.game,
            &mut self.input,
            &mut self.renderer,
            &mut self.limiter,
            &self.shutdown,
        )
        .wrap_err("game loop failed")?;

        Ok(exit)
    }
}
