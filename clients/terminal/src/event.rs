use crossterm::{
    event::{
        self, DisableFocusChange, EnableFocusChange, Event as CrosstermEvent, KeyCode, KeyEvent,
        KeyEventKind, KeyModifiers, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::supports_keyboard_enhancement,
};
use kip_core::{Control, InputEvent, InputSource};
use std::{io::stdout, time::Duration};

/// Frames a key stays down after its last press when the terminal cannot
/// report releases
pub const TAP_RELEASE_FRAMES: u32 = 10;

/// How key releases are detected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyboardMode {
    /// Terminal reports press, repeat and release
    Enhanced,
    /// Presses only; releases are synthesized after `TAP_RELEASE_FRAMES`
    Tap,
}

impl KeyboardMode {
    pub fn detect() -> Self {
        match supports_keyboard_enhancement() {
            Ok(true) => KeyboardMode::Enhanced,
            Ok(false) | Err(_) => KeyboardMode::Tap,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            KeyboardMode::Enhanced => "Enhanced (hold keys)",
            KeyboardMode::Tap => "Tap (no key release reporting)",
        }
    }
}

fn map_keycode_to_control(code: KeyCode) -> Option<Control> {
    match code {
        KeyCode::Char('w') | KeyCode::Char('W') => Some(Control::LeftUp),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(Control::LeftDown),
        KeyCode::Up => Some(Control::RightUp),
        KeyCode::Down => Some(Control::RightDown),
        _ => None,
    }
}

fn is_quit_key(event: &KeyEvent) -> bool {
    match event.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        KeyCode::Char('c') | KeyCode::Char('C') => event.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Key translation independent of the terminal, so it can be driven from tests
#[derive(Debug)]
pub struct KeyTranslator {
    mode: KeyboardMode,
    /// Frames left before a synthesized release, per control (tap mode)
    tap_timers: [u32; 4],
}

impl KeyTranslator {
    pub fn new(mode: KeyboardMode) -> Self {
        Self {
            mode,
            tap_timers: [0; 4],
        }
    }

    pub fn mode(&self) -> KeyboardMode {
        self.mode
    }

    /// Translate one terminal event
    pub fn handle_event(&mut self, event: CrosstermEvent, out: &mut Vec<InputEvent>) {
        match event {
            CrosstermEvent::Key(key) => self.handle_key(key, out),
            CrosstermEvent::FocusLost => {
                // Releases are not delivered while unfocused
                log::debug!("focus lost, releasing all paddle keys");
                for control in Control::ALL {
                    out.push(InputEvent::KeyUp(control));
                }
                self.tap_timers = [0; 4];
            }
            _ => {}
        }
    }

    fn handle_key(&mut self, key: KeyEvent, out: &mut Vec<InputEvent>) {
        if key.kind == KeyEventKind::Press && is_quit_key(&key) {
            out.push(InputEvent::Quit);
            return;
        }

        let Some(control) = map_keycode_to_control(key.code) else {
            return;
        };

        match (self.mode, key.kind) {
            (KeyboardMode::Enhanced, KeyEventKind::Press) => out.push(InputEvent::KeyDown(control)),
            (KeyboardMode::Enhanced, KeyEventKind::Release) => {
                out.push(InputEvent::KeyUp(control))
            }
            (KeyboardMode::Enhanced, KeyEventKind::Repeat) => {}
            (KeyboardMode::Tap, KeyEventKind::Press | KeyEventKind::Repeat) => {
                self.tap_timers[control.index()] = TAP_RELEASE_FRAMES;
                out.push(InputEvent::KeyDown(control));
            }
            (KeyboardMode::Tap, KeyEventKind::Release) => {
                self.tap_timers[control.index()] = 0;
                out.push(InputEvent::KeyUp(control));
            }
        }
    }

    /// End of the input drain for one frame: count down tap timers and
    /// release keys whose timer ran out
    pub fn end_frame(&mut self, out: &mut Vec<InputEvent>) {
        if self.mode != KeyboardMode::Tap {
            return;
        }
        for control in Control::ALL {
            let timer = &mut self.tap_timers[control.index()];
            if *timer > 0 {
                *timer -= 1;
                if *timer == 0 {
                    out.push(InputEvent::KeyUp(control));
                }
            }
        }
    }
}

/// Non-blocking crossterm input source
pub struct TerminalInput {
    translator: KeyTranslator,
}

impl TerminalInput {
    /// Enables keyboard enhancement (when supported) and focus reporting
    pub fn new() -> std::io::Result<Self> {
        let mode = KeyboardMode::detect();

        if mode == KeyboardMode::Enhanced {
            execute!(
                stdout(),
                PushKeyboardEnhancementFlags(
                    KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                        | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
                )
            )?;
        }
        execute!(stdout(), EnableFocusChange)?;

        log::info!("input mode: {}", mode.description());
        Ok(Self {
            translator: KeyTranslator::new(mode),
        })
    }

    pub fn mode(&self) -> KeyboardMode {
        self.translator.mode()
    }
}

impl InputSource for TerminalInput {
    type Error = std::io::Error;

    fn poll(&mut self) -> std::io::Result<Vec<InputEvent>> {
        let mut events = Vec::new();
        while event::poll(Duration::ZERO)? {
            let event = event::read()?;
            self.translator.handle_event(event, &mut events);
        }
        self.translator.end_frame(&mut events);
        Ok(events)
    }
}

impl Drop for TerminalInput {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableFocusChange);
        if self.translator.mode() == KeyboardMode::Enhanced {
            let _ = execute!(stdout(), PopKeyboardEnhancementFlags);
        }
    }
}
