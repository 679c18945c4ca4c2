use kip_core::{Config, RenderHelper, Renderer, Rgb, View};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, BorderType, Paragraph, Widget},
    DefaultTerminal,
};

/// Terminal characters are roughly twice as tall as they are wide
const CHAR_ASPECT_RATIO: f32 = 0.5;

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

/// The playfield, scaled to fit the area it is rendered into
pub struct FieldWidget<'a> {
    pub view: &'a View,
    pub config: &'a Config,
    pub status: &'a str,
}

impl FieldWidget<'_> {
    /// Largest area inside `inner` that keeps the screen's aspect ratio
    fn field_area(&self, inner: Rect) -> Rect {
        let width = inner.width;
        let ideal_height = (width as f32 * CHAR_ASPECT_RATIO * self.view.screen_height as f32
            / self.view.screen_width as f32) as u16;
        let height = ideal_height.clamp(1, inner.height);

        Rect {
            x: inner.x,
            y: inner.y + inner.height.saturating_sub(height) / 2,
            width,
            height,
        }
    }
}

impl Widget for FieldWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let background = to_color(self.view.background_color);
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .title(format!("Kip | {}", self.status))
            .title_alignment(Alignment::Center)
            .title_bottom(Line::from("W/S: left   ↑/↓: right   Q/Esc: quit").centered())
            .style(Style::default().bg(background));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let field = self.field_area(inner);
        let helper = RenderHelper::new(field.width as usize, field.height as usize, self.config);

        let lines: Vec<Line> = helper
            .rasterize(self.view)
            .into_iter()
            .map(|row| {
                Line::from(
                    row.into_iter()
                        .map(|filled| if filled { '█' } else { ' ' })
                        .collect::<String>(),
                )
            })
            .collect();

        Paragraph::new(lines)
            .style(
                Style::default()
                    .fg(to_color(self.view.draw_color))
                    .bg(background),
            )
            .render(field, buf);
    }
}

/// Ratatui-backed renderer. `Terminal::draw` clears, draws and presents
/// through its double buffer.
pub struct TerminalRenderer {
    terminal: DefaultTerminal,
    config: Config,
    status: String,
}

impl TerminalRenderer {
    pub fn new(terminal: DefaultTerminal, config: Config, status: String) -> Self {
        Self {
            terminal,
            config,
            status,
        }
    }
}

impl Renderer for TerminalRenderer {
    type Error = std::io::Error;

    fn render(&mut self, view: &View) -> std::io::Result<()> {
        let widget = FieldWidget {
            view,
            config: &self.config,
            status: &self.status,
        };
        self.terminal
            .draw(|frame| frame.render_widget(widget, frame.area()))?;
        Ok(())
    }
}
