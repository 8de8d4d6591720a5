//! TUI rendering for Sift using ratatui.

mod app;
mod dispatch;
mod input;
mod theme;

pub use app::App;
pub use dispatch::{DerivedEvent, EventStreams};
pub use input::{InputPump, handle_events};
pub use theme::{Glyphs, Palette, glyphs};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use sift_types::LayoutMode;

/// Main draw function.
pub fn draw(frame: &mut Frame, app: &App) {
    let palette = Palette::standard();
    let glyphs = glyphs(app.ascii_only());

    // Clear with background color
    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // Body
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    draw_body(frame, app, chunks[0], &palette);
    draw_pointer_region(frame, app, &palette, &glyphs);
    draw_status_bar(frame, app, chunks[1], &palette, &glyphs);
}

fn draw_body(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let text = match app.layout() {
        Some(LayoutMode::Compact) => "It's Compact.",
        Some(LayoutMode::Wide) => "It's Wide.",
        None => "Measuring the terminal...",
    };

    // Push the message to roughly mid-screen.
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    let body = Paragraph::new(text)
        .style(palette.body(app.emphasis()))
        .alignment(Alignment::Center);
    frame.render_widget(body, rows[1]);
}

fn draw_pointer_region(frame: &mut Frame, app: &App, palette: &Palette, glyphs: &Glyphs) {
    let region = app.pointer_region();
    let rect = Rect::new(region.x, region.y, region.width, region.height)
        .intersection(frame.area());
    if rect.width == 0 || rect.height == 0 {
        return;
    }

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);
    if app.pointer_inside() {
        block = block
            .border_style(Style::default().fg(palette.accent))
            .title(format!(" {} pointer ", glyphs.pointer))
            .style(Style::default().bg(palette.bg_highlight));
    } else {
        block = block.border_style(Style::default().fg(palette.text_muted));
    }
    frame.render_widget(block, rect);
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let key_style = Style::default().fg(palette.accent);
    let muted = Style::default().fg(palette.text_muted);

    let mode = app.layout().map_or("-", LayoutMode::label);

    let line = Line::from(vec![
        Span::styled("s", key_style),
        Span::styled("/", muted),
        Span::styled("Enter", key_style),
        Span::styled("/", muted),
        Span::styled(glyphs.up_arrow, key_style),
        Span::styled(" toggle", muted),
        Span::styled(glyphs.separator, muted),
        Span::styled("q", key_style),
        Span::styled(" quit", muted),
        Span::styled(glyphs.separator, muted),
        Span::styled(
            format!(
                "width {} / breakpoint {} / {mode}",
                app.width(),
                app.breakpoint().columns()
            ),
            muted,
        ),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use super::{App, DerivedEvent, draw};
    use ratatui::{Terminal, backend::TestBackend};
    use sift_types::{Breakpoint, LayoutMode, Region, RegionEvent};

    fn render(app: &App) {
        let backend = TestBackend::new(100, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
    }

    #[test]
    fn draw_smoke_before_first_observation() {
        let app = App::new(
            Breakpoint::new(80).unwrap(),
            Region::new(0, 0, 20, 5),
            false,
        );
        render(&app);
    }

    #[test]
    fn draw_smoke_across_states() {
        let mut app = App::new(
            Breakpoint::new(80).unwrap(),
            Region::new(0, 0, 20, 5),
            true,
        );
        for event in [
            DerivedEvent::LayoutChanged {
                mode: LayoutMode::Compact,
                width: 60,
            },
            DerivedEvent::ToggleEmphasis,
            DerivedEvent::PointerRegion {
                event: RegionEvent::Entered,
                column: 1,
                row: 1,
            },
        ] {
            app.apply(event);
            render(&app);
        }
    }

    #[test]
    fn draw_smoke_in_tiny_terminal() {
        let app = App::new(
            Breakpoint::new(80).unwrap(),
            Region::new(0, 0, 20, 5),
            false,
        );
        let backend = TestBackend::new(3, 2);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| draw(frame, &app)).unwrap();
    }
}
