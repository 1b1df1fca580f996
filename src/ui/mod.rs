pub mod backdrop;
pub mod layout;
mod menu;
mod quiz;
mod status;
mod summary;
pub mod surface;

pub use backdrop::Backdrop;
pub use layout::{calculate_question_chunks, calculate_screen_chunks};
pub use menu::draw_menu;
pub use quiz::{draw_feedback, draw_question};
pub use status::{draw_error, draw_loading};
pub use summary::draw_final;
pub use surface::{QuestionScreen, Surface, TuiSurface, View};

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub const APP_TITLE: &str = "📜 History Trivia Quiz 🪶";

pub const PARCHMENT: Color = Color::Rgb(0xE6, 0xC7, 0x9A);
pub const GOLD: Color = Color::Rgb(0xD4, 0xAF, 0x37);
pub const INK: Color = Color::Rgb(0x2B, 0x1B, 0x0E);
pub const TITLE_FG: Color = Color::Rgb(0x75, 0x5C, 0x00);
pub const CORRECT_FG: Color = Color::Rgb(0x2E, 0x7D, 0x32);
pub const WRONG_FG: Color = Color::Rgb(0x8B, 0x00, 0x00);
pub const BACKDROP_FG: Color = Color::DarkGray;

/// Single render entry point, keyed by the current view.
pub fn draw(f: &mut Frame, view: &View, backdrop: Option<&Backdrop>) {
    if let Some(backdrop) = backdrop {
        backdrop.render(f, f.area());
    }

    match view {
        View::Menu { selected } => draw_menu(f, *selected),
        View::Loading { difficulty } => draw_loading(f, *difficulty),
        View::Question { screen, selected } => draw_question(f, screen, *selected),
        View::Feedback {
            correct,
            correct_answer,
        } => draw_feedback(f, *correct, correct_answer),
        View::Final {
            score,
            total,
            selected,
        } => draw_final(f, *score, *total, *selected),
        View::Error { message } => draw_error(f, message),
    }
}

fn panel_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GOLD))
        .style(Style::default().bg(PARCHMENT).fg(INK))
}

fn draw_title(f: &mut Frame, area: Rect) {
    let title = Paragraph::new(APP_TITLE)
        .style(
            Style::default()
                .fg(TITLE_FG)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(panel_block());
    f.render_widget(title, area);
}

fn draw_help(f: &mut Frame, area: Rect, keys: &[(&str, &str)]) {
    let mut spans = Vec::new();
    for (i, (key, label)) in keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::from("  "));
        }
        spans.push(Span::styled(
            key.to_string(),
            Style::default()
                .fg(TITLE_FG)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::from(format!(" {}", label)));
    }

    let help = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(panel_block());
    f.render_widget(help, area);
}

fn entry_style(highlighted: bool) -> Style {
    if highlighted {
        Style::default()
            .bg(GOLD)
            .fg(INK)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().bg(PARCHMENT).fg(INK)
    }
}

#[cfg(test)]
pub(crate) fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
    let width = buffer.area.width.max(1) as usize;
    let mut out = String::new();
    for row in buffer.content.chunks(width) {
        for cell in row {
            out.push_str(cell.symbol());
        }
        out.push('\n');
    }
    out
}
