use crate::models::Difficulty;
use crate::ui::layout::calculate_screen_chunks;
use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::Paragraph,
    Frame,
};

use super::{draw_help, draw_title, entry_style, panel_block};

pub fn draw_menu(f: &mut Frame, selected: usize) {
    let layout = calculate_screen_chunks(f.area());
    draw_title(f, layout.title_area);

    let mut text = Text::default();
    text.push_line(Line::from(""));
    text.push_line(Line::from(Span::styled(
        "Select Difficulty:",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    text.push_line(Line::from(""));

    let entries = Difficulty::ALL
        .iter()
        .map(|d| d.label())
        .chain(std::iter::once("Exit"));
    for (i, label) in entries.enumerate() {
        if i == Difficulty::ALL.len() {
            text.push_line(Line::from(""));
        }
        text.push_line(Line::from(Span::styled(
            format!("{:^20}", label),
            entry_style(i == selected),
        )));
    }

    let body = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(panel_block());
    f.render_widget(body, layout.body_area);

    draw_help(
        f,
        layout.help_area,
        &[("↑/↓", "Navigate"), ("Enter", "Select"), ("e/m/h", "Difficulty"), ("q", "Exit")],
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::buffer_text;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_menu_lists_difficulties_and_exit() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| draw_menu(f, 1)).unwrap();
        let screen = buffer_text(terminal.backend().buffer());

        assert!(screen.contains("Select Difficulty:"));
        for label in ["Easy", "Medium", "Hard", "Exit"] {
            assert!(screen.contains(label), "missing {}", label);
        }
    }
}
