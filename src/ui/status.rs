use crate::models::Difficulty;
use crate::ui::layout::calculate_screen_chunks;
use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::{WRONG_FG, draw_help, draw_title, panel_block};

pub fn draw_loading(f: &mut Frame, difficulty: Difficulty) {
    let layout = calculate_screen_chunks(f.area());
    draw_title(f, layout.title_area);

    let body = Paragraph::new(vec![
        Line::from(""),
        Line::from(format!("Fetching {} questions...", difficulty)),
    ])
    .alignment(Alignment::Center)
    .block(panel_block());
    f.render_widget(body, layout.body_area);

    draw_help(f, layout.help_area, &[("", "Please wait")]);
}

pub fn draw_error(f: &mut Frame, message: &str) {
    let layout = calculate_screen_chunks(f.area());
    draw_title(f, layout.title_area);

    let mut text = Text::default();
    text.push_line(Line::from(""));
    text.push_line(Line::from(Span::styled(
        "Failed to fetch trivia questions",
        Style::default().fg(WRONG_FG).add_modifier(Modifier::BOLD),
    )));
    text.push_line(Line::from(""));
    text.push_line(Line::from(message.to_string()));

    let body = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(panel_block().title("Error"));
    f.render_widget(body, layout.body_area);

    draw_help(f, layout.help_area, &[("Any key", "Exit")]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::buffer_text;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_loading_names_difficulty() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| draw_loading(f, Difficulty::Hard)).unwrap();
        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("Fetching hard questions..."));
    }

    #[test]
    fn test_error_shows_cause() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| draw_error(f, "rate limited")).unwrap();
        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("Failed to fetch trivia questions"));
        assert!(text.contains("rate limited"));
    }
}
