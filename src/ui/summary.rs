use crate::ui::layout::calculate_screen_chunks;
use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::Paragraph,
    Frame,
};

use super::{draw_help, draw_title, entry_style, panel_block};

pub fn draw_final(f: &mut Frame, score: usize, total: usize, selected: usize) {
    let layout = calculate_screen_chunks(f.area());
    draw_title(f, layout.title_area);

    let mut text = Text::default();
    text.push_line(Line::from(""));
    text.push_line(Line::from(Span::styled(
        "Your Score:",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    text.push_line(Line::from(Span::styled(
        format!("{} / {}", score, total),
        Style::default().add_modifier(Modifier::BOLD),
    )));
    text.push_line(Line::from(""));
    for (i, label) in ["Play Again", "Exit"].iter().enumerate() {
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
        &[("↑/↓", "Navigate"), ("Enter", "Select"), ("p", "Play Again"), ("q", "Exit")],
    );
}
