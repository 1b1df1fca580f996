use crate::input::OPTION_LABELS;
use crate::ui::layout::{calculate_question_chunks, calculate_screen_chunks};
use crate::ui::surface::QuestionScreen;
use crate::utils::truncate_string;
use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::{CORRECT_FG, WRONG_FG, draw_help, draw_title, entry_style, panel_block};

pub fn draw_question(f: &mut Frame, screen: &QuestionScreen, selected: usize) {
    let layout = calculate_question_chunks(f.area());
    draw_title(f, layout.title_area);

    let header = Line::from(vec![
        Span::styled(
            format!("Question {} / {}", screen.number, screen.total),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::from("   "),
        Span::from(format!("Score: {}", screen.score)),
    ]);
    f.render_widget(
        Paragraph::new(header)
            .alignment(Alignment::Center)
            .block(panel_block()),
        layout.header_area,
    );

    let prompt = Paragraph::new(Text::from(format!("Q{}: {}", screen.number, screen.prompt)))
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(panel_block().title("Question"));
    f.render_widget(prompt, layout.question_area);

    // One row per option; anything past the panel border is elided.
    let line_width = layout.options_area.width.saturating_sub(2) as usize;
    let options: Vec<Line> = screen
        .options
        .iter()
        .zip(OPTION_LABELS)
        .enumerate()
        .map(|(i, (option, label))| {
            Line::from(Span::styled(
                truncate_string(&format!(" {}) {}", label, option), line_width),
                entry_style(i == selected),
            ))
        })
        .collect();
    let options = Paragraph::new(options).block(panel_block().title("Answers"));
    f.render_widget(options, layout.options_area);

    draw_help(
        f,
        layout.help_area,
        &[("a-d/1-4", "Answer"), ("↑/↓", "Navigate"), ("Enter", "Choose"), ("Ctrl+C", "Exit")],
    );
}

pub fn draw_feedback(f: &mut Frame, correct: bool, correct_answer: &str) {
    let layout = calculate_screen_chunks(f.area());
    draw_title(f, layout.title_area);

    let (banner, color) = if correct {
        ("CORRECT!", CORRECT_FG)
    } else {
        ("WRONG!", WRONG_FG)
    };

    let mut text = Text::default();
    text.push_line(Line::from(""));
    text.push_line(Line::from(Span::styled(
        banner,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )));
    if !correct {
        text.push_line(Line::from(""));
        text.push_line(Line::from(Span::styled(
            format!("Correct Answer: {}", correct_answer),
            Style::default().add_modifier(Modifier::BOLD),
        )));
    }
    text.push_line(Line::from(""));
    text.push_line(Line::from(Span::styled(format!("{:^15}", "OK"), entry_style(true))));

    let body = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(panel_block());
    f.render_widget(body, layout.body_area);

    draw_help(f, layout.help_area, &[("Enter", "Continue"), ("Ctrl+C", "Exit")]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::buffer_text;
    use ratatui::{backend::TestBackend, Terminal};

    fn render<F: FnOnce(&mut Frame)>(draw: F) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(draw).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_question_shows_prompt_options_and_score() {
        let screen = QuestionScreen {
            number: 2,
            total: 10,
            score: 1,
            prompt: "Who crossed the Rubicon?".to_string(),
            options: [
                "Caesar".to_string(),
                "Pompey".to_string(),
                "Crassus".to_string(),
                "Cicero".to_string(),
            ],
        };
        let text = render(|f| draw_question(f, &screen, 0));

        assert!(text.contains("Q2: Who crossed the Rubicon?"));
        assert!(text.contains("Question 2 / 10"));
        assert!(text.contains("Score: 1"));
        assert!(text.contains("A) Caesar"));
        assert!(text.contains("D) Cicero"));
        assert!(text.contains("History Trivia Quiz"));
    }

    #[test]
    fn test_long_option_is_elided_on_one_row() {
        let long = "The Treaty of Westphalia between the Holy Roman Empire and the Crown of Sweden";
        let screen = QuestionScreen {
            number: 1,
            total: 10,
            score: 0,
            prompt: "Which treaty ended the Thirty Years' War?".to_string(),
            options: [
                long.to_string(),
                "Utrecht".to_string(),
                "Versailles".to_string(),
                "Ghent".to_string(),
            ],
        };
        let text = render(|f| draw_question(f, &screen, 0));

        assert!(text.contains("A) The Treaty of Westphalia"));
        assert!(text.contains("..."));
        assert!(!text.contains("Crown of Sweden"));
        // the next option keeps its own row
        assert!(text.contains("B) Utrecht"));
        assert!(text.contains("History Trivia Quiz"));
    }

    #[test]
    fn test_feedback_hides_answer_when_correct() {
        let text = render(|f| draw_feedback(f, true, "Caesar"));
        assert!(text.contains("CORRECT!"));
        assert!(!text.contains("Correct Answer"));
    }

    #[test]
    fn test_feedback_reveals_answer_when_wrong() {
        let text = render(|f| draw_feedback(f, false, "Napoleon & Josephine"));
        assert!(text.contains("WRONG!"));
        assert!(text.contains("Correct Answer: Napoleon & Josephine"));
    }
}
