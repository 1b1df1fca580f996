use ratatui::layout::{Constraint, Direction, Flex, Layout, Rect};

pub struct ScreenLayout {
    pub title_area: Rect,
    pub body_area: Rect,
    pub help_area: Rect,
}

pub struct QuestionLayout {
    pub title_area: Rect,
    pub header_area: Rect,
    pub question_area: Rect,
    pub options_area: Rect,
    pub help_area: Rect,
}

pub const PANEL_WIDTH: u16 = 72;

/// Centre a fixed-width column in the window, like the fixed-size window
/// the quiz was designed for.
fn panel(area: Rect) -> Rect {
    let [column] = Layout::horizontal([Constraint::Max(PANEL_WIDTH)])
        .flex(Flex::Center)
        .areas(area);
    column
}

pub fn calculate_screen_chunks(area: Rect) -> ScreenLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(panel(area));

    ScreenLayout {
        title_area: chunks[0],
        body_area: chunks[1],
        help_area: chunks[2],
    }
}

pub fn calculate_question_chunks(area: Rect) -> QuestionLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(4),
            Constraint::Length(6),
            Constraint::Length(3),
        ])
        .split(panel(area));

    QuestionLayout {
        title_area: chunks[0],
        header_area: chunks[1],
        question_area: chunks[2],
        options_area: chunks[3],
        help_area: chunks[4],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_layout() {
        let layout = calculate_screen_chunks(Rect::new(0, 0, 100, 30));

        assert_eq!(layout.title_area.height, 3);
        assert_eq!(layout.help_area.height, 3);
        // 30 - 2 margin - 6 fixed
        assert_eq!(layout.body_area.height, 22);
        assert!(layout.body_area.width <= PANEL_WIDTH);
        assert!(layout.body_area.x > 0);
    }

    #[test]
    fn test_question_layout() {
        let layout = calculate_question_chunks(Rect::new(0, 0, 80, 24));

        assert_eq!(layout.title_area.height, 3);
        assert_eq!(layout.header_area.height, 3);
        assert!(layout.title_area.y < layout.header_area.y);
        // four options plus borders
        assert_eq!(layout.options_area.height, 6);
        assert_eq!(layout.help_area.height, 3);
        // 24 - 2 margin - 15 fixed
        assert_eq!(layout.question_area.height, 7);
    }

    #[test]
    fn test_narrow_window_uses_full_width() {
        let layout = calculate_screen_chunks(Rect::new(0, 0, 40, 20));
        assert_eq!(layout.body_area.width, 38);
    }
}
