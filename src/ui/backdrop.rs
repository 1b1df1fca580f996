use crate::logger;
use crate::utils::clip_to_width;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Text},
    widgets::Paragraph,
    Frame,
};
use std::path::Path;

use super::BACKDROP_FG;

/// Text art drawn behind every screen, cropped to the window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Backdrop {
    lines: Vec<String>,
}

impl Backdrop {
    pub fn from_text(text: &str) -> Option<Self> {
        let lines: Vec<String> = text.lines().map(|l| l.trim_end().to_string()).collect();
        if lines.iter().all(|l| l.is_empty()) {
            None
        } else {
            Some(Self { lines })
        }
    }

    /// `None` when the asset is absent or empty; the screens then draw
    /// without a backdrop.
    pub fn load(path: &Path) -> Option<Self> {
        match std::fs::read_to_string(path) {
            Ok(text) => Self::from_text(&text),
            Err(e) => {
                logger::log(&format!("Backdrop {} unavailable: {}", path.display(), e));
                None
            }
        }
    }

    pub fn fitted_lines(&self, area: Rect) -> Vec<String> {
        self.lines
            .iter()
            .take(area.height as usize)
            .map(|l| clip_to_width(l, area.width as usize))
            .collect()
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        let lines: Vec<Line> = self
            .fitted_lines(area)
            .into_iter()
            .map(Line::from)
            .collect();
        let paragraph = Paragraph::new(Text::from(lines)).style(Style::default().fg(BACKDROP_FG));
        f.render_widget(paragraph, area);
    }
}
