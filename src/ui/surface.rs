use crate::error::Result;
use crate::input;
use crate::models::{Difficulty, OPTION_COUNT, UserAction};
use crate::ui::backdrop::Backdrop;
use crossterm::event::KeyEvent;
use ratatui::{Terminal, backend::Backend};

/// The only coupling between the quiz controller and whatever draws it.
pub trait Surface {
    fn show_menu(&mut self) -> Result<()>;
    fn show_loading(&mut self, difficulty: Difficulty) -> Result<()>;
    fn show_question(&mut self, screen: QuestionScreen) -> Result<()>;
    fn show_feedback(&mut self, correct: bool, correct_answer: &str) -> Result<()>;
    fn show_final(&mut self, score: usize, total: usize) -> Result<()>;
    fn show_error(&mut self, message: &str) -> Result<()>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionScreen {
    pub number: usize,
    pub total: usize,
    pub score: usize,
    pub prompt: String,
    pub options: [String; OPTION_COUNT],
}

/// What is on screen right now, plus the highlighted entry where the
/// screen offers a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Menu {
        selected: usize,
    },
    Loading {
        difficulty: Difficulty,
    },
    Question {
        screen: QuestionScreen,
        selected: usize,
    },
    Feedback {
        correct: bool,
        correct_answer: String,
    },
    Final {
        score: usize,
        total: usize,
        selected: usize,
    },
    Error {
        message: String,
    },
}

/// Terminal implementation: every `show_*` replaces the view and draws it
/// immediately, so the loading screen is visible while a fetch blocks.
pub struct TuiSurface<B: Backend> {
    terminal: Terminal<B>,
    view: View,
    backdrop: Option<Backdrop>,
}

impl<B: Backend> TuiSurface<B> {
    pub fn new(terminal: Terminal<B>, backdrop: Option<Backdrop>) -> Self {
        Self {
            terminal,
            view: View::Menu { selected: 0 },
            backdrop,
        }
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }

    pub fn redraw(&mut self) -> Result<()> {
        let view = &self.view;
        let backdrop = self.backdrop.as_ref();
        self.terminal
            .draw(|f| super::draw(f, view, backdrop))?;
        Ok(())
    }

    fn set_view(&mut self, view: View) -> Result<()> {
        self.view = view;
        self.redraw()
    }

    /// Translate a key press into a user action. Highlight movement is
    /// handled here and redrawn; only completed choices reach the caller.
    pub fn translate_key(&mut self, key: KeyEvent) -> Result<Option<UserAction>> {
        let before = self.view.clone();
        let action = input::map_key(&mut self.view, key);
        if self.view != before {
            self.redraw()?;
        }
        Ok(action)
    }
}

impl<B: Backend> Surface for TuiSurface<B> {
    fn show_menu(&mut self) -> Result<()> {
        self.set_view(View::Menu { selected: 0 })
    }

    fn show_loading(&mut self, difficulty: Difficulty) -> Result<()> {
        self.set_view(View::Loading { difficulty })
    }

    fn show_question(&mut self, screen: QuestionScreen) -> Result<()> {
        self.set_view(View::Question {
            screen,
            selected: 0,
        })
    }

    fn show_feedback(&mut self, correct: bool, correct_answer: &str) -> Result<()> {
        self.set_view(View::Feedback {
            correct,
            correct_answer: correct_answer.to_string(),
        })
    }

    fn show_final(&mut self, score: usize, total: usize) -> Result<()> {
        self.set_view(View::Final {
            score,
            total,
            selected: 0,
        })
    }

    fn show_error(&mut self, message: &str) -> Result<()> {
        self.set_view(View::Error {
            message: message.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::MENU_ENTRIES;
    use crossterm::event::{KeyCode, KeyModifiers};
    use ratatui::backend::TestBackend;

    fn surface() -> TuiSurface<TestBackend> {
        let terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        TuiSurface::new(terminal, None)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    #[test]
    fn test_show_methods_replace_view() {
        let mut s = surface();
        s.show_loading(Difficulty::Medium).unwrap();
        assert_eq!(
            s.view(),
            &View::Loading {
                difficulty: Difficulty::Medium
            }
        );
        s.show_final(3, 10).unwrap();
        assert!(matches!(
            s.view(),
            View::Final {
                score: 3,
                total: 10,
                ..
            }
        ));
    }

    #[test]
    fn test_menu_navigation_then_enter() {
        let mut s = surface();
        s.show_menu().unwrap();
        assert_eq!(s.translate_key(key(KeyCode::Down)).unwrap(), None);
        assert_eq!(s.view(), &View::Menu { selected: 1 });
        assert_eq!(
            s.translate_key(key(KeyCode::Enter)).unwrap(),
            Some(UserAction::DifficultyChosen(Difficulty::Medium))
        );
    }

    #[test]
    fn test_menu_exit_entry() {
        let mut s = surface();
        for _ in 0..MENU_ENTRIES + 2 {
            s.translate_key(key(KeyCode::Down)).unwrap();
        }
        assert_eq!(
            s.view(),
            &View::Menu {
                selected: MENU_ENTRIES - 1
            }
        );
        assert_eq!(
            s.translate_key(key(KeyCode::Enter)).unwrap(),
            Some(UserAction::Exit)
        );
    }
}
