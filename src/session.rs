use crate::audio::FeedbackSignaler;
use crate::config::QuizConfig;
use crate::error::{QuizError, Result};
use crate::logger;
use crate::models::{AnswerOptions, Difficulty, SessionState, UserAction};
use crate::trivia::QuestionSource;
use crate::ui::surface::{QuestionScreen, Surface};
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Menu,
    Loading(Difficulty),
    Question,
    Feedback { correct: bool },
    Final,
    Failed,
    Exited,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Drives one quiz at a time: menu, loading, questions with feedback,
/// final score, then back to the menu or out.
pub struct QuizController<Q, S, F, R> {
    source: Q,
    surface: S,
    signaler: F,
    rng: R,
    category: u32,
    question_count: usize,
    phase: Phase,
    session: Option<SessionState>,
    options: Option<AnswerOptions>,
    failure: Option<String>,
}

impl<Q, S, F, R> QuizController<Q, S, F, R>
where
    Q: QuestionSource,
    S: Surface,
    F: FeedbackSignaler,
    R: Rng,
{
    pub fn new(source: Q, surface: S, signaler: F, rng: R, config: &QuizConfig) -> Self {
        Self {
            source,
            surface,
            signaler,
            rng,
            category: config.category,
            question_count: config.question_count.max(1),
            phase: Phase::Menu,
            session: None,
            options: None,
            failure: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn session(&self) -> Option<&SessionState> {
        self.session.as_ref()
    }

    pub fn options(&self) -> Option<&AnswerOptions> {
        self.options.as_ref()
    }

    /// Message of the error that ended the session, if any.
    pub fn failure(&self) -> Option<&str> {
        self.failure.as_deref()
    }

    pub fn source(&self) -> &Q {
        &self.source
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn signaler(&self) -> &F {
        &self.signaler
    }

    /// Show the initial menu.
    pub fn start(&mut self) -> Result<()> {
        self.enter_menu()
    }

    pub fn handle(&mut self, action: UserAction) -> Result<Flow> {
        match (self.phase, action) {
            (Phase::Exited, _) => return Ok(Flow::Exit),
            (Phase::Failed, _) | (_, UserAction::Exit) => {
                self.set_phase(Phase::Exited);
                return Ok(Flow::Exit);
            }
            (Phase::Menu, UserAction::DifficultyChosen(difficulty)) => {
                self.start_quiz(difficulty)?
            }
            (Phase::Question, UserAction::OptionChosen(index)) => self.answer(index)?,
            (Phase::Feedback { .. }, UserAction::Continue) => self.next_question()?,
            (Phase::Final, UserAction::PlayAgain) => {
                self.session = None;
                self.enter_menu()?
            }
            (phase, action) => {
                logger::log(&format!("Ignoring {:?} while in {:?}", action, phase));
            }
        }
        Ok(Flow::Continue)
    }

    fn set_phase(&mut self, phase: Phase) {
        logger::log(&format!("{:?} -> {:?}", self.phase, phase));
        self.phase = phase;
    }

    fn enter_menu(&mut self) -> Result<()> {
        self.options = None;
        self.set_phase(Phase::Menu);
        self.signaler.menu_theme(true);
        self.surface.show_menu()
    }

    fn start_quiz(&mut self, difficulty: Difficulty) -> Result<()> {
        self.signaler.menu_theme(false);
        self.set_phase(Phase::Loading(difficulty));
        self.surface.show_loading(difficulty)?;

        let fetched = self
            .source
            .fetch(self.category, difficulty, self.question_count)
            .and_then(|set| {
                if set.is_empty() {
                    Err(QuizError::EmptyResultSet { difficulty })
                } else {
                    Ok(set)
                }
            });

        match fetched {
            Ok(set) => {
                self.session = Some(SessionState::new(difficulty, set));
                self.show_current_question()
            }
            Err(e) => self.fail(e),
        }
    }

    fn fail(&mut self, error: QuizError) -> Result<()> {
        let message = error.to_string();
        logger::log(&format!("Session ended: {}", message));
        self.session = None;
        self.options = None;
        self.set_phase(Phase::Failed);
        self.surface.show_error(&message)?;
        self.failure = Some(message);
        Ok(())
    }

    fn show_current_question(&mut self) -> Result<()> {
        let Some(session) = &self.session else {
            return self.enter_menu();
        };
        let Some(question) = session.current_question() else {
            return self.show_final();
        };

        let options = AnswerOptions::shuffled(question, &mut self.rng);
        let screen = QuestionScreen {
            number: session.current_index() + 1,
            total: session.total(),
            score: session.score(),
            prompt: question.prompt.clone(),
            options: options.options.clone(),
        };
        self.options = Some(options);
        self.set_phase(Phase::Question);
        self.surface.show_question(screen)
    }

    fn answer(&mut self, index: usize) -> Result<()> {
        let (Some(session), Some(options)) = (self.session.as_mut(), self.options.as_ref()) else {
            return Ok(());
        };
        let Some(chosen) = options.get(index) else {
            logger::log(&format!("Ignoring out-of-range option {}", index));
            return Ok(());
        };

        let correct = session.record_answer(chosen);
        let correct_answer = session
            .current_question()
            .map(|q| q.correct_answer.clone())
            .unwrap_or_default();

        self.signaler.signal(correct);
        self.set_phase(Phase::Feedback { correct });
        self.surface.show_feedback(correct, &correct_answer)
    }

    fn next_question(&mut self) -> Result<()> {
        let advanced = match self.session.as_mut() {
            Some(session) => session.advance(),
            None => return self.enter_menu(),
        };
        if advanced {
            self.show_current_question()
        } else {
            self.show_final()
        }
    }

    fn show_final(&mut self) -> Result<()> {
        let (score, total) = self
            .session
            .as_ref()
            .map(|s| (s.score(), s.total()))
            .unwrap_or((0, 0));
        self.options = None;
        self.set_phase(Phase::Final);
        logger::log(&format!("Final score {} / {}", score, total));
        self.surface.show_final(score, total)
    }
}
