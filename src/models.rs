use rand::Rng;
use rand::seq::SliceRandom;
use std::fmt;

pub const OPTION_COUNT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Query value understood by the provider.
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A multiple-choice question with display-ready (entity-decoded) text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub prompt: String,
    pub correct_answer: String,
    pub incorrect_answers: [String; 3],
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionSet {
    questions: Vec<Question>,
}

impl QuestionSet {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }
}

/// The four answers of the active question in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOptions {
    pub options: [String; OPTION_COUNT],
}

impl AnswerOptions {
    /// Fresh random order on every call.
    pub fn shuffled<R: Rng + ?Sized>(question: &Question, rng: &mut R) -> Self {
        let mut options = [
            question.incorrect_answers[0].clone(),
            question.incorrect_answers[1].clone(),
            question.incorrect_answers[2].clone(),
            question.correct_answer.clone(),
        ];
        options.shuffle(rng);
        Self { options }
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.options.get(index).map(String::as_str)
    }

    pub fn position_of(&self, text: &str) -> Option<usize> {
        self.options.iter().position(|o| o == text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub difficulty: Difficulty,
    current_index: usize,
    score: usize,
    questions: QuestionSet,
}

impl SessionState {
    pub fn new(difficulty: Difficulty, questions: QuestionSet) -> Self {
        Self {
            difficulty,
            current_index: 0,
            score: 0,
            questions,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn questions(&self) -> &QuestionSet {
        &self.questions
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_index)
    }

    /// Scores the answer to the current question. Returns whether it was correct.
    pub fn record_answer(&mut self, chosen_text: &str) -> bool {
        let correct = self
            .current_question()
            .is_some_and(|q| q.correct_answer == chosen_text);
        // at most one point per question index
        if correct && self.score <= self.current_index {
            self.score += 1;
        }
        correct
    }

    /// Moves to the next question. Returns false once the set is exhausted,
    /// leaving `current_index == total`.
    pub fn advance(&mut self) -> bool {
        if self.current_index + 1 < self.questions.len() {
            self.current_index += 1;
            true
        } else {
            self.current_index = self.questions.len();
            false
        }
    }
}

/// Discrete user actions reported by the presentation surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAction {
    DifficultyChosen(Difficulty),
    OptionChosen(usize),
    Continue,
    PlayAgain,
    Exit,
}
