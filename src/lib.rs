pub mod audio;
pub mod config;
pub mod error;
pub mod input;
pub mod logger;
pub mod models;
pub mod session;
pub mod trivia;
pub mod ui;
pub mod utils;


// Re-exports for convenience
pub use audio::{AudioSession, FeedbackSignaler};
pub use config::{CONFIG_FILE, QuizConfig, load_config};
pub use error::{QuizError, Result};
pub use models::{AnswerOptions, Difficulty, Question, QuestionSet, SessionState, UserAction};
pub use session::{Flow, Phase, QuizController};
pub use trivia::{OpenTdbClient, QuestionSource};
pub use ui::{Backdrop, Surface, TuiSurface, View};
pub use utils::decode_html_entities;
