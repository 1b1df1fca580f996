//! Sound cues for answer feedback and the menu theme.
//!
//! `AudioSession` is acquired once in `main` and released on drop. Cues are
//! looked up by name in the asset directory; a missing asset mutes that cue
//! instead of failing. The terminal has no mixer, so cues are voiced with
//! the terminal bell: one ring for a correct answer, two for a wrong one.

use crate::config::QuizConfig;
use crate::logger;
use std::io::Write;
use std::path::PathBuf;

/// Fire-and-forget answer feedback.
pub trait FeedbackSignaler {
    fn signal(&mut self, correct: bool);

    fn menu_theme(&mut self, _playing: bool) {}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cue {
    pub path: PathBuf,
    rings: usize,
}

impl Cue {
    fn load(path: PathBuf, rings: usize) -> Option<Self> {
        if path.is_file() {
            Some(Self { path, rings })
        } else {
            logger::log(&format!("Sound asset missing, muting: {}", path.display()));
            None
        }
    }
}

pub struct AudioSession {
    out: Box<dyn Write>,
    correct: Option<Cue>,
    wrong: Option<Cue>,
    theme: Option<PathBuf>,
    theme_playing: bool,
}

impl AudioSession {
    pub fn open(config: &QuizConfig) -> Self {
        Self::with_output(config, Box::new(std::io::stdout()))
    }

    pub fn with_output(config: &QuizConfig, out: Box<dyn Write>) -> Self {
        let theme = config.asset_path(&config.menu_theme);
        let theme = if theme.is_file() {
            Some(theme)
        } else {
            logger::log(&format!("Menu theme missing: {}", theme.display()));
            None
        };

        logger::log("Audio session opened");
        Self {
            out,
            correct: Cue::load(config.asset_path(&config.correct_cue), 1),
            wrong: Cue::load(config.asset_path(&config.wrong_cue), 2),
            theme,
            theme_playing: false,
        }
    }

    pub fn cue(&self, correct: bool) -> Option<&Cue> {
        if correct {
            self.correct.as_ref()
        } else {
            self.wrong.as_ref()
        }
    }

    pub fn theme_playing(&self) -> bool {
        self.theme_playing
    }

    fn ring(&mut self, rings: usize) -> std::io::Result<()> {
        for _ in 0..rings {
            self.out.write_all(b"\x07")?;
        }
        self.out.flush()
    }
}

impl FeedbackSignaler for AudioSession {
    fn signal(&mut self, correct: bool) {
        let Some(rings) = self.cue(correct).map(|c| c.rings) else {
            return;
        };
        if let Err(e) = self.ring(rings) {
            logger::log(&format!("Sound cue failed: {}", e));
        }
    }

    fn menu_theme(&mut self, playing: bool) {
        if self.theme.is_none() || self.theme_playing == playing {
            return;
        }
        self.theme_playing = playing;
        logger::log(if playing {
            "Menu theme started"
        } else {
            "Menu theme stopped"
        });
    }
}

impl Drop for AudioSession {
    fn drop(&mut self) {
        self.theme_playing = false;
        let _ = self.out.flush();
        logger::log("Audio session closed");
    }
}
