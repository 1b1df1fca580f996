use crate::models::{Difficulty, OPTION_COUNT, UserAction};
use crate::ui::surface::View;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use std::io;

/// Easy, Medium, Hard, Exit.
pub const MENU_ENTRIES: usize = 4;
/// Play Again, Exit.
pub const FINAL_ENTRIES: usize = 2;

pub const OPTION_LABELS: [char; OPTION_COUNT] = ['A', 'B', 'C', 'D'];

fn move_selection(selected: &mut usize, len: usize, code: KeyCode) -> bool {
    match code {
        KeyCode::Up | KeyCode::Char('k') => {
            *selected = selected.saturating_sub(1);
            true
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if *selected + 1 < len {
                *selected += 1;
            }
            true
        }
        _ => false,
    }
}

fn menu_entry(index: usize) -> UserAction {
    match Difficulty::ALL.get(index) {
        Some(difficulty) => UserAction::DifficultyChosen(*difficulty),
        None => UserAction::Exit,
    }
}

fn option_for_char(c: char) -> Option<usize> {
    let c = c.to_ascii_uppercase();
    if let Some(i) = OPTION_LABELS.iter().position(|l| *l == c) {
        return Some(i);
    }
    c.to_digit(10)
        .map(|d| d as usize)
        .filter(|d| (1..=OPTION_COUNT).contains(d))
        .map(|d| d - 1)
}

/// Map a key press on the current view to a user action. Arrow keys only
/// move the highlight stored in the view.
pub fn map_key(view: &mut View, key: KeyEvent) -> Option<UserAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(UserAction::Exit);
    }

    match view {
        View::Menu { selected } => {
            if move_selection(selected, MENU_ENTRIES, key.code) {
                return None;
            }
            match key.code {
                KeyCode::Enter => Some(menu_entry(*selected)),
                KeyCode::Char('e') | KeyCode::Char('1') => {
                    Some(UserAction::DifficultyChosen(Difficulty::Easy))
                }
                KeyCode::Char('m') | KeyCode::Char('2') => {
                    Some(UserAction::DifficultyChosen(Difficulty::Medium))
                }
                KeyCode::Char('h') | KeyCode::Char('3') => {
                    Some(UserAction::DifficultyChosen(Difficulty::Hard))
                }
                KeyCode::Char('q') | KeyCode::Esc => Some(UserAction::Exit),
                _ => None,
            }
        }
        View::Loading { .. } => None,
        View::Question { selected, .. } => {
            if move_selection(selected, OPTION_COUNT, key.code) {
                return None;
            }
            match key.code {
                KeyCode::Enter => Some(UserAction::OptionChosen(*selected)),
                KeyCode::Char(c) => option_for_char(c).map(UserAction::OptionChosen),
                _ => None,
            }
        }
        View::Feedback { .. } => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('o') => Some(UserAction::Continue),
            _ => None,
        },
        View::Final { selected, .. } => {
            if move_selection(selected, FINAL_ENTRIES, key.code) {
                return None;
            }
            match key.code {
                KeyCode::Enter if *selected == 0 => Some(UserAction::PlayAgain),
                KeyCode::Enter => Some(UserAction::Exit),
                KeyCode::Char('p') | KeyCode::Char('r') => Some(UserAction::PlayAgain),
                KeyCode::Char('q') | KeyCode::Esc => Some(UserAction::Exit),
                _ => None,
            }
        }
        View::Error { .. } => Some(UserAction::Exit),
    }
}

/// Discard every event already queued. Keys typed while a blocking fetch
/// held the loop must not land on the next screen as answers.
pub fn drain_pending<P, R>(mut poll: P, mut read: R) -> io::Result<usize>
where
    P: FnMut() -> io::Result<bool>,
    R: FnMut() -> io::Result<Event>,
{
    let mut dropped = 0;
    while poll()? {
        read()?;
        dropped += 1;
    }
    Ok(dropped)
}
