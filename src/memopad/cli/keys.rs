//! Key bindings for the terminal UI.
//!
//! Note operations sit on Alt, pad-wide ones on Ctrl, and plain keys only move
//! the selection, so typing into the new-note prompt never collides with a
//! binding.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub const HELP: &str = "Alt[o]=★ Alt[p]=📌 Alt[w/s]=↑/↓ Alt[a/d]=←/→ Ctrl[w/s]=Zoom± \
                        Alt[n]=New Del=Delete Ctrl[q]=Save+Quit Esc=Quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    SelectPrevious,
    SelectNext,
    ToggleFavorite,
    TogglePin,
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    ZoomIn,
    ZoomOut,
    NewNote,
    DeleteNote,
    SaveAndQuit,
    Quit,
}

pub fn action_for(key: KeyEvent) -> Option<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    match key.code {
        KeyCode::Up => Some(Action::SelectPrevious),
        KeyCode::Down => Some(Action::SelectNext),
        KeyCode::Delete => Some(Action::DeleteNote),
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char(c) if ctrl => match c.to_ascii_lowercase() {
            'w' => Some(Action::ZoomIn),
            's' => Some(Action::ZoomOut),
            'q' => Some(Action::SaveAndQuit),
            'c' => Some(Action::Quit),
            _ => None,
        },
        KeyCode::Char(c) if alt => match c.to_ascii_lowercase() {
            'o' => Some(Action::ToggleFavorite),
            'p' => Some(Action::TogglePin),
            'w' => Some(Action::MoveUp),
            's' => Some(Action::MoveDown),
            'a' => Some(Action::MoveLeft),
            'd' => Some(Action::MoveRight),
            'n' => Some(Action::NewNote),
            _ => None,
        },
        KeyCode::Char('k') => Some(Action::SelectPrevious),
        KeyCode::Char('j') => Some(Action::SelectNext),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn alt_bindings_map_to_note_operations() {
        let cases = [
            ('o', Action::ToggleFavorite),
            ('p', Action::TogglePin),
            ('w', Action::MoveUp),
            ('s', Action::MoveDown),
            ('a', Action::MoveLeft),
            ('d', Action::MoveRight),
            ('n', Action::NewNote),
        ];
        for (c, action) in cases {
            assert_eq!(
                action_for(key(KeyCode::Char(c), KeyModifiers::ALT)),
                Some(action)
            );
        }
    }

    #[test]
    fn shifted_alt_keys_still_match() {
        assert_eq!(
            action_for(key(
                KeyCode::Char('P'),
                KeyModifiers::ALT | KeyModifiers::SHIFT
            )),
            Some(Action::TogglePin)
        );
    }

    #[test]
    fn ctrl_bindings_map_to_pad_operations() {
        assert_eq!(
            action_for(key(KeyCode::Char('w'), KeyModifiers::CONTROL)),
            Some(Action::ZoomIn)
        );
        assert_eq!(
            action_for(key(KeyCode::Char('s'), KeyModifiers::CONTROL)),
            Some(Action::ZoomOut)
        );
        assert_eq!(
            action_for(key(KeyCode::Char('q'), KeyModifiers::CONTROL)),
            Some(Action::SaveAndQuit)
        );
    }

    #[test]
    fn plain_keys_only_navigate() {
        assert_eq!(
            action_for(key(KeyCode::Char('j'), KeyModifiers::NONE)),
            Some(Action::SelectNext)
        );
        assert_eq!(
            action_for(key(KeyCode::Up, KeyModifiers::NONE)),
            Some(Action::SelectPrevious)
        );
        assert_eq!(action_for(key(KeyCode::Char('p'), KeyModifiers::NONE)), None);
        assert_eq!(action_for(key(KeyCode::Char('w'), KeyModifiers::NONE)), None);
    }

    #[test]
    fn escape_and_delete() {
        assert_eq!(
            action_for(key(KeyCode::Esc, KeyModifiers::NONE)),
            Some(Action::Quit)
        );
        assert_eq!(
            action_for(key(KeyCode::Delete, KeyModifiers::NONE)),
            Some(Action::DeleteNote)
        );
    }
}
