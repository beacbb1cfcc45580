//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Plain printable characters are deliberately unbound so they always reach
/// the query input. Every default binding is either a non-character key or
/// uses the Control modifier.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    ///
    /// Only code and modifiers are compared; event kind and state are ignored.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings
            .get(&KeyEvent::new(key.code, key.modifiers))
            .copied()
    }

    fn bind(&mut self, code: KeyCode, modifiers: KeyModifiers, action: KeyAction) {
        self.bindings.insert(KeyEvent::new(code, modifiers), action);
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut keys = Self {
            bindings: HashMap::new(),
        };
        let none = KeyModifiers::NONE;
        let ctrl = KeyModifiers::CONTROL;

        // Query editing
        keys.bind(KeyCode::Backspace, none, KeyAction::DeleteBackward);
        keys.bind(KeyCode::Delete, none, KeyAction::DeleteForward);
        keys.bind(KeyCode::Left, none, KeyAction::CursorLeft);
        keys.bind(KeyCode::Right, none, KeyAction::CursorRight);
        keys.bind(KeyCode::Home, none, KeyAction::CursorHome);
        keys.bind(KeyCode::Char('a'), ctrl, KeyAction::CursorHome);
        keys.bind(KeyCode::End, none, KeyAction::CursorEnd);
        keys.bind(KeyCode::Char('e'), ctrl, KeyAction::CursorEnd);
        keys.bind(KeyCode::Enter, none, KeyAction::SubmitQuery);
        keys.bind(KeyCode::Esc, none, KeyAction::ClearQuery);

        // Pagination
        keys.bind(KeyCode::PageDown, none, KeyAction::NextPage);
        keys.bind(KeyCode::Char('n'), ctrl, KeyAction::NextPage);
        keys.bind(KeyCode::PageUp, none, KeyAction::PrevPage);
        keys.bind(KeyCode::Char('p'), ctrl, KeyAction::PrevPage);

        // Selection
        keys.bind(KeyCode::Down, none, KeyAction::SelectNext);
        keys.bind(KeyCode::Up, none, KeyAction::SelectPrev);

        // Application controls
        keys.bind(KeyCode::Char('r'), ctrl, KeyAction::Retry);
        keys.bind(KeyCode::F(1), none, KeyAction::Help);
        keys.bind(KeyCode::Char('c'), ctrl, KeyAction::Quit);
        keys.bind(KeyCode::Char('q'), ctrl, KeyAction::Quit);

        keys
    }
}
