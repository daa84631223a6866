//! Key bindings.
//!
//! Screens never look at raw key events: [`BindingSet::resolve`] turns a
//! crossterm [`KeyEvent`] into a semantic [`Action`] given the active stage,
//! and [`BindingSet::footer_bindings`] lists the hints shown in the status
//! line.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::stage::Stage;

/// What a key press means to the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Up,
    Down,
    Confirm,
    Back,
    Toggle,
    Cancel,
    Insert(char),
    DeleteBack,
    DeleteForward,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
}

/// One footer hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding {
    pub key_label: &'static str,
    pub description: &'static str,
}

pub mod bindings {
    use super::Binding;

    pub const CONFIRM: Binding = Binding {
        key_label: "enter",
        description: "continue",
    };
    pub const TOGGLE: Binding = Binding {
        key_label: "space",
        description: "toggle",
    };
    pub const BACK: Binding = Binding {
        key_label: "b",
        description: "back",
    };
    pub const CANCEL: Binding = Binding {
        key_label: "esc",
        description: "cancel",
    };
}

/// Bindings active on one stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BindingSet {
    stage: Stage,
}

impl BindingSet {
    pub fn for_stage(stage: Stage) -> Self {
        Self { stage }
    }

    /// Back is off on the first stage and while typing the name.
    pub fn back_enabled(&self) -> bool {
        !matches!(self.stage, Stage::Language | Stage::Name)
    }

    pub fn toggle_enabled(&self) -> bool {
        self.stage == Stage::Libraries
    }

    fn text_entry(&self) -> bool {
        self.stage == Stage::Name
    }

    /// Map a key event to an action. Releases and repeats of non-text keys
    /// are ignored.
    pub fn resolve(&self, key: &KeyEvent) -> Option<Action> {
        if key.kind == KeyEventKind::Release {
            return None;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => return Some(Action::Cancel),
            KeyCode::Esc => return Some(Action::Cancel),
            KeyCode::Enter => return Some(Action::Confirm),
            _ => {}
        }

        if self.text_entry() {
            return match key.code {
                KeyCode::Char(c) if !ctrl => Some(Action::Insert(c)),
                KeyCode::Backspace => Some(Action::DeleteBack),
                KeyCode::Delete => Some(Action::DeleteForward),
                KeyCode::Left => Some(Action::CursorLeft),
                KeyCode::Right => Some(Action::CursorRight),
                KeyCode::Home => Some(Action::CursorHome),
                KeyCode::End => Some(Action::CursorEnd),
                _ => None,
            };
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => Some(Action::Up),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::Down),
            KeyCode::Char(' ') if self.toggle_enabled() => Some(Action::Toggle),
            KeyCode::Char('b') | KeyCode::Left | KeyCode::Backspace if self.back_enabled() => {
                Some(Action::Back)
            }
            _ => None,
        }
    }

    /// Hints for the enabled bindings, in display order.
    pub fn footer_bindings(&self) -> Vec<Binding> {
        let mut out = vec![bindings::CONFIRM];
        if self.toggle_enabled() {
            out.push(bindings::TOGGLE);
        }
        if self.back_enabled() {
            out.push(bindings::BACK);
        }
        out.push(bindings::CANCEL);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    #[test]
    fn cancel_is_always_bound() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        for stage in Stage::ALL {
            let set = BindingSet::for_stage(stage);
            assert_eq!(set.resolve(&key(KeyCode::Esc)), Some(Action::Cancel));
            assert_eq!(set.resolve(&ctrl_c), Some(Action::Cancel));
        }
    }

    #[test]
    fn back_disabled_on_language_and_name() {
        let language = BindingSet::for_stage(Stage::Language);
        assert_eq!(language.resolve(&key(KeyCode::Char('b'))), None);
        assert_eq!(language.resolve(&key(KeyCode::Left)), None);

        let name = BindingSet::for_stage(Stage::Name);
        assert_eq!(
            name.resolve(&key(KeyCode::Char('b'))),
            Some(Action::Insert('b'))
        );
        assert_eq!(name.resolve(&key(KeyCode::Backspace)), Some(Action::DeleteBack));
        assert_eq!(name.resolve(&key(KeyCode::Left)), Some(Action::CursorLeft));

        let framework = BindingSet::for_stage(Stage::Framework);
        for code in [KeyCode::Char('b'), KeyCode::Left, KeyCode::Backspace] {
            assert_eq!(framework.resolve(&key(code)), Some(Action::Back));
        }
    }

    #[test]
    fn toggle_only_on_libraries() {
        let space = key(KeyCode::Char(' '));
        assert_eq!(
            BindingSet::for_stage(Stage::Libraries).resolve(&space),
            Some(Action::Toggle)
        );
        assert_eq!(BindingSet::for_stage(Stage::Framework).resolve(&space), None);
        assert_eq!(
            BindingSet::for_stage(Stage::Name).resolve(&space),
            Some(Action::Insert(' '))
        );
    }

    #[test]
    fn vim_keys_move_highlight() {
        let set = BindingSet::for_stage(Stage::Language);
        assert_eq!(set.resolve(&key(KeyCode::Char('k'))), Some(Action::Up));
        assert_eq!(set.resolve(&key(KeyCode::Char('j'))), Some(Action::Down));
        assert_eq!(set.resolve(&key(KeyCode::Up)), Some(Action::Up));
        assert_eq!(set.resolve(&key(KeyCode::Down)), Some(Action::Down));
    }

    #[test]
    fn key_release_is_ignored() {
        let mut release = key(KeyCode::Enter);
        release.kind = KeyEventKind::Release;
        assert_eq!(BindingSet::for_stage(Stage::Language).resolve(&release), None);
    }

    #[test]
    fn footer_lists_enabled_bindings() {
        let labels = |stage| -> Vec<&'static str> {
            BindingSet::for_stage(stage)
                .footer_bindings()
                .iter()
                .map(|b| b.key_label)
                .collect()
        };
        assert_eq!(labels(Stage::Language), vec!["enter", "esc"]);
        assert_eq!(labels(Stage::Libraries), vec!["enter", "space", "b", "esc"]);
        assert_eq!(labels(Stage::Name), vec!["enter", "esc"]);
        assert_eq!(labels(Stage::Confirm), vec!["enter", "b", "esc"]);
    }
}
