//! Single-line text buffer for the project name.

use tui_input::{Input, InputRequest};

/// Maximum characters the name field accepts.
pub const NAME_CHAR_LIMIT: usize = 64;

/// Placeholder shown while the field is empty.
pub const NAME_PLACEHOLDER: &str = "my-project";

/// Editable text with a cursor measured in characters.
///
/// Editing goes through [`tui_input::Input`]; this wrapper adds the length
/// limit and drops control characters.
#[derive(Debug, Clone, Default)]
pub struct NameInput {
    input: Input,
}

impl NameInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &str {
        self.input.value()
    }

    pub fn is_empty(&self) -> bool {
        self.input.value().is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.input.cursor()
    }

    fn len(&self) -> usize {
        self.input.value().chars().count()
    }

    /// Replace the contents and move the cursor to the end.
    pub fn set_value(&mut self, value: &str) {
        self.input = Input::new(value.chars().take(NAME_CHAR_LIMIT).collect());
    }

    /// Insert at the cursor. Control characters and input past the limit
    /// are ignored.
    pub fn insert(&mut self, c: char) {
        if c.is_control() || self.len() >= NAME_CHAR_LIMIT {
            return;
        }
        self.input.handle(InputRequest::InsertChar(c));
    }

    /// Remove the character before the cursor.
    pub fn delete_back(&mut self) {
        self.input.handle(InputRequest::DeletePrevChar);
    }

    /// Remove the character under the cursor.
    pub fn delete_forward(&mut self) {
        self.input.handle(InputRequest::DeleteNextChar);
    }

    pub fn move_left(&mut self) {
        self.input.handle(InputRequest::GoToPrevChar);
    }

    pub fn move_right(&mut self) {
        self.input.handle(InputRequest::GoToNextChar);
    }

    pub fn move_home(&mut self) {
        self.input.handle(InputRequest::GoToStart);
    }

    pub fn move_end(&mut self) {
        self.input.handle(InputRequest::GoToEnd);
    }
}
