//! Highlight-cursor lists for the choice stages.
//!
//! Each stage owns a [`SelectionList`] of its own item kind, so the language
//! stage can only ever hand back a [`LanguageChoice`] and so on.

use std::borrow::Cow;

/// Something a [`SelectionList`] can display.
pub trait ListItem {
    /// Catalog name, used for lookups.
    fn name(&self) -> &str;
    /// Main line.
    fn label(&self) -> Cow<'_, str>;
    /// Dimmed line under the label.
    fn description(&self) -> &str;
}

/// A language row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageChoice {
    pub name: String,
    pub description: String,
}

/// A framework row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameworkChoice {
    pub name: String,
    pub description: String,
}

/// A library row with its checkbox state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryChoice {
    pub name: String,
    pub description: String,
    pub checked: bool,
}

impl ListItem for LanguageChoice {
    fn name(&self) -> &str {
        &self.name
    }

    fn label(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.name)
    }

    fn description(&self) -> &str {
        &self.description
    }
}

impl ListItem for FrameworkChoice {
    fn name(&self) -> &str {
        &self.name
    }

    fn label(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.name)
    }

    fn description(&self) -> &str {
        &self.description
    }
}

impl ListItem for LibraryChoice {
    fn name(&self) -> &str {
        &self.name
    }

    fn label(&self) -> Cow<'_, str> {
        let mark = if self.checked { "x" } else { " " };
        Cow::Owned(format!("[{}] {}", mark, self.name))
    }

    fn description(&self) -> &str {
        &self.description
    }
}

/// Whatever row is highlighted on the active stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice<'a> {
    Language(&'a LanguageChoice),
    Framework(&'a FrameworkChoice),
    Library(&'a LibraryChoice),
}

impl Choice<'_> {
    /// Catalog name of the highlighted row.
    pub fn name(&self) -> &str {
        match self {
            Choice::Language(c) => &c.name,
            Choice::Framework(c) => &c.name,
            Choice::Library(c) => &c.name,
        }
    }
}

/// Ordered items plus a highlighted index.
///
/// The index is always in range for a non-empty list and absent for an
/// empty one. Movement clamps at both ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionList<T> {
    items: Vec<T>,
    index: usize,
    width: u16,
    height: u16,
}

impl<T> Default for SelectionList<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T> SelectionList<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            index: 0,
            width: 0,
            height: 0,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Highlighted position, `None` when empty.
    pub fn index(&self) -> Option<usize> {
        if self.items.is_empty() {
            None
        } else {
            Some(self.index)
        }
    }

    /// Highlighted item, `None` when empty.
    pub fn selected(&self) -> Option<&T> {
        self.items.get(self.index)
    }

    pub fn next(&mut self) {
        if self.index + 1 < self.items.len() {
            self.index += 1;
        }
    }

    pub fn previous(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    /// Highlight `index`, clamped into range.
    pub fn select(&mut self, index: usize) {
        self.index = index.min(self.items.len().saturating_sub(1));
    }

    /// Replace the items, keeping the highlight where it was if it still fits.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.select(self.index);
    }

    /// Record the render size. Has no effect on the items.
    pub fn set_size(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// First item index to draw when `visible` items fit, so that the
    /// highlight stays on screen.
    pub fn scroll_offset(&self, visible: usize) -> usize {
        if visible == 0 || self.index < visible {
            0
        } else {
            self.index + 1 - visible
        }
    }
}

impl<T: ListItem> SelectionList<T> {
    /// Highlight the first item whose name matches `name` ignoring case.
    ///
    /// Returns whether a match was found; the highlight is unchanged if not.
    pub fn select_label(&mut self, name: &str) -> bool {
        let wanted = name.trim();
        if wanted.is_empty() {
            return false;
        }
        match self
            .items
            .iter()
            .position(|item| item.name().eq_ignore_ascii_case(wanted))
        {
            Some(i) => {
                self.index = i;
                true
            }
            None => false,
        }
    }
}

/// Trim, drop blanks and remove case-insensitive duplicates (first wins).
pub fn unique_labels<I, S>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = std::collections::HashSet::new();
    let mut out = Vec::new();
    for value in values {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            continue;
        }
        if seen.insert(trimmed.to_lowercase()) {
            out.push(trimmed.to_string());
        }
    }
    out
}

/// Sort case-insensitively. Ties keep their input order.
pub fn sort_labels(values: &mut [String]) {
    values.sort_by_key(|v| v.to_lowercase());
}
