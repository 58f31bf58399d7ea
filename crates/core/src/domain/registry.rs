// Screen Registry
//
// Single in-memory owner of every screen for the session. Insertion order
// is the registration order and is never reshuffled; views that want a
// different order sort their own copies.

use crate::domain::error::{DomainError, Result};
use crate::domain::screen::Screen;

#[derive(Debug, Default)]
pub struct ScreenRegistry {
    screens: Vec<Screen>,
}

impl ScreenRegistry {
    pub fn new() -> Self {
        Self {
            screens: Vec::new(),
        }
    }

    /// Add a freshly registered screen at the end of the registry.
    pub fn append(&mut self, screen: Screen) {
        self.screens.push(screen);
    }

    pub fn get(&self, id: &str) -> Option<&Screen> {
        self.screens.iter().find(|s| s.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.screens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.screens.is_empty()
    }

    /// All screens in registration order.
    pub fn screens(&self) -> &[Screen] {
        &self.screens
    }

    /// Apply a mutation to one screen. The mutation runs on a staged copy,
    /// so a failed transition leaves the stored screen untouched.
    pub fn update_with<F>(&mut self, id: &str, f: F) -> Result<Screen>
    where
        F: FnOnce(&mut Screen) -> Result<()>,
    {
        let slot = self
            .screens
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| DomainError::ScreenNotFound(id.to_string()))?;
        let mut staged = slot.clone();
        f(&mut staged)?;
        *slot = staged.clone();
        Ok(staged)
    }
}
