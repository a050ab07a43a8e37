//! Presentation state for the entry modal and the end screen.
//!
//! The two overlays are tracked as independent flags. Readers that want a
//! single answer use [`ModalController::state`], where the end screen wins.

use crate::journal::JournalEntry;
use crate::viewed::ViewedTracker;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Visibility {
    #[default]
    Hidden,
    Visible,
}

impl Visibility {
    #[must_use]
    pub const fn is_visible(self) -> bool {
        matches!(self, Self::Visible)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModalState {
    Hidden,
    ShowingEntry,
    ShowingEnd,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ModalController {
    entry: Visibility,
    end: Visibility,
    body: Option<String>,
}

impl ModalController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the modal body with `entry` and show the modal.
    pub fn show_entry(&mut self, entry: &JournalEntry) {
        self.body = Some(entry.content.clone());
        self.entry = Visibility::Visible;
    }

    /// Hide the modal, then reveal the end screen if every item has been
    /// viewed. Returns `true` when this call revealed the end screen.
    pub fn hide_entry(&mut self, viewed: &ViewedTracker, total: usize) -> bool {
        self.entry = Visibility::Hidden;
        self.check_end_condition(viewed, total)
    }

    /// Show the end screen. There is no way back out of it.
    pub fn show_end(&mut self) {
        self.end = Visibility::Visible;
    }

    fn check_end_condition(&mut self, viewed: &ViewedTracker, total: usize) -> bool {
        if !viewed.is_complete(total) {
            return false;
        }
        let newly_revealed = !self.end.is_visible();
        self.show_end();
        newly_revealed
    }

    #[must_use]
    pub const fn entry_visibility(&self) -> Visibility {
        self.entry
    }

    #[must_use]
    pub const fn end_visibility(&self) -> Visibility {
        self.end
    }

    #[must_use]
    pub const fn entry_visible(&self) -> bool {
        self.entry.is_visible()
    }

    #[must_use]
    pub const fn end_visible(&self) -> bool {
        self.end.is_visible()
    }

    /// Text currently injected into the modal body.
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    #[must_use]
    pub const fn state(&self) -> ModalState {
        match (self.entry, self.end) {
            (_, Visibility::Visible) => ModalState::ShowingEnd,
            (Visibility::Visible, Visibility::Hidden) => ModalState::ShowingEntry,
            (Visibility::Hidden, Visibility::Hidden) => ModalState::Hidden,
        }
    }
}
