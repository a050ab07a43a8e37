//! Page session: binds load, layout, resize, activation and dismissal events
//! to the shuffler, fit check, viewed tracker and modal.

use crate::DisplaySurface;
use crate::journal::JournalStore;
use crate::modal::{ModalController, ModalState};
use crate::shuffle::{shuffle, shuffle_seeded};
use crate::viewed::ViewedTracker;
use crate::viewport::all_items_visible;
use rand::Rng;

/// Result of activating a grid item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    Opened,
    NotFound,
}

/// Where a dismissal gesture landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissSource {
    /// The modal's explicit close control.
    CloseControl,
    /// The modal's own backdrop, not its content.
    Backdrop,
    /// Anywhere else on the page.
    Page,
}

impl DismissSource {
    #[must_use]
    pub const fn dismisses(self) -> bool {
        matches!(self, Self::CloseControl | Self::Backdrop)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DismissOutcome {
    /// The end screen became visible on this dismissal.
    pub end_revealed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageController {
    journal: JournalStore,
    order: Vec<String>,
    total_items: usize,
    viewed: ViewedTracker,
    modal: ModalController,
}

impl PageController {
    /// Build a session over `items` in their initial display order.
    ///
    /// The item count used for completion is fixed here.
    #[must_use]
    pub fn new(journal: JournalStore, items: Vec<String>) -> Self {
        let total_items = items.len();
        Self {
            journal,
            order: items,
            total_items,
            viewed: ViewedTracker::new(),
            modal: ModalController::new(),
        }
    }

    /// One grid item per journal entry.
    #[must_use]
    pub fn from_journal(journal: JournalStore) -> Self {
        let items = journal.ids().map(str::to_owned).collect();
        Self::new(journal, items)
    }

    /// Initial load: randomize the display order.
    pub fn on_load<R>(&mut self, rng: &mut R)
    where
        R: Rng + ?Sized,
    {
        shuffle(&mut self.order, rng);
    }

    pub fn on_load_seeded(&mut self, seed: u64) {
        shuffle_seeded(&mut self.order, seed);
    }

    /// Layout has settled after load; evaluate the scroll lock.
    pub fn on_layout<S>(&self, surface: &mut S) -> Option<bool>
    where
        S: DisplaySurface + ?Sized,
    {
        self.refresh_scroll_lock(surface)
    }

    pub fn on_resize<S>(&self, surface: &mut S) -> Option<bool>
    where
        S: DisplaySurface + ?Sized,
    {
        self.refresh_scroll_lock(surface)
    }

    /// Re-evaluate the fit check against live layout and apply the lock.
    ///
    /// Returns `None` without touching the surface when there are no items.
    /// While the end screen is up scrolling stays locked.
    fn refresh_scroll_lock<S>(&self, surface: &mut S) -> Option<bool>
    where
        S: DisplaySurface + ?Sized,
    {
        let bounds = surface.item_bounds();
        if bounds.is_empty() {
            return None;
        }
        let all_visible = all_items_visible(bounds, surface.viewport());
        let locked = all_visible || self.modal.end_visible();
        surface.set_scroll_lock(locked);
        Some(locked)
    }

    /// An item was clicked or tapped.
    pub fn on_activate(&mut self, id: &str) -> Activation {
        let Some(entry) = self.journal.get(id) else {
            return Activation::NotFound;
        };
        self.modal.show_entry(entry);
        self.viewed.mark_viewed(id);
        Activation::Opened
    }

    /// The entry modal was dismissed.
    pub fn on_dismiss<S>(&mut self, surface: &mut S) -> DismissOutcome
    where
        S: DisplaySurface + ?Sized,
    {
        let end_revealed = self.modal.hide_entry(&self.viewed, self.total_items);
        if end_revealed {
            surface.set_scroll_lock(true);
        }
        DismissOutcome { end_revealed }
    }

    /// A click that may dismiss the modal, depending on where it landed.
    pub fn on_dismiss_gesture<S>(
        &mut self,
        source: DismissSource,
        surface: &mut S,
    ) -> Option<DismissOutcome>
    where
        S: DisplaySurface + ?Sized,
    {
        source.dismisses().then(|| self.on_dismiss(surface))
    }

    /// Item identifiers in current display order.
    #[must_use]
    pub fn order(&self) -> &[String] {
        &self.order
    }

    #[must_use]
    pub const fn total_items(&self) -> usize {
        self.total_items
    }

    #[must_use]
    pub const fn viewed(&self) -> &ViewedTracker {
        &self.viewed
    }

    #[must_use]
    pub const fn modal(&self) -> &ModalController {
        &self.modal
    }

    #[must_use]
    pub const fn modal_state(&self) -> ModalState {
        self.modal.state()
    }

    #[must_use]
    pub const fn journal(&self) -> &JournalStore {
        &self.journal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal::JournalEntry;
    use crate::viewport::{ItemBounds, Viewport};

    #[derive(Default)]
    struct RecordingSurface {
        bounds: Vec<ItemBounds>,
        locks: Vec<bool>,
    }

    impl DisplaySurface for RecordingSurface {
        fn item_bounds(&self) -> Vec<ItemBounds> {
            self.bounds.clone()
        }

        fn viewport(&self) -> Viewport {
            Viewport::new(400.0, 300.0)
        }

        fn set_scroll_lock(&mut self, locked: bool) {
            self.locks.push(locked);
        }
    }

    fn two_item_controller() -> PageController {
        let journal = JournalStore::from_entries([
            ("1", JournalEntry::new("one")),
            ("2", JournalEntry::new("two")),
        ]);
        PageController::from_journal(journal)
    }

    #[test]
    fn activation_opens_modal_and_marks_viewed() {
        let mut ctrl = two_item_controller();
        assert_eq!(ctrl.on_activate("2"), Activation::Opened);
        assert_eq!(ctrl.modal_state(), ModalState::ShowingEntry);
        assert_eq!(ctrl.modal().body(), Some("two"));
        assert!(ctrl.viewed().has_viewed("2"));
    }

    #[test]
    fn unknown_activation_changes_nothing() {
        let mut ctrl = two_item_controller();
        assert_eq!(ctrl.on_activate("nope"), Activation::NotFound);
        assert!(ctrl.viewed().is_empty());
        assert_eq!(ctrl.modal_state(), ModalState::Hidden);
    }

    #[test]
    fn activation_alone_never_reveals_end() {
        let mut ctrl = two_item_controller();
        ctrl.on_activate("1");
        ctrl.on_activate("2");
        assert!(ctrl.viewed().is_complete(2));
        assert!(!ctrl.modal().end_visible());
    }

    #[test]
    fn page_clicks_do_not_dismiss() {
        let mut ctrl = two_item_controller();
        let mut surface = RecordingSurface::default();
        ctrl.on_activate("1");
        assert!(ctrl.on_dismiss_gesture(DismissSource::Page, &mut surface).is_none());
        assert_eq!(ctrl.modal_state(), ModalState::ShowingEntry);
        let outcome = ctrl.on_dismiss_gesture(DismissSource::Backdrop, &mut surface);
        assert_eq!(outcome, Some(DismissOutcome { end_revealed: false }));
        assert_eq!(ctrl.modal_state(), ModalState::Hidden);
    }

    #[test]
    fn empty_layout_leaves_lock_alone() {
        let ctrl = two_item_controller();
        let mut surface = RecordingSurface::default();
        assert_eq!(ctrl.on_layout(&mut surface), None);
        assert!(surface.locks.is_empty());
    }

    #[test]
    fn fit_check_toggles_lock() {
        let ctrl = two_item_controller();
        let mut surface = RecordingSurface {
            bounds: vec![ItemBounds::new(0.0, 0.0, 100.0, 100.0)],
            ..RecordingSurface::default()
        };
        assert_eq!(ctrl.on_layout(&mut surface), Some(true));
        surface.bounds.push(ItemBounds::new(250.0, 0.0, 350.0, 100.0));
        assert_eq!(ctrl.on_resize(&mut surface), Some(false));
        assert_eq!(surface.locks, vec![true, false]);
    }

    #[test]
    fn total_is_fixed_at_construction() {
        let ctrl = PageController::new(
            JournalStore::load_from_static(),
            vec!["1".into(), "2".into(), "3".into()],
        );
        assert_eq!(ctrl.total_items(), 3);
        assert_eq!(ctrl.journal().len(), 8);
    }
}
