//! Strike Journal Core
//!
//! Platform-agnostic logic for the Strike Journal page: grid shuffling,
//! viewport fit checks, viewed-entry tracking and the modal/end-screen state
//! machine. This crate has no browser dependencies; hosts provide a
//! [`DisplaySurface`] and forward their events to [`PageController`].

pub mod config;
pub mod controller;
pub mod journal;
pub mod modal;
pub mod shuffle;
pub mod viewed;
pub mod viewport;

// Re-export commonly used types
pub use config::{ConfigError, PageConfig};
pub use controller::{Activation, DismissOutcome, DismissSource, PageController};
pub use journal::{JournalEntry, JournalError, JournalStore};
pub use modal::{ModalController, ModalState, Visibility};
pub use shuffle::{shuffle, shuffle_seeded};
pub use viewed::ViewedTracker;
pub use viewport::{ItemBounds, Viewport, all_items_visible};

/// Trait for abstracting the live page layout
/// Platform-specific implementations should provide this
pub trait DisplaySurface {
    /// Current bounding rectangles of every grid item, in display order.
    fn item_bounds(&self) -> Vec<ItemBounds>;

    /// Current viewport dimensions.
    fn viewport(&self) -> Viewport;

    /// Enable or disable the page-wide scroll lock.
    fn set_scroll_lock(&mut self, locked: bool);
}
