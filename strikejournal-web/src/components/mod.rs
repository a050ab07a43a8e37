pub mod end_screen;
pub mod entry_modal;
pub mod grid;

pub use end_screen::EndScreen;
pub use entry_modal::EntryModal;
pub use grid::JournalGrid;
