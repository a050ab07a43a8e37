use std::cell::RefCell;
use std::rc::Rc;
use strikejournal_core::{JournalStore, PageController};
use yew::prelude::*;

/// The page session shared by yew callbacks and the window resize listener.
pub type SharedController = Rc<RefCell<PageController>>;

/// Build the page session and run the initial-load shuffle.
#[must_use]
pub fn new_session(journal: JournalStore, seed: u64) -> PageController {
    let mut controller = PageController::from_journal(journal);
    controller.on_load_seeded(seed);
    controller
}

#[cfg(target_arch = "wasm32")]
#[must_use]
pub fn entropy() -> u64 {
    js_sys::Date::now().to_bits()
}

#[cfg(not(target_arch = "wasm32"))]
#[must_use]
pub fn entropy() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_secs() ^ u64::from(elapsed.subsec_nanos()))
}

/// Session for this page load. `seed` pins the shuffle; `None` draws one.
#[hook]
pub fn use_page_session(seed: Option<u64>) -> SharedController {
    use_mut_ref(move || {
        let seed = seed.unwrap_or_else(entropy);
        let controller = new_session(JournalStore::load_from_static(), seed);
        log::debug!("grid order for seed {seed:#x}: {:?}", controller.order());
        controller
    })
}
