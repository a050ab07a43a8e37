use std::rc::Rc;

use futures::executor::block_on;
use strikejournal_core::{JournalStore, PageConfig};
use strikejournal_web::app::{App, Props, new_session};
use strikejournal_web::components::end_screen::{self, EndScreen};
use strikejournal_web::components::grid::ENTRY_ATTRIBUTE;
use yew::LocalServerRenderer;

fn render_app(seed: u64) -> String {
    block_on(LocalServerRenderer::<App>::with_props(Props { seed: Some(seed) }).render())
}

#[test]
fn app_renders_every_entry_in_shuffled_order() {
    let html = render_app(0x00C0_FFEE);
    let expected = new_session(JournalStore::load_from_static(), 0x00C0_FFEE);

    let positions: Vec<usize> = expected
        .order()
        .iter()
        .map(|id| {
            html.find(&format!("{ENTRY_ATTRIBUTE}=\"{id}\""))
                .unwrap_or_else(|| panic!("item {id} missing from\n{html}"))
        })
        .collect();
    assert_eq!(positions.len(), 8);
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "grid order differs");
}

#[test]
fn app_starts_with_both_overlays_hidden() {
    let html = render_app(1);
    assert!(html.contains("id=\"journal-modal\""));
    assert!(html.contains("id=\"end-screen\""));
    assert!(!html.contains("modal-visible"));
    assert_eq!(html.matches("modal-hidden").count(), 2);
}

#[test]
fn same_seed_renders_identically() {
    assert_eq!(render_app(7), render_app(7));
}

#[test]
fn end_screen_shows_configured_copy() {
    let config = Rc::new(PageConfig::load_from_static());
    let props = end_screen::Props {
        visible: true,
        config: config.clone(),
    };
    let html = block_on(LocalServerRenderer::<EndScreen>::with_props(props).render());
    assert!(html.contains("modal-visible"));
    assert!(html.contains(&config.end_title));
}
