//! DOM-backed [`DisplaySurface`] over the rendered grid.

use crate::dom;
use strikejournal_core::{DisplaySurface, ItemBounds, PageConfig, Viewport};
use wasm_bindgen::JsCast;
use web_sys::Element;

pub struct DomSurface<'a> {
    grid: Option<Element>,
    config: &'a PageConfig,
}

impl<'a> DomSurface<'a> {
    /// A missing `grid` behaves as an empty collection.
    #[must_use]
    pub fn new(grid: Option<Element>, config: &'a PageConfig) -> Self {
        Self { grid, config }
    }
}

fn bounds_of(element: &Element) -> ItemBounds {
    let rect = element.get_bounding_client_rect();
    ItemBounds::new(rect.top(), rect.left(), rect.bottom(), rect.right())
}

impl DisplaySurface for DomSurface<'_> {
    fn item_bounds(&self) -> Vec<ItemBounds> {
        let Some(grid) = self.grid.as_ref() else {
            return Vec::new();
        };
        let selector = format!(".{}", self.config.item_class);
        match grid.query_selector_all(&selector) {
            Ok(nodes) => (0..nodes.length())
                .filter_map(|i| nodes.item(i))
                .filter_map(|node| node.dyn_into::<Element>().ok())
                .map(|element| bounds_of(&element))
                .collect(),
            Err(err) => {
                log::warn!(
                    "grid item lookup for `{selector}` failed: {}",
                    dom::js_error_message(&err)
                );
                Vec::new()
            }
        }
    }

    fn viewport(&self) -> Viewport {
        dom::viewport()
    }

    fn set_scroll_lock(&mut self, locked: bool) {
        dom::set_body_class(&self.config.scroll_lock_class, locked);
    }
}
