use serde::{Deserialize, Serialize};

/// Bounding rectangle of a grid item, in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct ItemBounds {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl ItemBounds {
    #[must_use]
    pub const fn new(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// Whether this rectangle lies fully inside `[0, width] x [0, height]`.
    #[must_use]
    pub fn fits_within(&self, viewport: Viewport) -> bool {
        self.top >= 0.0
            && self.left >= 0.0
            && self.bottom <= viewport.height
            && self.right <= viewport.width
    }
}

/// Viewport dimensions in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Returns true when every item fits in the viewport.
///
/// The scan stops at the first item that does not fit. An empty collection
/// is vacuously visible.
#[must_use]
pub fn all_items_visible<I>(items: I, viewport: Viewport) -> bool
where
    I: IntoIterator<Item = ItemBounds>,
{
    items.into_iter().all(|item| item.fits_within(viewport))
}
