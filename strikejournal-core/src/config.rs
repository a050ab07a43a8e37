use serde::{Deserialize, Serialize};
use thiserror::Error;

const STATIC_PAGE_CONFIG: &str = include_str!("../data/page.json");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("page config is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Names and copy the browser front end binds to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageConfig {
    #[serde(default = "PageConfig::default_grid_class")]
    pub grid_class: String,
    #[serde(default = "PageConfig::default_item_class")]
    pub item_class: String,
    #[serde(default = "PageConfig::default_modal_id")]
    pub modal_id: String,
    #[serde(default = "PageConfig::default_modal_body_id")]
    pub modal_body_id: String,
    #[serde(default = "PageConfig::default_close_button_class")]
    pub close_button_class: String,
    #[serde(default = "PageConfig::default_end_screen_id")]
    pub end_screen_id: String,
    #[serde(default = "PageConfig::default_visible_class")]
    pub visible_class: String,
    #[serde(default = "PageConfig::default_hidden_class")]
    pub hidden_class: String,
    /// Class toggled on `<body>` while scrolling is locked.
    #[serde(default = "PageConfig::default_scroll_lock_class")]
    pub scroll_lock_class: String,
    #[serde(default)]
    pub end_title: String,
    #[serde(default)]
    pub end_message: String,
}

impl PageConfig {
    fn default_grid_class() -> String {
        "video-grid".into()
    }

    fn default_item_class() -> String {
        "video-item".into()
    }

    fn default_modal_id() -> String {
        "journal-modal".into()
    }

    fn default_modal_body_id() -> String {
        "modal-body".into()
    }

    fn default_close_button_class() -> String {
        "close-button".into()
    }

    fn default_end_screen_id() -> String {
        "end-screen".into()
    }

    fn default_visible_class() -> String {
        "modal-visible".into()
    }

    fn default_hidden_class() -> String {
        "modal-hidden".into()
    }

    fn default_scroll_lock_class() -> String {
        "no-scroll".into()
    }

    /// Load page configuration from JSON string
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed into a page config.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The configuration embedded in the crate, or defaults if it fails to parse.
    #[must_use]
    pub fn load_from_static() -> Self {
        Self::from_json(STATIC_PAGE_CONFIG).unwrap_or_default()
    }

    /// Class for an overlay in the given visibility.
    #[must_use]
    pub fn overlay_class(&self, visible: bool) -> &str {
        if visible {
            &self.visible_class
        } else {
            &self.hidden_class
        }
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            grid_class: Self::default_grid_class(),
            item_class: Self::default_item_class(),
            modal_id: Self::default_modal_id(),
            modal_body_id: Self::default_modal_body_id(),
            close_button_class: Self::default_close_button_class(),
            end_screen_id: Self::default_end_screen_id(),
            visible_class: Self::default_visible_class(),
            hidden_class: Self::default_hidden_class(),
            scroll_lock_class: Self::default_scroll_lock_class(),
            end_title: String::new(),
            end_message: String::new(),
        }
    }
}
