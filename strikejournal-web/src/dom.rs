use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use strikejournal_core::Viewport;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

/// Retrieve the global `window` object, if running in a browser.
#[must_use]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Retrieve the document object for DOM interactions.
#[must_use]
pub fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Log an error message to the browser console.
pub fn console_error(message: &str) {
    web_sys::console::error_1(&JsValue::from(message));
}

/// Current `innerWidth` x `innerHeight`; zero when no window is available.
#[must_use]
pub fn viewport() -> Viewport {
    let Some(win) = window() else {
        return Viewport::default();
    };
    let read = |dim: Result<JsValue, JsValue>| dim.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    Viewport::new(read(win.inner_width()), read(win.inner_height()))
}

/// Add or remove a class on `<body>`.
pub fn set_body_class(class: &str, enabled: bool) {
    let Some(body) = document().and_then(|doc| doc.body()) else {
        log::warn!("no <body> to toggle `{class}` on");
        return;
    };
    let result = if enabled {
        body.class_list().add_1(class)
    } else {
        body.class_list().remove_1(class)
    };
    if let Err(err) = result {
        log::warn!("toggling `{class}` failed: {}", js_error_message(&err));
    }
}

/// `log` backend writing to the browser console.
pub struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from(format!(
            "[{}] {}: {}",
            record.level(),
            record.target(),
            record.args()
        ));
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

/// Install [`ConsoleLogger`] as the global logger.
///
/// # Errors
/// Returns an error if another logger was already installed.
pub fn init_logging(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}
