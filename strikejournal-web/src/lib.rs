#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod app;
pub mod components;
pub mod dom;
pub mod surface;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    if let Err(err) = boot() {
        dom::console_error(&format!("strike journal failed to start: {err:#}"));
    }
}

#[cfg(target_arch = "wasm32")]
fn boot() -> anyhow::Result<()> {
    use anyhow::Context;

    dom::init_logging(log::LevelFilter::Info).context("installing console logger")?;
    log::info!("mounting strike journal");
    yew::Renderer::<app::App>::new().render();
    Ok(())
}
