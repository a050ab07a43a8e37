use crate::dom;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Event;
use yew::prelude::*;

/// Subscribe `on_resize` to the window `resize` event for the component's
/// lifetime. Every event is forwarded; nothing is debounced.
#[hook]
pub fn use_window_resize(on_resize: Callback<()>) {
    use_effect_with((), move |()| {
        let listener = dom::window().map(|win| {
            let closure = Closure::<dyn FnMut(Event)>::new(move |_: Event| on_resize.emit(()));
            if let Err(err) = win
                .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
            {
                log::warn!(
                    "resize listener not attached: {}",
                    dom::js_error_message(&err)
                );
            }
            (win, closure)
        });
        move || {
            if let Some((win, closure)) = listener {
                let _ = win.remove_event_listener_with_callback(
                    "resize",
                    closure.as_ref().unchecked_ref(),
                );
            }
        }
    });
}
