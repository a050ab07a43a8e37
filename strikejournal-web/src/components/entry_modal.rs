use std::rc::Rc;
use strikejournal_core::{DismissSource, PageConfig};
use wasm_bindgen::JsCast;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub visible: bool,
    pub config: Rc<PageConfig>,
    pub on_dismiss: Callback<DismissSource>,
    #[prop_or_default]
    pub body: Option<AttrValue>,
}

/// Clicks that bubble up from the modal content are not backdrop clicks.
fn backdrop_source(event: &MouseEvent, backdrop: &NodeRef) -> DismissSource {
    let target = event
        .target()
        .and_then(|target| target.dyn_into::<web_sys::Node>().ok());
    match (target, backdrop.get()) {
        (Some(target), Some(backdrop)) if target == backdrop => DismissSource::Backdrop,
        _ => DismissSource::Page,
    }
}

#[function_component(EntryModal)]
pub fn entry_modal(props: &Props) -> Html {
    let backdrop_ref = use_node_ref();
    let on_backdrop = {
        let cb = props.on_dismiss.clone();
        let backdrop_ref = backdrop_ref.clone();
        Callback::from(move |e: MouseEvent| cb.emit(backdrop_source(&e, &backdrop_ref)))
    };
    let on_close = {
        let cb = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| cb.emit(DismissSource::CloseControl))
    };
    let config = &props.config;

    html! {
        <div
            id={config.modal_id.clone()}
            class={config.overlay_class(props.visible).to_owned()}
            onclick={on_backdrop}
            ref={backdrop_ref}
        >
            <div class="modal-content">
                <span class={config.close_button_class.clone()} onclick={on_close}>{"\u{00d7}"}</span>
                <div id={config.modal_body_id.clone()}>
                    { props.body.as_ref().map(|text| html! { <p>{ text.clone() }</p> }).unwrap_or_default() }
                </div>
            </div>
        </div>
    }
}
