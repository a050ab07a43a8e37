use std::rc::Rc;
use strikejournal_core::PageConfig;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub visible: bool,
    pub config: Rc<PageConfig>,
}

#[function_component(EndScreen)]
pub fn end_screen(props: &Props) -> Html {
    let config = &props.config;
    html! {
        <div id={config.end_screen_id.clone()} class={config.overlay_class(props.visible).to_owned()}>
            <div class="modal-content">
                <h2>{ config.end_title.clone() }</h2>
                <p>{ config.end_message.clone() }</p>
            </div>
        </div>
    }
}
