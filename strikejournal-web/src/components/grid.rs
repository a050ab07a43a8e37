use std::rc::Rc;
use strikejournal_core::PageConfig;
use yew::prelude::*;

/// Attribute carrying each grid item's journal identifier.
pub const ENTRY_ATTRIBUTE: &str = "data-entry-id";

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub order: Vec<String>,
    pub config: Rc<PageConfig>,
    pub on_activate: Callback<String>,
    #[prop_or_default]
    pub grid_ref: NodeRef,
}

#[function_component(JournalGrid)]
pub fn journal_grid(props: &Props) -> Html {
    let items = props.order.iter().map(|id| {
        let onclick = {
            let cb = props.on_activate.clone();
            let id = id.clone();
            Callback::from(move |_: MouseEvent| cb.emit(id.clone()))
        };
        html! {
            <div key={id.clone()} class={props.config.item_class.clone()} data-entry-id={id.clone()} {onclick}>
                <span class="video-item__label">{ format!("Entry {id}") }</span>
            </div>
        }
    });

    html! {
        <div class={props.config.grid_class.clone()} ref={props.grid_ref.clone()}>
            { for items }
        </div>
    }
}
