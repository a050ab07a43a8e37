use crate::components::{EndScreen, EntryModal, JournalGrid};
use crate::surface::DomSurface;
use strikejournal_core::{Activation, DismissSource, PageConfig};
use web_sys::Element;
use yew::prelude::*;

pub mod resize;
pub mod session;

pub use session::{SharedController, new_session};

#[derive(Properties, PartialEq, Clone, Default)]
pub struct Props {
    /// Fixes the grid shuffle; drawn from the clock when unset.
    #[prop_or_default]
    pub seed: Option<u64>,
}

#[function_component(App)]
pub fn app(props: &Props) -> Html {
    let config = use_memo((), |()| PageConfig::load_from_static());
    let controller = session::use_page_session(props.seed);
    let grid_ref = use_node_ref();
    let force_update = use_force_update();

    {
        let controller = controller.clone();
        let grid_ref = grid_ref.clone();
        let config = config.clone();
        use_effect_with((), move |()| {
            let mut surface = DomSurface::new(grid_ref.cast::<Element>(), &config);
            let lock = controller.borrow().on_layout(&mut surface);
            log::debug!("initial fit check, scroll lock: {lock:?}");
            || {}
        });
    }

    let on_resize = {
        let controller = controller.clone();
        let grid_ref = grid_ref.clone();
        let config = config.clone();
        Callback::from(move |()| {
            let mut surface = DomSurface::new(grid_ref.cast::<Element>(), &config);
            controller.borrow().on_resize(&mut surface);
        })
    };
    resize::use_window_resize(on_resize);

    let on_activate = {
        let controller = controller.clone();
        let force_update = force_update.clone();
        Callback::from(move |id: String| {
            let outcome = controller.borrow_mut().on_activate(&id);
            log::debug!("activated item {id:?}: {outcome:?}");
            if outcome == Activation::Opened {
                force_update.force_update();
            }
        })
    };

    let on_dismiss = {
        let controller = controller.clone();
        let grid_ref = grid_ref.clone();
        let config = config.clone();
        Callback::from(move |source: DismissSource| {
            let mut surface = DomSurface::new(grid_ref.cast::<Element>(), &config);
            let outcome = controller
                .borrow_mut()
                .on_dismiss_gesture(source, &mut surface);
            let Some(outcome) = outcome else {
                return;
            };
            if outcome.end_revealed {
                log::info!("every entry viewed, showing end screen");
            }
            force_update.force_update();
        })
    };

    let view = controller.borrow();
    let modal = view.modal();
    html! {
        <main class="strike-journal">
            <JournalGrid
                order={view.order().to_vec()}
                config={config.clone()}
                on_activate={on_activate}
                grid_ref={grid_ref}
            />
            <EntryModal
                visible={modal.entry_visible()}
                body={modal.body().map(|text| AttrValue::from(text.to_owned()))}
                config={config.clone()}
                on_dismiss={on_dismiss}
            />
            <EndScreen visible={modal.end_visible()} config={config} />
        </main>
    }
}
