use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

use crate::dom::viewport::set_scroll_locked;
use crate::dom::WindowListener;
use crate::icons::{HeroIcon, Icon};

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(true)]
    pub close_button: bool,
    #[prop_or_default]
    pub children: Children,
}

/// Overlay dialog. Closes on backdrop click and Escape, and locks page
/// scrolling while open.
#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    {
        let on_close = props.on_close.clone();
        use_effect_with_deps(
            move |open: &bool| {
                let escape = open
                    .then(|| {
                        set_scroll_locked(true);
                        WindowListener::new("keydown", move |e| {
                            if e.dyn_ref::<KeyboardEvent>().map(|k| k.key() == "Escape").unwrap_or(false) {
                                on_close.emit(());
                            }
                        })
                    })
                    .flatten();
                let locked = *open;
                move || {
                    drop(escape);
                    if locked {
                        set_scroll_locked(false);
                    }
                }
            },
            props.open,
        );
    }

    if !props.open {
        return html! {};
    }

    let on_backdrop = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="modal-backdrop" onclick={on_backdrop}>
            <div class={classes!("modal-panel", props.class.clone())} role="dialog" aria-modal="true" onclick={stop}>
                if props.close_button {
                    <button class="modal-close" aria-label="Tutup" onclick={close}>
                        <Icon icon={HeroIcon::XMark} class="icon-sm" />
                    </button>
                }
                { for props.children.iter() }
            </div>
        </div>
    }
}
