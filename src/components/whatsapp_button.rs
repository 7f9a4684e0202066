use gloo_timers::callback::Timeout;
use yew::prelude::*;

use super::modal::Modal;
use crate::contact::{floating_action, floating_contacts, section_in_view, FloatingAction, WhatsAppContact};
use crate::dom::viewport::open_in_new_tab;
use crate::dom::WindowListener;
use crate::icons::{FilledIcon, WHATSAPP_PATH};

const APPEAR_AFTER_MS: u32 = 1_500;

#[derive(Properties, PartialEq)]
pub struct WhatsAppButtonProps {
    #[prop_or_else(floating_contacts)]
    pub contacts: Vec<WhatsAppContact>,
    #[prop_or_default]
    pub default_contact: Option<WhatsAppContact>,
    #[prop_or(true)]
    pub picker: bool,
}

#[function_component(WhatsAppButton)]
pub fn whatsapp_button(props: &WhatsAppButtonProps) -> Html {
    let mounted = use_state_eq(|| false);
    let over_contact = use_state_eq(|| false);
    let picker_open = use_state_eq(|| false);

    {
        let mounted = mounted.clone();
        let over_contact = over_contact.clone();
        use_effect_with_deps(
            move |_| {
                let appear = Timeout::new(APPEAR_AFTER_MS, move || mounted.set(true));
                let check = move || {
                    let Some(window) = web_sys::window() else {
                        return;
                    };
                    let height = window.inner_height().ok().and_then(|h| h.as_f64()).unwrap_or(0.0);
                    if let Some(section) = window.document().and_then(|d| d.get_element_by_id("contact")) {
                        let rect = section.get_bounding_client_rect();
                        over_contact.set(section_in_view(rect.top(), rect.bottom(), height));
                    }
                };
                check();
                let listener = WindowListener::new("scroll", move |_| check());
                move || {
                    drop(appear);
                    drop(listener);
                }
            },
            (),
        );
    }

    let onclick = {
        let picker_open = picker_open.clone();
        let action = floating_action(&props.contacts, props.default_contact.as_ref(), props.picker);
        Callback::from(move |_: MouseEvent| match &action {
            FloatingAction::Choose => picker_open.set(true),
            FloatingAction::Open(url) => open_in_new_tab(url),
            FloatingAction::Nothing => {}
        })
    };
    let close = {
        let picker_open = picker_open.clone();
        Callback::from(move |_| picker_open.set(false))
    };

    let shown = *mounted && !*over_contact;
    let contact_button = |contact: &WhatsAppContact| {
        let url = contact.url();
        let picker_open = picker_open.clone();
        let onclick = Callback::from(move |_: MouseEvent| {
            open_in_new_tab(&url);
            picker_open.set(false);
        });
        html! {
            <button class="method-card accent-emerald" {onclick}>
                <FilledIcon path={WHATSAPP_PATH} class="icon-md brand-whatsapp" />
                <span class="method-text">
                    <span class="method-label">{ contact.name.clone().unwrap_or_else(|| "WhatsApp".to_string()) }</span>
                    <span class="method-value">{ contact.display_number() }</span>
                </span>
            </button>
        }
    };

    html! {
        <>
            <div class={classes!("floating-whatsapp", shown.then_some("visible"))} aria-hidden={(!shown).to_string()}>
                <button class="floating-whatsapp-button" aria-label="Chat dengan WhatsApp"
                    tabindex={if shown { "0" } else { "-1" }} {onclick}>
                    <FilledIcon path={WHATSAPP_PATH} class="icon-lg" />
                </button>
            </div>
            <Modal open={*picker_open} on_close={close}>
                <div class="modal-header">
                    <h3>{ "Pilih Kontak WhatsApp" }</h3>
                </div>
                <div class="modal-body method-list">
                    { for props.contacts.iter().map(contact_button) }
                </div>
            </Modal>
        </>
    }
}
