use yew::prelude::*;

use super::brand_icon::ChannelGlyph;
use super::modal::Modal;
use crate::contact::{Channel, PackageContactMethods};
use crate::dom::viewport::open_in_new_tab;

#[derive(Properties, PartialEq)]
pub struct ContactModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
    pub package_name: AttrValue,
    #[prop_or_default]
    pub methods: PackageContactMethods,
}

/// Asks how to get in touch about a pricing package. Choosing a method
/// opens it in a new tab and closes the dialog.
#[function_component(ContactModal)]
pub fn contact_modal(props: &ContactModalProps) -> Html {
    let options = props.methods.for_package(&props.package_name);

    let card = |channel: Channel| {
        let onclick = {
            let on_close = props.on_close.clone();
            let href = channel.href.clone();
            Callback::from(move |_: MouseEvent| {
                open_in_new_tab(&href);
                on_close.emit(());
            })
        };
        html! {
            <button key={channel.kind.key()} class={classes!("method-card", channel.kind.accent_class())} {onclick}>
                <ChannelGlyph kind={channel.kind} class="icon-md" />
                <span class="method-text">
                    <span class="method-label">{ channel.label }</span>
                    <span class="method-value">{ channel.subtitle }</span>
                </span>
            </button>
        }
    };

    let cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <Modal open={props.open} on_close={props.on_close.clone()} class={classes!("contact-modal")} close_button={false}>
            <div class="modal-header">
                <h3>{ "Pilih Metode Kontak" }</h3>
                <p class="text-muted">
                    { "Bagaimana Anda ingin menghubungi kami untuk paket " }
                    <strong>{ props.package_name.clone() }</strong>
                    { "?" }
                </p>
            </div>
            <div class="modal-body method-list">
                { for options.into_iter().map(card) }
            </div>
            <div class="modal-footer">
                <button class="button button-ghost button-block" onclick={cancel}>{ "Batal" }</button>
            </div>
        </Modal>
    }
}
