use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::{ChannelGlyph, Corner, GlowBlob, GridBackground, Reveal, SectionWrapper};
use crate::contact::{Channel, ContactChannels};
use crate::dom::viewport::copy_to_clipboard;
use crate::icons::{HeroIcon, Icon};
use crate::motion::reveal::RevealKind;

/// How long the "Disalin!" chip stays up.
pub const COPIED_CHIP_MS: u32 = 1_200;

#[derive(Properties, PartialEq)]
pub struct ContactSectionProps {
    #[prop_or_else(|| AttrValue::from("contact"))]
    pub id: AttrValue,
    #[prop_or_else(|| AttrValue::from("Kontak Kami"))]
    pub title: AttrValue,
    #[prop_or_else(|| AttrValue::from("Butuh bantuan cepat? Hubungi kami lewat salah satu kanal berikut."))]
    pub description: AttrValue,
    #[prop_or_else(ContactChannels::landing)]
    pub channels: ContactChannels,
    #[prop_or(false)]
    pub show_glow: bool,
}

#[function_component(ContactSection)]
pub fn contact_section(props: &ContactSectionProps) -> Html {
    let copied = use_state_eq(|| None::<&'static str>);
    let chip_timer = use_mut_ref(|| None::<Timeout>);

    let copy = {
        let copied = copied.clone();
        let chip_timer = chip_timer.clone();
        Callback::from(move |(key, value): (&'static str, String)| {
            let copied = copied.clone();
            let chip_timer = chip_timer.clone();
            spawn_local(async move {
                if !copy_to_clipboard(&value).await {
                    return;
                }
                copied.set(Some(key));
                let reset = copied.clone();
                // replacing the handle cancels the previous countdown
                *chip_timer.borrow_mut() = Some(Timeout::new(COPIED_CHIP_MS, move || reset.set(None)));
            });
        })
    };

    let card = |channel: Channel| {
        let key = channel.kind.key();
        let is_copied = *copied == Some(key);
        let copy_button = channel.copy_value.clone().map(|value| {
            let copy = copy.clone();
            let onclick = Callback::from(move |_: MouseEvent| copy.emit((key, value.clone())));
            html! {
                <button class="button button-icon button-pale" aria-label="Copy" {onclick}>
                    <Icon icon={HeroIcon::ClipboardDocument} class="icon-sm" />
                </button>
            }
        });

        html! {
            <article key={key} class="card channel-card">
                <Reveal kind={RevealKind::SlideUp} duration={0.6} threshold={0.05}>
                    <div class="channel-head">
                        <div class={classes!("channel-icon", channel.kind.accent_class())}>
                            <ChannelGlyph kind={channel.kind} class="icon-md" />
                        </div>
                        <div class="channel-text">
                            <h3>{ channel.label.clone() }</h3>
                            if !channel.subtitle.is_empty() {
                                <p class="text-muted truncate">{ channel.subtitle.clone() }</p>
                            }
                        </div>
                    </div>
                </Reveal>
                <div class="channel-actions">
                    <a class="button button-primary grow" href={channel.href.clone()} target="_blank" rel="noopener noreferrer">
                        { "Buka" }
                    </a>
                    { for copy_button }
                </div>
                if is_copied {
                    <span class="chip chip-success">{ "Disalin!" }</span>
                }
            </article>
        }
    };

    let decor = html! {
        <>
            if props.show_glow {
                <GlowBlob position={Corner::TopRight} color="rgba(59, 130, 246, 0.20)" />
                <GlowBlob position={Corner::BottomLeft} color="rgba(14, 165, 233, 0.15)" />
            }
            <GridBackground size={50} major_every={3} minor_opacity={0.07} major_opacity={0.16} />
        </>
    };

    html! {
        <SectionWrapper
            id={props.id.clone()}
            title={props.title.clone()}
            description={props.description.clone()}
            class={classes!("section-dark")}
            title_class={classes!("text-white")}
            description_class={classes!("text-soft")}
            {decor}
        >
            <div class="card-grid three">
                { for props.channels.channels().into_iter().map(card) }
            </div>
            <p class="contact-hint text-muted">
                { "*Klik " }<b>{ "Buka" }</b>{ " untuk langsung chat/call. Tombol copy memudahkan menyalin nomor/username." }
            </p>
        </SectionWrapper>
    }
}
