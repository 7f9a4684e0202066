use yew::prelude::*;

use crate::color::safe_color_on_dark;
use crate::contact::{ChannelIcon, ChannelKind};
use crate::content::{initials, TechIcon};
use crate::icons::{FilledIcon, Icon};

pub const SIMPLE_ICONS_CDN: &str = "https://cdn.simpleicons.org";

/// Tinted brand glyph url, readable on the dark surface.
pub fn simple_icon_url(name: &str, slug: &str, hex: &str) -> String {
    format!("{SIMPLE_ICONS_CDN}/{slug}/{}", safe_color_on_dark(name, hex))
}

#[derive(Properties, PartialEq)]
pub struct TechLogoProps {
    pub name: &'static str,
    pub icon: TechIcon,
}

/// Logo tile for one technology. A brand image that fails to load is
/// replaced by the monogram.
#[function_component(TechLogo)]
pub fn tech_logo(props: &TechLogoProps) -> Html {
    let failed = use_state(|| false);
    let onerror = {
        let failed = failed.clone();
        Callback::from(move |_: Event| failed.set(true))
    };

    let monogram = |text: String| html! { <div class="tech-initials">{ text }</div> };

    match props.icon {
        TechIcon::Vector { .. } | TechIcon::Local(_) if *failed => monogram(initials(props.name)),
        TechIcon::Vector { slug, hex } => html! {
            <img
                class="tech-logo"
                src={simple_icon_url(props.name, slug, hex)}
                alt={props.name}
                title={props.name}
                width="48"
                height="48"
                loading="lazy"
                {onerror}
            />
        },
        TechIcon::Local(src) => html! {
            <img class="tech-logo tech-logo-local" src={src} alt={props.name} height="48" loading="lazy" {onerror} />
        },
        TechIcon::Initials(text) => monogram(text.to_string()),
    }
}

#[derive(Properties, PartialEq)]
pub struct ChannelGlyphProps {
    pub kind: ChannelKind,
    #[prop_or_else(|| AttrValue::from("channel-glyph"))]
    pub class: AttrValue,
}

#[function_component(ChannelGlyph)]
pub fn channel_glyph(props: &ChannelGlyphProps) -> Html {
    match props.kind.icon() {
        ChannelIcon::Brand(path) => html! { <FilledIcon path={path} class={props.class.clone()} /> },
        ChannelIcon::Outline(icon) => html! { <Icon icon={icon} class={props.class.clone()} /> },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_brands_are_lightened() {
        assert_eq!(simple_icon_url("Next.js", "nextdotjs", "000000"), "https://cdn.simpleicons.org/nextdotjs/E6EAF2");
        assert_eq!(simple_icon_url("React", "react", "61DAFB"), "https://cdn.simpleicons.org/react/61DAFB");
    }
}
