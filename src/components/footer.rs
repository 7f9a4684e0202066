use chrono::Datelike;
use yew::prelude::*;

use super::brand_icon::ChannelGlyph;
use crate::config::{CONTACT, SITE};
use crate::contact::{ContactChannels, Channel};
use crate::content::NAV_ITEMS;

const LEGAL_NAME: &str = "Ngodingin";

pub fn copyright_line(year: i32) -> String {
    format!("© {year} {LEGAL_NAME}. All rights reserved.")
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();
    let channels = ContactChannels::landing().channels();

    let channel = |c: Channel| {
        html! {
            <a key={c.kind.key()} href={c.href} target="_blank" rel="noopener noreferrer"
                class="footer-channel" aria-label={c.label.clone()}>
                <ChannelGlyph kind={c.kind} class="icon-sm" />
                <span>{ c.subtitle }</span>
            </a>
        }
    };

    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <div class="footer-brand">
                    <span class="footer-logo">{ SITE.name }</span>
                    <p class="text-muted">{ SITE.description }</p>
                    <p class="text-muted footer-location">{ CONTACT.location }</p>
                </div>
                <nav class="footer-links" aria-label="Footer">
                    { for NAV_ITEMS.iter().map(|item| html! {
                        <a href={format!("/{}", item.href)}>{ item.label }</a>
                    }) }
                </nav>
                <div class="footer-channels">
                    { for channels.into_iter().map(channel) }
                </div>
            </div>
            <div class="footer-legal">
                <p>{ copyright_line(year) }</p>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_names_site_and_year() {
        assert_eq!(copyright_line(2026), "© 2026 Ngodingin. All rights reserved.");
    }
}
