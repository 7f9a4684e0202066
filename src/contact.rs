//! Contact channels and the outbound links built from them.

use crate::config::CONTACT;
use crate::icons::HeroIcon;

pub const DEFAULT_WHATSAPP_TEXT: &str = "Halo! Saya tertarik untuk konsultasi terkait tugas akhir.";
pub const LANDING_WHATSAPP_TEXT: &str = "Halo, saya butuh bantuan untuk ngoding sistem 🙌";
pub const MAPS_SEARCH_URL: &str = "https://www.google.com/maps/search/?api=1&query=";

/// Keeps digits and `+`, drops one leading `+`, turns a leading `0` into the
/// Indonesian country code. Idempotent for input with at most one leading
/// `+`.
pub fn normalize_phone(raw: &str) -> String {
    let kept: String = raw.chars().filter(|c| c.is_ascii_digit() || *c == '+').collect();
    let kept = kept.strip_prefix('+').unwrap_or(&kept);
    match kept.strip_prefix('0') {
        Some(rest) => format!("62{rest}"),
        None => kept.to_string(),
    }
}

/// Percent-encodes like `encodeURIComponent`: `! ' ( ) *` stay literal.
pub fn encode_uri_component(text: &str) -> String {
    urlencoding::encode(text)
        .replace("%21", "!")
        .replace("%27", "'")
        .replace("%28", "(")
        .replace("%29", ")")
        .replace("%2A", "*")
}

fn strip_at(handle: &str) -> &str {
    handle.strip_prefix('@').unwrap_or(handle)
}

pub fn whatsapp_url(number: &str, text: &str) -> String {
    format!("https://wa.me/{}?text={}", normalize_phone(number), encode_uri_component(text))
}

pub fn tel_url(number: &str) -> String {
    format!("tel:+{}", normalize_phone(number))
}

pub fn mailto_url(address: &str, subject: Option<&str>, body: Option<&str>) -> String {
    let mut query = Vec::new();
    if let Some(subject) = subject {
        query.push(format!("subject={}", encode_uri_component(subject)));
    }
    if let Some(body) = body {
        query.push(format!("body={}", encode_uri_component(body)));
    }
    if query.is_empty() {
        format!("mailto:{address}")
    } else {
        format!("mailto:{address}?{}", query.join("&"))
    }
}

pub fn telegram_url(user: &str) -> String {
    format!("https://t.me/{}", strip_at(user))
}

pub fn instagram_url(user: &str) -> String {
    format!("https://instagram.com/{}", strip_at(user))
}

pub fn maps_url(location: &str) -> String {
    format!("{MAPS_SEARCH_URL}{}", encode_uri_component(location))
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhatsAppContact {
    pub name: Option<String>,
    pub number: String,
    pub prefilled_text: Option<String>,
}

impl WhatsAppContact {
    pub fn new(number: impl Into<String>) -> Self {
        WhatsAppContact { name: None, number: number.into(), prefilled_text: None }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.prefilled_text = Some(text.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn url(&self) -> String {
        whatsapp_url(&self.number, self.prefilled_text.as_deref().unwrap_or(DEFAULT_WHATSAPP_TEXT))
    }

    pub fn display_number(&self) -> String {
        format!("+{}", normalize_phone(&self.number))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelKind {
    WhatsApp,
    Phone,
    Email,
    Telegram,
    Instagram,
    Location,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChannelIcon {
    Brand(&'static str),
    Outline(HeroIcon),
}

impl ChannelKind {
    pub fn key(self) -> &'static str {
        match self {
            ChannelKind::WhatsApp => "whatsapp",
            ChannelKind::Phone => "phone",
            ChannelKind::Email => "email",
            ChannelKind::Telegram => "telegram",
            ChannelKind::Instagram => "instagram",
            ChannelKind::Location => "location",
        }
    }

    pub fn icon(self) -> ChannelIcon {
        match self {
            ChannelKind::WhatsApp => ChannelIcon::Brand(crate::icons::WHATSAPP_PATH),
            ChannelKind::Telegram => ChannelIcon::Brand(crate::icons::TELEGRAM_PATH),
            ChannelKind::Instagram => ChannelIcon::Brand(crate::icons::INSTAGRAM_PATH),
            ChannelKind::Phone => ChannelIcon::Outline(HeroIcon::Phone),
            ChannelKind::Email => ChannelIcon::Outline(HeroIcon::Envelope),
            ChannelKind::Location => ChannelIcon::Outline(HeroIcon::MapPin),
        }
    }

    /// Tailwind-ish accent used for the icon tile.
    pub fn accent_class(self) -> &'static str {
        match self {
            ChannelKind::WhatsApp => "accent-emerald",
            ChannelKind::Phone => "accent-sky",
            ChannelKind::Email => "accent-brand",
            ChannelKind::Telegram => "accent-indigo",
            ChannelKind::Instagram => "accent-pink",
            ChannelKind::Location => "accent-amber",
        }
    }
}

/// One rendered contact card.
#[derive(Debug, Clone, PartialEq)]
pub struct Channel {
    pub kind: ChannelKind,
    pub label: String,
    pub subtitle: String,
    pub href: String,
    pub copy_value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactChannels {
    pub whatsapp: Option<WhatsAppContact>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub telegram: Option<String>,
    pub instagram: Option<String>,
    pub location: Option<String>,
}

impl ContactChannels {
    /// Channels shown in the landing contact section.
    pub fn landing() -> Self {
        ContactChannels {
            whatsapp: Some(WhatsAppContact::new(CONTACT.whatsapp).with_text(LANDING_WHATSAPP_TEXT)),
            email: Some(CONTACT.email.to_string()),
            instagram: Some(CONTACT.instagram.to_string()),
            ..Default::default()
        }
    }

    /// Cards in fixed order: whatsapp, phone, email, telegram, instagram,
    /// location. Blank entries are skipped.
    pub fn channels(&self) -> Vec<Channel> {
        let mut list = Vec::new();
        let present = |v: &Option<String>| v.as_deref().map(str::trim).filter(|s| !s.is_empty()).map(str::to_string);

        if let Some(wa) = self.whatsapp.as_ref().filter(|wa| !wa.number.trim().is_empty()) {
            list.push(Channel {
                kind: ChannelKind::WhatsApp,
                label: wa.name.clone().unwrap_or_else(|| "WhatsApp".to_string()),
                subtitle: wa.display_number(),
                href: wa.url(),
                copy_value: Some(wa.display_number()),
            });
        }
        if let Some(phone) = present(&self.phone) {
            let shown = format!("+{}", normalize_phone(&phone));
            list.push(Channel {
                kind: ChannelKind::Phone,
                label: "Telepon".to_string(),
                subtitle: shown.clone(),
                href: tel_url(&phone),
                copy_value: Some(shown),
            });
        }
        if let Some(email) = present(&self.email) {
            list.push(Channel {
                kind: ChannelKind::Email,
                label: "Email".to_string(),
                subtitle: email.clone(),
                href: mailto_url(&email, None, None),
                copy_value: Some(email),
            });
        }
        if let Some(telegram) = present(&self.telegram) {
            let handle = format!("@{}", strip_at(&telegram));
            list.push(Channel {
                kind: ChannelKind::Telegram,
                label: "Telegram".to_string(),
                subtitle: handle.clone(),
                href: telegram_url(&telegram),
                copy_value: Some(handle),
            });
        }
        if let Some(instagram) = present(&self.instagram) {
            let handle = format!("@{}", strip_at(&instagram));
            list.push(Channel {
                kind: ChannelKind::Instagram,
                label: "Instagram".to_string(),
                subtitle: handle.clone(),
                href: instagram_url(&instagram),
                copy_value: Some(handle),
            });
        }
        if let Some(location) = present(&self.location) {
            list.push(Channel {
                kind: ChannelKind::Location,
                label: "Lokasi".to_string(),
                subtitle: location.clone(),
                href: maps_url(&location),
                copy_value: None,
            });
        }
        list
    }
}

/// Contact options offered after choosing a pricing package.
#[derive(Debug, Clone, PartialEq)]
pub struct PackageContactMethods {
    pub whatsapp: Option<WhatsAppContact>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub telegram: Option<String>,
}

impl Default for PackageContactMethods {
    fn default() -> Self {
        PackageContactMethods {
            whatsapp: Some(WhatsAppContact::new(CONTACT.whatsapp)),
            phone: Some(CONTACT.phone_display.to_string()),
            email: Some(CONTACT.email.to_string()),
            telegram: None,
        }
    }
}

pub fn package_whatsapp_text(package: &str) -> String {
    format!("Halo! Saya tertarik dengan paket {package}. Bisa dibantu informasi lebih lanjut?")
}

pub fn package_email_subject(package: &str) -> String {
    format!("Konsultasi Paket {package}")
}

pub fn package_email_body(package: &str) -> String {
    format!("Halo! Saya tertarik dengan paket {package}. Mohon informasi lebih lanjut.")
}

impl PackageContactMethods {
    /// Options for one package, in order whatsapp, phone, email, telegram.
    pub fn for_package(&self, package: &str) -> Vec<Channel> {
        let mut list = Vec::new();
        if let Some(wa) = &self.whatsapp {
            let text = wa
                .prefilled_text
                .clone()
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| package_whatsapp_text(package));
            list.push(Channel {
                kind: ChannelKind::WhatsApp,
                label: "WhatsApp".to_string(),
                subtitle: wa.display_number(),
                href: whatsapp_url(&wa.number, &text),
                copy_value: None,
            });
        }
        if let Some(phone) = &self.phone {
            list.push(Channel {
                kind: ChannelKind::Phone,
                label: "Telepon".to_string(),
                subtitle: format!("+{}", normalize_phone(phone)),
                href: tel_url(phone),
                copy_value: None,
            });
        }
        if let Some(email) = &self.email {
            list.push(Channel {
                kind: ChannelKind::Email,
                label: "Email".to_string(),
                subtitle: email.clone(),
                href: mailto_url(
                    email,
                    Some(&package_email_subject(package)),
                    Some(&package_email_body(package)),
                ),
                copy_value: None,
            });
        }
        if let Some(telegram) = &self.telegram {
            list.push(Channel {
                kind: ChannelKind::Telegram,
                label: "Telegram".to_string(),
                subtitle: format!("@{}", strip_at(telegram)),
                href: telegram_url(telegram),
                copy_value: None,
            });
        }
        list
    }
}

/// Contacts offered by the floating WhatsApp button.
pub fn floating_contacts() -> Vec<WhatsAppContact> {
    vec![
        WhatsAppContact::new(CONTACT.whatsapp)
            .with_name("Admin Ngodingin")
            .with_text("Halo! Saya tertarik untuk konsultasi terkait pembuatan aplikasi."),
        WhatsAppContact::new(CONTACT.whatsapp)
            .with_name("Technical Support")
            .with_text("Halo! Saya butuh bantuan teknis."),
    ]
}

#[derive(Debug, Clone, PartialEq)]
pub enum FloatingAction {
    /// Open the picker.
    Choose,
    /// Go straight to this chat url.
    Open(String),
    Nothing,
}

/// What a click on the floating button does.
pub fn floating_action(contacts: &[WhatsAppContact], default: Option<&WhatsAppContact>, picker: bool) -> FloatingAction {
    if picker && contacts.len() > 1 {
        return FloatingAction::Choose;
    }
    match default.or(contacts.first()) {
        Some(contact) => FloatingAction::Open(contact.url()),
        None => FloatingAction::Nothing,
    }
}

/// The floating button gets out of the way while the contact section is on
/// screen.
pub fn section_in_view(top: f64, bottom: f64, viewport_height: f64) -> bool {
    !(top > viewport_height || bottom < 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_local_and_international_numbers() {
        assert_eq!(normalize_phone("0852-9838-9192"), "6285298389192");
        assert_eq!(normalize_phone("+62 852 9838 9192"), "6285298389192");
        assert_eq!(normalize_phone("+62-852-9838-9192"), "6285298389192");
    }

    #[test]
    fn normalize_is_idempotent() {
        for raw in ["0852-9838-9192", "+62 852", "", "+0812", "abc"] {
            let once = normalize_phone(raw);
            assert_eq!(normalize_phone(&once), once, "input {raw:?}");
        }
    }

    #[test]
    fn normalize_drops_only_one_plus() {
        assert_eq!(normalize_phone("++62"), "+62");
    }

    #[test]
    fn encodes_like_encode_uri_component() {
        assert_eq!(encode_uri_component("Halo! (tes) *ok* 'x'"), "Halo!%20(tes)%20*ok*%20'x'");
        assert_eq!(encode_uri_component("a-b_c.d~e"), "a-b_c.d~e");
        assert_eq!(encode_uri_component("a&b=c/d?"), "a%26b%3Dc%2Fd%3F");
        assert_eq!(encode_uri_component("🙌"), "%F0%9F%99%8C");
    }

    #[test]
    fn builds_outbound_links() {
        assert_eq!(tel_url("0852-9838-9192"), "tel:+6285298389192");
        assert_eq!(telegram_url("@ngodingin"), "https://t.me/ngodingin");
        assert_eq!(instagram_url("ngodingin-assist"), "https://instagram.com/ngodingin-assist");
        assert_eq!(
            maps_url("Kupang, NTT"),
            "https://www.google.com/maps/search/?api=1&query=Kupang%2C%20NTT"
        );
        assert_eq!(mailto_url("a@b.c", None, None), "mailto:a@b.c");
        assert_eq!(mailto_url("a@b.c", Some("Hi there"), None), "mailto:a@b.c?subject=Hi%20there");
    }

    #[test]
    fn whatsapp_uses_default_text_when_none_given() {
        let wa = WhatsAppContact::new("0852-9838-9192");
        assert_eq!(
            wa.url(),
            format!("https://wa.me/6285298389192?text={}", encode_uri_component(DEFAULT_WHATSAPP_TEXT))
        );
    }

    #[test]
    fn channels_follow_fixed_order() {
        let channels = ContactChannels {
            whatsapp: Some(WhatsAppContact::new("0852")),
            phone: Some("0852".into()),
            email: Some("a@b.c".into()),
            telegram: Some("@tg".into()),
            instagram: Some("@ig".into()),
            location: Some("Kupang".into()),
        }
        .channels();

        let keys: Vec<_> = channels.iter().map(|c| c.kind.key()).collect();
        assert_eq!(keys, ["whatsapp", "phone", "email", "telegram", "instagram", "location"]);
        assert_eq!(channels[3].subtitle, "@tg");
        assert_eq!(channels[4].copy_value.as_deref(), Some("@ig"));
        assert_eq!(channels[5].copy_value, None);
    }

    #[test]
    fn blank_channels_are_skipped() {
        let channels = ContactChannels {
            whatsapp: Some(WhatsAppContact::new("  ")),
            email: Some("".into()),
            instagram: Some("ngodingin-assist".into()),
            ..Default::default()
        }
        .channels();
        assert_eq!(channels.len(), 1);
        assert_eq!(channels[0].href, "https://instagram.com/ngodingin-assist");
    }

    #[test]
    fn landing_channels_use_business_contact() {
        let channels = ContactChannels::landing().channels();
        let keys: Vec<_> = channels.iter().map(|c| c.kind).collect();
        assert_eq!(keys, [ChannelKind::WhatsApp, ChannelKind::Email, ChannelKind::Instagram]);
        assert_eq!(channels[0].subtitle, "+6285298389192");
    }

    #[test]
    fn package_options_carry_package_name() {
        let options = PackageContactMethods::default().for_package("Paket Basic");
        assert_eq!(options.len(), 3);
        assert!(options[0]
            .href
            .ends_with(&encode_uri_component(&package_whatsapp_text("Paket Basic"))));
        assert_eq!(options[1].href, "tel:+6285298389192");
        assert_eq!(
            options[2].href,
            format!(
                "mailto:ngodingin@protonmail.com?subject={}&body={}",
                encode_uri_component("Konsultasi Paket Paket Basic"),
                encode_uri_component("Halo! Saya tertarik dengan paket Paket Basic. Mohon informasi lebih lanjut.")
            )
        );
    }

    #[test]
    fn floating_button_picks_or_opens() {
        let contacts = floating_contacts();
        assert_eq!(floating_action(&contacts, None, true), FloatingAction::Choose);
        match floating_action(&contacts[..1], None, true) {
            FloatingAction::Open(url) => assert!(url.starts_with("https://wa.me/6285298389192?text=Halo!%20Saya")),
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(floating_action(&[], None, true), FloatingAction::Nothing);
        let fallback = WhatsAppContact::new("0811");
        assert_eq!(
            floating_action(&contacts, Some(&fallback), false),
            FloatingAction::Open(fallback.url())
        );
    }

    #[test]
    fn contact_section_visibility() {
        assert!(section_in_view(100.0, 900.0, 800.0));
        assert!(!section_in_view(801.0, 1600.0, 800.0));
        assert!(!section_in_view(-900.0, -1.0, 800.0));
    }
}
