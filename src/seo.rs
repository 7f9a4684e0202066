//! Page metadata: the `<title>`, `<meta>` and `<link>` tags each route puts
//! into `document.head`.

use log::debug;
use wasm_bindgen::JsValue;

use crate::config::{self, SITE};

pub const OG_IMAGE_WIDTH: u32 = 1200;
pub const OG_IMAGE_HEIGHT: u32 = 630;
pub const APPLE_TOUCH_ICON: &str = "/apple-touch-icon.png";
pub const MANIFEST: &str = "/site.webmanifest";

/// Marks tags this module owns so they can be swapped on navigation.
const OWNED_ATTR: &str = "data-seo";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetadataOptions<'a> {
    pub title: Option<&'a str>,
    pub description: Option<&'a str>,
    pub image: Option<&'a str>,
    pub icon: Option<&'a str>,
    pub keywords: Option<&'a [&'a str]>,
    /// Path or absolute url; the site root when absent.
    pub canonical: Option<&'a str>,
    pub no_index: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub canonical: String,
    pub image: String,
    pub image_alt: String,
    pub icon: String,
    pub no_index: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadTag {
    /// `<meta name=.. content=..>`
    Name(&'static str, String),
    /// `<meta property=.. content=..>`
    Property(&'static str, String),
    /// `<link rel=.. href=..>`
    Link(&'static str, String),
}

impl PageMetadata {
    pub fn construct(options: MetadataOptions<'_>) -> Self {
        let title = options.title.unwrap_or(SITE.name).to_string();
        let image = options.image.unwrap_or(SITE.og_image).to_string();
        PageMetadata {
            image_alt: format!("{} - {}", title, SITE.name),
            description: options.description.unwrap_or(SITE.description).to_string(),
            keywords: options.keywords.unwrap_or(SITE.keywords).join(", "),
            canonical: canonical_url(SITE.url, options.canonical),
            icon: options.icon.unwrap_or(SITE.favicon).to_string(),
            no_index: options.no_index,
            title,
            image,
        }
    }

    /// Browser tab title; sub pages get the site name appended.
    pub fn document_title(&self) -> String {
        if self.title == SITE.name {
            self.title.clone()
        } else {
            format!("{} | {}", self.title, SITE.name)
        }
    }

    pub fn robots(&self) -> &'static str {
        if self.no_index {
            "noindex, nofollow"
        } else {
            "index, follow"
        }
    }

    pub fn googlebot(&self) -> &'static str {
        if self.no_index {
            "noindex, nofollow, max-video-preview:-1, max-image-preview:large, max-snippet:-1"
        } else {
            "index, follow, max-video-preview:-1, max-image-preview:large, max-snippet:-1"
        }
    }

    pub fn tags(&self) -> Vec<HeadTag> {
        use HeadTag::*;
        vec![
            Name("description", self.description.clone()),
            Name("keywords", self.keywords.clone()),
            Name("author", SITE.creator.to_string()),
            Name("creator", SITE.creator.to_string()),
            Name("robots", self.robots().to_string()),
            Name("googlebot", self.googlebot().to_string()),
            Name("theme-color", SITE.theme_color.to_string()),
            Name("google-site-verification", SITE.google_verification.to_string()),
            Link("canonical", self.canonical.clone()),
            Link("icon", self.icon.clone()),
            Link("shortcut icon", self.icon.clone()),
            Link("apple-touch-icon", APPLE_TOUCH_ICON.to_string()),
            Link("manifest", MANIFEST.to_string()),
            Property("og:type", SITE.site_type.to_string()),
            Property("og:locale", SITE.locale.to_string()),
            Property("og:url", self.canonical.clone()),
            Property("og:title", self.title.clone()),
            Property("og:description", self.description.clone()),
            Property("og:site_name", SITE.name.to_string()),
            Property("og:image", self.image.clone()),
            Property("og:image:secure_url", self.image.clone()),
            Property("og:image:type", "image/png".to_string()),
            Property("og:image:width", OG_IMAGE_WIDTH.to_string()),
            Property("og:image:height", OG_IMAGE_HEIGHT.to_string()),
            Property("og:image:alt", self.image_alt.clone()),
            Property("whatsapp:image", self.image.clone()),
            Property("telegram:image", self.image.clone()),
            Name("twitter:card", "summary_large_image".to_string()),
            Name("twitter:title", self.title.clone()),
            Name("twitter:description", self.description.clone()),
            Name("twitter:image", self.image.clone()),
            Name("twitter:image:alt", self.image_alt.clone()),
            Name("twitter:creator", SITE.twitter_handle.to_string()),
        ]
    }

    /// Replaces the tags a previous page applied. Dev builds are always
    /// marked noindex.
    pub fn apply(&self) {
        let page = if config::allow_indexing() {
            self.clone()
        } else {
            PageMetadata { no_index: true, ..self.clone() }
        };
        if let Err(e) = page.apply_to_head() {
            debug!("Could not update document head: {:?}", e);
        }
    }

    fn apply_to_head(&self) -> Result<(), JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let head = document.head().ok_or_else(|| JsValue::from_str("no head"))?;

        document.set_title(&self.document_title());

        let old = document.query_selector_all(&format!("[{OWNED_ATTR}]"))?;
        for i in 0..old.length() {
            if let Some(node) = old.item(i) {
                let _ = head.remove_child(&node);
            }
        }

        for tag in self.tags() {
            let element = match &tag {
                HeadTag::Name(name, content) => {
                    let el = document.create_element("meta")?;
                    el.set_attribute("name", name)?;
                    el.set_attribute("content", content)?;
                    el
                }
                HeadTag::Property(property, content) => {
                    let el = document.create_element("meta")?;
                    el.set_attribute("property", property)?;
                    el.set_attribute("content", content)?;
                    el
                }
                HeadTag::Link(rel, href) => {
                    let el = document.create_element("link")?;
                    el.set_attribute("rel", rel)?;
                    el.set_attribute("href", href)?;
                    el
                }
            };
            element.set_attribute(OWNED_ATTR, "")?;
            head.append_child(&element)?;
        }
        Ok(())
    }
}

/// Absolute canonical url for a path, without doubled slashes.
pub fn canonical_url(base: &str, path: Option<&str>) -> String {
    match path {
        Some(p) if p.starts_with("http://") || p.starts_with("https://") => p.to_string(),
        Some(p) if !p.is_empty() && p != "/" => {
            format!("{}/{}", base.trim_end_matches('/'), p.trim_start_matches('/'))
        }
        _ => base.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content<'a>(tags: &'a [HeadTag], key: &str) -> Option<&'a str> {
        tags.iter().find_map(|t| match t {
            HeadTag::Name(k, v) | HeadTag::Property(k, v) | HeadTag::Link(k, v) if *k == key => Some(v.as_str()),
            _ => None,
        })
    }

    #[test]
    fn defaults_come_from_site_config() {
        let meta = PageMetadata::construct(MetadataOptions::default());
        assert_eq!(meta.title, SITE.name);
        assert_eq!(meta.document_title(), SITE.name);
        assert_eq!(meta.canonical, SITE.url);
        assert!(meta.keywords.starts_with("jasa skripsi, tugas akhir"));
        assert_eq!(meta.robots(), "index, follow");
    }

    #[test]
    fn sub_page_overrides() {
        let meta = PageMetadata::construct(MetadataOptions {
            title: Some("Blog"),
            keywords: Some(&["blog coding", "artikel teknologi"]),
            canonical: Some("/blog"),
            no_index: true,
            ..Default::default()
        });
        assert_eq!(meta.document_title(), "Blog | Ngodingin Assist");
        assert_eq!(meta.keywords, "blog coding, artikel teknologi");
        assert_eq!(meta.canonical, "https://www.ngodingin-assist.tech/blog");
        assert_eq!(meta.image_alt, "Blog - Ngodingin Assist");
        assert!(meta.googlebot().starts_with("noindex, nofollow"));
    }

    #[test]
    fn canonical_joins_cleanly() {
        assert_eq!(canonical_url("https://a.tech/", Some("//services")), "https://a.tech/services");
        assert_eq!(canonical_url("https://a.tech", Some("/")), "https://a.tech");
        assert_eq!(canonical_url("https://a.tech", Some("https://b.tech/x")), "https://b.tech/x");
    }

    #[test]
    fn open_graph_and_twitter_tags() {
        let meta = PageMetadata::construct(MetadataOptions::default());
        let tags = meta.tags();
        assert_eq!(content(&tags, "og:image:width"), Some("1200"));
        assert_eq!(content(&tags, "og:locale"), Some("id_ID"));
        assert_eq!(content(&tags, "twitter:card"), Some("summary_large_image"));
        assert_eq!(content(&tags, "twitter:creator"), Some("@ngodingin_assist"));
        assert_eq!(content(&tags, "manifest"), Some(MANIFEST));
    }
}
