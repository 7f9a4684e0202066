use yew::prelude::*;

use crate::components::{use_page_metadata, SandBackground};
use crate::motion::sand::SandConfig;
use crate::motion::Variant;
use crate::seo::{MetadataOptions, PageMetadata};

pub const KEYWORDS: &[&str] = &[
    "blog coding",
    "tutorial web development",
    "tips sistem informasi",
    "panduan skripsi aplikasi",
    "artikel teknologi",
    "tutorial programming",
];

/// Light grain drift behind the empty states.
pub fn page_sand() -> SandConfig {
    SandConfig { density: 40.0, opacity: 0.35, variant: Variant::Light, ..SandConfig::default() }
}

pub fn metadata() -> PageMetadata {
    PageMetadata::construct(MetadataOptions {
        title: Some("Blog"),
        description: Some(
            "Baca artikel dan tips seputar pengembangan aplikasi, sistem informasi, web development, dan mobile app development. Tutorial, panduan, dan insights dari tim Ngodingin.",
        ),
        keywords: Some(KEYWORDS),
        canonical: Some("/blog"),
        ..MetadataOptions::default()
    })
}

#[function_component(BlogPage)]
pub fn blog_page() -> Html {
    use_page_metadata(metadata());

    html! {
        <div class="page blog-page">
            <SandBackground config={page_sand()} />
            <div class="page-container">
                <header class="page-header">
                    <h1>{ "Blog" }</h1>
                    <p class="page-lead text-muted">{ "Artikel pertama sedang kami tulis. Nantikan ya!" }</p>
                </header>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grains_are_dark_on_the_light_page() {
        let sand = page_sand();
        assert_eq!(sand.grain_color(), Variant::Light.rgba(0.9));
        assert_eq!(sand.layers, 2);
    }

    #[test]
    fn blog_is_indexed_under_its_own_url() {
        let meta = metadata();
        assert_eq!(meta.canonical, "https://www.ngodingin-assist.tech/blog");
        assert_eq!(meta.keywords.split(", ").count(), KEYWORDS.len());
    }
}
