use yew::prelude::*;

use super::pricing::PricingSection;
use crate::components::{use_page_metadata, JsonLd};
use crate::config::SITE;
use crate::schema;
use crate::seo::{canonical_url, MetadataOptions, PageMetadata};

pub const KEYWORDS: &[&str] = &[
    "harga jasa coding",
    "paket pembuatan aplikasi",
    "biaya skripsi aplikasi",
    "tarif web development",
    "harga sistem informasi",
    "jasa coding murah",
    "paket tugas akhir",
];

pub fn metadata() -> PageMetadata {
    PageMetadata::construct(MetadataOptions {
        title: Some("Harga & Paket"),
        description: Some(
            "Lihat daftar harga dan paket layanan pembuatan aplikasi tugas akhir, sistem informasi, web development, dan mobile app development. Paket mulai dari Rp 800.000 dengan berbagai fitur lengkap.",
        ),
        keywords: Some(KEYWORDS),
        canonical: Some("/pricing"),
        ..MetadataOptions::default()
    })
}

#[function_component(PricingPage)]
pub fn pricing_page() -> Html {
    use_page_metadata(metadata());
    let pricing_url = canonical_url(SITE.url, Some("/pricing"));

    html! {
        <div class="page pricing-page">
            <JsonLd data={schema::price_range()} />
            <JsonLd data={schema::breadcrumb(&[("Home", SITE.url), ("Harga", pricing_url.as_str())])} />
            <PricingSection show_glow={true} />
        </div>
    }
}
