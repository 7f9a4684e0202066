use yew::prelude::*;

use super::services::ServicesSection;
use crate::components::{use_page_metadata, JsonLd};
use crate::config::SITE;
use crate::content::SERVICES;
use crate::schema;
use crate::seo::{canonical_url, MetadataOptions, PageMetadata};

pub const KEYWORDS: &[&str] = &[
    "layanan ngodingin",
    "jasa ngodingin",
    "produk ngodingin",
    "service ngodingin",
    "konsultasi IT",
    "pembuatan aplikasi",
    "sistem informasi",
    "mentoring coding",
    "jasa tugas akhir",
];

/// The four steps from first chat to handover.
pub const PROCESS_STEPS: [(&str, &str); 4] = [
    ("Konsultasi", "Diskusi kebutuhan dan requirement aplikasi"),
    ("Perencanaan", "Membuat timeline dan arsitektur sistem"),
    ("Development", "Proses pembuatan aplikasi dengan teknologi terkini"),
    ("Delivery", "Testing, deployment, dan handover project"),
];

pub fn metadata() -> PageMetadata {
    PageMetadata::construct(MetadataOptions {
        title: Some("Layanan Ngodingin - Jasa Pembuatan Aplikasi Tugas Akhir"),
        description: Some(
            "Layanan lengkap Ngodingin untuk tugas akhir mahasiswa: pembuatan aplikasi web, sistem informasi, konsultasi IT, dan mentoring coding. Teknologi modern dan terpercaya.",
        ),
        keywords: Some(KEYWORDS),
        canonical: Some("/services"),
        ..MetadataOptions::default()
    })
}

#[function_component(ServicesPage)]
pub fn services_page() -> Html {
    use_page_metadata(metadata());
    let services_url = canonical_url(SITE.url, Some("/services"));
    let breadcrumb = schema::breadcrumb(&[("Home", SITE.url), ("Layanan", services_url.as_str())]);

    html! {
        <div class="page services-page">
            <JsonLd data={schema::services_item_list(SERVICES)} />
            <JsonLd data={schema::service()} />
            <JsonLd data={breadcrumb} />

            <div class="page-container">
                <header class="page-header">
                    <h1>
                        { "Layanan Lengkap Ngodingin" }
                        <span class="title-accent">{ "Untuk Tugas Akhir Anda" }</span>
                    </h1>
                    <p class="page-lead">
                        { "Kami menyediakan berbagai layanan profesional untuk membantu mahasiswa menyelesaikan tugas akhir dengan teknologi modern dan pendekatan yang tepat." }
                    </p>
                </header>
            </div>

            <ServicesSection id="layanan" />

            <div class="page-container">
                <section class="process">
                    <h2>{ "Proses Kerja Kami" }</h2>
                    <ol class="process-steps">
                        { for PROCESS_STEPS.iter().enumerate().map(|(i, (title, text))| html! {
                            <li class="process-step">
                                <span class="step-number">{ i + 1 }</span>
                                <h3>{ *title }</h3>
                                <p class="text-muted">{ *text }</p>
                            </li>
                        }) }
                    </ol>
                </section>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_has_single_slash() {
        let meta = metadata();
        assert_eq!(meta.canonical, "https://www.ngodingin-assist.tech/services");
        assert!(meta.keywords.starts_with("layanan ngodingin, jasa ngodingin"));
        assert_eq!(meta.document_title(), "Layanan Ngodingin - Jasa Pembuatan Aplikasi Tugas Akhir | Ngodingin Assist");
    }
}
