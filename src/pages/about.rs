use yew::prelude::*;

use super::team::TeamSection;
use crate::components::use_page_metadata;
use crate::config::CONTACT;
use crate::seo::{MetadataOptions, PageMetadata};

pub fn metadata() -> PageMetadata {
    PageMetadata::construct(MetadataOptions {
        title: Some("Tentang Kami"),
        description: Some(
            "Pelajari lebih lanjut tentang Ngodingin, tim pengembang aplikasi tugas akhir dan sistem informasi yang berpengalaman melayani mahasiswa di Indonesia Timur, khususnya Kupang dan sekitarnya.",
        ),
        canonical: Some("/about"),
        ..MetadataOptions::default()
    })
}

#[function_component(AboutPage)]
pub fn about_page() -> Html {
    use_page_metadata(metadata());

    html! {
        <div class="page about-page">
            <div class="page-container">
                <header class="page-header">
                    <h1>{ "Tentang Kami" }</h1>
                    <p class="page-lead">
                        { format!("Tim pengembang aplikasi tugas akhir dan sistem informasi dari {}.", CONTACT.location) }
                    </p>
                </header>
            </div>
            <TeamSection id="tim" />
        </div>
    }
}
