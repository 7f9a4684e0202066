use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use super::blog::page_sand;
use crate::components::{use_page_metadata, SandBackground};
use crate::seo::{MetadataOptions, PageMetadata};

#[function_component(NotFound)]
pub fn not_found() -> Html {
    use_page_metadata(PageMetadata::construct(MetadataOptions {
        title: Some("Halaman Tidak Ditemukan"),
        no_index: true,
        ..MetadataOptions::default()
    }));

    html! {
        <div class="page not-found">
            <SandBackground config={page_sand()} />
            <div class="page-container">
                <h1>{ "404" }</h1>
                <p class="page-lead text-muted">{ "Halaman yang Anda cari tidak ada." }</p>
                <Link<Route> to={Route::Home} classes="button button-primary">
                    { "Kembali ke Beranda" }
                </Link<Route>>
            </div>
        </div>
    }
}
