use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{Footer, JsonLd, Nav, ScrollToTop, WhatsAppButton};
use crate::pages::{AboutPage, BlogPage, Landing, NotFound, PricingPage, ServicesPage};
use crate::schema;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/services")]
    Services,
    #[at("/pricing")]
    Pricing,
    #[at("/about")]
    About,
    #[at("/blog")]
    Blog,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing /> }
        },
        Route::Services => {
            info!("Rendering Services page");
            html! { <ServicesPage /> }
        },
        Route::Pricing => {
            info!("Rendering Pricing page");
            html! { <PricingPage /> }
        },
        Route::About => {
            info!("Rendering About page");
            html! { <AboutPage /> }
        },
        Route::Blog => {
            info!("Rendering Blog page");
            html! { <BlogPage /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

#[function_component]
pub fn App() -> Html {
    html! {
        <BrowserRouter>
            <JsonLd data={schema::website()} />
            <JsonLd data={schema::organization()} />
            <Nav />
            <main class="site-main">
                <Switch<Route> render={switch} />
            </main>
            <ScrollToTop />
            <WhatsAppButton />
            <Footer />
        </BrowserRouter>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sitemap::SITE_ROUTES;

    #[test]
    fn sitemap_paths_are_routable() {
        for path in SITE_ROUTES {
            let route = Route::recognize(path);
            assert!(
                matches!(route, Some(ref r) if *r != Route::NotFound),
                "{path} should map to a page"
            );
        }
    }

    #[test]
    fn unknown_paths_fall_through() {
        assert_eq!(Route::not_found_route(), Some(Route::NotFound));
        assert!(Route::recognize("/nope").map_or(true, |r| r == Route::NotFound));
    }
}
