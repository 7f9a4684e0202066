use yew::prelude::*;

use super::contact::ContactSection;
use super::hero::HeroSection;
use super::portfolio::PortfolioSection;
use super::pricing::PricingSection;
use super::services::ServicesSection;
use super::team::TeamSection;
use super::tech_stack::TechStackSection;
use super::testimonials::TestimonialsSection;
use crate::components::{use_page_metadata, JsonLd};
use crate::schema;
use crate::seo::{MetadataOptions, PageMetadata};

#[function_component(Landing)]
pub fn landing() -> Html {
    use_page_metadata(PageMetadata::construct(MetadataOptions::default()));

    html! {
        <div class="landing-page">
            <JsonLd data={schema::local_business()} />
            <JsonLd data={schema::faq()} />
            <HeroSection />
            <ServicesSection />
            <TechStackSection />
            <PortfolioSection />
            <TeamSection />
            <PricingSection />
            <TestimonialsSection />
            <ContactSection show_glow={true} />
        </div>
    }
}
