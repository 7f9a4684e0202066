use yew::prelude::*;

use crate::components::{Corner, GlowBlob, ParticleBackground, Reveal, SectionWrapper};
use crate::content::{ServiceItem, SERVICES};
use crate::icons::Icon;
use crate::motion::particles::ParticleConfig;
use crate::motion::reveal::RevealKind;

pub const SERVICES_TITLE: &str = "Layanan Kami";
pub const SERVICES_DESCRIPTION: &str =
    "Kami tidak hanya membuat aplikasi untuk Anda, tapi juga memastikan Anda memahami alur pembuatannya.";

/// Calm particle field shared by the dark card sections.
pub fn section_particles() -> ParticleConfig {
    ParticleConfig {
        density: 15.0,
        speed: 32.0,
        connect_distance: 110.0,
        cursor_radius: 150.0,
        cursor_force: -28.0,
        opacity: 0.2,
        ..ParticleConfig::default()
    }
}

#[derive(Properties, PartialEq)]
pub struct ServicesSectionProps {
    #[prop_or_else(|| AttrValue::from("services"))]
    pub id: AttrValue,
    #[prop_or_else(|| SERVICES.to_vec())]
    pub services: Vec<ServiceItem>,
}

#[function_component(ServicesSection)]
pub fn services_section(props: &ServicesSectionProps) -> Html {
    let decor = html! {
        <>
            <GlowBlob position={Corner::TopRight} color="rgba(37, 99, 235, 0.15)" size={384} />
            <GlowBlob position={Corner::BottomLeft} color="rgba(14, 165, 233, 0.15)" size={384} />
            <ParticleBackground config={section_particles()} />
        </>
    };

    html! {
        <SectionWrapper
            id={props.id.clone()}
            title={SERVICES_TITLE}
            description={SERVICES_DESCRIPTION}
            class={classes!("section-dark")}
            title_class={classes!("text-white")}
            description_class={classes!("text-soft")}
            {decor}
        >
            <div class="card-grid three">
                { for props.services.iter().map(|s| html! {
                    <Reveal key={s.title} kind={RevealKind::Fade} duration={0.8} delay={0.2} threshold={0.2}>
                        <article class="card service-card">
                            <div class="service-card-header">
                                <div class="icon-bubble">
                                    <Icon icon={s.icon} class="icon-md" />
                                </div>
                                <h3>{ s.title }</h3>
                            </div>
                            <p class="text-muted">{ s.description }</p>
                        </article>
                    </Reveal>
                }) }
            </div>
        </SectionWrapper>
    }
}
