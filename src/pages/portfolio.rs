use yew::prelude::*;

use crate::components::{Corner, GlowBlob, GridBackground, MarqueeRail, Modal, Reveal, SectionWrapper};
use crate::content::{PortfolioItem, PORTFOLIO};
use crate::icons::{HeroIcon, Icon};
use crate::motion::marquee::{MarqueeConfig, Speed};
use crate::motion::reveal::RevealKind;

pub const PORTFOLIO_SPEED_PX: f64 = 40.0;

pub fn rail_config() -> MarqueeConfig {
    MarqueeConfig {
        speed: Speed::PxPerSec(PORTFOLIO_SPEED_PX),
        one_way_drag: true,
        momentum: true,
        ..MarqueeConfig::default()
    }
}

#[derive(Properties, PartialEq)]
struct PortfolioCardProps {
    item: PortfolioItem,
    on_zoom: Callback<&'static str>,
}

#[function_component(PortfolioCard)]
fn portfolio_card(props: &PortfolioCardProps) -> Html {
    let item = &props.item;
    let image = item.image_or_placeholder();
    let zoom = {
        let on_zoom = props.on_zoom.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            e.stop_propagation();
            on_zoom.emit(image);
        })
    };

    let card = html! {
        <Reveal kind={RevealKind::SlideLeft} duration={0.8} delay={0.2} threshold={0.2}>
            <article class="card portfolio-card">
                <div class="portfolio-image" onclick={zoom}>
                    <img src={image} alt={item.title} width="800" height="480" loading="lazy" draggable="false" />
                    <div class="portfolio-zoom" aria-hidden="true">
                        <Icon icon={HeroIcon::ArrowsPointingOut} class="icon-sm" />
                    </div>
                </div>
                <div class="portfolio-body">
                    <h3>{ item.title }</h3>
                    <p class="text-muted">{ item.description }</p>
                    <div class="chip-row">
                        { for item.tags.iter().map(|tag| html! { <span class="chip">{ *tag }</span> }) }
                    </div>
                </div>
            </article>
        </Reveal>
    };

    match item.href {
        Some(href) => html! {
            <a class="portfolio-link" href={href} target="_blank" rel="noopener noreferrer">{ card }</a>
        },
        None => card,
    }
}

#[derive(Properties, PartialEq)]
pub struct PortfolioSectionProps {
    #[prop_or_else(|| AttrValue::from("portfolio"))]
    pub id: AttrValue,
    #[prop_or_else(|| AttrValue::from("Portfolio Kami"))]
    pub title: AttrValue,
    #[prop_or_else(|| AttrValue::from("Beberapa aplikasi yang telah kami kembangkan untuk tugas akhir mahasiswa."))]
    pub description: AttrValue,
    #[prop_or_else(|| PORTFOLIO.to_vec())]
    pub items: Vec<PortfolioItem>,
}

#[function_component(PortfolioSection)]
pub fn portfolio_section(props: &PortfolioSectionProps) -> Html {
    let show_all = use_state_eq(|| false);
    let lightbox = use_state_eq(|| None::<&'static str>);

    let open_all = {
        let show_all = show_all.clone();
        Callback::from(move |_: MouseEvent| show_all.set(true))
    };
    let close_all = {
        let show_all = show_all.clone();
        Callback::from(move |_| show_all.set(false))
    };
    let on_zoom = {
        let lightbox = lightbox.clone();
        Callback::from(move |src: &'static str| lightbox.set(Some(src)))
    };
    let close_lightbox = {
        let lightbox = lightbox.clone();
        Callback::from(move |_| lightbox.set(None))
    };

    let header_actions = html! {
        <button class="button button-card button-sm" aria-label="View all portfolio items" onclick={open_all}>
            { "View All" }
            <Icon icon={HeroIcon::ArrowsPointingOut} class="icon-xs" />
        </button>
    };
    let decor = html! {
        <>
            <GlowBlob position={Corner::TopRight} color="rgba(37, 99, 235, 0.10)" />
            <GlowBlob position={Corner::BottomLeft} color="rgba(30, 64, 175, 0.10)" />
            <GridBackground size={50} major_every={3} minor_opacity={0.05} major_opacity={0.07} />
        </>
    };

    html! {
        <SectionWrapper
            id={props.id.clone()}
            title={props.title.clone()}
            description={props.description.clone()}
            class={classes!("section-dark")}
            title_class={classes!("text-white")}
            description_class={classes!("text-soft")}
            {header_actions}
            {decor}
        >
            <div class="full-bleed">
                <div class="edge-shade edge-left" aria-hidden="true" />
                <div class="edge-shade edge-right" aria-hidden="true" />
                <MarqueeRail config={rail_config()} draggable={true} track_class={classes!("portfolio-track")}>
                    { for props.items.iter().map(|item| html! {
                        <div class="portfolio-slide">
                            <PortfolioCard item={*item} on_zoom={on_zoom.clone()} />
                        </div>
                    }) }
                </MarqueeRail>
            </div>

            <Modal open={*show_all} on_close={close_all} class={classes!("modal-wide")}>
                <div class="modal-header">
                    <h3>{ props.title.clone() }</h3>
                </div>
                <div class="modal-body card-grid three">
                    { for props.items.iter().map(|item| html! {
                        <PortfolioCard item={*item} on_zoom={on_zoom.clone()} />
                    }) }
                </div>
            </Modal>

            <Modal open={lightbox.is_some()} on_close={close_lightbox} class={classes!("lightbox")}>
                if let Some(src) = *lightbox {
                    <img class="lightbox-image" src={src} alt="Preview" />
                }
            </Modal>
        </SectionWrapper>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rail_drags_one_way_with_momentum() {
        let cfg = rail_config();
        assert!(cfg.one_way_drag && cfg.momentum);
        assert_eq!(cfg.speed, Speed::PxPerSec(40.0));
    }
}
