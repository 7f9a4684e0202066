use yew::prelude::*;

use crate::components::nav::SECTION_OFFSET_PX;
use crate::components::{GridBackground, Reveal};
use crate::dom::viewport::scroll_to_section;
use crate::dom::{is_desktop, prefers_reduced_motion, VisibilityObserver, VisibilityOptions, WindowListener};
use crate::icons::{HeroIcon, Icon};
use crate::motion::blocks::{layout_blocks, FloatingBlock, BLOCK_COUNT};
use crate::motion::reveal::RevealKind;

const CLUSTER_ROOT_MARGIN: &str = "-20% 0px -20% 0px";

fn jump_to(id: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        if scroll_to_section(id, SECTION_OFFSET_PX) {
            e.prevent_default();
        }
    })
}

#[derive(Properties, PartialEq)]
struct BlockClusterProps {
    blocks: Vec<FloatingBlock>,
}

/// Drifting blocks; paused while mostly off screen.
#[function_component(BlockCluster)]
fn block_cluster(props: &BlockClusterProps) -> Html {
    let container_ref = use_node_ref();
    let running = use_state_eq(|| false);

    {
        let container_ref = container_ref.clone();
        let running = running.clone();
        use_effect_with_deps(
            move |_| {
                let observer = (!prefers_reduced_motion())
                    .then(|| container_ref.cast::<web_sys::Element>())
                    .flatten()
                    .and_then(|el| {
                        VisibilityObserver::watch(
                            &el,
                            &VisibilityOptions::new(CLUSTER_ROOT_MARGIN, &[0.01]),
                            move |visible| running.set(visible),
                        )
                    });
                move || drop(observer)
            },
            (),
        );
    }

    html! {
        <div ref={container_ref} class={classes!("hero-blocks", (*running).then_some("running"))} aria-hidden="true">
            { for props.blocks.iter().map(|b| html! {
                <div key={b.id} class={classes!("hero-block", b.color)} style={b.style()}>
                    if b.patterned {
                        <div class="hero-block-lines">
                            <span class="line-full" />
                            <span class="line-three-quarter" />
                            <span class="line-half" />
                        </div>
                    }
                </div>
            }) }
        </div>
    }
}

#[function_component(HeroSection)]
pub fn hero_section() -> Html {
    let desktop = use_state_eq(is_desktop);
    let blocks = use_memo(|_| layout_blocks(&mut rand::thread_rng(), BLOCK_COUNT), ());

    {
        let desktop = desktop.clone();
        use_effect_with_deps(
            move |_| {
                let listener = WindowListener::new("resize", move |_| desktop.set(is_desktop()));
                move || drop(listener)
            },
            (),
        );
    }

    html! {
        <section id="home" class="hero">
            <div class="hero-shade" aria-hidden="true" />
            <GridBackground size={36} major_every={5} minor_opacity={0.07} major_opacity={0.16} />

            <div class={classes!("hero-inner", (*desktop).then_some("with-blocks"))}>
                <Reveal kind={RevealKind::SlideUp} duration={0.6} threshold={0.35} repeat_on_enter={false} class={classes!("hero-copy")}>
                    <h1 class="hero-title">
                        { "Butuh sistem untuk proyek studi? " }
                        <span class="text-gradient">{ "Ngodingin, dong!" }</span>
                    </h1>
                    <p class="hero-subtitle">
                        { "Pendampingan pengembangan sistem untuk keperluan akademik, praktikum, dan portofolio, dari perancangan hingga rilis, sambil memastikan kamu paham prosesnya." }
                    </p>
                    <div class="hero-ctas">
                        <a href="#contact" class="button button-light button-lg" onclick={jump_to("contact")}>
                            { "Minta Ngodingin Sekarang" }
                            <Icon icon={HeroIcon::ArrowRight} class="icon-sm" />
                        </a>
                        <a href="#portfolio" class="button button-outline button-lg" onclick={jump_to("portfolio")}>
                            <Icon icon={HeroIcon::Play} class="icon-sm" />
                            { "Lihat Portofolio" }
                        </a>
                    </div>
                    <ul class="hero-microcopy">
                        <li>{ "• Pendampingan & code review" }</li>
                        <li>{ "• Milestone jelas & repo rapi" }</li>
                        <li>{ "• Dokumentasi & handover lengkap" }</li>
                    </ul>
                </Reveal>

                if *desktop {
                    <BlockCluster blocks={(*blocks).clone()} />
                }
            </div>

            <div class="hero-bottom-fade" aria-hidden="true" />
        </section>
    }
}
