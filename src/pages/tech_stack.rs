use yew::prelude::*;

use crate::components::{Corner, GlowBlob, GridBackground, MarqueeRail, SectionWrapper, TechLogo};
use crate::content::{TechItem, TECHNOLOGIES};
use crate::motion::marquee::{split_rows, Direction, MarqueeConfig, Speed};

/// Seconds one batch of a row takes to scroll past.
pub const ROW_CYCLE_S: f64 = 30.0;
const EDGE_FADE: &str = "-webkit-mask-image:linear-gradient(to right, transparent 0, black 10%, black 90%, transparent 100%);\
                         mask-image:linear-gradient(to right, transparent 0, black 10%, black 90%, transparent 100%);";

pub fn row_config(direction: Direction) -> MarqueeConfig {
    MarqueeConfig { speed: Speed::Cycle(ROW_CYCLE_S), direction, ..MarqueeConfig::default() }
}

fn tech_tile(tech: &TechItem) -> Html {
    html! {
        <div class="tech-item">
            <div class="tech-tile">
                <TechLogo name={tech.name} icon={tech.icon} />
            </div>
            <span class="tech-name">{ tech.name }</span>
        </div>
    }
}

#[function_component(TechStackSection)]
pub fn tech_stack_section() -> Html {
    let (first, second) = split_rows(TECHNOLOGIES);
    let decor = html! {
        <>
            <GridBackground size={50} major_every={3} minor_opacity={0.07} major_opacity={0.16} />
            <GlowBlob position={Corner::TopRight} color="rgba(37, 99, 235, 0.20)" size={320} />
            <GlowBlob position={Corner::BottomLeft} color="rgba(14, 165, 233, 0.20)" size={288} />
        </>
    };

    html! {
        <SectionWrapper id="tech" class={classes!("section-surface", "tech-section")} {decor}>
            <div class="tech-layout">
                <div class="tech-copy">
                    <h2 class="section-title text-dark">{ "Teknologi yang Kami Gunakan" }</h2>
                    <p class="section-description text-muted">
                        { "Kami menggunakan teknologi terkini untuk memastikan aplikasi Anda modern, scalable, dan mudah dikembangkan." }
                    </p>
                </div>
                <div class="tech-rails">
                    <MarqueeRail config={row_config(Direction::Forward)} style={EDGE_FADE}>
                        { for first.iter().map(tech_tile) }
                    </MarqueeRail>
                    <MarqueeRail config={row_config(Direction::Reverse)} style={EDGE_FADE}>
                        { for second.iter().map(tech_tile) }
                    </MarqueeRail>
                </div>
            </div>
        </SectionWrapper>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_split_evenly_and_run_opposite() {
        let (first, second) = split_rows(TECHNOLOGIES);
        assert_eq!(first.len(), TECHNOLOGIES.len().div_ceil(2));
        assert_eq!(first.len() + second.len(), TECHNOLOGIES.len());
        assert_eq!(row_config(Direction::Forward).speed, Speed::Cycle(30.0));
        assert_eq!(row_config(Direction::Reverse).direction, Direction::Reverse);
    }
}
