use yew::prelude::*;

use crate::components::{MarqueeRail, ParticleBackground};
use crate::content::{Testimonial, MAX_RATING, TESTIMONIALS};
use crate::dom::{is_mobile, WindowListener};
use crate::icons::{FilledIcon, STAR_PATH};
use crate::motion::marquee::{distribute, Axis, Direction, MarqueeConfig, Speed};
use crate::motion::particles::ParticleConfig;

pub const COLUMN_COUNT: usize = 3;
pub const BASE_SPEED_PX: f64 = 30.0;
const COLUMN_SPEEDS: [f64; COLUMN_COUNT] = [1.0, 0.92, 1.08];

/// Column `i` of the wall: middle column runs downwards and every column
/// drifts at a slightly different pace.
pub fn column_config(index: usize, base_speed: f64) -> MarqueeConfig {
    let factor = COLUMN_SPEEDS.get(index).copied().unwrap_or(1.0);
    MarqueeConfig {
        speed: Speed::PxPerSec(base_speed * factor),
        direction: if index == 1 { Direction::Reverse } else { Direction::Forward },
        axis: Axis::Y,
        ..MarqueeConfig::default()
    }
}

fn particles() -> ParticleConfig {
    ParticleConfig {
        density: 18.0,
        speed: 34.0,
        connect_distance: 110.0,
        cursor_radius: 150.0,
        cursor_force: -30.0,
        opacity: 0.12,
        ..ParticleConfig::default()
    }
}

fn testimonial_card(t: &Testimonial) -> Html {
    let stars = t.stars();
    html! {
        <article class="card testimonial-card">
            <div class="testimonial-head">
                {
                    match t.avatar {
                        Some(src) => html! { <img class="avatar-sm" src={src} alt={t.name} loading="lazy" /> },
                        None => html! {
                            <div class="avatar-sm avatar-initials">{ t.name.chars().next().map(String::from).unwrap_or_default() }</div>
                        },
                    }
                }
                <div class="testimonial-meta">
                    <h4>{ t.name }</h4>
                    if let Some(byline) = t.byline() {
                        <p class="text-muted text-xs">{ byline }</p>
                    }
                    <div class="stars" aria-label={format!("{stars} dari {MAX_RATING} bintang")}>
                        { for (0..MAX_RATING).map(|i| html! {
                            <FilledIcon path={STAR_PATH} class={if i < stars { "star lit" } else { "star" }} />
                        }) }
                    </div>
                </div>
            </div>
            <p class="testimonial-text">{ format!("\"{}\"", t.text) }</p>
        </article>
    }
}

#[derive(Properties, PartialEq)]
pub struct TestimonialsSectionProps {
    #[prop_or_else(|| AttrValue::from("testimonials"))]
    pub id: AttrValue,
    #[prop_or_else(|| AttrValue::from("Apa Kata Klien ?"))]
    pub title: AttrValue,
    #[prop_or_else(|| AttrValue::from("Mahasiswa yang sudah terbantu menyelesaikan tugas akhir mereka"))]
    pub description: AttrValue,
    #[prop_or_else(|| TESTIMONIALS.to_vec())]
    pub items: Vec<Testimonial>,
    #[prop_or(BASE_SPEED_PX)]
    pub speed: f64,
}

#[function_component(TestimonialsSection)]
pub fn testimonials_section(props: &TestimonialsSectionProps) -> Html {
    let mobile = use_state_eq(is_mobile);

    {
        let mobile = mobile.clone();
        use_effect_with_deps(
            move |_| {
                let listener = WindowListener::new("resize", move |_| mobile.set(is_mobile()));
                move || drop(listener)
            },
            (),
        );
    }

    let columns = distribute(&props.items, COLUMN_COUNT);

    html! {
        <section id={props.id.clone()} class="section section-dark testimonials">
            if !*mobile {
                <ParticleBackground config={particles()} />
            }
            <div class="section-container">
                <div class="section-header">
                    <h2 class="section-title text-white">{ props.title.clone() }</h2>
                    <p class="section-description text-soft">{ props.description.clone() }</p>
                </div>
                if *mobile {
                    <div class="testimonial-list">
                        { for props.items.iter().map(testimonial_card) }
                    </div>
                } else {
                    <div class="testimonial-wall">
                        <div class="wall-mask wall-mask-top" aria-hidden="true" />
                        <div class="wall-mask wall-mask-bottom" aria-hidden="true" />
                        { for columns.iter().enumerate().map(|(i, column)| html! {
                            <MarqueeRail config={column_config(i, props.speed)} class={classes!("testimonial-column")}>
                                { for column.iter().map(testimonial_card) }
                            </MarqueeRail>
                        }) }
                    </div>
                }
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn middle_column_runs_down_at_its_own_pace() {
        let speeds: Vec<_> = (0..COLUMN_COUNT).map(|i| column_config(i, 30.0).speed).collect();
        assert_eq!(speeds[0], Speed::PxPerSec(30.0));
        assert!(matches!(speeds[1], Speed::PxPerSec(v) if (v - 27.6).abs() < 1e-9));
        assert!(matches!(speeds[2], Speed::PxPerSec(v) if (v - 32.4).abs() < 1e-9));
        assert_eq!(column_config(1, 30.0).direction, Direction::Reverse);
        assert_eq!(column_config(2, 30.0).direction, Direction::Forward);
        assert_eq!(column_config(0, 30.0).axis, Axis::Y);
    }

    #[test]
    fn every_testimonial_lands_in_a_column() {
        let columns = distribute(TESTIMONIALS, COLUMN_COUNT);
        assert_eq!(columns.iter().map(Vec::len).sum::<usize>(), TESTIMONIALS.len());
        assert_eq!(columns[0][0].name, TESTIMONIALS[0].name);
        assert_eq!(columns[1][0].name, TESTIMONIALS[1].name);
    }
}
