use yew::prelude::*;

use crate::components::{ContactModal, Corner, GlowBlob, GridBackground, SectionWrapper};
use crate::content::{PricingPlan, PRICING_PLANS};
use crate::icons::{HeroIcon, Icon};

pub const POPULAR_BADGE: &str = "POPULER";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanAction {
    /// Opens the plan's own link in a new tab.
    Link(&'static str),
    /// Opens the contact-method picker for the plan.
    Contact,
}

/// Everything a pricing card shows, decided without touching the DOM.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanCardView {
    pub name: &'static str,
    pub price: &'static str,
    pub description: Option<&'static str>,
    pub included: &'static [&'static str],
    pub excluded: &'static [&'static str],
    pub badge: Option<&'static str>,
    pub highlighted: bool,
    pub cta_label: &'static str,
    pub cta_aria: String,
    pub action: PlanAction,
}

impl PlanCardView {
    pub fn of(plan: &PricingPlan) -> Self {
        PlanCardView {
            name: plan.name,
            price: plan.price,
            description: Some(plan.description).filter(|d| !d.is_empty()),
            included: plan.features,
            excluded: plan.not_included,
            badge: plan.popular.then_some(POPULAR_BADGE),
            highlighted: plan.popular,
            cta_label: plan.cta_label(),
            cta_aria: format!("Pilih {}", plan.name),
            action: plan.cta_href().map_or(PlanAction::Contact, PlanAction::Link),
        }
    }
}

#[derive(Properties, PartialEq)]
struct PlanCardProps {
    view: PlanCardView,
    on_select: Callback<&'static str>,
}

#[function_component(PlanCard)]
fn plan_card(props: &PlanCardProps) -> Html {
    let view = &props.view;
    let button_class = classes!("button", "button-block", "button-lg", if view.highlighted { "button-primary" } else { "button-soft" });

    let cta = match view.action {
        PlanAction::Link(href) => html! {
            <a class="block" href={href} target="_blank" rel="noopener noreferrer">
                <span class={button_class} aria-label={view.cta_aria.clone()}>{ view.cta_label }</span>
            </a>
        },
        PlanAction::Contact => {
            let onclick = {
                let on_select = props.on_select.clone();
                let name = view.name;
                Callback::from(move |_: MouseEvent| on_select.emit(name))
            };
            html! {
                <button class={button_class} aria-label={view.cta_aria.clone()} {onclick}>{ view.cta_label }</button>
            }
        }
    };

    html! {
        <article class={classes!("card", "plan-card", view.highlighted.then_some("plan-popular"))}>
            if let Some(badge) = view.badge {
                <span class="plan-badge">{ badge }</span>
            }
            <header class="plan-header">
                <h3>{ view.name }</h3>
                <div class="plan-price">{ view.price }</div>
                if let Some(description) = view.description {
                    <p class="text-muted">{ description }</p>
                }
            </header>
            <ul class="plan-features">
                { for view.included.iter().map(|f| html! {
                    <li class="included"><Icon icon={HeroIcon::Check} class="icon-sm text-emerald" /><span>{ *f }</span></li>
                }) }
                { for view.excluded.iter().map(|f| html! {
                    <li class="excluded"><Icon icon={HeroIcon::XMark} class="icon-sm text-rose" /><span>{ *f }</span></li>
                }) }
            </ul>
            { cta }
        </article>
    }
}

#[derive(Properties, PartialEq)]
pub struct PricingSectionProps {
    #[prop_or_else(|| AttrValue::from("pricing"))]
    pub id: AttrValue,
    #[prop_or_else(|| PRICING_PLANS.to_vec())]
    pub plans: Vec<PricingPlan>,
    #[prop_or(false)]
    pub show_glow: bool,
}

#[function_component(PricingSection)]
pub fn pricing_section(props: &PricingSectionProps) -> Html {
    let selected = use_state_eq(|| None::<&'static str>);

    let on_select = {
        let selected = selected.clone();
        Callback::from(move |name: &'static str| selected.set(Some(name)))
    };
    let on_close = {
        let selected = selected.clone();
        Callback::from(move |_| selected.set(None))
    };

    let decor = html! {
        <>
            if props.show_glow {
                <GlowBlob position={Corner::TopRight} color="rgba(59, 130, 246, 0.20)" />
                <GlowBlob position={Corner::BottomLeft} color="rgba(14, 165, 233, 0.15)" />
            }
            <GridBackground size={50} major_every={3} minor_opacity={0.07} major_opacity={0.16} />
        </>
    };

    html! {
        <SectionWrapper
            id={props.id.clone()}
            title="Paket Harga Terjangkau"
            description="Harga khusus mahasiswa dengan kualitas profesional. Bisa dicicil 2x pembayaran!"
            class={classes!("section-dark")}
            title_class={classes!("text-white")}
            description_class={classes!("text-soft")}
            {decor}
        >
            <div class="card-grid three pricing-grid">
                { for props.plans.iter().map(|plan| html! {
                    <PlanCard key={plan.name} view={PlanCardView::of(plan)} on_select={on_select.clone()} />
                }) }
            </div>
            <ContactModal
                open={selected.is_some()}
                on_close={on_close}
                package_name={selected.unwrap_or_default()}
            />
        </SectionWrapper>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_popular_badge() {
        let views: Vec<_> = PRICING_PLANS.iter().map(PlanCardView::of).collect();
        assert_eq!(views.len(), 3);
        let badged: Vec<_> = views.iter().filter(|v| v.badge == Some(POPULAR_BADGE)).collect();
        assert_eq!(badged.len(), 1);
        assert_eq!(badged[0].name, "Paket Standard");
        assert!(badged[0].highlighted);
    }

    #[test]
    fn plans_without_link_open_contact_picker() {
        let view = PlanCardView::of(&PRICING_PLANS[0]);
        assert_eq!(view.action, PlanAction::Contact);
        assert_eq!(view.cta_label, "Pilih Paket Ini");
        assert_eq!(view.cta_aria, "Pilih Paket Basic");
    }

    #[test]
    fn linked_plan_keeps_its_label() {
        let plan = PricingPlan {
            cta: Some(crate::content::CallToAction { label: "Hubungi", href: Some("https://example.com") }),
            ..PRICING_PLANS[2]
        };
        let view = PlanCardView::of(&plan);
        assert_eq!(view.action, PlanAction::Link("https://example.com"));
        assert_eq!(view.cta_label, "Hubungi");
        assert_eq!(view.badge, None);
    }
}
