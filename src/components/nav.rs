use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::config::SITE;
use crate::content::{NavItem, NAV_ITEMS};
use crate::dom::viewport::{scroll_to_section, scroll_y};
use crate::dom::{VisibilityObserver, VisibilityOptions, WindowListener};
use crate::icons::{HeroIcon, Icon};

pub const SCROLLED_AFTER_PX: f64 = 40.0;
/// Navbar height plus a little breathing room.
pub const SECTION_OFFSET_PX: f64 = 72.0 + 8.0;
const ACTIVE_THRESHOLDS: [f64; 4] = [0.1, 0.25, 0.5, 0.75];

/// Section with the largest visible ratio. Ties go to the earlier anchor.
pub fn most_visible(items: &[NavItem], ratios: &HashMap<String, f64>) -> Option<&'static str> {
    let mut best: Option<(&'static str, f64)> = None;
    for item in items {
        let id = item.section_id();
        let ratio = ratios.get(id).copied().unwrap_or(0.0);
        if ratio > 0.0 && best.map_or(true, |(_, r)| ratio > r) {
            best = Some((id, ratio));
        }
    }
    best.map(|(id, _)| id)
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state_eq(|| false);
    let active = use_state_eq(|| NAV_ITEMS.first().map(NavItem::section_id).unwrap_or("home"));
    let route = use_route::<Route>();
    let on_home = matches!(route, Some(Route::Home) | None);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                is_scrolled.set(scroll_y() > SCROLLED_AFTER_PX);
                let listener = WindowListener::new("scroll", move |_| {
                    is_scrolled.set(scroll_y() > SCROLLED_AFTER_PX);
                });
                move || drop(listener)
            },
            (),
        );
    }

    {
        let active = active.clone();
        use_effect_with_deps(
            move |on_home: &bool| {
                let mut observer = None;
                if *on_home {
                    let ratios: Rc<RefCell<HashMap<String, f64>>> = Rc::default();
                    let options = VisibilityOptions::new("0px", &ACTIVE_THRESHOLDS);
                    observer = VisibilityObserver::new(&options, move |changes| {
                        let mut ratios = ratios.borrow_mut();
                        for change in changes {
                            let ratio = if change.intersecting { change.ratio } else { 0.0 };
                            ratios.insert(change.target.id(), ratio);
                        }
                        if let Some(id) = most_visible(NAV_ITEMS, &ratios) {
                            active.set(id);
                        }
                    });
                    if let (Some(observer), Some(document)) = (&observer, web_sys::window().and_then(|w| w.document())) {
                        for item in NAV_ITEMS {
                            if let Some(section) = document.get_element_by_id(item.section_id()) {
                                observer.observe(&section);
                            }
                        }
                    }
                }
                move || drop(observer)
            },
            on_home,
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let link = |item: &NavItem| {
        let id = item.section_id();
        let onclick = {
            let menu_open = menu_open.clone();
            Callback::from(move |e: MouseEvent| {
                menu_open.set(false);
                // off the landing page the plain "/#id" href navigates home
                if scroll_to_section(id, SECTION_OFFSET_PX) {
                    e.prevent_default();
                }
            })
        };
        let href = format!("/{}", item.href);
        html! {
            <a {href} class={classes!("nav-link", (on_home && *active == id).then_some("active"))} {onclick}>
                { item.label }
            </a>
        }
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then_some("scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    { SITE.name }
                </Link<Route>>

                <button class="burger-menu" aria-label="Menu" aria-expanded={menu_open.to_string()} onclick={toggle_menu}>
                    if *menu_open {
                        <Icon icon={HeroIcon::XMark} class="icon-md" />
                    } else {
                        <Icon icon={HeroIcon::Bars3} class="icon-md" />
                    }
                </button>
                <div class={classes!("nav-right", (*menu_open).then_some("mobile-menu-open"))}>
                    { for NAV_ITEMS.iter().map(link) }
                </div>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ratios(pairs: &[(&str, f64)]) -> HashMap<String, f64> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn picks_largest_ratio() {
        let r = ratios(&[("home", 0.1), ("services", 0.6), ("portfolio", 0.25)]);
        assert_eq!(most_visible(NAV_ITEMS, &r), Some("services"));
    }

    #[test]
    fn ties_prefer_earlier_anchor() {
        let r = ratios(&[("pricing", 0.5), ("services", 0.5)]);
        assert_eq!(most_visible(NAV_ITEMS, &r), Some("services"));
    }

    #[test]
    fn nothing_visible_keeps_previous() {
        let r = ratios(&[("home", 0.0), ("team", 0.9)]);
        assert_eq!(most_visible(NAV_ITEMS, &r), None);
    }

    #[test]
    fn offset_clears_navbar() {
        assert_eq!(SECTION_OFFSET_PX, 80.0);
    }
}
