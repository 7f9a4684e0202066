use yew::prelude::*;

use crate::dom::viewport::{scroll_metrics, smooth_scroll_to};
use crate::dom::{FrameThrottle, WindowListener};
use crate::icons::{HeroIcon, Icon};
use crate::motion::scroll::{Ring, ScrollState};

/// Floating button with a ring showing how far the page is scrolled.
#[function_component(ScrollToTop)]
pub fn scroll_to_top() -> Html {
    let scroll = use_state_eq(|| ScrollState::measure(0.0, 0.0, 0.0));

    {
        let scroll = scroll.clone();
        use_effect_with_deps(
            move |_| {
                let update = FrameThrottle::new(move || {
                    if let Some((top, height, client)) = scroll_metrics() {
                        scroll.set(ScrollState::measure(top, height, client));
                    }
                });
                update.request();
                let listeners: Vec<WindowListener> = ["scroll", "resize"]
                    .into_iter()
                    .filter_map(|event| {
                        let update = update.clone();
                        WindowListener::new(event, move |_| update.request())
                    })
                    .collect();
                move || {
                    drop(listeners);
                    drop(update);
                }
            },
            (),
        );
    }

    let ring = Ring::default();
    let onclick = Callback::from(|_: MouseEvent| smooth_scroll_to(0.0));
    let percent = scroll.percent().to_string();

    html! {
        <button
            class={classes!("scroll-top", scroll.visible.then_some("visible"))}
            aria-label="Scroll ke atas"
            title="Scroll ke atas"
            role="progressbar"
            aria-valuemin="0"
            aria-valuemax="100"
            aria-valuenow={percent}
            tabindex={if scroll.visible { "0" } else { "-1" }}
            {onclick}
        >
            <svg class="scroll-top-ring" width={ring.size.to_string()} height={ring.size.to_string()}
                viewBox={format!("0 0 {0} {0}", ring.size)} aria-hidden="true">
                <circle class="scroll-top-track" cx={ring.center().to_string()} cy={ring.center().to_string()}
                    r={ring.radius().to_string()} stroke-width={ring.stroke.to_string()} fill="none" />
                <circle class="scroll-top-progress" cx={ring.center().to_string()} cy={ring.center().to_string()}
                    r={ring.radius().to_string()} stroke-width={ring.stroke.to_string()} fill="none"
                    stroke-linecap="round"
                    stroke-dasharray={ring.circumference().to_string()}
                    stroke-dashoffset={ring.dash_offset(scroll.progress).to_string()}
                    transform={format!("rotate(-90 {0} {0})", ring.center())} />
            </svg>
            <Icon icon={HeroIcon::ChevronUp} class="scroll-top-icon" />
        </button>
    }
}
