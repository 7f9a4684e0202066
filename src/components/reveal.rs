use web_sys::Element;
use yew::prelude::*;

use crate::dom::{prefers_reduced_motion, VisibilityObserver, VisibilityOptions};
use crate::motion::reveal::{Reveal as RevealState, RevealKind, RevealTiming};

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub kind: RevealKind,
    /// Seconds.
    #[prop_or(0.6)]
    pub duration: f64,
    /// Seconds.
    #[prop_or(0.0)]
    pub delay: f64,
    #[prop_or(0.1)]
    pub threshold: f64,
    #[prop_or_else(|| AttrValue::from("0px 0px -100px 0px"))]
    pub root_margin: AttrValue,
    /// Replay the entrance every time the element scrolls back in.
    #[prop_or(true)]
    pub repeat_on_enter: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Animates its children in when they enter the viewport.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let state = use_state(|| RevealState::new(props.repeat_on_enter));

    {
        let node = node.clone();
        let state = state.clone();
        let options = VisibilityOptions::new(&props.root_margin, &[props.threshold]);
        use_effect_with_deps(
            move |(repeat, _)| {
                let observer = if prefers_reduced_motion() {
                    state.set(RevealState::settled());
                    None
                } else {
                    let mut machine = RevealState::new(*repeat);
                    node.cast::<Element>().and_then(|el| {
                        VisibilityObserver::watch(&el, &options, move |visible| {
                            if machine.observe(visible) {
                                state.set(machine);
                            }
                        })
                    })
                };
                move || drop(observer)
            },
            (props.repeat_on_enter, props.threshold.to_bits()),
        );
    }

    let timing = RevealTiming { duration_s: props.duration, delay_s: props.delay };
    html! {
        <div ref={node} class={classes!("reveal", props.class.clone())} style={state.style(props.kind, timing)}>
            { for props.children.iter() }
        </div>
    }
}
