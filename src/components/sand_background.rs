use web_sys::{Element, HtmlCanvasElement};
use yew::prelude::*;

use super::canvas_scene::mount_scene;
use crate::motion::sand::{SandConfig, SandField, EDGE_MASK};

#[derive(Properties, PartialEq)]
pub struct SandBackgroundProps {
    #[prop_or_else(|| classes!("decor-layer"))]
    pub class: Classes,
    #[prop_or_default]
    pub config: SandConfig,
}

#[function_component(SandBackground)]
pub fn sand_background(props: &SandBackgroundProps) -> Html {
    let container_ref = use_node_ref();
    let canvas_ref = use_node_ref();

    {
        let container_ref = container_ref.clone();
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |config: &SandConfig| {
                let handle = match (container_ref.cast::<Element>(), canvas_ref.cast::<HtmlCanvasElement>()) {
                    (Some(container), Some(canvas)) => mount_scene(container, canvas, SandField::new(config.clone())),
                    _ => None,
                };
                move || drop(handle)
            },
            props.config.clone(),
        );
    }

    let style = props
        .config
        .mask_fade
        .then(|| format!("mask-image:{EDGE_MASK};-webkit-mask-image:{EDGE_MASK};"));

    html! {
        <div ref={container_ref} class={props.class.clone()} style={style} aria-hidden="true">
            <canvas ref={canvas_ref} />
        </div>
    }
}
