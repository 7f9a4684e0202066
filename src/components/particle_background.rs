use web_sys::{Element, HtmlCanvasElement};
use yew::prelude::*;

use super::canvas_scene::mount_scene;
use crate::motion::particles::{ParticleConfig, ParticleField};

#[derive(Properties, PartialEq)]
pub struct ParticleBackgroundProps {
    #[prop_or_else(|| classes!("decor-layer"))]
    pub class: Classes,
    #[prop_or_default]
    pub config: ParticleConfig,
}

/// Drifting particle network behind a section. Restarts from scratch when
/// the configuration changes.
#[function_component(ParticleBackground)]
pub fn particle_background(props: &ParticleBackgroundProps) -> Html {
    let container_ref = use_node_ref();
    let canvas_ref = use_node_ref();

    {
        let container_ref = container_ref.clone();
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |config: &ParticleConfig| {
                let handle = match (container_ref.cast::<Element>(), canvas_ref.cast::<HtmlCanvasElement>()) {
                    (Some(container), Some(canvas)) => {
                        mount_scene(container, canvas, ParticleField::new(config.clone()))
                    }
                    _ => None,
                };
                move || drop(handle)
            },
            props.config.clone(),
        );
    }

    html! {
        <div ref={container_ref} class={props.class.clone()} aria-hidden="true">
            <canvas ref={canvas_ref} />
        </div>
    }
}
