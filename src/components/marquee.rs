use std::cell::Cell;
use std::rc::Rc;

use web_sys::{Element, HtmlElement};
use yew::prelude::*;

use crate::dom::{prefers_reduced_motion, AnimationLoop, SizeObserver, VisibilityObserver, VisibilityOptions};
use crate::motion::marquee::{Axis, Marquee, MarqueeConfig};

pub const RAIL_ROOT_MARGIN: &str = "200px 0px 200px 0px";

#[derive(Properties, PartialEq)]
pub struct MarqueeRailProps {
    #[prop_or_default]
    pub config: MarqueeConfig,
    /// Classes of the clipping viewport.
    #[prop_or_default]
    pub class: Classes,
    /// Classes of the moving track.
    #[prop_or_default]
    pub track_class: Classes,
    #[prop_or_default]
    pub style: Option<AttrValue>,
    /// Pointer and touch drag.
    #[prop_or(false)]
    pub draggable: bool,
    #[prop_or_default]
    pub children: Children,
}

fn apply(track: &NodeRef, rail: &Marquee) {
    if let Some(track) = track.cast::<HtmlElement>() {
        let _ = track.style().set_property("transform", &rail.transform());
    }
}

fn extent(track: &Element, axis: Axis) -> f64 {
    match axis {
        Axis::X => track.scroll_width() as f64,
        Axis::Y => track.scroll_height() as f64,
    }
}

/// Endless rail of its children, rendered twice end to end. Runs only
/// while near the viewport and pauses while dragged.
#[function_component(MarqueeRail)]
pub fn marquee_rail(props: &MarqueeRailProps) -> Html {
    let viewport_ref = use_node_ref();
    let track_ref = use_node_ref();
    let rail = use_mut_ref(|| Marquee::new(props.config));
    let dragging = use_state_eq(|| false);

    {
        let viewport_ref = viewport_ref.clone();
        let track_ref = track_ref.clone();
        let rail = rail.clone();
        use_effect_with_deps(
            move |config: &MarqueeConfig| {
                *rail.borrow_mut() = Marquee::new(*config);
                let axis = config.axis;
                let reduced = prefers_reduced_motion();
                let visible = Rc::new(Cell::new(true));

                let frame_loop = {
                    let rail = rail.clone();
                    let track_ref = track_ref.clone();
                    Rc::new(AnimationLoop::new(move |ts| {
                        let mut rail = rail.borrow_mut();
                        rail.tick(ts);
                        apply(&track_ref, &rail);
                    }))
                };

                let sync: Rc<dyn Fn()> = {
                    let rail = rail.clone();
                    let frame_loop = frame_loop.clone();
                    let visible = visible.clone();
                    Rc::new(move || {
                        if !reduced && visible.get() && !rail.borrow().is_idle() {
                            frame_loop.start();
                        } else {
                            frame_loop.pause();
                        }
                    })
                };

                let size = track_ref.cast::<Element>().and_then(|track| {
                    let rail = rail.clone();
                    let track_ref = track_ref.clone();
                    let sync = sync.clone();
                    let measure = {
                        let track = track.clone();
                        move || {
                            let mut r = rail.borrow_mut();
                            r.set_scroll_extent(extent(&track, axis));
                            apply(&track_ref, &r);
                            drop(r);
                            sync();
                        }
                    };
                    measure();
                    SizeObserver::watch(&track, measure)
                });

                let visibility = viewport_ref.cast::<Element>().and_then(|viewport| {
                    let rail = rail.clone();
                    let sync = sync.clone();
                    VisibilityObserver::watch(
                        &viewport,
                        &VisibilityOptions::new(RAIL_ROOT_MARGIN, &[0.01]),
                        move |is_visible| {
                            visible.set(is_visible);
                            let mut r = rail.borrow_mut();
                            if is_visible {
                                r.resume();
                            } else {
                                r.pause();
                            }
                            drop(r);
                            sync();
                        },
                    )
                });

                move || {
                    drop(visibility);
                    drop(size);
                    drop(sync);
                    frame_loop.dispose();
                }
            },
            props.config,
        );
    }

    let axis = props.config.axis;
    let drag_handlers = props.draggable.then(|| {
        let start = {
            let rail = rail.clone();
            let dragging = dragging.clone();
            move |pos: f64, ts: f64| {
                rail.borrow_mut().drag_start(pos, ts);
                dragging.set(true);
            }
        };
        let moved = {
            let rail = rail.clone();
            let track_ref = track_ref.clone();
            move |pos: f64, ts: f64| {
                let mut r = rail.borrow_mut();
                if r.is_dragging() {
                    r.drag_move(pos, ts);
                    apply(&track_ref, &r);
                }
            }
        };
        let end = {
            let rail = rail.clone();
            let dragging = dragging.clone();
            move || {
                rail.borrow_mut().drag_end();
                dragging.set(false);
            }
        };
        let page = move |e: &MouseEvent| match axis {
            Axis::X => e.page_x() as f64,
            Axis::Y => e.page_y() as f64,
        };
        let touch_page = move |e: &TouchEvent| {
            e.touches().get(0).map(|t| match axis {
                Axis::X => t.page_x() as f64,
                Axis::Y => t.page_y() as f64,
            })
        };

        let onmousedown = {
            let start = start.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                start(page(&e), e.time_stamp());
            })
        };
        let onmousemove = {
            let moved = moved.clone();
            Callback::from(move |e: MouseEvent| moved(page(&e), e.time_stamp()))
        };
        let ontouchstart = Callback::from(move |e: TouchEvent| {
            if let Some(pos) = touch_page(&e) {
                start(pos, e.time_stamp());
            }
        });
        let ontouchmove = Callback::from(move |e: TouchEvent| {
            if let Some(pos) = touch_page(&e) {
                moved(pos, e.time_stamp());
            }
        });
        let onend = {
            let end = end.clone();
            Callback::from(move |_: MouseEvent| end())
        };
        let ontouchend = Callback::from(move |_: TouchEvent| end());
        (onmousedown, onmousemove, onend, ontouchstart, ontouchmove, ontouchend)
    });

    let track_classes = classes!(
        "marquee-track",
        matches!(axis, Axis::Y).then_some("marquee-track-vertical"),
        props.draggable.then_some(if *dragging { "grabbing" } else { "grab" }),
        props.track_class.clone()
    );
    let copies = html! {
        <>
            { for props.children.iter() }
            { for props.children.iter() }
        </>
    };

    html! {
        <div ref={viewport_ref} class={classes!("marquee-viewport", props.class.clone())} style={props.style.clone()}>
            {
                match drag_handlers {
                    Some((onmousedown, onmousemove, onend, ontouchstart, ontouchmove, ontouchend)) => html! {
                        <div ref={track_ref} class={track_classes}
                            {onmousedown} {onmousemove} onmouseup={onend.clone()} onmouseleave={onend}
                            {ontouchstart} {ontouchmove} {ontouchend}>
                            { copies }
                        </div>
                    },
                    None => html! {
                        <div ref={track_ref} class={track_classes}>{ copies }</div>
                    },
                }
            }
        </div>
    }
}
