//! Shared lifecycle for the decorative canvases: size the canvas to its
//! container, run the frame loop only while visible, track the pointer.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::debug;
use rand::thread_rng;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Element, Event, HtmlCanvasElement, MouseEvent};

use crate::dom::{prefers_reduced_motion, AnimationLoop, Canvas, SizeObserver, VisibilityObserver, VisibilityOptions, WindowListener};
use crate::motion::particles::ParticleField;
use crate::motion::sand::SandField;
use crate::motion::Pointer;

const VISIBLE_THRESHOLD: f64 = 0.01;

pub trait Scene: 'static {
    fn resize(&mut self, width: f64, height: f64);
    fn restart(&mut self);
    fn frame(&mut self, ts: f64, pointer: Option<Pointer>, surface: &mut CanvasRenderingContext2d);
}

impl Scene for ParticleField {
    fn resize(&mut self, width: f64, height: f64) {
        ParticleField::resize(self, width, height, &mut thread_rng());
    }

    fn restart(&mut self) {
        ParticleField::restart(self);
    }

    fn frame(&mut self, ts: f64, pointer: Option<Pointer>, surface: &mut CanvasRenderingContext2d) {
        self.step(ts, pointer);
        self.draw(surface, pointer);
    }
}

impl Scene for SandField {
    fn resize(&mut self, width: f64, height: f64) {
        SandField::resize(self, width, height, &mut thread_rng());
    }

    fn restart(&mut self) {
        SandField::restart(self);
    }

    fn frame(&mut self, ts: f64, pointer: Option<Pointer>, surface: &mut CanvasRenderingContext2d) {
        self.step(ts, pointer, &mut thread_rng());
        self.draw(surface);
    }
}

/// Everything a mounted scene holds. Dropping it stops the loop and
/// unregisters the observers and listeners.
pub struct SceneHandle {
    _listeners: Vec<WindowListener>,
    _visibility: Option<VisibilityObserver>,
    _size: Option<SizeObserver>,
    _loop: Rc<AnimationLoop>,
}

pub fn mount_scene<S: Scene>(container: Element, canvas: HtmlCanvasElement, scene: S) -> Option<SceneHandle> {
    let canvas = Rc::new(RefCell::new(Canvas::attach(canvas)?));
    let scene = Rc::new(RefCell::new(scene));
    let pointer: Rc<Cell<Option<Pointer>>> = Rc::new(Cell::new(None));
    let reduced = prefers_reduced_motion();

    let resize = {
        let canvas = canvas.clone();
        let scene = scene.clone();
        let container = container.clone();
        move || {
            let rect = container.get_bounding_client_rect();
            canvas.borrow().fit(rect.width(), rect.height());
            scene.borrow_mut().resize(rect.width(), rect.height());
        }
    };
    resize();
    let size = SizeObserver::watch(&container, resize);

    let frame_loop = {
        let canvas = canvas.clone();
        let scene = scene.clone();
        let pointer = pointer.clone();
        Rc::new(AnimationLoop::new(move |ts| {
            let mut canvas = canvas.borrow_mut();
            scene.borrow_mut().frame(ts, pointer.get(), canvas.surface());
        }))
    };

    let visibility = {
        let frame_loop = frame_loop.clone();
        let scene = scene.clone();
        VisibilityObserver::watch(&container, &VisibilityOptions::threshold(VISIBLE_THRESHOLD), move |visible| {
            if visible && !reduced {
                if !frame_loop.is_running() {
                    scene.borrow_mut().restart();
                    frame_loop.start();
                }
            } else {
                frame_loop.pause();
            }
        })
    };
    if reduced {
        debug!("Reduced motion requested, canvas animation stays idle");
    } else {
        frame_loop.start();
    }

    let track = {
        let pointer = pointer.clone();
        let canvas = canvas.clone();
        move |e: Event| {
            if let Some(e) = e.dyn_ref::<MouseEvent>() {
                let rect = canvas.borrow().element().get_bounding_client_rect();
                pointer.set(Pointer::new(e.client_x() as f64 - rect.left(), e.client_y() as f64 - rect.top()));
            }
        }
    };
    let mut listeners = Vec::new();
    listeners.extend(WindowListener::new("pointermove", track.clone()));
    listeners.extend(WindowListener::new("pointerdown", track));
    listeners.extend(WindowListener::new("pointerleave", move |_| pointer.set(None)));

    Some(SceneHandle { _listeners: listeners, _visibility: visibility, _size: size, _loop: frame_loop })
}
