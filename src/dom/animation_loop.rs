use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

type FrameCallback = Closure<dyn FnMut(f64)>;

struct Inner {
    frame: RefCell<Box<dyn FnMut(f64)>>,
    running: Cell<bool>,
    handle: Cell<Option<i32>>,
    callback: RefCell<Option<FrameCallback>>,
}

/// A `requestAnimationFrame` loop that can be paused and resumed.
///
/// The frame function receives the high resolution timestamp of the frame.
/// At most one frame request is outstanding at any time, and nothing is
/// scheduled after `pause`, `dispose` or drop.
pub struct AnimationLoop {
    inner: Rc<Inner>,
}

impl AnimationLoop {
    pub fn new(frame: impl FnMut(f64) + 'static) -> Self {
        let inner = Rc::new(Inner {
            frame: RefCell::new(Box::new(frame)),
            running: Cell::new(false),
            handle: Cell::new(None),
            callback: RefCell::new(None),
        });

        let weak: Weak<Inner> = Rc::downgrade(&inner);
        let callback = Closure::wrap(Box::new(move |ts: f64| {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            inner.handle.set(None);
            if !inner.running.get() {
                return;
            }
            if let Ok(mut frame) = inner.frame.try_borrow_mut() {
                frame(ts);
            }
            if inner.running.get() {
                schedule(&inner);
            }
        }) as Box<dyn FnMut(f64)>);
        *inner.callback.borrow_mut() = Some(callback);

        AnimationLoop { inner }
    }

    pub fn start(&self) {
        if self.inner.running.replace(true) {
            return;
        }
        schedule(&self.inner);
    }

    pub fn pause(&self) {
        self.inner.running.set(false);
        if let Some(id) = self.inner.handle.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
    }

    pub fn is_running(&self) -> bool {
        self.inner.running.get()
    }

    /// Stops the loop and frees the JS callback. `start` is a no-op afterwards.
    pub fn dispose(&self) {
        self.pause();
        self.inner.callback.borrow_mut().take();
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        self.dispose();
    }
}

fn schedule(inner: &Inner) {
    if inner.handle.get().is_some() {
        return;
    }
    let Some(window) = web_sys::window() else {
        return;
    };
    let callback = inner.callback.borrow();
    let Some(callback) = callback.as_ref() else {
        inner.running.set(false);
        return;
    };
    match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
        Ok(id) => inner.handle.set(Some(id)),
        Err(e) => {
            warn!("requestAnimationFrame failed: {:?}", e);
            inner.running.set(false);
        }
    }
}
