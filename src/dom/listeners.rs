use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Event, EventTarget};

/// Passive event listener removed again on drop.
pub struct WindowListener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl WindowListener {
    pub fn new(event: &'static str, on_event: impl FnMut(Event) + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        Self::on(window.as_ref(), event, on_event)
    }

    /// Same as [`WindowListener::new`] on another target, e.g. the document.
    #[allow(deprecated)]
    pub fn on(target: &EventTarget, event: &'static str, on_event: impl FnMut(Event) + 'static) -> Option<Self> {
        let callback = Closure::wrap(Box::new(on_event) as Box<dyn FnMut(Event)>);
        let mut options = AddEventListenerOptions::new();
        options.passive(true);
        if let Err(e) = target.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            callback.as_ref().unchecked_ref(),
            &options,
        ) {
            warn!("Failed to listen for {}: {:?}", event, e);
            return None;
        }
        Some(WindowListener { target: target.clone(), event, callback })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

struct Throttle {
    pending: Cell<Option<i32>>,
    callback: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

/// Coalesces bursts of events (scroll, resize) into one call per animation
/// frame.
pub struct FrameThrottle {
    inner: Rc<Throttle>,
}

impl FrameThrottle {
    pub fn new(mut run: impl FnMut() + 'static) -> Self {
        let inner = Rc::new(Throttle { pending: Cell::new(None), callback: RefCell::new(None) });
        let weak = Rc::downgrade(&inner);
        let callback = Closure::wrap(Box::new(move |_ts: f64| {
            if let Some(inner) = weak.upgrade() {
                inner.pending.set(None);
            }
            run();
        }) as Box<dyn FnMut(f64)>);
        *inner.callback.borrow_mut() = Some(callback);
        FrameThrottle { inner }
    }

    pub fn request(&self) {
        if self.inner.pending.get().is_some() {
            return;
        }
        let Some(window) = web_sys::window() else {
            return;
        };
        let callback = self.inner.callback.borrow();
        if let Some(callback) = callback.as_ref() {
            if let Ok(id) = window.request_animation_frame(callback.as_ref().unchecked_ref()) {
                self.inner.pending.set(Some(id));
            }
        }
    }
}

impl Clone for FrameThrottle {
    fn clone(&self) -> Self {
        FrameThrottle { inner: self.inner.clone() }
    }
}

impl Drop for FrameThrottle {
    fn drop(&mut self) {
        // Clones share one pending frame; only the last handle cancels it.
        if Rc::strong_count(&self.inner) > 1 {
            return;
        }
        if let Some(id) = self.inner.pending.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
    }
}
