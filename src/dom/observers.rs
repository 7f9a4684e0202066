use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, ResizeObserver};

#[derive(Debug, Clone, PartialEq)]
pub struct VisibilityOptions {
    pub root_margin: String,
    pub thresholds: Vec<f64>,
}

impl VisibilityOptions {
    pub fn new(root_margin: &str, thresholds: &[f64]) -> Self {
        VisibilityOptions { root_margin: root_margin.to_string(), thresholds: thresholds.to_vec() }
    }

    pub fn threshold(threshold: f64) -> Self {
        Self::new("0px", &[threshold])
    }
}

impl Default for VisibilityOptions {
    fn default() -> Self {
        Self::threshold(0.01)
    }
}

/// One intersection change, reduced to what the components read.
#[derive(Debug, Clone)]
pub struct Visibility {
    pub target: Element,
    pub intersecting: bool,
    pub ratio: f64,
}

/// `IntersectionObserver` that disconnects on drop.
pub struct VisibilityObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array)>,
}

impl VisibilityObserver {
    #[allow(deprecated)]
    pub fn new(options: &VisibilityOptions, mut on_change: impl FnMut(Vec<Visibility>) + 'static) -> Option<Self> {
        let callback = Closure::wrap(Box::new(move |entries: Array| {
            let changes = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .map(|entry| Visibility {
                    target: entry.target(),
                    intersecting: entry.is_intersecting(),
                    ratio: entry.intersection_ratio(),
                })
                .collect();
            on_change(changes);
        }) as Box<dyn FnMut(Array)>);

        let thresholds = Array::new();
        for t in &options.thresholds {
            thresholds.push(&JsValue::from_f64(*t));
        }
        let mut init = IntersectionObserverInit::new();
        init.root_margin(&options.root_margin);
        init.threshold(&thresholds);

        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(observer) => Some(VisibilityObserver { observer, _callback: callback }),
            Err(e) => {
                warn!("IntersectionObserver unavailable: {:?}", e);
                None
            }
        }
    }

    /// Observes a single element, the common case.
    pub fn watch(
        target: &Element,
        options: &VisibilityOptions,
        mut on_change: impl FnMut(bool) + 'static,
    ) -> Option<Self> {
        let observer = Self::new(options, move |changes| {
            if let Some(last) = changes.last() {
                on_change(last.intersecting);
            }
        })?;
        observer.observe(target);
        Some(observer)
    }

    pub fn observe(&self, target: &Element) {
        self.observer.observe(target);
    }

    pub fn unobserve(&self, target: &Element) {
        self.observer.unobserve(target);
    }
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// `ResizeObserver` on one element that disconnects on drop.
pub struct SizeObserver {
    observer: ResizeObserver,
    _callback: Closure<dyn FnMut(Array)>,
}

impl SizeObserver {
    pub fn watch(target: &Element, mut on_resize: impl FnMut() + 'static) -> Option<Self> {
        let callback = Closure::wrap(Box::new(move |_entries: Array| {
            on_resize();
        }) as Box<dyn FnMut(Array)>);

        match ResizeObserver::new(callback.as_ref().unchecked_ref()) {
            Ok(observer) => {
                observer.observe(target);
                Some(SizeObserver { observer, _callback: callback })
            }
            Err(e) => {
                warn!("ResizeObserver unavailable: {:?}", e);
                None
            }
        }
    }
}

impl Drop for SizeObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
