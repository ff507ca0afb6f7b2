//! Intersection watchers backed by one-shot registrations.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use bevy::prelude::*;
use constants::portfolio::{
    DEFERRED_SRC_ATTRIBUTE, LAZY_KEY_ATTRIBUTE, LAZY_ROOT_MARGIN_PX, LOADED_CLASS,
};
use portfolio_core::lazy::{LazyImageTracker, LazyKey, OneShotRegistry};
use portfolio_core::viewport::root_margin;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::document::{add_class, js_error, query_within};

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

fn create_observer(
    init: &IntersectionObserverInit,
    callback: ObserverCallback,
) -> Option<IntersectionObserver> {
    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), init) {
        Ok(observer) => {
            callback.forget();
            Some(observer)
        }
        Err(err) => {
            error!("IntersectionObserver unavailable: {}", js_error(err));
            None
        }
    }
}

fn intersection_entries(entries: js_sys::Array) -> impl Iterator<Item = IntersectionObserverEntry> {
    entries
        .iter()
        .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
}

fn load_image(image: &Element, src: &str) {
    let _ = image.set_attribute("src", src);
    let _ = image.remove_attribute(DEFERRED_SRC_ATTRIBUTE);
    add_class(image, LOADED_CLASS);
}

/// Deferred images of one rendered container.
///
/// Every pass discards the previous observations; an image is loaded at most
/// once per pass.
pub struct LazyImages {
    tracker: Rc<RefCell<LazyImageTracker>>,
    observer: Option<IntersectionObserver>,
}

impl LazyImages {
    /// Without observer support images load as soon as they are attached.
    pub fn new(use_observer: bool) -> Self {
        let tracker = Rc::new(RefCell::new(LazyImageTracker::new()));
        let observer = if use_observer {
            Self::image_observer(tracker.clone())
        } else {
            None
        };
        Self { tracker, observer }
    }

    fn image_observer(tracker: Rc<RefCell<LazyImageTracker>>) -> Option<IntersectionObserver> {
        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                let mut targets = HashMap::new();
                let mut batch = Vec::new();
                for entry in intersection_entries(entries) {
                    let target = entry.target();
                    let Some(key) = target
                        .get_attribute(LAZY_KEY_ATTRIBUTE)
                        .and_then(|raw| raw.parse::<LazyKey>().ok())
                    else {
                        continue;
                    };
                    batch.push((key, entry.is_intersecting()));
                    targets.insert(key, target);
                }

                for (key, src) in tracker.borrow_mut().resolve_batch(batch) {
                    if let Some(image) = targets.get(&key) {
                        load_image(image, &src);
                        observer.unobserve(image);
                    }
                }
            },
        ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_root_margin(&root_margin(LAZY_ROOT_MARGIN_PX));
        create_observer(&init, callback)
    }

    pub fn begin_pass(&mut self, locators: Vec<String>) -> Vec<LazyKey> {
        if let Some(observer) = &self.observer {
            observer.disconnect();
        }
        self.tracker.borrow_mut().begin_pass(locators)
    }

    /// Watch the deferred images rendered into `container` by the current pass.
    pub fn attach(&self, container: &Element) {
        let images = query_within(container, &format!("img[{LAZY_KEY_ATTRIBUTE}]"));
        match &self.observer {
            Some(observer) => {
                for image in &images {
                    observer.observe(image);
                }
            }
            None => {
                for (key, src) in self.tracker.borrow_mut().resolve_all() {
                    if let Some(image) = images.get(key.index) {
                        load_image(image, &src);
                    }
                }
            }
        }
    }
}

/// Call `on_visible` once per element when it first reaches `threshold` visibility.
pub fn watch_once<F>(elements: Vec<Element>, threshold: f64, use_observer: bool, mut on_visible: F)
where
    F: FnMut(&Element) + 'static,
{
    if elements.is_empty() {
        return;
    }
    if !use_observer {
        elements.iter().for_each(&mut on_visible);
        return;
    }

    let mut registry = OneShotRegistry::new();
    for (index, element) in elements.iter().enumerate() {
        registry.subscribe(index, element.clone());
    }
    let observed = elements.clone();

    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in intersection_entries(entries) {
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                let Some(index) = elements
                    .iter()
                    .position(|element| element.is_same_node(Some(target.as_ref())))
                else {
                    continue;
                };
                if let Some(element) = registry.fire(&index) {
                    on_visible(&element);
                }
                observer.unobserve(&target);
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    if let Some(observer) = create_observer(&init, callback) {
        for element in &observed {
            observer.observe(element);
        }
    }
}
