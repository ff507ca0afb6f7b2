//! DOM listeners feeding Bevy events.
//!
//! Browser callbacks run outside the schedule, so they only push into a
//! shared queue; `process_site_events` drains it once per frame into
//! [`SiteEvent`]s for the handler systems.

use std::sync::{Arc, Mutex};

use bevy::prelude::*;
use portfolio_core::contact::ContactForm;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Event, EventTarget};

use super::document::js_error;

#[derive(Event, Debug, Clone)]
pub enum SiteEvent {
    FilterSelected(String),
    LoadMore,
    Scrolled,
    NavToggled,
    NavLinkClicked(String),
    BackToTop,
    SocialLinkClicked(String),
    ContactMethodClicked(String),
    CtaClicked(String),
    ContactSubmitted(ContactForm),
}

/// Queue shared between DOM closures and the Bevy schedule.
#[derive(Resource, Clone, Default)]
pub struct EventQueue(Arc<Mutex<Vec<SiteEvent>>>);

impl EventQueue {
    pub fn push(&self, event: SiteEvent) {
        if let Ok(mut queue) = self.0.lock() {
            queue.push(event);
        }
    }

    fn take(&self) -> Vec<SiteEvent> {
        self.0
            .lock()
            .map(|mut queue| std::mem::take(&mut *queue))
            .unwrap_or_default()
    }
}

pub fn process_site_events(queue: Res<EventQueue>, mut site_events: EventWriter<SiteEvent>) {
    for event in queue.take() {
        site_events.write(event);
    }
}

/// Attach `handler` for `kind` events on `target` for the lifetime of the page.
pub fn listen<F>(target: &EventTarget, kind: &str, handler: F)
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    if let Err(err) = target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
    {
        error!("Failed to register {kind} listener: {}", js_error(err));
    }
    // Ownership moves to JS so the listener outlives this call.
    closure.forget();
}

/// Listener that turns each DOM event into at most one queued [`SiteEvent`].
pub fn queue_on<F>(target: &EventTarget, kind: &str, queue: &EventQueue, mut make: F)
where
    F: FnMut(&Event) -> Option<SiteEvent> + 'static,
{
    let queue = queue.clone();
    listen(target, kind, move |event| {
        if let Some(site_event) = make(&event) {
            queue.push(site_event);
        }
    });
}
