//! `gtag` analytics sink and browser capability probing.

use bevy::prelude::*;
use constants::page::{CONTACT_METHOD_SELECTOR, CTA_SELECTOR, SOCIAL_LINK_SELECTOR};
use portfolio_core::analytics::{AnalyticsSink, SocialPlatform};
use portfolio_core::config::BrowserProbe;
use serde_json::Value;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Window};

use super::document::{js_error, query_all};
use super::events::{EventQueue, SiteEvent, queue_on};

fn global(window: &Window, name: &str) -> Option<JsValue> {
    js_sys::Reflect::get(window, &JsValue::from_str(name))
        .ok()
        .filter(|value| !value.is_undefined() && !value.is_null())
}

pub fn probe_browser(window: &Window) -> BrowserProbe {
    let cores = window.navigator().hardware_concurrency();
    BrowserProbe {
        has_gtag: global(window, "gtag").is_some_and(|value| value.is_function()),
        has_intersection_observer: global(window, "IntersectionObserver").is_some(),
        hardware_concurrency: (cores.is_finite() && cores >= 1.0).then_some(cores as u32),
    }
}

/// Forwards events to the page's global `gtag` function.
pub struct GtagSink {
    gtag: js_sys::Function,
}

impl GtagSink {
    pub fn from_window(window: &Window) -> Option<Self> {
        global(window, "gtag")
            .and_then(|value| value.dyn_into::<js_sys::Function>().ok())
            .map(|gtag| Self { gtag })
    }
}

impl AnalyticsSink for GtagSink {
    fn emit(&self, name: &str, params: &Value) {
        let params = match js_sys::JSON::parse(&params.to_string()) {
            Ok(params) => params,
            Err(err) => {
                warn!("Dropping analytics event {name}: {}", js_error(err));
                return;
            }
        };
        if let Err(err) = self.gtag.call3(
            &JsValue::NULL,
            &JsValue::from_str("event"),
            &JsValue::from_str(name),
            &params,
        ) {
            warn!("gtag call failed for {name}: {}", js_error(err));
        } else {
            info!("📊 {name} tracked");
        }
    }
}

/// Footer social links, contact methods and call-to-action buttons.
pub fn bind_tracked_links(document: &Document, queue: &EventQueue) {
    for link in query_all(document, SOCIAL_LINK_SELECTOR) {
        let href = link.get_attribute("href").unwrap_or_default();
        if SocialPlatform::from_href(&href) == SocialPlatform::Unknown {
            continue;
        }
        queue_on(&link, "click", queue, move |_| {
            Some(SiteEvent::SocialLinkClicked(href.clone()))
        });
    }

    for method in query_all(document, CONTACT_METHOD_SELECTOR) {
        let href = method.get_attribute("href").unwrap_or_default();
        queue_on(&method, "click", queue, move |_| {
            Some(SiteEvent::ContactMethodClicked(href.clone()))
        });
    }

    for button in query_all(document, CTA_SELECTOR) {
        let text = button.text_content().unwrap_or_default().trim().to_string();
        queue_on(&button, "click", queue, move |_| {
            Some(SiteEvent::CtaClicked(text.clone()))
        });
    }
}
