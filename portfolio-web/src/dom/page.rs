//! Navigation, back-to-top, scroll reveal, stats counters and the hero video.

use std::cell::Cell;
use std::rc::Rc;

use bevy::prelude::*;
use constants::hero_scene::HERO_CANVAS_SELECTOR;
use constants::page::{
    BACK_TO_TOP_ID, HERO_VIDEO_CONTAINER_SELECTOR, HERO_VIDEO_FALLBACK_MS, HERO_VIDEO_SELECTOR,
    NAV_ID, NAV_LINK_SELECTOR, NAV_MENU_ID, NAV_TOGGLE_ID, REDUCE_MOTION_CLASS, REVEAL_SELECTOR,
    REVEAL_VISIBILITY_THRESHOLD, STATS_BAR_DELAY_MS, STATS_BAR_SELECTOR, STATS_NUMBER_SELECTOR,
    STATS_SELECTOR, STATS_VISIBILITY_THRESHOLD, VISIBLE_CLASS,
};
use constants::portfolio::{ACTIVE_CLASS, LOADED_CLASS};
use portfolio_core::Capabilities;
use portfolio_core::analytics::{Analytics, AnalyticsEvent, ScrollDepthTracker, scroll_percent};
use portfolio_core::page::{
    CounterAnimation, NavScrollState, anchor_scroll_target, back_to_top_visible,
};
use portfolio_core::viewport::{ElementBounds, intersects_viewport};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollToOptions};

use super::document::{
    add_class, inner_height, js_error, query_all, query_within, remove_class, scroll_y, set_class,
    set_timeout, window,
};
use super::events::{EventQueue, SiteEvent, listen, queue_on};
use super::lazy::watch_once;
use crate::engine::systems::visibility::HeroVisibility;

pub struct PageChrome {
    document: Document,
    nav: Option<Element>,
    nav_toggle: Option<Element>,
    nav_menu: Option<Element>,
    back_to_top: Option<Element>,
    nav_state: NavScrollState,
    scroll_depth: ScrollDepthTracker,
}

impl PageChrome {
    pub fn bind(document: &Document, capabilities: &Capabilities, queue: &EventQueue) -> Self {
        if let Some(window) = window() {
            queue_on(&window, "scroll", queue, |_| Some(SiteEvent::Scrolled));
        }

        let nav = document.get_element_by_id(NAV_ID);
        let nav_toggle = document.get_element_by_id(NAV_TOGGLE_ID);
        let nav_menu = document.get_element_by_id(NAV_MENU_ID);
        let back_to_top = document.get_element_by_id(BACK_TO_TOP_ID);

        if let Some(toggle) = &nav_toggle {
            queue_on(toggle, "click", queue, |_| Some(SiteEvent::NavToggled));
        }
        for link in query_all(document, NAV_LINK_SELECTOR) {
            let href = link.get_attribute("href").unwrap_or_default();
            queue_on(&link, "click", queue, move |event| {
                event.prevent_default();
                Some(SiteEvent::NavLinkClicked(href.clone()))
            });
        }
        match &back_to_top {
            Some(button) => queue_on(button, "click", queue, |event| {
                event.prevent_default();
                Some(SiteEvent::BackToTop)
            }),
            None => warn!("#{BACK_TO_TOP_ID} not found"),
        }

        if capabilities.reduced_motion {
            if let Some(body) = document.body() {
                add_class(&body, REDUCE_MOTION_CLASS);
            }
            info!("Low core count, reduced motion enabled");
        }

        watch_once(
            query_all(document, REVEAL_SELECTOR),
            REVEAL_VISIBILITY_THRESHOLD,
            capabilities.intersection_observer,
            |element| add_class(element, VISIBLE_CLASS),
        );
        watch_once(
            query_all(document, STATS_SELECTOR),
            STATS_VISIBILITY_THRESHOLD,
            capabilities.intersection_observer,
            animate_stats,
        );
        bind_hero_video(document);

        // Pick up the initial scroll position on the first frame.
        queue.push(SiteEvent::Scrolled);

        Self {
            document: document.clone(),
            nav,
            nav_toggle,
            nav_menu,
            back_to_top,
            nav_state: NavScrollState::default(),
            scroll_depth: ScrollDepthTracker::default(),
        }
    }

    pub fn on_scroll(&mut self, analytics: &Analytics) {
        let y = scroll_y();

        let appearance = self.nav_state.update(y);
        if let Some(nav) = &self.nav {
            set_class(nav, "scrolled", appearance.scrolled);
            if let Some(nav) = nav.dyn_ref::<HtmlElement>() {
                let transform = if appearance.hidden {
                    "translateY(-100%)"
                } else {
                    "translateY(0)"
                };
                let _ = nav.style().set_property("transform", transform);
            }
        }

        if let Some(button) = &self.back_to_top {
            set_class(button, VISIBLE_CLASS, back_to_top_visible(y));
        }

        let scroll_height = self
            .document
            .document_element()
            .map(|root| f64::from(root.scroll_height()))
            .unwrap_or(0.0);
        if let Some(percent) = scroll_percent(y, scroll_height, inner_height()) {
            for mark in self.scroll_depth.reached(percent) {
                analytics.track(&AnalyticsEvent::ScrollDepth(mark));
            }
        }
    }

    pub fn toggle_menu(&self) {
        for element in [&self.nav_menu, &self.nav_toggle].into_iter().flatten() {
            let _ = element.class_list().toggle(ACTIVE_CLASS);
        }
    }

    pub fn follow_nav_link(&self, href: &str) {
        for element in [&self.nav_menu, &self.nav_toggle].into_iter().flatten() {
            remove_class(element, ACTIVE_CLASS);
        }
        if !href.starts_with('#') {
            return;
        }
        let target = self
            .document
            .query_selector(href)
            .ok()
            .flatten()
            .and_then(|element| element.dyn_into::<HtmlElement>().ok());
        match target {
            Some(target) => smooth_scroll_to(anchor_scroll_target(f64::from(target.offset_top()))),
            None => warn!("Navigation target {href} not found"),
        }
    }

    pub fn scroll_to_top(&self) {
        smooth_scroll_to(0.0);
    }
}

fn smooth_scroll_to(top: f64) {
    let Some(window) = window() else { return };
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

fn animate_stats(section: &Element) {
    for number in query_within(section, STATS_NUMBER_SELECTOR) {
        let frames = CounterAnimation::from_attribute(number.get_attribute("data-target").as_deref());
        run_counter(number, frames);
    }

    for bar in query_within(section, STATS_BAR_SELECTOR) {
        let width = bar.get_attribute("data-width").unwrap_or_default();
        set_timeout(STATS_BAR_DELAY_MS, move || {
            if let Some(bar) = bar.dyn_ref::<HtmlElement>() {
                let _ = bar.style().set_property("width", &format!("{width}%"));
            }
        });
    }
}

fn run_counter(element: Element, mut frames: CounterAnimation) {
    let Some(win) = window() else { return };
    let interval = Rc::new(Cell::new(None::<i32>));
    let interval_handle = interval.clone();

    let tick = Closure::wrap(Box::new(move || match frames.next() {
        Some(text) => element.set_text_content(Some(&text)),
        None => {
            if let (Some(win), Some(id)) = (window(), interval_handle.get()) {
                win.clear_interval_with_handle(id);
            }
        }
    }) as Box<dyn FnMut()>);

    match win.set_interval_with_callback_and_timeout_and_arguments_0(
        tick.as_ref().unchecked_ref(),
        CounterAnimation::step_interval_ms() as i32,
    ) {
        Ok(id) => interval.set(Some(id)),
        Err(err) => error!("Failed to start counter: {}", js_error(err)),
    }
    tick.forget();
}

fn bind_hero_video(document: &Document) {
    let Some(container) = query_all(document, HERO_VIDEO_CONTAINER_SELECTOR)
        .into_iter()
        .next()
    else {
        return;
    };

    if let Some(video) = query_all(document, HERO_VIDEO_SELECTOR).into_iter().next() {
        let loaded = container.clone();
        listen(&video, "load", move |_| add_class(&loaded, LOADED_CLASS));
    }
    set_timeout(HERO_VIDEO_FALLBACK_MS, move || add_class(&container, LOADED_CLASS));
}

/// Canvas the hero scene draws into, checked every frame against the viewport.
pub struct HeroCanvas(pub Element);

impl HeroCanvas {
    pub fn find(document: &Document) -> Option<Self> {
        document
            .query_selector(HERO_CANVAS_SELECTOR)
            .ok()
            .flatten()
            .map(Self)
    }
}

pub fn update_hero_visibility(
    canvas: Option<NonSend<HeroCanvas>>,
    mut visibility: ResMut<HeroVisibility>,
) {
    let Some(canvas) = canvas else { return };
    let rect = canvas.0.get_bounding_client_rect();
    let bounds = ElementBounds {
        top: rect.top(),
        bottom: rect.bottom(),
    };
    visibility.set_if_neq(HeroVisibility {
        visible: intersects_viewport(bounds, inner_height()),
    });
}
