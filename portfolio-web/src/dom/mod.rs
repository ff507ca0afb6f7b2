//! Browser page bindings.
//!
//! DOM listeners push [`SiteEvent`]s into a shared queue; the systems below
//! drain it each frame and drive the portfolio controller, page chrome,
//! contact form and analytics. Every DOM handle lives in a non-send resource
//! because the browser runs the whole app on one thread.

use std::rc::Rc;

use bevy::prelude::*;
use portfolio_core::analytics::{Analytics, AnalyticsEvent, ContactMethod, SocialPlatform};
use portfolio_core::{Capabilities, PortfolioView};

use crate::site::{SiteData, load_site_data};

mod analytics;
mod contact;
mod document;
mod events;
mod lazy;
mod notify;
mod page;
mod portfolio;
mod remote;

use analytics::{GtagSink, bind_tracked_links, probe_browser};
use contact::ContactBinding;
use events::{EventQueue, SiteEvent, process_site_events};
use lazy::LazyImages;
use page::{HeroCanvas, PageChrome, update_hero_visibility};
use portfolio::{DomPortfolioSurface, render_partners};

pub struct SitePlugin;

impl Plugin for SitePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<EventQueue>()
            .add_event::<SiteEvent>()
            .add_systems(Startup, bind_page.after(load_site_data))
            .add_systems(
                Update,
                (
                    process_site_events,
                    (
                        handle_portfolio_events,
                        handle_page_events,
                        handle_contact_events,
                        handle_tracked_clicks,
                    ),
                )
                    .chain(),
            )
            .add_systems(PreUpdate, update_hero_visibility);
    }
}

/// Analytics front door shared with async tasks.
struct SiteAnalytics(Rc<Analytics>);

struct PortfolioSection(PortfolioView<DomPortfolioSurface>);

/// Keeps the partner image observer alive.
#[allow(dead_code)]
struct PartnersSection(LazyImages);

fn bind_page(world: &mut World) {
    let Some(site) = world.get_resource::<SiteData>().cloned() else {
        warn!("No site data, page bindings skipped");
        return;
    };
    let Some(window) = document::window() else {
        error!("Window object not available");
        return;
    };
    let Some(document) = window.document() else {
        error!("Document not available");
        return;
    };

    let probe = probe_browser(&window);
    let capabilities = Capabilities::resolve(&probe, &site.config);
    info!("Capabilities resolved: {capabilities:?}");

    let sink = capabilities
        .analytics
        .then(|| GtagSink::from_window(&window))
        .flatten()
        .map(|sink| Box::new(sink) as Box<dyn portfolio_core::analytics::AnalyticsSink>);
    let analytics = Rc::new(Analytics::new(sink));
    let location = window.location();
    analytics.track(&AnalyticsEvent::PageView {
        title: document.title(),
        location: location.href().unwrap_or_default(),
        path: location.pathname().unwrap_or_default(),
    });

    let queue = world.resource::<EventQueue>().clone();

    let surface = DomPortfolioSurface::bind(&document, &capabilities, &queue);
    let portfolio = PortfolioView::initialise(site.catalog.clone(), surface);
    world.insert_non_send_resource(PortfolioSection(portfolio));

    if let Some(partners) = render_partners(&document, &site.catalog, &capabilities) {
        world.insert_non_send_resource(PartnersSection(partners));
    }

    if let Some(contact) =
        ContactBinding::bind(&document, site.config.clone(), &queue, analytics.clone())
    {
        world.insert_non_send_resource(contact);
    }

    world.insert_non_send_resource(PageChrome::bind(&document, &capabilities, &queue));
    bind_tracked_links(&document, &queue);

    match HeroCanvas::find(&document) {
        Some(canvas) => world.insert_non_send_resource(canvas),
        None => warn!("Hero canvas not found, scene runs unconditionally"),
    }

    world.insert_non_send_resource(SiteAnalytics(analytics));
    info!("✅ Page bindings initialised");
}

fn handle_portfolio_events(
    mut events: EventReader<SiteEvent>,
    portfolio: Option<NonSendMut<PortfolioSection>>,
    analytics: Option<NonSend<SiteAnalytics>>,
) {
    let (Some(mut portfolio), Some(analytics)) = (portfolio, analytics) else {
        events.clear();
        return;
    };
    for event in events.read() {
        match event {
            SiteEvent::FilterSelected(tag) => {
                portfolio.0.set_filter(tag);
                analytics.0.track(&AnalyticsEvent::PortfolioFilter {
                    filter: tag.clone(),
                });
            }
            SiteEvent::LoadMore => {
                portfolio.0.load_more();
                analytics.0.track(&AnalyticsEvent::LoadMore);
            }
            _ => {}
        }
    }
}

fn handle_page_events(
    mut events: EventReader<SiteEvent>,
    chrome: Option<NonSendMut<PageChrome>>,
    analytics: Option<NonSend<SiteAnalytics>>,
) {
    let (Some(mut chrome), Some(analytics)) = (chrome, analytics) else {
        events.clear();
        return;
    };
    let mut scrolled = false;
    for event in events.read() {
        match event {
            SiteEvent::Scrolled => scrolled = true,
            SiteEvent::NavToggled => chrome.toggle_menu(),
            SiteEvent::NavLinkClicked(href) => chrome.follow_nav_link(href),
            SiteEvent::BackToTop => {
                chrome.scroll_to_top();
                analytics.0.track(&AnalyticsEvent::ButtonClick {
                    label: "back_to_top".to_string(),
                    location: "page".to_string(),
                });
            }
            _ => {}
        }
    }
    // Scroll events arrive many times per frame; one update reflects them all.
    if scrolled {
        chrome.on_scroll(&analytics.0);
    }
}

fn handle_contact_events(
    mut events: EventReader<SiteEvent>,
    contact: Option<NonSend<ContactBinding>>,
    analytics: Option<NonSend<SiteAnalytics>>,
) {
    let (Some(contact), Some(analytics)) = (contact, analytics) else {
        events.clear();
        return;
    };
    for event in events.read() {
        if let SiteEvent::ContactSubmitted(form) = event {
            contact.submit(form.clone(), analytics.0.clone());
        }
    }
}

fn handle_tracked_clicks(
    mut events: EventReader<SiteEvent>,
    analytics: Option<NonSend<SiteAnalytics>>,
) {
    let Some(analytics) = analytics else {
        events.clear();
        return;
    };
    for event in events.read() {
        let tracked = match event {
            SiteEvent::SocialLinkClicked(href) => {
                AnalyticsEvent::SocialClick(SocialPlatform::from_href(href))
            }
            SiteEvent::ContactMethodClicked(href) => {
                AnalyticsEvent::ContactClick(ContactMethod::from_href(href))
            }
            SiteEvent::CtaClicked(text) => AnalyticsEvent::CtaClick { text: text.clone() },
            _ => continue,
        };
        analytics.0.track(&tracked);
    }
}
