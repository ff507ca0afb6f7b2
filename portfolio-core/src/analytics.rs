//! Engagement events and the sinks that receive them.

use constants::page::SCROLL_DEPTH_MARKS;
use serde_json::{Value, json};
use tracing::debug;

const ENGAGEMENT: &str = "engagement";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalyticsEvent {
    PageView {
        title: String,
        location: String,
        path: String,
    },
    ButtonClick {
        label: String,
        location: String,
    },
    FormSubmit,
    FormSubmitSuccess {
        service: String,
    },
    FormSubmitError {
        message: String,
    },
    PortfolioFilter {
        filter: String,
    },
    VideoPlay {
        video: String,
    },
    SocialClick(SocialPlatform),
    ContactClick(ContactMethod),
    LoadMore,
    CtaClick {
        text: String,
    },
    ScrollDepth(u8),
}

impl AnalyticsEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::PageView { .. } => "page_view",
            Self::ButtonClick { .. } => "button_click",
            Self::FormSubmit => "form_submit",
            Self::FormSubmitSuccess { .. } => "form_submit_success",
            Self::FormSubmitError { .. } => "form_submit_error",
            Self::PortfolioFilter { .. } => "portfolio_filter",
            Self::VideoPlay { .. } => "video_play",
            Self::SocialClick(_) => "social_click",
            Self::ContactClick(_) => "contact_click",
            Self::LoadMore => "load_more",
            Self::CtaClick { .. } => "cta_click",
            Self::ScrollDepth(_) => "scroll_depth",
        }
    }

    /// Parameters passed alongside the event name.
    pub fn params(&self) -> Value {
        match self {
            Self::PageView {
                title,
                location,
                path,
            } => json!({
                "page_title": title,
                "page_location": location,
                "page_path": path,
            }),
            Self::ButtonClick { label, location } => json!({
                "event_category": ENGAGEMENT,
                "event_label": label,
                "button_location": location,
            }),
            Self::FormSubmit => labelled("contact_form"),
            Self::FormSubmitSuccess { service } => json!({
                "event_category": ENGAGEMENT,
                "event_label": "contact_form",
                "service": service,
            }),
            Self::FormSubmitError { message } => json!({
                "event_category": "error",
                "event_label": message,
            }),
            Self::PortfolioFilter { filter } => labelled(filter),
            Self::VideoPlay { video } => labelled(video),
            Self::SocialClick(platform) => labelled(platform.label()),
            Self::ContactClick(method) => labelled(method.label()),
            Self::LoadMore => labelled("portfolio"),
            Self::CtaClick { text } => labelled(text),
            Self::ScrollDepth(mark) => labelled(&format!("{mark}%")),
        }
    }
}

fn labelled(label: &str) -> Value {
    json!({
        "event_category": ENGAGEMENT,
        "event_label": label,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialPlatform {
    Facebook,
    Instagram,
    LinkedIn,
    TikTok,
    WhatsApp,
    Unknown,
}

impl SocialPlatform {
    pub fn from_href(href: &str) -> Self {
        if href.contains("facebook") {
            Self::Facebook
        } else if href.contains("instagram") {
            Self::Instagram
        } else if href.contains("linkedin") {
            Self::LinkedIn
        } else if href.contains("tiktok") {
            Self::TikTok
        } else if href.contains("wa.me") {
            Self::WhatsApp
        } else {
            Self::Unknown
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Facebook => "Facebook",
            Self::Instagram => "Instagram",
            Self::LinkedIn => "LinkedIn",
            Self::TikTok => "TikTok",
            Self::WhatsApp => "WhatsApp",
            Self::Unknown => "Unknown",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactMethod {
    Email,
    Phone,
    WhatsApp,
    Address,
}

impl ContactMethod {
    pub fn from_href(href: &str) -> Self {
        if href.contains("mailto") {
            Self::Email
        } else if href.contains("tel") {
            Self::Phone
        } else if href.contains("wa.me") {
            Self::WhatsApp
        } else {
            Self::Address
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::WhatsApp => "WhatsApp",
            Self::Address => "Address",
        }
    }
}

/// Receiver of tracked events, e.g. the page's `gtag` function.
pub trait AnalyticsSink {
    fn emit(&self, name: &str, params: &Value);
}

/// Event front door. Without a sink every call is a no-op.
#[derive(Default)]
pub struct Analytics {
    sink: Option<Box<dyn AnalyticsSink>>,
}

impl Analytics {
    pub fn new(sink: Option<Box<dyn AnalyticsSink>>) -> Self {
        Self { sink }
    }

    pub fn disabled() -> Self {
        Self { sink: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.sink.is_some()
    }

    pub fn track(&self, event: &AnalyticsEvent) {
        if let Some(sink) = &self.sink {
            debug!("tracking {}", event.name());
            sink.emit(event.name(), &event.params());
        }
    }
}

/// Scroll position as a rounded percentage of the scrollable height.
///
/// `None` when the page does not scroll.
pub fn scroll_percent(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> Option<i64> {
    let scrollable = scroll_height - viewport_height;
    if scrollable <= 0.0 {
        return None;
    }
    Some((scroll_y / scrollable * 100.0).round() as i64)
}

/// Remembers which depth marks were already reported this session.
#[derive(Debug, Default)]
pub struct ScrollDepthTracker {
    reported: Vec<u8>,
}

impl ScrollDepthTracker {
    /// Marks newly reached at `percent`, in ascending order.
    pub fn reached(&mut self, percent: i64) -> Vec<u8> {
        let fresh: Vec<u8> = SCROLL_DEPTH_MARKS
            .iter()
            .copied()
            .filter(|mark| percent >= i64::from(*mark) && !self.reported.contains(mark))
            .collect();
        self.reported.extend_from_slice(&fresh);
        fresh
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct Recorder(Rc<RefCell<Vec<(String, Value)>>>);

    impl AnalyticsSink for Recorder {
        fn emit(&self, name: &str, params: &Value) {
            self.0.borrow_mut().push((name.to_string(), params.clone()));
        }
    }

    #[test]
    fn payloads_carry_category_and_label() {
        let event = AnalyticsEvent::ScrollDepth(75);
        assert_eq!(event.name(), "scroll_depth");
        assert_eq!(
            event.params(),
            json!({"event_category": "engagement", "event_label": "75%"})
        );

        let error = AnalyticsEvent::FormSubmitError {
            message: "boom".into(),
        };
        assert_eq!(error.params()["event_category"], "error");

        assert_eq!(AnalyticsEvent::LoadMore.params()["event_label"], "portfolio");
        let video = AnalyticsEvent::VideoPlay {
            video: "showreel".into(),
        };
        assert_eq!(video.name(), "video_play");
        assert_eq!(video.params()["event_label"], "showreel");
        let success = AnalyticsEvent::FormSubmitSuccess {
            service: "web".into(),
        };
        assert_eq!(success.params()["service"], "web");
    }

    #[test]
    fn page_view_has_no_category() {
        let params = AnalyticsEvent::PageView {
            title: "Home".into(),
            location: "https://studio.test/".into(),
            path: "/".into(),
        }
        .params();
        assert_eq!(params["page_path"], "/");
        assert!(params.get("event_category").is_none());
    }

    #[test]
    fn disabled_analytics_is_silent() {
        let recorder = Recorder::default();
        Analytics::disabled().track(&AnalyticsEvent::FormSubmit);
        assert!(recorder.0.borrow().is_empty());

        let analytics = Analytics::new(Some(Box::new(recorder.clone())));
        analytics.track(&AnalyticsEvent::FormSubmit);
        assert_eq!(recorder.0.borrow()[0].0, "form_submit");
    }

    #[test]
    fn scroll_marks_fire_once() {
        let mut tracker = ScrollDepthTracker::default();
        assert!(tracker.reached(10).is_empty());
        assert_eq!(tracker.reached(60), vec![25, 50]);
        assert!(tracker.reached(55).is_empty());
        assert_eq!(tracker.reached(100), vec![75, 100]);
        assert!(tracker.reached(100).is_empty());
    }

    #[test]
    fn scroll_percent_rounds_and_guards() {
        assert_eq!(scroll_percent(500.0, 2000.0, 1000.0), Some(50));
        assert_eq!(scroll_percent(333.0, 2000.0, 1000.0), Some(33));
        assert_eq!(scroll_percent(0.0, 800.0, 800.0), None);
    }

    #[test]
    fn links_are_classified() {
        assert_eq!(
            SocialPlatform::from_href("https://www.instagram.com/studio"),
            SocialPlatform::Instagram
        );
        assert_eq!(
            SocialPlatform::from_href("https://wa.me/20111"),
            SocialPlatform::WhatsApp
        );
        assert_eq!(
            SocialPlatform::from_href("https://example.com"),
            SocialPlatform::Unknown
        );
        assert_eq!(
            ContactMethod::from_href("mailto:hi@studio.test"),
            ContactMethod::Email
        );
        assert_eq!(ContactMethod::from_href("tel:+20111"), ContactMethod::Phone);
        assert_eq!(
            ContactMethod::from_href("https://maps.google.com"),
            ContactMethod::Address
        );
    }
}
