//! Modal notifications shown after a contact submission.

use constants::contact::{ERROR_NOTIFICATION_MS, SUCCESS_NOTIFICATION_MS};

use crate::config::StudioContact;
use crate::portfolio::markup::escape_html;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub heading: Option<String>,
    pub lines: Vec<String>,
    pub dismiss_after_ms: u32,
}

impl Notification {
    pub fn success(studio: &StudioContact) -> Self {
        Self {
            kind: NotificationKind::Success,
            heading: Some("Thank you for contacting us!".to_string()),
            lines: vec![
                "Your message has been received.".to_string(),
                "We will get back to you as soon as possible.".to_string(),
                studio.email.clone(),
                studio.phone.clone(),
            ],
            dismiss_after_ms: SUCCESS_NOTIFICATION_MS,
        }
    }

    pub fn error(message: &str) -> Self {
        Self {
            kind: NotificationKind::Error,
            heading: None,
            lines: vec![message.to_string()],
            dismiss_after_ms: ERROR_NOTIFICATION_MS,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self.kind {
            NotificationKind::Success => "notification notification--success",
            NotificationKind::Error => "notification notification--error",
        }
    }

    /// Success notifications dim the page behind them.
    pub fn has_overlay(&self) -> bool {
        self.kind == NotificationKind::Success
    }

    pub fn inner_html(&self) -> String {
        let mut html = String::new();
        if let Some(heading) = &self.heading {
            html.push_str(&format!("<h3>{}</h3>", escape_html(heading)));
        }
        for line in &self.lines {
            html.push_str(&format!("<p>{}</p>", escape_html(line)));
        }
        html
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_lists_studio_contacts() {
        let studio = StudioContact {
            name: "Studio".into(),
            email: "sales@studio.test".into(),
            phone: "+20 111".into(),
            address: "Cairo".into(),
        };
        let note = Notification::success(&studio);
        assert_eq!(note.css_class(), "notification notification--success");
        assert!(note.has_overlay());
        assert_eq!(note.dismiss_after_ms, 5000);
        assert!(note.inner_html().contains("<p>sales@studio.test</p>"));
    }

    #[test]
    fn error_is_escaped_single_line() {
        let note = Notification::error("<b>oops</b>");
        assert!(!note.has_overlay());
        assert_eq!(note.dismiss_after_ms, 4000);
        assert_eq!(note.inner_html(), "<p>&lt;b&gt;oops&lt;/b&gt;</p>");
    }
}
