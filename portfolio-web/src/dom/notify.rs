use bevy::prelude::*;
use portfolio_core::notification::Notification;

use super::document::{document, js_error, set_timeout};

/// Show `notification` and remove it once it has timed out.
pub fn show(notification: &Notification) {
    let Some(document) = document() else { return };
    let Some(body) = document.body() else { return };

    let overlay = if notification.has_overlay() {
        document.create_element("div").ok().inspect(|overlay| {
            overlay.set_class_name("notification-overlay");
            let _ = body.append_child(overlay);
        })
    } else {
        None
    };

    let element = match document.create_element("div") {
        Ok(element) => element,
        Err(err) => {
            error!("Failed to create notification: {}", js_error(err));
            return;
        }
    };
    element.set_class_name(notification.css_class());
    element.set_inner_html(&notification.inner_html());
    if let Err(err) = body.append_child(&element) {
        error!("Failed to show notification: {}", js_error(err));
        return;
    }

    set_timeout(notification.dismiss_after_ms as i32, move || {
        element.remove();
        if let Some(overlay) = overlay {
            overlay.remove();
        }
    });
}
