//! Contact form: live field feedback, floating labels and submission.

use std::rc::Rc;

use bevy::prelude::*;
use constants::contact::{
    CONTACT_FORM_ID, ERROR_CLASS, FIELD_ERROR_CLASS, FILLED_CLASS, FOCUSED_CLASS,
    INVALID_FORM_MESSAGE, SUBMIT_BUTTON_BUSY_TEXT,
};
use portfolio_core::SiteConfig;
use portfolio_core::analytics::{Analytics, AnalyticsEvent};
use portfolio_core::contact::{
    ContactField, ContactForm, SubmissionContext, SubmissionReceipt, SubmitError, field_feedback,
    submit_and_notify, validate_submission,
};
use portfolio_core::notification::Notification;
use wasm_bindgen::JsCast;
use web_sys::{Element, FormData, HtmlButtonElement, HtmlFormElement};

use super::document::{add_class, query_within, remove_class, set_class, window};
use super::events::{EventQueue, SiteEvent, listen};
use super::notify;
use super::remote::{EmailJsTransport, FirestoreStore};

const FIELD_SELECTOR: &str = "input, textarea, select";
const GROUP_SELECTOR: &str = ".form__group";

pub struct ContactBinding {
    form: HtmlFormElement,
    config: SiteConfig,
}

impl ContactBinding {
    pub fn bind(
        document: &web_sys::Document,
        config: SiteConfig,
        queue: &EventQueue,
        analytics: Rc<Analytics>,
    ) -> Option<Self> {
        let Some(form) = document
            .get_element_by_id(CONTACT_FORM_ID)
            .and_then(|element| element.dyn_into::<HtmlFormElement>().ok())
        else {
            warn!("Contact form #{CONTACT_FORM_ID} not found, form disabled");
            return None;
        };

        let submit_queue = queue.clone();
        let submit_form = form.clone();
        listen(&form, "submit", move |event| {
            event.prevent_default();
            analytics.track(&AnalyticsEvent::FormSubmit);
            submit_queue.push(SiteEvent::ContactSubmitted(read_form(&submit_form)));
        });

        for field in query_within(&form, FIELD_SELECTOR) {
            bind_field(&field);
        }

        Some(Self { form, config })
    }

    /// Validate, then store the submission and send notification emails in the background.
    pub fn submit(&self, form: ContactForm, analytics: Rc<Analytics>) {
        if let Err(err) = validate_submission(form.clone()) {
            warn!("Contact form rejected: {err}");
            notify::show(&Notification::error(INVALID_FORM_MESSAGE));
            return;
        }

        let button = self.submit_button();
        let original_text = button.as_ref().and_then(|b| b.text_content());
        if let Some(button) = &button {
            button.set_text_content(Some(SUBMIT_BUTTON_BUSY_TEXT));
            button.set_disabled(true);
        }

        let element = self.form.clone();
        let config = self.config.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let context = submission_context();
            let store = FirestoreStore::new(config.document_store().cloned());
            let studio = config.studio.clone();

            // The button comes back as soon as the document is stored or
            // rejected; notification emails follow in the background.
            let on_settled = move |result: &Result<SubmissionReceipt, SubmitError>| {
                match result {
                    Ok(_) => {
                        notify::show(&Notification::success(&studio));
                        element.reset();
                        for group in query_within(&element, GROUP_SELECTOR) {
                            remove_class(&group, FOCUSED_CLASS);
                        }
                    }
                    Err(err) => {
                        error!("Error submitting contact form: {err}");
                        notify::show(&Notification::error(err.user_message()));
                    }
                }
                if let Some(button) = button {
                    button.set_text_content(original_text.as_deref());
                    button.set_disabled(false);
                }
            };

            submit_and_notify(
                &store,
                &EmailJsTransport,
                &config,
                form,
                &context,
                &analytics,
                on_settled,
            )
            .await;
        });
    }

    fn submit_button(&self) -> Option<HtmlButtonElement> {
        self.form
            .query_selector("button[type=\"submit\"]")
            .ok()
            .flatten()
            .and_then(|element| element.dyn_into::<HtmlButtonElement>().ok())
    }
}

fn read_form(form: &HtmlFormElement) -> ContactForm {
    let Ok(data) = FormData::new_with_form(form) else {
        return ContactForm::default();
    };
    let value = |name: &str| data.get(name).as_string().unwrap_or_default();
    ContactForm::from_pairs(
        ["name", "email", "company", "service", "message"]
            .into_iter()
            .map(|name| (name, value(name))),
    )
}

fn submission_context() -> SubmissionContext {
    let navigator = window().map(|w| w.navigator());
    let now_ms = js_sys::Date::now() as i64;
    SubmissionContext {
        user_agent: navigator
            .as_ref()
            .and_then(|n| n.user_agent().ok())
            .unwrap_or_default(),
        language: navigator
            .as_ref()
            .and_then(|n| n.language())
            .unwrap_or_default(),
        submitted_at: chrono::DateTime::from_timestamp_millis(now_ms).unwrap_or_default(),
    }
}

fn field_value(field: &Element) -> String {
    js_sys::Reflect::get(field, &"value".into())
        .ok()
        .and_then(|value| value.as_string())
        .unwrap_or_default()
}

/// Floating label classes and inline validation for one input.
fn bind_field(field: &Element) {
    let Some(group) = field.parent_element() else {
        return;
    };

    let focus_group = group.clone();
    listen(field, "focus", move |_| add_class(&focus_group, FOCUSED_CLASS));

    let blur_group = group.clone();
    let blur_field = field.clone();
    listen(field, "blur", move |_| {
        let filled = !field_value(&blur_field).is_empty();
        if !filled {
            remove_class(&blur_group, FOCUSED_CLASS);
        }
        set_class(&blur_field, FILLED_CLASS, filled);
    });

    let Some(kind) = field
        .get_attribute("name")
        .and_then(|name| ContactField::from_name(&name))
    else {
        return;
    };
    let input_field = field.clone();
    listen(field, "input", move |_| {
        show_field_error(&group, field_feedback(kind, &field_value(&input_field)));
    });
}

fn show_field_error(group: &Element, error: Option<impl ToString>) {
    for stale in query_within(group, &format!(".{FIELD_ERROR_CLASS}")) {
        stale.remove();
    }
    let Some(error) = error else {
        remove_class(group, ERROR_CLASS);
        return;
    };

    add_class(group, ERROR_CLASS);
    let Some(document) = group.owner_document() else {
        return;
    };
    if let Ok(span) = document.create_element("span") {
        span.set_class_name(FIELD_ERROR_CLASS);
        span.set_text_content(Some(&error.to_string()));
        let _ = group.append_child(&span);
    }
}
