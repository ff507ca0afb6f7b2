mod document;
mod email;
mod validation;

pub use document::{
    ContactDocument, DocumentId, DocumentStore, SubmissionContext, create_document_url,
    parse_created_document,
};
pub use email::{
    ADMIN_NOTIFICATION_TEMPLATE, CONFIRMATION_TEMPLATE, EmailOutcome, EmailRequest, EmailTemplate,
    EmailTransport, admin_request, confirmation_request, render_template, send_notifications,
};
pub use validation::{
    ContactField, ContactForm, ValidatedContact, ValidationError, field_feedback, is_valid_email,
    validate_field, validate_submission,
};

use constants::contact::{INVALID_FORM_MESSAGE, SUBMIT_FAILED_MESSAGE};
use thiserror::Error;
use tracing::{error, info};

use crate::analytics::{Analytics, AnalyticsEvent};
use crate::config::SiteConfig;
use crate::error::StoreError;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("invalid submission: {0}")]
    Invalid(#[from] ValidationError),
    #[error("{}", .0.user_message())]
    Store(#[from] StoreError),
}

impl SubmitError {
    /// Text shown in the error notification.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Invalid(_) => INVALID_FORM_MESSAGE,
            Self::Store(_) => SUBMIT_FAILED_MESSAGE,
        }
    }
}

/// A stored submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReceipt {
    pub id: DocumentId,
    pub contact: ValidatedContact,
}

/// Validate and persist a contact form.
///
/// Invalid forms never reach the store. Store outcomes are reported to
/// analytics as `form_submit_success` or `form_submit_error`.
pub async fn submit_contact<S: DocumentStore>(
    store: &S,
    form: ContactForm,
    context: &SubmissionContext,
    analytics: &Analytics,
) -> Result<SubmissionReceipt, SubmitError> {
    let contact = validate_submission(form)?;
    let document = ContactDocument::new(&contact, context);

    match store.create_document(&document).await {
        Ok(id) => {
            info!("contact submission stored with id {id}");
            analytics.track(&AnalyticsEvent::FormSubmitSuccess {
                service: document.service.clone(),
            });
            Ok(SubmissionReceipt { id, contact })
        }
        Err(err) => {
            let message = err.user_message();
            error!("error saving contact submission ({}): {message}", err.code());
            analytics.track(&AnalyticsEvent::FormSubmitError { message });
            Err(SubmitError::Store(err))
        }
    }
}

/// Store a form, hand the outcome to `on_settled`, then send the notification
/// emails for a stored submission.
///
/// `on_settled` runs before any email is sent, so the page can restore its
/// submit button without waiting on the email relay. Returns `None` when the
/// submission was not stored.
pub async fn submit_and_notify<S, T, F>(
    store: &S,
    transport: &T,
    config: &SiteConfig,
    form: ContactForm,
    context: &SubmissionContext,
    analytics: &Analytics,
    on_settled: F,
) -> Option<EmailOutcome>
where
    S: DocumentStore,
    T: EmailTransport,
    F: FnOnce(&Result<SubmissionReceipt, SubmitError>),
{
    let result = submit_contact(store, form, context, analytics).await;
    on_settled(&result);
    let receipt = result.ok()?;
    Some(
        send_notifications(
            transport,
            config.email(),
            receipt.contact.form(),
            &config.studio,
            context.submitted_at,
        )
        .await,
    )
}

/// Drive a future that never suspends. Test transports resolve immediately.
#[cfg(test)]
pub(crate) fn block_on_ready<F: std::future::Future>(future: F) -> F::Output {
    use std::task::{Context, Poll, Waker};

    let mut future = std::pin::pin!(future);
    let mut cx = Context::from_waker(Waker::noop());
    match future.as_mut().poll(&mut cx) {
        Poll::Ready(output) => output,
        Poll::Pending => panic!("future suspended"),
    }
}
