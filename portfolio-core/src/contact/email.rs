//! Confirmation and admin notification emails sent after a submission.

use std::collections::BTreeMap;
use std::future::Future;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use tracing::{info, warn};

use crate::config::{EmailConfig, StudioContact};
use crate::error::EmailError;

use super::validation::ContactForm;

pub struct EmailTemplate {
    pub subject: &'static str,
    pub body: &'static str,
}

pub const CONFIRMATION_TEMPLATE: EmailTemplate = EmailTemplate {
    subject: "Thank you for contacting {{studio}}",
    body: r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto; padding: 20px;">
  <h1 style="color: #EB3223; text-align: center;">{{studio}}</h1>
  <div style="background: #f8f9fa; padding: 30px; border-radius: 10px;">
    <h2>Hello {{name}},</h2>
    <p>Thank you for reaching out. Your message has been received and our team will reply as soon as possible.</p>
    <div style="background: white; padding: 20px; border-radius: 8px; margin: 20px 0;">
      <p><strong>Service:</strong> {{service}}</p>
      <p><strong>Company:</strong> {{company}}</p>
      <p><strong>Message:</strong><br>{{message}}</p>
    </div>
    <p>Email: {{studio_email}}<br>Phone: {{studio_phone}}<br>Address: {{studio_address}}</p>
  </div>
</div>"#,
};

pub const ADMIN_NOTIFICATION_TEMPLATE: EmailTemplate = EmailTemplate {
    subject: "New website message from {{name}}",
    body: r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto; padding: 20px;">
  <h2 style="color: #EB3223;">New message from the website</h2>
  <div style="background: #f8f9fa; padding: 20px; border-radius: 8px; margin: 20px 0;">
    <p><strong>Name:</strong> {{name}}</p>
    <p><strong>Email:</strong> {{email}}</p>
    <p><strong>Company:</strong> {{company}}</p>
    <p><strong>Service:</strong> {{service}}</p>
    <p><strong>Message:</strong><br>{{message}}</p>
    <p><strong>Date:</strong> {{date}}</p>
  </div>
  <a href="mailto:{{email}}" style="display: inline-block; background: #EB3223; color: white; padding: 12px 30px; text-decoration: none; border-radius: 5px;">Reply</a>
</div>"#,
};

/// Substitute `{{key}}` placeholders in one pass over the template.
/// Unknown placeholders are left untouched and inserted values are never rescanned.
pub fn render_template(template: &str, params: &BTreeMap<&str, String>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            out.push_str(&rest[start..]);
            return out;
        };
        match params.get(&after[..end]) {
            Some(value) => out.push_str(value),
            None => out.push_str(&rest[start..start + 2 + end + 2]),
        }
        rest = &after[end + 2..];
    }
    out.push_str(rest);
    out
}

fn company_or_placeholder(form: &ContactForm) -> String {
    if form.company.is_empty() {
        "N/A".to_string()
    } else {
        form.company.clone()
    }
}

fn rendered(template: &EmailTemplate, values: &BTreeMap<&str, String>) -> (String, String) {
    let escaped: BTreeMap<&str, String> = values
        .iter()
        .map(|(key, value)| (*key, crate::portfolio::markup::escape_html(value)))
        .collect();
    (
        render_template(template.subject, values),
        render_template(template.body, &escaped),
    )
}

/// Payload accepted by the email relay's send endpoint.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct EmailRequest {
    pub service_id: String,
    pub template_id: String,
    pub user_id: String,
    pub template_params: BTreeMap<String, String>,
}

fn into_params(pairs: BTreeMap<&str, String>) -> BTreeMap<String, String> {
    pairs
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}

pub fn confirmation_request(
    config: &EmailConfig,
    form: &ContactForm,
    studio: &StudioContact,
) -> EmailRequest {
    let company = company_or_placeholder(form);
    let template_values = BTreeMap::from([
        ("studio", studio.name.clone()),
        ("name", form.name.clone()),
        ("service", form.service.clone()),
        ("company", company.clone()),
        ("message", form.message.clone()),
        ("studio_email", studio.email.clone()),
        ("studio_phone", studio.phone.clone()),
        ("studio_address", studio.address.clone()),
    ]);
    let (subject, html_body) = rendered(&CONFIRMATION_TEMPLATE, &template_values);

    let params = BTreeMap::from([
        ("to_name", form.name.clone()),
        ("to_email", form.email.clone()),
        ("company", company),
        ("service", form.service.clone()),
        ("message", form.message.clone()),
        ("reply_to", studio.email.clone()),
        ("subject", subject),
        ("html_body", html_body),
    ]);

    EmailRequest {
        service_id: config.service_id.clone(),
        template_id: config.template_id.clone(),
        user_id: config.public_key.clone(),
        template_params: into_params(params),
    }
}

pub fn admin_request(
    config: &EmailConfig,
    form: &ContactForm,
    studio: &StudioContact,
    received_at: DateTime<Utc>,
) -> EmailRequest {
    let company = company_or_placeholder(form);
    let template_values = BTreeMap::from([
        ("name", form.name.clone()),
        ("email", form.email.clone()),
        ("company", company.clone()),
        ("service", form.service.clone()),
        ("message", form.message.clone()),
        (
            "date",
            received_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        ),
    ]);
    let (subject, html_body) = rendered(&ADMIN_NOTIFICATION_TEMPLATE, &template_values);

    let params = BTreeMap::from([
        ("from_name", form.name.clone()),
        ("from_email", form.email.clone()),
        ("company", company),
        ("service", form.service.clone()),
        ("message", form.message.clone()),
        ("to_email", studio.email.clone()),
        ("subject", subject),
        ("html_body", html_body),
    ]);

    EmailRequest {
        service_id: config.service_id.clone(),
        template_id: config.admin_template_id.clone(),
        user_id: config.public_key.clone(),
        template_params: into_params(params),
    }
}

/// Delivery channel for [`EmailRequest`]s.
pub trait EmailTransport {
    fn send(&self, request: &EmailRequest) -> impl Future<Output = Result<(), EmailError>>;
}

/// Outcome of both notification emails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailOutcome {
    pub confirmation: Result<(), EmailError>,
    pub admin: Result<(), EmailError>,
}

/// Send the customer confirmation and the admin notification.
///
/// Failures are logged and reported, never propagated: the submission itself
/// has already been stored.
pub async fn send_notifications<T: EmailTransport>(
    transport: &T,
    config: Option<&EmailConfig>,
    form: &ContactForm,
    studio: &StudioContact,
    received_at: DateTime<Utc>,
) -> EmailOutcome {
    let Some(config) = config.filter(|config| config.is_configured()) else {
        info!("Email service not configured");
        return EmailOutcome {
            confirmation: Err(EmailError::NotConfigured),
            admin: Err(EmailError::NotConfigured),
        };
    };

    let confirmation = transport
        .send(&confirmation_request(config, form, studio))
        .await;
    match &confirmation {
        Ok(()) => info!("confirmation email sent to {}", form.email),
        Err(err) => warn!("confirmation email failed: {err}"),
    }

    let admin = transport
        .send(&admin_request(config, form, studio, received_at))
        .await;
    match &admin {
        Ok(()) => info!("admin notification sent"),
        Err(err) => warn!("admin notification failed: {err}"),
    }

    EmailOutcome {
        confirmation,
        admin,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::block_on_ready;
    use chrono::TimeZone;
    use std::cell::RefCell;

    fn studio() -> StudioContact {
        StudioContact {
            name: "Studio".into(),
            email: "sales@studio.test".into(),
            phone: "+20 100".into(),
            address: "Cairo".into(),
        }
    }

    fn config() -> EmailConfig {
        EmailConfig {
            service_id: "svc".into(),
            template_id: "tpl".into(),
            public_key: "pub".into(),
            admin_template_id: "admin_tpl".into(),
        }
    }

    fn form() -> ContactForm {
        ContactForm {
            name: "Mona <M>".into(),
            email: "mona@example.com".into(),
            company: String::new(),
            service: "print".into(),
            message: "Brochure for the fair.".into(),
        }
    }

    #[derive(Default)]
    struct RecordingTransport {
        sent: RefCell<Vec<EmailRequest>>,
    }

    impl EmailTransport for RecordingTransport {
        async fn send(&self, request: &EmailRequest) -> Result<(), EmailError> {
            self.sent.borrow_mut().push(request.clone());
            Ok(())
        }
    }

    #[test]
    fn placeholders_are_substituted() {
        let params = BTreeMap::from([("name", "Mona".to_string()), ("x", "1".to_string())]);
        assert_eq!(
            render_template("Hi {{name}} ({{x}}) {{missing}}", &params),
            "Hi Mona (1) {{missing}}"
        );
    }

    #[test]
    fn inserted_values_are_not_expanded_again() {
        let params = BTreeMap::from([
            ("name", "{{secret}}".to_string()),
            ("secret", "LEAK".to_string()),
        ]);
        assert_eq!(
            render_template("Hi {{name}}, {{secret}}", &params),
            "Hi {{secret}}, LEAK"
        );
        assert_eq!(render_template("open {{name", &params), "open {{name");
    }

    #[test]
    fn confirmation_fills_customer_fields() {
        let request = confirmation_request(&config(), &form(), &studio());
        assert_eq!(request.template_id, "tpl");
        assert_eq!(request.user_id, "pub");
        let params = &request.template_params;
        assert_eq!(params["to_email"], "mona@example.com");
        assert_eq!(params["company"], "N/A");
        assert_eq!(params["reply_to"], "sales@studio.test");
        assert_eq!(params["subject"], "Thank you for contacting Studio");
        assert!(params["html_body"].contains("Hello Mona &lt;M&gt;,"));
    }

    #[test]
    fn admin_notification_goes_to_studio() {
        let at = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        let request = admin_request(&config(), &form(), &studio(), at);
        assert_eq!(request.template_id, "admin_tpl");
        assert_eq!(request.template_params["to_email"], "sales@studio.test");
        assert!(request.template_params["html_body"].contains("2026-01-02T03:04:05Z"));
    }

    #[test]
    fn unconfigured_service_sends_nothing() {
        let transport = RecordingTransport::default();
        let at = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        let outcome = block_on_ready(send_notifications(
            &transport,
            None,
            &form(),
            &studio(),
            at,
        ));
        assert_eq!(outcome.confirmation, Err(EmailError::NotConfigured));
        assert!(transport.sent.borrow().is_empty());

        let outcome = block_on_ready(send_notifications(
            &transport,
            Some(&config()),
            &form(),
            &studio(),
            at,
        ));
        assert_eq!(outcome.admin, Ok(()));
        assert_eq!(transport.sent.borrow().len(), 2);
    }
}
