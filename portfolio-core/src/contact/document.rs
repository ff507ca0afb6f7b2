//! Contact submissions as documents in the remote store.
//!
//! The store speaks the Firestore REST dialect: every field is wrapped in a
//! typed value (`stringValue`, `timestampValue`) and the response names the
//! created document by its full resource path.

use std::future::Future;

use chrono::{DateTime, SecondsFormat, Utc};
use constants::contact::{FIRESTORE_BASE_URL, SUBMISSION_SOURCE, SUBMISSION_STATUS};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use crate::config::DocumentStoreConfig;
use crate::error::StoreError;

use super::validation::ValidatedContact;

/// Browser details recorded alongside a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionContext {
    pub user_agent: String,
    pub language: String,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContactDocument {
    pub name: String,
    pub email: String,
    pub company: String,
    pub service: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub status: String,
    pub source: String,
    pub created_at: String,
    pub user_agent: String,
    pub language: String,
}

impl ContactDocument {
    pub fn new(contact: &ValidatedContact, context: &SubmissionContext) -> Self {
        let form = contact.form();
        Self {
            name: form.name.clone(),
            email: form.email.clone(),
            company: form.company.clone(),
            service: form.service.clone(),
            message: form.message.clone(),
            timestamp: context.submitted_at,
            status: SUBMISSION_STATUS.to_string(),
            source: SUBMISSION_SOURCE.to_string(),
            created_at: context
                .submitted_at
                .to_rfc3339_opts(SecondsFormat::Millis, true),
            user_agent: context.user_agent.clone(),
            language: context.language.clone(),
        }
    }

    /// Request body for a document create call.
    pub fn to_store_body(&self) -> Value {
        let mut fields = Map::new();
        let strings = [
            ("name", &self.name),
            ("email", &self.email),
            ("company", &self.company),
            ("service", &self.service),
            ("message", &self.message),
            ("status", &self.status),
            ("source", &self.source),
            ("createdAt", &self.created_at),
            ("userAgent", &self.user_agent),
            ("language", &self.language),
        ];
        for (key, value) in strings {
            fields.insert(key.to_string(), json!({ "stringValue": value }));
        }
        fields.insert(
            "timestamp".to_string(),
            json!({ "timestampValue": self.timestamp.to_rfc3339_opts(SecondsFormat::Micros, true) }),
        );
        json!({ "fields": fields })
    }
}

/// Identifier assigned by the store to a created document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentId(pub String);

impl std::fmt::Display for DocumentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Endpoint creating a document in the configured collection.
pub fn create_document_url(config: &DocumentStoreConfig) -> String {
    format!(
        "{FIRESTORE_BASE_URL}/projects/{}/databases/(default)/documents/{}?key={}",
        config.project_id, config.collection, config.api_key
    )
}

/// Pull the document id out of a create response.
pub fn parse_created_document(body: &str) -> Result<DocumentId, StoreError> {
    #[derive(Deserialize)]
    struct Created {
        name: String,
    }

    let created: Created =
        serde_json::from_str(body).map_err(|e| StoreError::Malformed(e.to_string()))?;
    created
        .name
        .rsplit('/')
        .next()
        .filter(|id| !id.is_empty())
        .map(|id| DocumentId(id.to_string()))
        .ok_or_else(|| StoreError::Malformed(format!("no document id in '{}'", created.name)))
}

/// Remote collection accepting contact documents.
pub trait DocumentStore {
    fn create_document(
        &self,
        document: &ContactDocument,
    ) -> impl Future<Output = Result<DocumentId, StoreError>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::validation::{ContactForm, validate_submission};
    use chrono::TimeZone;

    fn document() -> ContactDocument {
        let contact = validate_submission(ContactForm {
            name: "Mona".into(),
            email: "mona@example.com".into(),
            company: String::new(),
            service: "web".into(),
            message: "A new website please.".into(),
        })
        .unwrap();
        let context = SubmissionContext {
            user_agent: "test-agent".into(),
            language: "ar-EG".into(),
            submitted_at: Utc.with_ymd_and_hms(2026, 3, 1, 12, 30, 0).unwrap(),
        };
        ContactDocument::new(&contact, &context)
    }

    #[test]
    fn document_carries_status_and_browser_details() {
        let doc = document();
        assert_eq!(doc.status, "new");
        assert_eq!(doc.source, "website");
        assert_eq!(doc.created_at, "2026-03-01T12:30:00.000Z");
        assert_eq!(doc.company, "");
        assert_eq!(doc.language, "ar-EG");
    }

    #[test]
    fn store_body_wraps_typed_values() {
        let body = document().to_store_body();
        assert_eq!(body["fields"]["name"]["stringValue"], "Mona");
        assert_eq!(body["fields"]["userAgent"]["stringValue"], "test-agent");
        assert_eq!(
            body["fields"]["timestamp"]["timestampValue"],
            "2026-03-01T12:30:00.000000Z"
        );
        assert_eq!(body["fields"].as_object().unwrap().len(), 11);
    }

    #[test]
    fn url_targets_the_collection() {
        let config = DocumentStoreConfig {
            project_id: "studio-1".into(),
            api_key: "k3y".into(),
            collection: "contact_submissions".into(),
        };
        assert_eq!(
            create_document_url(&config),
            "https://firestore.googleapis.com/v1/projects/studio-1/databases/(default)/documents/contact_submissions?key=k3y"
        );
    }

    #[test]
    fn created_document_id_is_last_path_segment() {
        let body = r#"{"name": "projects/p/databases/(default)/documents/contact_submissions/AbC123", "fields": {}}"#;
        assert_eq!(parse_created_document(body).unwrap().0, "AbC123");
        assert!(matches!(
            parse_created_document("{}"),
            Err(StoreError::Malformed(_))
        ));
        assert!(matches!(
            parse_created_document(r#"{"name": "trailing/"}"#),
            Err(StoreError::Malformed(_))
        ));
    }

    #[test]
    fn error_envelopes_map_to_store_errors() {
        let denied = r#"{"error": {"code": 403, "message": "Missing or insufficient permissions.", "status": "PERMISSION_DENIED"}}"#;
        assert_eq!(
            StoreError::from_response(403, denied),
            StoreError::PermissionDenied
        );
        assert_eq!(
            StoreError::from_response(403, denied).user_message(),
            "Permission denied. Please check Firestore rules."
        );
        assert_eq!(StoreError::from_response(404, "nope"), StoreError::NotFound);
        let other = r#"{"error": {"code": 400, "message": "Bad field", "status": "INVALID_ARGUMENT"}}"#;
        let err = StoreError::from_response(400, other);
        assert_eq!(err.user_message(), "Bad field");
        assert_eq!(err.code(), "rejected");
        assert_eq!(
            StoreError::Unavailable("offline".into()).user_message(),
            "Network error. Please check your internet connection."
        );
    }
}
