//! HTTP transports for the document store and the email relay.

use constants::contact::EMAILJS_SEND_URL;
use portfolio_core::config::DocumentStoreConfig;
use portfolio_core::contact::{
    ContactDocument, DocumentId, DocumentStore, EmailRequest, EmailTransport, create_document_url,
    parse_created_document,
};
use portfolio_core::error::{EmailError, StoreError};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

use super::document::{js_error, window};

struct HttpReply {
    status: u16,
    ok: bool,
    body: String,
}

async fn post_json(url: &str, body: &str) -> Result<HttpReply, String> {
    let headers = Headers::new().map_err(js_error)?;
    headers
        .set("Content-Type", "application/json")
        .map_err(js_error)?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_headers(&headers);
    init.set_body(&JsValue::from_str(body));

    let request = Request::new_with_str_and_init(url, &init).map_err(js_error)?;
    let window = window().ok_or_else(|| "window not available".to_string())?;
    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?
        .dyn_into()
        .map_err(js_error)?;

    let text = JsFuture::from(response.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;

    Ok(HttpReply {
        status: response.status(),
        ok: response.ok(),
        body: text.as_string().unwrap_or_default(),
    })
}

/// Firestore REST collection.
pub struct FirestoreStore {
    config: Option<DocumentStoreConfig>,
}

impl FirestoreStore {
    pub fn new(config: Option<DocumentStoreConfig>) -> Self {
        Self { config }
    }
}

impl DocumentStore for FirestoreStore {
    async fn create_document(&self, document: &ContactDocument) -> Result<DocumentId, StoreError> {
        let config = self.config.as_ref().ok_or(StoreError::NotConfigured)?;
        let url = create_document_url(config);
        let reply = post_json(&url, &document.to_store_body().to_string())
            .await
            .map_err(StoreError::Unavailable)?;

        if reply.ok {
            parse_created_document(&reply.body)
        } else {
            Err(StoreError::from_response(reply.status, &reply.body))
        }
    }
}

/// EmailJS REST send endpoint.
pub struct EmailJsTransport;

impl EmailTransport for EmailJsTransport {
    async fn send(&self, request: &EmailRequest) -> Result<(), EmailError> {
        let body = serde_json::to_string(request)
            .map_err(|e| EmailError::Transport(e.to_string()))?;
        let reply = post_json(EMAILJS_SEND_URL, &body)
            .await
            .map_err(EmailError::Transport)?;

        if reply.ok {
            Ok(())
        } else {
            Err(EmailError::Rejected {
                status: reply.status,
                message: reply.body,
            })
        }
    }
}
