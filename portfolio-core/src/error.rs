use thiserror::Error;

/// Embedded configuration or catalog could not be parsed.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {what}: {source}")]
    Parse {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Required page elements are absent; the portfolio stays inert.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PortfolioInitError {
    #[error("portfolio element not found: {0}")]
    MissingElement(String),
}

/// Failure persisting a document to the remote store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("document store is not configured")]
    NotConfigured,
    #[error("permission denied")]
    PermissionDenied,
    #[error("document store unavailable: {0}")]
    Unavailable(String),
    #[error("document store database not found")]
    NotFound,
    #[error("document store rejected the request ({status}): {message}")]
    Rejected { status: String, message: String },
    #[error("unexpected document store response: {0}")]
    Malformed(String),
}

impl StoreError {
    /// Build an error from a non-success HTTP response.
    ///
    /// The body is the store's JSON error envelope
    /// `{"error": {"code", "message", "status"}}`; anything else falls back to
    /// the HTTP status code.
    pub fn from_response(http_status: u16, body: &str) -> Self {
        #[derive(serde::Deserialize)]
        struct Envelope {
            error: EnvelopeError,
        }

        #[derive(serde::Deserialize)]
        struct EnvelopeError {
            #[serde(default)]
            message: String,
            #[serde(default)]
            status: String,
        }

        let (status, message) = match serde_json::from_str::<Envelope>(body) {
            Ok(envelope) => (envelope.error.status, envelope.error.message),
            Err(_) => (String::new(), body.trim().to_string()),
        };

        match status.as_str() {
            "PERMISSION_DENIED" => Self::PermissionDenied,
            "UNAVAILABLE" => Self::Unavailable(message),
            "NOT_FOUND" => Self::NotFound,
            "" => match http_status {
                403 => Self::PermissionDenied,
                404 => Self::NotFound,
                503 => Self::Unavailable(message),
                _ => Self::Rejected {
                    status: http_status.to_string(),
                    message,
                },
            },
            _ => Self::Rejected { status, message },
        }
    }

    /// Short machine-readable code, logged next to the message.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotConfigured => "not-configured",
            Self::PermissionDenied => "permission-denied",
            Self::Unavailable(_) => "unavailable",
            Self::NotFound => "not-found",
            Self::Rejected { .. } => "rejected",
            Self::Malformed(_) => "malformed",
        }
    }

    /// Explanation suitable for the console and analytics error label.
    pub fn user_message(&self) -> String {
        match self {
            Self::PermissionDenied => {
                "Permission denied. Please check Firestore rules.".to_string()
            }
            Self::Unavailable(_) => {
                "Network error. Please check your internet connection.".to_string()
            }
            Self::NotFound => {
                "Firestore database not found. Please enable Firestore in Firebase Console."
                    .to_string()
            }
            Self::NotConfigured => "Document store is not configured.".to_string(),
            Self::Rejected { message, .. } if !message.is_empty() => message.clone(),
            other => other.to_string(),
        }
    }
}

/// Failure sending a notification email.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EmailError {
    #[error("Email service not configured")]
    NotConfigured,
    #[error("email service rejected the request ({status}): {message}")]
    Rejected { status: u16, message: String },
    #[error("email transport failed: {0}")]
    Transport(String),
}
