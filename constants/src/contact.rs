pub const CONTACT_FORM_ID: &str = "contactForm";

pub const NAME_MIN_CHARS: usize = 2;
pub const NAME_MAX_CHARS: usize = 100;
pub const MESSAGE_MIN_CHARS: usize = 10;
pub const MESSAGE_MAX_CHARS: usize = 1000;

pub const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$";

/// Document store collection receiving contact submissions.
pub const SUBMISSION_COLLECTION: &str = "contact_submissions";
pub const SUBMISSION_STATUS: &str = "new";
pub const SUBMISSION_SOURCE: &str = "website";

pub const FIRESTORE_BASE_URL: &str = "https://firestore.googleapis.com/v1";
pub const EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";
pub const ADMIN_TEMPLATE_ID: &str = "admin_notification_template";

pub const SUBMIT_BUTTON_BUSY_TEXT: &str = "Sending...";
pub const INVALID_FORM_MESSAGE: &str = "Please fill in all required fields correctly.";
pub const SUBMIT_FAILED_MESSAGE: &str =
    "Failed to send message. Please try again or contact us directly.";

/// Milliseconds before notifications dismiss themselves.
pub const SUCCESS_NOTIFICATION_MS: u32 = 5000;
pub const ERROR_NOTIFICATION_MS: u32 = 4000;

pub const FOCUSED_CLASS: &str = "focused";
pub const FILLED_CLASS: &str = "filled";
pub const ERROR_CLASS: &str = "error";
pub const FIELD_ERROR_CLASS: &str = "field-error";
