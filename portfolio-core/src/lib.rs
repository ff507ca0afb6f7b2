//! Browser-independent logic behind the studio site.
//!
//! Everything here is plain data in, plain data out: the web binary owns the
//! DOM handles and calls into this crate from its event handlers, and the
//! tests drive the same code paths with recording surfaces.

/// Analytics event model, capability-gated sink and scroll depth marks.
pub mod analytics;

/// Immutable project catalog loaded at startup.
pub mod catalog;

/// Site configuration and startup-resolved capability flags.
pub mod config;

/// Contact form validation, persistence payloads and email notifications.
pub mod contact;

/// Error types shared across the crate.
pub mod error;

/// One-shot subscriptions backing lazy image loading and reveal watchers.
pub mod lazy;

/// Transient success/error notifications shown after form submission.
pub mod notification;

/// Navigation, back-to-top and stats counter models.
pub mod page;

/// Portfolio filter, pagination and rendering controller.
pub mod portfolio;

/// Viewport geometry helpers.
pub mod viewport;

pub use catalog::{Catalog, ProjectRecord};
pub use config::{Capabilities, SiteConfig};
pub use portfolio::{Filter, PortfolioController, PortfolioView, RenderPass, RenderSurface};
