//! Site configuration and startup capability flags.

use constants::contact::{ADMIN_TEMPLATE_ID, SUBMISSION_COLLECTION};
use constants::page::REDUCED_MOTION_CORE_LIMIT;
use serde::Deserialize;

use crate::error::ConfigError;

/// Studio details quoted in notifications and email templates.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StudioContact {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DocumentStoreConfig {
    pub project_id: String,
    pub api_key: String,
    #[serde(default = "default_collection")]
    pub collection: String,
}

impl DocumentStoreConfig {
    pub fn is_configured(&self) -> bool {
        !self.project_id.is_empty() && !self.api_key.is_empty()
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EmailConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    #[serde(default = "default_admin_template")]
    pub admin_template_id: String,
}

impl EmailConfig {
    pub fn is_configured(&self) -> bool {
        !self.service_id.is_empty() && !self.template_id.is_empty() && !self.public_key.is_empty()
    }
}

fn default_collection() -> String {
    SUBMISSION_COLLECTION.to_string()
}

fn default_admin_template() -> String {
    ADMIN_TEMPLATE_ID.to_string()
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    pub studio: StudioContact,
    #[serde(default)]
    pub document_store: Option<DocumentStoreConfig>,
    #[serde(default)]
    pub email: Option<EmailConfig>,
}

impl SiteConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|source| ConfigError::Parse {
            what: "site configuration",
            source,
        })
    }

    /// Document store settings, if usable.
    pub fn document_store(&self) -> Option<&DocumentStoreConfig> {
        self.document_store
            .as_ref()
            .filter(|store| store.is_configured())
    }

    pub fn email(&self) -> Option<&EmailConfig> {
        self.email.as_ref().filter(|email| email.is_configured())
    }
}

/// Raw browser feature probe results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowserProbe {
    pub has_gtag: bool,
    pub has_intersection_observer: bool,
    pub hardware_concurrency: Option<u32>,
}

/// Feature flags resolved once at startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Capabilities {
    pub analytics: bool,
    pub intersection_observer: bool,
    pub reduced_motion: bool,
    pub email: bool,
    pub document_store: bool,
}

impl Capabilities {
    pub fn resolve(probe: &BrowserProbe, config: &SiteConfig) -> Self {
        Self {
            analytics: probe.has_gtag,
            intersection_observer: probe.has_intersection_observer,
            reduced_motion: reduced_motion(probe.hardware_concurrency),
            email: config.email().is_some(),
            document_store: config.document_store().is_some(),
        }
    }

    pub fn animations_enabled(&self) -> bool {
        !self.reduced_motion
    }
}

/// Low core counts get the reduced-motion treatment. An unreported count does not.
pub fn reduced_motion(hardware_concurrency: Option<u32>) -> bool {
    matches!(hardware_concurrency, Some(cores) if cores > 0 && cores < REDUCED_MOTION_CORE_LIMIT)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: &str = r#"{
        "studio": {"name": "Studio", "email": "hi@studio.test", "phone": "+1", "address": "Here"},
        "documentStore": {"projectId": "p1", "apiKey": "k"},
        "email": {"serviceId": "s", "templateId": "t", "publicKey": "pk"}
    }"#;

    #[test]
    fn defaults_fill_collection_and_admin_template() {
        let config = SiteConfig::from_json(FULL).unwrap();
        assert_eq!(
            config.document_store().unwrap().collection,
            "contact_submissions"
        );
        assert_eq!(
            config.email().unwrap().admin_template_id,
            "admin_notification_template"
        );
    }

    #[test]
    fn missing_or_blank_sections_are_unconfigured() {
        let config = SiteConfig::from_json(
            r#"{
                "studio": {"name": "S", "email": "e", "phone": "p", "address": "a"},
                "email": {"serviceId": "", "templateId": "t", "publicKey": "pk"}
            }"#,
        )
        .unwrap();
        assert!(config.document_store().is_none());
        assert!(config.email().is_none());

        let caps = Capabilities::resolve(&BrowserProbe::default(), &config);
        assert_eq!(caps, Capabilities::default());
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let err = SiteConfig::from_json("{").unwrap_err();
        assert!(err.to_string().starts_with("invalid site configuration"));
    }

    #[test]
    fn reduced_motion_below_four_cores() {
        assert!(reduced_motion(Some(2)));
        assert!(!reduced_motion(Some(4)));
        assert!(!reduced_motion(Some(0)));
        assert!(!reduced_motion(None));
    }

    #[test]
    fn capabilities_follow_probe_and_config() {
        let config = SiteConfig::from_json(FULL).unwrap();
        let probe = BrowserProbe {
            has_gtag: true,
            has_intersection_observer: true,
            hardware_concurrency: Some(2),
        };
        let caps = Capabilities::resolve(&probe, &config);
        assert!(caps.analytics && caps.intersection_observer && caps.email && caps.document_store);
        assert!(!caps.animations_enabled());
    }
}
