//! Application display model

use serde::Serialize;
use tabled::Tabled;

use crate::client::models::ApplicationSummary;

/// Application display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct AppDisplay {
    /// Application domain
    #[tabled(rename = "APPLICATION")]
    pub name: String,

    /// Deployment status
    #[tabled(rename = "STATUS")]
    pub status: String,

    /// Public hostname
    #[tabled(rename = "FULL DOMAIN")]
    pub full_domain: String,
}

impl From<&ApplicationSummary> for AppDisplay {
    fn from(app: &ApplicationSummary) -> Self {
        Self {
            name: app.domain().unwrap_or("-").to_string(),
            status: app.status().unwrap_or("-").to_string(),
            full_domain: app.full_domain().unwrap_or("-").to_string(),
        }
    }
}
