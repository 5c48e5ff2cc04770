//! Application models

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One entry of the applications list, kept alongside its raw JSON
///
/// The raw value is what gets snapshotted, so unknown fields survive untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct ApplicationSummary {
    raw: Value,
}

impl ApplicationSummary {
    pub fn from_value(raw: Value) -> Self {
        Self { raw }
    }

    /// Application domain, the identifier used by every per-app endpoint.
    ///
    /// Returns `None` when the field is absent, not a string, or blank.
    pub fn domain(&self) -> Option<&str> {
        self.str_field("domain")
    }

    /// Deployment status (e.g. "STARTED"), when reported
    pub fn status(&self) -> Option<&str> {
        self.str_field("status")
    }

    /// Public hostname, when reported
    pub fn full_domain(&self) -> Option<&str> {
        self.str_field("fullDomain")
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        self.raw
            .get(key)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

/// The applications list exactly as the API returned it
#[derive(Debug, Clone, PartialEq)]
pub struct ApplicationList {
    raw: Value,
}

impl ApplicationList {
    /// Wrap a list response. The payload must be a JSON array.
    pub fn from_value(raw: Value) -> Option<Self> {
        if raw.is_array() { Some(Self { raw }) } else { None }
    }

    pub fn raw(&self) -> &Value {
        &self.raw
    }

    pub fn len(&self) -> usize {
        self.raw.as_array().map(Vec::len).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn summaries(&self) -> Vec<ApplicationSummary> {
        self.raw
            .as_array()
            .map(|items| {
                items
                    .iter()
                    .cloned()
                    .map(ApplicationSummary::from_value)
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Per-application detail record
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationDetail {
    /// Application domain
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,

    /// Deployed artifact filename
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,

    /// Deployment status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Everything else the API returned
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ApplicationDetail {
    /// Artifact filename, ignoring blank values
    pub fn artifact_filename(&self) -> Option<&str> {
        self.filename
            .as_deref()
            .map(str::trim)
            .filter(|f| !f.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_summary_domain() {
        let app = ApplicationSummary::from_value(json!({"domain": "orders-api", "status": "STARTED"}));
        assert_eq!(app.domain(), Some("orders-api"));
        assert_eq!(app.status(), Some("STARTED"));
        assert_eq!(app.full_domain(), None);
    }

    #[test]
    fn test_summary_unusable_domain() {
        for raw in [json!({}), json!({"domain": ""}), json!({"domain": 42}), json!({"domain": null})] {
            assert_eq!(ApplicationSummary::from_value(raw).domain(), None);
        }
    }

    #[test]
    fn test_list_requires_array() {
        assert!(ApplicationList::from_value(json!({"data": []})).is_none());
        let list = ApplicationList::from_value(json!([{"domain": "a"}, {"name": "b"}])).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.summaries()[0].domain(), Some("a"));
        assert_eq!(list.summaries()[1].domain(), None);
    }

    #[test]
    fn test_detail_keeps_unknown_fields() {
        let detail: ApplicationDetail = serde_json::from_value(json!({
            "domain": "orders-api",
            "filename": "orders-api-1.0.0.jar",
            "muleVersion": {"version": "4.4.0"},
        }))
        .unwrap();

        assert_eq!(detail.artifact_filename(), Some("orders-api-1.0.0.jar"));
        assert!(detail.extra.contains_key("muleVersion"));
    }

    #[test]
    fn test_detail_blank_filename() {
        let detail: ApplicationDetail =
            serde_json::from_value(json!({"domain": "x", "filename": "  "})).unwrap();
        assert_eq!(detail.artifact_filename(), None);
    }
}
