//! Control plane to API host lookup

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ConfigError;

/// Named deployment region of the management API
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlPlane {
    #[default]
    Us,
    Eu1,
    Gov,
}

/// Selector name and API host, indexed by `ControlPlane as usize`.
const CONTROL_PLANES: [(ControlPlane, &str, &str); 3] = [
    (ControlPlane::Us, "us", "anypoint.mulesoft.com"),
    (ControlPlane::Eu1, "eu1", "eu1.anypoint.mulesoft.com"),
    (ControlPlane::Gov, "gov", "gov.anypoint.mulesoft.com"),
];

impl ControlPlane {
    /// All known control planes
    pub const ALL: [ControlPlane; 3] = [ControlPlane::Us, ControlPlane::Eu1, ControlPlane::Gov];

    /// Selector name as accepted in `ANYPOINT_CONTROL_PLANE`
    pub fn name(self) -> &'static str {
        CONTROL_PLANES[self as usize].1
    }

    /// API host for this control plane
    pub fn host(self) -> &'static str {
        CONTROL_PLANES[self as usize].2
    }
}

impl FromStr for ControlPlane {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let selector = s.trim();
        CONTROL_PLANES
            .iter()
            .find(|(_, name, _)| name.eq_ignore_ascii_case(selector))
            .map(|(plane, _, _)| *plane)
            .ok_or_else(|| ConfigError::InvalidControlPlane(selector.to_string()))
    }
}

impl fmt::Display for ControlPlane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
