//! CloudHub API data models

mod app;
mod artifact;
mod auth;

pub use app::{ApplicationDetail, ApplicationList, ApplicationSummary};
pub use artifact::DownloadedArtifact;
pub use auth::AccessToken;
