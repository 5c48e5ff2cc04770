//! CloudHub API client

pub mod api;
pub mod cloudhub;
#[cfg(test)]
pub mod mock;
pub mod models;

pub use api::{ApplicationsApi, AuthApi};
pub use cloudhub::CloudHubClient;
#[cfg(test)]
pub use mock::MockCloudHubClient;
