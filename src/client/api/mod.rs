//! API trait definitions split by responsibility
//!
//! - [`AuthApi`] - Client-credentials token exchange
//! - [`ApplicationsApi`] - Listing, detail and artifact download
//!
//! Authentication is a separate stage: [`ApplicationsApi`] calls rely on the
//! headers installed by [`CloudHubClient::authorize`](super::CloudHubClient::authorize).

mod applications;
mod auth;

pub use applications::ApplicationsApi;
pub use auth::AuthApi;
