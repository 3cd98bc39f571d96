//! Activities Backend API
//!
//! The seam between the board and the HTTP backend. The board only sees
//! [`ActivityApi`]; the native client ([`client::BoardClient`], reqwest) and
//! the browser client (gloo-net, in the UI crate) implement it.
//!
//! Endpoints:
//! - `GET /activities`
//! - `POST /activities/{name}/signup?email={email}`
//! - `DELETE /activities/{name}/unregister?email={email}`

use async_trait::async_trait;

use crate::catalog::Catalog;

#[cfg(feature = "native")]
pub mod client;
pub mod dto;
pub mod error;

#[cfg(feature = "native")]
pub use client::BoardClient;
pub use dto::{decode_action, decode_catalog, ActionReply, ErrorReply};
pub use error::{ApiError, ApiResult};

/// Operations the board needs from the backend
///
/// Futures are not required to be `Send` so browser fetch futures can
/// implement the trait directly.
#[async_trait(?Send)]
pub trait ActivityApi {
    /// Fetch the full catalog
    async fn fetch_catalog(&self) -> ApiResult<Catalog>;

    /// Sign `email` up for `activity`
    async fn signup(&self, activity: &str, email: &str) -> ApiResult<ActionReply>;

    /// Remove `email` from `activity`
    async fn unregister(&self, activity: &str, email: &str) -> ApiResult<ActionReply>;
}

#[async_trait(?Send)]
impl<T: ActivityApi + ?Sized> ActivityApi for &T {
    async fn fetch_catalog(&self) -> ApiResult<Catalog> {
        (**self).fetch_catalog().await
    }

    async fn signup(&self, activity: &str, email: &str) -> ApiResult<ActionReply> {
        (**self).signup(activity, email).await
    }

    async fn unregister(&self, activity: &str, email: &str) -> ApiResult<ActionReply> {
        (**self).unregister(activity, email).await
    }
}

/// Path of the catalog endpoint
pub const CATALOG_PATH: &str = "/activities";

/// Path and query of the signup endpoint, percent-encoded
pub fn signup_path(activity: &str, email: &str) -> String {
    format!(
        "/activities/{}/signup?email={}",
        urlencoding::encode(activity),
        urlencoding::encode(email)
    )
}

/// Path and query of the unregister endpoint, percent-encoded
pub fn unregister_path(activity: &str, email: &str) -> String {
    format!(
        "/activities/{}/unregister?email={}",
        urlencoding::encode(activity),
        urlencoding::encode(email)
    )
}

/// Join a base URL and an endpoint path. An empty base keeps the path relative.
pub fn endpoint(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}
