//! HTTP API Client
//!
//! gloo-net implementation of the board's backend API.

use activity_board::api::{
    decode_action, decode_catalog, endpoint, signup_path, unregister_path, ActionReply,
    ActivityApi, ApiError, ApiResult, CATALOG_PATH,
};
use activity_board::Catalog;
use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder};

/// Local storage key holding an API base override
const API_BASE_KEY: &str = "activity_board_api_url";

/// Get the API base URL from local storage; empty means same origin
pub fn get_api_base() -> String {
    let url = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_BASE_KEY).ok().flatten())
        .unwrap_or_default();
    normalize_base(&url)
}

fn normalize_base(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

/// Browser client for the activities backend
#[derive(Clone, Debug)]
pub struct GlooClient {
    base: String,
}

impl GlooClient {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    /// Client for the base configured in local storage
    pub fn from_storage() -> Self {
        Self::new(get_api_base())
    }

    async fn read(request: RequestBuilder) -> ApiResult<(u16, String)> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok((status, body))
    }
}

#[async_trait(?Send)]
impl ActivityApi for GlooClient {
    async fn fetch_catalog(&self) -> ApiResult<Catalog> {
        let url = endpoint(&self.base, CATALOG_PATH);
        let (status, body) = Self::read(Request::get(&url)).await?;
        decode_catalog(status, &body)
    }

    async fn signup(&self, activity: &str, email: &str) -> ApiResult<ActionReply> {
        let url = endpoint(&self.base, &signup_path(activity, email));
        let (status, body) = Self::read(Request::post(&url)).await?;
        decode_action(status, &body)
    }

    async fn unregister(&self, activity: &str, email: &str) -> ApiResult<ActionReply> {
        let url = endpoint(&self.base, &unregister_path(activity, email));
        let (status, body) = Self::read(Request::delete(&url)).await?;
        decode_action(status, &body)
    }
}
