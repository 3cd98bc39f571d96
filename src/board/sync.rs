//! Request sequences shared by every frontend
//!
//! Each frontend keeps its own state (plain fields natively, signals in the
//! browser) but runs the same requests and gets the same decisions back:
//! what to render after a load, and which notice, form reset and reload
//! follow an action.

use crate::api::{ActivityApi, ApiError};

use super::listing::{selector_options, Listing, SelectOption};
use super::outcome::{ActionOutcome, BoardAction};

/// Result of one catalog load
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogLoad {
    /// Replace the listing and the selector
    Loaded {
        listing: Listing,
        selector: Vec<SelectOption>,
    },
    /// Replace the listing with [`Listing::failed`], keep the selector
    Failed { error: ApiError },
}

/// Fetch the catalog and render it
pub async fn fetch_listing<A: ActivityApi + ?Sized>(api: &A) -> CatalogLoad {
    match api.fetch_catalog().await {
        Ok(catalog) => {
            tracing::debug!(activities = catalog.len(), "Loaded catalog");
            CatalogLoad::Loaded {
                listing: Listing::from_catalog(&catalog),
                selector: selector_options(&catalog),
            }
        }
        Err(error) => {
            tracing::error!(error = %error, "Error fetching activities");
            CatalogLoad::Failed { error }
        }
    }
}

/// Send a signup or unregister request and classify the answer
pub async fn perform<A: ActivityApi + ?Sized>(
    api: &A,
    action: BoardAction,
    activity: &str,
    email: &str,
) -> ActionOutcome {
    let result = match action {
        BoardAction::Signup => api.signup(activity, email).await,
        BoardAction::Unregister => api.unregister(activity, email).await,
    };

    let outcome = ActionOutcome::resolve(action, result);
    if outcome.succeeded {
        tracing::info!(email, activity, "Finished {}", action.verb());
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ActionReply, ApiResult};
    use crate::catalog::{Activity, Catalog};
    use async_trait::async_trait;

    /// Backend that answers every call with a fixed result
    struct FixedApi {
        catalog: ApiResult<Catalog>,
        action: ApiResult<ActionReply>,
    }

    #[async_trait(?Send)]
    impl ActivityApi for FixedApi {
        async fn fetch_catalog(&self) -> ApiResult<Catalog> {
            self.catalog.clone()
        }

        async fn signup(&self, _activity: &str, _email: &str) -> ApiResult<ActionReply> {
            self.action.clone()
        }

        async fn unregister(&self, _activity: &str, _email: &str) -> ApiResult<ActionReply> {
            self.action.clone()
        }
    }

    #[tokio::test]
    async fn test_fetch_listing_loaded() {
        let api = FixedApi {
            catalog: Ok(Catalog::new().with("Chess Club", Activity::new("d", "s", 4))),
            action: Err(ApiError::Network("unused".into())),
        };

        match fetch_listing(&api).await {
            CatalogLoad::Loaded { listing, selector } => {
                assert_eq!(listing.cards().len(), 1);
                assert_eq!(selector.len(), 2);
            }
            CatalogLoad::Failed { .. } => panic!("expected a loaded catalog"),
        }
    }

    #[tokio::test]
    async fn test_fetch_listing_failed() {
        let api = FixedApi {
            catalog: Err(ApiError::Parse("expected value".into())),
            action: Err(ApiError::Network("unused".into())),
        };

        assert_eq!(
            fetch_listing(&api).await,
            CatalogLoad::Failed { error: ApiError::Parse("expected value".into()) }
        );
    }

    #[tokio::test]
    async fn test_perform_signup_and_unregister() {
        let api = FixedApi {
            catalog: Ok(Catalog::new()),
            action: Ok(ActionReply { message: "done".into() }),
        };

        let signup = perform(&api, BoardAction::Signup, "Chess Club", "a@x.com").await;
        assert!(signup.resets_form());

        let unregister = perform(&api, BoardAction::Unregister, "Chess Club", "a@x.com").await;
        assert!(unregister.reloads_catalog());
        assert!(!unregister.resets_form());
    }
}
