//! Global Application State
//!
//! Reactive board state using Leptos signals. The decisions (what a catalog
//! renders to, which notice an action produces) come from the core crate;
//! this module wires them to signals, the network, and the dismissal timer.

use activity_board::board::{
    fetch_listing, perform, ActionOutcome, BoardAction, CatalogLoad, Listing, Notice,
    NoticeBanner, SelectOption, NOTICE_DISMISS_AFTER,
};
use activity_board::ApiError;
use leptos::*;

use crate::api::GlooClient;

/// Board state provided to all components
#[derive(Clone)]
pub struct BoardState {
    api: GlooClient,
    /// Rendered activities list
    pub listing: RwSignal<Listing>,
    /// Options of the activity selector, placeholder first
    pub selector: RwSignal<Vec<SelectOption>>,
    /// Notice banner
    pub banner: RwSignal<NoticeBanner>,
    /// Signup form email input
    pub email: RwSignal<String>,
    /// Signup form selected activity
    pub activity: RwSignal<String>,
    /// Signup request in flight
    pub submitting: RwSignal<bool>,
    /// Time of the last successful load
    pub last_loaded: RwSignal<Option<i64>>,
}

/// Provide board state to the component tree
pub fn provide_board_state() {
    let state = BoardState {
        api: GlooClient::from_storage(),
        listing: create_rw_signal(Listing::Loading),
        selector: create_rw_signal(Vec::new()),
        banner: create_rw_signal(NoticeBanner::new()),
        email: create_rw_signal(String::new()),
        activity: create_rw_signal(String::new()),
        submitting: create_rw_signal(false),
        last_loaded: create_rw_signal(None),
    };

    provide_context(state);
}

impl BoardState {
    /// Reload the catalog in the background
    pub fn refresh(&self) {
        let state = self.clone();
        spawn_local(async move {
            state.load_catalog().await;
        });
    }

    /// Fetch the catalog and rebuild the list and selector
    pub async fn load_catalog(&self) {
        match fetch_listing(&self.api).await {
            CatalogLoad::Loaded { listing, selector } => {
                self.listing.set(listing);
                self.selector.set(selector);
                self.last_loaded.set(Some(chrono::Utc::now().timestamp_millis()));
            }
            CatalogLoad::Failed { error } => {
                log_error("Error fetching activities", &error);
                self.listing.set(Listing::failed());
            }
        }
    }

    /// Submit the signup form
    pub async fn submit_signup(&self) {
        let email = self.email.get_untracked();
        let activity = self.activity.get_untracked();

        self.submitting.set(true);
        let outcome = perform(&self.api, BoardAction::Signup, &activity, &email).await;
        self.apply(outcome).await;
        self.submitting.set(false);
    }

    /// Remove one participant from an activity
    pub async fn remove_participant(&self, email: String, activity: String) {
        let outcome = perform(&self.api, BoardAction::Unregister, &activity, &email).await;
        self.apply(outcome).await;
    }

    /// Notice, form reset and reload after an action resolved
    async fn apply(&self, outcome: ActionOutcome) {
        if let Some(error) = &outcome.transport_error {
            let context = match outcome.action {
                BoardAction::Signup => "Error signing up",
                BoardAction::Unregister => "Error unregistering",
            };
            log_error(context, error);
        }

        self.show_notice(outcome.notice.clone());
        if outcome.resets_form() {
            self.email.set(String::new());
            self.activity.set(String::new());
        }
        if outcome.reloads_catalog() {
            self.load_catalog().await;
        }
    }

    /// Show a notice now and hide it once its own timer fires
    pub fn show_notice(&self, notice: Notice) {
        let mut ticket = None;
        self.banner.update(|banner| ticket = Some(banner.show(notice)));

        if let Some(ticket) = ticket {
            let banner = self.banner;
            gloo_timers::callback::Timeout::new(dismiss_delay_ms(), move || {
                banner.update(|b| {
                    b.dismiss(ticket);
                });
            })
            .forget();
        }
    }
}

fn dismiss_delay_ms() -> u32 {
    NOTICE_DISMISS_AFTER.as_millis() as u32
}

fn log_error(context: &str, error: &ApiError) {
    web_sys::console::error_1(&format!("{}: {}", context, error).into());
}

/// Footer label for the last successful load
pub fn last_loaded_label(timestamp: Option<i64>) -> String {
    timestamp
        .and_then(chrono::DateTime::from_timestamp_millis)
        .map(|dt| format!("Last updated: {}", dt.format("%H:%M:%S")))
        .unwrap_or_else(|| "Not loaded yet".to_string())
}
