//! Activity Board
//!
//! Loads the catalog, renders it, and runs the signup and removal flows.
//!
//! Every successful mutation is followed by a full reload; the rendered
//! listing is always a function of the latest catalog response and is
//! never patched locally.
//!
//! ```rust,no_run
//! use activity_board::api::BoardClient;
//! use activity_board::board::ActivityBoard;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = BoardClient::new("http://localhost:8000", None)?;
//!     let mut board = ActivityBoard::new(client);
//!
//!     board.load_catalog().await;
//!     board.submit_signup("jane.doe@mergington.edu", "Chess Club").await;
//!
//!     if let Some(notice) = board.notice() {
//!         println!("{}", notice.text);
//!     }
//!     Ok(())
//! }
//! ```

pub mod listing;
pub mod notice;
pub mod outcome;
pub mod sync;
pub mod text;

pub use listing::{
    selector_options, ActivityCard, Listing, ParticipantEntry, Roster, SelectOption,
};
pub use notice::{Notice, NoticeBanner, NoticeKind, NoticeTicket, NOTICE_DISMISS_AFTER};
pub use outcome::{ActionOutcome, BoardAction};
pub use sync::{fetch_listing, perform, CatalogLoad};

use crate::api::ActivityApi;

/// Contents of the signup form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub email: String,
    /// Selected activity, empty while the placeholder is selected
    pub activity: String,
}

impl SignupForm {
    pub fn reset(&mut self) {
        self.email.clear();
        self.activity.clear();
    }
}

/// Board state driven by one [`ActivityApi`]
pub struct ActivityBoard<A> {
    api: A,
    listing: Listing,
    selector: Vec<SelectOption>,
    form: SignupForm,
    banner: NoticeBanner,
}

impl<A: ActivityApi> ActivityBoard<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            listing: Listing::Loading,
            selector: Vec::new(),
            form: SignupForm::default(),
            banner: NoticeBanner::new(),
        }
    }

    /// Fetch the catalog and rebuild the listing and selector.
    ///
    /// A failed fetch replaces the listing with the failure notice and
    /// leaves the selector as it was.
    pub async fn load_catalog(&mut self) -> &Listing {
        match fetch_listing(&self.api).await {
            CatalogLoad::Loaded { listing, selector } => {
                self.listing = listing;
                self.selector = selector;
            }
            CatalogLoad::Failed { .. } => self.listing = Listing::failed(),
        }
        &self.listing
    }

    /// Sign `email` up for `activity`.
    ///
    /// On success the form is reset and the catalog reloaded; on failure
    /// the form keeps its contents for correction.
    pub async fn submit_signup(&mut self, email: &str, activity: &str) -> NoticeTicket {
        self.run(BoardAction::Signup, email, activity).await
    }

    /// Submit whatever the signup form currently holds
    pub async fn submit_form(&mut self) -> NoticeTicket {
        let SignupForm { email, activity } = self.form.clone();
        self.submit_signup(&email, &activity).await
    }

    /// Remove `email` from `activity`, reloading the catalog on success
    pub async fn remove_participant(&mut self, email: &str, activity: &str) -> NoticeTicket {
        self.run(BoardAction::Unregister, email, activity).await
    }

    async fn run(&mut self, action: BoardAction, email: &str, activity: &str) -> NoticeTicket {
        let outcome = perform(&self.api, action, activity, email).await;

        let ticket = self.banner.show(outcome.notice.clone());
        if outcome.resets_form() {
            self.form.reset();
        }
        if outcome.reloads_catalog() {
            self.load_catalog().await;
        }
        ticket
    }

    /// Hide the notice `ticket` belongs to, once its timer fires
    pub fn dismiss_notice(&mut self, ticket: NoticeTicket) -> bool {
        self.banner.dismiss(ticket)
    }

    pub fn listing(&self) -> &Listing {
        &self.listing
    }

    pub fn selector(&self) -> &[SelectOption] {
        &self.selector
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.banner.current()
    }

    pub fn form(&self) -> &SignupForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut SignupForm {
        &mut self.form
    }

    pub fn api(&self) -> &A {
        &self.api
    }
}
