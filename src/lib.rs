//! # Activity Board
//!
//! Client for a club activity signup page: fetches the activity catalog,
//! renders it with participant rosters, and submits signup and unregister
//! requests, reloading the catalog after every successful change.
//!
//! ## Modules
//!
//! - [`catalog`]: Activity data model and avatar initials
//! - [`api`]: Backend API trait, wire types, and the native reqwest client
//! - [`board`]: Board controller, render model, and notice banner
//! - [`config`]: TOML configuration with environment overrides (native only)
//!
//! The crate builds without its `native` feature for WebAssembly, where the
//! browser frontend supplies its own [`api::ActivityApi`] implementation.

pub mod api;
pub mod board;
pub mod catalog;
#[cfg(feature = "native")]
pub mod config;

pub use api::{ActionReply, ActivityApi, ApiError, ApiResult};
#[cfg(feature = "native")]
pub use api::BoardClient;

pub use board::{
    ActivityBoard, ActivityCard, Listing, Notice, NoticeBanner, NoticeKind, NoticeTicket,
    ParticipantEntry, Roster, SelectOption, SignupForm, NOTICE_DISMISS_AFTER,
};

pub use catalog::{initials_from_email, Activity, Catalog};

#[cfg(feature = "native")]
pub use config::{Config, ConfigError, LoggingConfig};
