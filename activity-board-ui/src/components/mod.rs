//! UI Components
//!
//! Leptos components for the board page.

pub mod activity_list;
pub mod loading;
pub mod notice;
pub mod signup_form;

pub use activity_list::ActivityList;
pub use loading::Loading;
pub use notice::NoticeBanner;
pub use signup_form::SignupForm;
