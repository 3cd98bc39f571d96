//! Notice banner
//!
//! The transient success/error message shown after a signup or removal.
//! Showing a notice hands back a [`NoticeTicket`]; whoever owns the timer
//! calls [`NoticeBanner::dismiss`] with it once [`NOTICE_DISMISS_AFTER`]
//! has elapsed. A ticket only hides the notice it was issued for, so a
//! timer left over from an older notice never cuts a newer one short.

use serde::Serialize;
use std::time::Duration;

/// How long a notice stays on screen
pub const NOTICE_DISMISS_AFTER: Duration = Duration::from_secs(5);

/// Classification of a notice, also its CSS class in the browser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    pub fn css_class(self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}

/// Handle for dismissing one particular notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoticeTicket(u64);

/// `hidden -> visible(kind) -> hidden`, restartable while visible
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoticeBanner {
    notice: Option<Notice>,
    generation: u64,
}

impl NoticeBanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `notice` immediately, replacing whatever is on screen
    pub fn show(&mut self, notice: Notice) -> NoticeTicket {
        self.generation += 1;
        self.notice = Some(notice);
        NoticeTicket(self.generation)
    }

    /// Hide the notice `ticket` was issued for.
    ///
    /// Returns false and leaves the banner alone when a newer notice has
    /// replaced it since.
    pub fn dismiss(&mut self, ticket: NoticeTicket) -> bool {
        if ticket.0 != self.generation || self.notice.is_none() {
            return false;
        }
        self.notice = None;
        true
    }

    pub fn current(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.notice.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_hidden() {
        let banner = NoticeBanner::new();
        assert!(!banner.is_visible());
        assert_eq!(banner.current(), None);
    }

    #[test]
    fn test_show_then_dismiss() {
        let mut banner = NoticeBanner::new();
        let ticket = banner.show(Notice::success("Signed up"));

        assert!(banner.is_visible());
        assert_eq!(banner.current().unwrap().kind, NoticeKind::Success);

        assert!(banner.dismiss(ticket));
        assert!(!banner.is_visible());
        // Firing twice is harmless
        assert!(!banner.dismiss(ticket));
    }

    #[test]
    fn test_stale_timer_keeps_newer_notice() {
        let mut banner = NoticeBanner::new();
        let first = banner.show(Notice::success("Signed up"));
        let second = banner.show(Notice::error("Student is already signed up"));

        // Newer notice is visible at once and overwrites the classification
        assert_eq!(banner.current(), Some(&Notice::error("Student is already signed up")));

        assert!(!banner.dismiss(first));
        assert!(banner.is_visible());

        assert!(banner.dismiss(second));
        assert!(!banner.is_visible());
    }

    #[test]
    fn test_reshow_after_hidden() {
        let mut banner = NoticeBanner::new();
        let ticket = banner.show(Notice::error("An error occurred"));
        banner.dismiss(ticket);

        banner.show(Notice::success("Unregistered"));
        assert!(banner.is_visible());
        assert_eq!(banner.current().unwrap().kind.css_class(), "success");
    }

    #[test]
    fn test_dismiss_delay() {
        assert_eq!(NOTICE_DISMISS_AFTER.as_millis(), 5000);
    }
}
