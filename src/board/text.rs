//! Plain-text rendering of the board for terminals

use super::listing::{Listing, Roster, LOADING_TEXT, NO_PARTICIPANTS_TEXT, ROSTER_TITLE};
use super::notice::{Notice, NoticeKind};

/// Render the listing as indented text, one block per activity
pub fn render_listing(listing: &Listing) -> String {
    let cards = match listing {
        Listing::Loading => return format!("{}\n", LOADING_TEXT),
        Listing::Failed { message } => return format!("{}\n", message),
        Listing::Ready { cards } => cards,
    };

    let mut out = String::new();
    for card in cards {
        out.push_str(&format!("{}\n", card.name));
        out.push_str(&format!("  {}\n", card.description));
        out.push_str(&format!("  Schedule: {}\n", card.schedule));
        out.push_str(&format!("  Availability: {}\n", card.availability()));
        out.push_str(&format!("  {}:\n", ROSTER_TITLE));
        match &card.roster {
            Roster::Empty => out.push_str(&format!("    {}\n", NO_PARTICIPANTS_TEXT)),
            Roster::Participants { entries, .. } => {
                for entry in entries {
                    out.push_str(&format!("    [{:<2}] {}\n", entry.initials, entry.email));
                }
            }
        }
        out.push('\n');
    }
    out
}

pub fn render_notice(notice: &Notice) -> String {
    let marker = match notice.kind {
        NoticeKind::Success => "✓",
        NoticeKind::Error => "✕",
    };
    format!("{} {}", marker, notice.text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Activity, Catalog};

    #[test]
    fn test_render_ready_listing() {
        let catalog = Catalog::new()
            .with(
                "Chess Club",
                Activity::new("Learn strategies", "Fridays", 12).participant("jane.doe@x.com"),
            )
            .with("Art Club", Activity::new("Paint", "Mondays", 5));

        let text = render_listing(&Listing::from_catalog(&catalog));

        assert!(text.starts_with("Chess Club\n"));
        assert!(text.contains("  Availability: 11 spots left\n"));
        assert!(text.contains("    [JD] jane.doe@x.com\n"));
        assert!(text.contains("Art Club\n"));
        assert!(text.contains("    No participants yet\n"));
    }

    #[test]
    fn test_render_card_block() {
        let catalog = Catalog::new().with(
            "Chess Club",
            Activity::new("Learn strategies", "Fridays", 2).participant("jane.doe@x.com"),
        );

        assert_eq!(
            render_listing(&Listing::from_catalog(&catalog)),
            "Chess Club\n  Learn strategies\n  Schedule: Fridays\n  Availability: 1 spots left\n  Participants:\n    [JD] jane.doe@x.com\n\n"
        );
    }

    #[test]
    fn test_render_failed_listing() {
        assert_eq!(
            render_listing(&Listing::failed()),
            "Failed to load activities. Please try again later.\n"
        );
    }

    #[test]
    fn test_render_notice() {
        assert_eq!(render_notice(&Notice::success("Signed up")), "✓ Signed up");
        assert_eq!(render_notice(&Notice::error("An error occurred")), "✕ An error occurred");
    }
}
