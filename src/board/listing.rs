//! Listing render model
//!
//! What the board shows for a catalog: one card per activity with its
//! roster, plus the options of the activity selector. Frontends turn these
//! into DOM nodes or terminal text; nothing here knows about either.

use serde::Serialize;

use crate::catalog::{initials_from_email, Activity, Catalog};

/// Text shown in place of the list when the catalog cannot be loaded
pub const LOAD_FAILED_TEXT: &str = "Failed to load activities. Please try again later.";
/// Text shown before the first load completes
pub const LOADING_TEXT: &str = "Loading activities...";
/// Placeholder shown for an activity with an empty roster
pub const NO_PARTICIPANTS_TEXT: &str = "No participants yet";
/// Heading of every roster section
pub const ROSTER_TITLE: &str = "Participants";
/// Label of the selector placeholder option
pub const SELECT_PLACEHOLDER: &str = "-- Select an activity --";

/// State of the activities list
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum Listing {
    /// Nothing loaded yet
    Loading,
    /// Rendered catalog
    Ready { cards: Vec<ActivityCard> },
    /// Last load failed
    Failed { message: String },
}

impl Listing {
    /// Render a freshly fetched catalog
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let cards = catalog
            .iter()
            .map(|(name, activity)| ActivityCard::new(name, activity))
            .collect();
        Listing::Ready { cards }
    }

    pub fn failed() -> Self {
        Listing::Failed {
            message: LOAD_FAILED_TEXT.to_string(),
        }
    }

    pub fn cards(&self) -> &[ActivityCard] {
        match self {
            Listing::Ready { cards } => cards,
            _ => &[],
        }
    }

    pub fn card(&self, name: &str) -> Option<&ActivityCard> {
        self.cards().iter().find(|card| card.name == name)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Listing::Failed { .. })
    }
}

/// One rendered activity
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityCard {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub spots_left: i64,
    pub roster: Roster,
}

impl ActivityCard {
    pub fn new(name: &str, activity: &Activity) -> Self {
        let roster = if activity.participants.is_empty() {
            Roster::Empty
        } else {
            Roster::Participants {
                label: format!("{} participants", name),
                entries: activity
                    .participants
                    .iter()
                    .map(|email| ParticipantEntry::new(email))
                    .collect(),
            }
        };

        Self {
            name: name.to_string(),
            description: activity.description.clone(),
            schedule: activity.schedule.clone(),
            spots_left: activity.spots_left(),
            roster,
        }
    }

    /// `"{n} spots left"`, negative when over capacity
    pub fn availability(&self) -> String {
        format!("{} spots left", self.spots_left)
    }

    pub fn participant_emails(&self) -> Vec<&str> {
        match &self.roster {
            Roster::Participants { entries, .. } => {
                entries.iter().map(|e| e.email.as_str()).collect()
            }
            Roster::Empty => Vec::new(),
        }
    }
}

/// Roster section of a card
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Roster {
    /// Renders [`NO_PARTICIPANTS_TEXT`]
    Empty,
    /// Labelled list, one removable entry per participant
    Participants {
        label: String,
        entries: Vec<ParticipantEntry>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParticipantEntry {
    pub initials: String,
    pub email: String,
}

impl ParticipantEntry {
    pub fn new(email: &str) -> Self {
        Self {
            initials: initials_from_email(email),
            email: email.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// Options of the activity selector, placeholder first
///
/// Always rebuilt from scratch so repeated loads never stack options.
pub fn selector_options(catalog: &Catalog) -> Vec<SelectOption> {
    std::iter::once(SelectOption {
        value: String::new(),
        label: SELECT_PLACEHOLDER.to_string(),
    })
    .chain(catalog.names().map(|name| SelectOption {
        value: name.to_string(),
        label: name.to_string(),
    }))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> Catalog {
        Catalog::new()
            .with(
                "Chess Club",
                Activity::new("Learn strategies", "Fridays, 3:30 PM", 12)
                    .participant("michael@mergington.edu")
                    .participant("daniel.lee@mergington.edu"),
            )
            .with(
                "Art Club",
                Activity::new("Paint and draw", "Mondays, 4:00 PM", 15),
            )
    }

    #[test]
    fn test_cards_follow_catalog() {
        let listing = Listing::from_catalog(&sample_catalog());
        let cards = listing.cards();

        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].name, "Chess Club");
        assert_eq!(cards[0].availability(), "10 spots left");
        assert_eq!(cards[0].schedule, "Fridays, 3:30 PM");
    }

    #[test]
    fn test_roster_entries() {
        let listing = Listing::from_catalog(&sample_catalog());
        let chess = listing.card("Chess Club").unwrap();

        match &chess.roster {
            Roster::Participants { label, entries } => {
                assert_eq!(label, "Chess Club participants");
                assert_eq!(entries[0].initials, "MI");
                assert_eq!(entries[1].initials, "DL");
                assert_eq!(entries[1].email, "daniel.lee@mergington.edu");
            }
            Roster::Empty => panic!("expected participants"),
        }

        assert_eq!(listing.card("Art Club").unwrap().roster, Roster::Empty);
    }

    #[test]
    fn test_full_activity_renders_non_positive_spots() {
        let catalog = Catalog::new().with(
            "Gym Class",
            Activity::new("Exercise", "Daily", 1)
                .participant("a@x.com")
                .participant("b@x.com"),
        );
        let listing = Listing::from_catalog(&catalog);
        let card = listing.card("Gym Class").unwrap();

        assert!(card.spots_left <= 0);
        assert_eq!(card.availability(), "-1 spots left");
    }

    #[test]
    fn test_selector_has_single_placeholder() {
        let catalog = sample_catalog();
        let first = selector_options(&catalog);
        let second = selector_options(&catalog);

        assert_eq!(first, second);
        assert_eq!(first.len(), 3);
        assert_eq!(first[0].value, "");
        assert_eq!(first[0].label, SELECT_PLACEHOLDER);
        assert_eq!(first.iter().filter(|o| o.value.is_empty()).count(), 1);
    }

    #[test]
    fn test_failed_listing() {
        let listing = Listing::failed();
        assert!(listing.is_failed());
        assert!(listing.cards().is_empty());
    }

    #[test]
    fn test_listing_json_shape() {
        let json = serde_json::to_value(Listing::from_catalog(&sample_catalog())).unwrap();
        assert_eq!(json["state"], "ready");
        assert_eq!(json["cards"][1]["roster"]["kind"], "empty");
    }
}
