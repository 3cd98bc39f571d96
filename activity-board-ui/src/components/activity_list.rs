//! Activity List Component
//!
//! Renders the `#activities-list` container: one card per activity with
//! its availability and participant roster.

use activity_board::board::listing::{NO_PARTICIPANTS_TEXT, ROSTER_TITLE};
use activity_board::board::{ActivityCard, Listing, ParticipantEntry, Roster};
use leptos::*;

use crate::components::Loading;
use crate::state::BoardState;

/// Activities list, rebuilt whenever the listing signal changes
#[component]
pub fn ActivityList() -> impl IntoView {
    let state = use_context::<BoardState>().expect("BoardState not found");

    view! {
        <div id="activities-list">
            {move || match state.listing.get() {
                Listing::Loading => view! { <Loading /> }.into_view(),
                Listing::Failed { message } => view! { <p>{message}</p> }.into_view(),
                Listing::Ready { cards } => cards
                    .into_iter()
                    .map(|card| view! { <ActivityCardView card=card /> })
                    .collect_view(),
            }}
        </div>
    }
}

#[component]
fn ActivityCardView(card: ActivityCard) -> impl IntoView {
    let availability = card.availability();
    let activity = card.name.clone();

    view! {
        <div class="activity-card">
            <h4>{card.name}</h4>
            <p>{card.description}</p>
            <p><strong>"Schedule:"</strong>" "{card.schedule}</p>
            <p><strong>"Availability:"</strong>" "{availability}</p>

            <div class="participants-section">
                <h5>{ROSTER_TITLE}</h5>
                {match card.roster {
                    Roster::Empty => view! {
                        <p class="no-participants">{NO_PARTICIPANTS_TEXT}</p>
                    }.into_view(),
                    Roster::Participants { label, entries } => view! {
                        <ul class="participants-list" aria-label=label>
                            {entries
                                .into_iter()
                                .map(|entry| view! {
                                    <ParticipantItem entry=entry activity=activity.clone() />
                                })
                                .collect_view()}
                        </ul>
                    }.into_view(),
                }}
            </div>
        </div>
    }
}

#[component]
fn ParticipantItem(entry: ParticipantEntry, activity: String) -> impl IntoView {
    let state = use_context::<BoardState>().expect("BoardState not found");
    let (removing, set_removing) = create_signal(false);

    let email = entry.email.clone();
    let on_remove = move |_| {
        let state = state.clone();
        let email = email.clone();
        let activity = activity.clone();
        set_removing.set(true);
        spawn_local(async move {
            state.remove_participant(email, activity).await;
            // The reload may already have replaced this row
            let _ = set_removing.try_set(false);
        });
    };

    view! {
        <li>
            <span class="avatar" aria-hidden="true">{entry.initials}</span>
            <span class="participant-email">{entry.email.clone()}</span>
            <button
                type="button"
                class="remove-participant"
                title="Unregister"
                aria-label=format!("Unregister {}", entry.email)
                disabled=move || removing.get()
                on:click=on_remove
            >
                "✕"
            </button>
        </li>
    }
}
