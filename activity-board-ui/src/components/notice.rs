//! Notice Component
//!
//! The `#message` banner showing the outcome of the last action.

use leptos::*;

use crate::state::BoardState;

/// Success/error banner, hidden while no notice is active
#[component]
pub fn NoticeBanner() -> impl IntoView {
    let state = use_context::<BoardState>().expect("BoardState not found");
    let banner = state.banner;
    let notice = move || banner.with(|banner| banner.current().cloned());

    view! {
        <div
            id="message"
            class=move || match notice() {
                Some(notice) => notice.kind.css_class().to_string(),
                None => "hidden".to_string(),
            }
        >
            {move || notice().map(|notice| {
                let icon = if notice.is_error() { "✕" } else { "✓" };
                view! {
                    <span class="notice-icon">{icon}</span>
                    <span class="notice-text">{notice.text}</span>
                }
            })}
        </div>
    }
}
