//! Loading Component

use activity_board::board::listing::LOADING_TEXT;
use leptos::*;

/// Placeholder shown until the first catalog load resolves
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="flex items-center space-x-2 py-6">
            <div class="loading-spinner w-5 h-5" />
            <p>{LOADING_TEXT}</p>
        </div>
    }
}
