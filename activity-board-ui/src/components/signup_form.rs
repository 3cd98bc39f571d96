//! Signup Form Component
//!
//! `#signup-form` with the `#email` input and the `#activity` selector.

use leptos::*;

use crate::state::BoardState;

#[component]
pub fn SignupForm() -> impl IntoView {
    let state = use_context::<BoardState>().expect("BoardState not found");

    let submit_state = state.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let state = submit_state.clone();
        spawn_local(async move {
            state.submit_signup().await;
        });
    };

    let email = state.email;
    let activity = state.activity;
    let selector = state.selector;
    let submitting = state.submitting;

    view! {
        <form id="signup-form" on:submit=on_submit>
            <div class="form-group">
                <label for="email">"Student Email:"</label>
                <input
                    type="email"
                    id="email"
                    required
                    placeholder="your-email@mergington.edu"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </div>

            <div class="form-group">
                <label for="activity">"Select Activity:"</label>
                <select
                    id="activity"
                    required
                    prop:value=move || activity.get()
                    on:change=move |ev| activity.set(event_target_value(&ev))
                >
                    {move || {
                        selector
                            .get()
                            .into_iter()
                            .map(|option| view! {
                                <option value=option.value>{option.label}</option>
                            })
                            .collect_view()
                    }}
                </select>
            </div>

            <button type="submit" disabled=move || submitting.get()>
                {move || if submitting.get() { "Signing up..." } else { "Sign Up" }}
            </button>
        </form>
    }
}
