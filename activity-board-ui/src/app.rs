//! App Root Component
//!
//! Page layout and the initial catalog load.

use leptos::*;

use crate::components::{ActivityList, NoticeBanner, SignupForm};
use crate::state::{last_loaded_label, provide_board_state, BoardState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_board_state();

    let state = use_context::<BoardState>().expect("BoardState not found");
    state.refresh();

    view! {
        <header>
            <h1>"Mergington High School"</h1>
            <h2>"Extracurricular Activities"</h2>
        </header>

        <main>
            <section id="activities-container">
                <h3>"Available Activities"</h3>
                <ActivityList />
            </section>

            <section id="signup-container">
                <h3>"Sign Up for an Activity"</h3>
                <SignupForm />
                <NoticeBanner />
            </section>
        </main>

        <Footer />
    }
}

/// Footer showing when the list was last refreshed
#[component]
fn Footer() -> impl IntoView {
    let state = use_context::<BoardState>().expect("BoardState not found");
    let last_loaded = state.last_loaded;

    view! {
        <footer>
            <p class="text-gray-400">{move || last_loaded_label(last_loaded.get())}</p>
        </footer>
    }
}
