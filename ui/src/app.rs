//! Root Application Component
//!
//! This module contains the main App component that sets up:
//! - Global state provider
//! - Start-up configuration loading
//! - The single update page

use leptos::*;
use leptos_meta::*;

use crate::client::{load_config, HttpUpdateClient};
use crate::components::{ErrorAlert, ResultsCard, UpdateForm};
use crate::state::AppState;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Initialize global state
    let app_state = AppState::new();
    provide_context(app_state);

    // Resolve the update service once; the form stays disabled until then
    spawn_local(async move {
        let client = load_config().await.map(HttpUpdateClient::new);
        app_state.set_client(client);
    });

    view! {
        <Title text="Update Customer Address" />
        <main class="mx-auto mt-12 max-w-3xl px-4 text-center">
            <h1 class="mb-6 text-3xl font-bold text-sky-900">"Update Customer Address"</h1>
            <UpdateForm />
            <ErrorAlert />
            <ResultsCard />
        </main>
    }
}
