//! Global State Management
//!
//! This module manages the application state:
//! - The form model (input, results, loading flag, error, selected tab)
//! - The update service client, once configuration is resolved

use address_updater_shared::{submit_update, CompanyId, FormState, SubmitError};
use leptos::*;
use tracing::Instrument;
use uuid::Uuid;

use crate::client::HttpUpdateClient;

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    /// Form model driving every component
    pub form: RwSignal<FormState>,

    /// Whether start-up configuration loading has finished
    pub config_loaded: RwSignal<bool>,

    /// Client for the update service; `None` when unconfigured
    client: RwSignal<Option<HttpUpdateClient>>,
}

impl AppState {
    /// Create a new app state with default values
    pub fn new() -> Self {
        Self {
            form: create_rw_signal(FormState::new()),
            config_loaded: create_rw_signal(false),
            client: create_rw_signal(None),
        }
    }

    /// Install the resolved client and unlock the form
    pub fn set_client(&self, client: Option<HttpUpdateClient>) {
        self.client.set(client);
        self.config_loaded.set(true);
    }

    pub fn client(&self) -> Option<HttpUpdateClient> {
        self.client.get_untracked()
    }

    pub fn set_company_id(&self, value: String) {
        self.form.update(|form| form.company_id = value);
    }

    pub fn select_tab(&self, index: usize) {
        self.form.update(|form| form.select_tab(index));
    }

    /// Submit the current input.
    ///
    /// Clears the previous outcome, then settles the form once the request
    /// (if any) completes. Responses are applied in arrival order.
    pub fn submit(&self) {
        let input = self.form.with_untracked(|form| form.company_id.clone());
        let client = self.client();
        let form = self.form;

        form.update(FormState::begin_submission);

        let span = tracing::info_span!("submission", id = %Uuid::new_v4());
        spawn_local(
            async move {
                let outcome = match client {
                    Some(client) => submit_update(&client, &input).await,
                    None => CompanyId::parse(&input).and(Err(SubmitError::NotConfigured)),
                };

                match &outcome {
                    Ok(bundle) => tracing::info!(
                        company_id = %input,
                        databases = bundle.len(),
                        with_records = bundle.has_records(),
                        "Update completed"
                    ),
                    Err(e) if e.is_client_side() => {
                        tracing::warn!(company_id = %input, error = %e.detail(), "Submission rejected")
                    }
                    Err(e) => {
                        tracing::error!(company_id = %input, error = %e.detail(), "Update failed")
                    }
                }

                form.update(|form| form.settle(outcome));
            }
            .instrument(span),
        );
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
