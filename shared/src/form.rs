//! Form view state
//!
//! Plain model of the update form. The UI keeps one of these in a signal
//! and renders from it.

use crate::error::SubmitError;
use crate::messages::{DatabaseOutcome, ResultBundle};

/// Local state of the update form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    /// Raw text of the Company ID input
    pub company_id: String,

    /// Bundle from the last successful submission
    pub bundle: Option<ResultBundle>,

    /// A request is in flight
    pub loading: bool,

    /// Banner text from the last failed submission
    pub error: Option<String>,

    /// Index of the selected database tab
    pub selected_tab: usize,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the previous outcome and mark a request as in flight
    pub fn begin_submission(&mut self) {
        self.loading = true;
        self.bundle = None;
        self.error = None;
        self.selected_tab = 0;
    }

    /// Record how a submission ended. Always clears `loading`.
    pub fn settle(&mut self, outcome: Result<ResultBundle, SubmitError>) {
        match outcome {
            Ok(bundle) => {
                self.bundle = Some(bundle);
                self.error = None;
            }
            Err(err) => {
                self.bundle = None;
                self.error = Some(err.to_string());
            }
        }
        self.loading = false;
    }

    /// The results card is shown only if some database returned a record
    pub fn show_results(&self) -> bool {
        self.bundle
            .as_ref()
            .is_some_and(|bundle| !bundle.is_empty() && bundle.has_records())
    }

    /// Select a tab; out-of-range indexes are ignored
    pub fn select_tab(&mut self, index: usize) {
        if self.bundle.as_ref().is_some_and(|bundle| index < bundle.len()) {
            self.selected_tab = index;
        }
    }

    /// Database name and outcome of the selected tab
    pub fn selected(&self) -> Option<(&str, &DatabaseOutcome)> {
        self.bundle.as_ref()?.get_index(self.selected_tab)
    }
}
