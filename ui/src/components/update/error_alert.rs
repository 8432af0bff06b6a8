//! Error banner

use leptos::*;

use crate::components::common::ErrorIcon;
use crate::state::AppState;

/// Shows the error of the last submission, if any
#[component]
pub fn ErrorAlert() -> impl IntoView {
    let form = expect_context::<AppState>().form;
    let error = create_memo(move |_| form.with(|f| f.error.clone()));

    move || {
        error.get().map(|message| {
            view! {
                <div
                    role="alert"
                    class="mt-5 rounded border border-red-300 bg-red-50 px-4 py-3 text-left text-red-800"
                >
                    <p class="mb-1 font-semibold">"Error"</p>
                    <p class="flex items-center gap-1.5">
                        <ErrorIcon class="w-5 h-5 flex-shrink-0" />
                        <span>{message}</span>
                    </p>
                </div>
            }
        })
    }
}
