//! Company ID form
//!
//! Text input plus the Update button. The button shows a spinner and stays
//! disabled while a request is in flight.

use leptos::*;

use crate::components::common::Spinner;
use crate::state::AppState;

#[component]
pub fn UpdateForm() -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let form = app_state.form;

    let loading = create_memo(move |_| form.with(|f| f.loading));
    let company_id = create_memo(move |_| form.with(|f| f.company_id.clone()));
    let disabled = move || loading.get() || !app_state.config_loaded.get();

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        app_state.submit();
    };

    view! {
        <form on:submit=on_submit class="flex items-end justify-center gap-2.5">
            <div class="flex flex-col text-left">
                <label for="company-id" class="mb-1 text-sm text-slate-600">"Enter Company ID"</label>
                <input
                    id="company-id"
                    type="text"
                    inputmode="numeric"
                    autocomplete="off"
                    class="w-64 rounded border border-slate-300 px-4 py-2 focus:border-sky-700 focus:outline-none"
                    placeholder="e.g., 12345"
                    prop:value=move || company_id.get()
                    on:input=move |ev| app_state.set_company_id(event_target_value(&ev))
                    required
                />
            </div>

            <button
                type="submit"
                class="flex h-[42px] min-w-[96px] items-center justify-center rounded bg-sky-700 px-5 font-medium uppercase text-white transition hover:bg-sky-800 disabled:bg-slate-400"
                disabled=disabled
            >
                {move || {
                    if loading.get() {
                        view! { <Spinner class="w-6 h-6" /> }.into_view()
                    } else {
                        "Update".into_view()
                    }
                }}
            </button>
        </form>
    }
}
