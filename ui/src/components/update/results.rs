//! Results card
//!
//! One tab per database in response order, and a Field/Value table for the
//! selected database.

use address_updater_shared::{detail_rows, FormState};
use leptos::*;

use crate::components::common::CheckCircleIcon;
use crate::state::AppState;

/// Success card, shown once some database returned a customer record
#[component]
pub fn ResultsCard() -> impl IntoView {
    let form = expect_context::<AppState>().form;
    let visible = create_memo(move |_| form.with(FormState::show_results));

    view! {
        <Show when=move || visible.get()>
            <section class="mt-5 rounded-lg bg-slate-50 p-4">
                <CheckCircleIcon class="mx-auto h-10 w-10 text-green-700" />
                <h2 class="mt-2 text-lg font-bold text-sky-900">
                    "Customer Details Updated Successfully!"
                </h2>
                <DatabaseTabs />
                <DetailsTable />
            </section>
        </Show>
    }
}

/// Tab strip with one tab per database
#[component]
pub fn DatabaseTabs() -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let form = app_state.form;
    let databases = create_memo(move |_| {
        form.with(|f| {
            f.bundle
                .as_ref()
                .map(|bundle| bundle.databases().map(str::to_string).collect::<Vec<_>>())
                .unwrap_or_default()
        })
    });

    view! {
        <nav role="tablist" class="mt-4 flex justify-center gap-1 border-b border-slate-200">
            {move || {
                databases
                    .get()
                    .into_iter()
                    .enumerate()
                    .map(|(index, database)| {
                        let is_active = move || form.with(|f| f.selected_tab == index);
                        view! {
                            <button
                                type="button"
                                role="tab"
                                aria-selected=move || is_active().to_string()
                                class=move || {
                                    if is_active() {
                                        "border-b-2 border-sky-700 px-4 py-2 text-sm font-medium uppercase text-sky-700"
                                    } else {
                                        "border-b-2 border-transparent px-4 py-2 text-sm font-medium uppercase text-slate-500 hover:text-slate-800"
                                    }
                                }
                                on:click=move |_| app_state.select_tab(index)
                            >
                                {database}
                            </button>
                        }
                    })
                    .collect_view()
            }}
        </nav>
    }
}

/// Field/Value table for the selected database
#[component]
pub fn DetailsTable() -> impl IntoView {
    let form = expect_context::<AppState>().form;
    // Outer `None`: nothing selected. Inner `None`: the database had no record.
    let rows = create_memo(move |_| {
        form.with(|f| f.selected().map(|(database, outcome)| detail_rows(database, outcome)))
    });

    move || {
        rows.get().map(|rows| {
            let body = match rows {
                Some(rows) => rows
                    .into_iter()
                    .map(|row| {
                        view! {
                            <tr class="border-t border-slate-200">
                                <td class="px-4 py-3">{row.label}</td>
                                <td class="px-4 py-3">{row.value}</td>
                            </tr>
                        }
                    })
                    .collect_view(),
                None => view! {
                    <tr class="border-t border-slate-200">
                        <td colspan="2" class="px-4 py-3 text-center">"No customer data available"</td>
                    </tr>
                }
                .into_view(),
            };

            view! {
                <div class="mt-5 overflow-hidden rounded-lg bg-white shadow">
                    <table class="w-full text-left text-sm">
                        <thead>
                            <tr>
                                <th class="px-4 py-3 font-bold">"Field"</th>
                                <th class="px-4 py-3 font-bold">"Value"</th>
                            </tr>
                        </thead>
                        <tbody>{body}</tbody>
                    </table>
                </div>
            }
        })
    }
}
