//! Icon Components
//!
//! SVG icons used throughout the application.

use leptos::*;

/// Success check in a circle
#[component]
pub fn CheckCircleIcon(
    #[prop(default = "w-5 h-5")] class: &'static str,
) -> impl IntoView {
    view! {
        <svg class=class viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
            <path d="M22 11.08V12a10 10 0 1 1-5.93-9.14" />
            <polyline points="22 4 12 14.01 9 11.01" />
        </svg>
    }
}

/// Error mark in a circle
#[component]
pub fn ErrorIcon(
    #[prop(default = "w-5 h-5")] class: &'static str,
) -> impl IntoView {
    view! {
        <svg class=class viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
            <circle cx="12" cy="12" r="10" />
            <line x1="12" y1="8" x2="12" y2="12" />
            <line x1="12" y1="16" x2="12.01" y2="16" />
        </svg>
    }
}

/// Indeterminate progress spinner
#[component]
pub fn Spinner(
    #[prop(default = "w-5 h-5")] class: &'static str,
) -> impl IntoView {
    view! {
        <span
            class=format!("{class} inline-block animate-spin rounded-full border-2 border-white/40 border-t-white")
            role="progressbar"
            aria-label="Loading"
        />
    }
}
