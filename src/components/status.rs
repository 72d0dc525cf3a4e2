//! Loading / Error Indicators

use leptos::prelude::*;

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="status-row">
            <div class="spinner" role="progressbar" aria-label="Loading"></div>
        </div>
    }
}

/// Error banner with a user-facing message
#[component]
pub fn ErrorAlert(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="alert alert-error" role="alert">
            {message}
        </div>
    }
}
