use leptos::prelude::*;

/// Loading indicator shown while the list query is pending
#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div class="spinner" role="status" aria-label="Loading">
            <span class="spinner-ring"></span>
        </div>
    }
}
