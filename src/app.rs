//! Card List App
//!
//! Root component: provides the configuration and hands the storage to the
//! list view.

use leptos::prelude::*;

use crate::components::Entrypoint;
use crate::config::AppConfig;
use crate::storage::SharedStore;

#[component]
pub fn App(config: AppConfig, store: SharedStore) -> impl IntoView {
    provide_context(config);

    view! {
        <main class="app-layout">
            <Entrypoint store=store />
        </main>
    }
}
