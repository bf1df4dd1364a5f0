//! Card Component
//!
//! One list item: title, expand toggle, delete button and, when expanded,
//! the description.

use leptos::prelude::*;

use crate::models::CardId;
use super::buttons::{DeleteButton, ExpandButton};
use super::icons::{ChevronDownIcon, ChevronUpIcon};

/// A single card in the list
///
/// Holds no state: expansion comes from `is_expanded`, and both buttons only
/// report back to the parent.
#[component]
pub fn Card(
    id: CardId,
    title: String,
    description: String,
    #[prop(into)] is_expanded: Signal<bool>,
    #[prop(into)] on_toggle_expand: Callback<()>,
    #[prop(into)] on_delete: Callback<CardId>,
) -> impl IntoView {
    view! {
        <div class="card">
            <div class="card-header">
                <h1 class="card-title">{title}</h1>
                <div class="card-actions">
                    <ExpandButton on_click=move |_: ()| on_toggle_expand.run(())>
                        {move || if is_expanded.get() {
                            view! { <ChevronUpIcon /> }.into_any()
                        } else {
                            view! { <ChevronDownIcon /> }.into_any()
                        }}
                    </ExpandButton>
                    <DeleteButton on_click=move |_: ()| on_delete.run(id.clone()) />
                </div>
            </div>
            <p class="card-description">
                {move || if is_expanded.get() { description.clone() } else { String::new() }}
            </p>
        </div>
    }
}
