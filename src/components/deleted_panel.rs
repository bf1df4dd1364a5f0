//! Deleted Cards Panel
//!
//! Titles of soft-deleted cards, in deletion order.

use leptos::prelude::*;

use crate::models::DeletedListItem;

#[component]
pub fn DeletedCardsPanel(#[prop(into)] cards: Signal<Vec<DeletedListItem>>) -> impl IntoView {
    view! {
        <div class="card-stack">
            <For
                each=move || cards.get()
                key=|card| card.id.clone()
                children=move |card| {
                    view! {
                        <div class="card deleted-card">
                            <span class="card-title">{card.title}</span>
                        </div>
                    }
                }
            />
        </div>
    }
}
