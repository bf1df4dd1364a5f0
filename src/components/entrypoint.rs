//! Entrypoint Component
//!
//! Two-column list view. Owns the board state, reacts to the list query and
//! writes deletions and expansions through to storage.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::board::{BoardPersistence, BoardState, BoardStateStoreFields, BoardStore};
use crate::config::use_app_config;
use crate::models::{CardId, ListItem};
use crate::query::use_list_query;
use crate::storage::SharedStore;
use super::{Card, DeletedCardsPanel, PanelButton, Spinner};

#[component]
pub fn Entrypoint(store: SharedStore) -> impl IntoView {
    let config = use_app_config();
    let persistence = BoardPersistence::new(store, config.storage_keys.clone());
    let board: BoardStore = Store::new(BoardState::load(&persistence));
    let query = use_list_query(config.data_url.clone());

    // Fill the visible list when a request delivers data
    Effect::new(move |_| {
        if let Some(items) = query.data.get() {
            board.update(|state| {
                state.populate(&items);
            });
        }
    });

    let delete_card = {
        let persistence = persistence.clone();
        Callback::new(move |id: CardId| {
            board.update(|state| state.delete_card(&id, &persistence));
        })
    };

    let toggle_card_expand = Callback::new(move |id: CardId| {
        board.update(|state| state.toggle_card_expand(&id, &persistence));
    });

    let toggle_deleted_panel = Callback::new(move |_: ()| {
        board.update(|state| state.toggle_show_deleted());
    });

    let refresh = Callback::new(move |_: ()| {
        log::debug!("[BOARD] Refresh requested");
        board.update(|state| state.clear_visible());
        query.refetch();
    });

    let list_heading = config.list_heading;
    let deleted_heading = config.deleted_heading;

    view! {
        <Show
            when=move || !query.is_loading.get()
            fallback=|| view! { <Spinner /> }
        >
            <div class="board">
                <div class="board-column">
                    <h1 class="column-heading">
                        {list_heading.clone()} " (" {move || board.visible_cards().with(|cards| cards.len())} ")"
                    </h1>
                    {move || query.error.get().map(|e| view! {
                        <p class="load-error">"Could not load the list: " {e}</p>
                    })}
                    <div class="card-stack">
                        <For
                            each=move || board.visible_cards().get()
                            key=|card| card.id.clone()
                            children=move |card: ListItem| {
                                let expanded_id = card.id.clone();
                                let toggle_id = card.id.clone();
                                let is_expanded = Signal::derive(move || {
                                    board.expanded_card_ids().with(|ids| ids.contains(&expanded_id))
                                });
                                view! {
                                    <Card
                                        id=card.id
                                        title=card.title
                                        description=card.description
                                        is_expanded=is_expanded
                                        on_toggle_expand=move |_: ()| toggle_card_expand.run(toggle_id.clone())
                                        on_delete=delete_card
                                    />
                                }
                            }
                        />
                    </div>
                </div>
                <div class="board-column">
                    <div class="column-toolbar">
                        <h1 class="column-heading">
                            {deleted_heading.clone()} " (" {move || board.deleted_cards().with(|cards| cards.len())} ")"
                        </h1>
                        <PanelButton on_click=toggle_deleted_panel>
                            {move || if board.show_deleted_cards().get() { "Hide" } else { "Reveal" }}
                        </PanelButton>
                        <PanelButton on_click=refresh>"Refresh"</PanelButton>
                    </div>
                    <Show when=move || board.show_deleted_cards().get()>
                        <DeletedCardsPanel cards=Signal::derive(move || board.deleted_cards().get()) />
                    </Show>
                </div>
            </div>
        </Show>
    }
}
