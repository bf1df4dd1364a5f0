//! Board State
//!
//! Card collections behind the list view: visible cards, deleted cards,
//! expanded ids and the deleted-panel flag. Every mutation of the deleted or
//! expanded collections is written through to storage.

use reactive_stores::Store;

use crate::config::StorageKeys;
use crate::models::{CardId, DeletedListItem, ListItem};
use crate::storage::{load_collection, save_collection, SharedStore};

/// Where the board writes its persisted collections
#[derive(Clone)]
pub struct BoardPersistence {
    store: SharedStore,
    keys: StorageKeys,
}

impl BoardPersistence {
    pub fn new(store: SharedStore, keys: StorageKeys) -> Self {
        Self { store, keys }
    }

    fn save_deleted(&self, deleted: &[DeletedListItem]) {
        if let Err(e) = save_collection(&*self.store, &self.keys.deleted_cards, deleted) {
            log::warn!("[BOARD] Could not persist deleted cards: {}", e);
        }
    }

    fn save_expanded(&self, expanded: &[CardId]) {
        if let Err(e) = save_collection(&*self.store, &self.keys.expanded_card_ids, expanded) {
            log::warn!("[BOARD] Could not persist expanded ids: {}", e);
        }
    }
}

/// Board state with field-level reactivity
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct BoardState {
    /// Fetched items minus deleted ones, in fetch order
    pub visible_cards: Vec<ListItem>,
    /// Deleted items, in deletion order
    pub deleted_cards: Vec<DeletedListItem>,
    /// Ids whose description is shown (no duplicates)
    pub expanded_card_ids: Vec<CardId>,
    /// Whether the deleted-cards panel is open (not persisted)
    pub show_deleted_cards: bool,
}

impl BoardState {
    /// Restore deleted cards and expanded ids; the visible list starts empty
    pub fn load(persistence: &BoardPersistence) -> Self {
        let stored_deleted: Vec<DeletedListItem> =
            load_collection(&*persistence.store, &persistence.keys.deleted_cards);
        let stored_ids: Vec<CardId> =
            load_collection(&*persistence.store, &persistence.keys.expanded_card_ids);

        // Keep the first entry per id; keyed rendering needs unique ids
        let mut deleted_cards: Vec<DeletedListItem> = Vec::with_capacity(stored_deleted.len());
        for card in stored_deleted {
            if !deleted_cards.iter().any(|kept| kept.id == card.id) {
                deleted_cards.push(card);
            }
        }

        let mut expanded_card_ids = Vec::with_capacity(stored_ids.len());
        for id in stored_ids {
            if !expanded_card_ids.contains(&id) {
                expanded_card_ids.push(id);
            }
        }

        log::debug!(
            "[BOARD] Restored {} deleted, {} expanded",
            deleted_cards.len(),
            expanded_card_ids.len()
        );
        Self {
            deleted_cards,
            expanded_card_ids,
            ..Default::default()
        }
    }

    pub fn is_expanded(&self, id: &CardId) -> bool {
        self.expanded_card_ids.contains(id)
    }

    pub fn is_deleted(&self, id: &CardId) -> bool {
        self.deleted_cards.iter().any(|deleted| &deleted.id == id)
    }

    /// Fill the visible list from fetched items, skipping deleted ones.
    ///
    /// Only runs while the visible list is empty; returns whether it ran.
    pub fn populate(&mut self, items: &[ListItem]) -> bool {
        if !self.visible_cards.is_empty() {
            return false;
        }
        self.visible_cards = items
            .iter()
            .filter(|item| !self.is_deleted(&item.id))
            .cloned()
            .collect();
        log::debug!(
            "[BOARD] Populated {} of {} fetched cards",
            self.visible_cards.len(),
            items.len()
        );
        true
    }

    /// Drop the visible list so the next fetch repopulates it
    pub fn clear_visible(&mut self) {
        self.visible_cards.clear();
    }

    /// Move a visible card to the deleted list and forget its expansion
    pub fn delete_card(&mut self, id: &CardId, persistence: &BoardPersistence) {
        if let Some(card) = self.visible_cards.iter().find(|card| &card.id == id) {
            self.deleted_cards.push(DeletedListItem::from(card));
            persistence.save_deleted(&self.deleted_cards);
            log::debug!("[BOARD] Deleted card {}", id);
        }

        self.visible_cards.retain(|card| &card.id != id);
        self.expanded_card_ids.retain(|expanded| expanded != id);
        persistence.save_expanded(&self.expanded_card_ids);
    }

    pub fn toggle_card_expand(&mut self, id: &CardId, persistence: &BoardPersistence) {
        if self.is_expanded(id) {
            self.expanded_card_ids.retain(|expanded| expanded != id);
        } else {
            self.expanded_card_ids.push(id.clone());
        }
        persistence.save_expanded(&self.expanded_card_ids);
    }

    pub fn toggle_show_deleted(&mut self) {
        self.show_deleted_cards = !self.show_deleted_cards;
    }
}

/// Type alias for the board store
pub type BoardStore = Store<BoardState>;
