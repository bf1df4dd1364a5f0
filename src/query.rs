//! List Query
//!
//! Reactive handle over the list endpoint: loading flag, data, error and a
//! refetch trigger.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::error::FetchError;
use crate::models::ListItem;

/// Signals exposed by the list query
#[derive(Clone, Copy)]
pub struct ListQuery {
    /// True from the start of a request until it settles
    pub is_loading: ReadSignal<bool>,
    /// Items of the last successful request; `None` while loading or after a failure
    pub data: ReadSignal<Option<Vec<ListItem>>>,
    /// Message of the last failed request
    pub error: ReadSignal<Option<String>>,
    /// Bumped to start a new request
    set_fetch_trigger: WriteSignal<u32>,
}

impl ListQuery {
    /// Start a new request; a response still in flight is discarded
    pub fn refetch(&self) {
        self.set_fetch_trigger.update(|v| *v += 1);
    }
}

/// What a finished request does to the query signals
#[derive(Debug, PartialEq)]
pub enum Settled {
    /// A newer request was started meanwhile; leave the signals alone
    Stale,
    Loaded(Vec<ListItem>),
    Failed(String),
}

/// Decide the outcome of request `generation` given the `latest` trigger value
pub fn settle(
    generation: u32,
    latest: u32,
    result: Result<Vec<ListItem>, FetchError>,
) -> Settled {
    if generation != latest {
        return Settled::Stale;
    }
    match result {
        Ok(items) => Settled::Loaded(items),
        Err(e) => Settled::Failed(e.to_string()),
    }
}

/// Fetch `url` on mount and whenever `refetch` is called
pub fn use_list_query(url: String) -> ListQuery {
    let (is_loading, set_is_loading) = signal(true);
    let (data, set_data) = signal(None::<Vec<ListItem>>);
    let (error, set_error) = signal(None::<String>);
    let (fetch_trigger, set_fetch_trigger) = signal(0u32);

    Effect::new(move |_| {
        let generation = fetch_trigger.get();
        let url = url.clone();
        set_is_loading.set(true);
        set_data.set(None);
        set_error.set(None);
        log::debug!("[QUERY] Fetching {} (request {})", url, generation);

        spawn_local(async move {
            let result = api::fetch_list_items(&url).await;
            match settle(generation, fetch_trigger.get_untracked(), result) {
                Settled::Stale => {
                    log::debug!("[QUERY] Discarding stale response for request {}", generation);
                    return;
                }
                Settled::Loaded(items) => {
                    log::debug!("[QUERY] Loaded {} items", items.len());
                    set_data.set(Some(items));
                }
                Settled::Failed(message) => {
                    log::error!("[QUERY] Loading {} failed: {}", url, message);
                    set_error.set(Some(message));
                }
            }
            set_is_loading.set(false);
        });
    });

    ListQuery {
        is_loading,
        data,
        error,
        set_fetch_trigger,
    }
}
