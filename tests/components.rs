//! Mounted component tests (run with `wasm-pack test --headless --firefox`)

#![cfg(target_arch = "wasm32")]

use std::sync::Arc;

use card_list_ui::components::Card;
use card_list_ui::models::CardId;
use card_list_ui::storage::{KeyValueStore, MemoryStorage, SharedStore};
use card_list_ui::{App, AppConfig};
use gloo_timers::future::TimeoutFuture;
use leptos::mount::mount_to;
use leptos::prelude::*;
use leptos::task::Executor;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;

wasm_bindgen_test_configure!(run_in_browser);

fn host() -> HtmlElement {
    let _ = Executor::init_wasm_bindgen();
    let document = web_sys::window().unwrap().document().unwrap();
    let host: HtmlElement = document.create_element("div").unwrap().dyn_into().unwrap();
    document.body().unwrap().append_child(&host).unwrap();
    host
}

/// Serve a JSON body without a server
fn data_url(json: &str) -> String {
    format!("data:application/json,{}", String::from(js_sys::encode_uri_component(json)))
}

async fn wait_for(what: &str, mut check: impl FnMut() -> bool) {
    for _ in 0..200 {
        if check() {
            return;
        }
        TimeoutFuture::new(10).await;
    }
    panic!("timed out waiting for {}", what);
}

fn count(host: &HtmlElement, selector: &str) -> u32 {
    host.query_selector_all(selector).unwrap().length()
}

fn texts(host: &HtmlElement, selector: &str) -> Vec<String> {
    let nodes = host.query_selector_all(selector).unwrap();
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .map(|node| node.text_content().unwrap_or_default().trim().to_string())
        .collect()
}

fn click(host: &HtmlElement, selector: &str) {
    let element: HtmlElement = host.query_selector(selector).unwrap().unwrap().dyn_into().unwrap();
    element.click();
}

fn click_button(host: &HtmlElement, label: &str) {
    let buttons = host.query_selector_all(".panel-btn").unwrap();
    let button = (0..buttons.length())
        .filter_map(|i| buttons.item(i))
        .find(|node| node.text_content().unwrap_or_default().trim() == label)
        .unwrap();
    button.dyn_into::<HtmlElement>().unwrap().click();
}

/// Mount the whole app; it stays mounted until the page goes away
fn mount_app(host: &HtmlElement, store: Arc<MemoryStorage>, payload: &str) {
    let config = AppConfig::default().with_data_url(data_url(payload));
    let store: SharedStore = store;
    let handle = mount_to(host.clone(), move || view! { <App config=config store=store /> });
    std::mem::forget(handle);
}

const TWO_CARDS: &str = r#"[
    {"id": 1, "title": "A", "description": "about a"},
    {"id": 2, "title": "B", "description": "about b"}
]"#;

#[wasm_bindgen_test]
async fn card_follows_expansion_and_reports_its_id() {
    let host = host();
    let expanded = RwSignal::new(false);
    let deleted = RwSignal::new(None::<CardId>);
    let toggles = RwSignal::new(0u32);

    let _handle = mount_to(host.clone(), move || {
        view! {
            <Card
                id=CardId::from("c-7")
                title="Seven".to_string()
                description="Details".to_string()
                is_expanded=expanded
                on_toggle_expand=move |_: ()| toggles.update(|n| *n += 1)
                on_delete=move |id: CardId| deleted.set(Some(id))
            />
        }
    });

    assert_eq!(texts(&host, ".card-title"), vec!["Seven"]);
    assert_eq!(texts(&host, ".card-description"), vec![""]);
    assert_eq!(count(&host, ".chevron-down"), 1);
    assert_eq!(count(&host, ".chevron-up"), 0);

    // The card only reports the click; expansion is the parent's call
    click(&host, ".expand-btn");
    assert_eq!(toggles.get_untracked(), 1);
    assert_eq!(texts(&host, ".card-description"), vec![""]);

    expanded.set(true);
    wait_for("expanded card", || count(&host, ".chevron-up") == 1).await;
    assert_eq!(count(&host, ".chevron-down"), 0);
    assert_eq!(texts(&host, ".card-description"), vec!["Details"]);

    click(&host, ".delete-btn");
    assert_eq!(deleted.get_untracked(), Some(CardId::from("c-7")));
}

#[wasm_bindgen_test]
async fn list_fills_from_fetch_minus_stored_deletions() {
    let host = host();
    let store = Arc::new(MemoryStorage::new());
    store.set("deletedCards", r#"[{"id":1,"title":"A"}]"#).unwrap();

    mount_app(
        &host,
        store,
        r#"[{"id":1,"title":"A"},{"id":2,"title":"B"},{"id":2.5,"title":"C"}]"#,
    );
    assert_eq!(count(&host, ".spinner"), 1);
    assert_eq!(count(&host, ".card"), 0);

    wait_for("visible cards", || count(&host, ".card-header") == 2).await;
    assert_eq!(count(&host, ".spinner"), 0);
    assert_eq!(texts(&host, ".card-header .card-title"), vec!["B", "C"]);
    assert_eq!(
        texts(&host, ".column-heading"),
        vec!["My Awesome List (2)", "Deleted Cards (1)"]
    );
}

#[wasm_bindgen_test]
async fn delete_expand_and_refresh() {
    let host = host();
    let store = Arc::new(MemoryStorage::new());
    mount_app(&host, store.clone(), TWO_CARDS);
    wait_for("visible cards", || count(&host, ".card-header") == 2).await;

    click(&host, ".card .delete-btn");
    assert_eq!(store.get("deletedCards").as_deref(), Some(r#"[{"id":1,"title":"A"}]"#));
    wait_for("card removed", || count(&host, ".card-header") == 1).await;
    assert_eq!(texts(&host, ".card-header .card-title"), vec!["B"]);

    click(&host, ".card .expand-btn");
    assert_eq!(store.get("expandedCardIds").as_deref(), Some("[2]"));
    wait_for("description shown", || texts(&host, ".card-description") == vec!["about b"]).await;

    // Refresh drops the rendered list and rebuilds it from a new request
    let before = host.query_selector(".card-header").unwrap().unwrap();
    click_button(&host, "Refresh");
    wait_for("refetched list", || {
        !before.is_connected() && count(&host, ".card-header") == 1
    })
    .await;
    assert_eq!(texts(&host, ".card-header .card-title"), vec!["B"]);
    assert_eq!(texts(&host, ".card-description"), vec!["about b"]);
    assert_eq!(store.get("deletedCards").as_deref(), Some(r#"[{"id":1,"title":"A"}]"#));
}

#[wasm_bindgen_test]
async fn reveal_and_hide_deleted_panel() {
    let host = host();
    let store = Arc::new(MemoryStorage::new());
    store.set("deletedCards", r#"[{"id":1,"title":"A"}]"#).unwrap();
    mount_app(&host, store.clone(), TWO_CARDS);
    wait_for("visible cards", || count(&host, ".card-header") == 1).await;
    assert_eq!(count(&host, ".deleted-card"), 0);

    click_button(&host, "Reveal");
    wait_for("deleted panel", || count(&host, ".deleted-card") == 1).await;
    assert_eq!(texts(&host, ".deleted-card"), vec!["A"]);

    click_button(&host, "Hide");
    wait_for("panel hidden", || count(&host, ".deleted-card") == 0).await;
    assert_eq!(count(&host, ".card-header"), 1);
    assert_eq!(store.get("deletedCards").as_deref(), Some(r#"[{"id":1,"title":"A"}]"#));
}

#[wasm_bindgen_test]
async fn failed_fetch_shows_error_line() {
    let host = host();
    mount_app(&host, Arc::new(MemoryStorage::new()), "not json");

    wait_for("error line", || count(&host, ".load-error") == 1).await;
    assert_eq!(count(&host, ".spinner"), 0);
    assert_eq!(count(&host, ".card-header"), 0);
}
