//! Buttons
//!
//! Styled buttons shared by the card and the deleted-cards column.

use leptos::prelude::*;

use super::icons::TrashIcon;

/// Icon button that toggles a card's description
#[component]
pub fn ExpandButton(
    #[prop(into)] on_click: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <button class="icon-btn expand-btn" title="Toggle description" on:click=move |_| on_click.run(())>
            {children()}
        </button>
    }
}

#[component]
pub fn DeleteButton(#[prop(into)] on_click: Callback<()>) -> impl IntoView {
    view! {
        <button class="icon-btn delete-btn" title="Delete" on:click=move |_| on_click.run(())>
            <TrashIcon />
        </button>
    }
}

/// Dark text button used in column toolbars ("Reveal", "Refresh")
#[component]
pub fn PanelButton(
    #[prop(into)] on_click: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <button class="panel-btn" on:click=move |_| on_click.run(())>
            {children()}
        </button>
    }
}
