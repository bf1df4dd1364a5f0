//! UI Components
//!
//! Leptos components for the card list.

mod buttons;
mod card;
mod deleted_panel;
mod entrypoint;
mod icons;
mod spinner;

pub use buttons::{DeleteButton, ExpandButton, PanelButton};
pub use card::Card;
pub use deleted_panel::DeletedCardsPanel;
pub use entrypoint::Entrypoint;
pub use icons::{ChevronDownIcon, ChevronUpIcon, TrashIcon};
pub use spinner::Spinner;
