//! Card List Frontend
//!
//! Two-column card list with soft delete and expandable descriptions,
//! remembered across reloads through `localStorage`.

pub mod api;
pub mod app;
pub mod board;
pub mod components;
pub mod config;
pub mod error;
pub mod models;
pub mod query;
pub mod storage;

pub use app::App;
pub use config::AppConfig;
