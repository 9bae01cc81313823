//! catalog-table: the product table widget.
//!
//! [`App`] owns the joined catalog and the [`TableState`](catalog_core::TableState),
//! applies [`Action`]s one at a time and renders the whole page to HTML.

pub mod action;
pub mod app;
pub mod config;
pub mod error;
pub mod hooks;
pub mod render;

pub use action::{Action, CommandError};
pub use app::App;
pub use config::{load_config, ConfigError, TableConfig};
pub use error::AppError;
pub use render::{PageRenderer, RenderError};
