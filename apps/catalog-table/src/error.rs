//! Application-level errors.

use catalog_core::CatalogError;

use crate::action::CommandError;
use crate::config::ConfigError;
use crate::render::RenderError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("command error: {0}")]
    Command(#[from] CommandError),

    #[error("render error: {0}")]
    Render(#[from] RenderError),
}
