//! Startup errors.

use crate::fixture::FixtureError;
use crate::join::JoinError;

/// Anything that prevents the catalog from being built at startup.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("fixture error: {0}")]
    Fixture(#[from] FixtureError),

    #[error("join error: {0}")]
    Join(#[from] JoinError),
}
