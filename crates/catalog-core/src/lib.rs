//! catalog-core: Product catalog models, data join, and view pipeline.
//!
//! Three fixed relations (users, categories, products) are joined once at
//! load into [`EnrichedProduct`] records. Every render then derives the
//! visible rows from that immutable list through [`derive_view`]:
//! filter (query, user, categories) → stable sort → optional reversal.

#[cfg(feature = "native")]
uniffi::setup_scaffolding!();

pub mod model;
pub mod fixture;
pub mod join;
pub mod collation;
pub mod filter;
pub mod sort;
pub mod view;
pub mod state;
pub mod error;

pub use model::*;
pub use fixture::*;
pub use join::*;
pub use collation::*;
pub use filter::*;
pub use sort::*;
pub use view::*;
pub use state::*;
pub use error::*;
