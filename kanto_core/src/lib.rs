#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub mod display;
pub mod error;
pub mod filter;

pub use display::{CATEGORIES, capitalize, format_id};
pub use error::LoadError;
pub use filter::{FilterState, apply};

/// One normalized catalog record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Entity {
    pub id: u32,
    pub name: String,
    /// Category tags in source order. Never empty once loaded.
    pub types: Vec<String>,
    pub image: Option<String>,
}

impl Entity {
    #[must_use]
    pub fn has_type(&self, category: &str) -> bool {
        self.types.iter().any(|t| t == category)
    }
}

/// Anything that can produce the full entity collection in one shot.
///
/// Implementations either return every entity or fail as a whole; a
/// partially assembled collection is never handed back.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn load(&self) -> Result<Vec<Entity>, LoadError>;
}
