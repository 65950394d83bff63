//! # Shiori - Typed search configs and client for the Jikan API
//!
//! Shiori turns strongly typed search options for the unofficial MyAnimeList API
//! ([Jikan](https://jikan.moe)) into canonical query strings, and sends them through
//! a rate-limited HTTP client. Invalid options are caught before a request is ever
//! made.
//!
//! ## Features
//!
//! - **Closed Filter Enums**: Every filter value maps to exactly one wire string
//! - **Guarded Configs**: Page, limit, score, letter and range checks run before dispatch
//! - **Canonical Queries**: Same config, same query string, in a fixed parameter order
//! - **Builder Pattern**: Every config has a `derive_builder` builder next to its plain struct
//! - **Async Client**: Built on tokio and reqwest, with request pacing and status classification
//!
//! ## Quick Start
//!
//! ### Building a Query
//!
//! ```rust
//! use shiori::prelude::*;
//!
//! let config = AnimeSearchConfigBuilder::default()
//!     .q("Lupin")
//!     .anime_type(AnimeType::Tv)
//!     .order_by(AnimeOrderBy::Score)
//!     .sort(SortDirection::Descending)
//!     .limit(10)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(
//!     config.endpoint().unwrap(),
//!     "/anime?limit=10&q=Lupin&type=tv&order_by=score&sort=desc&sfw"
//! );
//! ```
//!
//! ### Sending It
//!
//! ```rust,no_run
//! use shiori::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = JikanClient::from_env()?;
//!
//!     let config = CharacterSearchConfig {
//!         q: Some("Lupin".to_string()),
//!         ..Default::default()
//!     };
//!
//!     let page: JikanPage<serde_json::Value> = client.search_characters(&config).await?;
//!     println!("Found {} characters", page.data.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`guard`]: Reusable precondition checks that produce validation errors
//! - [`wire`]: The [`WireEnum`] trait and its declaration macro
//! - [`filters`]: Every filter enum and its wire table
//! - [`query`]: Query string composition and the [`SearchConfig`] trait
//! - [`search`]: One config per API resource
//! - [`net`]: HTTP dispatcher, rate limiting and client configuration
//! - [`client`]: [`JikanClient`], which validates and then dispatches
//! - [`types`]: Response envelopes
//! - [`error`]: Error handling

pub mod client;
pub mod error;
pub mod filters;
pub mod guard;
pub mod net;
pub mod query;
pub mod search;
pub mod types;
pub mod wire;

/// Prelude module for convenient imports.
///
/// Re-exports the client, every config and builder, every filter enum, the
/// [`SearchConfig`] and [`WireEnum`] traits, the response envelopes and the error
/// types, so `use shiori::prelude::*;` is enough for most callers.
pub mod prelude {
    pub use crate::{
        client::JikanClient,
        error::{Error, Result},
        filters::*,
        net::{ClientConfig, ClientConfigBuilder, Dispatcher, HttpClient},
        query::SearchConfig,
        search::*,
        types::{JikanPage, JikanResponse, MalEntry, Pagination, PaginationItems},
        wire::{WireEnum, description_of},
    };
}

// Re-export main types at crate root for direct access
pub use client::JikanClient;
pub use error::{Error, Result};
pub use query::{QueryBuilder, SearchConfig};
pub use types::{JikanPage, JikanResponse};
pub use wire::{WireEnum, description_of};
