//! Search configs, one per API resource.
//!
//! Each config is a plain struct with public optional fields, so it can be built
//! with struct-update syntax, or through its generated `…Builder` when a fluent
//! chain reads better. Both routes end in the same value, and every config turns
//! into a canonical query string through [`SearchConfig`](crate::query::SearchConfig).
//!
//! | Config | Path |
//! |--------|------|
//! | [`AnimeSearchConfig`] | `/anime` |
//! | [`MangaSearchConfig`] | `/manga` |
//! | [`CharacterSearchConfig`] | `/characters` |
//! | [`PersonSearchConfig`] | `/people` |
//! | [`UserSearchConfig`] | `/users` |
//! | [`ClubSearchConfig`] | `/clubs` |
//! | [`ProducerSearchConfig`] | `/producers` |
//! | [`MagazineSearchConfig`] | `/magazines` |
//! | [`GenreListConfig`] | `/genres/{anime,manga}` |
//! | [`TopAnimeConfig`] | `/top/anime` |
//! | [`TopMangaConfig`] | `/top/manga` |
//! | [`TopListConfig`] | `/top/{characters,people}` |
//! | [`TopReviewsConfig`] | `/top/reviews` |
//! | [`SeasonConfig`] | `/seasons/...` |
//! | [`ScheduleConfig`] | `/schedules` |
//!
//! # Examples
//!
//! ```rust
//! use shiori::prelude::*;
//!
//! let config = AnimeSearchConfig {
//!     page: Some(2),
//!     limit: Some(25),
//!     ..Default::default()
//! };
//!
//! assert_eq!(config.to_query().unwrap(), "page=2&limit=25&sfw");
//!
//! let invalid = AnimeSearchConfig {
//!     page: Some(0),
//!     ..Default::default()
//! };
//!
//! assert_eq!(invalid.to_query().unwrap_err().field(), Some("page"));
//! ```

mod anime;
mod catalog;
mod community;
mod manga;
mod people;
mod season;
mod top;

pub use anime::{AnimeSearchConfig, AnimeSearchConfigBuilder};
pub use catalog::{
    GenreListConfig, GenreListConfigBuilder, MagazineSearchConfig, MagazineSearchConfigBuilder,
    ProducerSearchConfig, ProducerSearchConfigBuilder,
};
pub use community::{
    ClubSearchConfig, ClubSearchConfigBuilder, UserSearchConfig, UserSearchConfigBuilder,
};
pub use manga::{MangaSearchConfig, MangaSearchConfigBuilder};
pub use people::{
    CharacterSearchConfig, CharacterSearchConfigBuilder, PersonSearchConfig,
    PersonSearchConfigBuilder,
};
pub use season::{ScheduleConfig, ScheduleConfigBuilder, SeasonConfig, SeasonConfigBuilder, SeasonSelector};
pub use top::{
    TopAnimeConfig, TopAnimeConfigBuilder, TopListConfig, TopListConfigBuilder, TopMangaConfig,
    TopMangaConfigBuilder, TopReviewsConfig, TopReviewsConfigBuilder,
};
