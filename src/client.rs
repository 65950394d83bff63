//! High-level client for the Jikan API.
//!
//! [`JikanClient`] pairs the search configs with a [`Dispatcher`]. Every config is
//! validated before anything is sent, so an invalid config costs zero requests, and
//! a valid one costs exactly one.
//!
//! Response item types are chosen by the caller. Each helper returns the matching
//! envelope from [`types`](crate::types).
//!
//! # Examples
//!
//! ```rust
//! use shiori::prelude::*;
//!
//! # async fn example() -> Result<()> {
//! let client = JikanClient::new();
//!
//! let config = AnimeSearchConfig {
//!     q: Some("Cowboy Bebop".to_string()),
//!     limit: Some(5),
//!     ..Default::default()
//! };
//!
//! let page: JikanPage<serde_json::Value> = client.search_anime(&config).await?;
//! for entry in &page.data {
//!     println!("{}", entry["title"]);
//! }
//! # Ok(())
//! # }
//! ```

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{
    error::Result,
    guard,
    net::{ClientConfig, Dispatcher, HttpClient},
    query::SearchConfig,
    search::{
        AnimeSearchConfig, CharacterSearchConfig, ClubSearchConfig, GenreListConfig,
        MagazineSearchConfig, MangaSearchConfig, PersonSearchConfig, ProducerSearchConfig,
        ScheduleConfig, SeasonConfig, TopAnimeConfig, TopListConfig, TopMangaConfig,
        TopReviewsConfig, UserSearchConfig,
    },
    types::{JikanPage, JikanResponse},
};

/// Client for the Jikan REST API.
///
/// Generic over its [`Dispatcher`] so tests can swap the network out. Cloning is
/// cheap and clones share the same rate limiter.
#[derive(Debug, Clone)]
pub struct JikanClient<D = HttpClient> {
    dispatcher: D,
}

impl JikanClient<HttpClient> {
    /// Creates a client for the public API with default settings.
    pub fn new() -> Self {
        Self::with_dispatcher(HttpClient::new())
    }

    /// Creates a client from explicit settings. Fails when `config.base_url` is not an http(s) URL.
    pub fn with_config(config: &ClientConfig) -> Result<Self> {
        Ok(Self::with_dispatcher(HttpClient::with_config(config)?))
    }

    /// Creates a client configured from `SHIORI_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::with_config(&ClientConfig::from_env()?)
    }
}

impl Default for JikanClient<HttpClient> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Dispatcher> JikanClient<D> {
    /// Wraps any [`Dispatcher`], such as a recording one in tests.
    pub fn with_dispatcher(dispatcher: D) -> Self {
        Self { dispatcher }
    }

    /// The dispatcher requests go through.
    pub fn dispatcher(&self) -> &D {
        &self.dispatcher
    }

    /// Fetches an endpoint and decodes the body.
    pub async fn get_json<T>(&self, endpoint: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let bytes = self.dispatcher.fetch(endpoint).await?;
        serde_json::from_slice(&bytes).map_err(Into::into)
    }

    /// Validates `config`, then sends it.
    ///
    /// # Errors
    ///
    /// * [`Error::Validation`](crate::Error::Validation) - Before any request is made
    /// * Any error of the dispatcher, and [`Error::Json`](crate::Error::Json) when
    ///   the body does not decode into `T`
    pub async fn search<C, T>(&self, config: &C) -> Result<T>
    where
        C: SearchConfig + ?Sized,
        T: DeserializeOwned,
    {
        let endpoint = config.endpoint()?;
        debug!(%endpoint, "search validated");
        self.get_json(&endpoint).await
    }

    /// `GET /anime`.
    pub async fn search_anime<T>(&self, config: &AnimeSearchConfig) -> Result<JikanPage<T>>
    where
        T: DeserializeOwned,
    {
        self.search(config).await
    }

    /// `GET /manga`.
    pub async fn search_manga<T>(&self, config: &MangaSearchConfig) -> Result<JikanPage<T>>
    where
        T: DeserializeOwned,
    {
        self.search(config).await
    }

    /// `GET /characters`.
    pub async fn search_characters<T>(
        &self,
        config: &CharacterSearchConfig,
    ) -> Result<JikanPage<T>>
    where
        T: DeserializeOwned,
    {
        self.search(config).await
    }

    /// `GET /people`.
    pub async fn search_people<T>(&self, config: &PersonSearchConfig) -> Result<JikanPage<T>>
    where
        T: DeserializeOwned,
    {
        self.search(config).await
    }

    /// `GET /users`.
    pub async fn search_users<T>(&self, config: &UserSearchConfig) -> Result<JikanPage<T>>
    where
        T: DeserializeOwned,
    {
        self.search(config).await
    }

    /// `GET /clubs`.
    pub async fn search_clubs<T>(&self, config: &ClubSearchConfig) -> Result<JikanPage<T>>
    where
        T: DeserializeOwned,
    {
        self.search(config).await
    }

    /// `GET /producers`.
    pub async fn search_producers<T>(
        &self,
        config: &ProducerSearchConfig,
    ) -> Result<JikanPage<T>>
    where
        T: DeserializeOwned,
    {
        self.search(config).await
    }

    /// `GET /magazines`.
    pub async fn search_magazines<T>(
        &self,
        config: &MagazineSearchConfig,
    ) -> Result<JikanPage<T>>
    where
        T: DeserializeOwned,
    {
        self.search(config).await
    }

    /// `GET /top/anime`.
    pub async fn top_anime<T>(&self, config: &TopAnimeConfig) -> Result<JikanPage<T>>
    where
        T: DeserializeOwned,
    {
        self.search(config).await
    }

    /// `GET /top/manga`.
    pub async fn top_manga<T>(&self, config: &TopMangaConfig) -> Result<JikanPage<T>>
    where
        T: DeserializeOwned,
    {
        self.search(config).await
    }

    /// Top characters or top people, depending on `config.list`.
    pub async fn top_list<T>(&self, config: &TopListConfig) -> Result<JikanPage<T>>
    where
        T: DeserializeOwned,
    {
        self.search(config).await
    }

    /// `GET /top/reviews`.
    pub async fn top_reviews<T>(&self, config: &TopReviewsConfig) -> Result<JikanPage<T>>
    where
        T: DeserializeOwned,
    {
        self.search(config).await
    }

    /// One of the `/seasons` listings, picked by `config.selector`.
    pub async fn season<T>(&self, config: &SeasonConfig) -> Result<JikanPage<T>>
    where
        T: DeserializeOwned,
    {
        self.search(config).await
    }

    /// `GET /schedules`.
    pub async fn schedules<T>(&self, config: &ScheduleConfig) -> Result<JikanPage<T>>
    where
        T: DeserializeOwned,
    {
        self.search(config).await
    }

    /// Genre listings are not paginated.
    pub async fn genres<T>(&self, config: &GenreListConfig) -> Result<JikanResponse<Vec<T>>>
    where
        T: DeserializeOwned,
    {
        self.search(config).await
    }

    /// `GET /anime/{id}`. A missing ID surfaces as [`Error::NotFound`](crate::Error::NotFound).
    pub async fn anime_by_id<T>(&self, id: u32) -> Result<JikanResponse<T>>
    where
        T: DeserializeOwned,
    {
        self.by_id("anime", id).await
    }

    /// `GET /manga/{id}`.
    pub async fn manga_by_id<T>(&self, id: u32) -> Result<JikanResponse<T>>
    where
        T: DeserializeOwned,
    {
        self.by_id("manga", id).await
    }

    /// `GET /characters/{id}`.
    pub async fn character_by_id<T>(&self, id: u32) -> Result<JikanResponse<T>>
    where
        T: DeserializeOwned,
    {
        self.by_id("characters", id).await
    }

    /// `GET /people/{id}`.
    pub async fn person_by_id<T>(&self, id: u32) -> Result<JikanResponse<T>>
    where
        T: DeserializeOwned,
    {
        self.by_id("people", id).await
    }

    async fn by_id<T>(&self, resource: &str, id: u32) -> Result<JikanResponse<T>>
    where
        T: DeserializeOwned,
    {
        guard::ensure_positive(id, "id")?;
        self.get_json(&format!("/{}/{}", resource, id)).await
    }
}
