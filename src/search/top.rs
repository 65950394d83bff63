use derive_builder::Builder;

use crate::{
    error::Result,
    filters::{AgeRating, AnimeType, MangaType, MediaKind, TopAnimeFilter, TopList, TopMangaFilter},
    query::{self, QueryBuilder, SearchConfig},
    wire::WireEnum,
};

/// Options for `GET /top/anime`.
///
/// Unlike [`AnimeSearchConfig`](super::AnimeSearchConfig), `sfw` is off by default
/// here.
///
/// # Examples
///
/// ```rust
/// use shiori::prelude::*;
///
/// let config = TopAnimeConfigBuilder::default()
///     .anime_type(AnimeType::Movie)
///     .filter(TopAnimeFilter::ByPopularity)
///     .limit(5)
///     .build()
///     .unwrap();
///
/// assert_eq!(
///     config.endpoint().unwrap(),
///     "/top/anime?type=movie&filter=bypopularity&limit=5"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Builder)]
#[builder(default, build_fn(error = "crate::error::Error"))]
pub struct TopAnimeConfig {
    /// Media type, sent as `type`.
    #[builder(setter(strip_option))]
    pub anime_type: Option<AnimeType>,

    /// Ranking filter.
    #[builder(setter(strip_option))]
    pub filter: Option<TopAnimeFilter>,

    /// Age rating.
    #[builder(setter(strip_option))]
    pub rating: Option<AgeRating>,

    /// Page number, starting at 1.
    #[builder(setter(strip_option))]
    pub page: Option<u32>,

    /// Results per page, at most [`MAX_PAGE_SIZE`](crate::query::MAX_PAGE_SIZE).
    #[builder(setter(strip_option))]
    pub limit: Option<u32>,

    /// Filter out adult entries.
    pub sfw: bool,
}

impl SearchConfig for TopAnimeConfig {
    fn path(&self) -> String {
        "/top/anime".to_string()
    }

    fn validate(&self) -> Result<()> {
        query::validate_paging(self.page, self.limit)
    }

    fn compose(&self) -> QueryBuilder {
        QueryBuilder::new()
            .enumerated("type", self.anime_type)
            .enumerated("filter", self.filter)
            .enumerated("rating", self.rating)
            .scalar("page", self.page)
            .scalar("limit", self.limit)
            .flag("sfw", self.sfw)
    }
}

/// Options for `GET /top/manga`.
#[derive(Debug, Clone, Default, PartialEq, Builder)]
#[builder(default, build_fn(error = "crate::error::Error"))]
pub struct TopMangaConfig {
    /// Media type, sent as `type`.
    #[builder(setter(strip_option))]
    pub manga_type: Option<MangaType>,

    /// Ranking filter.
    #[builder(setter(strip_option))]
    pub filter: Option<TopMangaFilter>,

    /// Page number, starting at 1.
    #[builder(setter(strip_option))]
    pub page: Option<u32>,

    /// Results per page, at most [`MAX_PAGE_SIZE`](crate::query::MAX_PAGE_SIZE).
    #[builder(setter(strip_option))]
    pub limit: Option<u32>,
}

impl SearchConfig for TopMangaConfig {
    fn path(&self) -> String {
        "/top/manga".to_string()
    }

    fn validate(&self) -> Result<()> {
        query::validate_paging(self.page, self.limit)
    }

    fn compose(&self) -> QueryBuilder {
        QueryBuilder::new()
            .enumerated("type", self.manga_type)
            .enumerated("filter", self.filter)
            .scalar("page", self.page)
            .scalar("limit", self.limit)
    }
}

/// Options for `GET /top/characters` and `GET /top/people`.
#[derive(Debug, Clone, Default, PartialEq, Builder)]
#[builder(default, build_fn(error = "crate::error::Error"))]
pub struct TopListConfig {
    /// Characters or people.
    pub list: TopList,

    /// Page number, starting at 1.
    #[builder(setter(strip_option))]
    pub page: Option<u32>,

    /// Results per page, at most [`MAX_PAGE_SIZE`](crate::query::MAX_PAGE_SIZE).
    #[builder(setter(strip_option))]
    pub limit: Option<u32>,
}

impl SearchConfig for TopListConfig {
    fn path(&self) -> String {
        format!("/top/{}", self.list.wire())
    }

    fn validate(&self) -> Result<()> {
        query::validate_paging(self.page, self.limit)
    }

    fn compose(&self) -> QueryBuilder {
        QueryBuilder::new()
            .scalar("page", self.page)
            .scalar("limit", self.limit)
    }
}

/// Options for `GET /top/reviews`.
#[derive(Debug, Clone, Default, PartialEq, Builder)]
#[builder(default, build_fn(error = "crate::error::Error"))]
pub struct TopReviewsConfig {
    /// Restrict reviews to one catalogue.
    #[builder(setter(strip_option))]
    pub kind: Option<MediaKind>,

    /// Page number, starting at 1.
    #[builder(setter(strip_option))]
    pub page: Option<u32>,

    /// Results per page, at most [`MAX_PAGE_SIZE`](crate::query::MAX_PAGE_SIZE).
    #[builder(setter(strip_option))]
    pub limit: Option<u32>,

    /// Include reviews written before the reviewer finished the title.
    pub preliminary: bool,

    /// Include reviews flagged as containing spoilers.
    pub spoilers: bool,
}

impl SearchConfig for TopReviewsConfig {
    fn path(&self) -> String {
        "/top/reviews".to_string()
    }

    fn validate(&self) -> Result<()> {
        query::validate_paging(self.page, self.limit)
    }

    fn compose(&self) -> QueryBuilder {
        QueryBuilder::new()
            .enumerated("type", self.kind)
            .scalar("page", self.page)
            .scalar("limit", self.limit)
            .flag("preliminary", self.preliminary)
            .flag("spoilers", self.spoilers)
    }
}
