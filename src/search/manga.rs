use chrono::NaiveDate;
use derive_builder::Builder;

use crate::{
    error::Result,
    filters::{MangaGenre, MangaOrderBy, MangaStatus, MangaType, SortDirection},
    guard,
    query::{self, QueryBuilder, SearchConfig},
};

/// Options for `GET /manga`.
///
/// Mirrors [`AnimeSearchConfig`](super::AnimeSearchConfig) with manga-specific
/// types, statuses and sort keys, and filters by magazine instead of producer.
///
/// # Examples
///
/// ```rust
/// use shiori::prelude::*;
///
/// let config = MangaSearchConfig {
///     manga_type: Some(MangaType::LightNovel),
///     status: Some(MangaStatus::Publishing),
///     sfw: false,
///     ..Default::default()
/// };
///
/// assert_eq!(config.to_query().unwrap(), "type=lightnovel&status=publishing");
/// ```
#[derive(Debug, Clone, PartialEq, Builder)]
#[builder(default, build_fn(error = "crate::error::Error"))]
pub struct MangaSearchConfig {
    /// Page number, starting at 1.
    #[builder(setter(strip_option))]
    pub page: Option<u32>,

    /// Results per page, at most [`MAX_PAGE_SIZE`](crate::query::MAX_PAGE_SIZE).
    #[builder(setter(strip_option))]
    pub limit: Option<u32>,

    /// Free-text title search.
    #[builder(setter(into, strip_option))]
    pub q: Option<String>,

    /// Media type, sent as `type`.
    #[builder(setter(strip_option))]
    pub manga_type: Option<MangaType>,

    /// Exact score.
    #[builder(setter(strip_option))]
    pub score: Option<f64>,

    /// Lowest score, inclusive.
    #[builder(setter(strip_option))]
    pub min_score: Option<f64>,

    /// Highest score, inclusive.
    #[builder(setter(strip_option))]
    pub max_score: Option<f64>,

    /// Publishing status.
    #[builder(setter(strip_option))]
    pub status: Option<MangaStatus>,

    /// Genres that must all be present.
    #[builder(setter(each(name = "genre")))]
    pub genres: Vec<MangaGenre>,

    /// Genres that must not be present.
    #[builder(setter(each(name = "exclude_genre")))]
    pub genres_exclude: Vec<MangaGenre>,

    /// Sort key. `sort` is only sent together with it.
    #[builder(setter(strip_option))]
    pub order_by: Option<MangaOrderBy>,

    /// Direction applied to `order_by`.
    pub sort: SortDirection,

    /// Only entries whose name starts with this letter.
    #[builder(setter(strip_option))]
    pub letter: Option<char>,

    /// Magazine IDs.
    #[builder(setter(each(name = "magazine")))]
    pub magazines: Vec<u32>,

    /// Started on or after this date.
    #[builder(setter(strip_option))]
    pub start_date: Option<NaiveDate>,

    /// Ended on or before this date.
    #[builder(setter(strip_option))]
    pub end_date: Option<NaiveDate>,

    /// Filter out adult entries.
    pub sfw: bool,

    /// Include entries not yet approved by MyAnimeList moderators.
    pub unapproved: bool,
}

impl Default for MangaSearchConfig {
    fn default() -> Self {
        Self {
            page: None,
            limit: None,
            q: None,
            manga_type: None,
            score: None,
            min_score: None,
            max_score: None,
            status: None,
            genres: Vec::new(),
            genres_exclude: Vec::new(),
            order_by: None,
            sort: SortDirection::default(),
            letter: None,
            magazines: Vec::new(),
            start_date: None,
            end_date: None,
            sfw: true,
            unapproved: false,
        }
    }
}

impl SearchConfig for MangaSearchConfig {
    fn path(&self) -> String {
        "/manga".to_string()
    }

    fn validate(&self) -> Result<()> {
        query::validate_paging(self.page, self.limit)?;
        query::validate_text(self.q.as_deref(), "q")?;
        query::validate_score(self.score, "score")?;
        query::validate_score(self.min_score, "min_score")?;
        query::validate_score(self.max_score, "max_score")?;
        guard::ensure_ordered(self.min_score, self.max_score, "min_score")?;
        query::validate_letter(self.letter)?;
        query::validate_ids(&self.magazines, "magazines")?;
        guard::ensure_ordered(self.start_date, self.end_date, "start_date")?;
        Ok(())
    }

    fn compose(&self) -> QueryBuilder {
        QueryBuilder::new()
            .scalar("page", self.page)
            .scalar("limit", self.limit)
            .text("q", self.q.as_deref())
            .enumerated("type", self.manga_type)
            .scalar("score", self.score)
            .scalar("min_score", self.min_score)
            .scalar("max_score", self.max_score)
            .enumerated("status", self.status)
            .list("genres", &self.genres)
            .list("genres_exclude", &self.genres_exclude)
            .sort(self.order_by, self.sort)
            .letter("letter", self.letter)
            .ids("magazines", &self.magazines)
            .date("start_date", self.start_date)
            .date("end_date", self.end_date)
            .flag("sfw", self.sfw)
            .flag("unapproved", self.unapproved)
    }
}
