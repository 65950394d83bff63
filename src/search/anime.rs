use chrono::NaiveDate;
use derive_builder::Builder;

use crate::{
    error::Result,
    filters::{AgeRating, AnimeGenre, AnimeOrderBy, AnimeStatus, AnimeType, SortDirection},
    guard,
    query::{self, QueryBuilder, SearchConfig},
};

/// Options for `GET /anime`.
///
/// Every field is optional; `None` and empty lists leave the parameter out of the
/// query. `sfw` defaults to `true`, so an untouched config serializes to `sfw`.
///
/// # Examples
///
/// ```rust
/// use shiori::prelude::*;
///
/// let config = AnimeSearchConfigBuilder::default()
///     .q("Lupin")
///     .order_by(AnimeOrderBy::Favorites)
///     .sort(SortDirection::Descending)
///     .genre(AnimeGenre::Action)
///     .genre(AnimeGenre::Comedy)
///     .build()
///     .unwrap();
///
/// assert_eq!(
///     config.to_query().unwrap(),
///     "q=Lupin&genres=1,4&order_by=favorites&sort=desc&sfw"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Builder)]
#[builder(default, build_fn(error = "crate::error::Error"))]
pub struct AnimeSearchConfig {
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
    pub anime_type: Option<AnimeType>,

    /// Exact score.
    #[builder(setter(strip_option))]
    pub score: Option<f64>,

    /// Lowest score, inclusive.
    #[builder(setter(strip_option))]
    pub min_score: Option<f64>,

    /// Highest score, inclusive.
    #[builder(setter(strip_option))]
    pub max_score: Option<f64>,

    /// Airing status.
    #[builder(setter(strip_option))]
    pub status: Option<AnimeStatus>,

    /// Age rating.
    #[builder(setter(strip_option))]
    pub rating: Option<AgeRating>,

    /// Genres that must all be present.
    #[builder(setter(each(name = "genre")))]
    pub genres: Vec<AnimeGenre>,

    /// Genres that must not be present. Not cross-checked against `genres`.
    #[builder(setter(each(name = "exclude_genre")))]
    pub genres_exclude: Vec<AnimeGenre>,

    /// Sort key. `sort` is only sent together with it.
    #[builder(setter(strip_option))]
    pub order_by: Option<AnimeOrderBy>,

    /// Only sent together with `order_by`.
    pub sort: SortDirection,

    /// Titles starting with this letter.
    #[builder(setter(strip_option))]
    pub letter: Option<char>,

    /// Producer IDs.
    #[builder(setter(each(name = "producer")))]
    pub producers: Vec<u32>,

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

impl Default for AnimeSearchConfig {
    fn default() -> Self {
        Self {
            page: None,
            limit: None,
            q: None,
            anime_type: None,
            score: None,
            min_score: None,
            max_score: None,
            status: None,
            rating: None,
            genres: Vec::new(),
            genres_exclude: Vec::new(),
            order_by: None,
            sort: SortDirection::default(),
            letter: None,
            producers: Vec::new(),
            start_date: None,
            end_date: None,
            sfw: true,
            unapproved: false,
        }
    }
}

impl SearchConfig for AnimeSearchConfig {
    fn path(&self) -> String {
        "/anime".to_string()
    }

    fn validate(&self) -> Result<()> {
        query::validate_paging(self.page, self.limit)?;
        query::validate_text(self.q.as_deref(), "q")?;
        query::validate_score(self.score, "score")?;
        query::validate_score(self.min_score, "min_score")?;
        query::validate_score(self.max_score, "max_score")?;
        guard::ensure_ordered(self.min_score, self.max_score, "min_score")?;
        query::validate_letter(self.letter)?;
        query::validate_ids(&self.producers, "producers")?;
        guard::ensure_ordered(self.start_date, self.end_date, "start_date")?;
        Ok(())
    }

    fn compose(&self) -> QueryBuilder {
        QueryBuilder::new()
            .scalar("page", self.page)
            .scalar("limit", self.limit)
            .text("q", self.q.as_deref())
            .enumerated("type", self.anime_type)
            .scalar("score", self.score)
            .scalar("min_score", self.min_score)
            .scalar("max_score", self.max_score)
            .enumerated("status", self.status)
            .enumerated("rating", self.rating)
            .list("genres", &self.genres)
            .list("genres_exclude", &self.genres_exclude)
            .sort(self.order_by, self.sort)
            .letter("letter", self.letter)
            .ids("producers", &self.producers)
            .date("start_date", self.start_date)
            .date("end_date", self.end_date)
            .flag("sfw", self.sfw)
            .flag("unapproved", self.unapproved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_only_carries_sfw() {
        assert_eq!(AnimeSearchConfig::default().to_query().unwrap(), "sfw");
    }

    #[test]
    fn page_and_limit() {
        let config = AnimeSearchConfig {
            page: Some(2),
            limit: Some(25),
            ..Default::default()
        };
        assert_eq!(config.to_query().unwrap(), "page=2&limit=25&sfw");
    }

    #[test]
    fn genres_use_their_ids() {
        let config = AnimeSearchConfig {
            genres: vec![AnimeGenre::Action, AnimeGenre::Comedy],
            sfw: false,
            ..Default::default()
        };
        assert_eq!(config.to_query().unwrap(), "genres=1,4");
    }

    #[test]
    fn include_and_exclude_are_independent() {
        let config = AnimeSearchConfig {
            genres: vec![AnimeGenre::Drama],
            genres_exclude: vec![AnimeGenre::Drama, AnimeGenre::Horror],
            sfw: false,
            ..Default::default()
        };
        assert_eq!(
            config.to_query().unwrap(),
            "genres=8&genres_exclude=8,14"
        );
    }

    #[test]
    fn full_config_follows_declaration_order() {
        let config = AnimeSearchConfig {
            page: Some(1),
            limit: Some(10),
            q: Some("cowboy bebop".into()),
            anime_type: Some(AnimeType::Tv),
            min_score: Some(7.5),
            max_score: Some(10.0),
            status: Some(AnimeStatus::Complete),
            rating: Some(AgeRating::R17),
            genres: vec![AnimeGenre::SciFi],
            order_by: Some(AnimeOrderBy::Score),
            sort: SortDirection::Descending,
            producers: vec![14, 23],
            start_date: NaiveDate::from_ymd_opt(1998, 1, 1),
            end_date: NaiveDate::from_ymd_opt(1999, 12, 31),
            unapproved: true,
            ..Default::default()
        };
        assert_eq!(
            config.to_query().unwrap(),
            "page=1&limit=10&q=cowboy%20bebop&type=tv&min_score=7.5&max_score=10\
             &status=complete&rating=r17&genres=24&order_by=score&sort=desc\
             &producers=14,23&start_date=1998-01-01&end_date=1999-12-31&sfw&unapproved"
        );
    }

    #[test]
    fn sort_without_order_by_is_dropped() {
        let config = AnimeSearchConfig {
            sort: SortDirection::Descending,
            sfw: false,
            ..Default::default()
        };
        assert_eq!(config.to_query().unwrap(), "");
    }

    #[test]
    fn first_invalid_field_wins() {
        let config = AnimeSearchConfig {
            page: Some(0),
            limit: Some(99),
            letter: Some('1'),
            ..Default::default()
        };
        assert_eq!(config.to_query().unwrap_err().field(), Some("page"));
    }

    #[test]
    fn inverted_ranges_are_rejected() {
        let scores = AnimeSearchConfig {
            min_score: Some(8.0),
            max_score: Some(6.0),
            ..Default::default()
        };
        assert_eq!(scores.to_query().unwrap_err().field(), Some("min_score"));

        let dates = AnimeSearchConfig {
            start_date: NaiveDate::from_ymd_opt(2020, 1, 1),
            end_date: NaiveDate::from_ymd_opt(2019, 1, 1),
            ..Default::default()
        };
        assert_eq!(dates.to_query().unwrap_err().field(), Some("start_date"));
    }

    #[test]
    fn out_of_scale_scores_are_rejected() {
        let config = AnimeSearchConfig {
            score: Some(11.0),
            ..Default::default()
        };
        assert_eq!(config.to_query().unwrap_err().field(), Some("score"));
    }

    #[test]
    fn zero_scores_are_rejected() {
        let min = AnimeSearchConfig {
            min_score: Some(0.0),
            ..Default::default()
        };
        assert_eq!(min.to_query().unwrap_err().field(), Some("min_score"));

        let exact = AnimeSearchConfig {
            score: Some(0.0),
            min_score: Some(0.0),
            sfw: false,
            ..Default::default()
        };
        assert_eq!(exact.to_query().unwrap_err().field(), Some("score"));
    }

    #[test]
    fn repeated_producers_are_sent_as_given() {
        let config = AnimeSearchConfig {
            producers: vec![17, 2, 17],
            sfw: false,
            ..Default::default()
        };
        assert_eq!(config.to_query().unwrap(), "producers=17,2,17");
    }

    #[test]
    fn zero_producer_is_rejected() {
        let config = AnimeSearchConfig {
            producers: vec![4, 0],
            ..Default::default()
        };
        assert_eq!(config.to_query().unwrap_err().field(), Some("producers"));
    }

    #[test]
    fn builder_defaults_match_struct_defaults() {
        let built = AnimeSearchConfigBuilder::default().build().unwrap();
        assert_eq!(built, AnimeSearchConfig::default());
        assert!(built.sfw);
    }

    #[test]
    fn endpoint_joins_path_and_query() {
        let config = AnimeSearchConfig {
            letter: Some('A'),
            sfw: false,
            ..Default::default()
        };
        assert_eq!(config.endpoint().unwrap(), "/anime?letter=A");

        let bare = AnimeSearchConfig {
            sfw: false,
            ..Default::default()
        };
        assert_eq!(bare.endpoint().unwrap(), "/anime");
    }
}
