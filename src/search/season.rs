use derive_builder::Builder;

use crate::{
    error::Result,
    filters::{AnimeType, ScheduleDay, Season},
    guard,
    query::{self, QueryBuilder, SearchConfig},
    wire::WireEnum,
};

/// Which season listing to fetch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SeasonSelector {
    /// The season currently airing.
    #[default]
    Now,
    /// Announced titles for upcoming seasons.
    Upcoming,
    /// A specific past or future season.
    Of { year: u32, season: Season },
}

/// Options for the `/seasons` listings.
///
/// # Examples
///
/// ```rust
/// use shiori::prelude::*;
///
/// let config = SeasonConfig {
///     selector: SeasonSelector::Of { year: 2004, season: Season::Fall },
///     filter: Some(AnimeType::Tv),
///     continuing: true,
///     ..Default::default()
/// };
///
/// assert_eq!(
///     config.endpoint().unwrap(),
///     "/seasons/2004/fall?filter=tv&continuing"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Builder)]
#[builder(default, build_fn(error = "crate::error::Error"))]
pub struct SeasonConfig {
    /// Which season to list.
    pub selector: SeasonSelector,

    /// Only this media type.
    #[builder(setter(strip_option))]
    pub filter: Option<AnimeType>,

    /// Page number, starting at 1.
    #[builder(setter(strip_option))]
    pub page: Option<u32>,

    /// Results per page, at most [`MAX_PAGE_SIZE`](crate::query::MAX_PAGE_SIZE).
    #[builder(setter(strip_option))]
    pub limit: Option<u32>,

    /// Filter out adult entries.
    pub sfw: bool,

    /// Include entries not yet approved by MyAnimeList moderators.
    pub unapproved: bool,

    /// Also list titles still airing from earlier seasons.
    pub continuing: bool,
}

impl SearchConfig for SeasonConfig {
    fn path(&self) -> String {
        match self.selector {
            SeasonSelector::Now => "/seasons/now".to_string(),
            SeasonSelector::Upcoming => "/seasons/upcoming".to_string(),
            SeasonSelector::Of { year, season } => {
                format!("/seasons/{}/{}", year, season.wire())
            }
        }
    }

    fn validate(&self) -> Result<()> {
        if let SeasonSelector::Of { year, .. } = self.selector {
            guard::ensure_positive(year, "year")?;
        }
        query::validate_paging(self.page, self.limit)
    }

    fn compose(&self) -> QueryBuilder {
        QueryBuilder::new()
            .enumerated("filter", self.filter)
            .scalar("page", self.page)
            .scalar("limit", self.limit)
            .flag("sfw", self.sfw)
            .flag("unapproved", self.unapproved)
            .flag("continuing", self.continuing)
    }
}

/// Options for `GET /schedules`.
#[derive(Debug, Clone, Default, PartialEq, Builder)]
#[builder(default, build_fn(error = "crate::error::Error"))]
pub struct ScheduleConfig {
    /// Only titles broadcast on this day.
    #[builder(setter(strip_option))]
    pub filter: Option<ScheduleDay>,

    /// Page number, starting at 1.
    #[builder(setter(strip_option))]
    pub page: Option<u32>,

    /// Results per page, at most [`MAX_PAGE_SIZE`](crate::query::MAX_PAGE_SIZE).
    #[builder(setter(strip_option))]
    pub limit: Option<u32>,

    /// Only titles aimed at children.
    pub kids: bool,

    /// Filter out adult entries.
    pub sfw: bool,

    /// Include entries not yet approved by MyAnimeList moderators.
    pub unapproved: bool,
}

impl SearchConfig for ScheduleConfig {
    fn path(&self) -> String {
        "/schedules".to_string()
    }

    fn validate(&self) -> Result<()> {
        query::validate_paging(self.page, self.limit)
    }

    fn compose(&self) -> QueryBuilder {
        QueryBuilder::new()
            .enumerated("filter", self.filter)
            .scalar("page", self.page)
            .scalar("limit", self.limit)
            .flag("kids", self.kids)
            .flag("sfw", self.sfw)
            .flag("unapproved", self.unapproved)
    }
}
