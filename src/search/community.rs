use derive_builder::Builder;

use crate::{
    error::Result,
    filters::{ClubCategory, ClubOrderBy, ClubType, SortDirection, UserGender},
    guard,
    query::{self, QueryBuilder, SearchConfig},
};

/// Options for `GET /users`.
///
/// # Examples
///
/// ```rust
/// use shiori::prelude::*;
///
/// let config = UserSearchConfig {
///     gender: Some(UserGender::NonBinary),
///     location: Some("Tokyo, Japan".to_string()),
///     min_age: Some(18),
///     ..Default::default()
/// };
///
/// assert_eq!(
///     config.to_query().unwrap(),
///     "gender=nonbinary&location=Tokyo%2C%20Japan&minAge=18"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Builder)]
#[builder(default, build_fn(error = "crate::error::Error"))]
pub struct UserSearchConfig {
    /// Page number, starting at 1.
    #[builder(setter(strip_option))]
    pub page: Option<u32>,

    /// Results per page, at most [`MAX_PAGE_SIZE`](crate::query::MAX_PAGE_SIZE).
    #[builder(setter(strip_option))]
    pub limit: Option<u32>,

    /// Free-text name search.
    #[builder(setter(into, strip_option))]
    pub q: Option<String>,

    /// Profile gender.
    #[builder(setter(strip_option))]
    pub gender: Option<UserGender>,

    /// Free-text location, percent-encoded.
    #[builder(setter(into, strip_option))]
    pub location: Option<String>,

    /// Youngest age, sent as `minAge`.
    #[builder(setter(strip_option))]
    pub min_age: Option<u32>,

    /// Oldest age, sent as `maxAge`.
    #[builder(setter(strip_option))]
    pub max_age: Option<u32>,
}

impl SearchConfig for UserSearchConfig {
    fn path(&self) -> String {
        "/users".to_string()
    }

    fn validate(&self) -> Result<()> {
        query::validate_paging(self.page, self.limit)?;
        query::validate_text(self.q.as_deref(), "q")?;
        query::validate_text(self.location.as_deref(), "location")?;
        if let Some(age) = self.min_age {
            guard::ensure_positive(age, "min_age")?;
        }
        if let Some(age) = self.max_age {
            guard::ensure_positive(age, "max_age")?;
        }
        guard::ensure_ordered(self.min_age, self.max_age, "min_age")
    }

    fn compose(&self) -> QueryBuilder {
        QueryBuilder::new()
            .scalar("page", self.page)
            .scalar("limit", self.limit)
            .text("q", self.q.as_deref())
            .enumerated("gender", self.gender)
            .text("location", self.location.as_deref())
            .scalar("minAge", self.min_age)
            .scalar("maxAge", self.max_age)
    }
}

/// Options for `GET /clubs`.
#[derive(Debug, Clone, Default, PartialEq, Builder)]
#[builder(default, build_fn(error = "crate::error::Error"))]
pub struct ClubSearchConfig {
    /// Page number, starting at 1.
    #[builder(setter(strip_option))]
    pub page: Option<u32>,

    /// Results per page, at most [`MAX_PAGE_SIZE`](crate::query::MAX_PAGE_SIZE).
    #[builder(setter(strip_option))]
    pub limit: Option<u32>,

    /// Free-text name search.
    #[builder(setter(into, strip_option))]
    pub q: Option<String>,

    /// Club visibility, sent as `type`.
    #[builder(setter(strip_option))]
    pub club_type: Option<ClubType>,

    /// Club category.
    #[builder(setter(strip_option))]
    pub category: Option<ClubCategory>,

    /// Sort key. `sort` is only sent together with it.
    #[builder(setter(strip_option))]
    pub order_by: Option<ClubOrderBy>,

    /// Direction applied to `order_by`.
    pub sort: SortDirection,

    /// Only entries whose name starts with this letter.
    #[builder(setter(strip_option))]
    pub letter: Option<char>,
}

impl SearchConfig for ClubSearchConfig {
    fn path(&self) -> String {
        "/clubs".to_string()
    }

    fn validate(&self) -> Result<()> {
        query::validate_paging(self.page, self.limit)?;
        query::validate_text(self.q.as_deref(), "q")?;
        query::validate_letter(self.letter)
    }

    fn compose(&self) -> QueryBuilder {
        QueryBuilder::new()
            .scalar("page", self.page)
            .scalar("limit", self.limit)
            .text("q", self.q.as_deref())
            .enumerated("type", self.club_type)
            .enumerated("category", self.category)
            .sort(self.order_by, self.sort)
            .letter("letter", self.letter)
    }
}
