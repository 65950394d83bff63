use derive_builder::Builder;

use crate::{
    error::Result,
    filters::{GenreFilter, MagazineOrderBy, MediaKind, ProducerOrderBy, SortDirection},
    query::{self, QueryBuilder, SearchConfig},
    wire::WireEnum,
};

/// Options for `GET /producers`.
#[derive(Debug, Clone, Default, PartialEq, Builder)]
#[builder(default, build_fn(error = "crate::error::Error"))]
pub struct ProducerSearchConfig {
    /// Page number, starting at 1.
    #[builder(setter(strip_option))]
    pub page: Option<u32>,

    /// Results per page, at most [`MAX_PAGE_SIZE`](crate::query::MAX_PAGE_SIZE).
    #[builder(setter(strip_option))]
    pub limit: Option<u32>,

    /// Free-text name search.
    #[builder(setter(into, strip_option))]
    pub q: Option<String>,

    /// Sort key. `sort` is only sent together with it.
    #[builder(setter(strip_option))]
    pub order_by: Option<ProducerOrderBy>,

    /// Direction applied to `order_by`.
    pub sort: SortDirection,

    /// Only entries whose name starts with this letter.
    #[builder(setter(strip_option))]
    pub letter: Option<char>,
}

impl SearchConfig for ProducerSearchConfig {
    fn path(&self) -> String {
        "/producers".to_string()
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
            .sort(self.order_by, self.sort)
            .letter("letter", self.letter)
    }
}

/// Options for `GET /magazines`.
#[derive(Debug, Clone, Default, PartialEq, Builder)]
#[builder(default, build_fn(error = "crate::error::Error"))]
pub struct MagazineSearchConfig {
    /// Page number, starting at 1.
    #[builder(setter(strip_option))]
    pub page: Option<u32>,

    /// Results per page, at most [`MAX_PAGE_SIZE`](crate::query::MAX_PAGE_SIZE).
    #[builder(setter(strip_option))]
    pub limit: Option<u32>,

    /// Free-text name search.
    #[builder(setter(into, strip_option))]
    pub q: Option<String>,

    /// Sort key. `sort` is only sent together with it.
    #[builder(setter(strip_option))]
    pub order_by: Option<MagazineOrderBy>,

    /// Direction applied to `order_by`.
    pub sort: SortDirection,

    /// Only entries whose name starts with this letter.
    #[builder(setter(strip_option))]
    pub letter: Option<char>,
}

impl SearchConfig for MagazineSearchConfig {
    fn path(&self) -> String {
        "/magazines".to_string()
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
            .sort(self.order_by, self.sort)
            .letter("letter", self.letter)
    }
}

/// Options for `GET /genres/anime` and `GET /genres/manga`.
///
/// # Examples
///
/// ```rust
/// use shiori::prelude::*;
///
/// let config = GenreListConfig {
///     kind: MediaKind::Manga,
///     filter: Some(GenreFilter::Themes),
/// };
///
/// assert_eq!(config.endpoint().unwrap(), "/genres/manga?filter=themes");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Builder)]
#[builder(default, build_fn(error = "crate::error::Error"))]
pub struct GenreListConfig {
    /// Catalogue whose genres are listed.
    pub kind: MediaKind,

    /// Restrict the listing to one genre group.
    #[builder(setter(strip_option))]
    pub filter: Option<GenreFilter>,
}

impl SearchConfig for GenreListConfig {
    fn path(&self) -> String {
        format!("/genres/{}", self.kind.wire())
    }

    fn validate(&self) -> Result<()> {
        Ok(())
    }

    fn compose(&self) -> QueryBuilder {
        QueryBuilder::new().enumerated("filter", self.filter)
    }
}
