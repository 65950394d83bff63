use derive_builder::Builder;

use crate::{
    error::Result,
    filters::{CharacterOrderBy, PersonOrderBy, SortDirection},
    query::{self, QueryBuilder, SearchConfig},
};

/// Options for `GET /characters`.
///
/// # Examples
///
/// ```rust
/// use shiori::prelude::*;
///
/// let config = CharacterSearchConfig {
///     q: Some("Lupin".to_string()),
///     order_by: Some(CharacterOrderBy::Favorites),
///     sort: SortDirection::Descending,
///     ..Default::default()
/// };
///
/// assert_eq!(config.to_query().unwrap(), "q=Lupin&order_by=favorites&sort=desc");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Builder)]
#[builder(default, build_fn(error = "crate::error::Error"))]
pub struct CharacterSearchConfig {
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
    pub order_by: Option<CharacterOrderBy>,

    /// Direction applied to `order_by`.
    pub sort: SortDirection,

    /// Only entries whose name starts with this letter.
    #[builder(setter(strip_option))]
    pub letter: Option<char>,
}

impl SearchConfig for CharacterSearchConfig {
    fn path(&self) -> String {
        "/characters".to_string()
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

/// Options for `GET /people`.
#[derive(Debug, Clone, Default, PartialEq, Builder)]
#[builder(default, build_fn(error = "crate::error::Error"))]
pub struct PersonSearchConfig {
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
    pub order_by: Option<PersonOrderBy>,

    /// Direction applied to `order_by`.
    pub sort: SortDirection,

    /// Only entries whose name starts with this letter.
    #[builder(setter(strip_option))]
    pub letter: Option<char>,
}

impl SearchConfig for PersonSearchConfig {
    fn path(&self) -> String {
        "/people".to_string()
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_configs_are_empty() {
        assert_eq!(CharacterSearchConfig::default().to_query().unwrap(), "");
        assert_eq!(PersonSearchConfig::default().to_query().unwrap(), "");
    }

    #[test]
    fn letter_filter() {
        let config = CharacterSearchConfig {
            letter: Some('A'),
            ..Default::default()
        };
        assert_eq!(config.to_query().unwrap(), "letter=A");
    }

    #[test]
    fn direction_is_ignored_without_sort_key() {
        let config = PersonSearchConfig {
            sort: SortDirection::Descending,
            q: Some("Miyazaki".into()),
            ..Default::default()
        };
        assert_eq!(config.to_query().unwrap(), "q=Miyazaki");
    }

    #[test]
    fn person_sort_key_and_direction_emit_in_fixed_order() {
        let config = PersonSearchConfigBuilder::default()
            .sort(SortDirection::Ascending)
            .order_by(PersonOrderBy::Birthday)
            .page(3)
            .build()
            .unwrap();
        assert_eq!(config.to_query().unwrap(), "page=3&order_by=birthday&sort=asc");
    }

    #[test]
    fn letter_numerals_and_combining_marks_are_not_letters() {
        for value in ['Ⅻ', 'ⅳ', '\u{0345}'] {
            let config = CharacterSearchConfig {
                letter: Some(value),
                ..Default::default()
            };
            assert_eq!(config.to_query().unwrap_err().field(), Some("letter"), "{value:?}");
        }
    }

    #[test]
    fn blank_query_is_rejected() {
        let config = CharacterSearchConfig {
            q: Some("  ".into()),
            ..Default::default()
        };
        assert_eq!(config.to_query().unwrap_err().field(), Some("q"));
    }
}
