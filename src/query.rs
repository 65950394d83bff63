//! Canonical query-string composition.
//!
//! Every search config turns itself into a query string in two steps:
//!
//! 1. [`SearchConfig::validate`] runs the guards over each set field in declaration
//!    order and stops at the first violation.
//! 2. [`SearchConfig::compose`] folds the fields into a [`QueryBuilder`], one
//!    conditional per field, and [`QueryBuilder::finish`] joins the fragments.
//!
//! The result never starts with `?` or `&`. An unpopulated config produces an empty
//! string (or only its default flags), so it can never filter results by accident.
//! [`SearchConfig::endpoint`] is the one place that glues path and query together.
//!
//! # Examples
//!
//! ```rust
//! use shiori::query::QueryBuilder;
//! use shiori::filters::{AnimeGenre, AnimeOrderBy, SortDirection};
//!
//! let query = QueryBuilder::new()
//!     .scalar("page", Some(2))
//!     .text("q", Some("cowboy bebop"))
//!     .sort(Some(AnimeOrderBy::Score), SortDirection::Descending)
//!     .list("genres", &[AnimeGenre::Action, AnimeGenre::SciFi])
//!     .flag("sfw", true)
//!     .finish();
//!
//! assert_eq!(query, "page=2&q=cowboy%20bebop&order_by=score&sort=desc&genres=1,24&sfw");
//! ```

use std::fmt::Display;

use chrono::NaiveDate;

use crate::{
    error::Result,
    filters::SortDirection,
    guard,
    wire::{WireEnum, description_of},
};

/// Largest page size the API accepts.
pub const MAX_PAGE_SIZE: u32 = 25;

/// Highest score on the MyAnimeList scale.
pub const MAX_SCORE: f64 = 10.0;

/// Ordered accumulator of `key=value` fragments and bare flags.
///
/// Fragments are emitted in the order they were added; flags always come after
/// every `key=value` fragment.
#[derive(Debug, Clone, Default)]
pub struct QueryBuilder {
    params: Vec<String>,
    flags: Vec<&'static str>,
}

impl QueryBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `key=value` when `value` is set.
    pub fn scalar<T: Display>(mut self, key: &str, value: Option<T>) -> Self {
        if let Some(value) = value {
            self.params.push(format!("{}={}", key, value));
        }
        self
    }

    /// Appends a percent-encoded free-text value when set.
    pub fn text(mut self, key: &str, value: Option<&str>) -> Self {
        if let Some(value) = value {
            self.params
                .push(format!("{}={}", key, urlencoding::encode(value)));
        }
        self
    }

    /// Appends a single percent-encoded character when set.
    pub fn letter(self, key: &str, value: Option<char>) -> Self {
        let value = value.map(String::from);
        self.text(key, value.as_deref())
    }

    /// Appends the wire string of an enum value; `None` is left out.
    pub fn enumerated<E: WireEnum>(mut self, key: &str, value: Option<E>) -> Self {
        let wire = description_of(value);
        if !wire.is_empty() {
            self.params.push(format!("{}={}", key, wire));
        }
        self
    }

    /// Appends `order_by` followed by `sort`, but only when a sort key is set.
    ///
    /// The direction on its own is meaningless to the API, so it is dropped when
    /// there is nothing to sort by.
    pub fn sort<K: WireEnum>(self, order_by: Option<K>, direction: SortDirection) -> Self {
        if order_by.is_none() {
            return self;
        }
        self.enumerated("order_by", order_by)
            .enumerated("sort", Some(direction))
    }

    /// Appends a comma-joined list of enum tokens when the list is non-empty.
    ///
    /// Members keep their insertion order. A token that was already listed is
    /// skipped, so asking for the same genre twice sends it once.
    pub fn list<E: WireEnum>(self, key: &str, values: &[E]) -> Self {
        let mut unique: Vec<&'static str> = Vec::new();
        for value in values {
            if !unique.contains(&value.wire()) {
                unique.push(value.wire());
            }
        }
        self.joined(key, unique.into_iter().map(String::from))
    }

    /// Appends a comma-joined list of numeric IDs when the list is non-empty.
    ///
    /// IDs are sent exactly as given, repeats included.
    pub fn ids(self, key: &str, values: &[u32]) -> Self {
        self.joined(key, values.iter().map(u32::to_string))
    }

    /// Appends a `YYYY-MM-DD` date when set.
    pub fn date(self, key: &str, value: Option<NaiveDate>) -> Self {
        self.scalar(key, value.map(|date| date.format("%Y-%m-%d")))
    }

    /// Records a bare flag token, emitted after all `key=value` fragments.
    pub fn flag(mut self, name: &'static str, enabled: bool) -> Self {
        if enabled {
            self.flags.push(name);
        }
        self
    }

    /// Joins everything with `&`.
    pub fn finish(self) -> String {
        let mut fragments = self.params;
        fragments.extend(self.flags.into_iter().map(String::from));
        fragments.join("&")
    }

    fn joined(mut self, key: &str, tokens: impl Iterator<Item = String>) -> Self {
        let tokens: Vec<String> = tokens.collect();
        if !tokens.is_empty() {
            self.params.push(format!("{}={}", key, tokens.join(",")));
        }
        self
    }
}

/// A typed set of options for one API resource.
///
/// Implementors describe where the resource lives ([`path`](SearchConfig::path)),
/// which preconditions their fields must meet ([`validate`](SearchConfig::validate))
/// and how the fields are laid out on the wire ([`compose`](SearchConfig::compose)).
/// The provided methods tie the three together and guarantee that composition only
/// ever runs on a validated config.
pub trait SearchConfig {
    /// Resource path relative to the API base, starting with `/`.
    fn path(&self) -> String;

    /// Checks every set field, failing on the first violation.
    fn validate(&self) -> Result<()>;

    /// Lays the fields out as query fragments. Only called after `validate`.
    fn compose(&self) -> QueryBuilder;

    /// Validates the config and returns its canonical query string (no `?`).
    fn to_query(&self) -> Result<String> {
        self.validate()?;
        Ok(self.compose().finish())
    }

    /// Validates the config and returns `path?query`, or just the path when the
    /// query is empty.
    fn endpoint(&self) -> Result<String> {
        let query = self.to_query()?;
        let path = self.path();
        if query.is_empty() {
            Ok(path)
        } else {
            Ok(format!("{}?{}", path, query))
        }
    }
}

/// Checks the `page` and `limit` pair shared by every paginated resource.
pub(crate) fn validate_paging(page: Option<u32>, limit: Option<u32>) -> Result<()> {
    if let Some(page) = page {
        guard::ensure_positive(page, "page")?;
    }
    if let Some(limit) = limit {
        guard::ensure_positive(limit, "limit")?;
        guard::ensure_at_most(limit, MAX_PAGE_SIZE, "limit")?;
    }
    Ok(())
}

/// Checks the free-text query, when set.
pub(crate) fn validate_text(value: Option<&str>, field: &str) -> Result<()> {
    if let Some(value) = value {
        guard::ensure_not_blank(value, field)?;
    }
    Ok(())
}

/// Checks the starting-letter filter, when set.
pub(crate) fn validate_letter(letter: Option<char>) -> Result<()> {
    if let Some(letter) = letter {
        guard::ensure_letter(letter, "letter")?;
    }
    Ok(())
}

/// Checks a score filter, when set: positive and at most [`MAX_SCORE`].
pub(crate) fn validate_score(score: Option<f64>, field: &str) -> Result<()> {
    if let Some(score) = score {
        guard::ensure_positive(score, field)?;
        guard::ensure_in_range(score, 0.0, MAX_SCORE, field)?;
    }
    Ok(())
}

/// Checks that every ID in a list is positive.
pub(crate) fn validate_ids(ids: &[u32], field: &str) -> Result<()> {
    for id in ids {
        guard::ensure_positive(*id, field)?;
    }
    Ok(())
}
