//! Response envelopes returned by the Jikan API.
//!
//! Jikan wraps every payload in a `data` field. List endpoints add a
//! `pagination` object next to it:
//!
//! - [`JikanResponse`] - A single resource, `{ "data": T }`
//! - [`JikanPage`] - A page of results, `{ "data": [T], "pagination": {...} }`
//! - [`MalEntry`] - The small `{ mal_id, type, name, url }` record used for genres,
//!   producers, magazines and cross-references
//!
//! Item types are left to the caller: decode into your own structs, or into
//! `serde_json::Value` when only a few fields matter.
//!
//! # Examples
//!
//! ```rust
//! use shiori::types::{JikanPage, MalEntry};
//!
//! let body = r#"{
//!     "data": [{ "mal_id": 1, "type": "anime", "name": "Action", "url": "https://myanimelist.net/anime/genre/1/Action" }],
//!     "pagination": { "last_visible_page": 1, "has_next_page": false }
//! }"#;
//!
//! let page: JikanPage<MalEntry> = serde_json::from_str(body).unwrap();
//! assert_eq!(page.data[0].name, "Action");
//! assert!(!page.pagination.has_next_page);
//! ```

use serde::{Deserialize, Serialize};

/// Envelope for a single resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JikanResponse<T> {
    /// The resource itself.
    pub data: T,
}

/// Envelope for one page of a list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JikanPage<T> {
    /// Items on this page.
    pub data: Vec<T>,
    /// Paging information for this list.
    pub pagination: Pagination,
}

impl<T> JikanPage<T> {
    /// Returns `true` when another page can be requested.
    pub fn has_more(&self) -> bool {
        self.pagination.has_next_page
    }

    /// Page number to ask for next, if any.
    pub fn next_page(&self) -> Option<u32> {
        if !self.has_more() {
            return None;
        }
        Some(self.pagination.current_page.unwrap_or(1) + 1)
    }
}

/// Paging information attached to list responses.
///
/// `current_page` and `items` are missing from a few endpoints (schedules,
/// seasons listings on older API versions), so both are optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pagination {
    /// Number of the last page.
    pub last_visible_page: u32,
    /// Whether a later page exists.
    pub has_next_page: bool,
    /// Page this response covers.
    #[serde(default)]
    pub current_page: Option<u32>,
    /// Item counts for this page and for the whole list.
    #[serde(default)]
    pub items: Option<PaginationItems>,
}

/// Item counts reported alongside a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginationItems {
    /// Items on this page.
    pub count: u32,
    /// Items across every page.
    pub total: u32,
    /// Page size the API used.
    pub per_page: u32,
}

/// A minimal MyAnimeList reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MalEntry {
    /// MyAnimeList ID.
    pub mal_id: u32,
    /// Entry kind such as `anime` or `manga`, when the API sends one.
    #[serde(rename = "type", default)]
    pub entry_type: Option<String>,
    /// Display name.
    pub name: String,
    /// MyAnimeList page for this entry.
    #[serde(default)]
    pub url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn page_with_item_counts() {
        let body = json!({
            "data": [],
            "pagination": {
                "last_visible_page": 40,
                "has_next_page": true,
                "current_page": 3,
                "items": { "count": 25, "total": 1000, "per_page": 25 }
            }
        });
        let page: JikanPage<MalEntry> = serde_json::from_value(body).unwrap();
        assert_eq!(page.pagination.items.as_ref().unwrap().total, 1000);
        assert_eq!(page.next_page(), Some(4));
    }

    #[test]
    fn last_page_has_no_successor() {
        let body = json!({
            "data": [],
            "pagination": { "last_visible_page": 1, "has_next_page": false }
        });
        let page: JikanPage<serde_json::Value> = serde_json::from_value(body).unwrap();
        assert_eq!(page.pagination.current_page, None);
        assert_eq!(page.next_page(), None);
    }

    #[test]
    fn single_resource() {
        let body = json!({ "data": { "mal_id": 18, "name": "Mecha" } });
        let response: JikanResponse<MalEntry> = serde_json::from_value(body).unwrap();
        assert_eq!(response.data.mal_id, 18);
        assert_eq!(response.data.entry_type, None);
    }
}
