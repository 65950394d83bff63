//! Property tests for query composition.

use proptest::prelude::*;
use shiori::prelude::*;
use shiori::query::MAX_PAGE_SIZE;
use unicode_general_category::{GeneralCategory, get_general_category};

fn is_letter(value: char) -> bool {
    matches!(
        get_general_category(value),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

fn anime_genre() -> impl Strategy<Value = AnimeGenre> {
    proptest::sample::select(AnimeGenre::ALL)
}

fn order_by() -> impl Strategy<Value = Option<AnimeOrderBy>> {
    proptest::option::of(proptest::sample::select(AnimeOrderBy::ALL))
}

#[cfg(test)]
mod property_tests {
    use super::*;

    proptest! {
        #[test]
        fn same_config_same_query(
            page in proptest::option::of(1u32..500),
            limit in proptest::option::of(1u32..=MAX_PAGE_SIZE),
            q in proptest::option::of("[a-zA-Z][a-zA-Z0-9 ]{0,20}"),
            genres in proptest::collection::vec(anime_genre(), 0..6),
            order_by in order_by(),
            sfw in any::<bool>(),
        ) {
            let config = AnimeSearchConfig {
                page,
                limit,
                q,
                genres,
                order_by,
                sfw,
                ..Default::default()
            };
            let first = config.to_query().unwrap();
            let second = config.clone().to_query().unwrap();
            prop_assert_eq!(&first, &second);
            prop_assert!(!first.starts_with('?'));
            prop_assert!(!first.starts_with('&'));
            prop_assert!(!first.ends_with('&'));
        }

        #[test]
        fn limit_accepted_iff_within_bounds(limit in 0u32..100) {
            let config = CharacterSearchConfig {
                limit: Some(limit),
                ..Default::default()
            };
            let result = config.to_query();
            if (1..=MAX_PAGE_SIZE).contains(&limit) {
                prop_assert_eq!(result.unwrap(), format!("limit={}", limit));
            } else {
                let error = result.unwrap_err();
                prop_assert_eq!(error.field(), Some("limit"));
            }
        }

        #[test]
        fn page_accepted_iff_positive(page in 0u32..10_000) {
            let config = PersonSearchConfig {
                page: Some(page),
                ..Default::default()
            };
            prop_assert_eq!(config.to_query().is_ok(), page > 0);
        }

        #[test]
        fn letter_guard_matches_letter_categories(letter in any::<char>()) {
            let config = ProducerSearchConfig {
                letter: Some(letter),
                ..Default::default()
            };
            prop_assert_eq!(config.to_query().is_ok(), is_letter(letter));
        }

        #[test]
        fn zero_or_negative_scores_are_rejected(score in -10.0f64..=0.0) {
            let config = MangaSearchConfig {
                min_score: Some(score),
                ..Default::default()
            };
            let error = config.to_query().unwrap_err();
            prop_assert_eq!(error.field(), Some("min_score"));
        }

        #[test]
        fn sort_direction_needs_a_key(order_by in order_by()) {
            let config = AnimeSearchConfig {
                order_by,
                sort: SortDirection::Descending,
                sfw: false,
                ..Default::default()
            };
            let query = config.to_query().unwrap();
            prop_assert_eq!(query.contains("sort=desc"), order_by.is_some());
        }

        #[test]
        fn flags_always_trail(
            page in proptest::option::of(1u32..50),
            kids in any::<bool>(),
            sfw in any::<bool>(),
        ) {
            let config = ScheduleConfig {
                page,
                kids,
                sfw,
                ..Default::default()
            };
            let query = config.to_query().unwrap();
            let fragments: Vec<&str> = query.split('&').filter(|f| !f.is_empty()).collect();
            let first_flag = fragments.iter().position(|f| !f.contains('='));
            if let Some(position) = first_flag {
                prop_assert!(fragments[position..].iter().all(|f| !f.contains('=')));
            }
        }
    }
}
