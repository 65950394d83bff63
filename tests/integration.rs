//! Integration tests for Shiori
//!
//! Drives `JikanClient` against a local mock of the Jikan API.

use serde_json::json;
use shiori::prelude::*;
use tokio::time::timeout;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;
use common::{TEST_TIMEOUT, client_for, init_tracing, page_body};

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[tokio::test]
    async fn test_search_hits_canonical_url() {
        init_tracing();
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v4/anime"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(page_body(json!([{ "mal_id": 1, "title": "Cowboy Bebop" }]))),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let config = AnimeSearchConfig {
            page: Some(2),
            limit: Some(25),
            ..Default::default()
        };

        let page: JikanPage<serde_json::Value> =
            timeout(TEST_TIMEOUT, client.search_anime(&config))
                .await
                .unwrap()
                .unwrap();
        assert_eq!(page.data[0]["title"], "Cowboy Bebop");
        assert_eq!(page.pagination.items.unwrap().count, 1);

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].url.query(), Some("page=2&limit=25&sfw"));
    }

    #[tokio::test]
    async fn test_invalid_config_sends_nothing() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_body(json!([]))))
            .expect(0)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let invalid = [
            MangaSearchConfig {
                limit: Some(50),
                ..Default::default()
            },
            MangaSearchConfig {
                letter: Some('#'),
                ..Default::default()
            },
            MangaSearchConfig {
                min_score: Some(9.0),
                max_score: Some(3.0),
                ..Default::default()
            },
        ];

        for config in &invalid {
            let error = client
                .search_manga::<serde_json::Value>(config)
                .await
                .unwrap_err();
            assert!(error.is_validation());
        }

        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_not_found_is_classified() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v4/anime/999999"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "status": 404,
                "type": "BadResponseException",
                "message": "Resource does not exist"
            })))
            .mount(&server)
            .await;

        let error = client_for(&server)
            .anime_by_id::<serde_json::Value>(999999)
            .await
            .unwrap_err();
        assert!(matches!(error, Error::NotFound(ref endpoint) if endpoint == "/anime/999999"));
    }

    #[tokio::test]
    async fn test_rate_limit_carries_retry_after() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "7"))
            .expect(1)
            .mount(&server)
            .await;

        let error = client_for(&server)
            .top_anime::<serde_json::Value>(&TopAnimeConfig::default())
            .await
            .unwrap_err();
        assert!(matches!(error, Error::RateLimit { retry_after: Some(7) }));
    }

    #[tokio::test]
    async fn test_server_error_is_http() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let error = client_for(&server)
            .schedules::<serde_json::Value>(&ScheduleConfig::default())
            .await
            .unwrap_err();
        match error {
            Error::Http { status, url } => {
                assert_eq!(status, 503);
                assert!(url.ends_with("/v4/schedules"));
            }
            other => panic!("expected Http, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_genres_decode_into_entries() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v4/genres/manga"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [
                    { "mal_id": 41, "name": "Seinen", "url": "https://myanimelist.net/manga/genre/41/Seinen", "count": 9000 },
                    { "mal_id": 42, "name": "Josei", "url": "https://myanimelist.net/manga/genre/42/Josei", "count": 2000 }
                ]
            })))
            .mount(&server)
            .await;

        let config = GenreListConfig {
            kind: MediaKind::Manga,
            filter: Some(GenreFilter::Demographics),
        };
        let genres: JikanResponse<Vec<MalEntry>> =
            client_for(&server).genres(&config).await.unwrap();

        let ids: Vec<u32> = genres.data.iter().map(|entry| entry.mal_id).collect();
        assert_eq!(ids, vec![41, 42]);
        assert_eq!(MangaGenre::try_from(i64::from(ids[0])).unwrap(), MangaGenre::Seinen);

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests[0].url.query(), Some("filter=demographics"));
    }

    #[tokio::test]
    async fn test_season_path_and_flags() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v4/seasons/1998/spring"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_body(json!([]))))
            .expect(1)
            .mount(&server)
            .await;

        let config = SeasonConfig {
            selector: SeasonSelector::Of {
                year: 1998,
                season: Season::Spring,
            },
            sfw: true,
            continuing: true,
            ..Default::default()
        };
        let page: JikanPage<serde_json::Value> =
            client_for(&server).season(&config).await.unwrap();
        assert!(!page.has_more());

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests[0].url.query(), Some("sfw&continuing"));
    }
}
