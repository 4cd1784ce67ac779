//! Tests for the sport service

use super::*;
use crate::pagination::Cursor;
use crate::sport::{Cs2, Nba};
use crate::types::SportKind;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::time::{Duration, Instant};
use test_case::test_case;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn upstream(kind: SportKind, server: &MockServer, delay: Option<Duration>) -> UpstreamConfig {
    UpstreamConfig {
        sport: kind,
        base_url: server.uri(),
        api_key: "test-key".to_string(),
        timeout: Duration::from_secs(5),
        warmup_delay: delay,
    }
}

#[tokio::test]
async fn test_new_uses_configured_delay() {
    let server = MockServer::start().await;
    let service =
        SportService::<Cs2>::new(&upstream(SportKind::Cs2, &server, Some(Duration::from_secs(12))))
            .unwrap();
    assert_eq!(service.walker().warmup_delay(), Some(Duration::from_secs(12)));
    assert_eq!(service.default_per_page(Resource::Teams), 100);
    assert_eq!(service.client().kind(), SportKind::Cs2);
}

#[tokio::test]
async fn test_list_teams_walks_cursors() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/teams"))
        .and(query_param_is_missing("cursor"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": 1}, {"id": 2}],
            "meta": {"next_cursor": 2}
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/teams"))
        .and(query_param("cursor", "2"))
        .and(query_param("per_page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": 3}, {"id": 4}],
            "meta": {"next_cursor": 4}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let service = SportService::<Nba>::new(&upstream(SportKind::Nba, &server, None)).unwrap();
    let outcome = service
        .list_teams(PageRequest::new(2, 2).unwrap())
        .await
        .unwrap();

    let page = outcome.into_page().unwrap();
    let ids: Vec<i64> = page.data.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![3, 4]);
    assert_eq!(
        page.next_cursor(),
        Cursor::from_upstream(json!(4)).as_ref()
    );
}

#[tokio::test]
async fn test_list_players_exhausted() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/players"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": 1}],
            "meta": {"next_cursor": null}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let service = SportService::<Cs2>::new(&upstream(
        SportKind::Cs2,
        &server,
        Some(Duration::from_millis(10)),
    ))
    .unwrap();

    let started = Instant::now();
    let outcome = service
        .list_players(PageRequest::new(5, 25).unwrap())
        .await
        .unwrap();

    assert_eq!(outcome, WalkOutcome::Exhausted { last_page: 1 });
    // No delay is paid when the first warm-up page is already the last one
    assert!(started.elapsed() < Duration::from_secs(1));
}

#[tokio::test]
async fn test_list_error_aborts_walk() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/teams"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&server)
        .await;

    let service = SportService::<Nba>::new(&upstream(SportKind::Nba, &server, None)).unwrap();
    let err = service
        .list_teams(PageRequest::new(3, 10).unwrap())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::UpstreamStatus { status: 500, .. }));
}

#[test_case(0 ; "zero")]
#[test_case(-7 ; "negative")]
#[tokio::test]
async fn test_invalid_id_makes_no_call(id: i64) {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let service = SportService::<Nba>::new(&upstream(SportKind::Nba, &server, None)).unwrap();

    let err = service.get_team(id).await.unwrap_err();
    assert_eq!(err.to_string(), "team id must be greater than 0");

    let err = service.get_player(id).await.unwrap_err();
    assert_eq!(err.to_string(), "player id must be greater than 0");
}

#[tokio::test]
async fn test_get_player() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/players/237"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "id": 237,
                "first_name": "LeBron",
                "last_name": "James",
                "position": "F",
                "team": {"id": 14, "abbreviation": "LAL"}
            }
        })))
        .mount(&server)
        .await;

    let service = SportService::<Nba>::new(&upstream(SportKind::Nba, &server, None)).unwrap();
    let player = service.get_player(237).await.unwrap();

    assert_eq!(player.last_name.as_deref(), Some("James"));
    assert_eq!(player.team.map(|t| t.id), Some(14));
}
