//! Tests for decoder module

use super::*;
use crate::pagination::PageMeta;
use crate::sport::{Cs2Player, Cs2Team, NbaPlayer, NbaTeam};
use pretty_assertions::assert_eq;
use serde_json::json;

// ============================================================================
// Single Record Tests
// ============================================================================

#[test]
fn test_decode_nba_team() {
    let body = json!({
        "data": {
            "id": 1,
            "conference": "East",
            "division": "Southeast",
            "city": "Atlanta",
            "name": "Hawks",
            "full_name": "Atlanta Hawks",
            "abbreviation": "ATL"
        }
    });

    let team: NbaTeam = decode_single(body).unwrap();
    assert_eq!(
        team,
        NbaTeam {
            id: 1,
            abbreviation: Some("ATL".to_string()),
            city: Some("Atlanta".to_string()),
            conference: Some("East".to_string()),
            division: Some("Southeast".to_string()),
            full_name: Some("Atlanta Hawks".to_string()),
            name: Some("Hawks".to_string()),
        }
    );
}

#[test]
fn test_decode_ignores_unknown_and_missing_fields() {
    let body = json!({
        "data": {
            "id": 17,
            "nickname": "s1mple",
            "steam_id": "76561198034202275",
            "rating": 1.31,
            "team": {"id": 3, "name": "NAVI", "region": "EU"}
        }
    });

    let player: Cs2Player = decode_single(body).unwrap();
    assert_eq!(player.id, 17);
    assert_eq!(player.nickname.as_deref(), Some("s1mple"));
    assert_eq!(player.first_name, None);
    assert_eq!(player.is_active, None);
    assert_eq!(
        player.team,
        Some(Cs2Team {
            id: 3,
            name: Some("NAVI".to_string()),
            slug: None,
            short_name: None,
        })
    );
}

#[test]
fn test_decode_null_optional_fields() {
    let body = json!({
        "data": {"id": 5, "first_name": "LeBron", "position": null, "team": null}
    });

    let player: NbaPlayer = decode_single(body).unwrap();
    assert_eq!(player.first_name.as_deref(), Some("LeBron"));
    assert!(player.position.is_none());
    assert!(player.team.is_none());
}

#[test]
fn test_decode_single_missing_id() {
    let body = json!({"data": {"full_name": "Atlanta Hawks"}});
    let err = decode_single::<NbaTeam>(body).unwrap_err();
    assert!(matches!(err, Error::Decode { .. }));
    assert!(err.to_string().contains("id"));
}

#[test]
fn test_decode_single_wrong_root() {
    let err = decode_single::<NbaTeam>(json!([1, 2])).unwrap_err();
    assert!(matches!(err, Error::Decode { .. }));

    let err = decode_single::<NbaTeam>(json!({"team": {"id": 1}})).unwrap_err();
    assert_eq!(err.to_string(), "Unexpected upstream response: missing `data` field");

    let err = decode_single::<NbaTeam>(json!({"data": [{"id": 1}]})).unwrap_err();
    assert!(matches!(err, Error::Decode { .. }));
}

#[test]
fn test_decode_single_wrong_field_type() {
    let body = json!({"data": {"id": "one"}});
    assert!(matches!(
        decode_single::<Cs2Team>(body),
        Err(Error::Decode { .. })
    ));
}

// ============================================================================
// Page Tests
// ============================================================================

#[test]
fn test_decode_page() {
    let body = json!({
        "data": [
            {"id": 1, "name": "Natus Vincere", "slug": "natus-vincere", "short_name": "NAVI"},
            {"id": 2, "name": "FaZe Clan"}
        ],
        "meta": {"next_cursor": 2, "per_page": 2}
    });

    let page: Page<Cs2Team> = decode_page(body).unwrap();
    assert_eq!(page.len(), 2);
    assert_eq!(page.data[0].short_name.as_deref(), Some("NAVI"));
    assert_eq!(page.data[1].slug, None);
    assert_eq!(page.next_cursor().unwrap().to_query_value(), "2");
    assert_eq!(page.meta.per_page, Some(2));
}

#[test]
fn test_decode_page_without_meta() {
    let page: Page<NbaTeam> = decode_page(json!({"data": []})).unwrap();
    assert!(page.is_empty());
    assert!(page.is_last());
}

#[test]
fn test_decode_page_with_null_meta() {
    let page: Page<NbaTeam> = decode_page(json!({"data": [{"id": 1}], "meta": null})).unwrap();
    assert_eq!(page.len(), 1);
    assert!(page.is_last());
    assert_eq!(page.meta, PageMeta::default());
}

#[test]
fn test_decode_page_rejects_bad_records() {
    let body = json!({"data": [{"id": 1}, {"name": "no id"}], "meta": {}});
    assert!(matches!(
        decode_page::<NbaTeam>(body),
        Err(Error::Decode { .. })
    ));
}

#[test]
fn test_decode_page_rejects_object_data() {
    let body = json!({"data": {"id": 1}});
    let err = decode_page::<NbaTeam>(body).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Unexpected upstream response: expected `data` to be an array"
    );
}

// ============================================================================
// Body Parsing Tests
// ============================================================================

#[test]
fn test_parse_body() {
    assert_eq!(parse_body(r#"{"data": []}"#).unwrap(), json!({"data": []}));

    let err = parse_body("<html>Bad Gateway</html>").unwrap_err();
    assert!(matches!(err, Error::Decode { .. }));
}
