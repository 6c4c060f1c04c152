use super::*;

#[test]
fn game_id_accepts_numbers_and_strings() {
    let numeric: GameId = serde_json::from_str("42").expect("numeric id");
    let text: GameId = serde_json::from_str("\"a1b2\"").expect("string id");
    assert_eq!(numeric, GameId::from("42"));
    assert_eq!(text.as_str(), "a1b2");
    assert_eq!(serde_json::to_string(&numeric).expect("encode"), "\"42\"");
}

#[test]
fn decodes_json_server_record() {
    let record: GameRecord = serde_json::from_str(
        r#"{"id":7,"title":"Hades","description":"Roguelike","img":"https://x/h.png","releaseYear":2020}"#,
    )
    .expect("decode");
    assert_eq!(record.id, GameId::from(7));
    assert_eq!(record.release_year, Some(2020));
    assert_eq!(record.image_url(), Some("https://x/h.png"));
}

#[test]
fn missing_optional_fields_default() {
    let record: GameRecord =
        serde_json::from_str(r#"{"id":"x9","title":"Celeste","img":""}"#).expect("decode");
    assert_eq!(record.description, "");
    assert_eq!(record.release_year, None);
    assert_eq!(record.image_url(), None);
}

#[test]
fn new_game_has_no_id_field() {
    let body = serde_json::to_value(NewGame::new("Doom", "", "Demons")).expect("encode");
    assert!(body.get("id").is_none());
    assert_eq!(body["title"], "Doom");
    assert_eq!(body["img"], "");
}

#[test]
fn validate_trims_and_rejects_blank_title() {
    let ok = NewGame::new("  Doom ", " https://x/d.png ", " shooter ")
        .validate()
        .expect("valid");
    assert_eq!(ok, NewGame::new("Doom", "https://x/d.png", "shooter"));

    let err = NewGame::new("   ", "", "nothing")
        .validate()
        .expect_err("blank title");
    assert_eq!(err, ValidationError::EmptyTitle);
}

#[test]
fn sort_key_parses_wire_and_cli_spellings() {
    for raw in ["title", "Title", " TITLE "] {
        assert_eq!(raw.parse::<SortKey>().expect("title"), SortKey::Title);
    }
    for raw in ["releaseYear", "release_year", "release-year"] {
        assert_eq!(
            raw.parse::<SortKey>().expect("year"),
            SortKey::ReleaseYear
        );
    }
    assert!("year".parse::<SortKey>().is_err());
    assert!(matches!(
        "rating".parse::<SortKey>(),
        Err(ValidationError::UnknownSortKey(_))
    ));
    assert_eq!(SortKey::default(), SortKey::Title);
    assert_eq!(SortKey::ReleaseYear.to_string(), "releaseYear");
}

#[test]
fn hand_edited_years_and_null_descriptions_still_decode() {
    let records: Vec<GameRecord> = serde_json::from_str(
        r#"[
            {"id":1,"title":"Doom","releaseYear":"1993","description":null},
            {"id":2,"title":"Tetris","releaseYear":1984.0},
            {"id":3,"title":"Celeste","releaseYear":" 2018 "},
            {"id":4,"title":"Hades","releaseYear":"soon"},
            {"id":5,"title":"Zelda","releaseYear":null},
            {"id":6,"title":"Myst","releaseYear":{"year":1993}},
            {"id":7,"title":"Quake","releaseYear":[1996]}
        ]"#,
    )
    .expect("decode whole collection");

    let years: Vec<_> = records.iter().map(|r| r.release_year).collect();
    assert_eq!(
        years,
        vec![Some(1993), Some(1984), Some(2018), None, None, None, None]
    );
    assert_eq!(records[0].description, "");
}
