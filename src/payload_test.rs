use super::*;

#[test]
fn blank_text_is_empty_payload() {
    let payload = PagePayload::parse("  \n").unwrap();
    assert_eq!(payload, PagePayload::default());
    assert_eq!(payload.session(), SessionState::Unknown);
}

#[test]
fn parses_messages_in_order_and_session_flag() {
    let payload = PagePayload::parse(
        r#"{
            "messages": [
                { "level_tag": "success", "message": "Saved." },
                { "level_tag": "error", "message": "Card declined." }
            ],
            "the_user": false
        }"#,
    )
    .unwrap();
    let messages = payload.messages.as_deref().unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].level_tag, "success");
    assert_eq!(messages[1].message, "Card declined.");
    assert_eq!(payload.session(), SessionState::Anonymous);
    assert_eq!(payload.config, ChromeConfig::default());
}

#[test]
fn null_user_flag_is_unknown() {
    let payload = PagePayload::parse(r#"{ "the_user": null }"#).unwrap();
    assert_eq!(payload.session(), SessionState::Unknown);
}

#[test]
fn session_state_from_flag() {
    assert_eq!(SessionState::from(None), SessionState::Unknown);
    assert_eq!(SessionState::from(Some(false)), SessionState::Anonymous);
    assert_eq!(SessionState::from(Some(true)), SessionState::Authenticated);
}

#[test]
fn config_overrides_are_merged_over_defaults() {
    let payload = PagePayload::parse(r#"{ "config": { "fade_duration_ms": 200 } }"#).unwrap();
    assert_eq!(payload.config.fade_duration_ms, 200);
    assert_eq!(payload.config.nav_id, "page-sections-nav");
}

#[test]
fn malformed_payload_is_an_error() {
    let err = PagePayload::parse(r#"{ "messages": 5 }"#).unwrap_err();
    assert!(matches!(err, ChromeError::Payload(_)));
}
