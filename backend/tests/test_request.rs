//! Tests for JSON pricing requests and quotes

use ghec_core_rs::{quote_json, EnhancementError, EnhancementRequest, EnhancementType, RequestError};

#[test]
fn test_request_with_all_fields() {
    let request = EnhancementRequest::from_json(
        r#"{
            "enhancement": "summons_hp",
            "level": 5,
            "multiple_target": 9,
            "previous_enhancements": 2
        }"#,
    )
    .unwrap();

    assert_eq!(request.enhancement, EnhancementType::SummonsHp);
    assert_eq!(request.price().unwrap().total, 300);
}

#[test]
fn test_request_defaults() {
    let request = EnhancementRequest::from_json(r#"{"enhancement": "add_attack_hex"}"#).unwrap();

    assert_eq!(request.level, 1);
    assert_eq!(request.multiple_target, 1);
    assert_eq!(request.previous_enhancements, 0);
    assert_eq!(request.price().unwrap().total, 200);
}

#[test]
fn test_quote_breakdown_matches_total() {
    let quote = quote_json(r#"{"enhancement": "attack", "level": 3, "previous_enhancements": 1}"#)
        .unwrap();

    assert_eq!(quote.breakdown.base_cost, 50);
    assert_eq!(quote.breakdown.level_cost, 50);
    assert_eq!(quote.breakdown.previous_enhancement_cost, 75);
    assert_eq!(quote.total, 175);
    assert_eq!(quote.request.enhancement, EnhancementType::Attack);
}

#[test]
fn test_quote_serializes() {
    let quote = EnhancementRequest::new(EnhancementType::Disarm).price().unwrap();
    let json = serde_json::to_value(&quote).unwrap();

    assert_eq!(json["request"]["enhancement"], "disarm");
    assert_eq!(json["breakdown"]["base_cost"], 150);
    assert_eq!(json["total"], 150);
}

#[test]
fn test_unknown_enhancement_name_is_parse_error() {
    let err = quote_json(r#"{"enhancement": "fly"}"#).unwrap_err();
    assert!(matches!(err, RequestError::Parse(_)));
}

#[test]
fn test_invalid_level_is_pricing_error() {
    let err = quote_json(r#"{"enhancement": "move", "level": 12}"#).unwrap_err();

    match err {
        RequestError::Pricing(inner) => assert_eq!(
            inner,
            EnhancementError::OutOfRange {
                field: "level",
                value: 12,
                min: 1,
                max: 9,
            }
        ),
        other => panic!("expected pricing error, got {other:?}"),
    }
}

#[test]
fn test_zero_hexes_is_pricing_error() {
    let err = quote_json(r#"{"enhancement": "add_attack_hex", "multiple_target": 0}"#).unwrap_err();
    assert!(matches!(
        err,
        RequestError::Pricing(EnhancementError::DivisionByZero)
    ));
}
