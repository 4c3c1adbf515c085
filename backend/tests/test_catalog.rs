//! Tests for the enhancement catalog and price schema

use ghec_core_rs::catalog::{self, PriceCategory, PriceSchemaDoc};
use ghec_core_rs::{by_title, titles, Enhancement, EnhancementType};

#[test]
fn test_every_type_has_title_and_description() {
    for e in EnhancementType::ALL {
        assert!(!e.title().is_empty(), "{:?}", e);
        assert!(e.description().starts_with("adds "), "{:?}", e);
    }
}

#[test]
fn test_title_round_trip() {
    let forward = titles();
    let reverse = by_title();

    assert_eq!(forward.len(), EnhancementType::COUNT);
    for (e, title) in forward {
        assert_eq!(reverse[title], e);
        assert_eq!(title.parse::<EnhancementType>(), Ok(e));
    }
}

#[test]
fn test_display_uses_title() {
    assert_eq!(EnhancementType::SpecificElement.to_string(), "Specific Element");
    assert_eq!(EnhancementType::AddAttackHex.to_string(), "Add Hex");
}

#[test]
fn test_list_projection_for_picker() {
    let labels = catalog::list(|e| format!("{} ({})", e.title(), e.description()));

    assert_eq!(labels.len(), EnhancementType::COUNT);
    assert_eq!(labels[0], "Move (adds +1 to move)");
}

#[test]
fn test_schema_matches_pricer() {
    let schema: PriceSchemaDoc =
        serde_json::from_str(&catalog::get_price_schema().unwrap()).unwrap();

    assert_eq!(schema.enhancements.len(), EnhancementType::COUNT);
    for (element, e) in schema.enhancements.iter().zip(EnhancementType::ALL) {
        let single = Enhancement::new(e).cost().unwrap();
        assert_eq!(element.base_cost, single, "{:?}", e);

        let multi = Enhancement::new(e).with_multiple_target(2).cost().unwrap();
        match element.category {
            PriceCategory::Scalable => assert_eq!(multi, single * 2),
            PriceCategory::Fixed => assert_eq!(multi, single),
            PriceCategory::PerHex => assert_eq!(multi, single / 2),
        }
    }
}

#[test]
fn test_schema_surcharges() {
    let schema = catalog::price_schema();

    let levels: Vec<i64> = schema.level_surcharges.iter().map(|r| r.cost).collect();
    assert_eq!(levels, vec![0, 25, 50, 75, 100, 125, 150, 175, 200]);

    let previous: Vec<i64> = schema
        .previous_enhancement_surcharges
        .iter()
        .map(|r| r.value)
        .collect();
    assert_eq!(previous, vec![0, 1, 2, 3]);
}
