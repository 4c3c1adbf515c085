//! Price Schema Documentation
//!
//! Self-documenting schema of the enhancement price tables, generated from
//! the tables themselves so the documentation cannot drift from the prices.
//! Rendered as JSON by `ghec schema`.

use serde::{Deserialize, Serialize};

use crate::enhancement::{
    BaseCostRule, Cost, EnhancementType, BASE_COSTS, LEVEL_COSTS, MIN_LEVEL,
    MIN_PREVIOUS_ENHANCEMENTS, PREVIOUS_ENHANCEMENT_COSTS,
};

/// Schema format version
pub const SCHEMA_VERSION: &str = "1.0";

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// How a base enhancement's price reacts to the target multiplier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PriceCategory {
    /// Doubles on multi-target abilities
    Scalable,
    /// Ignores the target multiplier
    Fixed,
    /// Divided by the current hex count
    PerHex,
}

/// Documentation for a single base enhancement
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PriceElement {
    /// Identifier (e.g., "summons_hp")
    pub name: String,

    /// Display title (e.g., "Summons HP")
    pub display_name: String,

    pub category: PriceCategory,

    pub description: String,

    /// Base cost formula (plain text)
    pub formula: String,

    /// Base cost on a single-target ability (one current hex for Add Attack Hex)
    pub base_cost: Cost,

    pub doubles_on_multi_target: bool,
}

/// One step of a surcharge table
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SurchargeRow {
    /// Level, or number of previous enhancements
    pub value: i64,
    pub cost: Cost,
}

/// Complete price schema documentation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PriceSchemaDoc {
    pub version: String,
    pub formula: String,
    pub enhancements: Vec<PriceElement>,
    pub level_surcharges: Vec<SurchargeRow>,
    pub previous_enhancement_surcharges: Vec<SurchargeRow>,
}

/// Trait for types that can provide price schema documentation
pub trait PriceSchemaDocumented {
    fn schema_docs() -> Vec<PriceElement>;
}

// ============================================================================
// IMPLEMENTATIONS
// ============================================================================

impl PriceSchemaDocumented for EnhancementType {
    fn schema_docs() -> Vec<PriceElement> {
        BASE_COSTS
            .iter()
            .map(|row| {
                let (category, formula, base_cost) = match row.rule {
                    BaseCostRule::Scalable(cost) => (
                        PriceCategory::Scalable,
                        format!("{cost}, x2 when multiple_target > 1"),
                        cost,
                    ),
                    BaseCostRule::Fixed(cost) => {
                        (PriceCategory::Fixed, format!("{cost}"), cost)
                    }
                    BaseCostRule::PerHex(numerator) => (
                        PriceCategory::PerHex,
                        format!("{numerator} / current_hexes (truncated)"),
                        numerator,
                    ),
                };
                PriceElement {
                    name: row.enhancement.identifier().to_string(),
                    display_name: row.enhancement.title().to_string(),
                    category,
                    description: row.enhancement.description().to_string(),
                    formula,
                    base_cost,
                    doubles_on_multi_target: category == PriceCategory::Scalable,
                }
            })
            .collect()
    }
}

fn surcharge_rows(first: i64, costs: &[Cost]) -> Vec<SurchargeRow> {
    costs
        .iter()
        .zip(first..)
        .map(|(&cost, value)| SurchargeRow { value, cost })
        .collect()
}

/// Assemble the full schema
pub fn price_schema() -> PriceSchemaDoc {
    PriceSchemaDoc {
        version: SCHEMA_VERSION.to_string(),
        formula: "base_cost + level_surcharge + previous_enhancement_surcharge".to_string(),
        enhancements: EnhancementType::schema_docs(),
        level_surcharges: surcharge_rows(MIN_LEVEL, &LEVEL_COSTS),
        previous_enhancement_surcharges: surcharge_rows(
            MIN_PREVIOUS_ENHANCEMENTS,
            &PREVIOUS_ENHANCEMENT_COSTS,
        ),
    }
}

/// Price schema as pretty-printed JSON
pub fn get_price_schema() -> serde_json::Result<String> {
    serde_json::to_string_pretty(&price_schema())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_category_serializes_to_json() {
        let json = serde_json::to_string(&PriceCategory::PerHex).unwrap();
        assert_eq!(json, "\"PerHex\"");
    }

    #[test]
    fn test_every_enhancement_documented() {
        let docs = EnhancementType::schema_docs();
        assert_eq!(docs.len(), EnhancementType::COUNT);
        for (doc, e) in docs.iter().zip(EnhancementType::ALL) {
            assert_eq!(doc.name, e.identifier());
        }
    }

    #[test]
    fn test_surcharge_rows_start_at_minimum() {
        let schema = price_schema();
        assert_eq!(schema.level_surcharges.first(), Some(&SurchargeRow { value: 1, cost: 0 }));
        assert_eq!(schema.level_surcharges.last(), Some(&SurchargeRow { value: 9, cost: 200 }));
        assert_eq!(
            schema.previous_enhancement_surcharges.last(),
            Some(&SurchargeRow { value: 3, cost: 225 })
        );
    }

    #[test]
    fn test_schema_json_parses_back() {
        let json = get_price_schema().unwrap();
        let restored: PriceSchemaDoc = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, price_schema());
    }
}
