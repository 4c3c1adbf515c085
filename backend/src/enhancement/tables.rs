//! Enhancement Cost Tables
//!
//! The three independent price components of an enhancement:
//! - base cost by enhancement type (optionally doubled for multi-target abilities)
//! - surcharge by ability card level
//! - surcharge by number of enhancements already on the card
//!
//! All prices are whole gold. Every lookup validates its own input, so the
//! tables can be queried directly as well as through [`super::Enhancement`].

use serde::{Deserialize, Serialize};

use super::error::EnhancementError;
use super::types::EnhancementType;

/// Price of an enhancement, in gold
pub type Cost = i64;

/// Lowest printed ability card level
pub const MIN_LEVEL: i64 = 1;
/// Highest printed ability card level
pub const MAX_LEVEL: i64 = 9;
/// Fewest enhancements that can already be on a card
pub const MIN_PREVIOUS_ENHANCEMENTS: i64 = 0;
/// Most enhancements that can already be on a card
pub const MAX_PREVIOUS_ENHANCEMENTS: i64 = 3;

/// Factor applied to scalable base costs on multi-target abilities
pub const MULTI_TARGET_FACTOR: Cost = 2;

/// Numerator of the Add Attack Hex formula (`200 / current hexes`)
pub const ADD_ATTACK_HEX_NUMERATOR: Cost = 200;

/// Surcharge by card level, indexed by `level - 1`
pub const LEVEL_COSTS: [Cost; 9] = [0, 25, 50, 75, 100, 125, 150, 175, 200];

/// Surcharge by number of previous enhancements, indexed by count
pub const PREVIOUS_ENHANCEMENT_COSTS: [Cost; 4] = [0, 75, 150, 225];

/// How a base enhancement is priced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "rule", content = "cost", rename_all = "snake_case")]
pub enum BaseCostRule {
    /// Flat cost, doubled when the ability has multiple targets
    Scalable(Cost),
    /// Flat cost regardless of targets (summon stat boosts)
    Fixed(Cost),
    /// Numerator divided by the number of hexes already in the attack area
    PerHex(Cost),
}

/// One row of the base cost table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseCost {
    pub enhancement: EnhancementType,
    pub rule: BaseCostRule,
}

const fn scalable(enhancement: EnhancementType, cost: Cost) -> BaseCost {
    BaseCost {
        enhancement,
        rule: BaseCostRule::Scalable(cost),
    }
}

const fn fixed(enhancement: EnhancementType, cost: Cost) -> BaseCost {
    BaseCost {
        enhancement,
        rule: BaseCostRule::Fixed(cost),
    }
}

/// Base cost table, one row per [`EnhancementType`] in index order
pub static BASE_COSTS: [BaseCost; EnhancementType::COUNT] = [
    scalable(EnhancementType::Move, 30),
    scalable(EnhancementType::Jump, 50),
    scalable(EnhancementType::Attack, 50),
    scalable(EnhancementType::Range, 30),
    scalable(EnhancementType::Target, 50),
    BaseCost {
        enhancement: EnhancementType::AddAttackHex,
        rule: BaseCostRule::PerHex(ADD_ATTACK_HEX_NUMERATOR),
    },
    scalable(EnhancementType::Heal, 30),
    scalable(EnhancementType::Shield, 100),
    scalable(EnhancementType::Retaliate, 100),
    scalable(EnhancementType::Strengthen, 50),
    scalable(EnhancementType::Muddle, 50),
    scalable(EnhancementType::Disarm, 150),
    scalable(EnhancementType::Pierce, 30),
    scalable(EnhancementType::Poison, 75),
    scalable(EnhancementType::Wound, 75),
    scalable(EnhancementType::Push, 30),
    scalable(EnhancementType::Pull, 30),
    scalable(EnhancementType::Immobilize, 100),
    scalable(EnhancementType::Curse, 75),
    scalable(EnhancementType::Bless, 50),
    scalable(EnhancementType::SpecificElement, 100),
    scalable(EnhancementType::AnyElement, 150),
    fixed(EnhancementType::SummonsMove, 100),
    fixed(EnhancementType::SummonsAttack, 100),
    fixed(EnhancementType::SummonsRange, 50),
    fixed(EnhancementType::SummonsHp, 50),
];

/// Look up the base cost row for an enhancement
///
/// # Errors
/// `UnknownType` if the table has no row for the enhancement at its index.
pub fn base_cost_row(enhancement: EnhancementType) -> Result<&'static BaseCost, EnhancementError> {
    BASE_COSTS
        .get(enhancement.index())
        .filter(|row| row.enhancement == enhancement)
        .ok_or(EnhancementError::UnknownType(enhancement.index() as i64))
}

/// Base cost of an enhancement
///
/// `multiple_target` is a flag for ordinary enhancements (`> 1` doubles the
/// cost) and the current hex count for Add Attack Hex.
///
/// # Errors
/// - `UnknownType` if the enhancement has no table row
/// - `DivisionByZero` for Add Attack Hex with zero current hexes
/// - `InvalidHexCount` for Add Attack Hex with a negative hex count
pub fn cost_for_base_enhancement(
    enhancement: EnhancementType,
    multiple_target: i64,
) -> Result<Cost, EnhancementError> {
    match base_cost_row(enhancement)?.rule {
        BaseCostRule::Scalable(cost) if multiple_target > 1 => Ok(cost * MULTI_TARGET_FACTOR),
        BaseCostRule::Scalable(cost) | BaseCostRule::Fixed(cost) => Ok(cost),
        BaseCostRule::PerHex(numerator) => match multiple_target {
            0 => Err(EnhancementError::DivisionByZero),
            hexes if hexes < 0 => Err(EnhancementError::InvalidHexCount(hexes)),
            // Truncating division: 3 hexes -> 66
            hexes => Ok(numerator / hexes),
        },
    }
}

/// Surcharge for the ability card level
///
/// # Errors
/// `OutOfRange` unless `1 <= level <= 9`.
pub fn cost_for_level(level: i64) -> Result<Cost, EnhancementError> {
    level
        .checked_sub(MIN_LEVEL)
        .and_then(|offset| usize::try_from(offset).ok())
        .and_then(|offset| LEVEL_COSTS.get(offset))
        .copied()
        .ok_or(EnhancementError::OutOfRange {
            field: "level",
            value: level,
            min: MIN_LEVEL,
            max: MAX_LEVEL,
        })
}

/// Surcharge for enhancements already on the card
///
/// # Errors
/// `OutOfRange` unless `0 <= previous <= 3`.
pub fn cost_for_previous_enhancements(previous: i64) -> Result<Cost, EnhancementError> {
    usize::try_from(previous)
        .ok()
        .and_then(|count| PREVIOUS_ENHANCEMENT_COSTS.get(count))
        .copied()
        .ok_or(EnhancementError::OutOfRange {
            field: "previous enhancements",
            value: previous,
            min: MIN_PREVIOUS_ENHANCEMENTS,
            max: MAX_PREVIOUS_ENHANCEMENTS,
        })
}

/// Next previous-enhancement count, wrapping 3 -> 0
pub fn increment_previous(previous: i64) -> i64 {
    (previous.rem_euclid(4) + 1) % 4
}

/// Previous previous-enhancement count, wrapping 0 -> 3
pub fn decrement_previous(previous: i64) -> i64 {
    (previous.rem_euclid(4) + 3) % 4
}
