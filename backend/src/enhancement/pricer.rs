//! Enhancement pricing
//!
//! [`Enhancement`] is a small `Copy` value configured through chained
//! `with_*` calls. Setters never validate; [`Enhancement::cost`] validates all
//! inputs and either returns the full price or an error, never a partial sum.

use serde::{Deserialize, Serialize};

use super::error::EnhancementError;
use super::tables::{
    cost_for_base_enhancement, cost_for_level, cost_for_previous_enhancements, Cost, MAX_LEVEL,
    MAX_PREVIOUS_ENHANCEMENTS, MIN_LEVEL, MIN_PREVIOUS_ENHANCEMENTS,
};
use super::types::EnhancementType;

/// Multiple-target value of a fresh enhancement
///
/// Means "single target" for ordinary enhancements and "one hex" for
/// Add Attack Hex.
pub const DEFAULT_MULTIPLE_TARGET: i64 = 1;

/// The configuration needed to price one enhancement
///
/// # Example
/// ```
/// use ghec_core_rs::{Enhancement, EnhancementType};
///
/// let cost = Enhancement::new(EnhancementType::Attack)
///     .with_level(3)
///     .with_previous_enhancements(1)
///     .cost()
///     .unwrap();
/// assert_eq!(cost, 175);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Enhancement {
    base_enhancement: EnhancementType,
    level: i64,
    /// Multi-target flag, or current hex count for Add Attack Hex
    multiple_target: i64,
    previous_enhancements: i64,
}

impl Enhancement {
    /// Level 1 card, single target, no previous enhancements
    pub fn new(base_enhancement: EnhancementType) -> Self {
        Self {
            base_enhancement,
            level: MIN_LEVEL,
            multiple_target: DEFAULT_MULTIPLE_TARGET,
            previous_enhancements: MIN_PREVIOUS_ENHANCEMENTS,
        }
    }

    /// Set the target multiplier
    ///
    /// For Add Attack Hex this is the number of hexes already in the attack.
    pub fn with_multiple_target(mut self, multiple_target: i64) -> Self {
        self.multiple_target = multiple_target;
        self
    }

    pub fn with_level(mut self, level: i64) -> Self {
        self.level = level;
        self
    }

    pub fn with_previous_enhancements(mut self, previous_enhancements: i64) -> Self {
        self.previous_enhancements = previous_enhancements;
        self
    }

    pub fn base_enhancement(&self) -> EnhancementType {
        self.base_enhancement
    }

    pub fn level(&self) -> i64 {
        self.level
    }

    pub fn multiple_target(&self) -> i64 {
        self.multiple_target
    }

    pub fn previous_enhancements(&self) -> i64 {
        self.previous_enhancements
    }

    /// Price split into its three components
    ///
    /// # Errors
    /// - `OutOfRange` if level is outside 1..=9 or previous enhancements outside 0..=3
    /// - `UnknownType`, `DivisionByZero`, `InvalidHexCount` from the base cost lookup
    pub fn breakdown(&self) -> Result<CostBreakdown, EnhancementError> {
        if !(MIN_LEVEL..=MAX_LEVEL).contains(&self.level) {
            return Err(EnhancementError::OutOfRange {
                field: "level",
                value: self.level,
                min: MIN_LEVEL,
                max: MAX_LEVEL,
            });
        }
        if !(MIN_PREVIOUS_ENHANCEMENTS..=MAX_PREVIOUS_ENHANCEMENTS)
            .contains(&self.previous_enhancements)
        {
            return Err(EnhancementError::OutOfRange {
                field: "previous enhancements",
                value: self.previous_enhancements,
                min: MIN_PREVIOUS_ENHANCEMENTS,
                max: MAX_PREVIOUS_ENHANCEMENTS,
            });
        }

        Ok(CostBreakdown {
            base_cost: cost_for_base_enhancement(self.base_enhancement, self.multiple_target)?,
            level_cost: cost_for_level(self.level)?,
            previous_enhancement_cost: cost_for_previous_enhancements(self.previous_enhancements)?,
        })
    }

    /// Total price of the enhancement
    ///
    /// # Errors
    /// Same as [`Enhancement::breakdown`].
    pub fn cost(&self) -> Result<Cost, EnhancementError> {
        Ok(self.breakdown()?.total())
    }
}

/// The three components of an enhancement price
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// Cost of the base enhancement (after any multi-target doubling)
    pub base_cost: Cost,

    /// Surcharge for the card level
    pub level_cost: Cost,

    /// Surcharge for enhancements already on the card
    pub previous_enhancement_cost: Cost,
}

impl CostBreakdown {
    pub fn total(&self) -> Cost {
        self.base_cost + self.level_cost + self.previous_enhancement_cost
    }
}
