//! Serializable pricing requests
//!
//! An [`EnhancementRequest`] is the configuration form of an [`Enhancement`]:
//! the record a caller stores or sends over the wire. Omitted fields take the
//! same defaults as [`Enhancement::new`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::error::EnhancementError;
use super::pricer::{CostBreakdown, Enhancement, DEFAULT_MULTIPLE_TARGET};
use super::tables::{Cost, MIN_LEVEL, MIN_PREVIOUS_ENHANCEMENTS};
use super::types::EnhancementType;

/// Errors from loading or pricing a request
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("Invalid request: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Pricing failed: {0}")]
    Pricing(#[from] EnhancementError),
}

fn default_level() -> i64 {
    MIN_LEVEL
}

fn default_multiple_target() -> i64 {
    DEFAULT_MULTIPLE_TARGET
}

fn default_previous_enhancements() -> i64 {
    MIN_PREVIOUS_ENHANCEMENTS
}

/// Pricing request
///
/// ```json
/// { "enhancement": "attack", "level": 3, "previous_enhancements": 1 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnhancementRequest {
    pub enhancement: EnhancementType,

    #[serde(default = "default_level")]
    pub level: i64,

    /// Multi-target flag, or current hex count for Add Attack Hex
    #[serde(default = "default_multiple_target")]
    pub multiple_target: i64,

    #[serde(default = "default_previous_enhancements")]
    pub previous_enhancements: i64,
}

impl EnhancementRequest {
    pub fn new(enhancement: EnhancementType) -> Self {
        Self {
            enhancement,
            level: default_level(),
            multiple_target: default_multiple_target(),
            previous_enhancements: default_previous_enhancements(),
        }
    }

    /// Parse a single request from JSON
    pub fn from_json(json: &str) -> Result<Self, RequestError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_enhancement(&self) -> Enhancement {
        Enhancement::new(self.enhancement)
            .with_level(self.level)
            .with_multiple_target(self.multiple_target)
            .with_previous_enhancements(self.previous_enhancements)
    }

    /// Price the request
    pub fn price(&self) -> Result<PriceQuote, EnhancementError> {
        let breakdown = self.to_enhancement().breakdown()?;
        Ok(PriceQuote {
            request: self.clone(),
            breakdown,
            total: breakdown.total(),
        })
    }
}

impl From<Enhancement> for EnhancementRequest {
    fn from(enhancement: Enhancement) -> Self {
        Self {
            enhancement: enhancement.base_enhancement(),
            level: enhancement.level(),
            multiple_target: enhancement.multiple_target(),
            previous_enhancements: enhancement.previous_enhancements(),
        }
    }
}

/// A priced request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceQuote {
    pub request: EnhancementRequest,
    pub breakdown: CostBreakdown,
    pub total: Cost,
}

/// Parse and price a JSON request in one step
pub fn quote_json(json: &str) -> Result<PriceQuote, RequestError> {
    Ok(EnhancementRequest::from_json(json)?.price()?)
}
