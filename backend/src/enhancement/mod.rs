//! Enhancement pricing core
//!
//! - **types**: the [`EnhancementType`] vocabulary
//! - **tables**: base, level and previous-enhancement cost tables
//! - **pricer**: the [`Enhancement`] configuration and its cost formula
//! - **request**: serializable requests and quotes
//!
//! # Pricing Formula
//!
//! ```text
//! total = base(type, multiple_target) + level_surcharge(level) + previous_surcharge(previous)
//! ```
//!
//! Pricing is pure: the same inputs always give the same result.

pub mod error;
pub mod pricer;
pub mod request;
pub mod tables;
pub mod types;

pub use error::EnhancementError;
pub use pricer::{CostBreakdown, Enhancement, DEFAULT_MULTIPLE_TARGET};
pub use request::{quote_json, EnhancementRequest, PriceQuote, RequestError};
pub use tables::{
    base_cost_row, cost_for_base_enhancement, cost_for_level, cost_for_previous_enhancements,
    decrement_previous, increment_previous, BaseCost, BaseCostRule, Cost, BASE_COSTS, LEVEL_COSTS,
    MAX_LEVEL, MAX_PREVIOUS_ENHANCEMENTS, MIN_LEVEL, MIN_PREVIOUS_ENHANCEMENTS,
    PREVIOUS_ENHANCEMENT_COSTS,
};
pub use types::EnhancementType;
