//! Enhancement Cost Core - Rust Engine
//!
//! Prices the permanent enhancement of an ability card: a base cost for the
//! chosen enhancement plus surcharges for the card level and the number of
//! enhancements already on the card.
//!
//! # Architecture
//!
//! - **enhancement**: Enhancement types, cost tables and the pricer
//! - **catalog**: Display text, lookup maps and the price schema
//!
//! # Critical Invariants
//!
//! 1. All prices are i64 (whole gold), never float
//! 2. Pricing is pure and all-or-nothing: a full price or an error
//! 3. Inputs are validated only when a price is requested

// Module declarations
pub mod catalog;
pub mod enhancement;

// Re-exports for convenience
pub use catalog::{by_title, titles};
pub use enhancement::{
    quote_json, Cost, CostBreakdown, Enhancement, EnhancementError, EnhancementRequest,
    EnhancementType, PriceQuote, RequestError,
};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn ghec_core_rs(_py: Python<'_>, m: &PyModule) -> PyResult<()> {
    ffi::register(m)
}
