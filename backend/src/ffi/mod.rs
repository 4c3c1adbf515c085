//! Python bindings
//!
//! Thin PyO3 wrappers over the pricing core. Enhancement types cross the
//! boundary as their identifier or title (`"summons_hp"`, `"Summons HP"`).

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use std::collections::HashMap;

use crate::catalog;
use crate::enhancement::{Enhancement, EnhancementError, EnhancementType};

fn to_py_err(err: EnhancementError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Price one enhancement
///
/// # Example (from Python)
///
/// ```python
/// from ghec_core_rs import enhancement_cost
///
/// enhancement_cost("attack", level=3, previous=1)  # 175
/// ```
///
/// # Errors
///
/// Raises ValueError if the enhancement name is unknown or any input is
/// out of range.
#[pyfunction]
#[pyo3(signature = (enhancement, level = 1, multiple_target = 1, previous = 0))]
pub fn enhancement_cost(
    enhancement: &str,
    level: i64,
    multiple_target: i64,
    previous: i64,
) -> PyResult<i64> {
    let base_enhancement: EnhancementType = enhancement.parse().map_err(to_py_err)?;
    Enhancement::new(base_enhancement)
        .with_level(level)
        .with_multiple_target(multiple_target)
        .with_previous_enhancements(previous)
        .cost()
        .map_err(to_py_err)
}

/// Identifier -> display title for every enhancement
#[pyfunction]
pub fn enhancement_titles() -> HashMap<&'static str, &'static str> {
    catalog::list(|e| (e.identifier(), e.title()))
        .into_iter()
        .collect()
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(enhancement_cost, m)?)?;
    m.add_function(wrap_pyfunction!(enhancement_titles, m)?)?;
    Ok(())
}
