// src/analysis/parameters.rs
//! Urban parameter analysis: evaluates each parameter's project value
//! against its reference value under the category's comparison rule.
//!
//! Parameters without a project value are excluded from both the
//! conformant count and the denominator — "no value yet" is absent, not
//! non-conformant.

use crate::error::{PlancheckError, Result};
use crate::types::{ComparisonMode, ParameterCategory, ParameterResult, UrbanParameter};

/// Evaluates a single parameter. `None` if no project value is present.
#[must_use]
pub fn conformance(parameter: &UrbanParameter) -> Option<bool> {
    let value = parameter.project_value?;
    Some(match parameter.comparison {
        ComparisonMode::Minimum => value >= parameter.reference_value,
        ComparisonMode::Maximum => value <= parameter.reference_value,
    })
}

/// Evaluates every parameter and aggregates conformity over the evaluated
/// subset. The input is never mutated; the result carries its own copy
/// with `conformant` populated.
#[must_use]
pub fn analyze(categories: &[ParameterCategory]) -> ParameterResult {
    let mut evaluated = categories.to_vec();
    let mut total = 0_usize;
    let mut conformant_count = 0_usize;
    let mut non_conformant = Vec::new();

    for category in &mut evaluated {
        for parameter in &mut category.parameters {
            parameter.conformant = conformance(parameter);
            match parameter.conformant {
                Some(true) => {
                    total += 1;
                    conformant_count += 1;
                }
                Some(false) => {
                    total += 1;
                    let mut failing = parameter.clone();
                    failing.name = format!("{} - {}", category.name, parameter.name);
                    non_conformant.push(failing);
                }
                None => {}
            }
        }
    }

    let conformity_percent = if total > 0 {
        conformant_count as f64 / total as f64 * 100.0
    } else {
        0.0
    };

    ParameterResult {
        categories: evaluated,
        conformity_percent,
        non_conformant,
    }
}

/// Overwrites the project value of exactly one parameter and re-evaluates.
///
/// # Errors
///
/// Returns `InvalidValue` for non-finite values and `UnknownParameter` for
/// ids not in `categories`; in both cases no state is changed.
pub fn set_parameter_value(
    categories: &mut [ParameterCategory],
    category_id: &str,
    parameter_id: &str,
    value: f64,
) -> Result<ParameterResult> {
    if !value.is_finite() {
        return Err(PlancheckError::InvalidValue { value });
    }

    let parameter = categories
        .iter_mut()
        .find(|c| c.id == category_id)
        .and_then(|c| c.parameters.iter_mut().find(|p| p.id == parameter_id));

    let Some(parameter) = parameter else {
        return Err(PlancheckError::UnknownParameter {
            category_id: category_id.to_string(),
            parameter_id: parameter_id.to_string(),
        });
    };
    parameter.project_value = Some(value);
    Ok(analyze(categories))
}
