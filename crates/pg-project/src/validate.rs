//! Run-configuration validation logic.

use crate::schema::{ReynoldsDef, RunConfig};

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Empty list: {field}")]
    EmptyList { field: &'static str },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("Missing value: {field}")]
    Missing { field: &'static str },
}

pub fn validate_config(config: &RunConfig) -> Result<(), ValidationError> {
    if let ReynoldsDef::Values(values) = &config.reynolds {
        if values.is_empty() {
            return Err(ValidationError::EmptyList { field: "reynolds" });
        }
        for &re in values {
            if !re.is_finite() || re <= 0.0 {
                return Err(ValidationError::InvalidValue {
                    field: "reynolds",
                    value: re,
                    reason: "must be finite and positive",
                });
            }
        }
    }

    let aoa = &config.aoa;
    for (field, v) in [
        ("aoa.start_deg", aoa.start_deg),
        ("aoa.end_deg", aoa.end_deg),
        ("aoa.step_deg", aoa.step_deg),
    ] {
        if !v.is_finite() {
            return Err(ValidationError::InvalidValue {
                field,
                value: v,
                reason: "must be finite",
            });
        }
    }
    if aoa.step_deg <= 0.0 {
        return Err(ValidationError::InvalidValue {
            field: "aoa.step_deg",
            value: aoa.step_deg,
            reason: "must be positive",
        });
    }
    if aoa.start_deg >= aoa.end_deg {
        return Err(ValidationError::InvalidValue {
            field: "aoa.start_deg",
            value: aoa.start_deg,
            reason: "must be below aoa.end_deg",
        });
    }

    if config.iterations == 0 {
        return Err(ValidationError::InvalidValue {
            field: "iterations",
            value: 0.0,
            reason: "must be positive",
        });
    }

    if config.solver.binary.trim().is_empty() {
        return Err(ValidationError::Missing {
            field: "solver.binary",
        });
    }

    Ok(())
}
