use crate::utils::error::{ConverterError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ConverterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ConverterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_exchange_rate(field_name: &str, rate: f64) -> Result<()> {
    if !rate.is_finite() || rate <= 0.0 {
        return Err(ConverterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: rate.to_string(),
            reason: "Rate must be a finite number greater than zero".to_string(),
        });
    }
    validate_range(field_name, rate, f64::MIN_POSITIVE, 1e9)
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(ConverterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}
