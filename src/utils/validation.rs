use crate::utils::error::{DemoError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DemoError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_empty_list<T>(field_name: &str, values: &[T]) -> Result<()> {
    if values.is_empty() {
        return Err(DemoError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: "[]".to_string(),
            reason: "List must contain at least one element".to_string(),
        });
    }
    Ok(())
}

pub fn validate_elements(field_name: &str, values: &[String]) -> Result<()> {
    validate_non_empty_list(field_name, values)?;
    for (i, value) in values.iter().enumerate() {
        validate_non_empty_string(&format!("{}[{}]", field_name, i), value)?;
    }
    Ok(())
}
