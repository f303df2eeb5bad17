use crate::errors::{CarshareError, Result};
use crate::model::EntityKind;

/// Column width of every NAME column in the schema
pub const MAX_NAME_LEN: usize = 200;

/// Validate and normalize an entity name
///
/// Surrounding whitespace is trimmed. The trimmed name must be non-empty and
/// at most [`MAX_NAME_LEN`] characters.
///
/// # Errors
/// Returns `Validation` for blank or over-long names.
pub fn validate_name(entity: EntityKind, raw: &str) -> Result<String> {
    let name = raw.trim();

    if name.is_empty() {
        return Err(CarshareError::Validation {
            reason: format!("{} can't be empty!", capitalized(entity)),
        });
    }

    let len = name.chars().count();
    if len > MAX_NAME_LEN {
        return Err(CarshareError::Validation {
            reason: format!(
                "{} is too long: {} characters (max {})",
                capitalized(entity),
                len,
                MAX_NAME_LEN
            ),
        });
    }

    Ok(name.to_string())
}

fn capitalized(entity: EntityKind) -> &'static str {
    match entity {
        EntityKind::Company => "Company name",
        EntityKind::Car => "Car name",
        EntityKind::Customer => "Customer name",
    }
}
