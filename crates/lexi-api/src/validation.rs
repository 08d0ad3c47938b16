use crate::error::ApiError;

/// Longest accepted learner name or item id, in characters
pub const MAX_KEY_LENGTH: usize = 255;

fn validate_key(kind: &str, value: &str) -> Result<(), ApiError> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Err(ApiError::Validation(format!("{kind} cannot be empty")));
    }

    if trimmed.chars().count() > MAX_KEY_LENGTH {
        return Err(ApiError::Validation(format!(
            "{kind} must be at most {MAX_KEY_LENGTH} characters"
        )));
    }

    Ok(())
}

/// Validate a learner name taken from the path
///
/// # Examples
/// ```
/// use lexi_api::validation::validate_learner;
///
/// assert!(validate_learner("ana").is_ok());
/// assert!(validate_learner("   ").is_err());
/// ```
pub fn validate_learner(learner: &str) -> Result<(), ApiError> {
    validate_key("Learner name", learner)
}

/// Validate a catalog item identifier
///
/// Item ids are stored verbatim, so surrounding whitespace is refused rather
/// than silently creating a second record for the same word.
pub fn validate_item_id(item: &str) -> Result<(), ApiError> {
    validate_key("Item id", item)?;

    if item.trim() != item {
        return Err(ApiError::Validation(
            "Item id cannot start or end with whitespace".to_string(),
        ));
    }

    Ok(())
}

/// Validate every id in a catalog and bound its size
pub fn validate_catalog(items: &[String], max_size: usize) -> Result<(), ApiError> {
    if items.len() > max_size {
        return Err(ApiError::Validation(format!(
            "Catalog holds {} items, the limit is {max_size}",
            items.len()
        )));
    }

    items.iter().try_for_each(|item| validate_item_id(item))
}
