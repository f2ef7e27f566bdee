/// Playlist attribute validation
use crate::error::InvalidAttributeError;

/// Characters that may not appear in user-supplied playlist attributes
pub const INVALID_CHARACTERS: [char; 3] = ['"', '\'', '\\'];

/// A string attribute is valid when it is not blank and contains none of
/// [`INVALID_CHARACTERS`].
pub fn is_valid_string(value: &str) -> bool {
    !value.trim().is_empty() && !value.contains(&INVALID_CHARACTERS[..])
}

/// Check one named attribute
pub fn validate_attribute(attribute: &str, value: &str) -> Result<(), InvalidAttributeError> {
    if is_valid_string(value) {
        Ok(())
    } else {
        Err(InvalidAttributeError::Value(format!(
            "{attribute} [{value}] contains illegal characters or is blank"
        )))
    }
}
