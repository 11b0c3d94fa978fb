//! Input validation limits for request payloads

/// Maximum length for actor and movie identifiers (256 bytes)
pub const MAX_ID_LEN: usize = 256;

/// Maximum length for actor and movie names (512 bytes)
pub const MAX_NAME_LEN: usize = 512;

/// Maximum request body accepted by the HTTP layer (1MB)
pub const MAX_BODY_SIZE: usize = 1024 * 1024;

/// Validation error type
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    EmptyId { field: &'static str },
    IdTooLong { field: &'static str, len: usize, max: usize },
    EmptyName,
    NameTooLong { len: usize, max: usize },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId { field } => write!(f, "{} cannot be empty", field),
            Self::IdTooLong { field, len, max } => {
                write!(f, "{} too long: {} bytes (max {})", field, len, max)
            }
            Self::EmptyName => write!(f, "name cannot be empty"),
            Self::NameTooLong { len, max } => {
                write!(f, "name too long: {} bytes (max {})", len, max)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate an identifier; `field` is the wire name used in messages
pub fn validate_id(field: &'static str, id: &str) -> Result<(), ValidationError> {
    if id.is_empty() {
        return Err(ValidationError::EmptyId { field });
    }
    if id.len() > MAX_ID_LEN {
        return Err(ValidationError::IdTooLong {
            field,
            len: id.len(),
            max: MAX_ID_LEN,
        });
    }
    Ok(())
}

/// Validate a display name
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if name.len() > MAX_NAME_LEN {
        return Err(ValidationError::NameTooLong {
            len: name.len(),
            max: MAX_NAME_LEN,
        });
    }
    Ok(())
}
