//! Input validation errors.

use thiserror::Error;

/// Errors raised when a value fed to the machine is not a usable character.
///
/// These are contract violations by the caller. A character that merely
/// breaks the naming rule is a normal classification outcome and never
/// produces an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Invalid input U+{code_point:04X}: {reason}")]
    InvalidInput {
        code_point: u32,
        reason: &'static str,
    },
}

/// Reject characters that cannot be part of any input stream.
pub fn validate_character(character: char) -> Result<char, InputError> {
    if character == '\0' {
        return Err(InputError::InvalidInput {
            code_point: 0,
            reason: "NUL character",
        });
    }
    Ok(character)
}

/// Convert a raw code point into a validated character.
pub fn validate_code_point(code_point: u32) -> Result<char, InputError> {
    let character = char::from_u32(code_point).ok_or(InputError::InvalidInput {
        code_point,
        reason: "not a Unicode scalar value",
    })?;
    validate_character(character)
}
