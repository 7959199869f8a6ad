//! Validation of requested list sizes.

use crate::error::GenerateError;

/// Smallest non-targeted list ever produced; smaller requests are raised to this.
pub const MIN_SIZE: usize = 50;

/// Largest list either generator will be asked for.
pub const MAX_SIZE: usize = 1_000_000;

/// Turns a raw size request into a non-targeted list size.
///
/// Negative and oversized requests are rejected; anything under
/// [`MIN_SIZE`] is clamped up to it.
pub fn resolve_size(requested: i64) -> Result<usize, GenerateError> {
    if requested < 0 {
        return Err(GenerateError::NegativeSize(requested));
    }
    let size = check_upper_bound(requested)?;
    Ok(size.max(MIN_SIZE))
}

/// Turns a raw word budget into a keyword list bound. Zero is allowed.
pub fn resolve_max_words(requested: i64) -> Result<usize, GenerateError> {
    if requested < 0 {
        return Err(GenerateError::NegativeMaxWords(requested));
    }
    check_upper_bound(requested)
}

fn check_upper_bound(requested: i64) -> Result<usize, GenerateError> {
    match usize::try_from(requested) {
        Ok(n) if n <= MAX_SIZE => Ok(n),
        _ => Err(GenerateError::SizeTooLarge {
            requested,
            limit: MAX_SIZE,
        }),
    }
}
