//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias.
//! Degenerate pattern input (zero counts, non-positive spacing, too few path points)
//! is not an error: generators return empty or partial sequences instead. Errors are
//! reserved for configuration that cannot be interpreted at all.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Returns an [`Error::InvalidConfig`] naming `field` when `value` is NaN or infinite.
pub(crate) fn ensure_finite(field: &str, value: f32) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(Error::InvalidConfig(format!("{field} must be finite")))
    }
}

/// Vector variant of [`ensure_finite`].
pub(crate) fn ensure_finite_vec3(field: &str, value: glam::Vec3) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(Error::InvalidConfig(format!(
            "{field} must have finite components"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_config_message_is_prefixed() {
        let err = Error::InvalidConfig("at least one prototype is required".into());
        assert_eq!(
            err.to_string(),
            "invalid configuration: at least one prototype is required"
        );
    }

    #[test]
    fn ensure_finite_names_the_field() {
        assert!(ensure_finite("radius", 2.0).is_ok());
        let err = ensure_finite("radius", f32::NAN).unwrap_err();
        assert_eq!(err.to_string(), "invalid configuration: radius must be finite");
        assert!(ensure_finite_vec3("center", glam::Vec3::new(0.0, f32::INFINITY, 0.0)).is_err());
    }
}
