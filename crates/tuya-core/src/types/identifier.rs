//! Identifier checks for resource paths.

use crate::Result;
use crate::error::InvalidInputError;

/// A cloud record that may carry an identifier.
///
/// Records decoded from the API do not always include their id, so the
/// accessor is optional. Façade operations taking a record call
/// [`require_id`] before building a path from it.
pub trait Identifiable {
    /// Human-readable record kind, used in error messages.
    const KIND: &'static str;

    /// Returns the identifier, if the record has one.
    fn id(&self) -> Option<&str>;
}

/// Returns the record's identifier or fails with
/// [`InvalidInputError::MissingIdentifier`].
pub fn require_id<I: Identifiable>(record: &I) -> Result<&str> {
    let id = record
        .id()
        .ok_or(InvalidInputError::MissingIdentifier { kind: I::KIND })?;
    validate_id(id)
}

/// Checks that an identifier can be substituted into a resource path.
///
/// Ids must be non-empty and free of whitespace and of the `/`, `?`, `#`
/// and `%` characters.
pub fn validate_id(id: &str) -> Result<&str> {
    if id.is_empty() {
        return Err(InvalidInputError::Identifier {
            value: id.to_string(),
            reason: "must not be empty".to_string(),
        }
        .into());
    }

    if let Some(c) = id
        .chars()
        .find(|c| c.is_whitespace() || matches!(c, '/' | '?' | '#' | '%'))
    {
        return Err(InvalidInputError::Identifier {
            value: id.to_string(),
            reason: format!("contains reserved character {:?}", c),
        }
        .into());
    }

    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    struct Thing(Option<String>);

    impl Identifiable for Thing {
        const KIND: &'static str = "thing";

        fn id(&self) -> Option<&str> {
            self.0.as_deref()
        }
    }

    #[test]
    fn require_id_returns_identifier() {
        let thing = Thing(Some("vdevo123".to_string()));
        assert_eq!(require_id(&thing).unwrap(), "vdevo123");
    }

    #[test]
    fn require_id_rejects_missing_identifier() {
        let err = require_id(&Thing(None)).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidInput(InvalidInputError::MissingIdentifier { kind: "thing" })
        ));
        assert_eq!(err.to_string(), "invalid input: thing has no identifier");
    }

    #[test]
    fn validate_id_rejects_empty() {
        assert!(validate_id("").is_err());
    }

    #[test]
    fn validate_id_rejects_path_characters() {
        assert!(validate_id("dev/../users").is_err());
        assert!(validate_id("dev?x=1").is_err());
        assert!(validate_id("dev 1").is_err());
        assert!(validate_id("dev%2F").is_err());
    }

    #[test]
    fn validate_id_accepts_typical_ids() {
        assert!(validate_id("dev-1").is_ok());
        assert!(validate_id("6c9a2f1e8b0d_x").is_ok());
    }
}
