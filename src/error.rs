use thiserror::Error;

/// Errors raised by the locale and translation layer.
#[derive(Debug, Error)]
pub enum I18nError {
    /// A locale outside the registry was requested. Never fatal.
    #[error("Invalid locale: '{0}'")]
    InvalidLocale(String),

    /// Neither the requested locale nor the default locale has a bundle.
    #[error("Translation not found for {locale}/{page}")]
    TranslationMissing { locale: String, page: String },

    /// The content source failed for a reason other than a missing bundle.
    #[error("Content source unavailable for {locale}/{page}: {reason}")]
    ContentSourceUnavailable {
        locale: String,
        page: String,
        reason: String,
    },

    /// A bundle exists but does not match the requested shape.
    #[error("Malformed bundle for {locale}/{page}: {reason}")]
    MalformedBundle {
        locale: String,
        page: String,
        reason: String,
    },

    /// The locale registry configuration violates its invariants.
    #[error("Invalid locale registry: {0}")]
    InvalidRegistry(String),
}

impl I18nError {
    /// Stable machine-readable code, used in HTTP error bodies.
    pub fn code(&self) -> &'static str {
        match self {
            I18nError::InvalidLocale(_) => "INVALID_LOCALE",
            I18nError::TranslationMissing { .. } => "TRANSLATION_MISSING",
            I18nError::ContentSourceUnavailable { .. } => "CONTENT_SOURCE_UNAVAILABLE",
            I18nError::MalformedBundle { .. } => "MALFORMED_BUNDLE",
            I18nError::InvalidRegistry(_) => "INVALID_REGISTRY",
        }
    }
}

/// Failure reported by a content source for a single `(locale, page)` fetch.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("bundle not found")]
    NotFound,

    #[error("{0}")]
    Unavailable(String),
}

impl From<std::io::Error> for ContentError {
    fn from(err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            ContentError::NotFound
        } else {
            ContentError::Unavailable(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ContentError {
    fn from(err: serde_json::Error) -> Self {
        ContentError::Unavailable(format!("invalid JSON: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(I18nError::InvalidLocale("xx".into()).code(), "INVALID_LOCALE");
        assert_eq!(
            I18nError::TranslationMissing {
                locale: "en".into(),
                page: "home".into()
            }
            .code(),
            "TRANSLATION_MISSING"
        );
    }

    #[test]
    fn test_translation_missing_message() {
        let err = I18nError::TranslationMissing {
            locale: "en".into(),
            page: "pricing".into(),
        };
        assert_eq!(err.to_string(), "Translation not found for en/pricing");
    }

    #[test]
    fn test_io_not_found_maps_to_not_found() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        assert!(matches!(ContentError::from(io), ContentError::NotFound));
    }

    #[test]
    fn test_io_other_maps_to_unavailable() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        match ContentError::from(io) {
            ContentError::Unavailable(reason) => assert!(reason.contains("denied")),
            other => panic!("unexpected: {:?}", other),
        }
    }
}
