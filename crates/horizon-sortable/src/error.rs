//! Error types for sort-link rendering.

/// Result type alias for sort-link operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while rendering a sort link.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A relation-qualified column specifier did not split into exactly
    /// two segments.
    #[error("malformed column specifier '{specifier}': expected exactly two segments around '{separator}'")]
    MalformedColumnSpecifier {
        specifier: String,
        separator: String,
    },
}

impl Error {
    /// Create a malformed-specifier error.
    pub fn malformed_column_specifier(
        specifier: impl Into<String>,
        separator: impl Into<String>,
    ) -> Self {
        Self::MalformedColumnSpecifier {
            specifier: specifier.into(),
            separator: separator.into(),
        }
    }
}
