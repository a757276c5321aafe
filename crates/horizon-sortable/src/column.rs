//! Column specifier parsing.
//!
//! A specifier is either a bare column name (`"name"`) or a
//! relation-qualified name (`"author.name"`). The qualified form splits
//! into a relation and a column, but the *original* specifier string stays
//! the token used in the `sort` query parameter.

use crate::error::{Error, Result};

/// A parsed column specifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    column: String,
    parameter: String,
}

impl ColumnSpec {
    /// Parse a specifier using the configured relation separator.
    ///
    /// A specifier containing the separator must split into exactly two
    /// segments; anything else is a
    /// [`MalformedColumnSpecifier`](Error::MalformedColumnSpecifier) error.
    /// An empty separator disables relation parsing entirely (it would
    /// otherwise match every specifier).
    pub fn parse(specifier: &str, separator: &str) -> Result<Self> {
        if separator.is_empty() {
            tracing::warn!("empty relation separator configured; treating specifiers as plain columns");
            return Ok(Self::plain(specifier));
        }

        if !specifier.contains(separator) {
            return Ok(Self::plain(specifier));
        }

        let segments: Vec<&str> = specifier.split(separator).collect();
        if segments.len() != 2 {
            return Err(Error::malformed_column_specifier(specifier, separator));
        }

        Ok(Self {
            column: segments[1].to_string(),
            parameter: specifier.to_string(),
        })
    }

    fn plain(specifier: &str) -> Self {
        Self {
            column: specifier.to_string(),
            parameter: specifier.to_string(),
        }
    }

    /// The column name, used for icon lookup and title defaulting.
    pub fn column(&self) -> &str {
        &self.column
    }

    /// The sort parameter: the original specifier string, used for
    /// sort-state comparisons and toggling.
    pub fn parameter(&self) -> &str {
        &self.parameter
    }
}
