//! Current multi-column sort state.
//!
//! The `sort` query parameter holds a comma-separated list of tokens, each
//! a column parameter with an optional leading `-` for descending order.
//! Token order is the user's multi-column sort priority and is preserved
//! by every operation except toggling the clicked column.

use std::fmt;

use crate::query::{QueryContext, SORT_PARAM};

/// Sort direction of a single column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    /// Ascending order (bare token).
    Ascending,
    /// Descending order (`-` prefixed token).
    Descending,
}

impl SortDirection {
    /// Whether this is ascending order.
    pub fn is_ascending(&self) -> bool {
        matches!(self, Self::Ascending)
    }

    /// Whether this is descending order.
    pub fn is_descending(&self) -> bool {
        matches!(self, Self::Descending)
    }
}

/// One entry of the comma-separated `sort` value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortToken {
    column: String,
    direction: SortDirection,
}

impl SortToken {
    /// Create an ascending token.
    pub fn ascending(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            direction: SortDirection::Ascending,
        }
    }

    /// Create a descending token.
    pub fn descending(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            direction: SortDirection::Descending,
        }
    }

    /// Parse a raw token, stripping a single leading `-`.
    pub fn parse(raw: &str) -> Self {
        match raw.strip_prefix('-') {
            Some(column) => Self::descending(column),
            None => Self::ascending(raw),
        }
    }

    /// The column parameter this token sorts by.
    pub fn column(&self) -> &str {
        &self.column
    }

    /// The direction this token sorts in.
    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    /// The raw query-string form of this token.
    pub fn encode(&self) -> String {
        match self.direction {
            SortDirection::Ascending => self.column.clone(),
            SortDirection::Descending => format!("-{}", self.column),
        }
    }
}

impl fmt::Display for SortToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.direction.is_descending() {
            write!(f, "-")?;
        }
        write!(f, "{}", self.column)
    }
}

/// Ordered sequence of active sort tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortState {
    pub(crate) tokens: Vec<SortToken>,
}

impl SortState {
    /// Create an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a comma-separated `sort` value.
    ///
    /// Empty tokens from stray commas are skipped.
    pub fn parse(value: &str) -> Self {
        Self {
            tokens: value
                .split(',')
                .filter(|raw| !raw.is_empty())
                .map(SortToken::parse)
                .collect(),
        }
    }

    /// Read the state from the current request's `sort` parameter.
    pub fn from_query(context: &QueryContext) -> Self {
        match context.get(SORT_PARAM) {
            Some(value) => Self::parse(value),
            None => Self::new(),
        }
    }

    /// The active tokens in priority order.
    pub fn tokens(&self) -> &[SortToken] {
        &self.tokens
    }

    /// Whether no column is currently sorted.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Direction of the first token matching the given parameter.
    ///
    /// `None` means the column is not part of the current sort.
    pub fn direction_of(&self, parameter: &str) -> Option<SortDirection> {
        self.tokens
            .iter()
            .find(|token| token.column() == parameter)
            .map(SortToken::direction)
    }

    /// Whether any token sorts by the given parameter, in either direction.
    pub fn contains(&self, parameter: &str) -> bool {
        self.direction_of(parameter).is_some()
    }

    /// The comma-separated query value, or `None` when the state is empty.
    pub fn encode(&self) -> Option<String> {
        if self.tokens.is_empty() {
            return None;
        }

        Some(
            self.tokens
                .iter()
                .map(SortToken::encode)
                .collect::<Vec<_>>()
                .join(","),
        )
    }
}
