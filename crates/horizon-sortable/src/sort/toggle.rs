//! The per-column toggle cycle.

use super::state::{SortState, SortToken};

impl SortState {
    /// Compute the next state after clicking the given column.
    ///
    /// Each column cycles absent → ascending → descending → absent. The
    /// clicked column keeps its position while flipping to descending and
    /// drops out entirely on the third click; every other token is carried
    /// through unchanged, in order. Tokens are compared by their raw
    /// query-string form, so the match is exact.
    pub fn toggle(&self, parameter: &str) -> SortState {
        let descending = format!("-{}", parameter);
        let mut tokens = Vec::with_capacity(self.tokens.len() + 1);
        let mut found = false;

        for token in &self.tokens {
            let raw = token.encode();
            if raw == parameter {
                // Ascending on this column: flip to descending in place.
                found = true;
                tokens.push(SortToken::descending(parameter));
            } else if raw == descending {
                // Descending: remove the column from the sort.
                found = true;
            } else {
                tokens.push(token.clone());
            }
        }

        if !found {
            // New column starts ascending at the lowest priority.
            tokens.push(SortToken::ascending(parameter));
        }

        SortState { tokens }
    }
}
