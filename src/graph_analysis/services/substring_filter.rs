use std::cell::Cell;

/// SubstringFilter - suppresses identifiers containing a substring
///
/// Matching is case-sensitive. An empty substring disables the filter.
/// The filter remembers how many identifiers it rejected so callers can warn
/// about a filter that had no effect.
#[derive(Debug, Default)]
pub struct SubstringFilter {
    substring: String,
    rejected: Cell<usize>,
}

impl SubstringFilter {
    pub fn new(substring: &str) -> Self {
        Self {
            substring: substring.to_string(),
            rejected: Cell::new(0),
        }
    }

    pub fn is_active(&self) -> bool {
        !self.substring.is_empty()
    }

    /// Returns `true` if `identifier` must be dropped
    pub fn rejects(&self, identifier: &str) -> bool {
        let is_match = self.is_active() && identifier.contains(self.substring.as_str());
        if is_match {
            self.rejected.set(self.rejected.get() + 1);
        }
        is_match
    }

    /// Number of identifiers rejected so far (repeat sightings counted)
    pub fn rejected_count(&self) -> usize {
        self.rejected.get()
    }

    pub fn substring(&self) -> &str {
        &self.substring
    }
}
