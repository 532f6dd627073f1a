//! Builder for OData `$filter` expressions

use std::fmt::Display;

/// A conjunction of `<field> eq '<value>'` clauses, e.g.
/// `OrderID eq '1000010' and Sequence eq '0'`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ODataFilter {
    clauses: Vec<String>,
}

impl ODataFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// append an equality clause on a string property
    pub fn eq(mut self, field: &str, value: &str) -> Self {
        // OData escapes a quote inside a string literal by doubling it
        let value = value.replace('\'', "''");
        self.clauses.push(format!("{field} eq '{value}'"));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }
}

impl Display for ODataFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.clauses.join(" and "))
    }
}
