//! The active company-filter set

use serde::Serialize;
use std::collections::BTreeSet;

/// Unordered set of selected company names.
///
/// Stored sorted so every derived output is independent of toggle order.
/// An empty filter matches every idea.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CompanyFilter {
    selected: BTreeSet<String>,
}

impl CompanyFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle a company; returns whether it is selected afterwards
    pub fn toggle(&mut self, company: &str) -> bool {
        if self.selected.remove(company) {
            false
        } else {
            self.selected.insert(company.to_string());
            true
        }
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn contains(&self, company: &str) -> bool {
        self.selected.contains(company)
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.selected.iter()
    }

    /// Does an idea with these companies pass the filter?
    pub fn matches(&self, companies: &[String]) -> bool {
        self.is_empty() || companies.iter().any(|c| self.selected.contains(c))
    }
}

impl<S: Into<String>> FromIterator<S> for CompanyFilter {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        CompanyFilter {
            selected: iter.into_iter().map(Into::into).collect(),
        }
    }
}
