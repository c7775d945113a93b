//! Client-side search over the fetched job list.

use crate::models::{Job, LISTING_CATEGORIES};

/// Value of the category selector that matches every listing.
pub const ALL_CATEGORIES: &str = "all";

/// Category half of the filter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// Parse the value of the category selector; `"all"` (or blank) means no
    /// restriction.
    pub fn from_value(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case(ALL_CATEGORIES) {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(value.to_string())
        }
    }

    /// Selector value for this filter.
    pub fn value(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Only(c) => c,
        }
    }

    /// Exact category match, or anything for [`CategoryFilter::All`].
    pub fn matches(&self, job: &Job) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => job.category.as_deref() == Some(c.as_str()),
        }
    }

    /// The options offered by the category selector, as `(value, label)`.
    pub fn options() -> Vec<(&'static str, &'static str)> {
        let mut options = vec![(ALL_CATEGORIES, "All Categories")];
        options.extend(LISTING_CATEGORIES.iter().map(|c| (*c, *c)));
        options
    }
}

/// Search term plus category.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct JobFilter {
    pub search: String,
    pub category: CategoryFilter,
}

impl JobFilter {
    pub fn new(search: impl Into<String>, category: CategoryFilter) -> Self {
        Self {
            search: search.into(),
            category,
        }
    }

    /// A job matches when its category matches AND the search term appears,
    /// case-insensitively, in its title or description. An empty term matches
    /// everything.
    pub fn matches(&self, job: &Job) -> bool {
        if !self.category.matches(job) {
            return false;
        }
        let term = self.search.to_lowercase();
        job.title.to_lowercase().contains(&term) || job.description.to_lowercase().contains(&term)
    }

    /// Jobs that match, in their original order.
    pub fn apply(&self, jobs: &[Job]) -> Vec<Job> {
        jobs.iter().filter(|job| self.matches(job)).cloned().collect()
    }
}
