//! Catalog browsing module.
//!
//! Contains the filter criteria, the filter/sort pipeline, and facet
//! extraction for building the filter sidebar.

mod criteria;
mod facets;
mod pipeline;

pub use criteria::{FilterCriteria, MissingValuePolicy, SortKey};
pub use facets::FacetSummary;
