//! # Project Catalog
//!
//! The fixed, read-only list of project records and the category filter
//! applied to it.

pub mod data;
pub mod filter;
pub mod project;

pub use data::CATALOG;
pub use filter::{categories_present, filter_projects, selector_labels, Selection, ALL_LABEL};
pub use project::{Category, Project};
