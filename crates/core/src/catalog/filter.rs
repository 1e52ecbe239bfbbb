//! # Category Filter
//!
//! Pure mapping from (projects, selected label) to the ordered matching
//! sub-sequence. "All" is the identity; an unknown label matches nothing.

use super::project::{Category, Project};

/// Sentinel label that disables filtering
pub const ALL_LABEL: &str = "All";

/// A parsed category selection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    /// No filtering
    #[default]
    All,
    /// Keep projects of exactly this category
    Category(Category),
    /// A label that names no category; matches nothing
    Unmatched(String),
}

impl Selection {
    pub fn parse(label: &str) -> Self {
        if label == ALL_LABEL {
            return Selection::All;
        }
        match Category::from_label(label) {
            Some(category) => Selection::Category(category),
            None => Selection::Unmatched(label.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Selection::All => ALL_LABEL,
            Selection::Category(category) => category.label(),
            Selection::Unmatched(label) => label,
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        match self {
            Selection::All => true,
            Selection::Category(category) => project.category == *category,
            Selection::Unmatched(_) => false,
        }
    }

    /// Apply the selection, preserving input order
    pub fn apply<'a, I>(&self, projects: I) -> Vec<&'a Project>
    where
        I: IntoIterator<Item = &'a Project>,
    {
        match self {
            Selection::All => projects.into_iter().collect(),
            _ => projects.into_iter().filter(|p| self.matches(p)).collect(),
        }
    }
}

/// Filter `projects` by a selector label.
///
/// Takes any sequence of project references so a filtered result can be
/// filtered again.
pub fn filter_projects<'a, I>(projects: I, selected: &str) -> Vec<&'a Project>
where
    I: IntoIterator<Item = &'a Project>,
{
    Selection::parse(selected).apply(projects)
}

/// Labels of the selector buttons, in display order
pub fn selector_labels() -> Vec<&'static str> {
    std::iter::once(ALL_LABEL)
        .chain(Category::all().iter().map(|c| c.label()))
        .collect()
}

/// Distinct categories in order of first appearance
pub fn categories_present<'a, I>(projects: I) -> Vec<Category>
where
    I: IntoIterator<Item = &'a Project>,
{
    let mut seen = Vec::new();
    for project in projects {
        if !seen.contains(&project.category) {
            seen.push(project.category);
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CATALOG;

    fn titles(projects: &[&Project]) -> Vec<&'static str> {
        projects.iter().map(|p| p.title).collect()
    }

    #[test]
    fn test_all_is_identity() {
        let all = filter_projects(CATALOG.iter(), ALL_LABEL);
        assert_eq!(all.len(), CATALOG.len());
        for (filtered, original) in all.iter().zip(CATALOG.iter()) {
            assert_eq!(filtered.id, original.id);
        }
    }

    #[test]
    fn test_backend_yields_blog_api() {
        let backend = filter_projects(CATALOG.iter(), "Backend");
        assert_eq!(titles(&backend), vec!["Blog API"]);
    }

    #[test]
    fn test_preserves_catalog_order() {
        let full_stack = filter_projects(CATALOG.iter(), "Full Stack");
        assert_eq!(
            titles(&full_stack),
            vec!["Netflix Clone", "E-Commerce Platform", "Task Management App"]
        );

        let frontend = filter_projects(CATALOG.iter(), "Frontend");
        assert_eq!(titles(&frontend), vec!["Weather Dashboard", "Portfolio Website"]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        for label in selector_labels() {
            let once = filter_projects(CATALOG.iter(), label);
            let twice = filter_projects(once.iter().copied(), label);
            assert_eq!(once, twice, "filter not idempotent for {label}");
        }
    }

    #[test]
    fn test_unknown_category_is_empty_not_error() {
        assert!(filter_projects(CATALOG.iter(), "Mobile").is_empty());
        // labels are case-sensitive
        assert!(filter_projects(CATALOG.iter(), "backend").is_empty());
        assert!(filter_projects(CATALOG.iter(), "").is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert!(filter_projects(std::iter::empty(), ALL_LABEL).is_empty());
    }

    #[test]
    fn test_selection_parse() {
        assert_eq!(Selection::parse("All"), Selection::All);
        assert_eq!(
            Selection::parse("Full Stack"),
            Selection::Category(Category::FullStack)
        );
        let unmatched = Selection::parse("Mobile");
        assert_eq!(unmatched.label(), "Mobile");
    }

    #[test]
    fn test_selector_labels_order() {
        assert_eq!(
            selector_labels(),
            vec!["All", "Frontend", "Backend", "Full Stack"]
        );
    }

    #[test]
    fn test_categories_present() {
        assert_eq!(
            categories_present(CATALOG.iter()),
            vec![Category::FullStack, Category::Frontend, Category::Backend]
        );
    }
}
