//! # Gallery
//!
//! Category-filtered view over the catalog. The selected category is the
//! only mutable state; the visible cards are recomputed from it on demand.

use serde::Serialize;
use std::time::Duration;

use crate::catalog::{filter_projects, selector_labels, Project, Selection, CATALOG};
use crate::motion::Stagger;

/// One selector button
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectorButton {
    pub label: &'static str,
    pub active: bool,
}

/// Everything a project card displays
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectCard {
    /// Stable key, the project id
    pub key: u32,
    pub title: &'static str,
    pub image: &'static str,
    pub badge: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub demo_link: &'static str,
    pub source_link: &'static str,
    /// Entrance delay relative to the grid becoming visible
    #[serde(skip)]
    pub entrance_delay: Duration,
}

impl ProjectCard {
    fn new(project: &'static Project, index: usize) -> Self {
        Self {
            key: project.id,
            title: project.title,
            image: project.image,
            badge: project.category.label(),
            description: project.description,
            tags: project.tags,
            demo_link: project.demo_link,
            source_link: project.source_link,
            entrance_delay: Stagger::SECTION.delay_for(index),
        }
    }
}

#[derive(Debug, Clone)]
pub struct GalleryView {
    catalog: &'static [Project],
    selected: Selection,
}

impl Default for GalleryView {
    fn default() -> Self {
        Self::new()
    }
}

impl GalleryView {
    /// Gallery over the built-in catalog, "All" selected
    pub fn new() -> Self {
        Self::with_catalog(&CATALOG)
    }

    pub fn with_catalog(catalog: &'static [Project]) -> Self {
        Self {
            catalog,
            selected: Selection::All,
        }
    }

    /// Change the selected category. Unknown labels are kept and match nothing.
    pub fn select_category(&mut self, label: &str) {
        self.selected = Selection::parse(label);
        tracing::debug!(category = label, "Gallery category selected");
    }

    pub fn selected(&self) -> &Selection {
        &self.selected
    }

    /// Projects matching the current selection, in catalog order
    pub fn visible_projects(&self) -> Vec<&'static Project> {
        filter_projects(self.catalog.iter(), self.selected.label())
    }

    pub fn cards(&self) -> Vec<ProjectCard> {
        self.visible_projects()
            .into_iter()
            .enumerate()
            .map(|(index, project)| ProjectCard::new(project, index))
            .collect()
    }

    pub fn selectors(&self) -> Vec<SelectorButton> {
        let current = self.selected.label();
        selector_labels()
            .into_iter()
            .map(|label| SelectorButton {
                label,
                active: label == current,
            })
            .collect()
    }
}
