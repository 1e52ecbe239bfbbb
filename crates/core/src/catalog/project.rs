//! # Project Records

use serde::{Deserialize, Serialize};

/// Closed set of project classifications
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Frontend,
    Backend,
    #[serde(rename = "Full Stack")]
    FullStack,
}

impl Category {
    /// Every category, in selector order
    pub fn all() -> [Category; 3] {
        [Category::Frontend, Category::Backend, Category::FullStack]
    }

    /// Label shown on badges and selector buttons
    pub fn label(&self) -> &'static str {
        match self {
            Category::Frontend => "Frontend",
            Category::Backend => "Backend",
            Category::FullStack => "Full Stack",
        }
    }

    /// Exact label match; labels are case-sensitive
    pub fn from_label(label: &str) -> Option<Self> {
        Category::all().into_iter().find(|c| c.label() == label)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A portfolio entry. Defined at build time, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    /// Unique within the catalog
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    /// Cover image URI
    pub image: &'static str,
    /// Display-only technology chips
    pub tags: &'static [&'static str],
    pub category: Category,
    pub demo_link: &'static str,
    pub source_link: &'static str,
}
