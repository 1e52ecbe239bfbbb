//! # Folio Core
//!
//! All behavior of the portfolio site - the server crate only renders what
//! this crate decides.
//!
//! ## Architecture
//!
//! - `catalog/` - The fixed project records and the category filter
//! - `gallery` - Category selection state over the catalog
//! - `motion/` - Visibility latches, stagger timing, text reveal, scheduled tasks
//! - `shell/` - Loading gate, router and home page composition
//! - `contact/` - Contact form validation, status and delivery
//! - `content/` - Static marketing copy (profile, skills, links)
//! - `theme` - Light/dark preference
//! - `config` - Site configuration (file + environment)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use folio_core::gallery::GalleryView;
//!
//! let mut gallery = GalleryView::new();
//! gallery.select_category("Backend");
//! assert_eq!(gallery.visible_projects()[0].title, "Blog API");
//! ```

pub mod catalog;
pub mod config;
pub mod contact;
pub mod content;
pub mod error;
pub mod gallery;
pub mod motion;
pub mod shell;
pub mod theme;

pub use error::{ConfigError, ContactError};
