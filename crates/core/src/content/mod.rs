//! # Site Content
//!
//! Static copy for the hero, about, skills, contact and footer areas.
//! Read-only, compiled in.

pub mod links;
pub mod profile;
pub mod skills;

pub use links::{copyright, quick_links, ContactInfo, NavLink, SocialLink, CONTACT_INFO, SOCIAL_LINKS};
pub use profile::{Profile, Strength, PROFILE, STRENGTHS};
pub use skills::{Skill, SkillCategory, WorkflowStep, SKILL_CATEGORIES, WORKFLOW};
