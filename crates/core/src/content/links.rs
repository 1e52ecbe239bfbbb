//! Contact details, social profiles and navigation links.

use chrono::Datelike;
use serde::Serialize;

use crate::shell::{HomeSection, HOME_SECTIONS};

#[derive(Debug, Clone, Serialize)]
pub struct ContactInfo {
    pub title: &'static str,
    pub value: &'static str,
    pub link: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct SocialLink {
    pub name: &'static str,
    pub url: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub href: String,
}

pub static CONTACT_INFO: [ContactInfo; 2] = [
    ContactInfo {
        title: "Email",
        value: "pkbind1431@gmail.com",
        link: "mailto:pkbind1431@gmail.com",
    },
    ContactInfo {
        title: "Location",
        value: "Noida, India",
        link: "https://maps.google.com/?q=Noida,India",
    },
];

pub static SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        name: "GitHub",
        url: "https://github.com/PrakashBind/",
    },
    SocialLink {
        name: "LinkedIn",
        url: "https://www.linkedin.com/in/prakash-bind/",
    },
    SocialLink {
        name: "Twitter",
        url: "https://x.com/Prakashbind1431",
    },
];

/// Header/footer links to each home section, in page order
pub fn quick_links() -> Vec<NavLink> {
    HOME_SECTIONS
        .iter()
        .map(|section: &HomeSection| NavLink {
            label: section.nav_label(),
            href: format!("/#{}", section.anchor()),
        })
        .collect()
}

/// Footer copyright line for the current year
pub fn copyright(owner: &str) -> String {
    copyright_for(chrono::Local::now().year(), owner)
}

fn copyright_for(year: i32, owner: &str) -> String {
    format!("© {} {}. All rights reserved.", year, owner)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quick_links_follow_page_order() {
        let hrefs: Vec<String> = quick_links().into_iter().map(|l| l.href).collect();
        assert_eq!(
            hrefs,
            vec!["/#home", "/#about", "/#projects", "/#skills", "/#contact"]
        );
    }

    #[test]
    fn test_copyright() {
        assert_eq!(
            copyright_for(2025, "Prakash Bind"),
            "© 2025 Prakash Bind. All rights reserved."
        );
        assert!(copyright("X").contains("X. All rights reserved."));
    }
}
