//! # Page Composition
//!
//! What the shell shows for a path once the gate is open.

use serde::Serialize;
use std::time::Duration;

use super::gate::{LoadingGate, ShellPhase};
use super::router::Route;
use crate::motion::Stagger;

/// Sections of the home page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HomeSection {
    Hero,
    About,
    Projects,
    Skills,
    Contact,
}

/// Fixed top-to-bottom order of the home page
pub const HOME_SECTIONS: [HomeSection; 5] = [
    HomeSection::Hero,
    HomeSection::About,
    HomeSection::Projects,
    HomeSection::Skills,
    HomeSection::Contact,
];

impl HomeSection {
    /// Element id, also the fragment used by navigation links
    pub fn anchor(&self) -> &'static str {
        match self {
            HomeSection::Hero => "home",
            HomeSection::About => "about",
            HomeSection::Projects => "projects",
            HomeSection::Skills => "skills",
            HomeSection::Contact => "contact",
        }
    }

    /// Label used in header and footer navigation
    pub fn nav_label(&self) -> &'static str {
        match self {
            HomeSection::Hero => "Home",
            HomeSection::About => "About",
            HomeSection::Projects => "Projects",
            HomeSection::Skills => "Skills",
            HomeSection::Contact => "Contact",
        }
    }

    /// Entrance timing of the section's children.
    /// The hero animates on mount and is not scroll-triggered.
    pub fn stagger(&self) -> Option<Stagger> {
        match self {
            HomeSection::Hero => None,
            HomeSection::About => Some(Stagger::ABOUT),
            HomeSection::Projects | HomeSection::Skills | HomeSection::Contact => {
                Some(Stagger::SECTION)
            }
        }
    }
}

/// What to render
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "screen", content = "sections")]
pub enum Screen {
    Loading,
    Home(Vec<HomeSection>),
    NotFound,
}

impl Screen {
    /// The screen for `route` once the gate is open
    pub fn for_route(route: Route) -> Self {
        match route {
            Route::Home => Screen::Home(HOME_SECTIONS.to_vec()),
            Route::NotFound => Screen::NotFound,
        }
    }
}

/// Loading gate plus routing
#[derive(Debug)]
pub struct Shell {
    gate: LoadingGate,
}

impl Shell {
    /// Mount the shell; the gate starts closed
    pub fn mount(loading_delay: Duration) -> Self {
        tracing::debug!(delay_ms = loading_delay.as_millis() as u64, "Shell mounted");
        Self {
            gate: LoadingGate::mount(loading_delay),
        }
    }

    pub fn phase(&self) -> ShellPhase {
        self.gate.phase()
    }

    pub fn gate(&self) -> &LoadingGate {
        &self.gate
    }

    /// Screen for `path` in the current phase
    pub fn screen(&self, path: &str) -> Screen {
        match self.gate.phase() {
            ShellPhase::Loading => Screen::Loading,
            ShellPhase::Ready => Screen::for_route(Route::resolve(path)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_section_order() {
        let anchors: Vec<&str> = HOME_SECTIONS.iter().map(|s| s.anchor()).collect();
        assert_eq!(anchors, vec!["home", "about", "projects", "skills", "contact"]);
    }

    #[test]
    fn test_screen_for_route() {
        assert_eq!(
            Screen::for_route(Route::Home),
            Screen::Home(HOME_SECTIONS.to_vec())
        );
        assert_eq!(Screen::for_route(Route::NotFound), Screen::NotFound);
    }

    #[tokio::test(start_paused = true)]
    async fn test_shell_loading_then_routes() {
        let shell = Shell::mount(Duration::from_millis(1000));
        assert_eq!(shell.screen("/"), Screen::Loading);
        assert_eq!(shell.screen("/missing"), Screen::Loading);

        shell.gate().wait_ready().await;

        assert_eq!(shell.screen("/"), Screen::Home(HOME_SECTIONS.to_vec()));
        assert_eq!(shell.screen("/not-found"), Screen::NotFound);
        assert_eq!(shell.screen("/missing"), Screen::NotFound);
    }

    #[test]
    fn test_hero_is_not_scroll_triggered() {
        assert!(HomeSection::Hero.stagger().is_none());
        assert_eq!(HomeSection::About.stagger(), Some(Stagger::ABOUT));
    }
}
