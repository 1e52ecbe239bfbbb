//! # Shell
//!
//! Top-level composition: a loading gate that opens after a fixed delay, a
//! two-route table (home or not-found), and the fixed order of home sections.

pub mod gate;
pub mod page;
pub mod router;

pub use gate::{LoadingGate, ShellPhase};
pub use page::{HomeSection, Screen, Shell, HOME_SECTIONS};
pub use router::{Route, HOME_PATH, NOT_FOUND_PATH};
