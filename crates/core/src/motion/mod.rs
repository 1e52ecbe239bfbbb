//! # Motion
//!
//! Presentation timing: one-shot visibility latches driven by a viewport,
//! staggered entrance poses, the hero's typed role text, and the cancellable
//! scheduled tasks all timers run on.

pub mod latch;
pub mod reveal;
pub mod stagger;
pub mod timer;
pub mod viewport;

pub use latch::{VisibilityLatch, DEFAULT_THRESHOLD};
pub use reveal::{run_reveal, TextReveal, ROLE_TEXT};
pub use stagger::{Entrance, Pose, Stagger};
pub use timer::ScheduledTask;
pub use viewport::{ScrollViewport, SectionReveal, ThresholdCallback, Viewport};
