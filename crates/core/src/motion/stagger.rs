//! # Staggered Entrances
//!
//! Children of an animated section move from a hidden pose (transparent,
//! pushed down) to a visible pose, each one a fixed step later than the
//! previous so they arrive in sequence.

use serde::Serialize;
use std::time::Duration;

/// Visual state of an animated element
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Pose {
    pub opacity: f32,
    /// Vertical offset in pixels
    pub offset_y: f32,
}

impl Pose {
    pub const HIDDEN: Pose = Pose {
        opacity: 0.0,
        offset_y: 20.0,
    };
    pub const VISIBLE: Pose = Pose {
        opacity: 1.0,
        offset_y: 0.0,
    };
}

/// Timing of one child's entrance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entrance {
    pub pose: Pose,
    pub delay: Duration,
    pub duration: Duration,
}

/// Per-child delay schedule: `base_delay + index * step`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stagger {
    pub base_delay: Duration,
    pub step: Duration,
    pub duration: Duration,
}

impl Stagger {
    pub const fn from_millis(base_delay: u64, step: u64, duration: u64) -> Self {
        Self {
            base_delay: Duration::from_millis(base_delay),
            step: Duration::from_millis(step),
            duration: Duration::from_millis(duration),
        }
    }

    /// Projects, skills and contact sections
    pub const SECTION: Stagger = Stagger::from_millis(0, 100, 500);
    /// About section, slower and wider spaced
    pub const ABOUT: Stagger = Stagger::from_millis(0, 200, 600);
    /// Rows inside a skill category
    pub const SKILL_ROW: Stagger = Stagger::from_millis(200, 100, 500);
    /// Level bars filling up inside a skill row
    pub const SKILL_BAR: Stagger = Stagger::from_millis(300, 100, 1000);
    /// Development workflow timeline
    pub const WORKFLOW_STEP: Stagger = Stagger::from_millis(200, 100, 500);

    pub fn delay_for(&self, index: usize) -> Duration {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        self.base_delay.saturating_add(self.step.saturating_mul(index))
    }

    /// Entrance of child `index` given the section's latch state
    pub fn entrance(&self, index: usize, visible: bool) -> Entrance {
        Entrance {
            pose: if visible { Pose::VISIBLE } else { Pose::HIDDEN },
            delay: self.delay_for(index),
            duration: self.duration,
        }
    }
}
