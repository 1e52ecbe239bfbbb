//! # Visibility Latch
//!
//! Edge-triggered one-shot boolean: false until the observed intersection
//! ratio first reaches the threshold, then true forever.

/// Fraction of the element that must be visible (10%)
pub const DEFAULT_THRESHOLD: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityLatch {
    threshold: f64,
    visible: bool,
}

impl Default for VisibilityLatch {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

impl VisibilityLatch {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            visible: false,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Feed an intersection ratio. Returns true only on the false -> true edge.
    pub fn observe(&mut self, ratio: f64) -> bool {
        if self.visible || ratio < self.threshold {
            return false;
        }
        self.visible = true;
        true
    }
}
