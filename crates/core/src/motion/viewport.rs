//! # Viewport Observation
//!
//! Capability interface for "tell me once when this element is visible
//! enough", independent of how intersection is actually measured, plus a
//! geometric implementation driven by a scroll offset.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::latch::VisibilityLatch;

/// Fired at most once, when the target first crosses its threshold
pub type ThresholdCallback = Box<dyn FnOnce() + Send>;

/// Something that can report viewport intersection for named targets
pub trait Viewport {
    /// Register `on_crossed` to fire once when `target`'s intersection ratio
    /// first reaches `threshold`. Fires immediately if it already does.
    fn observe(&mut self, target: &str, threshold: f64, on_crossed: ThresholdCallback);
}

/// Vertical extent of a placed element, in page coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
struct Span {
    top: f64,
    height: f64,
}

struct Observation {
    target: String,
    latch: VisibilityLatch,
    callback: ThresholdCallback,
}

/// Viewport over a vertically laid out page
///
/// Elements are placed with [`ScrollViewport::place`]; scrolling recomputes
/// every pending observation and fires (then forgets) those that crossed.
pub struct ScrollViewport {
    height: f64,
    offset: f64,
    spans: HashMap<String, Span>,
    pending: Vec<Observation>,
}

impl ScrollViewport {
    pub fn new(height: f64) -> Self {
        Self {
            height: height.max(0.0),
            offset: 0.0,
            spans: HashMap::new(),
            pending: Vec::new(),
        }
    }

    /// Place (or move) an element
    pub fn place(&mut self, target: &str, top: f64, height: f64) {
        self.spans.insert(
            target.to_string(),
            Span {
                top,
                height: height.max(0.0),
            },
        );
        self.evaluate();
    }

    /// Scroll so the top of the viewport sits at `offset`.
    /// Returns how many observations fired.
    pub fn scroll_to(&mut self, offset: f64) -> usize {
        self.offset = offset.max(0.0);
        self.evaluate()
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Number of observations still waiting to fire
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Visible fraction of `target`, or `None` if it was never placed
    pub fn intersection_ratio(&self, target: &str) -> Option<f64> {
        self.spans.get(target).map(|span| self.ratio_of(*span))
    }

    fn ratio_of(&self, span: Span) -> f64 {
        let view_top = self.offset;
        let view_bottom = self.offset + self.height;
        if span.height == 0.0 {
            let inside = span.top >= view_top && span.top <= view_bottom;
            return if inside { 1.0 } else { 0.0 };
        }
        let top = span.top.max(view_top);
        let bottom = (span.top + span.height).min(view_bottom);
        ((bottom - top).max(0.0) / span.height).clamp(0.0, 1.0)
    }

    fn evaluate(&mut self) -> usize {
        let pending = std::mem::take(&mut self.pending);
        let mut fired = 0;
        for mut observation in pending {
            let ratio = match self.spans.get(&observation.target) {
                Some(span) => self.ratio_of(*span),
                None => 0.0,
            };
            if observation.latch.observe(ratio) {
                tracing::debug!(section = %observation.target, ratio, "Threshold crossed");
                (observation.callback)();
                fired += 1;
            } else {
                self.pending.push(observation);
            }
        }
        fired
    }
}

impl Viewport for ScrollViewport {
    fn observe(&mut self, target: &str, threshold: f64, on_crossed: ThresholdCallback) {
        self.pending.push(Observation {
            target: target.to_string(),
            latch: VisibilityLatch::new(threshold),
            callback: on_crossed,
        });
        self.evaluate();
    }
}

/// Entrance state of one section instance, latched by a viewport
#[derive(Debug, Clone)]
pub struct SectionReveal {
    section: String,
    visible: Arc<AtomicBool>,
}

impl SectionReveal {
    /// Start observing `section` on `viewport`
    pub fn attach<V>(viewport: &mut V, section: &str, threshold: f64) -> Self
    where
        V: Viewport + ?Sized,
    {
        let visible = Arc::new(AtomicBool::new(false));
        let flag = visible.clone();
        viewport.observe(
            section,
            threshold,
            Box::new(move || flag.store(true, Ordering::SeqCst)),
        );
        Self {
            section: section.to_string(),
            visible,
        }
    }

    pub fn section(&self) -> &str {
        &self.section
    }

    pub fn is_visible(&self) -> bool {
        self.visible.load(Ordering::SeqCst)
    }
}
