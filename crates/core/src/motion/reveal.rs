//! # Text Reveal
//!
//! The hero's role line types itself out one character per tick and stops
//! once the full text is shown.

use std::ops::ControlFlow;
use std::time::Duration;

use super::timer::ScheduledTask;

/// Role line typed out under the owner's name
pub const ROLE_TEXT: &str = "MERN Stack Developer";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextReveal {
    target: String,
    /// Byte length of the revealed prefix, always on a char boundary
    shown: usize,
}

impl TextReveal {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            shown: 0,
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn visible_text(&self) -> &str {
        &self.target[..self.shown]
    }

    pub fn is_complete(&self) -> bool {
        self.shown == self.target.len()
    }

    /// Reveal one more character. Returns false once there is nothing left.
    pub fn tick(&mut self) -> bool {
        match self.target[self.shown..].chars().next() {
            Some(c) => {
                self.shown += c.len_utf8();
                true
            }
            None => false,
        }
    }

    /// Every intermediate string from the first character to the full text
    pub fn frames(&self) -> Vec<String> {
        let mut reveal = TextReveal::new(self.target.clone());
        let mut frames = Vec::new();
        while reveal.tick() {
            frames.push(reveal.visible_text().to_string());
        }
        frames
    }

    /// Ticks needed to reveal the whole text
    pub fn steps(&self) -> usize {
        self.target.chars().count()
    }
}

/// Drive a reveal on a timer, calling `on_frame` with the text after each
/// tick. The returned task stops itself when the text is complete and is
/// cancelled when dropped.
pub fn run_reveal<F>(mut reveal: TextReveal, interval: Duration, mut on_frame: F) -> ScheduledTask
where
    F: FnMut(&str) + Send + 'static,
{
    ScheduledTask::repeating(interval, move || {
        if !reveal.tick() {
            return ControlFlow::Break(());
        }
        on_frame(reveal.visible_text());
        if reveal.is_complete() {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_tick_appends_one_char() {
        let mut reveal = TextReveal::new("Rust");
        assert_eq!(reveal.visible_text(), "");
        assert!(reveal.tick());
        assert_eq!(reveal.visible_text(), "R");
        reveal.tick();
        reveal.tick();
        reveal.tick();
        assert!(reveal.is_complete());
        assert!(!reveal.tick());
        assert_eq!(reveal.visible_text(), "Rust");
    }

    #[test]
    fn test_multibyte_characters() {
        let reveal = TextReveal::new("héllo");
        let frames = reveal.frames();
        assert_eq!(frames.len(), 5);
        assert_eq!(frames[1], "hé");
        assert_eq!(reveal.steps(), 5);
    }

    #[test]
    fn test_role_text_frames() {
        let frames = TextReveal::new(ROLE_TEXT).frames();
        assert_eq!(frames.first().map(String::as_str), Some("M"));
        assert_eq!(frames.last().map(String::as_str), Some(ROLE_TEXT));
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_reveal_stops_when_complete() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let task = run_reveal(TextReveal::new("abc"), Duration::from_millis(100), move |text| {
            sink.lock().unwrap().push(text.to_string());
        });

        tokio::time::sleep(Duration::from_millis(1000)).await;
        tokio::task::yield_now().await;
        assert_eq!(*seen.lock().unwrap(), vec!["a", "ab", "abc"]);
        assert!(task.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_reveal_cancelled_on_drop() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let task = run_reveal(TextReveal::new(ROLE_TEXT), Duration::from_millis(100), move |text| {
            sink.lock().unwrap().push(text.to_string());
        });

        tokio::time::sleep(Duration::from_millis(250)).await;
        drop(task);
        tokio::time::sleep(Duration::from_millis(1000)).await;
        assert_eq!(seen.lock().unwrap().len(), 2);
    }
}
