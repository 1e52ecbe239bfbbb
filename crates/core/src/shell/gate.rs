//! # Loading Gate
//!
//! `Loading -> Ready`, taken automatically once the delay elapses. The timer
//! belongs to the gate and is cancelled with it.

use serde::Serialize;
use std::time::Duration;
use tokio::sync::watch;

use crate::motion::ScheduledTask;

/// Default time the loading screen stays up
pub const DEFAULT_LOADING_DELAY: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShellPhase {
    /// Initial state, shows the loading screen
    Loading,
    /// Terminal state, real content is rendered
    Ready,
}

#[derive(Debug)]
pub struct LoadingGate {
    phase: watch::Receiver<ShellPhase>,
    delay: Duration,
    _timer: ScheduledTask,
}

impl LoadingGate {
    /// Start the gate. Must be called inside a tokio runtime.
    pub fn mount(delay: Duration) -> Self {
        let (tx, rx) = watch::channel(ShellPhase::Loading);
        let timer = ScheduledTask::once(delay, move || {
            if tx.send(ShellPhase::Ready).is_ok() {
                tracing::debug!("Loading gate opened");
            }
        });
        Self {
            phase: rx,
            delay,
            _timer: timer,
        }
    }

    pub fn phase(&self) -> ShellPhase {
        *self.phase.borrow()
    }

    pub fn is_ready(&self) -> bool {
        self.phase() == ShellPhase::Ready
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Resolve once the gate is open
    pub async fn wait_ready(&self) -> ShellPhase {
        let mut rx = self.phase.clone();
        let phase = match rx.wait_for(|phase| *phase == ShellPhase::Ready).await {
            Ok(phase) => *phase,
            Err(_) => self.phase(),
        };
        phase
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_starts_loading() {
        let gate = LoadingGate::mount(DEFAULT_LOADING_DELAY);
        assert_eq!(gate.phase(), ShellPhase::Loading);
        assert_eq!(gate.delay(), DEFAULT_LOADING_DELAY);
    }

    #[tokio::test(start_paused = true)]
    async fn test_ready_after_delay_not_before() {
        let gate = LoadingGate::mount(DEFAULT_LOADING_DELAY);

        tokio::time::sleep(Duration::from_millis(999)).await;
        tokio::task::yield_now().await;
        assert!(!gate.is_ready());

        tokio::time::sleep(Duration::from_millis(5)).await;
        tokio::task::yield_now().await;
        assert!(gate.is_ready());
    }

    #[tokio::test(start_paused = true)]
    async fn test_wait_ready() {
        let gate = LoadingGate::mount(Duration::from_millis(250));
        let start = tokio::time::Instant::now();
        assert_eq!(gate.wait_ready().await, ShellPhase::Ready);
        assert!(start.elapsed() >= Duration::from_millis(250));
    }

    #[tokio::test(start_paused = true)]
    async fn test_ready_is_terminal() {
        let gate = LoadingGate::mount(Duration::from_millis(10));
        gate.wait_ready().await;
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(gate.is_ready());
    }
}
