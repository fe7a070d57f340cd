use std::time::{Duration, Instant};

/// Facts about the current invocation, passed to whoever reports on it
#[derive(Debug, Clone, Copy)]
pub struct RunContext {
    started: Instant,
}

impl RunContext {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    pub fn started(&self) -> Instant {
        self.started
    }

    /// Time since the run started, truncated to whole seconds
    pub fn elapsed(&self) -> Duration {
        Duration::from_secs(self.started.elapsed().as_secs())
    }
}

impl Default for RunContext {
    fn default() -> Self {
        Self::new()
    }
}
