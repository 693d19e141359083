//! Animated spinner shown while a model call is in flight

use std::io::{stdout, Write};
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    cursor,
    terminal::{self, ClearType},
    QueueableCommand,
};
use parking_lot::Mutex;
use tokio::task::JoinHandle;
use wayfarer_core::{AgentEvent, AgentHook};

const BARS: &[char] = &['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];
const NUM_BARS: usize = 8;
const FRAME_DURATION: Duration = Duration::from_millis(80);

/// An animated spinner that runs in the background
///
/// Frames are drawn under a lock that `stop` also takes, so no frame lands
/// after the line is cleared.
pub struct Spinner {
    running: Arc<Mutex<bool>>,
    handle: Option<JoinHandle<()>>,
}

impl Spinner {
    /// Start a new spinner with the given message
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(message: &str) -> Self {
        let running = Arc::new(Mutex::new(true));
        let running_clone = Arc::clone(&running);
        let message = message.to_string();

        let handle = tokio::spawn(async move {
            // Each bar has its own height (0-7) and velocity
            let mut heights = [3i8, 5, 4, 6, 3, 5, 4, 3];
            let mut velocities = [1i8, -1, 1, -1, 1, -1, 1, -1];

            loop {
                let frame: String = heights.iter().map(|&h| BARS[h as usize]).collect();
                {
                    let running = running_clone.lock();
                    if !*running {
                        break;
                    }
                    print!("\r\x1b[2m{} {}\x1b[0m", frame, message);
                    let _ = stdout().flush();
                }

                // Bounce between 1 and 7
                for i in 0..NUM_BARS {
                    heights[i] += velocities[i];
                    if heights[i] <= 1 || heights[i] >= 7 {
                        velocities[i] = -velocities[i];
                        heights[i] = heights[i].clamp(1, 7);
                    }
                }
                tokio::time::sleep(FRAME_DURATION).await;
            }
        });

        Self {
            running,
            handle: Some(handle),
        }
    }

    /// Stop the spinner and clear the line
    pub fn stop(self) {
        drop(self);
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        let mut running = self.running.lock();
        if *running {
            *running = false;
            let mut out = stdout();
            let _ = out
                .queue(cursor::MoveToColumn(0))
                .and_then(|out| out.queue(terminal::Clear(ClearType::CurrentLine)))
                .and_then(|out| out.flush());
        }
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

/// Shows a [`Spinner`] between each model call's start and its end
#[derive(Clone)]
pub struct SpinnerHook {
    message: Arc<str>,
    current: Arc<Mutex<Option<Spinner>>>,
}

impl SpinnerHook {
    pub fn new(message: &str) -> Self {
        Self {
            message: Arc::from(message),
            current: Arc::new(Mutex::new(None)),
        }
    }

    /// Whether a spinner is currently on screen
    pub fn is_spinning(&self) -> bool {
        self.current.lock().is_some()
    }
}

impl AgentHook for SpinnerHook {
    fn on_event(&self, event: &AgentEvent) {
        match event {
            AgentEvent::ModelCallStarted { .. } => {
                let mut current = self.current.lock();
                if current.is_none() {
                    *current = Some(Spinner::new(&self.message));
                }
            }
            AgentEvent::ModelCallCompleted { .. }
            | AgentEvent::ModelCallFailed { .. }
            | AgentEvent::RunFailed { .. } => {
                if let Some(spinner) = self.current.lock().take() {
                    spinner.stop();
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[tokio::test]
    async fn test_spinner_hook_follows_model_calls() {
        let hook = SpinnerHook::new("thinking");
        assert!(!hook.is_spinning());

        hook.on_event(&AgentEvent::ModelCallStarted {
            message_count: 1,
            tool_count: 0,
            timestamp: Instant::now(),
        });
        assert!(hook.is_spinning());

        hook.on_event(&AgentEvent::ModelCallFailed {
            error: "offline".to_string(),
            duration: Duration::from_millis(1),
        });
        assert!(!hook.is_spinning());
    }

    #[tokio::test]
    async fn test_spinner_stop_is_idempotent_with_drop() {
        let spinner = Spinner::new("thinking");
        tokio::time::sleep(Duration::from_millis(10)).await;
        spinner.stop();
    }
}
