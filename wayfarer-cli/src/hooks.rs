//! Logging of agent activity

use wayfarer_core::tool::format_tool_call;
use wayfarer_core::{AgentEvent, AgentHook};

/// Logs one agent's events through the `log` facade
///
/// Model calls go to `debug`, tool activity to `info` and failures to
/// `warn`.
#[derive(Debug, Clone)]
pub struct LoggingHook {
    agent: String,
}

impl LoggingHook {
    pub fn new(agent: impl Into<String>) -> Self {
        Self {
            agent: agent.into(),
        }
    }
}

impl AgentHook for LoggingHook {
    fn on_event(&self, event: &AgentEvent) {
        let agent = &self.agent;

        match event {
            AgentEvent::RunStarted { input, .. } => {
                log::debug!("{}: run started with {:?}", agent, input)
            }
            AgentEvent::RunCompleted { duration, .. } => {
                log::debug!("{}: run completed in {:?}", agent, duration)
            }
            AgentEvent::RunFailed { error, duration } => {
                log::warn!("{}: run failed after {:?}: {}", agent, duration, error)
            }
            AgentEvent::ModelCallStarted {
                message_count,
                tool_count,
                ..
            } => log::debug!(
                "{}: model call with {} messages, {} tools",
                agent,
                message_count,
                tool_count
            ),
            AgentEvent::ModelCallCompleted {
                tokens,
                duration,
                stop_reason,
                ..
            } => log::debug!(
                "{}: model call completed in {:?} ({:?}, {} tokens)",
                agent,
                duration,
                stop_reason,
                tokens.map(|t| t.total()).unwrap_or(0)
            ),
            AgentEvent::ModelCallFailed { error, .. } => {
                log::warn!("{}: model call failed: {}", agent, error)
            }
            AgentEvent::ToolRequested { name, input, .. } => {
                log::info!("{}: {}", agent, format_tool_call(name, input))
            }
            AgentEvent::ToolCompleted {
                name,
                output,
                duration,
                ..
            } => log::info!(
                "{}: {} returned {} bytes in {:?}",
                agent,
                name,
                output.as_text().len(),
                duration
            ),
            AgentEvent::ToolFailed { name, error, .. } => {
                log::warn!("{}: {} failed: {}", agent, name, error)
            }
        }
    }
}
