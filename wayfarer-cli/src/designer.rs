//! The three-stage travel pipeline
//!
//! Mood goes to the destination agent; the trimmed destination goes, as is,
//! to both the booking agent (which may call the flight and hotel tools)
//! and the explore agent.

use std::fmt;
use std::sync::Arc;

use thiserror::Error;
use wayfarer_core::{Agent, AgentError, AgentHook, ModelProvider};
use wayfarer_tools::booking_tools;

use crate::config::Config;
use crate::error::CliError;
use crate::hooks::LoggingHook;

pub const DESTINATION_INSTRUCTIONS: &str =
    "You recommend travel destinations based on the user's mood.";
pub const BOOKING_INSTRUCTIONS: &str = "You provide flight and hotel information using tools.";
pub const EXPLORE_INSTRUCTIONS: &str =
    "You suggest food and places to explore in the destination.";

/// One step of the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Destination,
    Booking,
    Explore,
}

impl Stage {
    /// All stages in the order they run
    pub const ALL: [Stage; 3] = [Stage::Destination, Stage::Booking, Stage::Explore];

    /// Name of the agent that runs this stage
    pub fn agent_name(self) -> &'static str {
        match self {
            Stage::Destination => "DestinationAgent",
            Stage::Booking => "BookingAgent",
            Stage::Explore => "ExploreAgent",
        }
    }

    fn instructions(self) -> &'static str {
        match self {
            Stage::Destination => DESTINATION_INSTRUCTIONS,
            Stage::Booking => BOOKING_INSTRUCTIONS,
            Stage::Explore => EXPLORE_INSTRUCTIONS,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Destination => write!(f, "destination"),
            Stage::Booking => write!(f, "booking"),
            Stage::Explore => write!(f, "explore"),
        }
    }
}

/// A stage failed; later stages did not run
#[derive(Debug, Error)]
#[error("{} failed in the {stage} stage", .stage.agent_name())]
pub struct DesignerError {
    pub stage: Stage,
    #[source]
    pub source: AgentError,
}

/// The three outputs of one pipeline run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Itinerary {
    pub destination: String,
    pub booking: String,
    pub explore: String,
}

/// Three agents over one shared provider
pub struct TravelDesigner {
    destination: Agent,
    booking: Agent,
    explore: Agent,
}

impl TravelDesigner {
    /// Build the three agents; each gets a [`LoggingHook`]
    pub fn new(provider: Arc<dyn ModelProvider>, config: &Config) -> Result<Self, CliError> {
        let build = |stage: Stage| -> Result<Agent, CliError> {
            let mut builder = Agent::builder()
                .name(stage.agent_name())
                .provider(Arc::clone(&provider))
                .with_system_prompt(stage.instructions())
                .with_max_turns(config.max_turns);
            if stage == Stage::Booking {
                builder = builder.add_tools(booking_tools());
            }

            let agent = builder
                .build()
                .map_err(|e| CliError::Config(e.to_string()))?;
            agent.add_hook(LoggingHook::new(stage.agent_name()));
            Ok(agent)
        };

        Ok(Self {
            destination: build(Stage::Destination)?,
            booking: build(Stage::Booking)?,
            explore: build(Stage::Explore)?,
        })
    }

    /// The agent behind a stage
    pub fn agent(&self, stage: Stage) -> &Agent {
        match stage {
            Stage::Destination => &self.destination,
            Stage::Booking => &self.booking,
            Stage::Explore => &self.explore,
        }
    }

    /// Register a hook on all three agents
    pub fn add_hook<H>(&self, hook: H)
    where
        H: AgentHook + Clone + 'static,
    {
        for stage in Stage::ALL {
            self.agent(stage).add_hook(hook.clone());
        }
    }

    async fn run_stage(&self, stage: Stage, input: &str) -> Result<String, DesignerError> {
        log::debug!("{} <- {:?}", stage.agent_name(), input);

        self.agent(stage)
            .run(input)
            .await
            .map(|response| response.text)
            .map_err(|source| DesignerError { stage, source })
    }

    /// Suggest a destination for a mood; surrounding whitespace is removed
    pub async fn suggest_destination(&self, mood: &str) -> Result<String, DesignerError> {
        let text = self.run_stage(Stage::Destination, mood).await?;
        Ok(text.trim().to_string())
    }

    /// Flight and hotel information for a destination
    pub async fn booking_info(&self, destination: &str) -> Result<String, DesignerError> {
        self.run_stage(Stage::Booking, destination).await
    }

    /// Food and places to explore at a destination
    pub async fn explore(&self, destination: &str) -> Result<String, DesignerError> {
        self.run_stage(Stage::Explore, destination).await
    }

    /// Run all three stages in order
    ///
    /// `on_stage` sees each output as soon as its stage completes. The first
    /// failure stops the pipeline.
    pub async fn plan<F>(&self, mood: &str, mut on_stage: F) -> Result<Itinerary, DesignerError>
    where
        F: FnMut(Stage, &str),
    {
        let destination = self.suggest_destination(mood).await?;
        on_stage(Stage::Destination, &destination);

        let booking = self.booking_info(&destination).await?;
        on_stage(Stage::Booking, &booking);

        let explore = self.explore(&destination).await?;
        on_stage(Stage::Explore, &explore);

        Ok(Itinerary {
            destination,
            booking,
            explore,
        })
    }
}
