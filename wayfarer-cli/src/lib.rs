//! Interactive travel designer
//!
//! This crate provides:
//! - Environment-driven [`Config`] and the shared model provider
//! - [`TravelDesigner`], the destination, booking and explore pipeline
//! - The console flow: welcome, mood prompt and per-stage output

pub mod config;
pub mod designer;
mod error;
pub mod hooks;
pub mod presentation;
pub mod prompt;
pub mod spinner;

use std::io::Write;

use rustyline::DefaultEditor;

pub use config::Config;
pub use designer::{DesignerError, Itinerary, Stage, TravelDesigner};
pub use error::CliError;
pub use hooks::LoggingHook;
pub use prompt::{read_mood, LineReader};
pub use spinner::{Spinner, SpinnerHook};

use presentation::{format_stage, WELCOME};

/// Run one session on the terminal
///
/// Returns `Ok(None)` if the user left at the prompt.
pub async fn run(designer: &TravelDesigner) -> Result<Option<Itinerary>, CliError> {
    let mut editor = DefaultEditor::new()?;
    let mut stdout = std::io::stdout();
    run_with(designer, &mut editor, &mut stdout).await
}

/// Run one session over any input and output
///
/// Each stage's output is written as soon as that stage completes, so a
/// failed stage still leaves the earlier output on screen.
pub async fn run_with<R, W>(
    designer: &TravelDesigner,
    reader: &mut R,
    out: &mut W,
) -> Result<Option<Itinerary>, CliError>
where
    R: LineReader + ?Sized,
    W: Write,
{
    writeln!(out, "{}", WELCOME)?;
    out.flush()?;

    let Some(mood) = read_mood(reader)? else {
        return Ok(None);
    };

    let mut write_error = None;
    let itinerary = designer
        .plan(&mood, |stage, text| {
            if write_error.is_some() {
                return;
            }
            if let Err(e) = writeln!(out, "{}", format_stage(stage, text)).and_then(|_| out.flush())
            {
                write_error = Some(e);
            }
        })
        .await?;

    if let Some(e) = write_error {
        return Err(e.into());
    }
    Ok(Some(itinerary))
}
