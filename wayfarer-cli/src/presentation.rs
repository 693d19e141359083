//! Console text for the travel designer

use crate::designer::Stage;

pub const WELCOME: &str = "🌍 Welcome to AI Travel Designer!\n";
pub const MOOD_PROMPT: &str = "🧭 What's your travel mood (relaxing, adventure, etc)? → ";

/// Shown next to the spinner while a model call is in flight
pub const THINKING: &str = "planning";

/// The block printed once a stage has produced its output
pub fn format_stage(stage: Stage, text: &str) -> String {
    match stage {
        Stage::Destination => format!("\n✈️ Destination Suggested: {}", text),
        Stage::Booking => format!("\n🏨 Booking Info:\n{}", text),
        Stage::Explore => format!("\n🍽️ Explore Suggestions:\n{}", text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_stage() {
        assert_eq!(
            format_stage(Stage::Destination, "Kyoto"),
            "\n✈️ Destination Suggested: Kyoto"
        );
        assert_eq!(
            format_stage(Stage::Booking, "Flights to Kyoto:"),
            "\n🏨 Booking Info:\nFlights to Kyoto:"
        );
        assert_eq!(
            format_stage(Stage::Explore, "- ramen"),
            "\n🍽️ Explore Suggestions:\n- ramen"
        );
    }

    #[test]
    fn test_multiline_text_is_kept() {
        let text = "line one\nline two";
        assert!(format_stage(Stage::Explore, text).ends_with(text));
    }
}
