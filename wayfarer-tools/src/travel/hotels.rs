use crate::prelude::*;

use super::{normalize_destination, seed};

/// Name patterns, lowest tier first; `{}` is the destination
const TIERS: &[(&str, u32, u32)] = &[
    ("{} Backpackers Lodge", 2, 45),
    ("Hotel {} Central", 3, 95),
    ("{} Boutique Suites", 4, 160),
    ("The Grand {}", 5, 280),
];

/// Input for suggesting hotels
#[derive(Debug, Deserialize, JsonSchema)]
pub struct SuggestHotelsInput {
    /// Destination city or region to stay in
    pub destination: String,
}

/// Tool for suggesting hotels at a destination
pub struct SuggestHotelsTool;

impl SuggestHotelsTool {
    /// Build the suggestions; same destination, same suggestions
    pub fn listing(destination: &str) -> String {
        let destination = normalize_destination(destination);
        let seed = seed(destination);

        let mut lines = vec![format!("Hotels in {}:", destination)];
        for (i, (pattern, stars, base_rate)) in TIERS.iter().enumerate() {
            let n = seed.rotate_right(i as u32 * 5);
            let rate = base_rate + n % (base_rate / 2);
            let rating = 70 + n % 30;

            lines.push(format!(
                "- {} ({}\u{2605}) ${}/night, guest rating {}.{}/10",
                pattern.replace("{}", destination),
                stars,
                rate,
                rating / 10,
                rating % 10
            ));
        }

        lines.join("\n")
    }
}

impl Tool for SuggestHotelsTool {
    type Input = SuggestHotelsInput;

    fn name(&self) -> &str {
        "suggest_hotels"
    }

    fn description(&self) -> &str {
        "Suggest hotels at a travel destination across price ranges, with nightly rate and guest rating."
    }

    async fn execute(&self, input: Self::Input) -> std::result::Result<ToolResult, ToolError> {
        Ok(Self::listing(&input.destination).into())
    }
}
