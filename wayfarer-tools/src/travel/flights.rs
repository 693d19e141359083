use crate::prelude::*;

use super::{normalize_destination, seed};

const AIRLINES: &[(&str, &str)] = &[
    ("Skyward", "SW"),
    ("Meridian Air", "MA"),
    ("Polar Wings", "PW"),
    ("Coastal Jet", "CJ"),
    ("Aurora Airways", "AU"),
];

/// Input for looking up flights
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetFlightsInput {
    /// Destination city or region to fly to
    pub destination: String,
}

/// Tool for listing flight options to a destination
pub struct GetFlightsTool;

impl GetFlightsTool {
    /// Build the listing; same destination, same listing
    pub fn listing(destination: &str) -> String {
        let destination = normalize_destination(destination);
        let seed = seed(destination);

        let mut lines = vec![format!("Flights to {}:", destination)];
        for i in 0..3u32 {
            let n = seed.rotate_left(i * 7);
            let (airline, code) = AIRLINES[(n as usize + i as usize) % AIRLINES.len()];
            let number = 100 + n % 900;
            let hour = 6 + (n / 7 + i * 5) % 15;
            let minute = (n / 3) % 4 * 15;
            let stops = match (n / 11) % 3 {
                0 => "nonstop".to_string(),
                1 => "1 stop".to_string(),
                s => format!("{} stops", s),
            };
            let price = 180 + (n / 13) % 820;

            lines.push(format!(
                "- {} {}{} departs {:02}:{:02}, {}, ${}",
                airline, code, number, hour, minute, stops, price
            ));
        }

        lines.join("\n")
    }
}

impl Tool for GetFlightsTool {
    type Input = GetFlightsInput;

    fn name(&self) -> &str {
        "get_flights"
    }

    fn description(&self) -> &str {
        "Get flight options to a travel destination, with airline, departure time, stops and price."
    }

    async fn execute(&self, input: Self::Input) -> std::result::Result<ToolResult, ToolError> {
        Ok(Self::listing(&input.destination).into())
    }
}
