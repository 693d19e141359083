// Travel lookup tools for the booking stage
mod flights;
mod hotels;

pub use flights::{GetFlightsInput, GetFlightsTool};
pub use hotels::{SuggestHotelsInput, SuggestHotelsTool};

use wayfarer_core::tool::{box_tool, DynTool};

/// Returns the booking stage's tools: flight lookup and hotel lookup
pub fn booking_tools() -> Vec<Box<dyn DynTool>> {
    vec![box_tool(GetFlightsTool), box_tool(SuggestHotelsTool)]
}

/// Destination as the tools see it: trimmed, with a stand-in when blank
pub(crate) fn normalize_destination(destination: &str) -> &str {
    let trimmed = destination.trim();
    if trimmed.is_empty() {
        "your destination"
    } else {
        trimmed
    }
}

/// Stable seed derived from the destination's bytes
///
/// The same destination always produces the same listings.
pub(crate) fn seed(destination: &str) -> u32 {
    destination
        .bytes()
        .fold(7u32, |acc, b| acc.wrapping_mul(31).wrapping_add(u32::from(b)))
}
