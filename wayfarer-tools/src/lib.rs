#[cfg(feature = "travel")]
pub mod travel;

#[cfg(feature = "travel")]
pub use travel::booking_tools;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use schemars::JsonSchema;
    pub use serde::{Deserialize, Serialize};
    pub use wayfarer_core::{Tool, ToolError, ToolResult};
}
