use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A constraint the solver could not satisfy for a step or a whole route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Violation {
    pub cause: String,

    /// Seconds, for `delay` and `lead_time` violations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u64>,
}
