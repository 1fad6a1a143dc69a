use std::fmt::Display;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The kind of stop a route step represents, as reported by the solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    Start,
    Job,
    Pickup,
    Delivery,
    Break,
    End,
}

impl StepKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StepKind::Start => "start",
            StepKind::Job => "job",
            StepKind::Pickup => "pickup",
            StepKind::Delivery => "delivery",
            StepKind::Break => "break",
            StepKind::End => "end",
        }
    }
}

impl Display for StepKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_wire_names() {
        let kinds: Vec<StepKind> =
            serde_json::from_str(r#"["start","job","pickup","delivery","break","end"]"#).unwrap();

        assert_eq!(
            kinds,
            vec![
                StepKind::Start,
                StepKind::Job,
                StepKind::Pickup,
                StepKind::Delivery,
                StepKind::Break,
                StepKind::End
            ]
        );
    }
}
