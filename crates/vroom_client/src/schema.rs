use schemars::schema_for;

use crate::{request::Scenario, response::VroomResponse};

pub fn generate_scenario_schema() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&schema_for!(Scenario))
}

pub fn generate_response_schema() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&schema_for!(VroomResponse))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_schema_describes_steps() {
        let schema: serde_json::Value =
            serde_json::from_str(&generate_response_schema().unwrap()).unwrap();

        assert_eq!(schema["title"], "VroomResponse");
        assert!(schema["$defs"].get("RouteStep").is_some());
    }

    #[test]
    fn test_scenario_schema() {
        let schema: serde_json::Value =
            serde_json::from_str(&generate_scenario_schema().unwrap()).unwrap();

        assert_eq!(schema["title"], "Scenario");
    }
}
