pub mod kmh;
pub mod location;
pub mod meters;
pub mod route_step;
pub mod step_kind;
pub mod violation;
