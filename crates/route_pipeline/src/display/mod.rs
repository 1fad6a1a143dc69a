pub mod aggregated_route_step;
pub mod display_step;
pub mod route_stop;
