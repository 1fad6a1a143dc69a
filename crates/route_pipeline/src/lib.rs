pub mod display;
pub mod error;
pub mod format;
pub mod pipeline;
pub mod polyline;
pub mod route;
pub mod step;
mod utils;

#[cfg(test)]
pub(crate) mod test_utils;
