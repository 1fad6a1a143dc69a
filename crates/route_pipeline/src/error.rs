use thiserror::Error;

use crate::polyline::PolylineError;

#[derive(Debug, Error)]
pub enum RouteError {
    #[error("Route step has no location")]
    MissingLocation,

    #[error("Route has no encoded geometry")]
    MissingGeometry,

    #[error("Invalid route geometry: {0}")]
    Polyline(#[from] PolylineError),

    #[error("Invalid arrival time: {0}")]
    Time(#[from] jiff::Error),
}
