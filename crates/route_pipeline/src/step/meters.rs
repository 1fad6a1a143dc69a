use std::ops::Div;

use jiff::SignedDuration;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::step::kmh::Kmh;

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize, Serialize, JsonSchema)]
pub struct Meters(f64);

impl Meters {
    pub const ZERO: Meters = Meters(0.0);

    pub fn new(value: f64) -> Self {
        Meters(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn kilometers(&self) -> f64 {
        self.0 / 1000.0
    }
}

/// Average speed over `duration`. Undefined for a zero duration.
impl Div<SignedDuration> for Meters {
    type Output = Option<Kmh>;

    fn div(self, duration: SignedDuration) -> Option<Kmh> {
        let seconds = duration.as_secs_f64();
        if seconds == 0.0 {
            return None;
        }

        Some(Kmh::new(self.0 / seconds * 3.6))
    }
}
