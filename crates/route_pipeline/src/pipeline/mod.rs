//! Post-processing of the step sequence returned by the solver.
//!
//! Legs are repaired first, then consecutive steps at the same stop are
//! aggregated. Aggregation expects the repaired, flattened sequence.

pub mod aggregate;
pub mod legs;
