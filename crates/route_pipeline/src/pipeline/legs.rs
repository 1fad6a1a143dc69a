use std::collections::VecDeque;

use fxhash::FxHashSet;
use tracing::debug;

use crate::step::{route_step::RouteStep, step_kind::StepKind};

/// Indices at which a new leg starts: every step that is a pickup directly
/// following a delivery. The vehicle is assumed to be empty at that point.
pub fn reload_boundaries(steps: &[RouteStep]) -> Vec<usize> {
    steps
        .windows(2)
        .enumerate()
        .filter(|(_, pair)| {
            pair[0].kind() == StepKind::Delivery && pair[1].kind() == StepKind::Pickup
        })
        .map(|(index, _)| index + 1)
        .collect()
}

/// A contiguous run of steps between two reload boundaries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Leg {
    steps: VecDeque<RouteStep>,
}

impl Leg {
    pub fn steps(&self) -> impl Iterator<Item = &RouteStep> {
        self.steps.iter()
    }

    fn delivered_shipments(&self) -> FxHashSet<u64> {
        self.steps
            .iter()
            .filter(|step| step.kind() == StepKind::Delivery)
            .filter_map(RouteStep::id)
            .collect()
    }

    fn has_delivery_of(&self, shipment_id: u64) -> bool {
        self.steps.iter().any(|step| step.is_delivery_of(shipment_id))
    }
}

impl FromIterator<RouteStep> for Leg {
    fn from_iter<T: IntoIterator<Item = RouteStep>>(iter: T) -> Self {
        Leg {
            steps: iter.into_iter().collect(),
        }
    }
}

/// The legs of a route, in route order. There is always at least one leg.
#[derive(Debug, Clone, PartialEq)]
pub struct Legs {
    legs: Vec<Leg>,
}

impl Legs {
    /// Splits `steps` at every reload boundary.
    pub fn split(steps: Vec<RouteStep>) -> Self {
        let boundaries = reload_boundaries(&steps);
        let mut legs = Vec::with_capacity(boundaries.len() + 1);
        let mut remaining = steps.into_iter();
        let mut start = 0;

        for boundary in boundaries {
            legs.push(remaining.by_ref().take(boundary - start).collect());
            start = boundary;
        }
        legs.push(remaining.collect());

        Legs { legs }
    }

    pub(crate) fn len(&self) -> usize {
        self.legs.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Leg> {
        self.legs.iter()
    }

    /// Moves every pickup whose delivery happens in a later leg to the front
    /// of that leg. Returns the number of moved pickups.
    ///
    /// Legs are visited once, in order. Within a leg, pickups are visited in
    /// route order and each one is pushed in front of everything already in
    /// its target leg. Pickups without a later delivery stay where they are.
    pub fn relocate_pickups(&mut self) -> usize {
        let mut moved = 0;

        for leg_index in 0..self.legs.len() {
            let delivered = self.legs[leg_index].delivered_shipments();
            let steps = std::mem::take(&mut self.legs[leg_index].steps);

            for step in steps {
                let target = match step.id() {
                    Some(shipment_id)
                        if step.kind() == StepKind::Pickup && !delivered.contains(&shipment_id) =>
                    {
                        self.find_delivery_leg(leg_index, shipment_id)
                            .map(|target| (shipment_id, target))
                    }
                    _ => None,
                };

                match target {
                    Some((shipment_id, target)) => {
                        debug!(
                            shipment_id,
                            from_leg = leg_index,
                            to_leg = target,
                            "Moving pickup into the leg of its delivery"
                        );
                        self.legs[target].steps.push_front(step);
                        moved += 1;
                    }
                    None => self.legs[leg_index].steps.push_back(step),
                }
            }
        }

        moved
    }

    /// First leg after `leg_index` that delivers `shipment_id`.
    fn find_delivery_leg(&self, leg_index: usize, shipment_id: u64) -> Option<usize> {
        self.legs
            .iter()
            .enumerate()
            .skip(leg_index + 1)
            .find(|(_, leg)| leg.has_delivery_of(shipment_id))
            .map(|(index, _)| index)
    }

    pub fn flatten(self) -> Vec<RouteStep> {
        self.legs.into_iter().flat_map(|leg| leg.steps).collect()
    }
}

/// Splits `steps` into legs, repairs misplaced pickups and flattens the
/// legs back into a single sequence.
pub fn reorder_legs(steps: Vec<RouteStep>) -> Vec<RouteStep> {
    let mut legs = Legs::split(steps);
    let moved = legs.relocate_pickups();

    debug!(legs = legs.len(), moved, "Reordered route legs");

    legs.flatten()
}
