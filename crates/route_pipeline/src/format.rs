//! Human readable texts for route steps: map labels, list headers and clock
//! times.

use jiff::{SignedDuration, Zoned, civil::Time};

use crate::{
    display::{display_step::DisplayStep, route_stop::RouteStop},
    error::RouteError,
    step::{route_step::RouteStep, step_kind::StepKind},
};

/// Shipment ids are zero based on the wire and one based for people.
fn shipment_number(id: Option<u64>) -> String {
    id.map(|id| (id + 1).to_string()).unwrap_or_default()
}

/// `HH:mm` of `duration` on a 24 hour clock. Durations of a day or more
/// wrap around.
pub fn format_duration(duration: SignedDuration) -> String {
    Time::midnight()
        .wrapping_add(duration)
        .strftime("%H:%M")
        .to_string()
}

/// Wall clock time, as `HH:mm`, of an arrival relative to `departure`.
pub fn format_eta(departure: &Zoned, arrival: SignedDuration) -> Result<String, RouteError> {
    Ok(departure.checked_add(arrival)?.strftime("%H:%M").to_string())
}

/// Title of a unit in the step list of a route.
pub fn step_header(unit: &DisplayStep) -> String {
    if let DisplayStep::Aggregated(aggregated) = unit {
        let numbers = aggregated
            .shipment_ids()
            .into_iter()
            .map(|id| shipment_number(Some(id)))
            .collect::<Vec<_>>();

        return format!("Shipments: {}", numbers.join(", "));
    }

    let id = unit.shipment_ids().first().copied();
    match unit.kind() {
        StepKind::Start => String::from("Start"),
        StepKind::Pickup => format!("Pick Up: Shipment {}", shipment_number(id)),
        StepKind::Job | StepKind::Delivery => {
            format!("Delivery: Shipment {}", shipment_number(id))
        }
        StepKind::Break => String::from("Break"),
        StepKind::End => String::from("Route finished"),
    }
}

/// Label of a step drawn on the map. `index` is the position of the step
/// among the located units of its route.
pub fn point_label(
    step: &RouteStep,
    index: usize,
    departure: Option<&Zoned>,
) -> Result<String, RouteError> {
    let mut parts = vec![];

    match step.kind() {
        StepKind::Start => parts.push(String::from("Start")),
        StepKind::End => parts.push(String::from("End")),
        StepKind::Break => parts.push(String::from("Break")),
        StepKind::Job | StepKind::Pickup | StepKind::Delivery => {
            parts.push(format!("Shipment {}", shipment_number(step.id())));
            parts.push(step.description().to_owned());
            parts.push(format!("Stop: {}", index + 1));
            parts.push(format!(
                "Distance: {} km",
                step.distance().kilometers().round()
            ));

            if let Some(departure) = departure {
                parts.push(format!("ETA: {}", format_eta(departure, step.arrival())?));
            }
        }
    }

    Ok(parts.join("\n"))
}
