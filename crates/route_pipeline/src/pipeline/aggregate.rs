use crate::display::{
    aggregated_route_step::AggregatedRouteStep, display_step::DisplayStep, route_stop::RouteStop,
};

fn is_same_stop(a: &DisplayStep, b: &DisplayStep) -> bool {
    a.kind() == b.kind() && a.description() == b.description()
}

fn merge(last: DisplayStep, current: DisplayStep) -> DisplayStep {
    let mut members = current.into_route_steps().into_iter();

    match last {
        DisplayStep::Aggregated(mut aggregated) => {
            members.for_each(|step| aggregated.push(step));
            DisplayStep::Aggregated(aggregated)
        }
        DisplayStep::Single(first) => match members.next() {
            Some(second) => {
                let mut aggregated = AggregatedRouteStep::new(first, second);
                members.for_each(|step| aggregated.push(step));
                DisplayStep::Aggregated(aggregated)
            }
            None => DisplayStep::Single(first),
        },
    }
}

/// Collapses every run of adjacent steps sharing kind and description into
/// one [`AggregatedRouteStep`], in a single left-to-right pass.
///
/// Accepts already aggregated units as well, so running it on its own
/// output changes nothing.
pub fn aggregate_steps<I>(steps: I) -> Vec<DisplayStep>
where
    I: IntoIterator,
    I::Item: Into<DisplayStep>,
{
    steps
        .into_iter()
        .map(Into::into)
        .fold(Vec::new(), |mut result, current| {
            match result.pop() {
                Some(last) if is_same_stop(&last, &current) => result.push(merge(last, current)),
                Some(last) => {
                    result.push(last);
                    result.push(current);
                }
                None => result.push(current),
            }

            result
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        step::{route_step::RouteStep, step_kind::StepKind},
        test_utils::{self, TestStep, delivery, end, pickup, start},
    };

    fn at(kind: StepKind, id: Option<u64>, description: &'static str) -> RouteStep {
        test_utils::create_step(TestStep {
            kind,
            id,
            description,
            ..TestStep::default()
        })
    }

    fn flatten(units: &[DisplayStep]) -> Vec<RouteStep> {
        units
            .iter()
            .flat_map(|unit| unit.route_steps().iter().cloned())
            .collect()
    }

    #[test]
    fn test_two_pickups_at_same_address() {
        let steps = vec![
            at(StepKind::Pickup, Some(1), "123 Main St"),
            at(StepKind::Pickup, Some(2), "123 Main St"),
        ];

        let aggregated = aggregate_steps(steps);

        assert_eq!(aggregated.len(), 1);
        match &aggregated[0] {
            DisplayStep::Aggregated(aggregated) => {
                assert_eq!(aggregated.description(), "123 Main St");
                assert_eq!(aggregated.len(), 2);
            }
            DisplayStep::Single(_) => panic!("expected an aggregated step"),
        }
    }

    #[test]
    fn test_collapses_maximal_runs() {
        let steps = vec![
            start(),
            at(StepKind::Pickup, Some(1), "Depot"),
            at(StepKind::Pickup, Some(2), "Depot"),
            at(StepKind::Pickup, Some(3), "Depot"),
            at(StepKind::Delivery, Some(1), "Markt 1"),
            at(StepKind::Delivery, Some(2), "Markt 1"),
            at(StepKind::Delivery, Some(3), "Markt 5"),
            end(),
        ];

        let aggregated = aggregate_steps(steps.clone());

        assert_eq!(aggregated.len(), 5);
        assert_eq!(aggregated[1].shipment_ids(), vec![1, 2, 3]);
        assert_eq!(aggregated[2].shipment_ids(), vec![1, 2]);
        assert!(!aggregated[3].is_aggregated());
        assert_eq!(flatten(&aggregated), steps);
    }

    #[test]
    fn test_same_description_different_kind_is_kept_apart() {
        let steps = vec![
            at(StepKind::Pickup, Some(1), "Markt 1"),
            at(StepKind::Delivery, Some(2), "Markt 1"),
        ];

        let aggregated = aggregate_steps(steps);

        assert_eq!(aggregated.len(), 2);
        assert!(aggregated.iter().all(|unit| !unit.is_aggregated()));
    }

    #[test]
    fn test_non_adjacent_steps_are_kept_apart() {
        let steps = vec![pickup(1), delivery(1), pickup(1)];

        assert_eq!(aggregate_steps(steps).len(), 3);
    }

    #[test]
    fn test_breaks_are_merged_like_any_other_step() {
        let steps = vec![
            at(StepKind::Break, Some(1), "Lunch"),
            at(StepKind::Break, Some(2), "Lunch"),
        ];

        let aggregated = aggregate_steps(steps);

        assert_eq!(aggregated.len(), 1);
        assert_eq!(aggregated[0].kind(), StepKind::Break);
    }

    #[test]
    fn test_running_twice_changes_nothing() {
        let steps = vec![
            start(),
            at(StepKind::Pickup, Some(1), "Depot"),
            at(StepKind::Pickup, Some(2), "Depot"),
            at(StepKind::Delivery, Some(1), "Markt 1"),
            at(StepKind::Delivery, Some(2), "Markt 2"),
            end(),
        ];

        let once = aggregate_steps(steps);
        let twice = aggregate_steps(once.clone());

        assert_eq!(once, twice);
        assert!(
            once.windows(2)
                .all(|pair| !is_same_stop(&pair[0], &pair[1]))
        );
    }

    #[test]
    fn test_extends_aggregate_with_aggregate() {
        let first = aggregate_steps(vec![
            at(StepKind::Pickup, Some(1), "Depot"),
            at(StepKind::Pickup, Some(2), "Depot"),
        ]);
        let second = aggregate_steps(vec![
            at(StepKind::Pickup, Some(3), "Depot"),
            at(StepKind::Pickup, Some(4), "Depot"),
        ]);

        let merged = aggregate_steps(first.into_iter().chain(second));

        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].shipment_ids(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_empty_sequence() {
        assert!(aggregate_steps(Vec::<RouteStep>::new()).is_empty());
    }
}
