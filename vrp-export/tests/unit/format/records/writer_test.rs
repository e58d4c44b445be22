use super::*;
use crate::helpers::generator::generate_solution;
use crate::helpers::*;
use crate::models::{JobType, Location, Step, StepKind};
use proptest::prelude::*;

#[test]
fn can_create_records_for_simple_solution() {
    let solution = create_simple_solution();

    let records = create_step_records(&solution);

    assert_eq!(records.len(), 3);
    assert_eq!(records.iter().map(|r| r.type_tag.as_str()).collect::<Vec<_>>(), vec!["start", "job", "end"]);
    assert!(records.iter().all(|r| r.vehicle_id == 7));

    let job = &records[1];
    assert_eq!(job.id, 5);
    assert_eq!(job.longitude, 2.35);
    assert_eq!(job.latitude, 48.85);
    assert_eq!(job.location_index, NA_SUBSTITUTE);
    assert_eq!(job.description.as_str(), "job5");
    assert_eq!((job.arrival, job.duration, job.setup, job.service, job.waiting_time), (10, 10, 1, 5, 0));
    assert_eq!(job.distance, 150);

    assert_eq!(records[0].id, NA_SUBSTITUTE);
    assert_eq!(records[2].id, NA_SUBSTITUTE);
    assert_eq!(records[0].location_index, 0);
    assert_eq!(records[0].longitude, NA_SUBSTITUTE_FLOAT);
    assert_eq!(records[2].latitude, NA_SUBSTITUTE_FLOAT);
}

#[test]
fn can_keep_break_id_and_ignore_start_end_id() {
    let route = Route::new(
        3,
        vec![
            Step::start(Location::default()).with_id(100),
            Step::new_break(4),
            Step::end(Location::default()).with_id(200),
        ],
    );

    let records = create_step_records(&Solution::from_routes(0, vec![route], vec![]));

    assert_eq!(records.iter().map(|r| r.id).collect::<Vec<_>>(), vec![NA_SUBSTITUTE, 4, NA_SUBSTITUTE]);
    assert_eq!(records[1].type_tag.as_str(), "break");
}

#[test]
fn can_derive_type_tags_for_all_kinds() {
    let solution = Solution::from_routes(0, vec![create_route_with_all_kinds(1)], vec![]);

    let tags = solution.to_step_records().iter().map(|r| r.step_tag()).collect::<Vec<_>>();

    assert_eq!(
        tags,
        vec![
            Some(StepTag::Start),
            Some(StepTag::Pickup),
            Some(StepTag::Break),
            Some(StepTag::Delivery),
            Some(StepTag::Job),
            Some(StepTag::End),
        ]
    );
}

#[test]
fn can_truncate_long_description() {
    let description = "0123456789".repeat(5);
    let step = Step::job(1, JobType::Single, Location::new_index(1)).with_description(description.as_str());

    let record = StepRecord::new(1, &step);

    assert_eq!(record.description.as_str(), &description[..39]);
    assert_eq!(record.description.as_bytes()[39], 0);
}

#[test]
fn can_create_empty_records_for_error_solution() {
    let records = create_step_records(&Solution::new(3, "cannot solve"));

    assert!(records.is_empty());
}

#[test]
fn can_allocate_records_once() {
    let routes = vec![create_route_with_all_kinds(1), create_route_with_all_kinds(2)];
    let solution = Solution::from_routes(0, routes, vec![]);

    let records = create_step_records(&solution);

    assert_eq!(records.len(), 12);
    assert_eq!(records.capacity(), 12);
}

#[test]
fn can_keep_extreme_ids_distinct_from_sentinel() {
    assert!(i64::from(Id::MAX) < NA_SUBSTITUTE);

    let route = Route::new(
        Id::MAX,
        vec![
            Step::job(Id::MAX, JobType::Single, Location::new_index(1)),
            Step::job(-1, JobType::Delivery, Location::new_index(2)),
            Step::new_break(Id::MIN),
        ],
    );
    let solution = Solution::from_routes(0, vec![route], vec![]);

    let records = create_step_records(&solution);

    assert!(records.iter().all(|r| r.vehicle_id == i64::from(Id::MAX)));
    assert_eq!(records.iter().map(|r| r.id).collect::<Vec<_>>(), vec![i64::from(Id::MAX), -1, i64::from(Id::MIN)]);
    assert!(records.iter().all(|r| r.id != NA_SUBSTITUTE));
}

#[test]
fn can_clamp_metrics_above_record_range() {
    let step = Step::job(1, JobType::Pickup, Location::new_index(0))
        .with_arrival(u64::MAX, i64::MAX as u64 + 1)
        .with_times(0, i64::MAX as u64, 0)
        .with_distance(u64::MAX);
    let solution = Solution::from_routes(0, vec![Route::new(1, vec![step])], vec![]);

    let records = create_step_records(&solution);

    assert_eq!((records[0].arrival, records[0].duration, records[0].distance), (i64::MAX, i64::MAX, i64::MAX));
    assert_eq!(records[0].service, i64::MAX);
}

#[test]
fn can_keep_fixed_record_layout() {
    assert_eq!(std::mem::size_of::<StepRecord>(), 8 + 16 + 6 * 8 + 8 + 8 + 8 + 8 + 40);
    assert_eq!(std::mem::align_of::<StepRecord>(), 8);
}

fn get_kinds(solution: &Solution) -> Vec<(Id, StepKind)> {
    solution.routes.iter().flat_map(|route| route.steps.iter().map(move |step| (route.vehicle, step.kind))).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]
    #[test]
    fn can_flatten_all_steps_in_order(solution in generate_solution()) {
        let records = create_step_records(&solution);
        let steps = solution.routes.iter().flat_map(|route| route.steps.iter()).collect::<Vec<_>>();
        let expected = get_kinds(&solution)
            .into_iter()
            .map(|(vehicle, kind)| (i64::from(vehicle), Some(StepTag::from_kind(&kind))))
            .collect::<Vec<_>>();

        prop_assert_eq!(records.len(), solution.total_steps());
        prop_assert_eq!(records.iter().map(|r| (r.vehicle_id, r.step_tag())).collect::<Vec<_>>(), expected);
        prop_assert!(records.iter().zip(steps.iter()).all(|(record, step)| record.arrival == i64::try_from(step.arrival).unwrap()));
    }

    #[test]
    fn can_use_sentinel_for_every_absent_value(solution in generate_solution()) {
        let records = create_step_records(&solution);
        let steps = solution.routes.iter().flat_map(|route| route.steps.iter());

        for (record, step) in records.iter().zip(steps) {
            match step.location.coordinates() {
                Some(coordinates) => {
                    prop_assert_eq!(record.longitude, coordinates.lon);
                    prop_assert_eq!(record.latitude, coordinates.lat);
                }
                None => {
                    prop_assert_eq!(record.longitude, NA_SUBSTITUTE_FLOAT);
                    prop_assert_eq!(record.latitude, NA_SUBSTITUTE_FLOAT);
                }
            }

            prop_assert_eq!(record.location_index, step.location.index().map_or(NA_SUBSTITUTE, i64::from));
            prop_assert_eq!(record.id, if step.kind.has_id() { i64::from(step.id) } else { NA_SUBSTITUTE });
            prop_assert!(!record.type_tag.as_str().is_empty());
            prop_assert!(record.description.as_str().len() <= 39);
        }
    }
}
