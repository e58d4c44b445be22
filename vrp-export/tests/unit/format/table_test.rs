use super::*;
use crate::format::records::{create_step_records, FixedText};
use crate::helpers::*;
use crate::models::{Id, JobType, Location, Route, Solution, Step};

#[test]
fn can_create_table_from_records() {
    let records = create_step_records(&create_simple_solution());

    let table = RouteTable::from_records(records.as_slice(), true);

    assert_eq!(table.len(), 3);
    assert_eq!(table.vehicle_id, vec![7, 7, 7]);
    assert_eq!(table.step_type, vec![Some(StepTag::Start), Some(StepTag::Job), Some(StepTag::End)]);
    assert_eq!(table.arrival, vec![0, 10, 26]);
    assert_eq!(table.distance, vec![0, 150, 300]);
    assert_eq!(table.location_index, vec![0, NA_SUBSTITUTE, 0]);
    assert_eq!(table.longitude, Some(vec![None, Some(2.35), None]));
    assert_eq!(table.latitude, Some(vec![None, Some(48.85), None]));
    assert_eq!(table.id, Some(vec![None, Some(5), None]));
    assert_eq!(table.description, vec!["".to_string(), "job5".to_string(), "".to_string()]);
}

#[test]
fn can_drop_columns_without_values() {
    let route = Route::new(1, vec![Step::start(Location::new_index(0)), Step::end(Location::new_index(1))]);
    let records = create_step_records(&Solution::from_routes(0, vec![route], vec![]));

    let table = RouteTable::from_records(records.as_slice(), true);

    assert_eq!(table.longitude, None);
    assert_eq!(table.latitude, None);
    assert_eq!(table.id, None);
    assert_eq!(
        table.column_names(),
        vec![
            "vehicle_id",
            "type",
            "arrival",
            "duration",
            "setup",
            "service",
            "waiting_time",
            "distance",
            "location_index",
            "description"
        ]
    );
}

#[test]
fn can_keep_columns_without_values_when_dropping_disabled() {
    let route = Route::new(1, vec![Step::start(Location::new_index(0))]);
    let records = create_step_records(&Solution::from_routes(0, vec![route], vec![]));

    let table = RouteTable::from_records(records.as_slice(), false);

    assert_eq!(table.longitude, Some(vec![None]));
    assert_eq!(table.id, Some(vec![None]));
    assert_eq!(table.column_names().len(), 13);
}

#[test]
fn can_keep_partial_columns() {
    let route = Route::new(
        2,
        vec![
            Step::start(Location::new_index(0)),
            Step::job(3, JobType::Delivery, Location::new_index(1)),
            Step::end(Location::new_index(0)),
        ],
    );
    let records = create_step_records(&Solution::from_routes(0, vec![route], vec![]));

    let table = RouteTable::from_records(records.as_slice(), true);

    assert_eq!(table.id, Some(vec![None, Some(3), None]));
    assert_eq!(table.longitude, None);
    assert_eq!(table.step_type[1], Some(StepTag::Delivery));
}

#[test]
fn can_keep_extreme_ids_as_present() {
    let route = Route::new(
        Id::MAX,
        vec![Step::job(Id::MAX, JobType::Single, Location::new_index(0)), Step::new_break(-7)],
    );
    let solution = Solution::from_routes(0, vec![route], vec![]);

    let table = RouteTable::from_records(&create_step_records(&solution), true);

    assert_eq!(table.vehicle_id, vec![i64::from(Id::MAX); 2]);
    assert_eq!(table.id, Some(vec![Some(i64::from(Id::MAX)), Some(-7)]));
}

#[test]
fn can_decode_unknown_type_as_none() {
    let mut records = create_step_records(&create_simple_solution());
    records[1].type_tag = FixedText::new("service");

    let table = RouteTable::from_records(records.as_slice(), true);

    assert_eq!(table.step_type[1], None);
}

#[test]
fn can_create_empty_table() {
    let table = RouteTable::from_records(&[], true);

    assert!(table.is_empty());
    assert_eq!(table.id, None);
}
