use chrono::NaiveDate;
use grid_continuum_core::{
    AxisKind, BucketOrder, EngineConfig, GridContinuum, Mode, Plane, Record, RecordId,
};
use std::collections::HashSet;

fn mixed_records() -> Vec<Record> {
    vec![
        Record::new("Alpha")
            .created_at("2024-03-05")
            .folder("Work")
            .status("Open")
            .priority(3.0)
            .location("Berlin"),
        Record::new("beta")
            .created_at("2023-11-30T12:00:00Z")
            .folder("Home")
            .status("Done")
            .priority(1.0),
        Record::new("").created_at("garbage").priority(-1.0),
        Record::new("Gamma").folder("  ").status("Open").location("Berlin"),
        Record::new("delta")
            .created_at("2024-03-20 08:00:00")
            .folder("Work")
            .priority(2.0),
        Record::new("Epsilon").status("Blocked").location("Lima"),
    ]
}

fn configured_engine(order: BucketOrder) -> GridContinuum {
    let reference = NaiveDate::from_ymd_opt(2024, 8, 1).unwrap();
    let mut engine = GridContinuum::with_config(
        EngineConfig::default()
            .with_reference_date(reference)
            .with_bucket_order(order),
    );
    engine.set_axis_mapping(Plane::X, AxisKind::Category, "status");
    engine.set_axis_mapping(Plane::Y, AxisKind::Time, "month");
    engine.set_axis_mapping(Plane::Color, AxisKind::Location, "city");
    engine.set_axis_mapping(Plane::Size, AxisKind::Hierarchy, "priority");
    engine
}

fn covered_ids(engine: &GridContinuum, records: &[Record]) -> Vec<RecordId> {
    engine
        .get_projection(records)
        .cells
        .iter()
        .flat_map(|cell| cell.record_ids())
        .collect()
}

#[test]
fn every_mode_partitions_the_input() {
    let records = mixed_records();
    let input_ids: HashSet<RecordId> = records.iter().map(|record| record.id).collect();

    for order in [BucketOrder::FirstSeen, BucketOrder::Lexical, BucketOrder::Natural] {
        let mut engine = configured_engine(order);
        for mode in Mode::ALL {
            engine.set_mode(mode);
            let projection = engine.get_projection(&records);

            assert_eq!(projection.check_partition(&records), Ok(()), "mode {mode}");
            assert_eq!(projection.record_count(), records.len(), "mode {mode}");

            let ids = covered_ids(&engine, &records);
            let unique: HashSet<RecordId> = ids.iter().copied().collect();
            assert_eq!(unique.len(), ids.len(), "mode {mode} repeated a record");
            assert_eq!(unique, input_ids, "mode {mode} lost a record");
            assert!(projection.cells.iter().all(|cell| !cell.is_empty()));
        }
    }
}

#[test]
fn partition_holds_for_every_single_axis_choice() {
    let records = mixed_records();
    let axes = [
        (AxisKind::Time, "year"),
        (AxisKind::Time, "month"),
        (AxisKind::Category, "status"),
        (AxisKind::Category, "folder"),
        (AxisKind::Hierarchy, "priority"),
        (AxisKind::Hierarchy, "unmapped"),
        (AxisKind::Alphabet, "name"),
        (AxisKind::Location, "city"),
    ];

    for (axis, facet) in axes {
        let mut engine = GridContinuum::new();
        engine.set_axis_mapping(Plane::X, axis, facet);
        engine.set_axis_mapping(Plane::Y, axis, facet);
        for mode in [Mode::List, Mode::Kanban, Mode::Grid] {
            let projection = engine.project_as(mode, &records);
            assert_eq!(
                projection.check_partition(&records),
                Ok(()),
                "{axis}/{facet} in {mode}"
            );
        }
    }
}

#[test]
fn projection_is_idempotent_for_unchanged_inputs() {
    let records = mixed_records();
    let mut engine = configured_engine(BucketOrder::FirstSeen);

    for mode in Mode::ALL {
        engine.set_mode(mode);
        let first = engine.get_projection(&records);
        let second = engine.get_projection(&records);
        assert_eq!(first, second, "mode {mode}");
    }
}

#[test]
fn null_category_lands_in_unknown_bucket() {
    let records = vec![
        Record::new("filed").folder("Inbox"),
        Record::new("unfiled"),
    ];
    let mut engine = GridContinuum::new();
    engine.set_axis_mapping(Plane::X, AxisKind::Category, "folder");
    engine.set_mode(Mode::Kanban);

    let projection = engine.get_projection(&records);

    assert_eq!(
        projection.columns,
        Some(vec!["Inbox".to_string(), "Unknown".to_string()])
    );
    let unknown = projection
        .cells
        .iter()
        .find(|cell| cell.column_key.as_deref() == Some("Unknown"))
        .expect("Unknown column");
    assert_eq!(unknown.record_ids(), vec![records[1].id]);
}

#[test]
fn projection_never_mutates_records() {
    let records = mixed_records();
    let snapshot = records.clone();
    let mut engine = configured_engine(BucketOrder::Natural);

    for mode in Mode::ALL {
        engine.set_mode(mode);
        let _ = engine.get_projection(&records);
    }

    assert_eq!(records, snapshot);
}
