//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `grid_continuum_core` linkage with a tiny in-memory record set.
//! - Print one deterministic summary line per projection mode.

use grid_continuum_core::{
    AxisKind, BucketOrder, EngineConfig, GridContinuum, Mode, Plane, Record,
};

fn demo_records() -> Vec<Record> {
    vec![
        Record::new("Draft roadmap")
            .created_at("2024-01-15")
            .folder("Work")
            .status("Open")
            .priority(3.0),
        Record::new("Book flights")
            .created_at("2024-02-02T09:30:00Z")
            .folder("Travel")
            .status("Done")
            .priority(1.0)
            .location("Lisbon"),
        Record::new("Review budget")
            .folder("Work")
            .status("Open")
            .priority(2.0),
        Record::new("groceries").status("Done"),
    ]
}

fn main() {
    println!("grid_continuum_core version={}", grid_continuum_core::core_version());

    let records = demo_records();
    let config = EngineConfig::default().with_bucket_order(BucketOrder::Natural);
    let mut engine = GridContinuum::with_config(config);
    engine.set_axis_mapping(Plane::X, AxisKind::Category, "status");
    engine.set_axis_mapping(Plane::Y, AxisKind::Hierarchy, "priority");
    engine.set_axis_mapping(Plane::Color, AxisKind::Category, "folder");

    for mode in Mode::ALL {
        engine.set_mode(mode);
        let projection = engine.get_projection(&records);
        let partition = match projection.check_partition(&records) {
            Ok(()) => "ok".to_string(),
            Err(err) => err.to_string(),
        };
        println!(
            "mode={} layout={} axis_count={} cells={} records={} partition={}",
            projection.mode,
            projection.layout,
            projection.axis_count,
            projection.cells.len(),
            projection.record_count(),
            partition
        );
    }
}

