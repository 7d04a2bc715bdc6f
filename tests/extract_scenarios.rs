//! Extraction scenarios against real SQLite fixtures
//!
//! Covers record shape, row counts, idempotence and each failure class:
//! missing input, invalid database, schema mismatch and unwritable output.

mod support;

use eve_map_graph::progress::NoOpHandler;
use eve_map_graph::{ErrorKind, ExtractConfig, ExtractError, Extractor, RowOrder};
use serde_json::Value;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use support::{read_lines, write_export};
use tempfile::TempDir;

fn extractor_for(dir: &Path, database: &Path) -> Extractor {
    let config = ExtractConfig {
        database: database.to_path_buf(),
        output_dir: dir.to_path_buf(),
        ..Default::default()
    };
    Extractor::new(config).with_progress(Arc::new(NoOpHandler))
}

fn keys(line: &str) -> BTreeSet<String> {
    let value: Value = serde_json::from_str(line).expect("line is not valid JSON");
    value
        .as_object()
        .expect("line is not a JSON object")
        .keys()
        .cloned()
        .collect()
}

#[test]
fn test_systems_scenario() {
    let temp_dir = TempDir::new().unwrap();
    let db = write_export(
        temp_dir.path(),
        &[(30000142, "Jita"), (30000144, "Perimeter")],
        &[],
    );

    extractor_for(temp_dir.path(), &db).run().unwrap();

    let lines = read_lines(&temp_dir.path().join("systems.json"));
    assert_eq!(lines.len(), 2);
    assert!(lines.contains(&r#"{"id": 30000142, "data": "Jita"}"#.to_string()));
    assert!(lines.contains(&r#"{"id": 30000144, "data": "Perimeter"}"#.to_string()));
}

#[test]
fn test_gates_scenario() {
    let temp_dir = TempDir::new().unwrap();
    let db = write_export(
        temp_dir.path(),
        &[(30000142, "Jita"), (30000144, "Perimeter")],
        &[(30000142, 30000144)],
    );

    extractor_for(temp_dir.path(), &db).run().unwrap();

    let lines = read_lines(&temp_dir.path().join("gates.json"));
    assert_eq!(
        lines,
        vec![r#"{"from": 30000142, "to": 30000144, "weight": 1}"#.to_string()]
    );
}

#[test]
fn test_every_line_has_exact_keys_and_counts_match() {
    let temp_dir = TempDir::new().unwrap();
    let systems: Vec<(i64, String)> = (0..50)
        .map(|i| (30000000 + i, format!("System-{}", i)))
        .collect();
    let system_refs: Vec<(i64, &str)> = systems.iter().map(|(id, n)| (*id, n.as_str())).collect();
    let jumps: Vec<(i64, i64)> = (0..49).map(|i| (30000000 + i, 30000001 + i)).collect();
    let db = write_export(temp_dir.path(), &system_refs, &jumps);

    let summary = extractor_for(temp_dir.path(), &db).run().unwrap();
    assert_eq!(summary.systems, 50);
    assert_eq!(summary.gates, 49);

    let system_lines = read_lines(&temp_dir.path().join("systems.json"));
    let gate_lines = read_lines(&temp_dir.path().join("gates.json"));
    assert_eq!(system_lines.len(), 50);
    assert_eq!(gate_lines.len(), 49);

    let system_keys: BTreeSet<String> = ["data", "id"].iter().map(|s| s.to_string()).collect();
    let gate_keys: BTreeSet<String> =
        ["from", "to", "weight"].iter().map(|s| s.to_string()).collect();
    for line in &system_lines {
        assert_eq!(keys(line), system_keys);
    }
    for line in &gate_lines {
        assert_eq!(keys(line), gate_keys);
        let value: Value = serde_json::from_str(line).unwrap();
        assert_eq!(value["weight"], 1);
    }
}

#[test]
fn test_empty_systems_table() {
    let temp_dir = TempDir::new().unwrap();
    let db = write_export(temp_dir.path(), &[], &[(1, 2), (2, 1), (2, 3)]);

    let summary = extractor_for(temp_dir.path(), &db).run().unwrap();

    assert_eq!(summary.systems, 0);
    assert_eq!(summary.gates, 3);
    let systems = fs::read(temp_dir.path().join("systems.json")).unwrap();
    assert!(systems.is_empty());
    assert_eq!(read_lines(&temp_dir.path().join("gates.json")).len(), 3);
}

#[test]
fn test_rerun_is_byte_identical_and_overwrites() {
    let temp_dir = TempDir::new().unwrap();
    let db = write_export(
        temp_dir.path(),
        &[(30000142, "Jita"), (30002187, "Amarr")],
        &[(30000142, 30002187), (30002187, 30000142)],
    );
    let systems_path = temp_dir.path().join("systems.json");
    let gates_path = temp_dir.path().join("gates.json");
    fs::write(&systems_path, "stale content that is longer than the real output\n".repeat(10))
        .unwrap();

    let extractor = extractor_for(temp_dir.path(), &db);
    extractor.run().unwrap();
    let first = (fs::read(&systems_path).unwrap(), fs::read(&gates_path).unwrap());
    extractor.run().unwrap();
    let second = (fs::read(&systems_path).unwrap(), fs::read(&gates_path).unwrap());

    assert_eq!(first, second);
    assert!(!String::from_utf8_lossy(&first.0).contains("stale"));
}

#[test]
fn test_id_order_sorts_output() {
    let temp_dir = TempDir::new().unwrap();
    let db = write_export(
        temp_dir.path(),
        &[(30000144, "Perimeter"), (30000142, "Jita")],
        &[],
    );
    let config = ExtractConfig {
        database: db,
        output_dir: temp_dir.path().to_path_buf(),
        order: RowOrder::Id,
        ..Default::default()
    };

    Extractor::new(config)
        .with_progress(Arc::new(NoOpHandler))
        .run()
        .unwrap();

    assert_eq!(
        read_lines(&temp_dir.path().join("systems.json")),
        vec![
            r#"{"id": 30000142, "data": "Jita"}"#.to_string(),
            r#"{"id": 30000144, "data": "Perimeter"}"#.to_string(),
        ]
    );
}

#[test]
fn test_missing_database_touches_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let systems_path = temp_dir.path().join("systems.json");
    fs::write(&systems_path, "previous run\n").unwrap();

    let err = extractor_for(temp_dir.path(), &temp_dir.path().join("sqlite-latest.sqlite"))
        .run()
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InputNotFound);
    assert_eq!(fs::read_to_string(&systems_path).unwrap(), "previous run\n");
    assert!(!temp_dir.path().join("gates.json").exists());
    assert!(!temp_dir.path().join("sqlite-latest.sqlite").exists());
}

#[test]
fn test_invalid_database() {
    let temp_dir = TempDir::new().unwrap();
    let db = temp_dir.path().join("sqlite-latest.sqlite");
    fs::write(&db, "{\"not\": \"sqlite\"}\n".repeat(32)).unwrap();

    let err = extractor_for(temp_dir.path(), &db).run().unwrap_err();

    assert!(matches!(err, ExtractError::InvalidDatabase { .. }));
    assert_eq!(err.kind(), ErrorKind::Database);
    assert!(!temp_dir.path().join("systems.json").exists());
}

#[test]
fn test_missing_jumps_table_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let db = temp_dir.path().join("sqlite-latest.sqlite");
    let conn = rusqlite::Connection::open(&db).unwrap();
    conn.execute_batch(
        "CREATE TABLE mapSolarSystems (solarSystemID INTEGER, solarSystemName TEXT);
         INSERT INTO mapSolarSystems VALUES (30000142, 'Jita');",
    )
    .unwrap();
    drop(conn);

    let err = extractor_for(temp_dir.path(), &db).run().unwrap_err();

    assert_eq!(err.kind(), ErrorKind::SchemaMismatch);
    assert!(err.to_string().contains("mapSolarSystemJumps"));
    assert!(!temp_dir.path().join("systems.json").exists());
    assert!(!temp_dir.path().join("gates.json").exists());
}

#[test]
fn test_output_directory_missing() {
    let temp_dir = TempDir::new().unwrap();
    let db = write_export(temp_dir.path(), &[(1, "A")], &[]);
    let config = ExtractConfig {
        database: db,
        output_dir: temp_dir.path().join("missing").join("dir"),
        ..Default::default()
    };

    let err = Extractor::new(config)
        .with_progress(Arc::new(NoOpHandler))
        .run()
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::OutputWriteFailure);
}
