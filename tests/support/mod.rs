//! Shared fixtures: SQLite exports built on the fly in a temp directory

use rusqlite::{params, Connection};
use std::path::{Path, PathBuf};

pub const DATABASE_FILE: &str = "sqlite-latest.sqlite";

#[allow(dead_code)]
pub fn get_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_eve-map-graph"))
}

/// Writes an export with the SDE table layout and the given rows
pub fn write_export(dir: &Path, systems: &[(i64, &str)], jumps: &[(i64, i64)]) -> PathBuf {
    let path = dir.join(DATABASE_FILE);
    let conn = Connection::open(&path).expect("Failed to create fixture database");
    conn.execute_batch(
        "CREATE TABLE mapSolarSystems (
             regionID INTEGER,
             constellationID INTEGER,
             solarSystemID INTEGER NOT NULL PRIMARY KEY,
             solarSystemName VARCHAR(100),
             security FLOAT
         );
         CREATE TABLE mapSolarSystemJumps (
             fromRegionID INTEGER,
             fromConstellationID INTEGER,
             fromSolarSystemID INTEGER NOT NULL,
             toSolarSystemID INTEGER NOT NULL,
             toConstellationID INTEGER,
             toRegionID INTEGER,
             PRIMARY KEY (fromSolarSystemID, toSolarSystemID)
         );",
    )
    .expect("Failed to create fixture schema");

    for (id, name) in systems {
        conn.execute(
            "INSERT INTO mapSolarSystems (regionID, constellationID, solarSystemID, solarSystemName, security)
             VALUES (10000002, 20000020, ?1, ?2, 0.9)",
            params![id, name],
        )
        .expect("Failed to insert system");
    }
    for (from, to) in jumps {
        conn.execute(
            "INSERT INTO mapSolarSystemJumps (fromRegionID, fromConstellationID, fromSolarSystemID, toSolarSystemID, toConstellationID, toRegionID)
             VALUES (10000002, 20000020, ?1, ?2, 20000020, 10000002)",
            params![from, to],
        )
        .expect("Failed to insert jump");
    }
    path
}

#[allow(dead_code)]
pub fn read_lines(path: &Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .expect("Failed to read output")
        .lines()
        .map(str::to_string)
        .collect()
}
