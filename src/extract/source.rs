//! Read-only access to the static data export
//!
//! [`SdeSource`] owns the SQLite connection for the length of a run. It is
//! opened read-only so a missing or mistyped path never creates an empty
//! database, and it is released when dropped on any exit path.

use super::error::ExtractError;
use super::records::{GateRecord, SystemRecord};
use rusqlite::{Connection, ErrorCode, OpenFlags, Row};
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Order in which rows are read from the source tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowOrder {
    /// Whatever order the engine returns; no `ORDER BY` is issued
    #[default]
    Source,
    /// Sorted by the identifier columns
    Id,
}

/// A source table and the two columns read from it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSpec {
    pub table: &'static str,
    pub columns: [&'static str; 2],
}

pub const SOLAR_SYSTEMS: TableSpec = TableSpec {
    table: "mapSolarSystems",
    columns: ["solarSystemID", "solarSystemName"],
};

pub const SOLAR_SYSTEM_JUMPS: TableSpec = TableSpec {
    table: "mapSolarSystemJumps",
    columns: ["fromSolarSystemID", "toSolarSystemID"],
};

impl TableSpec {
    pub fn select_sql(&self, order: RowOrder) -> String {
        let [first, second] = self.columns;
        match order {
            RowOrder::Source => format!("SELECT {first}, {second} FROM {}", self.table),
            RowOrder::Id => format!(
                "SELECT {first}, {second} FROM {} ORDER BY {first}, {second}",
                self.table
            ),
        }
    }
}

pub struct SdeSource {
    conn: Connection,
    path: PathBuf,
}

impl SdeSource {
    /// Opens the database at `path` read-only and checks that it is SQLite
    pub fn open(path: &Path) -> Result<Self, ExtractError> {
        if !path.is_file() {
            return Err(ExtractError::InputNotFound(path.to_path_buf()));
        }
        File::open(path).map_err(|source| ExtractError::InputUnreadable {
            path: path.to_path_buf(),
            source,
        })?;

        let flags = OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        let conn = Connection::open_with_flags(path, flags).map_err(|source| {
            ExtractError::InvalidDatabase {
                path: path.to_path_buf(),
                source,
            }
        })?;

        // The header is only read lazily, so query the catalog once.
        let tables: i64 = conn
            .query_row("SELECT count(*) FROM sqlite_master", [], |row| row.get(0))
            .map_err(|source| {
                if is_not_a_database(&source) {
                    ExtractError::InvalidDatabase {
                        path: path.to_path_buf(),
                        source,
                    }
                } else {
                    ExtractError::query("sqlite_master", source)
                }
            })?;
        debug!(path = %path.display(), tables, "Opened static data export");

        Ok(Self {
            conn,
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Checks that both source tables exist with the columns read from them
    pub fn verify_schema(&self) -> Result<(), ExtractError> {
        self.verify_table(&SOLAR_SYSTEMS)?;
        self.verify_table(&SOLAR_SYSTEM_JUMPS)
    }

    pub fn verify_table(&self, spec: &TableSpec) -> Result<(), ExtractError> {
        let mut stmt = self
            .conn
            .prepare("SELECT name FROM pragma_table_info(?1)")
            .map_err(|e| ExtractError::query(spec.table, e))?;
        let columns = stmt
            .query_map([spec.table], |row| row.get::<_, String>(0))
            .map_err(|e| ExtractError::query(spec.table, e))?
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ExtractError::query(spec.table, e))?;

        if columns.is_empty() {
            return Err(ExtractError::MissingTable {
                table: spec.table.to_string(),
            });
        }

        // SQLite identifiers are case-insensitive.
        for required in spec.columns {
            if !columns.iter().any(|c| c.eq_ignore_ascii_case(required)) {
                return Err(ExtractError::MissingColumn {
                    table: spec.table.to_string(),
                    column: required.to_string(),
                });
            }
        }

        debug!(table = spec.table, columns = columns.len(), "Schema verified");
        Ok(())
    }

    /// Streams every solar system to `sink`, returning the row count
    pub fn for_each_system<F>(&self, order: RowOrder, sink: F) -> Result<usize, ExtractError>
    where
        F: FnMut(SystemRecord) -> Result<(), ExtractError>,
    {
        self.stream(&SOLAR_SYSTEMS, order, decode_system, sink)
    }

    /// Streams every jump to `sink`, returning the row count
    pub fn for_each_gate<F>(&self, order: RowOrder, sink: F) -> Result<usize, ExtractError>
    where
        F: FnMut(GateRecord) -> Result<(), ExtractError>,
    {
        self.stream(&SOLAR_SYSTEM_JUMPS, order, decode_gate, sink)
    }

    fn stream<T, D, F>(
        &self,
        spec: &TableSpec,
        order: RowOrder,
        decode: D,
        mut sink: F,
    ) -> Result<usize, ExtractError>
    where
        D: Fn(&Row<'_>) -> rusqlite::Result<T>,
        F: FnMut(T) -> Result<(), ExtractError>,
    {
        let sql = spec.select_sql(order);
        debug!(sql = %sql, "Querying source table");

        let mut stmt = self
            .conn
            .prepare(&sql)
            .map_err(|e| ExtractError::query(spec.table, e))?;
        let mut rows = stmt
            .query([])
            .map_err(|e| ExtractError::query(spec.table, e))?;

        let mut count = 0;
        while let Some(row) = rows.next().map_err(|e| ExtractError::query(spec.table, e))? {
            let record = decode(row).map_err(|source| ExtractError::RowDecode {
                table: spec.table.to_string(),
                row: count + 1,
                source,
            })?;
            sink(record)?;
            count += 1;
        }

        Ok(count)
    }

    /// Closes the connection, surfacing any error the engine reports
    pub fn close(self) -> Result<(), ExtractError> {
        let path = self.path;
        self.conn
            .close()
            .map_err(|(_, source)| ExtractError::Close { path, source })
    }
}

fn decode_system(row: &Row<'_>) -> rusqlite::Result<SystemRecord> {
    Ok(SystemRecord {
        id: row.get(0)?,
        data: row.get(1)?,
    })
}

fn decode_gate(row: &Row<'_>) -> rusqlite::Result<GateRecord> {
    Ok(GateRecord::new(row.get(0)?, row.get(1)?))
}

/// True when `err` means the file is not an SQLite database at all
pub fn is_not_a_database(err: &rusqlite::Error) -> bool {
    matches!(err, rusqlite::Error::SqliteFailure(e, _) if e.code == ErrorCode::NotADatabase)
}
