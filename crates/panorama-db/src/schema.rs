//! Schema definitions and migration runner for the remote backend.
//!
//! Tables use SCHEMAFULL mode. Status and type columns carry no
//! membership ASSERT: values outside the application's closed sets
//! must survive the round trip uninterpreted. The monetary `value`
//! column is a string; the field mapper coerces it on read.

use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;
use tracing::info;

use crate::error::DbError;

// -----------------------------------------------------------------------
// Migration tracking
// -----------------------------------------------------------------------

const MIGRATION_TABLE_DDL: &str = "\
DEFINE TABLE IF NOT EXISTS _migration SCHEMAFULL;
DEFINE FIELD IF NOT EXISTS version ON TABLE _migration TYPE int;
DEFINE FIELD IF NOT EXISTS name ON TABLE _migration TYPE string;
DEFINE FIELD IF NOT EXISTS applied_at ON TABLE _migration TYPE datetime \
    DEFAULT time::now();
DEFINE INDEX IF NOT EXISTS idx_migration_version ON TABLE _migration \
    COLUMNS version UNIQUE;
";

#[derive(Debug, SurrealValue)]
struct MigrationRecord {
    version: u32,
    #[allow(dead_code)]
    name: String,
}

struct Migration {
    version: u32,
    name: &'static str,
    sql: &'static str,
}

static MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    name: "initial_schema",
    sql: SCHEMA_V1,
}];

// -----------------------------------------------------------------------
// Schema v1 — initial table definitions
// -----------------------------------------------------------------------

const SCHEMA_V1: &str = "\
-- =======================================================================
-- Projects
-- =======================================================================
DEFINE TABLE projects SCHEMAFULL;
DEFINE FIELD name ON TABLE projects TYPE string;
DEFINE FIELD customer_id ON TABLE projects TYPE string DEFAULT '';
DEFINE FIELD customer_name ON TABLE projects TYPE string DEFAULT '';
DEFINE FIELD location ON TABLE projects TYPE string DEFAULT '';
DEFINE FIELD start_date ON TABLE projects TYPE string DEFAULT '';
DEFINE FIELD end_date ON TABLE projects TYPE option<string>;
-- No membership constraint: unknown statuses pass through.
DEFINE FIELD status ON TABLE projects TYPE string DEFAULT '';
-- Monetary value kept as text; coerced to a number on read.
DEFINE FIELD value ON TABLE projects TYPE string DEFAULT '0';
DEFINE FIELD project_type ON TABLE projects TYPE string DEFAULT '';
DEFINE FIELD description ON TABLE projects TYPE string DEFAULT '';
DEFINE FIELD notes ON TABLE projects TYPE string DEFAULT '';
DEFINE FIELD team ON TABLE projects TYPE array DEFAULT [];
DEFINE FIELD team[*] ON TABLE projects TYPE object FLEXIBLE;
DEFINE FIELD updated_at ON TABLE projects TYPE datetime \
    DEFAULT time::now();

-- =======================================================================
-- Customers
-- =======================================================================
DEFINE TABLE customers SCHEMAFULL;
DEFINE FIELD name ON TABLE customers TYPE string;
DEFINE FIELD address ON TABLE customers TYPE string DEFAULT '';
DEFINE FIELD contact_person ON TABLE customers TYPE option<string>;
DEFINE FIELD phone ON TABLE customers TYPE option<string>;
DEFINE FIELD email ON TABLE customers TYPE option<string>;

-- =======================================================================
-- Employees (staff master data)
-- =======================================================================
DEFINE TABLE team_members SCHEMAFULL;
DEFINE FIELD name ON TABLE team_members TYPE string;
DEFINE FIELD role ON TABLE team_members TYPE string DEFAULT '';
DEFINE FIELD status ON TABLE team_members TYPE string DEFAULT '';
DEFINE FIELD email ON TABLE team_members TYPE option<string>;
DEFINE FIELD phone ON TABLE team_members TYPE option<string>;

-- =======================================================================
-- Audit trail (append-only)
-- =======================================================================
DEFINE TABLE activity_logs SCHEMAFULL;
DEFINE FIELD user_email ON TABLE activity_logs TYPE string;
DEFINE FIELD action ON TABLE activity_logs TYPE string;
DEFINE FIELD details ON TABLE activity_logs TYPE string DEFAULT '';
DEFINE FIELD created_at ON TABLE activity_logs TYPE datetime \
    DEFAULT time::now();
";

/// Run all pending migrations against the given SurrealDB client.
///
/// Creates a `_migration` tracking table on first run, then applies
/// each migration whose version exceeds the current maximum.
/// All DEFINE statements are idempotent so re-running is safe.
pub async fn run_migrations<C: Connection>(db: &Surreal<C>) -> Result<(), DbError> {
    db.query(MIGRATION_TABLE_DDL)
        .await?
        .check()
        .map_err(|e| DbError::Migration(e.to_string()))?;

    let mut result = db
        .query("SELECT * FROM _migration ORDER BY version DESC LIMIT 1")
        .await?;
    let records: Vec<MigrationRecord> = result.take(0)?;
    let current_version = records.first().map(|m| m.version).unwrap_or(0);

    for migration in MIGRATIONS {
        if migration.version > current_version {
            info!(
                version = migration.version,
                name = migration.name,
                "Applying migration"
            );
            db.query(migration.sql).await?.check().map_err(|e| {
                DbError::Migration(format!(
                    "Migration v{} '{}' failed: {}",
                    migration.version, migration.name, e,
                ))
            })?;

            db.query("CREATE _migration SET version = $version, name = $name")
                .bind(("version", migration.version))
                .bind(("name", migration.name))
                .await?
                .check()
                .map_err(|e| {
                    DbError::Migration(format!(
                        "Failed to record migration v{}: {}",
                        migration.version, e,
                    ))
                })?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn migrations_are_ordered() {
        for window in MIGRATIONS.windows(2) {
            assert!(
                window[0].version < window[1].version,
                "Migrations must be in ascending version order"
            );
        }
    }
}
