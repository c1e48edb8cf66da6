//! Remote employee store, backed by the `team_members` table.
//!
//! Deleting an employee leaves historical project team snapshots
//! untouched.

use surrealdb::Connection;
use uuid::Uuid;

use panorama_core::PanoramaResult;
use panorama_core::models::{Employee, Identity};
use panorama_core::store::EmployeeStore;

use crate::connection::RemoteBackend;
use crate::error::DbError;
use crate::mapper::{EmployeeRecord, EmployeeRowWithId};

impl<C: Connection> EmployeeStore for RemoteBackend<C> {
    async fn fetch_employees(&self) -> PanoramaResult<Vec<Employee>> {
        let mut result = self
            .db
            .query(
                "SELECT meta::id(id) AS record_id, * FROM team_members \
                 ORDER BY name ASC",
            )
            .await
            .map_err(DbError::from)?;

        let rows: Vec<EmployeeRowWithId> = result.take(0).map_err(DbError::from)?;
        Ok(rows.into_iter().map(EmployeeRowWithId::into_employee).collect())
    }

    async fn save_employee(&self, employee: Employee) -> PanoramaResult<Employee> {
        let record = EmployeeRecord::from_employee(&employee);

        let (id, query) = match &employee.id {
            Identity::Persisted(id) => (
                *id,
                "UPSERT type::record('team_members', $id) CONTENT $record",
            ),
            _ => (
                Uuid::new_v4(),
                "CREATE type::record('team_members', $id) CONTENT $record",
            ),
        };

        let result = self
            .db
            .query(query)
            .bind(("id", id.to_string()))
            .bind(("record", record))
            .await
            .map_err(DbError::from)?;
        result
            .check()
            .map_err(|e| DbError::Query(e.to_string()))?;

        Ok(Employee {
            id: Identity::Persisted(id),
            ..employee
        })
    }

    async fn delete_employee(&self, id: &Identity) -> PanoramaResult<()> {
        let Some(key) = id.key() else {
            return Ok(());
        };

        self.db
            .query("DELETE type::record('team_members', $id)")
            .bind(("id", key))
            .await
            .map_err(DbError::from)?;

        Ok(())
    }
}
