//! Remote project store.

use surrealdb::Connection;
use uuid::Uuid;

use panorama_core::PanoramaResult;
use panorama_core::models::{Identity, Project};
use panorama_core::store::ProjectStore;

use crate::connection::RemoteBackend;
use crate::error::DbError;
use crate::mapper::{ProjectRecord, ProjectRowWithId};

impl<C: Connection> ProjectStore for RemoteBackend<C> {
    async fn fetch_projects(&self) -> PanoramaResult<Vec<Project>> {
        let mut result = self
            .db
            .query(
                "SELECT meta::id(id) AS record_id, * FROM projects \
                 ORDER BY updated_at DESC",
            )
            .await
            .map_err(DbError::from)?;

        let rows: Vec<ProjectRowWithId> = result.take(0).map_err(DbError::from)?;
        Ok(rows.into_iter().map(ProjectRowWithId::into_project).collect())
    }

    async fn save_project(&self, project: Project) -> PanoramaResult<Project> {
        let record = ProjectRecord::from_project(&project);

        // A persisted entity is updated in place; anything else gets a
        // fresh store-assigned id and its local placeholder, if any,
        // never reaches the wire.
        let (id, query) = match &project.id {
            Identity::Persisted(id) => {
                (*id, "UPSERT type::record('projects', $id) CONTENT $record")
            }
            _ => (
                Uuid::new_v4(),
                "CREATE type::record('projects', $id) CONTENT $record",
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

        Ok(Project {
            id: Identity::Persisted(id),
            ..project
        })
    }

    async fn delete_project(&self, id: &Identity) -> PanoramaResult<()> {
        let Some(key) = id.key() else {
            return Ok(());
        };

        self.db
            .query("DELETE type::record('projects', $id)")
            .bind(("id", key))
            .await
            .map_err(DbError::from)?;

        Ok(())
    }
}
