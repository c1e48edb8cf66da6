//! Remote audit trail, appended to the `activity_logs` table.

use surrealdb::Connection;

use panorama_core::PanoramaResult;
use panorama_core::models::NewActivity;
use panorama_core::store::ActivityLog;

use crate::connection::RemoteBackend;
use crate::error::DbError;
use crate::mapper::ActivityRecord;

impl<C: Connection> ActivityLog for RemoteBackend<C> {
    async fn record(&self, entry: NewActivity) -> PanoramaResult<()> {
        let record = ActivityRecord::from_activity(&entry);

        let result = self
            .db
            .query("CREATE activity_logs CONTENT $record")
            .bind(("record", record))
            .await
            .map_err(DbError::from)?;
        result
            .check()
            .map_err(|e| DbError::Query(e.to_string()))?;

        Ok(())
    }
}
