//! Remote customer store.
//!
//! Deleting a customer never cascades to projects referencing it;
//! dangling `customer_id` references are tolerated by design.

use surrealdb::Connection;
use uuid::Uuid;

use panorama_core::PanoramaResult;
use panorama_core::models::{Customer, Identity};
use panorama_core::store::CustomerStore;

use crate::connection::RemoteBackend;
use crate::error::DbError;
use crate::mapper::{CustomerRecord, CustomerRowWithId};

impl<C: Connection> CustomerStore for RemoteBackend<C> {
    async fn fetch_customers(&self) -> PanoramaResult<Vec<Customer>> {
        let mut result = self
            .db
            .query(
                "SELECT meta::id(id) AS record_id, * FROM customers \
                 ORDER BY name ASC",
            )
            .await
            .map_err(DbError::from)?;

        let rows: Vec<CustomerRowWithId> = result.take(0).map_err(DbError::from)?;
        Ok(rows.into_iter().map(CustomerRowWithId::into_customer).collect())
    }

    async fn save_customer(&self, customer: Customer) -> PanoramaResult<Customer> {
        let record = CustomerRecord::from_customer(&customer);

        let (id, query) = match &customer.id {
            Identity::Persisted(id) => {
                (*id, "UPSERT type::record('customers', $id) CONTENT $record")
            }
            _ => (
                Uuid::new_v4(),
                "CREATE type::record('customers', $id) CONTENT $record",
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

        Ok(Customer {
            id: Identity::Persisted(id),
            ..customer
        })
    }

    async fn delete_customer(&self, id: &Identity) -> PanoramaResult<()> {
        let Some(key) = id.key() else {
            return Ok(());
        };

        self.db
            .query("DELETE type::record('customers', $id)")
            .bind(("id", key))
            .await
            .map_err(DbError::from)?;

        Ok(())
    }
}
