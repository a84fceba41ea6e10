//! Table fields.

use cirrusdb_client::{Reply, RequestMethod};
use serde::Serialize;
use tracing::instrument;

use crate::Result;

use super::authorized;

impl super::CirrusApi {
    /// List the fields of a table.
    #[instrument(skip(self))]
    pub async fn get_table_fields(&self, appid: &str, tableid: &str) -> Result<Reply> {
        self.client
            .dispatch(
                [appid, "tables", tableid, "fields"],
                authorized(RequestMethod::Get),
            )
            .await
    }

    /// Create a field on a table.
    #[instrument(skip(self, body))]
    pub async fn post_table_field<B: Serialize + ?Sized>(
        &self,
        appid: &str,
        tableid: &str,
        body: &B,
    ) -> Result<Reply> {
        self.client
            .dispatch_with_body(
                [appid, "tables", tableid, "fields"],
                authorized(RequestMethod::Post),
                body,
            )
            .await
    }

    /// Get a single field.
    #[instrument(skip(self))]
    pub async fn get_table_field(
        &self,
        appid: &str,
        tableid: &str,
        fieldid: &str,
    ) -> Result<Reply> {
        self.client
            .dispatch(
                [appid, "tables", tableid, "fields", fieldid],
                authorized(RequestMethod::Get),
            )
            .await
    }

    /// Replace a field.
    #[instrument(skip(self, body))]
    pub async fn put_table_field<B: Serialize + ?Sized>(
        &self,
        appid: &str,
        tableid: &str,
        fieldid: &str,
        body: &B,
    ) -> Result<Reply> {
        self.client
            .dispatch_with_body(
                [appid, "tables", tableid, "fields", fieldid],
                authorized(RequestMethod::Put),
                body,
            )
            .await
    }

    /// Delete a field.
    #[instrument(skip(self))]
    pub async fn delete_table_field(
        &self,
        appid: &str,
        tableid: &str,
        fieldid: &str,
    ) -> Result<Reply> {
        self.client
            .dispatch(
                [appid, "tables", tableid, "fields", fieldid],
                authorized(RequestMethod::Delete),
            )
            .await
    }
}
