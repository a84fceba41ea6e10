use cirrusdb_client::{Reply, RequestMethod};
use serde::Serialize;
use tracing::instrument;

use crate::Result;

use super::authorized;

impl super::CirrusApi {
    /// List the tables of an application.
    #[instrument(skip(self))]
    pub async fn get_tables(&self, appid: &str) -> Result<Reply> {
        self.client
            .dispatch([appid, "tables"], authorized(RequestMethod::Get))
            .await
    }

    /// Create a table.
    #[instrument(skip(self, body))]
    pub async fn post_table<B: Serialize + ?Sized>(&self, appid: &str, body: &B) -> Result<Reply> {
        self.client
            .dispatch_with_body([appid, "tables"], authorized(RequestMethod::Post), body)
            .await
    }

    /// Get a table.
    #[instrument(skip(self))]
    pub async fn get_table(&self, appid: &str, tableid: &str) -> Result<Reply> {
        self.client
            .dispatch([appid, "tables", tableid], authorized(RequestMethod::Get))
            .await
    }

    /// Get the settings of a table.
    #[instrument(skip(self))]
    pub async fn get_table_settings(&self, appid: &str, tableid: &str) -> Result<Reply> {
        self.client
            .dispatch(
                [appid, "tables", tableid, "settings"],
                authorized(RequestMethod::Get),
            )
            .await
    }

    /// Replace a table.
    #[instrument(skip(self, body))]
    pub async fn put_table<B: Serialize + ?Sized>(
        &self,
        appid: &str,
        tableid: &str,
        body: &B,
    ) -> Result<Reply> {
        self.client
            .dispatch_with_body(
                [appid, "tables", tableid],
                authorized(RequestMethod::Put),
                body,
            )
            .await
    }

    /// Delete a table with all of its records.
    #[instrument(skip(self))]
    pub async fn delete_table(&self, appid: &str, tableid: &str) -> Result<Reply> {
        self.client
            .dispatch([appid, "tables", tableid], authorized(RequestMethod::Delete))
            .await
    }
}
