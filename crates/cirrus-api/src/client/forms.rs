use cirrusdb_client::{Reply, RequestMethod};
use serde::Serialize;
use tracing::instrument;

use crate::Result;

use super::authorized;

impl super::CirrusApi {
    /// List the forms of a table.
    #[instrument(skip(self))]
    pub async fn get_table_forms(&self, appid: &str, tableid: &str) -> Result<Reply> {
        self.client
            .dispatch(
                [appid, "tables", tableid, "forms"],
                authorized(RequestMethod::Get),
            )
            .await
    }

    /// Create a form on a table.
    #[instrument(skip(self, body))]
    pub async fn post_table_form<B: Serialize + ?Sized>(
        &self,
        appid: &str,
        tableid: &str,
        body: &B,
    ) -> Result<Reply> {
        self.client
            .dispatch_with_body(
                [appid, "tables", tableid, "forms"],
                authorized(RequestMethod::Post),
                body,
            )
            .await
    }

    /// Get a form definition.
    #[instrument(skip(self))]
    pub async fn get_table_form(
        &self,
        appid: &str,
        tableid: &str,
        formid: &str,
    ) -> Result<Reply> {
        self.client
            .dispatch(
                [appid, "tables", tableid, "forms", formid],
                authorized(RequestMethod::Get),
            )
            .await
    }

    /// Replace a form.
    #[instrument(skip(self, body))]
    pub async fn put_table_form<B: Serialize + ?Sized>(
        &self,
        appid: &str,
        tableid: &str,
        formid: &str,
        body: &B,
    ) -> Result<Reply> {
        self.client
            .dispatch_with_body(
                [appid, "tables", tableid, "forms", formid],
                authorized(RequestMethod::Put),
                body,
            )
            .await
    }

    /// Delete a form.
    #[instrument(skip(self))]
    pub async fn delete_table_form(
        &self,
        appid: &str,
        tableid: &str,
        formid: &str,
    ) -> Result<Reply> {
        self.client
            .dispatch(
                [appid, "tables", tableid, "forms", formid],
                authorized(RequestMethod::Delete),
            )
            .await
    }
}
