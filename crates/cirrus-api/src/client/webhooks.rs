//! Table webhooks.

use cirrusdb_client::{Reply, RequestMethod};
use serde::Serialize;
use tracing::instrument;

use crate::Result;

use super::authorized;

impl super::CirrusApi {
    /// List the webhooks of a table.
    #[instrument(skip(self))]
    pub async fn get_table_webhooks(&self, appid: &str, tableid: &str) -> Result<Reply> {
        self.client
            .dispatch(
                [appid, "tables", tableid, "webhooks"],
                authorized(RequestMethod::Get),
            )
            .await
    }

    /// Create a webhook on a table.
    #[instrument(skip(self, body))]
    pub async fn post_table_webhook<B: Serialize + ?Sized>(
        &self,
        appid: &str,
        tableid: &str,
        body: &B,
    ) -> Result<Reply> {
        self.client
            .dispatch_with_body(
                [appid, "tables", tableid, "webhooks"],
                authorized(RequestMethod::Post),
                body,
            )
            .await
    }

    /// Get a single webhook.
    #[instrument(skip(self))]
    pub async fn get_table_webhook(
        &self,
        appid: &str,
        tableid: &str,
        webhookid: &str,
    ) -> Result<Reply> {
        self.client
            .dispatch(
                [appid, "tables", tableid, "webhooks", webhookid],
                authorized(RequestMethod::Get),
            )
            .await
    }

    /// Replace a webhook.
    #[instrument(skip(self, body))]
    pub async fn put_table_webhook<B: Serialize + ?Sized>(
        &self,
        appid: &str,
        tableid: &str,
        webhookid: &str,
        body: &B,
    ) -> Result<Reply> {
        self.client
            .dispatch_with_body(
                [appid, "tables", tableid, "webhooks", webhookid],
                authorized(RequestMethod::Put),
                body,
            )
            .await
    }

    /// Delete a webhook.
    #[instrument(skip(self))]
    pub async fn delete_table_webhook(
        &self,
        appid: &str,
        tableid: &str,
        webhookid: &str,
    ) -> Result<Reply> {
        self.client
            .dispatch(
                [appid, "tables", tableid, "webhooks", webhookid],
                authorized(RequestMethod::Delete),
            )
            .await
    }
}
