use cirrusdb_client::{Reply, RequestMethod};
use serde::Serialize;
use tracing::instrument;

use crate::Result;

use super::authorized;

impl super::CirrusApi {
    /// List the notification rules of a table.
    #[instrument(skip(self))]
    pub async fn get_table_notifications(&self, appid: &str, tableid: &str) -> Result<Reply> {
        self.client
            .dispatch(
                [appid, "tables", tableid, "notifications"],
                authorized(RequestMethod::Get),
            )
            .await
    }

    /// Create a notification on a table.
    #[instrument(skip(self, body))]
    pub async fn post_table_notification<B: Serialize + ?Sized>(
        &self,
        appid: &str,
        tableid: &str,
        body: &B,
    ) -> Result<Reply> {
        self.client
            .dispatch_with_body(
                [appid, "tables", tableid, "notifications"],
                authorized(RequestMethod::Post),
                body,
            )
            .await
    }

    /// Get a single notification.
    #[instrument(skip(self))]
    pub async fn get_table_notification(
        &self,
        appid: &str,
        tableid: &str,
        notificationid: &str,
    ) -> Result<Reply> {
        self.client
            .dispatch(
                [appid, "tables", tableid, "notifications", notificationid],
                authorized(RequestMethod::Get),
            )
            .await
    }

    /// Replace a notification.
    #[instrument(skip(self, body))]
    pub async fn put_table_notification<B: Serialize + ?Sized>(
        &self,
        appid: &str,
        tableid: &str,
        notificationid: &str,
        body: &B,
    ) -> Result<Reply> {
        self.client
            .dispatch_with_body(
                [appid, "tables", tableid, "notifications", notificationid],
                authorized(RequestMethod::Put),
                body,
            )
            .await
    }

    /// Delete a notification.
    #[instrument(skip(self))]
    pub async fn delete_table_notification(
        &self,
        appid: &str,
        tableid: &str,
        notificationid: &str,
    ) -> Result<Reply> {
        self.client
            .dispatch(
                [appid, "tables", tableid, "notifications", notificationid],
                authorized(RequestMethod::Delete),
            )
            .await
    }
}
