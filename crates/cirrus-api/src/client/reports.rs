//! Saved table reports.

use cirrusdb_client::{Reply, RequestMethod};
use serde::Serialize;
use tracing::instrument;

use crate::Result;

use super::authorized;

impl super::CirrusApi {
    /// List the reports of a table.
    #[instrument(skip(self))]
    pub async fn get_table_reports(&self, appid: &str, tableid: &str) -> Result<Reply> {
        self.client
            .dispatch(
                [appid, "tables", tableid, "reports"],
                authorized(RequestMethod::Get),
            )
            .await
    }

    /// Create a report on a table.
    #[instrument(skip(self, body))]
    pub async fn post_table_report<B: Serialize + ?Sized>(
        &self,
        appid: &str,
        tableid: &str,
        body: &B,
    ) -> Result<Reply> {
        self.client
            .dispatch_with_body(
                [appid, "tables", tableid, "reports"],
                authorized(RequestMethod::Post),
                body,
            )
            .await
    }

    /// Get a single report.
    #[instrument(skip(self))]
    pub async fn get_table_report(
        &self,
        appid: &str,
        tableid: &str,
        reportid: &str,
    ) -> Result<Reply> {
        self.client
            .dispatch(
                [appid, "tables", tableid, "reports", reportid],
                authorized(RequestMethod::Get),
            )
            .await
    }

    /// Replace a report.
    #[instrument(skip(self, body))]
    pub async fn put_table_report<B: Serialize + ?Sized>(
        &self,
        appid: &str,
        tableid: &str,
        reportid: &str,
        body: &B,
    ) -> Result<Reply> {
        self.client
            .dispatch_with_body(
                [appid, "tables", tableid, "reports", reportid],
                authorized(RequestMethod::Put),
                body,
            )
            .await
    }

    /// Delete a report.
    #[instrument(skip(self))]
    pub async fn delete_table_report(
        &self,
        appid: &str,
        tableid: &str,
        reportid: &str,
    ) -> Result<Reply> {
        self.client
            .dispatch(
                [appid, "tables", tableid, "reports", reportid],
                authorized(RequestMethod::Delete),
            )
            .await
    }
}
