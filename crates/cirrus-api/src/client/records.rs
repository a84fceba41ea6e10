//! Table records.
//!
//! Listing is the one endpoint that takes query parameters. They are
//! passed through to the service untouched, encoded with
//! `serde_urlencoded`.

use cirrusdb_client::{Error, ErrorKind, Reply, RequestMethod};
use serde::Serialize;
use tracing::instrument;

use crate::Result;

use super::authorized;

/// `{appid}/tables/{tableid}/records`, with `?{query}` when non-empty.
fn records_path<Q: Serialize + ?Sized>(
    appid: &str,
    tableid: &str,
    query: Option<&Q>,
) -> Result<String> {
    let mut path = [appid, "tables", tableid, "records"].join("/");

    if let Some(query) = query {
        let encoded = serde_urlencoded::to_string(query)
            .map_err(|e| Error::with_source(ErrorKind::Serialization(e.to_string()), e))?;
        if !encoded.is_empty() {
            path.push('?');
            path.push_str(&encoded);
        }
    }

    Ok(path)
}

impl super::CirrusApi {
    /// List the records of a table.
    #[instrument(skip(self))]
    pub async fn get_table_records(&self, appid: &str, tableid: &str) -> Result<Reply> {
        let path = records_path::<()>(appid, tableid, None)?;
        self.client
            .dispatch(path, authorized(RequestMethod::Get))
            .await
    }

    /// List the records of a table, passing `query` as URL parameters.
    ///
    /// `query` is anything `serde_urlencoded` accepts: a struct, a map or a
    /// slice of pairs.
    ///
    /// ```rust,ignore
    /// let page = api
    ///     .query_table_records("app1", "t1", &[("limit", "50"), ("offset", "100")])
    ///     .await?;
    /// ```
    #[instrument(skip(self, query))]
    pub async fn query_table_records<Q: Serialize + ?Sized>(
        &self,
        appid: &str,
        tableid: &str,
        query: &Q,
    ) -> Result<Reply> {
        let path = records_path(appid, tableid, Some(query))?;
        self.client
            .dispatch(path, authorized(RequestMethod::Get))
            .await
    }

    /// Create a record.
    #[instrument(skip(self, body))]
    pub async fn post_table_record<B: Serialize + ?Sized>(
        &self,
        appid: &str,
        tableid: &str,
        body: &B,
    ) -> Result<Reply> {
        self.client
            .dispatch_with_body(
                [appid, "tables", tableid, "records"],
                authorized(RequestMethod::Post),
                body,
            )
            .await
    }

    /// Get a record.
    #[instrument(skip(self))]
    pub async fn get_table_record(
        &self,
        appid: &str,
        tableid: &str,
        recordid: &str,
    ) -> Result<Reply> {
        self.client
            .dispatch(
                [appid, "tables", tableid, "records", recordid],
                authorized(RequestMethod::Get),
            )
            .await
    }

    /// Replace a record.
    #[instrument(skip(self, body))]
    pub async fn put_table_record<B: Serialize + ?Sized>(
        &self,
        appid: &str,
        tableid: &str,
        recordid: &str,
        body: &B,
    ) -> Result<Reply> {
        self.client
            .dispatch_with_body(
                [appid, "tables", tableid, "records", recordid],
                authorized(RequestMethod::Put),
                body,
            )
            .await
    }

    /// Delete a record.
    #[instrument(skip(self))]
    pub async fn delete_table_record(
        &self,
        appid: &str,
        tableid: &str,
        recordid: &str,
    ) -> Result<Reply> {
        self.client
            .dispatch(
                [appid, "tables", tableid, "records", recordid],
                authorized(RequestMethod::Delete),
            )
            .await
    }
}
