//! Applications live at the API root: `GET /api/v1/` lists them and
//! `POST /api/v1/` creates one.

use cirrusdb_client::{Reply, RequestMethod};
use serde::Serialize;
use tracing::instrument;

use crate::Result;

use super::authorized;

impl super::CirrusApi {
    /// List the applications visible to the current user.
    #[instrument(skip(self))]
    pub async fn get_applications(&self) -> Result<Reply> {
        self.client
            .dispatch_root(authorized(RequestMethod::Get))
            .await
    }

    /// Create an application.
    #[instrument(skip(self, body))]
    pub async fn post_application<B: Serialize + ?Sized>(&self, body: &B) -> Result<Reply> {
        self.client
            .dispatch_root_with_body(authorized(RequestMethod::Post), body)
            .await
    }

    /// Get an application.
    #[instrument(skip(self))]
    pub async fn get_application(&self, appid: &str) -> Result<Reply> {
        self.client
            .dispatch(appid, authorized(RequestMethod::Get))
            .await
    }

    /// Get the settings of an application.
    #[instrument(skip(self))]
    pub async fn get_application_settings(&self, appid: &str) -> Result<Reply> {
        self.client
            .dispatch([appid, "settings"], authorized(RequestMethod::Get))
            .await
    }

    /// Replace an application.
    #[instrument(skip(self, body))]
    pub async fn put_application<B: Serialize + ?Sized>(
        &self,
        appid: &str,
        body: &B,
    ) -> Result<Reply> {
        self.client
            .dispatch_with_body(appid, authorized(RequestMethod::Put), body)
            .await
    }

    /// Delete an application and everything in it.
    #[instrument(skip(self))]
    pub async fn delete_application(&self, appid: &str) -> Result<Reply> {
        self.client
            .dispatch(appid, authorized(RequestMethod::Delete))
            .await
    }

    /// Download the file stored in a record's file field.
    #[instrument(skip(self))]
    pub async fn get_file(
        &self,
        appid: &str,
        tableid: &str,
        recordid: &str,
        fieldid: &str,
    ) -> Result<Reply> {
        self.client
            .dispatch(
                [appid, "files", tableid, recordid, fieldid],
                authorized(RequestMethod::Get),
            )
            .await
    }
}
