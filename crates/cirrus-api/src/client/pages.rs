//! Application pages.

use cirrusdb_client::{Reply, RequestMethod};
use serde::Serialize;
use tracing::instrument;

use crate::Result;

use super::authorized;

impl super::CirrusApi {
    /// List the pages of an application.
    #[instrument(skip(self))]
    pub async fn get_pages(&self, appid: &str) -> Result<Reply> {
        self.client
            .dispatch([appid, "pages"], authorized(RequestMethod::Get))
            .await
    }

    /// Create a page.
    #[instrument(skip(self, body))]
    pub async fn post_page<B: Serialize + ?Sized>(&self, appid: &str, body: &B) -> Result<Reply> {
        self.client
            .dispatch_with_body([appid, "pages"], authorized(RequestMethod::Post), body)
            .await
    }

    /// Get a single page.
    #[instrument(skip(self))]
    pub async fn get_page(&self, appid: &str, pageid: &str) -> Result<Reply> {
        self.client
            .dispatch([appid, "pages", pageid], authorized(RequestMethod::Get))
            .await
    }

    /// Replace a page.
    #[instrument(skip(self, body))]
    pub async fn put_page<B: Serialize + ?Sized>(
        &self,
        appid: &str,
        pageid: &str,
        body: &B,
    ) -> Result<Reply> {
        self.client
            .dispatch_with_body([appid, "pages", pageid], authorized(RequestMethod::Put), body)
            .await
    }

    /// Delete a page.
    #[instrument(skip(self))]
    pub async fn delete_page(&self, appid: &str, pageid: &str) -> Result<Reply> {
        self.client
            .dispatch([appid, "pages", pageid], authorized(RequestMethod::Delete))
            .await
    }
}
