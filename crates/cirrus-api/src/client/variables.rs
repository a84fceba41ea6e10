//! Application variables.

use cirrusdb_client::{Reply, RequestMethod};
use serde::Serialize;
use tracing::instrument;

use crate::Result;

use super::authorized;

impl super::CirrusApi {
    /// List the variables of an application.
    #[instrument(skip(self))]
    pub async fn get_variables(&self, appid: &str) -> Result<Reply> {
        self.client
            .dispatch([appid, "variables"], authorized(RequestMethod::Get))
            .await
    }

    /// Create a variable.
    #[instrument(skip(self, body))]
    pub async fn post_variable<B: Serialize + ?Sized>(&self, appid: &str, body: &B) -> Result<Reply> {
        self.client
            .dispatch_with_body([appid, "variables"], authorized(RequestMethod::Post), body)
            .await
    }

    /// Get a single variable.
    #[instrument(skip(self))]
    pub async fn get_variable(&self, appid: &str, variableid: &str) -> Result<Reply> {
        self.client
            .dispatch([appid, "variables", variableid], authorized(RequestMethod::Get))
            .await
    }

    /// Replace a variable.
    #[instrument(skip(self, body))]
    pub async fn put_variable<B: Serialize + ?Sized>(
        &self,
        appid: &str,
        variableid: &str,
        body: &B,
    ) -> Result<Reply> {
        self.client
            .dispatch_with_body([appid, "variables", variableid], authorized(RequestMethod::Put), body)
            .await
    }

    /// Delete a variable.
    #[instrument(skip(self))]
    pub async fn delete_variable(&self, appid: &str, variableid: &str) -> Result<Reply> {
        self.client
            .dispatch([appid, "variables", variableid], authorized(RequestMethod::Delete))
            .await
    }
}
