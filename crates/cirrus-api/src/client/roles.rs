use cirrusdb_client::{Reply, RequestMethod};
use serde::Serialize;
use tracing::instrument;

use crate::Result;

use super::authorized;

impl super::CirrusApi {
    /// List the roles of an application.
    #[instrument(skip(self))]
    pub async fn get_roles(&self, appid: &str) -> Result<Reply> {
        self.client
            .dispatch([appid, "roles"], authorized(RequestMethod::Get))
            .await
    }

    /// Create a role.
    #[instrument(skip(self, body))]
    pub async fn post_role<B: Serialize + ?Sized>(&self, appid: &str, body: &B) -> Result<Reply> {
        self.client
            .dispatch_with_body([appid, "roles"], authorized(RequestMethod::Post), body)
            .await
    }

    /// Get a single role.
    #[instrument(skip(self))]
    pub async fn get_role(&self, appid: &str, roleid: &str) -> Result<Reply> {
        self.client
            .dispatch([appid, "roles", roleid], authorized(RequestMethod::Get))
            .await
    }

    /// Replace a role.
    #[instrument(skip(self, body))]
    pub async fn put_role<B: Serialize + ?Sized>(
        &self,
        appid: &str,
        roleid: &str,
        body: &B,
    ) -> Result<Reply> {
        self.client
            .dispatch_with_body([appid, "roles", roleid], authorized(RequestMethod::Put), body)
            .await
    }

    /// Delete a role.
    #[instrument(skip(self))]
    pub async fn delete_role(&self, appid: &str, roleid: &str) -> Result<Reply> {
        self.client
            .dispatch([appid, "roles", roleid], authorized(RequestMethod::Delete))
            .await
    }
}
