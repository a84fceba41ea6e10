use cirrusdb_client::{Reply, RequestMethod};
use serde::Serialize;
use tracing::instrument;

use crate::Result;

use super::authorized;

impl super::CirrusApi {
    /// List the users who have access to an application.
    #[instrument(skip(self))]
    pub async fn get_application_users(&self, appid: &str) -> Result<Reply> {
        self.client
            .dispatch([appid, "users"], authorized(RequestMethod::Get))
            .await
    }

    /// Add a user to an application.
    #[instrument(skip(self, body))]
    pub async fn post_application_user<B: Serialize + ?Sized>(&self, appid: &str, body: &B) -> Result<Reply> {
        self.client
            .dispatch_with_body([appid, "users"], authorized(RequestMethod::Post), body)
            .await
    }

    /// Get one user of an application.
    #[instrument(skip(self))]
    pub async fn get_application_user(&self, appid: &str, userid: &str) -> Result<Reply> {
        self.client
            .dispatch([appid, "users", userid], authorized(RequestMethod::Get))
            .await
    }

    /// Replace an application user.
    #[instrument(skip(self, body))]
    pub async fn put_application_user<B: Serialize + ?Sized>(
        &self,
        appid: &str,
        userid: &str,
        body: &B,
    ) -> Result<Reply> {
        self.client
            .dispatch_with_body([appid, "users", userid], authorized(RequestMethod::Put), body)
            .await
    }

    /// Remove a user from an application.
    #[instrument(skip(self))]
    pub async fn delete_application_user(&self, appid: &str, userid: &str) -> Result<Reply> {
        self.client
            .dispatch([appid, "users", userid], authorized(RequestMethod::Delete))
            .await
    }
}
