use cirrusdb_client::{Credentials, Reply, RequestMethod, RequestOptions};
use serde::Serialize;
use tracing::instrument;

use crate::Result;

impl super::CirrusApi {
    /// Exchange email and password for a user token.
    ///
    /// The token is kept by the client and used by every later call.
    #[instrument(skip(self, credentials))]
    pub async fn authenticate(&self, credentials: Credentials) -> Result<String> {
        self.client.authenticate(credentials).await
    }

    /// Check whether a token is still valid.
    #[instrument(skip(self, body))]
    pub async fn verify_token<B: Serialize + ?Sized>(&self, body: &B) -> Result<Reply> {
        self.client
            .dispatch_with_body(
                "auth/verify-token",
                RequestOptions::with_method(RequestMethod::Post),
                body,
            )
            .await
    }

    /// Get the identity behind the current token.
    #[instrument(skip(self))]
    pub async fn get_id(&self) -> Result<Reply> {
        self.client
            .dispatch("id", super::authorized(RequestMethod::Get))
            .await
    }

    /// Get the public service manifest. No token needed.
    #[instrument(skip(self))]
    pub async fn get_manifest(&self) -> Result<Reply> {
        self.client.dispatch("manifest", RequestOptions::new()).await
    }

    /// Get usage statistics for the current account.
    #[instrument(skip(self))]
    pub async fn get_usage(&self) -> Result<Reply> {
        self.client
            .dispatch("usage", super::authorized(RequestMethod::Get))
            .await
    }
}
