//! Platform users and their API tokens.
//!
//! These are account-level users, not the per-application users in
//! `app_users`.

use cirrusdb_client::{Reply, RequestMethod};
use serde::Serialize;
use tracing::instrument;

use crate::Result;

use super::authorized;

impl super::CirrusApi {
    /// List platform users.
    #[instrument(skip(self))]
    pub async fn get_users(&self) -> Result<Reply> {
        self.client
            .dispatch("users", authorized(RequestMethod::Get))
            .await
    }

    /// Create a platform user.
    #[instrument(skip(self, body))]
    pub async fn post_user<B: Serialize + ?Sized>(&self, body: &B) -> Result<Reply> {
        self.client
            .dispatch_with_body("users", authorized(RequestMethod::Post), body)
            .await
    }

    /// Get a platform user.
    #[instrument(skip(self))]
    pub async fn get_user(&self, userid: &str) -> Result<Reply> {
        self.client
            .dispatch(["users", userid], authorized(RequestMethod::Get))
            .await
    }

    /// Replace a platform user.
    #[instrument(skip(self, body))]
    pub async fn put_user<B: Serialize + ?Sized>(&self, userid: &str, body: &B) -> Result<Reply> {
        self.client
            .dispatch_with_body(["users", userid], authorized(RequestMethod::Put), body)
            .await
    }

    /// Delete a platform user.
    #[instrument(skip(self))]
    pub async fn delete_user(&self, userid: &str) -> Result<Reply> {
        self.client
            .dispatch(["users", userid], authorized(RequestMethod::Delete))
            .await
    }

    // =========================================================================
    // Tokens
    // =========================================================================

    /// List the API tokens of a user.
    #[instrument(skip(self))]
    pub async fn get_user_tokens(&self, userid: &str) -> Result<Reply> {
        self.client
            .dispatch(["users", userid, "tokens"], authorized(RequestMethod::Get))
            .await
    }

    /// Issue a new API token for a user.
    #[instrument(skip(self, body))]
    pub async fn post_user_token<B: Serialize + ?Sized>(
        &self,
        userid: &str,
        body: &B,
    ) -> Result<Reply> {
        self.client
            .dispatch_with_body(
                ["users", userid, "tokens"],
                authorized(RequestMethod::Post),
                body,
            )
            .await
    }

    #[instrument(skip(self))]
    pub async fn get_user_token(&self, userid: &str, tokenid: &str) -> Result<Reply> {
        self.client
            .dispatch(
                ["users", userid, "tokens", tokenid],
                authorized(RequestMethod::Get),
            )
            .await
    }

    #[instrument(skip(self, body))]
    pub async fn put_user_token<B: Serialize + ?Sized>(
        &self,
        userid: &str,
        tokenid: &str,
        body: &B,
    ) -> Result<Reply> {
        self.client
            .dispatch_with_body(
                ["users", userid, "tokens", tokenid],
                authorized(RequestMethod::Put),
                body,
            )
            .await
    }

    /// Revoke an API token.
    #[instrument(skip(self))]
    pub async fn delete_user_token(&self, userid: &str, tokenid: &str) -> Result<Reply> {
        self.client
            .dispatch(
                ["users", userid, "tokens", tokenid],
                authorized(RequestMethod::Delete),
            )
            .await
    }
}
