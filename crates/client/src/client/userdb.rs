//! UserDB API methods for [`AdzerkClient`].
//!
//! # What this module handles:
//! - Setting custom user properties (serializable value or raw JSON text)
//! - Reading a full user record
//! - Adding interest keywords
//! - Recording brand/segment retargeting
//!
//! # What this module does NOT handle:
//! - Low-level UserDB HTTP calls (in [`crate::endpoints::userdb`])

use serde::Serialize;

use crate::client::AdzerkClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::User;

impl AdzerkClient {
    /// Set custom properties for a user from any serializable value, e.g. a
    /// map of key-value pairs.
    pub async fn set_user_properties<T: Serialize + ?Sized>(
        &self,
        network_id: i64,
        user_key: &str,
        properties: &T,
    ) -> Result<()> {
        endpoints::set_user_properties(&self.http, &self.base_url, network_id, user_key, properties)
            .await
    }

    /// Set custom properties for a user from a pre-serialized JSON string,
    /// e.g. `{"age": 27, "gender": "male"}`.
    pub async fn set_user_properties_json(
        &self,
        network_id: i64,
        user_key: &str,
        json: &str,
    ) -> Result<()> {
        endpoints::set_user_properties_json(&self.http, &self.base_url, network_id, user_key, json)
            .await
    }

    /// Read the UserDB record for a user key.
    pub async fn read_user(&self, network_id: i64, user_key: &str) -> Result<User> {
        endpoints::read_user(&self.http, &self.base_url, network_id, user_key).await
    }

    /// Add an interest keyword to a user.
    pub async fn set_user_interest(
        &self,
        network_id: i64,
        user_key: &str,
        interest: &str,
    ) -> Result<()> {
        endpoints::set_user_interest(&self.http, &self.base_url, network_id, user_key, interest)
            .await
    }

    /// Record retargeting for a brand and segment on a user.
    pub async fn set_user_retargeting(
        &self,
        network_id: i64,
        brand_id: i64,
        segment: &str,
        user_key: &str,
    ) -> Result<()> {
        endpoints::set_user_retargeting(
            &self.http,
            &self.base_url,
            network_id,
            brand_id,
            segment,
            user_key,
        )
        .await
    }
}
