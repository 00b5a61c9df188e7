//! UserDB endpoints: custom properties, reads, interests, retargeting.

use reqwest::Client;
use serde::Serialize;

use crate::endpoints::send_request;
use crate::error::Result;
use crate::models::User;

/// Set custom properties for a user from any serializable value.
pub async fn set_user_properties<T: Serialize + ?Sized>(
    client: &Client,
    base_url: &str,
    network_id: i64,
    user_key: &str,
    properties: &T,
) -> Result<()> {
    let path = format!("/udb/{}/custom", network_id);
    let url = format!("{}{}", base_url, path);

    let builder = client
        .post(&url)
        .query(&[("userKey", user_key)])
        .json(properties);
    send_request(builder, &path, "POST").await?;

    Ok(())
}

/// Set custom properties for a user from a pre-serialized JSON document.
///
/// The body is sent as-is with an `application/json` content type; no
/// validation is performed on the JSON text.
pub async fn set_user_properties_json(
    client: &Client,
    base_url: &str,
    network_id: i64,
    user_key: &str,
    json: &str,
) -> Result<()> {
    let path = format!("/udb/{}/custom", network_id);
    let url = format!("{}{}", base_url, path);

    let builder = client
        .post(&url)
        .query(&[("userKey", user_key)])
        .header(reqwest::header::CONTENT_TYPE, "application/json")
        .body(json.to_string());
    send_request(builder, &path, "POST").await?;

    Ok(())
}

/// Read the full UserDB record for a user key.
pub async fn read_user(
    client: &Client,
    base_url: &str,
    network_id: i64,
    user_key: &str,
) -> Result<User> {
    let path = format!("/udb/{}/read", network_id);
    let url = format!("{}{}", base_url, path);

    let builder = client.get(&url).query(&[("userKey", user_key)]);
    let response = send_request(builder, &path, "GET").await?;

    Ok(response.json::<User>().await?)
}

/// Add one interest keyword to a user.
pub async fn set_user_interest(
    client: &Client,
    base_url: &str,
    network_id: i64,
    user_key: &str,
    interest: &str,
) -> Result<()> {
    let path = format!("/udb/{}/interest", network_id);
    let url = format!("{}{}", base_url, path);

    let builder = client
        .post(&url)
        .query(&[("userKey", user_key), ("interest", interest)]);
    send_request(builder, &path, "POST").await?;

    Ok(())
}

/// Record a retargeting segment for a brand on a user.
pub async fn set_user_retargeting(
    client: &Client,
    base_url: &str,
    network_id: i64,
    brand_id: i64,
    segment: &str,
    user_key: &str,
) -> Result<()> {
    let path = format!("/udb/{}/rt/{}/{}", network_id, brand_id, segment);
    let url = format!("{}{}", base_url, path);

    let builder = client.post(&url).query(&[("userKey", user_key)]);
    send_request(builder, &path, "POST").await?;

    Ok(())
}
