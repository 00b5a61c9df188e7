//! Decision API endpoint.

use reqwest::Client;

use crate::endpoints::send_request;
use crate::error::Result;
use crate::models::{Request, Response};

/// Request decisions for one or more placements.
///
/// POSTs the serialized request to the engine root and decodes the full
/// decision response.
pub async fn request_decisions(
    client: &Client,
    base_url: &str,
    request: &Request,
) -> Result<Response> {
    let url = format!("{}/", base_url);

    let builder = client.post(&url).json(request);
    let response = send_request(builder, "/", "POST").await?;

    Ok(response.json::<Response>().await?)
}
