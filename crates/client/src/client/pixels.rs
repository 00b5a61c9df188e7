//! Fire-and-forget tracking pixel support for [`AdzerkClient`].
//!
//! Impression and click URLs arrive fully formed in a
//! [`Decision`](crate::models::response::Decision); fetching one exists only
//! for its server-side effect. The fetch runs as a detached task: it is not
//! awaited, cannot be cancelled, and its failure is only ever logged.

use tracing::{debug, error};
use url::Url;

use crate::client::AdzerkClient;

impl AdzerkClient {
    /// Fire a tracking pixel at `url_str`.
    ///
    /// Returns `false` without any side effect when the string is not a
    /// valid URL. Otherwise spawns a detached background task that GETs the
    /// URL and discards the body; network failures are logged and never
    /// surfaced.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn impression(&self, url_str: &str) -> bool {
        let url = match Url::parse(url_str) {
            Ok(url) => url,
            Err(e) => {
                error!(url = url_str, "failed to parse impression url: {e}");
                return false;
            }
        };

        let http = self.http.clone();
        tokio::spawn(async move {
            match http.get(url.clone()).send().await {
                Ok(response) => {
                    debug!(url = %url, status = response.status().as_u16(), "impression fired");
                }
                Err(e) => {
                    error!(url = %url, "failed to fire impression: {e}");
                }
            }
        });

        true
    }
}

#[cfg(test)]
mod tests {
    use crate::client::AdzerkClient;

    #[tokio::test]
    async fn test_impression_rejects_malformed_url() {
        let client = AdzerkClient::builder().build().unwrap();
        assert!(!client.impression("not a url"));
    }

    #[tokio::test]
    async fn test_impression_accepts_valid_url() {
        let client = AdzerkClient::builder().build().unwrap();
        // The background fetch will fail against a closed port; that failure
        // is swallowed by contract, so the call still reports true.
        assert!(client.impression("http://127.0.0.1:9/i.gif"));
    }
}
