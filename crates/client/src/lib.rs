//! Adzerk decision API client.
//!
//! This crate provides a type-safe client for requesting native ad
//! decisions from the Adzerk engine: build a [`Request`] describing one or
//! more placements, submit it with [`AdzerkClient::request`], and render the
//! typed [`Response`]. Convenience methods cover UserDB property
//! management and impression/click tracking pixels.
//!
//! ```rust,ignore
//! use adzerk_client::{AdzerkClient, Placement, Request};
//!
//! let client = AdzerkClient::builder().build()?;
//!
//! let request = Request::builder(vec![Placement::new("div1", 9709, 70464, vec![5])])
//!     .keyword("cats")
//!     .build()?;
//!
//! let response = client.request(&request).await?;
//! if let Some(decision) = response.decision("div1") {
//!     // render decision.contents, then:
//!     if let Some(url) = &decision.impression_url {
//!         client.impression(url);
//!     }
//! }
//! ```

pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;
mod serde_helpers;

#[cfg(feature = "test-utils")]
pub mod testing;

pub use client::builder::AdzerkClientBuilder;
pub use client::{AdzerkClient, DEFAULT_ENDPOINT};
pub use error::{ClientError, Result};
pub use models::{
    Content, ContentData, Decision, Event, Placement, Request, RequestBuilder, Response, User,
};
