//! REST API endpoint implementations.
//!
//! Free functions over a shared `reqwest::Client`; each takes the base URL
//! and its parameters explicitly so they stay independently testable.

mod decisions;
mod request;
mod userdb;

pub use decisions::request_decisions;
pub use request::send as send_request;
pub use userdb::{
    read_user, set_user_interest, set_user_properties, set_user_properties_json,
    set_user_retargeting,
};
