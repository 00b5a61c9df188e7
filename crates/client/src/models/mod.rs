//! Typed wire models for the decision and UserDB APIs.

pub mod request;
pub mod response;
pub mod user;

pub use request::{Placement, Request, RequestBuilder};
pub use response::{Content, ContentData, Decision, Event, Response};
pub use user::User;
