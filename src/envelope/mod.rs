//! Wire envelope shared by every entity: URL layout, request body, and the
//! response wrapper with its success/error decision.

mod request;
mod response;

pub use request::{make_url, Action, RequestBody, API_HOST, API_PATH};
pub use response::{Messages, Response, STATUS_OK};
