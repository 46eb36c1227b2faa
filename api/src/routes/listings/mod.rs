//! Listing route handlers
//!
//! Every handler here sits behind the JWT guard. Mutations pass the
//! authenticated user id to the listing service, which enforces ownership.

pub mod create;
pub mod delete;
pub mod detail;
pub mod list;
pub mod mine;
pub mod update;

pub use create::create;
pub use delete::delete;
pub use detail::detail;
pub use list::list;
pub use mine::mine;
pub use update::update;

use actix_web::HttpResponse;
use uuid::Uuid;

use crate::handlers::bad_request;

/// Parse the `{id}` path segment; a malformed id is a 400
pub(crate) fn parse_listing_id(raw: &str) -> Result<Uuid, HttpResponse> {
    Uuid::parse_str(raw).map_err(|_| bad_request("Invalid post ID"))
}
