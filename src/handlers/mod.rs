//! HTTP handlers, one module per resource.
//!
//! Each handler performs exactly one database or gateway call and reflects
//! its outcome directly; guards run as extractors before the handler body,
//! so a rejected request has no side effects.

pub mod agents;
pub mod houses;
pub mod payments;
pub mod rented_houses;
pub mod testimonials;
pub mod users;

use axum::http::StatusCode;
use mongodb::bson::oid::ObjectId;

use crate::error::ApiError;

pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

pub async fn root() -> &'static str {
    "Vhara Bari Is Running On Rent..."
}

/// Parse a path segment as a document id, rejecting malformed ids up front.
pub(crate) fn parse_object_id(id: &str, what: &str) -> Result<ObjectId, ApiError> {
    ObjectId::parse_str(id).map_err(|_| ApiError::bad_request(format!("invalid {} id", what)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_object_id() {
        let id = ObjectId::new();
        assert_eq!(parse_object_id(&id.to_hex(), "house").unwrap(), id);
    }

    #[test]
    fn rejects_malformed_object_id() {
        let result = parse_object_id("not-an-id", "house");
        assert!(matches!(result, Err(ApiError::BadRequest(_))));
    }
}
