//! Data models and request/response payloads.
//!
//! Wire field names are camelCase (`ownerEmail`, `rentPrice`, ...) to match
//! the public API surface. Collections accept extra fields from clients;
//! typed models capture the fields the backend actually reads and carry the
//! rest in a flattened document.

use mongodb::bson::{oid::ObjectId, serde_helpers::serialize_object_id_as_hex_string, Bson, Document};
use mongodb::results::{DeleteResult, InsertOneResult, UpdateResult};
use serde::{Deserialize, Serialize};

use crate::auth::types::{deserialize_role, Role};

// --- Users ---

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", serialize_with = "serialize_object_id_as_hex_string")]
    pub id: ObjectId,
    pub email: String,
    #[serde(
        default,
        deserialize_with = "deserialize_role",
        skip_serializing_if = "Option::is_none"
    )]
    pub role: Option<Role>,
    #[serde(flatten)]
    pub extra: Document,
}

/// Signup payload. Extra profile fields (name, photo, ...) are stored as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub email: String,
    #[serde(flatten)]
    pub extra: Document,
}

// --- Houses ---

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct House {
    #[serde(rename = "_id", serialize_with = "serialize_object_id_as_hex_string")]
    pub id: ObjectId,
    pub owner_email: String,
    pub city: String,
    pub house_name: String,
    pub bedroom_number: u32,
    pub livingroom_number: u32,
    pub dine_number: u32,
    pub kitchen_number: u32,
    pub bathroom_number: u32,
    pub floor_number: u32,
    pub rent_price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(flatten)]
    pub extra: Document,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewHouse {
    pub owner_email: String,
    pub city: String,
    pub house_name: String,
    pub bedroom_number: u32,
    pub livingroom_number: u32,
    pub dine_number: u32,
    pub kitchen_number: u32,
    pub bathroom_number: u32,
    pub floor_number: u32,
    pub rent_price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(flatten)]
    pub extra: Document,
}

/// Fields an owner may replace on an existing house. Anything else in the
/// request body is ignored; serde drops unknown fields on deserialization.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateHouseRequest {
    pub house_name: String,
    pub bedroom_number: u32,
    pub livingroom_number: u32,
    pub dine_number: u32,
    pub kitchen_number: u32,
    pub bathroom_number: u32,
    pub floor_number: u32,
    pub rent_price: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatusUpdateRequest {
    pub status: String,
}

// --- Payments ---

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    #[serde(rename = "_id", serialize_with = "serialize_object_id_as_hex_string")]
    pub id: ObjectId,
    /// Paying tenant's email.
    pub email: String,
    pub owner_email: String,
    pub amount: f64,
    #[serde(flatten)]
    pub extra: Document,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPayment {
    pub email: String,
    pub owner_email: String,
    pub amount: f64,
    #[serde(flatten)]
    pub extra: Document,
}

// --- Rented houses ---

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentedHouse {
    #[serde(rename = "_id", serialize_with = "serialize_object_id_as_hex_string")]
    pub id: ObjectId,
    pub renter_email: String,
    /// Advisory reference to the rented house; not enforced by the data layer.
    pub house_id: String,
    #[serde(flatten)]
    pub extra: Document,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRentedHouse {
    pub renter_email: String,
    pub house_id: String,
    #[serde(flatten)]
    pub extra: Document,
}

// --- Mutation result payloads (MongoDB-style shapes) ---

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertResponse {
    pub acknowledged: bool,
    pub inserted_id: String,
}

impl From<InsertOneResult> for InsertResponse {
    fn from(result: InsertOneResult) -> Self {
        Self {
            acknowledged: true,
            inserted_id: bson_id_to_hex(result.inserted_id),
        }
    }
}

/// Render a driver-assigned `_id` as the hex string clients expect.
fn bson_id_to_hex(id: Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        other => other.to_string(),
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResponse {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
}

impl From<UpdateResult> for UpdateResponse {
    fn from(result: UpdateResult) -> Self {
        Self {
            acknowledged: true,
            matched_count: result.matched_count,
            modified_count: result.modified_count,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResponse {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

impl From<DeleteResult> for DeleteResponse {
    fn from(result: DeleteResult) -> Self {
        Self {
            acknowledged: true,
            deleted_count: result.deleted_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;

    #[test]
    fn update_house_request_ignores_unlisted_fields() {
        let body = serde_json::json!({
            "houseName": "Green View",
            "bedroomNumber": 3,
            "livingroomNumber": 1,
            "dineNumber": 1,
            "kitchenNumber": 1,
            "bathroomNumber": 2,
            "floorNumber": 4,
            "rentPrice": 15000.0,
            "ownerEmail": "attacker@example.com",
            "status": "booked"
        });

        let request: UpdateHouseRequest = serde_json::from_value(body).unwrap();
        assert_eq!(request.house_name, "Green View");
        assert_eq!(request.rent_price, 15000.0);
    }

    #[test]
    fn house_keeps_unmodelled_fields_in_extra() {
        let document = doc! {
            "_id": ObjectId::new(),
            "ownerEmail": "owner@example.com",
            "city": "Dhaka",
            "houseName": "Green View",
            "bedroomNumber": 3,
            "livingroomNumber": 1,
            "dineNumber": 1,
            "kitchenNumber": 1,
            "bathroomNumber": 2,
            "floorNumber": 4,
            "rentPrice": 15000.0,
            "photoUrl": "https://example.com/house.jpg",
        };

        let house: House = mongodb::bson::from_document(document).unwrap();
        assert_eq!(house.city, "Dhaka");
        assert_eq!(
            house.extra.get_str("photoUrl").unwrap(),
            "https://example.com/house.jpg"
        );
    }

    #[test]
    fn house_serializes_id_as_hex_string() {
        let id = ObjectId::new();
        let house = House {
            id,
            owner_email: "owner@example.com".to_string(),
            city: "Dhaka".to_string(),
            house_name: "Green View".to_string(),
            bedroom_number: 3,
            livingroom_number: 1,
            dine_number: 1,
            kitchen_number: 1,
            bathroom_number: 2,
            floor_number: 4,
            rent_price: 15000.0,
            status: None,
            extra: Document::new(),
        };

        let value = serde_json::to_value(&house).unwrap();
        assert_eq!(value["_id"], serde_json::json!(id.to_hex()));
        assert_eq!(value["ownerEmail"], serde_json::json!("owner@example.com"));
    }

    #[test]
    fn inserted_ids_render_as_hex() {
        let id = ObjectId::new();
        assert_eq!(bson_id_to_hex(Bson::ObjectId(id)), id.to_hex());
        assert_eq!(bson_id_to_hex(Bson::String("custom".to_string())), "\"custom\"");
    }
}
