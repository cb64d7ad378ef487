//! MongoDB access, one module per collection.
//!
//! Every function performs a single driver call; the store's native
//! single-document atomicity is the only consistency guarantee, and the
//! handlers reflect each outcome directly.

use mongodb::bson::doc;
use mongodb::{Client, Database};

use crate::config::AppConfig;

/// Connect to MongoDB and ping the deployment so a bad connection string
/// fails at startup rather than on the first request.
pub async fn connect(config: &AppConfig) -> anyhow::Result<Database> {
    let client = Client::with_uri_str(&config.mongodb_uri).await?;
    let db = client.database(&config.database_name);

    db.run_command(doc! { "ping": 1 }).await?;
    tracing::info!("Connected to MongoDB database {}", config.database_name);

    Ok(db)
}

// User collection operations
pub mod users {
    use futures::stream::TryStreamExt;
    use mongodb::bson::{doc, oid::ObjectId};
    use mongodb::results::{InsertOneResult, UpdateResult};
    use mongodb::Database;

    use crate::auth::types::Role;
    use crate::models::{NewUser, User};

    const COLLECTION: &str = "users";

    pub async fn list_all(db: &Database) -> mongodb::error::Result<Vec<User>> {
        let cursor = db.collection::<User>(COLLECTION).find(doc! {}).await?;
        cursor.try_collect().await
    }

    pub async fn find_by_email(
        db: &Database,
        email: &str,
    ) -> mongodb::error::Result<Option<User>> {
        db.collection::<User>(COLLECTION)
            .find_one(doc! { "email": email })
            .await
    }

    /// Resolve the stored role for an email. Single-key lookup, no caching;
    /// always consistent with the latest write.
    pub async fn find_role(db: &Database, email: &str) -> mongodb::error::Result<Option<Role>> {
        Ok(find_by_email(db, email).await?.and_then(|user| user.role))
    }

    pub async fn insert(db: &Database, user: &NewUser) -> mongodb::error::Result<InsertOneResult> {
        db.collection::<NewUser>(COLLECTION).insert_one(user).await
    }

    pub async fn promote_to_admin(
        db: &Database,
        id: ObjectId,
    ) -> mongodb::error::Result<UpdateResult> {
        db.collection::<User>(COLLECTION)
            .update_one(doc! { "_id": id }, doc! { "$set": { "role": "Admin" } })
            .await
    }
}

// House collection operations
pub mod houses {
    use futures::stream::TryStreamExt;
    use mongodb::bson::{doc, oid::ObjectId, Document};
    use mongodb::results::{DeleteResult, InsertOneResult, UpdateResult};
    use mongodb::Database;

    use crate::models::{House, NewHouse, UpdateHouseRequest};

    const COLLECTION: &str = "houses";

    pub async fn list(db: &Database, city: Option<&str>) -> mongodb::error::Result<Vec<House>> {
        let filter = match city {
            Some(city) => doc! { "city": city },
            None => doc! {},
        };

        let cursor = db.collection::<House>(COLLECTION).find(filter).await?;
        cursor.try_collect().await
    }

    pub async fn list_by_owner(
        db: &Database,
        email: &str,
    ) -> mongodb::error::Result<Vec<House>> {
        let cursor = db
            .collection::<House>(COLLECTION)
            .find(doc! { "ownerEmail": email })
            .await?;
        cursor.try_collect().await
    }

    pub async fn find_by_id(
        db: &Database,
        id: ObjectId,
    ) -> mongodb::error::Result<Option<House>> {
        db.collection::<House>(COLLECTION)
            .find_one(doc! { "_id": id })
            .await
    }

    pub async fn insert(
        db: &Database,
        house: &NewHouse,
    ) -> mongodb::error::Result<InsertOneResult> {
        db.collection::<NewHouse>(COLLECTION).insert_one(house).await
    }

    /// Build the `$set` document for a field replace. Only the enumerated
    /// fields appear; whatever else the client sent never reaches the store.
    pub fn update_doc(request: &UpdateHouseRequest) -> Document {
        doc! {
            "houseName": &request.house_name,
            "bedroomNumber": request.bedroom_number,
            "livingroomNumber": request.livingroom_number,
            "dineNumber": request.dine_number,
            "kitchenNumber": request.kitchen_number,
            "bathroomNumber": request.bathroom_number,
            "floorNumber": request.floor_number,
            "rentPrice": request.rent_price,
        }
    }

    pub async fn update_fields(
        db: &Database,
        id: ObjectId,
        request: &UpdateHouseRequest,
    ) -> mongodb::error::Result<UpdateResult> {
        db.collection::<House>(COLLECTION)
            .update_one(doc! { "_id": id }, doc! { "$set": update_doc(request) })
            .await
    }

    pub async fn update_status(
        db: &Database,
        id: ObjectId,
        status: &str,
    ) -> mongodb::error::Result<UpdateResult> {
        db.collection::<House>(COLLECTION)
            .update_one(doc! { "_id": id }, doc! { "$set": { "status": status } })
            .await
    }

    pub async fn delete(db: &Database, id: ObjectId) -> mongodb::error::Result<DeleteResult> {
        db.collection::<House>(COLLECTION)
            .delete_one(doc! { "_id": id })
            .await
    }
}

// Testimonial collection operations (free-form, append-only)
pub mod testimonials {
    use futures::stream::TryStreamExt;
    use mongodb::bson::{doc, Document};
    use mongodb::results::InsertOneResult;
    use mongodb::Database;

    const COLLECTION: &str = "testimonials";

    pub async fn list_all(db: &Database) -> mongodb::error::Result<Vec<Document>> {
        let cursor = db.collection::<Document>(COLLECTION).find(doc! {}).await?;
        cursor.try_collect().await
    }

    pub async fn insert(
        db: &Database,
        testimonial: &Document,
    ) -> mongodb::error::Result<InsertOneResult> {
        db.collection::<Document>(COLLECTION)
            .insert_one(testimonial)
            .await
    }
}

// Agent collection operations (free-form, read-only via this API)
pub mod agents {
    use futures::stream::TryStreamExt;
    use mongodb::bson::{doc, Document};
    use mongodb::Database;

    const COLLECTION: &str = "agents";

    pub async fn list_all(db: &Database) -> mongodb::error::Result<Vec<Document>> {
        let cursor = db.collection::<Document>(COLLECTION).find(doc! {}).await?;
        cursor.try_collect().await
    }
}

// Payment collection operations (append-only)
pub mod payments {
    use futures::stream::TryStreamExt;
    use mongodb::bson::doc;
    use mongodb::results::InsertOneResult;
    use mongodb::Database;

    use crate::models::{NewPayment, Payment};

    const COLLECTION: &str = "payments";

    pub async fn list_by_owner(
        db: &Database,
        email: &str,
    ) -> mongodb::error::Result<Vec<Payment>> {
        let cursor = db
            .collection::<Payment>(COLLECTION)
            .find(doc! { "ownerEmail": email })
            .await?;
        cursor.try_collect().await
    }

    pub async fn list_by_tenant(
        db: &Database,
        email: &str,
    ) -> mongodb::error::Result<Vec<Payment>> {
        let cursor = db
            .collection::<Payment>(COLLECTION)
            .find(doc! { "email": email })
            .await?;
        cursor.try_collect().await
    }

    pub async fn insert(
        db: &Database,
        payment: &NewPayment,
    ) -> mongodb::error::Result<InsertOneResult> {
        db.collection::<NewPayment>(COLLECTION)
            .insert_one(payment)
            .await
    }
}

// Rented-house collection operations
pub mod rented_houses {
    use futures::stream::TryStreamExt;
    use mongodb::bson::{doc, oid::ObjectId};
    use mongodb::results::{DeleteResult, InsertOneResult};
    use mongodb::Database;

    use crate::models::{NewRentedHouse, RentedHouse};

    const COLLECTION: &str = "rentedhouses";

    pub async fn list_all(db: &Database) -> mongodb::error::Result<Vec<RentedHouse>> {
        let cursor = db
            .collection::<RentedHouse>(COLLECTION)
            .find(doc! {})
            .await?;
        cursor.try_collect().await
    }

    pub async fn list_by_renter(
        db: &Database,
        email: &str,
    ) -> mongodb::error::Result<Vec<RentedHouse>> {
        let cursor = db
            .collection::<RentedHouse>(COLLECTION)
            .find(doc! { "renterEmail": email })
            .await?;
        cursor.try_collect().await
    }

    pub async fn insert(
        db: &Database,
        rented_house: &NewRentedHouse,
    ) -> mongodb::error::Result<InsertOneResult> {
        db.collection::<NewRentedHouse>(COLLECTION)
            .insert_one(rented_house)
            .await
    }

    pub async fn delete(db: &Database, id: ObjectId) -> mongodb::error::Result<DeleteResult> {
        db.collection::<RentedHouse>(COLLECTION)
            .delete_one(doc! { "_id": id })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UpdateHouseRequest;

    #[test]
    fn house_update_doc_contains_exactly_the_replaceable_fields() {
        let request = UpdateHouseRequest {
            house_name: "Green View".to_string(),
            bedroom_number: 3,
            livingroom_number: 1,
            dine_number: 1,
            kitchen_number: 1,
            bathroom_number: 2,
            floor_number: 4,
            rent_price: 15000.0,
        };

        let set = houses::update_doc(&request);
        let mut keys: Vec<&str> = set.keys().map(String::as_str).collect();
        keys.sort_unstable();

        assert_eq!(
            keys,
            vec![
                "bathroomNumber",
                "bedroomNumber",
                "dineNumber",
                "floorNumber",
                "houseName",
                "kitchenNumber",
                "livingroomNumber",
                "rentPrice",
            ]
        );
        assert_eq!(set.get_str("houseName").unwrap(), "Green View");
        assert_eq!(set.get_f64("rentPrice").unwrap(), 15000.0);
    }
}
