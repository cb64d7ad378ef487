use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use crate::auth;
use crate::handlers::{agents, houses, payments, rented_houses, testimonials, users};
use crate::AppState;

pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Token issuance
        .route("/jwt", post(auth::issue_token))
        // User routes
        .route("/users", get(users::list_users).post(users::create_user))
        .route("/users/verify/:email", get(users::verify_role))
        .route("/users/owner/:email", get(users::check_owner))
        .route("/users/tenant/:email", get(users::check_tenant))
        .route("/users/admin/:email", get(users::check_admin))
        .route("/users/:id", patch(users::promote_user))
        // House routes
        .route("/houses", get(houses::list_houses).post(houses::create_house))
        .route("/houses/user", get(houses::list_owner_houses))
        .route("/houses/status/:id", patch(houses::update_house_status))
        .route(
            "/houses/:id",
            get(houses::get_house)
                .patch(houses::update_house)
                .delete(houses::delete_house),
        )
        // Testimonial routes
        .route(
            "/testimonials",
            get(testimonials::list_testimonials).post(testimonials::create_testimonial),
        )
        // Agent routes
        .route("/agents", get(agents::list_agents))
        // Payment routes
        .route("/create-payment-intent", post(payments::create_payment_intent))
        .route("/payments", post(payments::create_payment))
        .route("/payments/owner/:email", get(payments::list_owner_payments))
        .route("/payments/:email", get(payments::list_tenant_payments))
        // Rented-house routes; the GET leg keys on renter email, the DELETE
        // leg on the record id
        .route(
            "/rentedhouses",
            get(rented_houses::list_rented_houses).post(rented_houses::create_rented_house),
        )
        .route(
            "/rentedhouses/:email",
            get(rented_houses::list_by_renter).delete(rented_houses::delete_rented_house),
        )
}
