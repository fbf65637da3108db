use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};

use crate::handlers::{auth, booking};
use crate::middleware::auth::auth_middleware;
use crate::middleware::rate_limit::create_public_governor;
use crate::AppState;

pub fn create_router(state: AppState) -> Router {
    let public_governor = create_public_governor();

    // Public routes (IP rate limited)
    let auth_routes = Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .layer(public_governor);

    // Booking lifecycle (requires auth; permission checks live in the handlers)
    let booking_routes = Router::new()
        .route("/", post(booking::create_booking).put(booking::update_booking))
        .route("/change-status", put(booking::change_booking_status))
        .route("/confirm", put(booking::confirm_booking))
        .route("/{garage_id}", get(booking::list_bookings))
        .route(
            "/{garage_id}/{id}",
            get(booking::get_booking_by_id).delete(booking::delete_booking),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    Router::new()
        .nest("/api/auth", auth_routes)
        .nest("/api/bookings", booking_routes)
        .with_state(state)
}
