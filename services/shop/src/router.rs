use axum::{
    Router,
    routing::{delete, get, post, put},
};
use tower_http::trace::TraceLayer;

use pasar_core::health::{healthz, readyz};
use pasar_core::middleware::request_id_layer;

use crate::handlers::{
    category::get_categories,
    sales::get_sales,
    user::{
        admin_update_user, create_user, delete_user, get_all_users, get_balance,
        get_shipping_address, get_user, get_user_by_id, put_balance, put_shipping_address,
    },
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Users
        .route("/users", get(get_user))
        .route("/users", post(create_user))
        .route("/users", delete(delete_user))
        .route("/users/all", get(get_all_users))
        .route("/users/shipping_address", get(get_shipping_address))
        .route("/users/shipping_address", put(put_shipping_address))
        .route("/users/balance", get(get_balance))
        .route("/users/balance", put(put_balance))
        .route("/users/{id}", get(get_user_by_id))
        .route("/users/{id}", put(admin_update_user))
        // Sales
        .route("/sales", get(get_sales))
        // Categories
        .route("/categories", get(get_categories))
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
