// Client registry module
// CRUD for the client entities invoices reference by clientId.

pub mod error_handling;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod validation;

pub use error_handling::*;
pub use handlers::*;
pub use models::*;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::state::AppState;

/// Create the client router
pub fn create_client_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", post(create_client_handler).get(list_clients_handler))
        .route("/:id", get(get_client_handler).delete(delete_client_handler))
}
