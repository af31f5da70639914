// Invoice API module
// Validates incoming invoice payloads and persists them together with their
// service lines in a single transaction.

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

/// Create the invoice router
pub fn create_invoice_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", post(create_invoice_handler))
        .route("/:id", get(get_invoice_handler))
        .route("/client/:client_id", get(list_client_invoices_handler))
}
