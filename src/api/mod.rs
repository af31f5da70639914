pub mod clients;
pub mod invoices;

use axum::Router;
use std::sync::Arc;

use crate::state::AppState;

/// All JSON API routes, nested under /api.
pub fn create_api_router() -> Router<Arc<AppState>> {
    Router::new()
        .nest("/api/invoices", invoices::create_invoice_router())
        .nest("/api/clients", clients::create_client_router())
}
