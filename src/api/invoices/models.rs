use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ============================================================================
// VALIDATED INPUT MODELS
// ============================================================================

/// An invoice payload that passed schema validation and is ready to persist.
/// Dates are parsed and an empty iban has been normalized to None.
#[derive(Debug, Clone)]
pub struct NewInvoice {
    pub client_id: String,
    pub invoice_type: String,
    pub invoice_date: NaiveDate,
    pub due_date: NaiveDate,
    pub account_name: String,
    pub sort_code: String,
    pub account_number: String,
    pub iban: Option<String>,
    pub services: Vec<NewServiceLine>,
    pub total: f64,
}

#[derive(Debug, Clone)]
pub struct NewServiceLine {
    pub description: String,
    pub price: f64,
}

// ============================================================================
// DATABASE / RESPONSE MODELS
// ============================================================================

/// One row of the invoices table; field names follow the JSON wire format
/// the frontend already speaks (clientId, invoiceDate, ...).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceRecord {
    pub id: String,
    pub client_id: String,
    pub invoice_type: String,
    pub invoice_date: NaiveDate,
    pub due_date: NaiveDate,
    pub account_name: String,
    pub sort_code: String,
    pub account_number: String,
    pub iban: Option<String>,
    pub total: f64,
    pub created_at: DateTime<Utc>,
}

/// One row of the invoice_services table. Rows are returned in input order;
/// the ordering column itself stays internal.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRecord {
    pub id: String,
    pub invoice_id: String,
    pub description: String,
    pub price: f64,
}

/// The success response shape: the created invoice with nested services.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceWithServices {
    #[serde(flatten)]
    pub invoice: InvoiceRecord,
    pub services: Vec<ServiceRecord>,
}
