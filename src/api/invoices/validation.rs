use chrono::{DateTime, NaiveDate};
use serde_json::{Map, Value};

use crate::api::invoices::models::{NewInvoice, NewServiceLine};

// ============================================================================
// VALIDATION FUNCTIONS
// ============================================================================

/// Schema-validates a raw request body into a NewInvoice.
///
/// Fails closed: every missing or mistyped field is collected before the
/// result is decided, and nothing reaches storage on Err.
pub fn validate_create_request(body: &Value) -> Result<NewInvoice, Vec<String>> {
    let Some(obj) = body.as_object() else {
        return Err(vec!["request body must be a JSON object".to_string()]);
    };

    let mut errors = Vec::new();

    let client_id = require_string(obj, "clientId", &mut errors);
    let invoice_type = require_string(obj, "invoiceType", &mut errors);
    let invoice_date = require_date(obj, "invoiceDate", &mut errors);
    let due_date = require_date(obj, "dueDate", &mut errors);
    let account_name = require_string(obj, "accountName", &mut errors);
    let sort_code = require_string(obj, "sortCode", &mut errors);
    let account_number = require_string(obj, "accountNumber", &mut errors);
    let iban = optional_string(obj, "iban", &mut errors);
    let services = require_services(obj, &mut errors);
    let total = require_number(obj, "total", &mut errors);

    match (
        client_id,
        invoice_type,
        invoice_date,
        due_date,
        account_name,
        sort_code,
        account_number,
        services,
        total,
    ) {
        (
            Some(client_id),
            Some(invoice_type),
            Some(invoice_date),
            Some(due_date),
            Some(account_name),
            Some(sort_code),
            Some(account_number),
            Some(services),
            Some(total),
        ) if errors.is_empty() => Ok(NewInvoice {
            client_id,
            invoice_type,
            invoice_date,
            due_date,
            account_name,
            sort_code,
            account_number,
            iban: normalize_iban(iban),
            services,
            total,
        }),
        _ => Err(errors),
    }
}

/// An absent or empty iban is stored as an explicit NULL, never "".
pub fn normalize_iban(iban: Option<String>) -> Option<String> {
    iban.filter(|s| !s.is_empty())
}

// ============================================================================
// FIELD HELPERS
// ============================================================================

fn require_string(
    obj: &Map<String, Value>,
    field: &str,
    errors: &mut Vec<String>,
) -> Option<String> {
    match obj.get(field) {
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            errors.push(format!("{} must be a string", field));
            None
        }
        None => {
            errors.push(format!("{} is required", field));
            None
        }
    }
}

fn require_number(obj: &Map<String, Value>, field: &str, errors: &mut Vec<String>) -> Option<f64> {
    match obj.get(field).and_then(Value::as_f64) {
        Some(n) => Some(n),
        None => {
            match obj.get(field) {
                Some(_) => errors.push(format!("{} must be a number", field)),
                None => errors.push(format!("{} is required", field)),
            }
            None
        }
    }
}

/// Dates arrive as ISO strings. Plain dates are the common case; full
/// RFC 3339 timestamps are accepted and truncated to their date part.
fn require_date(
    obj: &Map<String, Value>,
    field: &str,
    errors: &mut Vec<String>,
) -> Option<NaiveDate> {
    let raw = require_string(obj, field, errors)?;
    match parse_iso_date(&raw) {
        Some(date) => Some(date),
        None => {
            errors.push(format!("{} must be an ISO date (YYYY-MM-DD)", field));
            None
        }
    }
}

fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

/// Present-and-null counts as absent; a present non-string is a type error.
fn optional_string(
    obj: &Map<String, Value>,
    field: &str,
    errors: &mut Vec<String>,
) -> Option<String> {
    match obj.get(field) {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Null) | None => None,
        Some(_) => {
            errors.push(format!("{} must be a string", field));
            None
        }
    }
}

fn require_services(
    obj: &Map<String, Value>,
    errors: &mut Vec<String>,
) -> Option<Vec<NewServiceLine>> {
    let items = match obj.get("services") {
        Some(Value::Array(items)) => items,
        Some(_) => {
            errors.push("services must be an array".to_string());
            return None;
        }
        None => {
            errors.push("services is required".to_string());
            return None;
        }
    };

    let mut lines = Vec::with_capacity(items.len());
    let before = errors.len();

    for (idx, item) in items.iter().enumerate() {
        let Some(entry) = item.as_object() else {
            errors.push(format!("services[{}] must be an object", idx));
            continue;
        };

        let description = match entry.get("description") {
            Some(Value::String(s)) => Some(s.clone()),
            Some(_) => {
                errors.push(format!("services[{}].description must be a string", idx));
                None
            }
            None => {
                errors.push(format!("services[{}].description is required", idx));
                None
            }
        };

        let price = match entry.get("price").and_then(Value::as_f64) {
            Some(n) => Some(n),
            None => {
                match entry.get("price") {
                    Some(_) => errors.push(format!("services[{}].price must be a number", idx)),
                    None => errors.push(format!("services[{}].price is required", idx)),
                }
                None
            }
        };

        if let (Some(description), Some(price)) = (description, price) {
            lines.push(NewServiceLine { description, price });
        }
    }

    if errors.len() > before {
        None
    } else {
        Some(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_payload() -> Value {
        json!({
            "clientId": "c1",
            "invoiceType": "standard",
            "invoiceDate": "2024-01-01",
            "dueDate": "2024-01-15",
            "accountName": "Acme",
            "sortCode": "12-34-56",
            "accountNumber": "12345678",
            "services": [{ "description": "Consulting", "price": 100 }],
            "total": 100
        })
    }

    #[test]
    fn test_valid_payload_passes() {
        let parsed = validate_create_request(&valid_payload()).unwrap();
        assert_eq!(parsed.client_id, "c1");
        assert_eq!(parsed.invoice_type, "standard");
        assert_eq!(
            parsed.invoice_date,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
        assert_eq!(parsed.due_date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        assert_eq!(parsed.services.len(), 1);
        assert_eq!(parsed.services[0].description, "Consulting");
        assert_eq!(parsed.services[0].price, 100.0);
        assert_eq!(parsed.total, 100.0);
        assert_eq!(parsed.iban, None);
    }

    #[test]
    fn test_missing_required_field_is_collected() {
        let mut payload = valid_payload();
        payload.as_object_mut().unwrap().remove("clientId");

        let errors = validate_create_request(&payload).unwrap_err();
        assert!(errors.iter().any(|e| e.contains("clientId")));
    }

    #[test]
    fn test_all_violations_are_collected() {
        // Only clientId present, everything else missing
        let errors = validate_create_request(&json!({ "clientId": "c1" })).unwrap_err();
        assert!(errors.len() >= 8, "expected one error per missing field, got {:?}", errors);
    }

    #[test]
    fn test_mistyped_total_is_rejected() {
        let mut payload = valid_payload();
        payload["total"] = json!("100");

        let errors = validate_create_request(&payload).unwrap_err();
        assert!(errors.iter().any(|e| e.contains("total")));
    }

    #[test]
    fn test_invalid_date_is_rejected() {
        let mut payload = valid_payload();
        payload["invoiceDate"] = json!("not-a-date");

        let errors = validate_create_request(&payload).unwrap_err();
        assert!(errors.iter().any(|e| e.contains("invoiceDate")));
    }

    #[test]
    fn test_rfc3339_timestamp_is_accepted_as_date() {
        let mut payload = valid_payload();
        payload["invoiceDate"] = json!("2024-01-01T10:30:00Z");

        let parsed = validate_create_request(&payload).unwrap();
        assert_eq!(
            parsed.invoice_date,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
    }

    #[test]
    fn test_empty_iban_normalizes_to_none() {
        let mut payload = valid_payload();
        payload["iban"] = json!("");

        let parsed = validate_create_request(&payload).unwrap();
        assert_eq!(parsed.iban, None);
    }

    #[test]
    fn test_real_iban_is_kept() {
        let mut payload = valid_payload();
        payload["iban"] = json!("GB29NWBK60161331926819");

        let parsed = validate_create_request(&payload).unwrap();
        assert_eq!(parsed.iban.as_deref(), Some("GB29NWBK60161331926819"));
    }

    #[test]
    fn test_empty_services_array_is_valid() {
        let mut payload = valid_payload();
        payload["services"] = json!([]);

        let parsed = validate_create_request(&payload).unwrap();
        assert!(parsed.services.is_empty());
    }

    #[test]
    fn test_service_entry_missing_price_is_rejected() {
        let mut payload = valid_payload();
        payload["services"] = json!([{ "description": "Consulting" }]);

        let errors = validate_create_request(&payload).unwrap_err();
        assert!(errors.iter().any(|e| e.contains("services[0].price")));
    }

    #[test]
    fn test_service_order_is_preserved() {
        let mut payload = valid_payload();
        payload["services"] = json!([
            { "description": "Design", "price": 50 },
            { "description": "Development", "price": 200 },
            { "description": "Hosting", "price": 25 }
        ]);

        let parsed = validate_create_request(&payload).unwrap();
        let descriptions: Vec<_> = parsed
            .services
            .iter()
            .map(|s| s.description.as_str())
            .collect();
        assert_eq!(descriptions, vec!["Design", "Development", "Hosting"]);
    }

    #[test]
    fn test_non_object_body_is_rejected() {
        let errors = validate_create_request(&json!([1, 2, 3])).unwrap_err();
        assert_eq!(errors.len(), 1);
    }
}
