use crate::api::clients::models::CreateClientRequest;

/// Checks the fields the client form has always required.
pub fn validate_create_client(request: &CreateClientRequest) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if request.name.trim().is_empty() {
        errors.push("name must not be empty".to_string());
    }
    if request.surname.trim().is_empty() {
        errors.push("surname must not be empty".to_string());
    }
    if request.phone.trim().is_empty() {
        errors.push("phone must not be empty".to_string());
    }
    if let Err(email_error) = validate_email(&request.email) {
        errors.push(email_error);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

// Simple plausibility check, not RFC 5322.
fn validate_email(email: &str) -> Result<(), String> {
    if email.contains('@') && email.contains('.') && email.len() > 5 {
        Ok(())
    } else {
        Err("email is invalid".to_string())
    }
}
