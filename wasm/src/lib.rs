//! WebAssembly module for the offer administration panel
//!
//! Provides client-side computation for the browser screen:
//! - Offer form validation and payload normalization
//! - Price formatting for the offer table
//! - Expiration conversion between datetime inputs and ISO-8601 instants
//! - The soft-delete confirmation prompt

use rust_decimal::Decimal;
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;
pub use shared::OfferForm;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    web_sys::console::debug_1(&JsValue::from_str("ofertas admin wasm loaded"));
}

/// Validate an offer form and return the payload to submit, as JSON
///
/// Rejections surface as a JS `Error` carrying the localized message.
#[wasm_bindgen]
pub fn validate_offer_form(form_json: &str) -> Result<String, JsValue> {
    let form: OfferForm = serde_json::from_str(form_json)
        .map_err(|e| js_sys::Error::new(&format!("Invalid form JSON: {}", e)))?;

    let payload = form
        .validate()
        .map_err(|e| js_sys::Error::new(&e.to_string()))?;

    serde_json::to_string(&payload)
        .map_err(|e| JsValue::from(js_sys::Error::new(&e.to_string())))
}

/// Banner message for an offer form, or `None` when it would be accepted
#[wasm_bindgen]
pub fn offer_form_error(form_json: &str) -> Option<String> {
    match serde_json::from_str::<OfferForm>(form_json) {
        Ok(form) => form.validate().err().map(|e| e.to_string()),
        Err(e) => Some(format!("Invalid form JSON: {}", e)),
    }
}

/// Format a price with exactly two decimals
///
/// Non-finite input renders as `NaN` or `Infinity`.
#[wasm_bindgen]
pub fn format_offer_price(price: f64) -> String {
    if price.is_nan() {
        return "NaN".to_string();
    }
    if price.is_infinite() {
        return if price > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    match Decimal::try_from(price) {
        Ok(price) => format_price(price),
        Err(_) => format!("{:.2}", price),
    }
}

/// Convert a datetime input value to an ISO-8601 instant, `None` when blank
/// or unparsable
#[wasm_bindgen]
pub fn expiration_to_iso(input: &str) -> Option<String> {
    to_iso_or_null(input)
}

/// Truncate a stored expiration to the datetime input precision
#[wasm_bindgen]
pub fn expiration_input_value(timestamp: &str) -> String {
    datetime_input_value(timestamp)
}

/// Display name of a product or supplier
#[wasm_bindgen]
pub fn catalog_display_name(id: f64, name: Option<String>) -> String {
    display_name(id as i64, name.as_deref())
}

/// Ask the user to confirm a soft delete
#[wasm_bindgen]
pub fn confirm_soft_delete() -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(DELETE_CONFIRMATION).ok())
        .unwrap_or(false)
}
