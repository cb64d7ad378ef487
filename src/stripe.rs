//! Stripe payment-intent adapter.
//!
//! One call surface: create a payment intent for a rent amount and hand the
//! client secret back to the caller. The resulting payment record is stored
//! separately by an explicit POST /payments from the client, so nothing is
//! persisted here.

use serde::Deserialize;

use crate::error::ApiError;

const DEFAULT_BASE_URL: &str = "https://api.stripe.com";
const CURRENCY: &str = "bdt";
const PAYMENT_METHOD_TYPE: &str = "card";

#[derive(Clone)]
pub struct StripeClient {
    http: reqwest::Client,
    secret_key: String,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct PaymentIntent {
    client_secret: String,
}

/// Convert a major-unit price to the minor units Stripe expects.
fn to_minor_units(price: f64) -> i64 {
    (price * 100.0).round() as i64
}

/// Form parameters for a payment-intent creation request.
fn intent_form(amount: i64) -> [(&'static str, String); 3] {
    [
        ("amount", amount.to_string()),
        ("currency", CURRENCY.to_string()),
        ("payment_method_types[]", PAYMENT_METHOD_TYPE.to_string()),
    ]
}

impl StripeClient {
    pub fn new(secret_key: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            secret_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Create a payment intent and return its client secret.
    pub async fn create_intent(&self, price: f64) -> Result<String, ApiError> {
        let amount = to_minor_units(price);

        let response = self
            .http
            .post(format!("{}/v1/payment_intents", self.base_url))
            .bearer_auth(&self.secret_key)
            .form(&intent_form(amount))
            .send()
            .await
            .map_err(|e| ApiError::Payment(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Payment(format!(
                "payment intent creation returned {}: {}",
                status, body
            )));
        }

        let intent: PaymentIntent = response
            .json()
            .await
            .map_err(|e| ApiError::Payment(e.to_string()))?;

        Ok(intent.client_secret)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_converts_to_minor_units() {
        assert_eq!(to_minor_units(50.0), 5000);
        assert_eq!(to_minor_units(0.0), 0);
        assert_eq!(to_minor_units(19.99), 1999);
    }

    #[test]
    fn intent_form_carries_amount_currency_and_method() {
        let form = intent_form(to_minor_units(50.0));
        assert_eq!(form[0], ("amount", "5000".to_string()));
        assert_eq!(form[1], ("currency", "bdt".to_string()));
        assert_eq!(form[2], ("payment_method_types[]", "card".to_string()));
    }
}
