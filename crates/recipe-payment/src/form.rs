//! Payer details and the request built from them

use recipe_model::RecipeId;
use serde::{Deserialize, Serialize};

pub const DEFAULT_AMOUNT: f64 = 100.0;
pub const DEFAULT_CURRENCY: &str = "ETB";
pub const DEFAULT_EMAIL: &str = "customer@example.com";
pub const DEFAULT_TITLE: &str = "Complete Your Payment";
pub const DEFAULT_DESCRIPTION: &str = "Secure payment processing via Chapa";

/// Editable checkout form
///
/// The amount is kept exactly as typed; nothing downstream parses it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentForm {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub amount: String,
    pub currency: String,
    pub title: String,
    pub description: String,
    pub recipe_id: Option<RecipeId>,
    pub recipe_title: String,
}

impl Default for PaymentForm {
    fn default() -> Self {
        Self {
            email: DEFAULT_EMAIL.into(),
            first_name: "John".into(),
            last_name: "Doe".into(),
            amount: format_amount(DEFAULT_AMOUNT),
            currency: DEFAULT_CURRENCY.into(),
            title: DEFAULT_TITLE.into(),
            description: DEFAULT_DESCRIPTION.into(),
            recipe_id: None,
            recipe_title: "Premium Recipe".into(),
        }
    }
}

impl PaymentForm {
    /// Checkout for one premium recipe
    #[must_use]
    pub fn for_recipe(id: RecipeId, title: impl Into<String>, price: f64) -> Self {
        Self {
            amount: format_amount(price),
            recipe_id: Some(id),
            recipe_title: title.into(),
            ..Self::default()
        }
    }

    #[inline]
    #[must_use]
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    #[inline]
    #[must_use]
    pub fn with_payer(
        mut self,
        email: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        self.email = email.into();
        self.first_name = first_name.into();
        self.last_name = last_name.into();
        self
    }

    /// "Pay 299.99 ETB"
    #[must_use]
    pub fn pay_label(&self) -> String {
        format!("Pay {} {}", self.amount, self.currency)
    }

    /// Freeze the form into a request
    #[must_use]
    pub fn to_request(&self) -> PaymentRequest {
        PaymentRequest {
            amount: self.amount.clone(),
            currency: self.currency.clone(),
            email: self.email.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            recipe_id: self.recipe_id.clone(),
        }
    }
}

/// What the gateway is asked to charge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    /// Payer-entered text, e.g. `"349.99"` or `"349,99"`
    pub amount: String,
    pub currency: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub recipe_id: Option<RecipeId>,
}

fn format_amount(amount: f64) -> String {
    format!("{amount:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults() {
        let form = PaymentForm::default();
        assert_eq!(form.amount, "100.00");
        assert_eq!(form.currency, "ETB");
        assert_eq!(form.email, "customer@example.com");
        assert_eq!(form.pay_label(), "Pay 100.00 ETB");
    }

    #[test]
    fn amount_passes_through_as_typed() {
        let mut form = PaymentForm::for_recipe(RecipeId::new("2"), "Doro Wat", 349.99);
        assert_eq!(form.to_request().amount, "349.99");

        for typed in ["", "349,99", "abc", "-5"] {
            form.amount = typed.into();
            assert_eq!(form.to_request().amount, typed);
        }
    }
}
