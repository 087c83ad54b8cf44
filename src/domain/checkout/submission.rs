use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::errors::CheckoutError;
use super::machine::CheckoutStepMachine;
use super::value_objects::OrderForm;

// ============================================================================
// Order Submission
// ============================================================================

/// Identifiers supplied by the session, not typed by the customer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionContext {
    pub user_id: String,
    pub product_id: String,
}

impl SubmissionContext {
    pub fn new(user_id: impl Into<String>, product_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            product_id: product_id.into(),
        }
    }
}

/// Flat body posted to the orders endpoint: the whole form plus the ids
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPayload {
    #[serde(flatten)]
    pub form: OrderForm,
    pub user_id: String,
    pub product_id: String,
}

impl OrderPayload {
    /// Merge the form with the session identifiers. Performs no checks.
    pub fn assemble(form: &OrderForm, context: &SubmissionContext) -> Self {
        Self {
            form: form.clone(),
            user_id: context.user_id.clone(),
            product_id: context.product_id.clone(),
        }
    }
}

impl CheckoutStepMachine<OrderForm> {
    /// Build the order payload once the customer is on the Delivery step
    /// with every required field filled in.
    pub fn build_submission(
        &self,
        context: &SubmissionContext,
    ) -> Result<OrderPayload, CheckoutError> {
        if !self.is_final_step() {
            return Err(CheckoutError::NotOnFinalStep {
                current: self.current_step_index(),
                last: self.last_index(),
            });
        }

        let last = self.last_index();
        if !self.validate_step(last, self.form()) {
            let warning = self.warning_for(last);
            warn!(step_index = last, "Order submission rejected: {}", warning.message);
            return Err(CheckoutError::Incomplete(warning));
        }

        if context.user_id.is_empty() {
            return Err(CheckoutError::NotSignedIn);
        }
        if context.product_id.is_empty() {
            return Err(CheckoutError::MissingProduct);
        }

        info!(
            user_id = %context.user_id,
            product_id = %context.product_id,
            title = %self.form().title,
            "Order payload assembled"
        );

        Ok(OrderPayload::assemble(self.form(), context))
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
