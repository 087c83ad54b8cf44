use super::machine::StepWarning;

// ============================================================================
// Checkout Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CheckoutError {
    #[error("Checkout needs at least one step")]
    NoSteps,

    #[error("Step {index} does not exist (last step is {last})")]
    UnknownStep { index: usize, last: usize },

    #[error("Cannot jump forward from step {current} to step {target}")]
    ForwardJump { current: usize, target: usize },

    #[error("Order can only be submitted from the last step (currently on {current} of {last})")]
    NotOnFinalStep { current: usize, last: usize },

    #[error("{0}")]
    Incomplete(StepWarning),

    #[error("Please login to place an order")]
    NotSignedIn,

    #[error("No product selected for this order")]
    MissingProduct,
}
