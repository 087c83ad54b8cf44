use super::value_objects::OrderStatus;

// ============================================================================
// Order Admin Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OrderError {
    #[error("Unknown order status: {0}")]
    UnknownStatus(String),

    #[error("Order is already {0}")]
    StatusUnchanged(OrderStatus),
}
