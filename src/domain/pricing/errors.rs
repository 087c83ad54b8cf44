use rust_decimal::Decimal;

// ============================================================================
// Pricing Table Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum PricingError {
    #[error("Layflat price per sheet cannot be negative: {0}")]
    NegativeLayflatPrice(Decimal),

    #[error("Paper type {paper_type} has a negative price: {price}")]
    NegativePaperPrice { paper_type: String, price: Decimal },

    #[error("Malformed pricing table: {0}")]
    Malformed(#[from] serde_json::Error),
}
