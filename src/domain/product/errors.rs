use rust_decimal::Decimal;

// ============================================================================
// Product Form Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProductError {
    #[error("Product name cannot be empty")]
    EmptyName,

    #[error("Price is required")]
    MissingPrice,

    #[error("Box/PAD price is required")]
    MissingBoxPrice,

    #[error("Price cannot be negative: {0}")]
    NegativePrice(Decimal),

    #[error("Box/PAD price cannot be negative: {0}")]
    NegativeBoxPrice(Decimal),

    #[error("No {field} item at position {index}")]
    NoSuchItem { field: &'static str, index: usize },

    #[error("Main image upload failed")]
    ImageUploadFailed,
}
