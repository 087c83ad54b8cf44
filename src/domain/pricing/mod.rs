// ============================================================================
// Pricing Domain - Album Price Calculation
// ============================================================================
//
// This module contains the pricing table shape served by the backend and the
// pure calculator that turns a selection into a price breakdown.
// It has no dependencies on the rest of the domain.
//
// ============================================================================

pub mod value_objects;
pub mod errors;
pub mod calculator;

// Re-export for convenience
pub use value_objects::*;
pub use errors::*;
pub use calculator::*;
