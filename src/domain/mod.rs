// ============================================================================
// Domain Layer - Business Logic
// ============================================================================
//
// Each area has its own subdirectory with:
// - Value objects
// - Errors
// - The logic operating on them (calculator, step machine, draft, sheet)
//
// Nothing in this layer performs I/O.
//
// ============================================================================

pub mod pricing;
pub mod checkout;
pub mod product;
pub mod order;
