// ============================================================================
// Order Domain - Admin view of placed orders
// ============================================================================
//
// - Value objects (AdminOrder, OrderStatus, StatusUpdate)
// - Sheet (OrderSheet for the detail page and the printed work order)
// - Errors (OrderError enum)
//
// ============================================================================

pub mod value_objects;
pub mod sheet;
pub mod errors;

// Re-export for convenience
pub use value_objects::*;
pub use sheet::*;
pub use errors::*;
