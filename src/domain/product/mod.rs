// ============================================================================
// Product Domain - Catalogue products and the admin product form
// ============================================================================

pub mod value_objects;
pub mod draft;
pub mod errors;

// Re-export for convenience
pub use value_objects::*;
pub use draft::*;
pub use errors::*;
