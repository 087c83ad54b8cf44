// ============================================================================
// Checkout Domain - Multi-Step Album Order Form
// ============================================================================
//
// This module contains ALL order-form code:
// - Value objects (OrderForm, DeliveryAddress, FrontPageCustomization)
// - Commands (FormEdit field changes)
// - Steps (StepDefinition and the per-step guards)
// - Machine (CheckoutStepMachine, CheckoutState, StepTransition)
// - Submission (OrderPayload assembly)
// - Quote (live price for the current form)
// - Errors (CheckoutError enum)
//
// ============================================================================

pub mod value_objects;
pub mod commands;
pub mod steps;
pub mod machine;
pub mod submission;
pub mod quote;
pub mod errors;

// Re-export for convenience
pub use value_objects::*;
pub use commands::*;
pub use steps::*;
pub use machine::*;
pub use submission::*;
pub use quote::*;
pub use errors::*;
