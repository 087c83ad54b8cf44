use std::fmt;

use crate::domain::pricing::BindingType;

use super::value_objects::{OrderForm, SHEET_COUNT_RANGE};

// ============================================================================
// Step Definitions
// ============================================================================

/// One page of the checkout flow and the guard that must pass to leave it
pub struct StepDefinition<F> {
    pub id: usize,
    pub name: &'static str,
    pub description: &'static str,
    pub validate: fn(&F) -> bool,
}

// Manual impls: derives would require `F: Clone` / `F: Debug`.
impl<F> Clone for StepDefinition<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F> Copy for StepDefinition<F> {}

impl<F> fmt::Debug for StepDefinition<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StepDefinition")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("description", &self.description)
            .finish()
    }
}

/// The four pages of the album order flow, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutStep {
    AlbumDetails,
    Specifications,
    CoverAndCustomization,
    Delivery,
}

impl CheckoutStep {
    pub const ALL: [CheckoutStep; 4] = [
        CheckoutStep::AlbumDetails,
        CheckoutStep::Specifications,
        CheckoutStep::CoverAndCustomization,
        CheckoutStep::Delivery,
    ];

    pub fn definition(self) -> StepDefinition<OrderForm> {
        match self {
            CheckoutStep::AlbumDetails => StepDefinition {
                id: 0,
                name: "Album Details",
                description: "Title & Binding",
                validate: album_details_complete,
            },
            CheckoutStep::Specifications => StepDefinition {
                id: 1,
                name: "Specifications",
                description: "Size & Color",
                validate: specifications_complete,
            },
            CheckoutStep::CoverAndCustomization => StepDefinition {
                id: 2,
                name: "Cover & Customization",
                description: "Cover, Box & Front Page",
                validate: cover_complete,
            },
            CheckoutStep::Delivery => StepDefinition {
                id: 3,
                name: "Delivery",
                description: "Address & Submit",
                validate: delivery_complete,
            },
        }
    }
}

/// Step list used by the storefront's album order page
pub fn reference_steps() -> Vec<StepDefinition<OrderForm>> {
    CheckoutStep::ALL.iter().map(|step| step.definition()).collect()
}

// ============================================================================
// Step Guards
// ============================================================================

/// Title, a binding, and a paper type unless the binding is Layflat
pub fn album_details_complete(form: &OrderForm) -> bool {
    let binding_ok = match form.binding_type {
        Some(BindingType::Layflat) => true,
        Some(BindingType::Nt) => !form.paper_type.is_empty(),
        None => false,
    };

    !form.title.is_empty() && binding_ok
}

pub fn specifications_complete(form: &OrderForm) -> bool {
    !form.size.is_empty()
        && !form.album_color.is_empty()
        && SHEET_COUNT_RANGE.contains(&form.sheet_count)
}

pub fn cover_complete(form: &OrderForm) -> bool {
    form.box_type.is_some() && !form.image_link.is_empty()
}

pub fn delivery_complete(form: &OrderForm) -> bool {
    form.delivery_address.is_complete()
}

// ============================================================================
// Unit Tests
// ============================================================================
