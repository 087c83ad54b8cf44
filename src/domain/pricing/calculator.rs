use rust_decimal::Decimal;

use super::errors::PricingError;
use super::value_objects::{BindingType, Orientation, OrderSelection, PriceBreakdown, PricingTable};

// ============================================================================
// Pricing Table Lookups
// ============================================================================

impl PricingTable {
    /// Parse the pricing endpoint's JSON and check its invariants
    pub fn from_json(json: &str) -> Result<Self, PricingError> {
        let table: PricingTable = serde_json::from_str(json)?;
        table.validate()?;
        Ok(table)
    }

    /// All prices must be non-negative
    pub fn validate(&self) -> Result<(), PricingError> {
        let layflat = self.sheet_types.layflat.price_per_sheet;
        if layflat < Decimal::ZERO {
            return Err(PricingError::NegativeLayflatPrice(layflat));
        }

        for (paper_type, price) in &self.sheet_types.nt.paper_types {
            if *price < Decimal::ZERO {
                return Err(PricingError::NegativePaperPrice {
                    paper_type: paper_type.clone(),
                    price: *price,
                });
            }
        }

        Ok(())
    }

    /// NT binding needs at least one paper type to choose from
    pub fn is_nt_selectable(&self) -> bool {
        !self.sheet_types.nt.paper_types.is_empty()
    }

    /// Price of one sheet; unresolved lookups are worth nothing
    pub fn unit_price(&self, binding_type: BindingType, paper_type: Option<&str>) -> Decimal {
        match binding_type {
            BindingType::Layflat => self.sheet_types.layflat.price_per_sheet,
            BindingType::Nt => paper_type
                .filter(|paper| !paper.is_empty())
                .and_then(|paper| self.sheet_types.nt.paper_types.get(paper))
                .copied()
                .unwrap_or(Decimal::ZERO),
        }
    }

    pub fn sizes_for(&self, orientation: Orientation) -> &[String] {
        self.sizes
            .get(orientation.as_str())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn has_size(&self, size: &str) -> bool {
        self.sizes.values().flatten().any(|s| s == size)
    }

    pub fn has_color(&self, name: &str) -> bool {
        self.colors.iter().any(|c| c.name == name)
    }
}

// ============================================================================
// Price Calculation
// ============================================================================

/// Compute the live price for a selection.
///
/// The sheet count is priced as given, even outside the orderable range, so
/// the preview tracks what the customer typed. Range checks happen when the
/// customer tries to leave the Specifications step.
pub fn compute_price(pricing: &PricingTable, selection: &OrderSelection) -> PriceBreakdown {
    let unit_price = pricing.unit_price(selection.binding_type, selection.paper_type.as_deref());
    let sheet_cost = unit_price.saturating_mul(Decimal::from(selection.sheet_count));

    let cover_box_cost = cover_box_cost(selection.box_base_price);

    PriceBreakdown {
        sheet_cost,
        cover_box_cost,
        total_price: sheet_cost.saturating_add(cover_box_cost),
    }
}

/// The product's box price counts once, and only when it is positive
pub fn cover_box_cost(box_base_price: Option<Decimal>) -> Decimal {
    box_base_price
        .filter(|price| *price > Decimal::ZERO)
        .unwrap_or(Decimal::ZERO)
}

// ============================================================================
// Unit Tests
// ============================================================================
