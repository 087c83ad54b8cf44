use rust_decimal::Decimal;
use tracing::debug;

use crate::domain::pricing::{compute_price, cover_box_cost, PriceBreakdown, PricingTable};
use crate::domain::product::Product;

use super::value_objects::OrderForm;

// ============================================================================
// Live Quote for the Order Form
// ============================================================================

/// Price the form as it currently stands for `product`.
///
/// Without a binding there is nothing to price per sheet, but the box still is.
pub fn quote_form(pricing: &PricingTable, form: &OrderForm, product: &Product) -> PriceBreakdown {
    let breakdown = match form.price_selection(product.box_price) {
        Some(selection) => compute_price(pricing, &selection),
        None => {
            let cover = cover_box_cost(product.box_price);
            PriceBreakdown {
                sheet_cost: Decimal::ZERO,
                cover_box_cost: cover,
                total_price: cover,
            }
        }
    };

    debug!(
        sheet_cost = %breakdown.sheet_cost,
        cover_box_cost = %breakdown.cover_box_cost,
        total_price = %breakdown.total_price,
        "Price recomputed"
    );

    breakdown
}

/// Whether an edit touched a field the price depends on
pub fn price_inputs_changed(before: &OrderForm, after: &OrderForm) -> bool {
    before.binding_type != after.binding_type
        || before.paper_type != after.paper_type
        || before.sheet_count != after.sheet_count
}
