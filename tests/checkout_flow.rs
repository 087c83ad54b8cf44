//! End-to-end walk through the album order flow.

use album_storefront::domain::checkout::{
    quote_form, AddressField, CheckoutError, CheckoutStepMachine, FormEdit, OrderForm,
    OrderPayload, StepTransition, SubmissionContext,
};
use album_storefront::domain::order::{AdminOrder, OrderSheet};
use album_storefront::domain::pricing::{BindingType, PricingTable};
use album_storefront::domain::product::Product;
use rust_decimal::Decimal;

const PRICING: &str = r##"{
    "sheetTypes": {
        "Layflat": { "pricePerSheet": 120 },
        "NT": { "paperTypes": { "Glossy": 80, "Matte": 90 } }
    },
    "sizes": { "Square": ["12x12"] },
    "colors": [{ "name": "Black", "hex": "#000000" }]
}"##;

fn product() -> Product {
    serde_json::from_str(r#"{"_id": "prod-1", "name": "Classic", "boxPrice": 500}"#).unwrap()
}

fn fill_delivery(machine: &mut CheckoutStepMachine) {
    for (field, value) in [
        (AddressField::Name, "Asha"),
        (AddressField::Phone, "9876543210"),
        (AddressField::Address, "12 MG Road"),
        (AddressField::City, "Pune"),
        (AddressField::State, "Maharashtra"),
        (AddressField::Pincode, "411001"),
    ] {
        machine.apply(FormEdit::SetAddress(field, value.to_string()));
    }
}

#[test]
fn test_full_checkout_produces_submittable_payload() {
    let pricing = PricingTable::from_json(PRICING).unwrap();
    let product = product();
    let mut machine = CheckoutStepMachine::album_order(OrderForm::default());

    // Step 0: Album Details
    assert!(matches!(machine.advance(), StepTransition::Blocked(_)));
    machine.apply(FormEdit::SetTitle("Graduation".to_string()));
    assert_eq!(machine.advance(), StepTransition::Moved { from: 0, to: 1 });

    // Step 1: Specifications, with an out-of-range count typed first
    machine.apply(FormEdit::SelectSize("12x12".to_string()));
    machine.apply(FormEdit::SelectColor("Black".to_string()));
    machine.apply(FormEdit::SetSheetCount(75));

    let preview = quote_form(&pricing, machine.form(), &product);
    assert_eq!(preview.sheet_cost, Decimal::from(6000));

    let blocked = machine.advance();
    assert_eq!(blocked.warning().map(|w| w.step_index), Some(1));
    assert_eq!(machine.current_step_index(), 1);

    machine.apply(FormEdit::SetSheetCount(20));
    assert_eq!(machine.advance(), StepTransition::Moved { from: 1, to: 2 });

    // Step 2: Cover & Customization
    machine.apply(FormEdit::SetImageLink("https://drive.example.com/g".to_string()));
    assert_eq!(machine.advance(), StepTransition::Moved { from: 2, to: 3 });

    // Step 3: Delivery
    let context = SubmissionContext::new("user-9", product.id.clone());
    assert!(matches!(
        machine.build_submission(&context),
        Err(CheckoutError::Incomplete(_))
    ));

    fill_delivery(&mut machine);
    assert!(machine.is_final_step());

    let payload = machine.build_submission(&context).unwrap();
    let breakdown = quote_form(&pricing, &payload.form, &product);
    assert_eq!(breakdown.total_price, Decimal::from(2100));

    let json = serde_json::to_string(&payload).unwrap();
    let decoded: OrderPayload = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, payload);
}

#[test]
fn test_going_back_keeps_entered_data() {
    let mut machine = CheckoutStepMachine::album_order(OrderForm::default());
    machine.apply(FormEdit::SetTitle("Trip".to_string()));
    machine.apply(FormEdit::SelectBinding(BindingType::Layflat));
    machine.advance();
    machine.apply(FormEdit::SelectSize("12x12".to_string()));

    assert_eq!(machine.retreat(), StepTransition::Moved { from: 1, to: 0 });
    assert_eq!(machine.retreat(), StepTransition::Stayed { at: 0 });
    assert_eq!(machine.form().size, "12x12");
    assert_eq!(machine.form().binding_type, Some(BindingType::Layflat));
}

#[test]
fn test_submitted_order_renders_on_admin_sheet() {
    let mut machine = CheckoutStepMachine::album_order(OrderForm::default());
    machine.apply(FormEdit::SetTitle("Graduation".to_string()));
    machine.advance();
    machine.apply(FormEdit::SelectSize("12x12".to_string()));
    machine.apply(FormEdit::SelectColor("Black".to_string()));
    machine.advance();
    machine.apply(FormEdit::SetImageLink("https://drive.example.com/g".to_string()));
    machine.advance();
    fill_delivery(&mut machine);

    let payload = machine
        .build_submission(&SubmissionContext::new("user-9", "prod-1"))
        .unwrap();

    // What the backend stores and hands back to the admin
    let mut stored = serde_json::to_value(&payload).unwrap();
    stored["_id"] = "6601aa00bb11cc22dd33ee44".into();
    stored["status"] = "pending".into();
    stored["createdAt"] = "2026-04-01T09:30:00Z".into();
    stored["calculatedPrice"] = 2100.into();

    let order: AdminOrder = serde_json::from_value(stored).unwrap();
    assert_eq!(order.details, payload.form);

    let sheet = OrderSheet::build(&order, "http://localhost:5007");
    assert_eq!(sheet.page_title, "Order #33EE44");
    assert_eq!(sheet.total.as_deref(), Some("₹2,100"));
    assert_eq!(sheet.delivery.unwrap().city_line, "Pune, Maharashtra");
}
