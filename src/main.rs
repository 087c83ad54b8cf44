use anyhow::Context;
use rust_decimal::Decimal;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use album_storefront::domain::checkout::{
    price_inputs_changed, quote_form, AddressField, CheckoutStepMachine, FormEdit,
    FrontPageField, OrderForm, StepTransition, SubmissionContext,
};
use album_storefront::domain::pricing::{BindingType, PricingTable};
use album_storefront::domain::product::{FrontPageOptions, Product};
use album_storefront::StorefrontConfig;

const SAMPLE_PRICING: &str = r##"{
    "sheetTypes": {
        "Layflat": { "pricePerSheet": 120 },
        "NT": { "paperTypes": { "Glossy": 80, "Matte": 90, "Metallic": 110 } }
    },
    "sizes": {
        "Square": ["10x10", "12x12"],
        "Portrait": ["12x15"],
        "Landscape": ["12x18", "12x36"]
    },
    "colors": [
        { "name": "Black", "hex": "#111111" },
        { "name": "Maroon", "hex": "#800000" }
    ]
}"##;

fn main() -> anyhow::Result<()> {
    // Default to INFO, library at DEBUG; override with RUST_LOG
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,album_storefront=debug")),
        )
        .init();

    let config = StorefrontConfig::from_env();
    let endpoints = config.endpoints();
    tracing::info!(api = %config.api_base_url, "Album storefront demo");

    // === 1. Pricing table: a JSON file path as first argument, or the sample ===
    let pricing = match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("reading pricing table from {path}"))?;
            PricingTable::from_json(&json).context("parsing pricing table")?
        }
        None => PricingTable::from_json(SAMPLE_PRICING).context("parsing sample pricing")?,
    };
    tracing::info!(source = %endpoints.album_pricing(), "Pricing table loaded");

    let product = Product {
        id: "65f0c2a9e1b2c3d4e5f60718".to_string(),
        name: "Royal Album".to_string(),
        box_price: Some(Decimal::from(500)),
        front_page_options: FrontPageOptions {
            show_initials: true,
            show_date: true,
            ..FrontPageOptions::default()
        },
        ..Product::default()
    };

    // === 2. Walk the four checkout steps ===
    let mut machine = CheckoutStepMachine::album_order(OrderForm::default());
    let mut breakdown = quote_form(&pricing, machine.form(), &product);

    // Trying to leave step 0 with no title is refused
    if let StepTransition::Blocked(warning) = machine.advance() {
        tracing::info!(%warning, "Advance refused as expected");
    }

    let edits = [
        vec![
            FormEdit::SetTitle("Romeo & Juliet".to_string()),
            FormEdit::SelectBinding(BindingType::Nt),
            FormEdit::SelectPaper("Matte".to_string()),
        ],
        vec![
            FormEdit::SelectSize("12x36".to_string()),
            FormEdit::SelectColor("Maroon".to_string()),
            FormEdit::SetSheetCount(35),
        ],
        vec![
            FormEdit::SetImageLink("https://drive.example.com/romeo-juliet".to_string()),
            FormEdit::SetFrontPage(FrontPageField::Initials, "R&J".to_string()),
            FormEdit::SetFrontPage(FrontPageField::Date, "2026-02-14".to_string()),
        ],
        vec![
            FormEdit::SetAddress(AddressField::Name, "Asha Rao".to_string()),
            FormEdit::SetAddress(AddressField::Phone, "9876543210".to_string()),
            FormEdit::SetAddress(AddressField::Address, "12 MG Road".to_string()),
            FormEdit::SetAddress(AddressField::City, "Pune".to_string()),
            FormEdit::SetAddress(AddressField::State, "Maharashtra".to_string()),
            FormEdit::SetAddress(AddressField::Pincode, "411001".to_string()),
        ],
    ];

    for step_edits in edits {
        for edit in step_edits {
            let before = machine.form().clone();
            machine.apply(edit);
            if price_inputs_changed(&before, machine.form()) {
                breakdown = quote_form(&pricing, machine.form(), &product);
            }
        }

        if !machine.is_final_step() {
            match machine.advance() {
                StepTransition::Moved { to, .. } => {
                    tracing::info!(step = machine.steps()[to].name, "✅ Step complete")
                }
                other => anyhow::bail!("unexpected transition: {other:?}"),
            }
        }
    }

    tracing::info!(
        sheet_cost = %breakdown.sheet_cost,
        cover_box_cost = %breakdown.cover_box_cost,
        total_price = %breakdown.total_price,
        "💰 Final price"
    );

    // === 3. Assemble the submission ===
    let payload = machine.build_submission(&SubmissionContext::new("user-42", &product.id))?;
    let body = serde_json::to_string_pretty(&payload)?;

    tracing::info!(target_url = %endpoints.orders(), "📦 Order payload ready");
    println!("{body}");

    Ok(())
}
