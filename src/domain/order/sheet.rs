use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::domain::checkout::DeliveryAddress;
use crate::media::resolve_image_url;

use super::value_objects::{AdminOrder, OrderStatus, StatusTone};

// ============================================================================
// Order Sheet - Admin detail page and printable work order
// ============================================================================

pub const PAGE_NUMBER_LEN: usize = 6;
pub const PRINT_NUMBER_LEN: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetRow {
    pub label: &'static str,
    pub value: String,
}

impl SheetRow {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddOn {
    pub label: &'static str,
    pub included: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerBlock {
    pub name: String,
    pub email: String,
    pub business_name: Option<String>,
    /// Avatar letter
    pub initial: char,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryBlock {
    pub name: String,
    pub phone: String,
    pub street: String,
    pub city_line: String,
    pub pincode: String,
    pub country: String,
}

/// Everything the admin order page and its print layout display
#[derive(Debug, Clone, PartialEq)]
pub struct OrderSheet {
    pub page_title: String,
    pub print_number: String,
    pub status: OrderStatus,
    pub status_tone: StatusTone,
    pub ordered_on: String,
    pub ordered_at: String,
    pub customer: CustomerBlock,
    pub product_name: String,
    pub product_image: Option<String>,
    pub specifications: Vec<SheetRow>,
    pub customization: Vec<SheetRow>,
    pub cover_image: Option<String>,
    pub add_ons: Vec<AddOn>,
    pub delivery: Option<DeliveryBlock>,
    pub attachments: Vec<SheetRow>,
    pub total: Option<String>,
}

impl OrderSheet {
    pub fn build(order: &AdminOrder, base_url: &str) -> Self {
        let details = &order.details;

        let customer = match &order.user {
            Some(user) => CustomerBlock {
                name: non_empty_or(&user.name, "Unknown User"),
                email: non_empty_or(&user.email, "N/A"),
                business_name: user.business_name.clone().filter(|name| !name.is_empty()),
                initial: user.name.chars().next().unwrap_or('U'),
            },
            None => CustomerBlock {
                name: "Unknown User".to_string(),
                email: "N/A".to_string(),
                business_name: None,
                initial: 'U',
            },
        };

        let (product_name, product_image) = match &order.product {
            Some(product) => (
                product.name.clone(),
                (!product.image.is_empty()).then(|| resolve_image_url(base_url, &product.image)),
            ),
            None => (String::new(), None),
        };

        let front_page = &details.front_page_customization;
        let cover_image = (!front_page.cover_image.is_empty())
            .then(|| resolve_image_url(base_url, &front_page.cover_image));

        let mut attachments = Vec::new();
        if !details.image_link.is_empty() {
            attachments.push(SheetRow::new("Image Link", details.image_link.clone()));
        }
        if !details.logo.is_empty() {
            attachments.push(SheetRow::new("Logo", resolve_image_url(base_url, &details.logo)));
        }

        Self {
            page_title: format!("Order #{}", short_order_number(&order.id, PAGE_NUMBER_LEN)),
            print_number: format!("ORDER #{}", short_order_number(&order.id, PRINT_NUMBER_LEN)),
            status: order.status,
            status_tone: order.status.tone(),
            ordered_on: order.created_at.format("%b %-d, %Y").to_string(),
            ordered_at: order.created_at.format("%-I:%M:%S %p").to_string(),
            customer,
            product_name,
            product_image,
            specifications: specification_rows(order),
            customization: customization_rows(order),
            cover_image,
            add_ons: vec![
                AddOn {
                    label: "Acrylic Calendar",
                    included: details.acrylic_calendar,
                },
                AddOn {
                    label: "Replica E-book",
                    included: details.replica_ebook,
                },
            ],
            delivery: delivery_block(&details.delivery_address),
            attachments,
            total: order
                .calculated_price
                .filter(|price| *price > Decimal::ZERO)
                .map(format_inr),
        }
    }

    pub fn has_customization(&self) -> bool {
        !self.customization.is_empty() || self.cover_image.is_some()
    }
}

fn specification_rows(order: &AdminOrder) -> Vec<SheetRow> {
    let details = &order.details;

    let mut rows = vec![
        SheetRow::new("Title", details.title.clone()),
        SheetRow::new("Size", details.size.clone()),
        SheetRow::new("Quantity", details.quantity.to_string()),
        SheetRow::new(
            "Binding Type",
            details.binding_type.map(|b| b.as_str()).unwrap_or_default(),
        ),
        SheetRow::new("Paper Type", details.paper_type.clone()),
        SheetRow::new("Sheet Count", format!("{} sheets", details.sheet_count)),
    ];

    let optional = [
        ("Album Color", details.album_color.as_str()),
        ("Cover Type", order.cover_type.as_deref().unwrap_or_default()),
        ("Box Type", details.box_type.map(|b| b.as_str()).unwrap_or_default()),
        ("Additional Paper", details.additional_paper.as_str()),
        ("Bag Type", details.bag_type.as_str()),
        ("Calendar Type", details.calendar_type.as_str()),
    ];
    rows.extend(
        optional
            .into_iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(label, value)| SheetRow::new(label, value)),
    );

    rows
}

fn customization_rows(order: &AdminOrder) -> Vec<SheetRow> {
    let front_page = &order.details.front_page_customization;

    let date = (!front_page.date.is_empty()).then(|| format_event_date(&front_page.date));
    [
        ("Full Names", Some(front_page.full_names.clone())),
        ("Initials", Some(front_page.initials.clone())),
        ("Event Date", date),
        ("Custom Text", Some(front_page.custom_text.clone())),
    ]
    .into_iter()
    .filter_map(|(label, value)| {
        value
            .filter(|v| !v.is_empty())
            .map(|v| SheetRow::new(label, v))
    })
    .collect()
}

fn delivery_block(address: &DeliveryAddress) -> Option<DeliveryBlock> {
    let blank = [
        &address.name,
        &address.phone,
        &address.address,
        &address.city,
        &address.state,
        &address.pincode,
    ]
    .iter()
    .all(|field| field.is_empty());

    if blank {
        return None;
    }

    Some(DeliveryBlock {
        name: address.name.clone(),
        phone: address.phone.clone(),
        street: address.address.clone(),
        city_line: format!("{}, {}", address.city, address.state),
        pincode: address.pincode.clone(),
        country: address.country.clone(),
    })
}

fn non_empty_or(value: &str, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}

/// Trailing `len` characters of the id, uppercased
pub fn short_order_number(id: &str, len: usize) -> String {
    let skip = id.chars().count().saturating_sub(len);
    id.chars().skip(skip).collect::<String>().to_uppercase()
}

/// `2026-02-14` becomes `2/14/2026`; anything unparseable is shown as entered
pub fn format_event_date(raw: &str) -> String {
    let date_part = raw.get(..10).unwrap_or(raw);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%-m/%-d/%Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Rupee amount with Indian digit grouping, e.g. `₹12,34,567.5`
pub fn format_inr(amount: Decimal) -> String {
    let rounded = amount
        .round_dp_with_strategy(3, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    let sign = if rounded < Decimal::ZERO { "-" } else { "" };
    let text = rounded.abs().to_string();

    let (whole, fraction) = match text.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (text.as_str(), None),
    };

    let mut out = format!("{sign}₹{}", group_indian(whole));
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

/// Last three digits, then pairs: 1234567 -> 12,34,567
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (mut rest, tail) = digits.split_at(digits.len() - 3);
    let mut pairs = Vec::new();
    while rest.len() > 2 {
        let (head, pair) = rest.split_at(rest.len() - 2);
        pairs.push(pair);
        rest = head;
    }
    pairs.push(rest);
    pairs.reverse();

    format!("{},{}", pairs.join(","), tail)
}

// ============================================================================
// Unit Tests
// ============================================================================
