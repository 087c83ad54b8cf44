use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::domain::pricing::{BindingType, OrderSelection};
use crate::serde_helpers::null_as_default;
use rust_decimal::Decimal;

// ============================================================================
// Order Form Limits
// ============================================================================

pub const MIN_SHEET_COUNT: u32 = 20;
pub const MAX_SHEET_COUNT: u32 = 60;
pub const SHEET_COUNT_RANGE: RangeInclusive<u32> = MIN_SHEET_COUNT..=MAX_SHEET_COUNT;

/// Paper type restored whenever NT binding is picked
pub const DEFAULT_PAPER_TYPE: &str = "Glossy";
pub const DEFAULT_COUNTRY: &str = "India";

pub const MAX_INITIALS_LEN: usize = 10;
pub const MAX_CUSTOM_TEXT_LEN: usize = 100;

// ============================================================================
// Order Form Value Objects
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoxType {
    Regular,
    Matte,
    Glossy,
}

impl BoxType {
    pub const ALL: [BoxType; 3] = [BoxType::Regular, BoxType::Matte, BoxType::Glossy];

    pub fn as_str(&self) -> &'static str {
        match self {
            BoxType::Regular => "Regular",
            BoxType::Matte => "Matte",
            BoxType::Glossy => "Glossy",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeliveryAddress {
    #[serde(deserialize_with = "null_as_default::deserialize")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default::deserialize")]
    pub phone: String,
    #[serde(deserialize_with = "null_as_default::deserialize")]
    pub address: String,
    #[serde(deserialize_with = "null_as_default::deserialize")]
    pub city: String,
    #[serde(deserialize_with = "null_as_default::deserialize")]
    pub state: String,
    #[serde(deserialize_with = "null_as_default::deserialize")]
    pub pincode: String,
    #[serde(deserialize_with = "null_as_default::deserialize")]
    pub country: String,
}

impl Default for DeliveryAddress {
    fn default() -> Self {
        Self {
            name: String::new(),
            phone: String::new(),
            address: String::new(),
            city: String::new(),
            state: String::new(),
            pincode: String::new(),
            country: DEFAULT_COUNTRY.to_string(),
        }
    }
}

impl DeliveryAddress {
    /// Country is prefilled and never required
    pub fn is_complete(&self) -> bool {
        [
            &self.name,
            &self.phone,
            &self.address,
            &self.city,
            &self.state,
            &self.pincode,
        ]
        .iter()
        .all(|field| !field.is_empty())
    }
}

/// Optional cover personalisation; which fields are offered depends on the product
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FrontPageCustomization {
    #[serde(deserialize_with = "null_as_default::deserialize")]
    pub full_names: String,
    #[serde(deserialize_with = "null_as_default::deserialize")]
    pub initials: String,
    #[serde(deserialize_with = "null_as_default::deserialize")]
    pub cover_image: String,
    /// ISO date as entered, e.g. `2026-02-14`
    #[serde(deserialize_with = "null_as_default::deserialize")]
    pub date: String,
    #[serde(deserialize_with = "null_as_default::deserialize")]
    pub custom_text: String,
}

impl FrontPageCustomization {
    pub fn is_empty(&self) -> bool {
        self.full_names.is_empty()
            && self.initials.is_empty()
            && self.cover_image.is_empty()
            && self.date.is_empty()
            && self.custom_text.is_empty()
    }
}

/// Everything the customer fills in across the four checkout steps.
///
/// Serializes with the backend's camelCase field names so the submitted
/// payload can be posted as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OrderForm {
    #[serde(deserialize_with = "null_as_default::deserialize")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default::deserialize")]
    pub size: String,
    pub binding_type: Option<BindingType>,
    #[serde(deserialize_with = "null_as_default::deserialize")]
    pub paper_type: String,
    pub sheet_count: u32,
    #[serde(deserialize_with = "null_as_default::deserialize")]
    pub additional_paper: String,
    #[serde(deserialize_with = "null_as_default::deserialize")]
    pub album_color: String,
    pub box_type: Option<BoxType>,
    #[serde(deserialize_with = "null_as_default::deserialize")]
    pub bag_type: String,
    #[serde(deserialize_with = "null_as_default::deserialize")]
    pub calendar_type: String,
    pub acrylic_calendar: bool,
    pub replica_ebook: bool,
    #[serde(deserialize_with = "null_as_default::deserialize")]
    pub image_link: String,
    pub quantity: u32,
    #[serde(deserialize_with = "null_as_default::deserialize")]
    pub logo: String,
    #[serde(deserialize_with = "null_as_default::deserialize")]
    pub delivery_address: DeliveryAddress,
    #[serde(deserialize_with = "null_as_default::deserialize")]
    pub front_page_customization: FrontPageCustomization,
}

impl Default for OrderForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            size: String::new(),
            binding_type: Some(BindingType::Nt),
            paper_type: DEFAULT_PAPER_TYPE.to_string(),
            sheet_count: MIN_SHEET_COUNT,
            additional_paper: String::new(),
            album_color: String::new(),
            box_type: Some(BoxType::Regular),
            bag_type: String::new(),
            calendar_type: String::new(),
            acrylic_calendar: false,
            replica_ebook: false,
            image_link: String::new(),
            quantity: 1,
            logo: String::new(),
            delivery_address: DeliveryAddress::default(),
            front_page_customization: FrontPageCustomization::default(),
        }
    }
}

impl OrderForm {
    /// The fields the price depends on; `None` until a binding is chosen
    pub fn price_selection(&self, box_base_price: Option<Decimal>) -> Option<OrderSelection> {
        let binding_type = self.binding_type?;

        Some(OrderSelection {
            binding_type,
            paper_type: (!self.paper_type.is_empty()).then(|| self.paper_type.clone()),
            sheet_count: self.sheet_count,
            box_base_price,
        })
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_form_defaults() {
        let form = OrderForm::default();

        assert_eq!(form.binding_type, Some(BindingType::Nt));
        assert_eq!(form.paper_type, "Glossy");
        assert_eq!(form.sheet_count, 20);
        assert_eq!(form.box_type, Some(BoxType::Regular));
        assert_eq!(form.quantity, 1);
        assert_eq!(form.delivery_address.country, "India");
        assert!(form.front_page_customization.is_empty());
    }

    #[test]
    fn test_order_form_uses_backend_field_names() {
        let value = serde_json::to_value(OrderForm::default()).unwrap();

        assert_eq!(value["bindingType"], "NT");
        assert_eq!(value["paperType"], "Glossy");
        assert_eq!(value["sheetCount"], 20);
        assert_eq!(value["boxType"], "Regular");
        assert_eq!(value["deliveryAddress"]["country"], "India");
        assert!(value["frontPageCustomization"]["fullNames"].is_string());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let form: OrderForm = serde_json::from_str(r#"{"title": "Wedding"}"#).unwrap();

        assert_eq!(form.title, "Wedding");
        assert_eq!(form.sheet_count, 20);
        assert_eq!(form.delivery_address.country, "India");
    }

    #[test]
    fn test_box_types_serialize_by_name() {
        for box_type in BoxType::ALL {
            let json = serde_json::to_string(&box_type).unwrap();
            assert_eq!(json, format!("\"{}\"", box_type.as_str()));
        }
    }

    #[test]
    fn test_null_fields_fall_back_to_defaults() {
        let form: OrderForm = serde_json::from_str(
            r#"{
                "title": null,
                "size": "12x12",
                "deliveryAddress": { "city": null, "state": "Goa" },
                "frontPageCustomization": null
            }"#,
        )
        .unwrap();

        assert_eq!(form.title, "");
        assert_eq!(form.size, "12x12");
        assert_eq!(form.delivery_address.city, "");
        assert_eq!(form.delivery_address.state, "Goa");
        assert!(form.front_page_customization.is_empty());
    }

    #[test]
    fn test_address_completeness_ignores_country() {
        let mut address = DeliveryAddress {
            name: "Asha".to_string(),
            phone: "9876543210".to_string(),
            address: "12 MG Road".to_string(),
            city: "Pune".to_string(),
            state: "Maharashtra".to_string(),
            pincode: "411001".to_string(),
            country: String::new(),
        };
        assert!(address.is_complete());

        address.pincode.clear();
        assert!(!address.is_complete());
    }

    #[test]
    fn test_price_selection_requires_binding() {
        let mut form = OrderForm::default();
        let selection = form.price_selection(Some(Decimal::from(500))).unwrap();
        assert_eq!(selection.paper_type.as_deref(), Some("Glossy"));
        assert_eq!(selection.box_base_price, Some(Decimal::from(500)));

        form.paper_type.clear();
        assert_eq!(form.price_selection(None).unwrap().paper_type, None);

        form.binding_type = None;
        assert!(form.price_selection(None).is_none());
    }
}
