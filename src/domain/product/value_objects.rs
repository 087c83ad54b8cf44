use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::checkout::FrontPageField;
use crate::serde_helpers::lenient_amount;

// ============================================================================
// Product Value Objects
// ============================================================================

/// Which front-page customization fields a product offers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FrontPageOptions {
    pub show_full_names: bool,
    pub show_initials: bool,
    pub show_image: bool,
    pub show_date: bool,
    pub show_custom_text: bool,
}

impl FrontPageOptions {
    pub fn exposes(&self, field: FrontPageField) -> bool {
        match field {
            FrontPageField::FullNames => self.show_full_names,
            FrontPageField::Initials => self.show_initials,
            FrontPageField::CoverImage => self.show_image,
            FrontPageField::Date => self.show_date,
            FrontPageField::CustomText => self.show_custom_text,
        }
    }

    /// Offered fields in display order
    pub fn exposed_fields(&self) -> Vec<FrontPageField> {
        [
            FrontPageField::FullNames,
            FrontPageField::Initials,
            FrontPageField::CoverImage,
            FrontPageField::Date,
            FrontPageField::CustomText,
        ]
        .into_iter()
        .filter(|field| self.exposes(*field))
        .collect()
    }

    /// The customization section is shown only if at least one field is offered
    pub fn any(&self) -> bool {
        self.show_full_names
            || self.show_initials
            || self.show_image
            || self.show_date
            || self.show_custom_text
    }
}

/// A catalogue album product as returned by the products endpoint
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id", alias = "id", skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub name: String,
    pub description: String,
    pub image: String,
    pub gallery: Vec<String>,
    pub features: Vec<String>,
    pub benefits: Vec<String>,
    #[serde(deserialize_with = "lenient_amount::deserialize")]
    pub price: Option<Decimal>,
    /// Box/PAD packaging cost, added once per order
    #[serde(deserialize_with = "lenient_amount::deserialize")]
    pub box_price: Option<Decimal>,
    pub front_page_options: FrontPageOptions,
}

// ============================================================================
// Unit Tests
// ============================================================================
