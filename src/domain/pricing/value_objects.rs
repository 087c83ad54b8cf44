use std::collections::BTreeMap;
use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ============================================================================
// Pricing Value Objects
// ============================================================================

/// Album construction method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BindingType {
    /// Normal binding, priced per paper type
    #[serde(rename = "NT")]
    Nt,
    /// Flat-rate binding
    #[serde(rename = "Layflat")]
    Layflat,
}

impl BindingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BindingType::Nt => "NT",
            BindingType::Layflat => "Layflat",
        }
    }
}

impl fmt::Display for BindingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Album orientation, in the order the storefront presents them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Square,
    Portrait,
    Landscape,
}

impl Orientation {
    pub const ALL: [Orientation; 3] = [
        Orientation::Square,
        Orientation::Portrait,
        Orientation::Landscape,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Square => "Square",
            Orientation::Portrait => "Portrait",
            Orientation::Landscape => "Landscape",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlbumColor {
    pub name: String,
    pub hex: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayflatPricing {
    pub price_per_sheet: Decimal,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NtPricing {
    #[serde(default)]
    pub paper_types: BTreeMap<String, Decimal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetTypes {
    #[serde(rename = "Layflat")]
    pub layflat: LayflatPricing,
    #[serde(rename = "NT")]
    pub nt: NtPricing,
}

/// Album pricing as served by the pricing endpoint; read-only for the session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingTable {
    pub sheet_types: SheetTypes,
    #[serde(default)]
    pub sizes: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub colors: Vec<AlbumColor>,
}

/// The inputs that drive the live price
#[derive(Debug, Clone, PartialEq)]
pub struct OrderSelection {
    pub binding_type: BindingType,
    pub paper_type: Option<String>,
    pub sheet_count: u32,
    pub box_base_price: Option<Decimal>,
}

/// Derived on every relevant edit; never persisted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    pub sheet_cost: Decimal,
    pub cover_box_cost: Decimal,
    pub total_price: Decimal,
}

// ============================================================================
// Unit Tests
// ============================================================================
