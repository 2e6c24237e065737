//! Business profile (issuer settings) model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::invoice::types::{PriceMode, TaxConfig};

/// How the tutor prefers to enter prices
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum PriceInputType {
    /// Tax-inclusive entry
    #[default]
    #[serde(rename = "BRUTTO")]
    Brutto,
    /// Tax-exclusive entry
    #[serde(rename = "NETTO")]
    Netto,
}

impl From<PriceInputType> for PriceMode {
    fn from(value: PriceInputType) -> Self {
        match value {
            PriceInputType::Brutto => PriceMode::Gross,
            PriceInputType::Netto => PriceMode::Net,
        }
    }
}

/// Issuer data printed on invoices, one profile per tutor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessProfile {
    pub company_name: String,
    pub manager_name: String,
    pub street: String,
    pub postcode: String,
    pub city: String,
    pub country: String,
    pub phone: String,
    pub email: String,
    pub website: String,
    pub tax_number: String,
    /// USt-IdNr., optional for small businesses
    pub vat_id: String,
    /// §19 UStG flag - invoices carry no VAT when set
    pub is_small_business: bool,
    pub price_input_type: PriceInputType,
    pub bank_name: String,
    pub account_holder: String,
    pub iban: String,
    pub bic: String,
    pub logo_url: Option<String>,
    /// Default header text for new invoices
    pub default_intro_text: String,
}

impl BusinessProfile {
    /// Tax configuration derived from the profile; the document default
    /// rate is the German standard rate.
    pub fn tax_config(&self) -> TaxConfig {
        TaxConfig {
            is_small_business: self.is_small_business,
            vat_rate: Decimal::from(19),
        }
    }
}

/// Update payload for the business profile (PUT, full replace)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessProfileUpdate {
    pub company_name: String,
    pub manager_name: String,
    pub street: String,
    pub postcode: String,
    pub city: String,
    pub country: String,
    pub phone: String,
    pub email: String,
    pub website: String,
    pub tax_number: String,
    pub vat_id: String,
    pub is_small_business: bool,
    pub price_input_type: PriceInputType,
    pub bank_name: String,
    pub account_holder: String,
    pub iban: String,
    pub bic: String,
    pub default_intro_text: String,
}
