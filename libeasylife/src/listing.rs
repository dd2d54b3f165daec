//! Product listing drafts
//!
//! A seller fills in a draft field by field, confirms the simulated QR scan,
//! and submits. The draft is turned into a [`NewProduct`] only when every
//! check passes; otherwise it is left exactly as it was.

use crate::error::ListingError;
use crate::types::NewProduct;

/// Form contents of the create-product page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductDraft {
    pub name: String,
    /// Price as typed, parsed on submit
    pub price: String,
    pub description: String,
    /// Image URL; blank means the placeholder image
    pub image: String,
    /// Set by the scan dialog; no real scanning happens
    pub qr_scanned: bool,
}

impl ProductDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Confirm the simulated QR scan
    pub fn confirm_scan(&mut self) {
        self.qr_scanned = true;
    }

    /// Name and price are filled in
    pub fn has_required_fields(&self) -> bool {
        !self.name.is_empty() && !self.price.is_empty()
    }

    /// Whether the submit control is enabled
    pub fn can_submit(&self) -> bool {
        self.has_required_fields() && self.qr_scanned
    }

    /// Validate the draft and build the product fields.
    ///
    /// The scan check runs first so a missing scan is reported even when
    /// other fields are incomplete.
    pub fn to_new_product(&self, default_image: &str) -> Result<NewProduct, ListingError> {
        if !self.qr_scanned {
            return Err(ListingError::QrNotScanned);
        }
        if self.name.is_empty() {
            return Err(ListingError::EmptyName);
        }
        if self.price.is_empty() {
            return Err(ListingError::EmptyPrice);
        }
        let price = parse_price(&self.price)?;

        let image = if self.image.trim().is_empty() {
            default_image.to_string()
        } else {
            self.image.trim().to_string()
        };

        Ok(NewProduct {
            name: self.name.clone(),
            price,
            image,
            description: self.description.clone(),
        })
    }
}

/// Parse price text into a finite, non-negative number.
///
/// Surrounding whitespace is ignored and a comma is accepted as the decimal
/// separator, matching how prices are displayed.
pub fn parse_price(input: &str) -> Result<f64, ListingError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ListingError::EmptyPrice);
    }

    let value: f64 = trimmed
        .replace(',', ".")
        .parse()
        .map_err(|_| ListingError::InvalidPrice(trimmed.to_string()))?;

    if !value.is_finite() {
        return Err(ListingError::InvalidPrice(trimmed.to_string()));
    }
    if value < 0.0 {
        return Err(ListingError::NegativePrice);
    }
    Ok(value)
}
