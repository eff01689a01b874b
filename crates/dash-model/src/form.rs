//! Editable product form and client-side validation.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::product::Product;
use crate::record::RecordId;

// =============================================================================
// FIELDS
// =============================================================================

/// Editable product fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Title,
    Description,
    Price,
    Quantity,
    Category,
}

impl FormField {
    /// All fields in form order.
    pub const ALL: [FormField; 5] = [
        Self::Title,
        Self::Description,
        Self::Price,
        Self::Quantity,
        Self::Category,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Description => "Description",
            Self::Price => "Price",
            Self::Quantity => "Quantity",
            Self::Category => "Category",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Validation failure for one field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{0} is required")]
    Required(FormField),

    #[error("{0} must be a number")]
    NotANumber(FormField),

    #[error("{0} must be a whole number")]
    NotAnInteger(FormField),

    #[error("{0} cannot be negative")]
    Negative(FormField),
}

/// Validation errors keyed by field, rendered inline.
pub type FormErrors = BTreeMap<FormField, FieldError>;

// =============================================================================
// FORM
// =============================================================================

/// Mutable projection of a product's editable fields.
///
/// Values are kept as entered so a failed submit preserves exactly what the
/// user typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    pub title: String,
    pub description: String,
    pub price: String,
    pub quantity: String,
    pub category: Option<RecordId>,
}

/// Payload of the update endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdate {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub quantity: u32,
    pub category_id: RecordId,
    /// Injected identifier of the user making the change.
    pub modified_by: String,
}

impl ProductForm {
    /// Populate the form from a product's current values.
    pub fn from_product(product: &Product) -> Self {
        Self {
            title: product.title.clone(),
            description: product.description.clone(),
            price: product.price.to_string(),
            quantity: product.quantity.to_string(),
            category: product.category.as_ref().map(|c| c.id.clone()),
        }
    }

    /// Current text of a field. The category is reported by id.
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.title,
            FormField::Description => &self.description,
            FormField::Price => &self.price,
            FormField::Quantity => &self.quantity,
            FormField::Category => self.category.as_ref().map_or("", RecordId::as_str),
        }
    }

    /// Replace the text of a field. An empty category clears it.
    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Title => self.title = value,
            FormField::Description => self.description = value,
            FormField::Price => self.price = value,
            FormField::Quantity => self.quantity = value,
            FormField::Category => {
                self.category = (!value.trim().is_empty()).then(|| RecordId::new(value));
            }
        }
    }

    /// Validate every field and build the update payload.
    ///
    /// All failing fields are reported at once.
    pub fn validate(&self, modified_by: &str) -> Result<ProductUpdate, FormErrors> {
        let mut errors = FormErrors::new();

        for field in FormField::ALL {
            if self.value(field).trim().is_empty() {
                errors.insert(field, FieldError::Required(field));
            }
        }

        let price = match parse_price(&self.price) {
            Ok(price) => price,
            Err(e) => {
                errors.entry(FormField::Price).or_insert(e);
                0.0
            }
        };

        let quantity = match parse_quantity(&self.quantity) {
            Ok(quantity) => quantity,
            Err(e) => {
                errors.entry(FormField::Quantity).or_insert(e);
                0
            }
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(ProductUpdate {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            price,
            quantity,
            category_id: self.category.clone().unwrap_or_default(),
            modified_by: modified_by.to_string(),
        })
    }
}

fn parse_price(raw: &str) -> Result<f64, FieldError> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| FieldError::NotANumber(FormField::Price))?;
    if !value.is_finite() {
        return Err(FieldError::NotANumber(FormField::Price));
    }
    if value < 0.0 {
        return Err(FieldError::Negative(FormField::Price));
    }
    Ok(value)
}

fn parse_quantity(raw: &str) -> Result<u32, FieldError> {
    let trimmed = raw.trim();
    if trimmed.starts_with('-') {
        return Err(FieldError::Negative(FormField::Quantity));
    }
    trimmed
        .parse()
        .map_err(|_| FieldError::NotAnInteger(FormField::Quantity))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::Category;

    fn sample_product() -> Product {
        Product {
            id: RecordId::from(1u64),
            title: "Desk".into(),
            description: "Oak desk".into(),
            price: 120.5,
            quantity: 3,
            category: Some(Category {
                id: RecordId::from(9u64),
                title: "Office".into(),
            }),
            creator_id: "u1".into(),
        }
    }

    #[test]
    fn test_round_trip_from_product() {
        let form = ProductForm::from_product(&sample_product());
        let update = form.validate("u1").unwrap();
        assert_eq!(update.title, "Desk");
        assert_eq!(update.price, 120.5);
        assert_eq!(update.quantity, 3);
        assert_eq!(update.category_id.as_str(), "9");
        assert_eq!(update.modified_by, "u1");
    }

    #[test]
    fn test_all_empty_fields_reported() {
        let errors = ProductForm::default().validate("u1").unwrap_err();
        for field in FormField::ALL {
            assert_eq!(errors.get(&field), Some(&FieldError::Required(field)));
        }
    }

    #[test]
    fn test_whitespace_counts_as_empty() {
        let mut form = ProductForm::from_product(&sample_product());
        form.set(FormField::Title, "   ".into());
        let errors = form.validate("u1").unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors.contains_key(&FormField::Title));
    }

    #[test]
    fn test_numeric_errors() {
        let mut form = ProductForm::from_product(&sample_product());
        form.set(FormField::Price, "abc".into());
        form.set(FormField::Quantity, "-2".into());
        let errors = form.validate("u1").unwrap_err();
        assert_eq!(
            errors.get(&FormField::Price),
            Some(&FieldError::NotANumber(FormField::Price))
        );
        assert_eq!(
            errors.get(&FormField::Quantity),
            Some(&FieldError::Negative(FormField::Quantity))
        );

        form.set(FormField::Quantity, "2.5".into());
        let errors = form.validate("u1").unwrap_err();
        assert_eq!(
            errors.get(&FormField::Quantity),
            Some(&FieldError::NotAnInteger(FormField::Quantity))
        );
    }

    #[test]
    fn test_clearing_category() {
        let mut form = ProductForm::from_product(&sample_product());
        form.set(FormField::Category, String::new());
        assert!(form.category.is_none());
        assert!(form.validate("u1").unwrap_err().contains_key(&FormField::Category));
    }

    #[test]
    fn test_update_payload_json() {
        let update = ProductForm::from_product(&sample_product())
            .validate("u7")
            .unwrap();
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json["categoryId"], "9");
        assert_eq!(json["modifiedBy"], "u7");
        assert_eq!(json["quantity"], 3);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            FieldError::Required(FormField::Title).to_string(),
            "Title is required"
        );
    }
}
