//! Offer create/edit form state

use serde::{Deserialize, Serialize};

use crate::models::{NewOffer, Offer, OfferPayload, DEFAULT_CURRENCY};
use crate::types::UNSELECTED;
use crate::validation::{
    datetime_input_value, parse_price, parse_stock, price_input_value, to_iso_or_null,
    trimmed_or_null, OfferValidationError,
};

/// Raw values of the offer modal, as typed by the user
///
/// `id` is `None` while creating and carries the edited offer's identifier
/// otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferForm {
    pub id: Option<i64>,
    pub product_id: i64,
    /// `UNSELECTED` until a supplier is picked
    pub supplier_id: i64,
    pub lot_number: String,
    pub unit_price: String,
    pub available_stock: String,
    pub reserved_stock: String,
    pub currency: String,
    /// `YYYY-MM-DDTHH:MM` or empty
    pub expires_at: String,
    pub active: bool,
}

impl OfferForm {
    /// Blank form for a new offer of `product_id`
    pub fn blank(product_id: i64) -> Self {
        Self {
            id: None,
            product_id,
            supplier_id: UNSELECTED,
            lot_number: String::new(),
            unit_price: "0".to_string(),
            available_stock: "0".to_string(),
            reserved_stock: "0".to_string(),
            currency: DEFAULT_CURRENCY.to_string(),
            expires_at: String::new(),
            active: true,
        }
    }

    /// Form prefilled from an existing offer
    pub fn from_offer(offer: &Offer) -> Self {
        Self {
            id: Some(offer.id),
            product_id: offer.product_id,
            supplier_id: offer.supplier_id,
            lot_number: offer.lot_number.clone().unwrap_or_default(),
            unit_price: price_input_value(offer.unit_price),
            available_stock: offer.available_stock.to_string(),
            reserved_stock: offer.reserved_stock.to_string(),
            currency: offer
                .currency
                .clone()
                .unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
            expires_at: offer
                .expires_at
                .as_deref()
                .map(datetime_input_value)
                .unwrap_or_default(),
            active: offer.active,
        }
    }

    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    /// Validate the form and build the normalized submission
    ///
    /// Rules run in order and stop at the first failure: supplier, price,
    /// available stock, reserved stock.
    pub fn validate(&self) -> Result<OfferPayload, OfferValidationError> {
        if self.supplier_id <= UNSELECTED {
            return Err(OfferValidationError::SupplierRequired);
        }
        let unit_price =
            parse_price(&self.unit_price).ok_or(OfferValidationError::InvalidPrice)?;
        let available_stock = parse_stock(&self.available_stock)
            .ok_or(OfferValidationError::InvalidAvailableStock)?;
        let reserved_stock = parse_stock(&self.reserved_stock)
            .ok_or(OfferValidationError::InvalidReservedStock)?;

        let offer = NewOffer {
            product_id: self.product_id,
            supplier_id: self.supplier_id,
            lot_number: trimmed_or_null(&self.lot_number),
            unit_price,
            available_stock,
            reserved_stock,
            currency: trimmed_or_null(&self.currency),
            expires_at: to_iso_or_null(&self.expires_at),
            active: self.active,
        };

        Ok(match self.id {
            None => OfferPayload::Create(offer),
            Some(id) => OfferPayload::Update(offer.with_id(id)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn valid_form() -> OfferForm {
        OfferForm {
            supplier_id: 3,
            ..OfferForm::blank(7)
        }
    }

    fn stored_offer() -> Offer {
        Offer {
            id: 701,
            product_id: 7,
            supplier_id: 3,
            lot_number: Some("L-01".to_string()),
            unit_price: Decimal::from_str("19.99").unwrap(),
            available_stock: 5,
            reserved_stock: 0,
            currency: None,
            expires_at: Some("2025-03-01T10:30:00.000Z".to_string()),
            active: true,
        }
    }

    #[test]
    fn test_blank_form_defaults() {
        let form = OfferForm::blank(7);
        assert!(form.is_new());
        assert_eq!(form.product_id, 7);
        assert_eq!(form.supplier_id, UNSELECTED);
        assert_eq!(form.unit_price, "0");
        assert_eq!(form.available_stock, "0");
        assert_eq!(form.reserved_stock, "0");
        assert_eq!(form.currency, "USD");
        assert!(form.expires_at.is_empty());
        assert!(form.active);
    }

    #[test]
    fn test_from_offer_converts_fields_to_text() {
        let form = OfferForm::from_offer(&stored_offer());
        assert_eq!(form.id, Some(701));
        assert_eq!(form.lot_number, "L-01");
        assert_eq!(form.unit_price, "19.99");
        assert_eq!(form.available_stock, "5");
        assert_eq!(form.reserved_stock, "0");
        assert_eq!(form.currency, "USD");
        assert_eq!(form.expires_at, "2025-03-01T10:30");
    }

    #[test]
    fn test_supplier_checked_before_anything_else() {
        let form = OfferForm {
            unit_price: "abc".to_string(),
            available_stock: "-1".to_string(),
            ..OfferForm::blank(7)
        };
        assert_eq!(form.validate(), Err(OfferValidationError::SupplierRequired));
    }

    #[test]
    fn test_rules_short_circuit_in_order() {
        let mut form = valid_form();
        form.unit_price = "-0.01".to_string();
        form.available_stock = "2.5".to_string();
        assert_eq!(form.validate(), Err(OfferValidationError::InvalidPrice));

        form.unit_price = "1".to_string();
        assert_eq!(form.validate(), Err(OfferValidationError::InvalidAvailableStock));

        form.available_stock = "1".to_string();
        form.reserved_stock = String::new();
        assert_eq!(form.validate(), Err(OfferValidationError::InvalidReservedStock));
    }

    #[test]
    fn test_validation_messages_are_localized() {
        assert_eq!(
            OfferValidationError::SupplierRequired.to_string(),
            "Seleccione un proveedor."
        );
        assert_eq!(OfferValidationError::InvalidPrice.to_string(), "Precio inválido.");
        assert_eq!(
            OfferValidationError::InvalidAvailableStock.to_string(),
            "Stock disponible inválido."
        );
        assert_eq!(
            OfferValidationError::InvalidReservedStock.to_string(),
            "Stock reservado inválido."
        );
    }

    #[test]
    fn test_create_payload_normalizes_text() {
        let form = OfferForm {
            lot_number: "  ".to_string(),
            currency: " eur ".to_string(),
            expires_at: "not a date".to_string(),
            ..valid_form()
        };
        match form.validate().unwrap() {
            OfferPayload::Create(offer) => {
                assert_eq!(offer.lot_number, None);
                assert_eq!(offer.currency.as_deref(), Some("eur"));
                assert_eq!(offer.expires_at, None);
                assert_eq!(offer.supplier_id, 3);
            }
            other => panic!("expected create payload, got {:?}", other),
        }
    }

    #[test]
    fn test_edit_round_trip_produces_update() {
        let form = OfferForm::from_offer(&stored_offer());
        match form.validate().unwrap() {
            OfferPayload::Update(offer) => {
                assert_eq!(offer.id, 701);
                assert_eq!(offer.unit_price, Decimal::from_str("19.99").unwrap());
                assert_eq!(offer.available_stock, 5);
                assert_eq!(offer.reserved_stock, 0);
                assert_eq!(offer.currency.as_deref(), Some("USD"));
                assert_eq!(
                    offer.expires_at.as_deref(),
                    Some("2025-03-01T10:30:00.000Z")
                );
            }
            other => panic!("expected update payload, got {:?}", other),
        }
    }
}
