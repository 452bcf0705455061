//! Offer models
//!
//! An offer is the price and stock a supplier quotes for one lot of a product.
//! Field names on the wire follow the backend's camelCase Spanish naming.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A supplier offer for one product lot, as stored by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    /// Opaque identifier encoding the product, supplier and lot tuple
    #[serde(rename = "idProductoProveedorLote")]
    pub id: i64,
    #[serde(rename = "idProducto")]
    pub product_id: i64,
    #[serde(rename = "idProveedor")]
    pub supplier_id: i64,
    #[serde(rename = "numeroLote")]
    pub lot_number: Option<String>,
    #[serde(rename = "precioUnitario", with = "rust_decimal::serde::float")]
    pub unit_price: Decimal,
    #[serde(rename = "stockDisponible")]
    pub available_stock: i32,
    #[serde(rename = "stockReservado")]
    pub reserved_stock: i32,
    #[serde(rename = "moneda")]
    pub currency: Option<String>,
    /// ISO-8601 instant, kept as text so backend precision is not altered
    #[serde(rename = "fechaVencimiento")]
    pub expires_at: Option<String>,
    /// `false` once the offer has been soft-deleted
    #[serde(rename = "activo")]
    pub active: bool,
}

/// Create payload: an offer without identifier, assigned by the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewOffer {
    #[serde(rename = "idProducto")]
    pub product_id: i64,
    #[serde(rename = "idProveedor")]
    pub supplier_id: i64,
    #[serde(rename = "numeroLote")]
    pub lot_number: Option<String>,
    #[serde(rename = "precioUnitario", with = "rust_decimal::serde::float")]
    pub unit_price: Decimal,
    #[serde(rename = "stockDisponible")]
    pub available_stock: i32,
    #[serde(rename = "stockReservado")]
    pub reserved_stock: i32,
    #[serde(rename = "moneda")]
    pub currency: Option<String>,
    #[serde(rename = "fechaVencimiento")]
    pub expires_at: Option<String>,
    #[serde(rename = "activo")]
    pub active: bool,
}

impl NewOffer {
    /// Attach an identifier, producing a full-replacement update payload
    pub fn with_id(self, id: i64) -> Offer {
        Offer {
            id,
            product_id: self.product_id,
            supplier_id: self.supplier_id,
            lot_number: self.lot_number,
            unit_price: self.unit_price,
            available_stock: self.available_stock,
            reserved_stock: self.reserved_stock,
            currency: self.currency,
            expires_at: self.expires_at,
            active: self.active,
        }
    }
}

/// Validated submission produced by the offer form
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OfferPayload {
    Create(NewOffer),
    Update(Offer),
}

impl OfferPayload {
    pub fn is_update(&self) -> bool {
        matches!(self, OfferPayload::Update(_))
    }
}

/// Currency preselected for new offers
pub const DEFAULT_CURRENCY: &str = "USD";
