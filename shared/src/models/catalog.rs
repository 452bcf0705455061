//! Reference catalog models (products and suppliers)

use serde::{Deserialize, Serialize};

/// A product offers are attached to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "idProducto")]
    pub id: i64,
    #[serde(rename = "nombre", default)]
    pub name: Option<String>,
    #[serde(rename = "activo")]
    pub active: bool,
}

/// A supplier quoting offers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    #[serde(rename = "idProveedor")]
    pub id: i64,
    #[serde(rename = "nombre", default)]
    pub name: Option<String>,
    #[serde(rename = "activo")]
    pub active: bool,
}

/// Common view over selectable reference entities
pub trait CatalogEntry {
    fn id(&self) -> i64;
    fn name(&self) -> Option<&str>;
    fn is_active(&self) -> bool;

    /// Name to show in selectors and tables, `#<id>` when unnamed
    fn display_name(&self) -> String {
        crate::types::display_name(self.id(), self.name())
    }
}

impl CatalogEntry for Product {
    fn id(&self) -> i64 {
        self.id
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn is_active(&self) -> bool {
        self.active
    }
}

impl CatalogEntry for Supplier {
    fn id(&self) -> i64 {
        self.id
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn is_active(&self) -> bool {
        self.active
    }
}

/// Keep only the entries that may be selected
pub fn active_only<T: CatalogEntry>(entries: Vec<T>) -> Vec<T> {
    entries.into_iter().filter(|entry| entry.is_active()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_falls_back_to_id() {
        let supplier = Supplier {
            id: 12,
            name: None,
            active: true,
        };
        assert_eq!(supplier.display_name(), "#12");

        let product = Product {
            id: 7,
            name: Some("Harina 1kg".to_string()),
            active: true,
        };
        assert_eq!(product.display_name(), "Harina 1kg");
    }

    #[test]
    fn test_active_only_keeps_order() {
        let products = vec![
            Product { id: 1, name: None, active: false },
            Product { id: 2, name: None, active: true },
            Product { id: 3, name: None, active: true },
        ];
        let ids: Vec<i64> = active_only(products).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn test_missing_name_deserializes_as_none() {
        let supplier: Supplier =
            serde_json::from_str(r#"{"idProveedor": 4, "activo": true}"#).unwrap();
        assert!(supplier.name.is_none());
    }
}
